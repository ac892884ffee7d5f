// TestDependencies - mock implementations for testing
//
// Provides a recording post store that can be injected into a Reconciler.

use async_trait::async_trait;
use posts_client::{Post, PostsError, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::BasePostStore;

/// A call received by [`MockPostStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List,
    Create { title: String, body: String },
    Update { id: i64, title: String, body: String },
    Delete { id: i64 },
}

/// First id handed out by `create_post` when no response is queued.
const FIRST_CREATED_ID: i64 = 101;

/// In-memory post store with scripted responses.
///
/// Queued responses are returned in order. When a queue is empty the mock
/// falls back to echo behaviour: empty listings, created posts with fresh
/// ids, updates that echo the request and deletes that succeed.
#[derive(Clone)]
pub struct MockPostStore {
    list_responses: Arc<Mutex<VecDeque<Result<Vec<Post>>>>>,
    create_responses: Arc<Mutex<VecDeque<Result<Post>>>>,
    update_responses: Arc<Mutex<VecDeque<Result<Post>>>>,
    delete_responses: Arc<Mutex<VecDeque<Result<()>>>>,
    next_id: Arc<Mutex<i64>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
}

impl Default for MockPostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPostStore {
    pub fn new() -> Self {
        Self {
            list_responses: Arc::new(Mutex::new(VecDeque::new())),
            create_responses: Arc::new(Mutex::new(VecDeque::new())),
            update_responses: Arc::new(Mutex::new(VecDeque::new())),
            delete_responses: Arc::new(Mutex::new(VecDeque::new())),
            next_id: Arc::new(Mutex::new(FIRST_CREATED_ID)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful listing
    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        self.list_responses.lock().unwrap().push_back(Ok(posts));
        self
    }

    /// Queue a failed listing
    pub fn with_list_error(self, error: PostsError) -> Self {
        self.list_responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queue the post returned by the next create
    pub fn with_created(self, post: Post) -> Self {
        self.create_responses.lock().unwrap().push_back(Ok(post));
        self
    }

    pub fn with_create_error(self, error: PostsError) -> Self {
        self.create_responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queue the post returned by the next update
    pub fn with_updated(self, post: Post) -> Self {
        self.update_responses.lock().unwrap().push_back(Ok(post));
        self
    }

    pub fn with_update_error(self, error: PostsError) -> Self {
        self.update_responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn with_delete_error(self, error: PostsError) -> Self {
        self.delete_responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Get all calls received so far
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Shorthand for building posts in tests.
pub fn post(id: i64, title: &str, body: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: body.to_string(),
        user_id: 1,
    }
}

#[async_trait]
impl BasePostStore for MockPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.record(StoreCall::List);
        self.list_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_post(&self, title: &str, body: &str) -> Result<Post> {
        self.record(StoreCall::Create {
            title: title.to_string(),
            body: body.to_string(),
        });

        if let Some(response) = self.create_responses.lock().unwrap().pop_front() {
            return response;
        }

        let mut next_id = self.next_id.lock().unwrap();
        let created = post(*next_id, title, body);
        *next_id += 1;
        Ok(created)
    }

    async fn update_post(&self, id: i64, title: &str, body: &str) -> Result<Post> {
        self.record(StoreCall::Update {
            id,
            title: title.to_string(),
            body: body.to_string(),
        });

        self.update_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(post(id, title, body)))
    }

    async fn delete_post(&self, id: i64) -> Result<()> {
        self.record(StoreCall::Delete { id });
        self.delete_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}
