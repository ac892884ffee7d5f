use std::fmt;

use posts_client::Post;

use super::filter::PostFilter;

/// Lifecycle of a session's collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Initial load failed; terminal for the session.
    Error(String),
}

impl LoadState {
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Ready => "ready",
            LoadState::Error(_) => "failed",
        }
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Session-scoped posts state, owned by the front-end.
///
/// Only [`Reconciler`](crate::Reconciler) mutates a session. Readers get the
/// collection, the derived view and the status of the last operation.
#[derive(Clone, Debug, Default)]
pub struct Session {
    posts: Vec<Post>,
    filter: PostFilter,
    state: LoadState,
    last_error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a filter already in place.
    pub fn with_filter(criterion: impl Into<String>) -> Self {
        Self {
            filter: PostFilter::new(criterion),
            ..Self::default()
        }
    }

    /// The full collection, in reconciled order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn filter(&self) -> &PostFilter {
        &self.filter
    }

    /// The filtered view, recomputed from the current collection and filter.
    pub fn view(&self) -> Vec<&Post> {
        self.filter.apply(&self.posts)
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// User-facing message from the most recent failed operation.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(crate) fn load(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.state = LoadState::Ready;
        self.last_error = None;
    }

    pub(crate) fn fail_load(&mut self, message: &str) {
        self.posts.clear();
        self.state = LoadState::Error(message.to_string());
        self.last_error = Some(message.to_string());
    }

    pub(crate) fn report_failure(&mut self, message: &str) {
        self.last_error = Some(message.to_string());
    }

    pub(crate) fn clear_failure(&mut self) {
        self.last_error = None;
    }

    pub(crate) fn set_filter(&mut self, filter: PostFilter) {
        self.filter = filter;
    }

    /// Index of the post with `id`, if present.
    pub(crate) fn position(&self, id: i64) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }

    /// Append `post`, or replace in place when its id is already present.
    /// Returns true when the post was appended.
    pub(crate) fn upsert(&mut self, post: Post) -> bool {
        match self.position(post.id) {
            Some(index) => {
                self.posts[index] = post;
                false
            }
            None => {
                self.posts.push(post);
                true
            }
        }
    }

    /// Replace the post with the same id. Returns false when absent.
    pub(crate) fn replace(&mut self, post: Post) -> bool {
        match self.position(post.id) {
            Some(index) => {
                self.posts[index] = post;
                true
            }
            None => false,
        }
    }

    /// Remove the post with `id`. Returns false when absent.
    pub(crate) fn remove(&mut self, id: i64) -> bool {
        match self.position(id) {
            Some(index) => {
                self.posts.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::post;

    fn ready(ids: &[i64]) -> Session {
        let mut session = Session::new();
        session.load(ids.iter().map(|&id| post(id, "t", "b")).collect());
        session
    }

    fn ids(session: &Session) -> Vec<i64> {
        session.posts().iter().map(|p| p.id).collect()
    }

    #[test]
    fn new_session_is_loading_and_empty() {
        let session = Session::new();
        assert_eq!(session.state(), &LoadState::Loading);
        assert!(session.posts().is_empty());
        assert!(session.view().is_empty());
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn upsert_appends_new_and_replaces_existing() {
        let mut session = ready(&[1, 2]);

        assert!(session.upsert(post(3, "new", "b")));
        assert!(!session.upsert(post(1, "changed", "b")));

        assert_eq!(ids(&session), vec![1, 2, 3]);
        assert_eq!(session.get(1).unwrap().title, "changed");
    }

    #[test]
    fn remove_preserves_order() {
        let mut session = ready(&[1, 2, 3, 4]);

        assert!(session.remove(2));
        assert!(!session.remove(2));

        assert_eq!(ids(&session), vec![1, 3, 4]);
    }

    #[test]
    fn view_follows_collection_changes() {
        let mut session = ready(&[1, 2]);
        session.set_filter(PostFilter::new("3"));
        assert!(session.view().is_empty());

        session.upsert(post(3, "t", "b"));

        let view: Vec<i64> = session.view().iter().map(|p| p.id).collect();
        assert_eq!(view, vec![3]);
    }

    #[test]
    fn failed_load_clears_collection() {
        let mut session = ready(&[1]);
        session.fail_load("Error retrieving posts.");

        assert!(session.posts().is_empty());
        assert_eq!(
            session.state(),
            &LoadState::Error("Error retrieving posts.".into())
        );
        assert_eq!(session.state().to_string(), "failed");
    }
}
