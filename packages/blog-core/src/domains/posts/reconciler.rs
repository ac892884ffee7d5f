//! Applies remote post store outcomes to a session's collection.

use std::collections::HashSet;
use std::sync::Arc;

use posts_client::Post;
use tracing::{info, warn};

use super::error::{FailureCause, Operation, ReconcileError, Result};
use super::models::filter::PostFilter;
use super::models::session::{LoadState, Session};
use crate::kernel::BasePostStore;

/// Keeps a [`Session`] consistent with the remote post store.
///
/// Each operation makes at most one store call and touches the collection
/// only after that call succeeds. The session is borrowed mutably for the
/// whole operation, so operations on one session never interleave.
#[derive(Clone)]
pub struct Reconciler {
    store: Arc<dyn BasePostStore>,
}

impl Reconciler {
    pub fn new(store: Arc<dyn BasePostStore>) -> Self {
        Self { store }
    }

    /// Load the collection. Only valid on a session that is still loading;
    /// failure moves the session to [`LoadState::Error`] for good.
    pub async fn initialize(&self, session: &mut Session) -> Result<()> {
        if session.state() != &LoadState::Loading {
            return Err(invalid_state(Operation::Initialize, session));
        }

        match self.store.list_posts().await {
            Ok(posts) => {
                let posts = dedup_by_id(posts);
                info!(count = posts.len(), "Posts loaded");
                session.load(posts);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load posts");
                session.fail_load(Operation::Initialize.failure_message());
                Err(ReconcileError::InitializeFailed(e))
            }
        }
    }

    /// Create a post and append the stored version to the collection.
    pub async fn add(&self, session: &mut Session, title: &str, body: &str) -> Result<Post> {
        ensure_ready(Operation::Add, session)?;

        let created = match self.store.create_post(title, body).await {
            Ok(post) => post,
            Err(e) => return Err(fail(session, Operation::Add, e.into())),
        };

        if !session.upsert(created.clone()) {
            warn!(post_id = created.id, "Store reused an existing id, replaced in place");
        }
        session.clear_failure();
        info!(post_id = created.id, "Post added");
        Ok(created)
    }

    /// Update a post and swap the stored version into place.
    ///
    /// Returns `Ok(false)` when `id` is not in the local collection; the
    /// stored post is dropped rather than inserted.
    pub async fn edit(
        &self,
        session: &mut Session,
        id: i64,
        title: &str,
        body: &str,
    ) -> Result<bool> {
        ensure_ready(Operation::Edit, session)?;

        let updated = match self.store.update_post(id, title, body).await {
            Ok(post) => post,
            Err(e) => return Err(fail(session, Operation::Edit, e.into())),
        };

        if updated.id != id {
            let cause = FailureCause::IdentifierMismatch {
                requested: id,
                returned: updated.id,
            };
            return Err(fail(session, Operation::Edit, cause));
        }

        session.clear_failure();
        let replaced = session.replace(updated);
        if replaced {
            info!(post_id = id, "Post updated");
        } else {
            warn!(post_id = id, "Updated post is not in the collection, dropped");
        }
        Ok(replaced)
    }

    /// Delete a post. Returns `Ok(false)` when it was not held locally.
    pub async fn remove(&self, session: &mut Session, id: i64) -> Result<bool> {
        ensure_ready(Operation::Remove, session)?;

        if let Err(e) = self.store.delete_post(id).await {
            return Err(fail(session, Operation::Remove, e.into()));
        }

        session.clear_failure();
        let removed = session.remove(id);
        info!(post_id = id, removed, "Post deleted");
        Ok(removed)
    }

    /// Set the identifier filter and return the resulting view.
    pub fn apply_filter<'s>(&self, session: &'s mut Session, criterion: &str) -> Vec<&'s Post> {
        session.set_filter(PostFilter::new(criterion));
        session.view()
    }
}

fn ensure_ready(operation: Operation, session: &Session) -> Result<()> {
    if session.is_ready() {
        Ok(())
    } else {
        Err(invalid_state(operation, session))
    }
}

fn invalid_state(operation: Operation, session: &Session) -> ReconcileError {
    ReconcileError::InvalidState {
        operation,
        state: session.state().label(),
    }
}

fn fail(session: &mut Session, operation: Operation, cause: FailureCause) -> ReconcileError {
    warn!(%operation, error = %cause, "Post operation failed");
    session.report_failure(operation.failure_message());
    ReconcileError::OperationFailed { operation, cause }
}

/// Keep the first post for each id.
fn dedup_by_id(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::with_capacity(posts.len());
    let total = posts.len();
    let unique: Vec<Post> = posts.into_iter().filter(|post| seen.insert(post.id)).collect();
    if unique.len() != total {
        warn!(dropped = total - unique.len(), "Listing contained duplicate ids");
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::post;

    #[test]
    fn dedup_keeps_first_occurrence() {
        let posts = vec![post(1, "a", ""), post(2, "b", ""), post(1, "c", "")];

        let unique = dedup_by_id(posts);

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].title, "a");
        assert_eq!(unique[1].id, 2);
    }
}
