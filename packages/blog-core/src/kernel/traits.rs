// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no reconciliation logic.
//
// Naming convention: Base* for trait names

use async_trait::async_trait;
use posts_client::{Post, Result};

// =============================================================================
// Post Store Trait (Infrastructure - remote posts resource)
// =============================================================================

/// One round trip per call against the remote source of truth.
#[async_trait]
pub trait BasePostStore: Send + Sync {
    /// Fetch every post, in the store's order
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Create a post; the store assigns the identifier
    async fn create_post(&self, title: &str, body: &str) -> Result<Post>;

    /// Replace title and body of an existing post
    async fn update_post(&self, id: i64, title: &str, body: &str) -> Result<Post>;

    /// Delete a post
    async fn delete_post(&self, id: i64) -> Result<()>;
}
