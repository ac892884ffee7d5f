//! Kernel module - infrastructure the posts domain depends on.

pub mod posts_store;
pub mod test_dependencies;
pub mod traits;

pub use posts_store::create_post_store;
pub use traits::BasePostStore;
