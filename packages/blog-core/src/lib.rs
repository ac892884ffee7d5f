// Blog posts - session core
//
// Keeps an in-memory collection of posts consistent with a remote posts store
// and derives the filtered view a front-end renders.
//
// The remote store sits behind `kernel::BasePostStore` so the reconciler can be
// driven by the real HTTP client or by `kernel::test_dependencies`.

pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
pub use domains::posts::{
    FailureCause, LoadState, Operation, PostFilter, ReconcileError, Reconciler, Session,
};
pub use posts_client::Post;
