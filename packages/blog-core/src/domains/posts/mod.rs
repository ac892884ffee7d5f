pub mod error;
pub mod models;
pub mod reconciler;

pub use error::{FailureCause, Operation, ReconcileError};
pub use models::filter::PostFilter;
pub use models::session::{LoadState, Session};
pub use reconciler::Reconciler;
