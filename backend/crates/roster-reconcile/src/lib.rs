//! One-way reconciliation of the roster against the account database.
//!
//! [`Snapshot::load`] reads both sides once; the phase functions in [`phases`]
//! each issue one kind of mutation; [`Reconciler::run`] sequences them.

pub mod options;
pub mod phases;
pub mod reconciler;
pub mod report;
pub mod snapshot;


pub use options::{ReconcileOptions, StaleAccountPolicy};
pub use phases::{activate_users, add_users, deactivate_users, delete_users};
pub use reconciler::Reconciler;
pub use report::{PhaseCounts, SyncReport};
pub use snapshot::Snapshot;
