//! Data Transfer Objects for the classification service
//!
//! Request and response bodies of the three describe operations used for
//! status polling. Field names follow the service's PascalCase JSON. Only the
//! fields needed to track an operation are modelled; unknown fields are ignored.

pub mod classifier;
pub mod endpoint;
pub mod job;

use crate::domain::operation::StatusSnapshot;

/// A describe response that carries the current status of an operation
pub trait StatusReport {
    /// Current status of the operation
    fn status(&self) -> &StatusSnapshot;

    /// Optional explanation supplied by the service, usually set on failure
    fn message(&self) -> Option<&str>;
}
