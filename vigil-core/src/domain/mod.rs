//! Core domain types
//!
//! This module contains the structures shared by the poller, the HTTP client
//! and the CLI. They describe *what* is being waited on and *how* its statuses
//! are classified, without performing any I/O.

pub mod operation;
pub mod outcome;
pub mod policy;
pub mod vocabulary;

pub use operation::{HandleError, OperationHandle, StatusSnapshot};
pub use outcome::Outcome;
pub use policy::{PolicyError, PollPolicy, StatusClass};
pub use vocabulary::{
    BatchJobStatus, EndpointStatus, OperationKind, StatusVocabulary, TrainingStatus,
};
