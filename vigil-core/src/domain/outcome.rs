//! Outcome of waiting on a remote operation

use serde::{Deserialize, Serialize};
use std::fmt;

use super::operation::StatusSnapshot;

/// How a wait ended
///
/// Every variant is an expected result. Transport failures and unrecognized
/// statuses are errors and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// First status observed in the success set
    Success(StatusSnapshot),

    /// First status observed in the failure set
    OperationFailed(StatusSnapshot),

    /// The attempt budget ran out while the operation was still in progress
    Timeout(u32),

    /// The wait was cancelled by the caller after the given number of queries
    Cancelled(u32),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Final status for terminal outcomes
    pub fn final_status(&self) -> Option<&StatusSnapshot> {
        match self {
            Outcome::Success(status) | Outcome::OperationFailed(status) => Some(status),
            Outcome::Timeout(_) | Outcome::Cancelled(_) => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(status) => write!(f, "succeeded with status {}", status),
            Outcome::OperationFailed(status) => write!(f, "failed with status {}", status),
            Outcome::Timeout(attempts) => write!(f, "timed out after {} attempt(s)", attempts),
            Outcome::Cancelled(attempts) => write!(f, "cancelled after {} attempt(s)", attempts),
        }
    }
}
