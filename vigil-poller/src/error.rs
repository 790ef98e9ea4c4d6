//! Error types for the poller

use thiserror::Error;
use vigil_core::domain::{OperationHandle, PolicyError, StatusSnapshot};

/// Result type alias for wait operations
pub type Result<T> = std::result::Result<T, WaitError>;

/// Errors that abort a wait
///
/// A remote operation that fails, times out or is cancelled is not an error;
/// those end up in [`Outcome`](vigil_core::domain::Outcome).
#[derive(Debug, Error)]
pub enum WaitError {
    /// The status query itself could not complete
    #[error("status query for {handle} failed on attempt {attempt}")]
    Transport {
        handle: OperationHandle,
        /// 1-based attempt that failed
        attempt: u32,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The service reported a status outside the policy's vocabulary
    #[error("unrecognized status {status} for {handle} on attempt {attempt}")]
    UnrecognizedStatus {
        handle: OperationHandle,
        status: StatusSnapshot,
        attempt: u32,
    },

    /// The policy cannot classify statuses consistently
    #[error("invalid poll policy: {0}")]
    InvalidPolicy(#[from] PolicyError),
}

impl WaitError {
    /// Check if this error came from the status query rather than the policy
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
