//! Long-running operation waiter
//!
//! Queries a remote operation until it reports a terminal status, the attempt
//! budget runs out, or the caller cancels. One query is in flight at a time and
//! nothing is shared between two waits.

use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use vigil_core::domain::{OperationHandle, Outcome, PollPolicy, StatusClass, StatusSnapshot};

use crate::error::{Result, WaitError};
use crate::lookup::StatusLookup;

/// Callback invoked with every reported status and its 1-based attempt number
pub type StatusObserver = Box<dyn Fn(&StatusSnapshot, u32) + Send + Sync>;

/// Waits on remote operations with a fixed policy
pub struct Waiter {
    policy: PollPolicy,
    cancel: CancellationToken,
    observer: Option<StatusObserver>,
}

impl Waiter {
    /// Creates a waiter that can only be cancelled through
    /// [`cancellation_token`](Self::cancellation_token)
    pub fn new(policy: PollPolicy) -> Self {
        Self {
            policy,
            cancel: CancellationToken::new(),
            observer: None,
        }
    }

    /// Uses an externally owned cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Registers a callback for progress reporting
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&StatusSnapshot, u32) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Token that interrupts the wait when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Waits until the operation behind `handle` reaches a terminal status
    ///
    /// # Returns
    /// - `Outcome::Success` / `Outcome::OperationFailed` with the first
    ///   terminal status observed
    /// - `Outcome::Timeout` once `max_attempts` queries reported only retry
    ///   statuses
    /// - `Outcome::Cancelled` when the token fires before a terminal status
    ///
    /// # Errors
    /// - `WaitError::Transport` as soon as a query fails, without retrying
    /// - `WaitError::UnrecognizedStatus` for a status outside the policy
    /// - `WaitError::InvalidPolicy` before any query when the policy is invalid
    pub async fn wait<L>(&self, handle: &OperationHandle, lookup: &L) -> Result<Outcome>
    where
        L: StatusLookup + ?Sized,
    {
        self.policy.validate()?;

        let max_attempts = self.policy.max_attempts();
        let mut attempts: u32 = 0;

        debug!(
            "Waiting on {} (interval: {:?}, max attempts: {})",
            handle,
            self.policy.interval(),
            max_attempts
        );

        loop {
            if attempts == max_attempts {
                warn!("Gave up on {} after {} attempt(s)", handle, attempts);
                return Ok(Outcome::Timeout(attempts));
            }

            let attempt = attempts + 1;

            let status = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    info!("Wait on {} cancelled after {} attempt(s)", handle, attempts);
                    return Ok(Outcome::Cancelled(attempts));
                }
                result = lookup.lookup_status(handle) => {
                    result.map_err(|e| WaitError::Transport {
                        handle: handle.clone(),
                        attempt,
                        source: Box::new(e),
                    })?
                }
            };

            debug!("{} reported {} (attempt {}/{})", handle, status, attempt, max_attempts);

            if let Some(observer) = &self.observer {
                observer(&status, attempt);
            }

            match self.policy.classify(&status) {
                Some(StatusClass::Success) => {
                    info!("{} succeeded with {} after {} attempt(s)", handle, status, attempt);
                    return Ok(Outcome::Success(status));
                }
                Some(StatusClass::Failure) => {
                    warn!("{} failed with {} after {} attempt(s)", handle, status, attempt);
                    return Ok(Outcome::OperationFailed(status));
                }
                Some(StatusClass::Retry) => {
                    attempts = attempt;

                    // No point sleeping when the next iteration times out
                    if attempts == max_attempts {
                        continue;
                    }

                    tokio::select! {
                        biased;
                        _ = self.cancel.cancelled() => {
                            info!("Wait on {} cancelled after {} attempt(s)", handle, attempts);
                            return Ok(Outcome::Cancelled(attempts));
                        }
                        _ = time::sleep(self.policy.interval()) => {}
                    }
                }
                None => {
                    return Err(WaitError::UnrecognizedStatus {
                        handle: handle.clone(),
                        status,
                        attempt,
                    });
                }
            }
        }
    }
}

/// Waits on `handle` with `policy` and no external cancellation
///
/// Shorthand for `Waiter::new(policy.clone()).wait(handle, lookup)`.
pub async fn wait<L>(handle: &OperationHandle, lookup: &L, policy: &PollPolicy) -> Result<Outcome>
where
    L: StatusLookup + ?Sized,
{
    Waiter::new(policy.clone()).wait(handle, lookup).await
}
