//! Poll policies
//!
//! A policy decides how often a remote operation is queried, how many queries
//! are allowed, and what each reported status means.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use super::operation::StatusSnapshot;
use super::vocabulary::StatusVocabulary;

/// Meaning of a status under a given policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusClass {
    /// Terminal, the operation succeeded
    Success,
    /// Terminal, the operation reached a defined failure state
    Failure,
    /// Not terminal yet, keep waiting
    Retry,
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusClass::Success => write!(f, "success"),
            StatusClass::Failure => write!(f, "failure"),
            StatusClass::Retry => write!(f, "retry"),
        }
    }
}

/// Reasons a policy cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("status {status} is classified as both {first} and {second}")]
    OverlappingStatus {
        status: StatusSnapshot,
        first: StatusClass,
        second: StatusClass,
    },

    #[error("policy has no terminal success status")]
    NoSuccessStatus,
}

/// Polling interval, attempt budget and status classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    interval: Duration,
    max_attempts: u32,
    terminal_success: BTreeSet<StatusSnapshot>,
    terminal_failure: BTreeSet<StatusSnapshot>,
    retry_statuses: BTreeSet<StatusSnapshot>,
}

impl PollPolicy {
    /// Creates a policy with empty status sets
    ///
    /// Fill the sets with [`with_success`](Self::with_success),
    /// [`with_failure`](Self::with_failure) and [`with_retry`](Self::with_retry).
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
            terminal_success: BTreeSet::new(),
            terminal_failure: BTreeSet::new(),
            retry_statuses: BTreeSet::new(),
        }
    }

    /// Builds the complete policy of a status vocabulary
    ///
    /// Every variant lands in exactly one set, so the result always validates.
    pub fn for_vocabulary<V: StatusVocabulary>() -> Self {
        V::ALL.iter().fold(
            Self::new(V::DEFAULT_INTERVAL, V::DEFAULT_MAX_ATTEMPTS),
            |policy, status| {
                let snapshot = StatusSnapshot::new(status.as_str());
                match status.class() {
                    StatusClass::Success => policy.with_success([snapshot]),
                    StatusClass::Failure => policy.with_failure([snapshot]),
                    StatusClass::Retry => policy.with_retry([snapshot]),
                }
            },
        )
    }

    pub fn with_success<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StatusSnapshot>,
    {
        self.terminal_success
            .extend(statuses.into_iter().map(Into::into));
        self
    }

    pub fn with_failure<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StatusSnapshot>,
    {
        self.terminal_failure
            .extend(statuses.into_iter().map(Into::into));
        self
    }

    pub fn with_retry<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StatusSnapshot>,
    {
        self.retry_statuses
            .extend(statuses.into_iter().map(Into::into));
        self
    }

    /// Overrides the time between two queries
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Overrides the maximum number of queries
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn terminal_success(&self) -> &BTreeSet<StatusSnapshot> {
        &self.terminal_success
    }

    pub fn terminal_failure(&self) -> &BTreeSet<StatusSnapshot> {
        &self.terminal_failure
    }

    pub fn retry_statuses(&self) -> &BTreeSet<StatusSnapshot> {
        &self.retry_statuses
    }

    /// Classifies a snapshot, `None` when no set contains it
    pub fn classify(&self, status: &StatusSnapshot) -> Option<StatusClass> {
        if self.terminal_success.contains(status) {
            Some(StatusClass::Success)
        } else if self.terminal_failure.contains(status) {
            Some(StatusClass::Failure)
        } else if self.retry_statuses.contains(status) {
            Some(StatusClass::Retry)
        } else {
            None
        }
    }

    /// Validates the policy
    ///
    /// The three sets must be disjoint and at least one success status must exist.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.terminal_success.is_empty() {
            return Err(PolicyError::NoSuccessStatus);
        }

        let sets = [
            (StatusClass::Success, &self.terminal_success),
            (StatusClass::Failure, &self.terminal_failure),
            (StatusClass::Retry, &self.retry_statuses),
        ];

        for (i, (first, left)) in sets.iter().enumerate() {
            for (second, right) in sets.iter().skip(i + 1) {
                if let Some(status) = left.intersection(right).next() {
                    return Err(PolicyError::OverlappingStatus {
                        status: status.clone(),
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        Ok(())
    }
}
