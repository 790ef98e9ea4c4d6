//! Operation handles and status snapshots

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when building an operation handle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleError {
    #[error("operation handle cannot be empty")]
    Empty,
}

/// Opaque identifier of a remote operation that was already started
///
/// Training job ARNs, endpoint ARNs and batch job IDs all end up here. The
/// poller never interprets the value, it only hands it back to the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OperationHandle(String);

impl OperationHandle {
    /// Creates a handle, rejecting empty or whitespace-only identifiers
    pub fn new(id: impl Into<String>) -> Result<Self, HandleError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(HandleError::Empty);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OperationHandle {
    type Error = HandleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OperationHandle> for String {
    fn from(handle: OperationHandle) -> Self {
        handle.0
    }
}

impl std::str::FromStr for OperationHandle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for OperationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One status value reported by one status query
///
/// Snapshots are replaced on every poll, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusSnapshot(String);

impl StatusSnapshot {
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StatusSnapshot {
    fn from(status: &str) -> Self {
        Self::new(status)
    }
}

impl From<String> for StatusSnapshot {
    fn from(status: String) -> Self {
        Self(status)
    }
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_rejects_empty() {
        assert_eq!(OperationHandle::new(""), Err(HandleError::Empty));
        assert_eq!(OperationHandle::new("   "), Err(HandleError::Empty));
    }

    #[test]
    fn test_handle_keeps_value() {
        let arn = "arn:aws:comprehend:us-east-1:123456789012:document-classifier/news";
        let handle: OperationHandle = arn.parse().unwrap();
        assert_eq!(handle.as_str(), arn);
        assert_eq!(handle.to_string(), arn);
    }

    #[test]
    fn test_handle_deserialize_rejects_empty() {
        let result: Result<OperationHandle, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
