//! Status lookup capability

use async_trait::async_trait;
use std::sync::Arc;
use vigil_core::domain::{OperationHandle, StatusSnapshot};

/// Queries the current status of a remote operation
///
/// Each call performs exactly one remote query. Implementations must not retry
/// internally; the poller decides what happens after a failure.
#[async_trait]
pub trait StatusLookup: Send + Sync {
    /// Error raised when the query cannot complete
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetches the current status of the operation behind `handle`
    async fn lookup_status(&self, handle: &OperationHandle) -> Result<StatusSnapshot, Self::Error>;
}

#[async_trait]
impl<T: StatusLookup + ?Sized> StatusLookup for Arc<T> {
    type Error = T::Error;

    async fn lookup_status(&self, handle: &OperationHandle) -> Result<StatusSnapshot, Self::Error> {
        (**self).lookup_status(handle).await
    }
}
