//! Status lookup adapter
//!
//! Exposes the describe operations as the poller's `StatusLookup` capability.

use async_trait::async_trait;
use tracing::debug;
use vigil_core::domain::{OperationHandle, OperationKind, StatusSnapshot};
use vigil_poller::StatusLookup;

use crate::ClassificationClient;
use crate::error::{ClientError, Result};

/// Queries the status of one kind of operation through the client
#[derive(Debug, Clone)]
pub struct OperationStatusLookup {
    client: ClassificationClient,
    kind: OperationKind,
}

impl OperationStatusLookup {
    pub fn new(client: ClassificationClient, kind: OperationKind) -> Self {
        Self { client, kind }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }
}

#[async_trait]
impl StatusLookup for OperationStatusLookup {
    type Error = ClientError;

    async fn lookup_status(&self, handle: &OperationHandle) -> Result<StatusSnapshot> {
        let (status, message) = self.client.describe_status(self.kind, handle).await?;
        if let Some(message) = message {
            debug!("{} {}: {}", self.kind, handle, message);
        }
        Ok(status)
    }
}
