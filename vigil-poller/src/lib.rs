//! Vigil Poller
//!
//! Waits for a long-running remote operation to reach a terminal state.
//!
//! The caller starts the operation, then hands its handle to [`wait`] together
//! with a [`StatusLookup`] that performs exactly one status query per call and
//! the [`PollPolicy`](vigil_core::domain::PollPolicy) of the operation kind.
//! The poller queries, classifies the reported status, and either returns an
//! [`Outcome`](vigil_core::domain::Outcome), keeps waiting, or fails.
//!
//! # Example
//!
//! ```no_run
//! use vigil_core::domain::{OperationHandle, OperationKind};
//! use vigil_poller::{StatusLookup, wait};
//!
//! # async fn example(lookup: impl StatusLookup) -> anyhow::Result<()> {
//! let handle = OperationHandle::new("arn:aws:comprehend:us-east-1:123456789012:document-classifier/news")?;
//! let outcome = wait(&handle, &lookup, &OperationKind::Training.default_policy()).await?;
//! println!("training {}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod lookup;
mod waiter;

pub use error::{Result, WaitError};
pub use lookup::StatusLookup;
pub use tokio_util::sync::CancellationToken;
pub use waiter::{StatusObserver, Waiter, wait};
