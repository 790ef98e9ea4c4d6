//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod evaluate;
mod status;
mod wait;

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use colored::{ColoredString, Colorize};
use std::path::PathBuf;
use vigil_core::domain::{OperationKind, StatusClass, StatusSnapshot};

use crate::config::Config;

/// Kind of remote operation, as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Document classifier training
    Training,
    /// Real-time inference endpoint provisioning
    Endpoint,
    /// Batch document classification job
    BatchJob,
}

impl From<KindArg> for OperationKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Training => OperationKind::Training,
            KindArg::Endpoint => OperationKind::Endpoint,
            KindArg::BatchJob => OperationKind::BatchJob,
        }
    }
}

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Wait until an operation reaches a terminal status
    Wait {
        /// Kind of operation
        #[arg(value_enum)]
        kind: KindArg,

        /// Classifier ARN, endpoint ARN or batch job ID
        handle: String,

        /// Seconds between two status queries (defaults per operation kind)
        #[arg(long, env = "VIGIL_POLL_INTERVAL")]
        interval: Option<u64>,

        /// Maximum number of status queries (defaults per operation kind)
        #[arg(long, env = "VIGIL_MAX_ATTEMPTS")]
        max_attempts: Option<u32>,
    },
    /// Query the current status of an operation once
    Status {
        /// Kind of operation
        #[arg(value_enum)]
        kind: KindArg,

        /// Classifier ARN, endpoint ARN or batch job ID
        handle: String,
    },
    /// Compute binary classification metrics from scored labels
    Evaluate {
        /// JSON file holding an array of {"label": bool, "score": number}
        file: PathBuf,

        /// Scores greater than or equal to this value count as positive
        #[arg(long, default_value_t = 0.5)]
        threshold: f64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Wait {
            kind,
            handle,
            interval,
            max_attempts,
        } => wait::handle_wait_command(kind.into(), &handle, interval, max_attempts, config).await,
        Commands::Status { kind, handle } => {
            status::handle_status_command(kind.into(), &handle, config).await
        }
        Commands::Evaluate {
            file,
            threshold,
            json,
        } => evaluate::handle_evaluate_command(&file, threshold, json),
    }
}

/// Colorize a status according to its class
fn colorize_status(status: &StatusSnapshot, class: Option<StatusClass>) -> ColoredString {
    let status_str = status.as_str();
    match class {
        Some(StatusClass::Retry) => status_str.cyan(),
        Some(StatusClass::Success) => status_str.green(),
        Some(StatusClass::Failure) => status_str.red(),
        None => status_str.yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_arg_conversion() {
        assert_eq!(OperationKind::from(KindArg::Training), OperationKind::Training);
        assert_eq!(OperationKind::from(KindArg::Endpoint), OperationKind::Endpoint);
        assert_eq!(OperationKind::from(KindArg::BatchJob), OperationKind::BatchJob);
    }

    #[test]
    fn test_kind_arg_names() {
        assert_eq!(KindArg::from_str("batch-job", false), Ok(KindArg::BatchJob));
        assert!(KindArg::from_str("deployment", false).is_err());
    }
}
