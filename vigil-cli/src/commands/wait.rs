//! Wait command handler
//!
//! Polls an operation until it reaches a terminal status, printing one line
//! per status query. Ctrl-C cancels the wait.

use anyhow::{Context, Result};
use colored::*;
use std::time::Duration;
use tracing::warn;
use vigil_client::OperationStatusLookup;
use vigil_core::domain::{OperationHandle, OperationKind, Outcome};
use vigil_poller::Waiter;

use super::colorize_status;
use crate::config::{Config, PollOverrides};

/// Handle the wait command
///
/// # Arguments
/// * `kind` - The kind of operation to wait on
/// * `handle` - Identifier of the operation
/// * `interval` - Optional interval override in seconds
/// * `max_attempts` - Optional attempt budget override
/// * `config` - The CLI configuration
pub async fn handle_wait_command(
    kind: OperationKind,
    handle: &str,
    interval: Option<u64>,
    max_attempts: Option<u32>,
    config: &Config,
) -> Result<()> {
    let handle = OperationHandle::new(handle).context("Invalid operation handle")?;

    let overrides = PollOverrides {
        interval: interval.map(Duration::from_secs),
        max_attempts,
    };
    overrides.validate()?;
    let policy = overrides.apply(kind.default_policy());

    let lookup = OperationStatusLookup::new(config.client()?, kind);

    println!(
        "{}",
        format!("Waiting on {} {}", kind.describe(), handle).bold()
    );
    println!(
        "{}",
        format!(
            "  every {:?}, at most {} attempt(s)",
            policy.interval(),
            policy.max_attempts()
        )
        .dimmed()
    );

    let progress_policy = policy.clone();
    let max = policy.max_attempts();
    let waiter = Waiter::new(policy).with_observer(move |status, attempt| {
        let class = progress_policy.classify(status);
        println!(
            "  {} [{}/{}] {}",
            "▸".cyan(),
            attempt,
            max,
            colorize_status(status, class)
        );
    });

    let token = waiter.cancellation_token();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling wait");
            token.cancel();
        }
    });

    let result = waiter.wait(&handle, &lookup).await;
    ctrl_c.abort();

    let outcome = result.with_context(|| format!("Failed waiting on {} {}", kind, handle))?;
    report_outcome(kind, &handle, &outcome)
}

/// Print the outcome and turn every non-success into an error
fn report_outcome(kind: OperationKind, handle: &OperationHandle, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Success(status) => {
            println!("{} {} is {}", "✓".green(), handle, status.as_str().green());
            Ok(())
        }
        Outcome::OperationFailed(status) => {
            println!("{} {} is {}", "✗".red(), handle, status.as_str().red());
            anyhow::bail!("{} {} {}", kind.describe(), handle, outcome)
        }
        Outcome::Timeout(_) | Outcome::Cancelled(_) => {
            println!("{} {} {}", "⚠".yellow(), handle, outcome.to_string().yellow());
            anyhow::bail!("{} {} {}", kind.describe(), handle, outcome)
        }
    }
}
