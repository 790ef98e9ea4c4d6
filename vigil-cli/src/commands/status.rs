//! Status command handler

use anyhow::{Context, Result};
use colored::*;
use vigil_core::domain::{OperationHandle, OperationKind};

use super::colorize_status;
use crate::config::Config;

/// Handle the status command
///
/// Performs a single status query and prints the status with its meaning
/// under the kind's default policy.
pub async fn handle_status_command(
    kind: OperationKind,
    handle: &str,
    config: &Config,
) -> Result<()> {
    let handle = OperationHandle::new(handle).context("Invalid operation handle")?;
    let client = config.client()?;

    let (status, message) = match client.describe_status(kind, &handle).await {
        Ok(reply) => reply,
        Err(e) if e.is_not_found() => {
            anyhow::bail!("No {} operation named {}", kind, handle)
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to query {} {}", kind, handle));
        }
    };

    let class = kind.classify_status(status.as_str());

    println!("{}", format!("{} {}:", kind.describe(), handle).bold());
    println!("  Status:  {}", colorize_status(&status, class));
    match class {
        Some(class) => println!("  Meaning: {}", class),
        None => println!("  Meaning: {}", "unrecognized".yellow()),
    }
    if let Some(message) = message {
        println!("  Message: {}", message.dimmed());
    }

    Ok(())
}
