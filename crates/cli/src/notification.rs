//! Notification assembly from command-line input.
//!
//! Responsibilities:
//! - Build a [`Notification`] from parsed flags and message fragments.
//! - Resolve the local hostname for the application suffix.
//!
//! Does NOT handle:
//! - Validation against Prowl's limits (see `Notification::validate`).
//!
//! Invariants:
//! - A hostname that cannot be resolved leaves the application name untouched.

use prowl_client::Notification;

use crate::args::Cli;
use crate::error::CliError;

/// Build the notification for `cli`.
///
/// `hostname` is the already-resolved local hostname; it is only used when
/// `-o` is enabled.
///
/// # Errors
///
/// Returns [`CliError::MissingMessageArgument`] when no message fragment was given.
pub fn build_notification(cli: &Cli, hostname: Option<&str>) -> Result<Notification, CliError> {
    if cli.message.is_empty() {
        return Err(CliError::MissingMessageArgument);
    }

    let application = match hostname {
        Some(host) if cli.host_prefix => format!("{} on {}", cli.application, host),
        _ => cli.application.clone(),
    };

    Ok(Notification {
        application,
        description: cli.message.join("\n"),
        event: cli.event.clone(),
        priority: cli.priority.to_string(),
        url: cli.url.clone(),
    })
}

/// The local hostname, or `None` if it cannot be determined.
pub fn local_hostname() -> Option<String> {
    match hostname::get() {
        Ok(name) => {
            let name = name.to_string_lossy().trim().to_string();
            (!name.is_empty()).then_some(name)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Could not resolve hostname");
            None
        }
    }
}
