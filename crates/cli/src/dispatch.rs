//! The send pipeline.
//!
//! Responsibilities:
//! - Run the stages in order: locate config, load config (which validates the
//!   API key), register the key, build the notification, push it.
//! - Attach the failing stage to every error.
//! - Warn on stderr about a too-permissive config file, whatever the log filter.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Printing errors or choosing the exit code (see `main()`).
//!
//! Invariants:
//! - Stages run strictly in sequence and the first failure stops the run.
//! - `push` is never called unless every earlier stage succeeded, so a missing
//!   message never reaches the network.

use prowl_client::{ClientError, Notifier, ProwlClient};
use prowl_config::{Config, ConfigLoader, LocatedConfig, read_config};

use crate::args::Cli;
use crate::error::CliError;
use crate::notification::build_notification;

/// Run the pipeline for `cli`.
///
/// `make_notifier` receives the loaded configuration and creates the
/// delivery backend; `resolve_hostname` is only called when `-o` is enabled.
pub(crate) async fn run_pipeline<N, F, H>(
    cli: &Cli,
    make_notifier: F,
    resolve_hostname: H,
) -> Result<(), CliError>
where
    N: Notifier,
    F: FnOnce(&Config) -> Result<N, ClientError>,
    H: FnOnce() -> Option<String>,
{
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config_file {
        loader = loader.with_config_path(path.clone());
    }

    let located = loader
        .find_config_file()
        .map_err(CliError::from_config)?;
    tracing::debug!(path = %located.path.display(), "Using configuration file");
    if located.too_permissive {
        eprintln!("{}", permission_warning(&located));
    }

    let config = read_config(&located.path).map_err(CliError::from_config)?;

    let mut notifier = make_notifier(&config).map_err(CliError::ClientSetup)?;
    notifier
        .register_key(&config.api_key)
        .map_err(CliError::KeyRegistration)?;

    let hostname = if cli.host_prefix {
        resolve_hostname()
    } else {
        None
    };
    let notification = build_notification(cli, hostname.as_deref())?;

    notifier
        .push(&notification)
        .await
        .map_err(CliError::Delivery)?;
    Ok(())
}

/// Warning line for a configuration file readable or writable by others.
fn permission_warning(located: &LocatedConfig) -> String {
    let mut warning = format!(
        "** WARNING: file permissions for {:?} are too large",
        located.path.display().to_string()
    );
    if let Some(mode) = located.mode {
        warning.push_str(&format!(" (mode {mode:04o})"));
    }
    warning
}

/// Create the Prowl client for a run, honoring `--api-url`.
pub(crate) fn prowl_client(cli: &Cli, config: &Config) -> Result<ProwlClient, ClientError> {
    let mut builder = ProwlClient::builder().from_config(config);
    if let Some(url) = &cli.api_url {
        builder = builder.base_url(url.clone());
    }
    builder.build()
}
