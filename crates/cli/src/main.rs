//! prowlsend - send a Prowl push notification from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Install logging, run the send pipeline, report the outcome.
//!
//! Does NOT handle:
//! - Configuration search rules (see `crates/config`).
//! - Prowl API details (see `crates/client`).
//!
//! Invariants:
//! - Logs and errors go to stderr; nothing is written to stdout on a send.
//! - The default log level is `warn`; `RUST_LOG` overrides it. The config
//!   permission warning is printed directly and ignores the filter.
//! - Every failure is printed once, prefixed with `Error:`.

mod args;
mod dispatch;
mod error;
mod notification;

use std::io::IsTerminal;

use args::Cli;
use dispatch::{prowl_client, run_pipeline};
use error::ExitCode;
use notification::local_hostname;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_with_locations();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .init();

    let result = run_pipeline(&cli, |config| prowl_client(&cli, config), local_hostname).await;

    let exit_code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            tracing::debug!(stage = e.stage(), "Run failed");
            eprintln!("Error: {}", e);
            ExitCode::from(&e)
        }
    };

    std::process::exit(exit_code.as_i32());
}
