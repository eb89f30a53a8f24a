//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Render the default configuration locations into the help screen.
//!
//! Non-responsibilities:
//! - Does not run the pipeline (see `dispatch` module).
//! - Does not search for or read the config file (see `prowl_config`).

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use prowl_config::config_file_locations;
use prowl_config::constants::{CONFIG_SUBPATH, DEFAULT_APPLICATION, DEFAULT_PRIORITY};

#[derive(Parser, Debug, Clone)]
#[command(name = "prowlsend")]
#[command(about = "Send a push notification through Prowl", long_about = None)]
#[command(version)]
#[command(override_usage = "prowlsend [OPTIONS] <MESSAGE>...")]
pub struct Cli {
    /// Notification priority, from -2 (very low) to 2 (emergency)
    #[arg(
        short = 'p',
        value_name = "PRIORITY",
        default_value_t = i64::from(DEFAULT_PRIORITY),
        allow_negative_numbers = true
    )]
    pub priority: i64,

    /// Event label of the notification
    #[arg(short = 'e', value_name = "EVENT", default_value = "")]
    pub event: String,

    /// URL attached to the notification
    #[arg(short = 'u', value_name = "URL", default_value = "")]
    pub url: String,

    /// Application name
    #[arg(short = 'a', value_name = "NAME", default_value = DEFAULT_APPLICATION)]
    pub application: String,

    /// Append " on <hostname>" to the application name (-o=false disables)
    #[arg(
        short = 'o',
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "true",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub host_prefix: bool,

    /// Path to the configuration file, bypassing the search
    #[arg(short = 'c', value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Base URL of the Prowl API
    #[arg(long, env = "PROWL_API_URL", value_name = "URL", hide = true)]
    pub api_url: Option<String>,

    /// Message fragments, joined with a newline
    #[arg(value_name = "MESSAGE", trailing_var_arg = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Parse `std::env::args`, exiting on usage errors.
    ///
    /// The help screen lists where the configuration file is searched for on
    /// this platform.
    pub fn parse_with_locations() -> Self {
        let locations = config_file_locations(CONFIG_SUBPATH);
        let matches = Self::command()
            .after_help(locations_help(&locations))
            .get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

/// Help section describing the default configuration file locations.
pub(crate) fn locations_help(locations: &[PathBuf]) -> String {
    if locations.is_empty() {
        return "Configuration file:\n  No default location on this platform; pass it with -c".to_string();
    }

    let mut help = String::from("Default configuration file locations (first found is used):");
    for path in locations {
        help.push_str("\n  ");
        help.push_str(&path.display().to_string());
    }
    help
}
