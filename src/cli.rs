//! Command-line surface for the `browser-bridge` binary.
//!
//! Kept in the library so the parser can be exercised from integration
//! tests without spawning the binary.

use anyhow::Result;
use clap::{builder::PossibleValuesParser, Args, Parser, Subcommand};

use crate::install::{self, InstallRequest};

#[derive(Debug, Parser)]
#[command(
    name = "browser-bridge",
    about = "Browser native-messaging bridge",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Install the native-messaging manifest and launcher for a browser.
    ///
    /// Writes the host manifest into the browser's native-messaging-hosts
    /// directory and a launcher script to ~/.local/bin. Safe to re-run;
    /// both files are overwritten in place.
    Init(InitArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Browser to install the integration for
    #[arg(long, value_parser = PossibleValuesParser::new(install::supported_browsers()))]
    pub browser: String,

    /// Extension ID allowed to connect to the host
    #[arg(long)]
    pub extension_id: String,

    /// Install the manifest for a single browser profile
    #[arg(long)]
    pub profile_directory: Option<String>,
}

impl From<InitArgs> for InstallRequest {
    fn from(args: InitArgs) -> Self {
        InstallRequest {
            browser: args.browser,
            extension_id: args.extension_id,
            profile_directory: args.profile_directory,
        }
    }
}

/// Parse arguments and dispatch. The binary's `main` is a thin wrapper
/// around this.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init(args) => install::install(&args.into())?,
    }
    Ok(())
}
