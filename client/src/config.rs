use crate::render::Format;
use clap::{Parser, Subcommand};
use controller::constants::DEFAULT_MIN_AGE;
use std::path::PathBuf;
use std::time::Duration;

/// Terminal client for the zk-creds demo: issue a credential, prove your age, audit the tree.
#[derive(Parser, Debug)]
#[command(name = "zk-creds", version)]
pub struct Cli {
    /// Base URL of the zk-creds backend.
    #[arg(long, env = "ZKCREDS_BACKEND_URL", default_value = "http://127.0.0.1:8000", global = true)]
    pub backend_url: String,

    /// Age threshold sent with verification requests.
    #[arg(long, env = "ZKCREDS_MIN_AGE", default_value_t = DEFAULT_MIN_AGE, global = true)]
    pub min_age: u8,

    /// Per-request timeout in seconds. Requests wait forever when unset.
    #[arg(long, env = "ZKCREDS_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// How result panels are printed.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive session (default).
    Shell,

    /// Run the whole flow once with the given passport file.
    Demo {
        /// Mock passport JSON file.
        passport: PathBuf,
    },

    /// Check that the backend is up.
    Health,

    /// Print the current Merkle root.
    Root,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Shell)
    }
}
