//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::RootMethod;

/// Exhaustive search for near misses of Fermat's equation x^n + y^n = z^n
#[derive(Parser, Debug)]
#[command(name = "nearmiss")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log to stderr: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Interactive search when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the search, prompting only for values not given
    Search {
        /// Exponent n (3-11)
        #[arg(short, long, allow_negative_numbers = true)]
        n: Option<i64>,
        /// Upper bound k for x and y (>10)
        #[arg(short, long, allow_negative_numbers = true)]
        k: Option<i64>,
        /// Root estimate method (default: from config)
        #[arg(long, value_enum)]
        root: Option<RootArg>,
        /// Exit right after the final report
        #[arg(long)]
        no_pause: bool,
    },

    /// Evaluate a single pair x^n + y^n
    Evaluate {
        /// Base x (>= 10)
        x: i64,
        /// Base y (>= 10)
        y: i64,
        /// Exponent n (3-11)
        n: i64,
        /// Root estimate method (default: from config)
        #[arg(long, value_enum)]
        root: Option<RootArg>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,

    /// Create config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config path
    Path,
}

/// Root estimate method as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootArg {
    /// Floating-point floor of S^(1/n)
    Float,
    /// Exact integer n-th root
    Exact,
}

impl From<RootArg> for RootMethod {
    fn from(arg: RootArg) -> Self {
        match arg {
            RootArg::Float => RootMethod::Float,
            RootArg::Exact => RootMethod::Exact,
        }
    }
}
