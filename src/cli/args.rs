//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "dfa-check")]
#[command(about = "Validate strings against two-symbol DFA definitions")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Load definition (.dfa) and input (.in) files in order, then check the inputs
    Check {
        /// Files to load; a later definition replaces an earlier one unless it is invalid
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Result file (defaults to the input file with the configured extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print results only, do not write a result file
        #[arg(long, conflicts_with = "output")]
        no_write: bool,

        /// Check inputs in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Validate a definition file
    Validate {
        /// Definition file
        definition: PathBuf,
    },

    /// Print the transition table of a definition
    Table {
        /// Definition file
        definition: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: TableFormat,
    },

    /// Check strings given on the command line
    Run {
        /// Definition file
        definition: PathBuf,

        /// Strings to check
        strings: Vec<String>,
    },
}

/// Output format for the `table` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    /// Aligned columns
    Text,
    /// Definition format, as accepted by the parser
    Definition,
    /// JSON object with the alphabet and the rows
    Json,
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Definition => write!(f, "definition"),
            Self::Json => write!(f, "json"),
        }
    }
}
