//! CLI interface for dfa-check
//!
//! Reads definition and input files, prints transition tables and writes
//! result files.

pub mod args;
pub mod commands;
pub mod detect;
pub mod paths;

pub use args::{Cli, Commands, TableFormat};
pub use detect::{detect_kind, FileKind};
pub use paths::{config_dir, output_path, Config};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbosity` selects the level
/// (0 = warn, 1 = debug, 2+ = trace).
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second call, e.g. from tests, keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
