//! Input file classification

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Extension of definition files
pub const DEFINITION_EXTENSION: &str = "dfa";

/// Extension of candidate input files
pub const INPUT_EXTENSION: &str = "in";

/// What a file passed to `check` contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Automaton definition
    Definition,
    /// Candidate strings, one per line
    Input,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Definition => write!(f, "definition"),
            Self::Input => write!(f, "input"),
        }
    }
}

/// Classify a file by its extension (case-insensitive)
pub fn detect_kind(path: &Path) -> Result<FileKind> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .with_context(|| format!("No file extension: {}", path.display()))?;

    match ext.to_lowercase().as_str() {
        DEFINITION_EXTENSION => Ok(FileKind::Definition),
        INPUT_EXTENSION => Ok(FileKind::Input),
        _ => bail!(
            "Unknown file extension .{} for {} (expected .{} or .{})",
            ext,
            path.display(),
            DEFINITION_EXTENSION,
            INPUT_EXTENSION
        ),
    }
}
