//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::automaton::{Automaton, Symbol, TableRow};
use crate::matcher::{is_valid, write_verdicts, Verdict};
use crate::parser::parse_definition;
use crate::session::{Outcome, Session, SessionError};

use super::args::{Commands, TableFormat};
use super::detect::{detect_kind, FileKind};
use super::paths::{output_path, Config};

/// Execute a CLI command
pub fn execute(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Check {
            paths,
            output,
            no_write,
            parallel,
        } => cmd_check(&paths, output, no_write, parallel || config.parallel, config),
        Commands::Validate { definition } => cmd_validate(&definition),
        Commands::Table { definition, format } => cmd_table(&definition, format),
        Commands::Run {
            definition,
            strings,
        } => cmd_run(&definition, &strings),
    }
}

/// Read and parse a definition file
pub fn load_automaton(path: &Path) -> Result<Automaton> {
    let text = read_file(path)?;
    parse_definition(&text)
        .with_context(|| format!("Invalid DFA definition in {}", path.display()))
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load every path into a session, in order
pub fn load_session(paths: &[PathBuf]) -> Result<(Session, Option<PathBuf>)> {
    let mut session = Session::new();
    let mut input_path = None;

    for path in paths {
        let kind = detect_kind(path)?;
        debug!(%kind, path = %path.display(), "loading file");
        let text = read_file(path)?;
        let name = display_name(path);

        match kind {
            FileKind::Definition => match session.load_definition(name.clone(), &text) {
                Ok(automaton) => {
                    eprintln!(
                        "  Loaded DFA table from {} ({} state(s))",
                        name.cyan(),
                        automaton.num_states().to_string().green()
                    );
                }
                Err(SessionError::DefinitionRejected {
                    source,
                    fallback: Some(fallback),
                    ..
                }) => {
                    eprintln!(
                        "  {}: Unable to load {}: {}. Using {} instead.",
                        "Warning".yellow(),
                        name.cyan(),
                        source,
                        fallback.cyan()
                    );
                }
                Err(err) => return Err(err.into()),
            },
            FileKind::Input => {
                let count = session.load_candidates(name.clone(), &text).len();
                eprintln!(
                    "  Loaded {} string(s) from {}",
                    count.to_string().green(),
                    name.cyan()
                );
                input_path = Some(path.clone());
            }
        }
    }

    Ok((session, input_path))
}

fn process(session: &Session, parallel: bool) -> Result<Outcome, SessionError> {
    if parallel {
        #[cfg(feature = "rayon")]
        return session.process_with(crate::matcher::check_multiple_parallel);

        #[cfg(not(feature = "rayon"))]
        tracing::warn!("built without the rayon feature, checking sequentially");
    }
    session.process()
}

/// Check command
fn cmd_check(
    paths: &[PathBuf],
    output: Option<PathBuf>,
    no_write: bool,
    parallel: bool,
    config: &Config,
) -> Result<()> {
    let (session, input_path) = load_session(paths)?;
    let outcome = process(&session, parallel)?;

    let stdout = io::stdout();
    write_verdicts(stdout.lock(), &outcome.verdicts).context("Failed to write results")?;

    let destination = if no_write {
        None
    } else {
        output.or_else(|| input_path.map(|p| output_path(&p, &config.output_extension)))
    };

    let accepted = outcome.verdicts.iter().filter(|&&valid| valid).count();
    eprintln!(
        "  Checked {} string(s) from {} against {}: {} valid, {} invalid",
        outcome.verdicts.len(),
        outcome.input.cyan(),
        outcome.definition.cyan(),
        accepted.to_string().green(),
        (outcome.verdicts.len() - accepted).to_string().red()
    );

    if let Some(path) = destination {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_verdicts(BufWriter::new(file), &outcome.verdicts)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("  Output saved to {}", path.display().to_string().cyan());
    }

    Ok(())
}

/// Validate command
fn cmd_validate(definition: &Path) -> Result<()> {
    let automaton = load_automaton(definition)?;
    let [first, second] = automaton.alphabet();
    let accepting: Vec<String> = automaton
        .accepting_states()
        .map(|state| state.to_string())
        .collect();

    println!("{} {}", "✓".green().bold(), definition.display());
    println!("  Alphabet:  {first}, {second}");
    println!("  States:    {}", automaton.num_states());
    println!("  Start:     {}", automaton.start_state());
    if accepting.is_empty() {
        println!("  Accepting: {}", "(none)".yellow());
    } else {
        println!("  Accepting: {}", accepting.join(", "));
    }
    Ok(())
}

#[derive(Serialize)]
struct TableJson {
    alphabet: [Symbol; 2],
    start: char,
    rows: Vec<TableRow>,
}

/// Table command
fn cmd_table(definition: &Path, format: TableFormat) -> Result<()> {
    let automaton = load_automaton(definition)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        TableFormat::Text => write_table(&mut out, &automaton)?,
        TableFormat::Definition => write!(out, "{automaton}")?,
        TableFormat::Json => {
            let table = TableJson {
                alphabet: automaton.alphabet(),
                start: automaton.start_state().name(),
                rows: automaton.table(),
            };
            serde_json::to_writer_pretty(&mut out, &table)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write an aligned transition table
pub fn write_table<W: Write>(mut out: W, automaton: &Automaton) -> io::Result<()> {
    let [first, second] = automaton.alphabet();
    writeln!(out, "{:<4}{:<7}{:<7}{:<7}", "", "State", first, second)?;
    for row in automaton.table() {
        writeln!(
            out,
            "{:<4}{:<7}{:<7}{:<7}",
            row.marker.as_str(),
            row.state.to_string(),
            row.targets[0].to_string(),
            row.targets[1].to_string()
        )?;
    }
    Ok(())
}

/// Run command
fn cmd_run(definition: &Path, strings: &[String]) -> Result<()> {
    let automaton = load_automaton(definition)?;

    for input in strings {
        let verdict = Verdict::from(is_valid(input, &automaton));
        let label = match verdict {
            Verdict::Valid => verdict.label().green(),
            Verdict::Invalid => verdict.label().red(),
        };
        println!("{label}\t{input:?}");
    }
    Ok(())
}
