//! Check command implementation.
//!
//! Scans every input file, compiles all of its string literals, and reports
//! literal errors, unterminated single-quoted strings included. Files are
//! checked in parallel on a dedicated rayon pool.

use std::path::{Path, PathBuf};
use std::time::Instant;

use phoxc_lit::literals;
use phoxc_util::{SourceMap, Span};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::commands::common::{error_messages, lex_file, load_source};
use crate::config::LexerConfig;
use crate::error::{PhoxtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub inputs: Vec<PathBuf>,
    pub jobs: u32,
    pub lexer: LexerConfig,
}

/// One finding in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub location: String,
    pub message: String,
    /// The offending source line with the span underlined.
    pub snippet: Option<String>,
}

impl Problem {
    fn new(map: &SourceMap, span: Span, message: String) -> Self {
        Self {
            location: map.location(span),
            message,
            snippet: map.format_span(span),
        }
    }
}

/// The outcome of checking one file.
#[derive(Debug)]
pub struct FileReport {
    pub problems: Vec<Problem>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Execute the command. Fails if any file could not be read or has
    /// problems.
    pub fn run(&self) -> Result<()> {
        if self.args.inputs.is_empty() {
            return Err(PhoxtError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let start_time = Instant::now();
        let reports = self.check_all()?;

        let mut failed = 0;
        for (path, report) in self.args.inputs.iter().zip(&reports) {
            match report {
                Ok(report) if report.is_clean() => {},
                Ok(report) => {
                    failed += 1;
                    for problem in &report.problems {
                        println!("{}: {}", problem.location, problem.message);
                        if let Some(snippet) = &problem.snippet {
                            println!("{snippet}");
                        }
                    }
                },
                Err(err) => {
                    failed += 1;
                    println!("{}: {}", path.display(), err);
                },
            }
        }

        info!(
            files = reports.len(),
            failed,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "check finished"
        );

        if failed > 0 {
            return Err(PhoxtError::CommandExecution(format!(
                "{} {}",
                failed,
                error_messages::FILES_FAILED
            )));
        }
        println!("{} file(s) checked, no problems found", reports.len());
        Ok(())
    }

    /// Checks all inputs on a pool of `jobs` threads, keeping input order.
    fn check_all(&self) -> Result<Vec<Result<FileReport>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.args.jobs.max(1) as usize)
            .build()
            .map_err(|e| PhoxtError::CommandExecution(format!("Failed to start workers: {}", e)))?;
        debug!(jobs = pool.current_num_threads(), "checking files");

        Ok(pool.install(|| {
            self.args
                .inputs
                .par_iter()
                .map(|path| check_file(path, &self.args.lexer))
                .collect()
        }))
    }
}

/// Scans and compiles one file.
pub fn check_file(path: &Path, lexer: &LexerConfig) -> Result<FileReport> {
    let mut map = SourceMap::new();
    let file = load_source(&mut map, path)?;

    let problems: Vec<Problem> = literals(lex_file(&file, lexer))
        .filter_map(|compiled| compiled.err())
        .map(|err| Problem::new(&map, err.span(), err.to_string()))
        .collect();

    debug!(file = file.name(), problems = problems.len(), "checked file");
    Ok(FileReport { problems })
}

/// Run the check command with the given arguments.
pub fn run_check(args: CheckArgs) -> Result<()> {
    CheckCommand::new(args).run()
}
