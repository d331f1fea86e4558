//! Common types and utilities for phoxt commands.

use std::path::Path;
use std::sync::Arc;

use phoxc_lex::Lexer;
use phoxc_util::{SourceFile, SourceMap};
use serde::{Deserialize, Serialize};

use crate::config::LexerConfig;
use crate::error::{PhoxtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// How the `tokens` command renders its listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `line:col KIND data` line per token
    #[default]
    Text,
    /// A JSON array of token records
    Json,
}

// ============================================================================
// Source Loading
// ============================================================================

/// Reads `path` into `map` and returns the registered file.
///
/// The file is named by its path as given on the command line, so
/// locations print the way the user typed them.
pub fn load_source(map: &mut SourceMap, path: &Path) -> Result<Arc<SourceFile>> {
    if !path.exists() {
        return Err(PhoxtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(PhoxtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let content = std::fs::read(path)?;
    let file_id = map.add_file(path.display().to_string(), content);
    Ok(map.get_file(file_id)?)
}

/// Starts a scanner over one loaded file.
pub fn lex_file(file: &SourceFile, lexer: &LexerConfig) -> Lexer {
    Lexer::with_options(file.shared_content(), lexer.options(file.id()))
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes shared by the commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when some files failed the check.
    pub const FILES_FAILED: &str = "file(s) have problems";
}

#[cfg(test)]
mod tests {
    use super::*;
    use phoxc_lex::TokenKind;
    use tempfile::TempDir;

    #[test]
    fn test_load_source_registers_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.php");
        std::fs::write(&path, "<?php echo 1;").unwrap();

        let mut map = SourceMap::new();
        let file = load_source(&mut map, &path).unwrap();
        assert_eq!(map.file_count(), 1);
        assert_eq!(file.content(), b"<?php echo 1;");
        assert_eq!(file.name(), path.display().to_string());
    }

    #[test]
    fn test_load_source_missing_file() {
        let mut map = SourceMap::new();
        let err = load_source(&mut map, Path::new("/nonexistent/a.php")).unwrap_err();
        assert!(err.to_string().contains(error_messages::INPUT_PATH_NOT_EXIST));
    }

    #[test]
    fn test_load_source_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut map = SourceMap::new();
        let err = load_source(&mut map, temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains(error_messages::INPUT_PATH_NOT_FILE));
    }

    #[test]
    fn test_lex_file_stamps_file_id() {
        let mut map = SourceMap::new();
        map.add_file("first.php", "");
        let id = map.add_file("second.php", "<?php $a;");
        let file = map.get_file(id).unwrap();

        let tokens: Vec<_> = lex_file(&file, &LexerConfig::default()).collect();
        assert_eq!(tokens[1].kind, TokenKind::Variable);
        assert!(tokens.iter().all(|t| t.span.file_id == id));
    }
}
