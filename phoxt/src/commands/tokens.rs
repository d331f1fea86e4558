//! Tokens command implementation.
//!
//! Scans one file and lists every token with its position.

use std::borrow::Cow;
use std::io::Write;
use std::path::PathBuf;

use phoxc_lex::Token;
use phoxc_util::SourceMap;
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{lex_file, load_source, OutputFormat};
use crate::config::LexerConfig;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub lexer: LexerConfig,
}

/// One token in the JSON listing.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    line: u32,
    column: u32,
    start: usize,
    end: usize,
    text: Cow<'a, str>,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.name(),
            line: token.span.line,
            column: token.span.column,
            start: token.span.start,
            end: token.span.end,
            text: token.text(),
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    pub fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    /// Execute the command, writing the listing to stdout.
    pub fn run(&self) -> Result<()> {
        let mut map = SourceMap::new();
        let file = load_source(&mut map, &self.args.input)?;
        let tokens: Vec<Token> = lex_file(&file, &self.args.lexer).collect();
        debug!(file = file.name(), count = tokens.len(), "scanned tokens");

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        render_tokens(&tokens, self.args.format, &mut out)
    }
}

/// Writes `tokens` in the chosen format.
pub fn render_tokens(tokens: &[Token], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(
                    out,
                    "{} {} {:?}",
                    token.span,
                    token.kind.name(),
                    token.text()
                )?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

/// Run the tokens command with the given arguments.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    TokensCommand::new(args).run()
}
