//! Strings command implementation.
//!
//! Compiles every string literal in one file and prints the resulting
//! expression tree, or the compile error, next to its location.

use std::io::Write;
use std::path::PathBuf;

use phoxc_lex::Lexer;
use phoxc_lit::literals;
use phoxc_util::SourceMap;
use tracing::debug;

use crate::commands::common::{lex_file, load_source};
use crate::config::LexerConfig;
use crate::error::Result;

/// Arguments for the strings command.
#[derive(Debug, Clone)]
pub struct StringsArgs {
    pub input: PathBuf,
    pub lexer: LexerConfig,
}

/// Strings command handler.
pub struct StringsCommand {
    args: StringsArgs,
}

impl StringsCommand {
    pub fn new(args: StringsArgs) -> Self {
        Self { args }
    }

    /// Execute the command, writing one line per literal to stdout.
    pub fn run(&self) -> Result<()> {
        let mut map = SourceMap::new();
        let file = load_source(&mut map, &self.args.input)?;
        let lexer = lex_file(&file, &self.args.lexer);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let count = render_literals(lexer, &map, &mut out)?;
        debug!(file = file.name(), count, "compiled literals");
        Ok(())
    }
}

/// Compiles and prints every literal; returns how many were seen.
///
/// A literal that fails to compile is printed as an error line followed by
/// the offending source line, and does not stop the listing.
pub fn render_literals(lexer: Lexer, map: &SourceMap, out: &mut impl Write) -> Result<usize> {
    let mut count = 0;
    for compiled in literals(lexer) {
        match compiled {
            Ok(expr) => writeln!(out, "{}: {}", map.location(expr.span()), expr)?,
            Err(err) => {
                writeln!(out, "{}: error: {}", map.location(err.span()), err)?;
                if let Some(snippet) = map.format_span(err.span()) {
                    writeln!(out, "{snippet}")?;
                }
            },
        }
        count += 1;
    }
    Ok(count)
}

/// Run the strings command with the given arguments.
pub fn run_strings(args: StringsArgs) -> Result<()> {
    StringsCommand::new(args).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> (usize, String) {
        let mut map = SourceMap::new();
        let id = map.add_file("demo.php", source);
        let file = map.get_file(id).unwrap();
        let lexer = lex_file(&file, &LexerConfig::default());

        let mut out = Vec::new();
        let count = render_literals(lexer, &map, &mut out).unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_lists_each_literal_with_location() {
        let (count, listing) = render("<?php\n$a = 'x';\necho \"hi $name\";\n");
        assert_eq!(count, 2);
        assert_eq!(
            listing,
            "demo.php:2:6: \"x\"\n\
             demo.php:3:6: concat(\"hi \", $name)\n"
        );
    }

    #[test]
    fn test_errors_are_listed_in_place() {
        let (count, listing) = render("<?php echo \"open");
        assert_eq!(count, 1);
        assert_eq!(
            listing,
            "demo.php:1:12: error: unexpected end of input in double-quoted string opened at 1:12\n\
             --> demo.php:1:12\n\
             \x20 1 | <?php echo \"open\n\
             \x20   |            ^\n"
        );
    }

    #[test]
    fn test_unterminated_single_quote_is_listed() {
        let (count, listing) = render("<?php\necho 'a', 'abc");
        assert_eq!(count, 2);
        assert_eq!(
            listing,
            "demo.php:2:6: \"a\"\n\
             demo.php:2:11: error: malformed string literal at 2:11\n\
             --> demo.php:2:11\n\
             \x20 2 | echo 'a', 'abc\n\
             \x20   |           ^^^^\n"
        );
    }

    #[test]
    fn test_no_literals() {
        let (count, listing) = render("<?php $a = 1;");
        assert_eq!(count, 0);
        assert!(listing.is_empty());
    }
}
