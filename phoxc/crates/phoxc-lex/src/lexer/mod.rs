//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Scanner engine, `Lexer` handle and state function type
//! - `text` - Inline HTML and open tags
//! - `script` - Dispatch inside script sections
//! - `identifier` - Variables, labels and keywords
//! - `number` - Integer and float literals
//! - `string` - Single-quoted strings and double-quoted/backtick bodies
//! - `heredoc` - Heredoc headers, bodies and end markers
//! - `operator` - Multi-character operators
//! - `comment` - Line, block and doc comments

mod comment;
mod core;
mod heredoc;
mod identifier;
mod number;
mod operator;
mod script;
mod string;
mod text;

pub use self::core::{
    Lexer, LexerOptions, Scanner, StateFn, DEFAULT_CHANNEL_CAPACITY, SCANNER_THREAD_NAME,
};
pub use self::script::lex_php;
pub use self::text::lex_text;

/// Returns the offset of the first occurrence of `needle` in `haystack`.
pub(crate) fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::token::TokenKind;

    /// Lexes `source` and returns `(kind, text)` for every token.
    pub(crate) fn lex_pairs(source: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(source.as_bytes())
            .map(|t| (t.kind, t.text().into_owned()))
            .collect()
    }

    /// Lexes `source` after an open tag and drops the open tag.
    pub(crate) fn lex_php_pairs(source: &str) -> Vec<(TokenKind, String)> {
        let mut pairs = lex_pairs(&format!("<?php {source}"));
        pairs.remove(0);
        pairs
    }

    #[test]
    fn test_find_bytes() {
        assert_eq!(find_bytes(b"ab*/cd", b"*/"), Some(2));
        assert_eq!(find_bytes(b"ab", b"abc"), None);
        assert_eq!(find_bytes(b"", b"?>"), None);
    }
}
