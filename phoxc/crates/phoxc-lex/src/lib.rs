//! phoxc-lex - Lexical Analyzer for the Phox front end
//!
//! This crate turns a source unit into a stream of tokens. The scan runs on
//! a dedicated thread as a chain of state functions; tokens are handed to
//! the consumer over a small bounded channel, so the consumer pulls them
//! one at a time while scanning proceeds concurrently.
//!
//! # Example Usage
//!
//! ```
//! use phoxc_lex::{Lexer, TokenKind};
//!
//! let source = "<p><?php echo \"hi $name\"; ?>";
//! let tokens: Vec<_> = Lexer::new(source.as_bytes()).collect();
//!
//! // Tokens tile the input
//! let joined: Vec<u8> = tokens.iter().flat_map(|t| t.data().to_vec()).collect();
//! assert_eq!(joined, source.as_bytes());
//!
//! assert_eq!(tokens[0].kind, TokenKind::InlineHtml);
//! assert!(tokens.iter().any(|t| t.kind == TokenKind::Variable));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - Scanner engine and the state function catalog
//! - [`cursor`] - Byte cursor for source traversal
//! - [`unicode`] - Decoding and character class utilities
//! - [`error`] - The `Unexpected` token error
//!
//! # Token Categories
//!
//! ## Markup
//!
//! `T_INLINE_HTML`, `T_OPEN_TAG`, `T_OPEN_TAG_WITH_ECHO`, `T_CLOSE_TAG`
//!
//! ## Trivia
//!
//! `T_WHITESPACE`, `T_COMMENT`, `T_DOC_COMMENT`. Trivia is emitted, not
//! skipped.
//!
//! ## Names
//!
//! `T_VARIABLE` (`$name`), `T_STRING` (bare labels) and one kind per
//! reserved word, matched case-insensitively.
//!
//! ## Literals
//!
//! - **Integer** (`T_LNUMBER`): `42`, `0x1F`, `0b1010`, `0o17`, `0755`, `1_000`
//! - **Float** (`T_DNUMBER`): `3.14`, `.5`, `1e10`, `2.5e-3`
//! - **Single-quoted string** (`T_CONSTANT_ENCAPSED_STRING`)
//! - **Double-quoted, backtick and heredoc strings**: split into an opener,
//!   `T_ENCAPSED_AND_WHITESPACE` text, `T_VARIABLE` parts and a terminator
//!
//! ## Operators
//!
//! Multi-character operators (`===`, `<=>`, `??=`, `->`, ...) are
//! `T_OPERATOR`. Every other character is a single-character token.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::Unexpected;
pub use lexer::{
    lex_php, lex_text, Lexer, LexerOptions, Scanner, StateFn, DEFAULT_CHANNEL_CAPACITY,
    SCANNER_THREAD_NAME,
};
pub use token::{keyword_from_label, Keyword, Token, TokenKind};
pub use unicode::{decode_char, hex_digit_to_value, is_label_continue, is_label_start, parse_hex_byte, parse_hex_u64};
