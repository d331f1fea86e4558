//! phoxc-lit - String literal compiler for the Phox front end
//!
//! This crate turns the tokens of a string literal into an expression tree:
//! a decoded [`Expr::Literal`], a [`Expr::Variable`] reference, or an
//! [`Expr::Concat`] of both for interpolated strings.
//!
//! # Example Usage
//!
//! ```
//! use phoxc_lex::{Lexer, TokenKind};
//! use phoxc_lit::{compile_encapsed, Expr};
//!
//! let mut lexer = Lexer::new("<?php \"Hi $name\\n\";".as_bytes());
//! let open = lexer
//!     .by_ref()
//!     .find(|t| t.kind == TokenKind::SingleChar && t.is_char('"'))
//!     .unwrap();
//!
//! let expr = compile_encapsed(&open, &mut lexer, '"').unwrap();
//! assert_eq!(expr.to_string(), r#"concat("Hi ", $name, "\n")"#);
//!
//! // The lexer continues right after the closing quote
//! assert_eq!(lexer.next().unwrap().data(), b";");
//! ```
//!
//! # Module Structure
//!
//! - [`quote`] - The three compile entry points
//! - [`escape`] - Escape sequence decoders
//! - [`literals`] - Iterator adapter over a whole token stream
//! - [`ast`] - Expression nodes
//! - [`value`] - Owned byte strings
//! - [`error`] - Compile errors

pub mod ast;
pub mod error;
pub mod escape;
pub mod literals;
pub mod quote;
pub mod value;

pub use ast::Expr;
pub use error::{LiteralError, LiteralKind, LiteralResult};
pub use escape::{unescape, unescape_single_quoted};
pub use literals::{literals, Literals};
pub use quote::{compile_encapsed, compile_heredoc, compile_single_quoted};
pub use value::ByteString;
