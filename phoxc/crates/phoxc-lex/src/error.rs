//! Error types for phoxc-lex crate

use phoxc_util::Span;
use thiserror::Error;

use crate::token::TokenKind;

/// A token that its consumer could not use at that position.
///
/// Scanning itself never fails; this is what downstream phases return when
/// a token does not fit the construct they are building.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unexpected {kind} {text:?} at {span}")]
pub struct Unexpected {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}
