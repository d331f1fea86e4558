//! Error types for phoxc-lit crate

use std::fmt;

use phoxc_lex::Unexpected;
use phoxc_util::Span;
use thiserror::Error;

/// The string forms the compiler handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    SingleQuoted,
    DoubleQuoted,
    Backtick,
    Heredoc,
}

impl LiteralKind {
    /// The kind of an encapsed literal opened by `quote`.
    pub fn from_quote(quote: char) -> Self {
        if quote == '`' {
            LiteralKind::Backtick
        } else {
            LiteralKind::DoubleQuoted
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::SingleQuoted => "single-quoted string",
            LiteralKind::DoubleQuoted => "double-quoted string",
            LiteralKind::Backtick => "backtick string",
            LiteralKind::Heredoc => "heredoc",
        })
    }
}

/// Why a literal could not be compiled.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LiteralError {
    /// A single-quoted token without its bounding quotes.
    #[error("malformed string literal at {span}")]
    MalformedLiteral { span: Span },

    /// A token that cannot appear inside the literal.
    #[error(transparent)]
    UnexpectedToken(#[from] Unexpected),

    /// The token stream ended before the literal's terminator.
    #[error("unexpected end of input in {literal} opened at {span}")]
    UnexpectedEof { literal: LiteralKind, span: Span },
}

impl LiteralError {
    /// Location the error points at.
    pub fn span(&self) -> Span {
        match self {
            LiteralError::MalformedLiteral { span } | LiteralError::UnexpectedEof { span, .. } => *span,
            LiteralError::UnexpectedToken(unexpected) => unexpected.span,
        }
    }
}

/// Result type alias for literal compilation
pub type LiteralResult<T> = std::result::Result<T, LiteralError>;

#[cfg(test)]
mod tests {
    use super::*;
    use phoxc_lex::TokenKind;

    #[test]
    fn test_malformed_display() {
        let err = LiteralError::MalformedLiteral {
            span: Span::new(0, 4, 2, 9),
        };
        assert_eq!(err.to_string(), "malformed string literal at 2:9");
    }

    #[test]
    fn test_unexpected_token_is_transparent() {
        let unexpected = Unexpected {
            kind: TokenKind::Label,
            text: "x".into(),
            span: Span::new(5, 6, 1, 6),
        };
        let err = LiteralError::from(unexpected.clone());
        assert_eq!(err.to_string(), unexpected.to_string());
        assert_eq!(err.span(), Span::new(5, 6, 1, 6));
    }

    #[test]
    fn test_eof_display() {
        let err = LiteralError::UnexpectedEof {
            literal: LiteralKind::Heredoc,
            span: Span::new(0, 7, 3, 1),
        };
        assert_eq!(err.to_string(), "unexpected end of input in heredoc opened at 3:1");
    }

    #[test]
    fn test_kind_from_quote() {
        assert_eq!(LiteralKind::from_quote('"'), LiteralKind::DoubleQuoted);
        assert_eq!(LiteralKind::from_quote('`'), LiteralKind::Backtick);
    }
}
