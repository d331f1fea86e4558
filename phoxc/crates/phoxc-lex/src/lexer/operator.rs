//! Operator and punctuation lexing.
//!
//! Multi-character operators are matched longest first and emitted as
//! [`TokenKind::Operator`]. Every other character, single-character
//! operators included, becomes a [`TokenKind::SingleChar`].

use crate::token::TokenKind;

use super::core::{Scanner, StateFn};
use super::script::lex_php;

/// Multi-character operators, longest first.
const OPERATORS: &[&[u8]] = &[
    b"<<=", b">>=", b"**=", b"??=", b"...", b"<=>", b"===", b"!==", b"?->",
    b"++", b"--", b"->", b"=>", b"::", b"==", b"!=", b"<>", b"<=", b">=",
    b"&&", b"||", b"??", b"+=", b"-=", b"*=", b"/=", b".=", b"%=", b"&=",
    b"|=", b"^=", b"<<", b">>", b"**",
];

/// Returns the length of the longest operator at the front of `rest`.
fn operator_len(rest: &[u8]) -> Option<usize> {
    OPERATORS
        .iter()
        .find(|op| rest.starts_with(op))
        .map(|op| op.len())
}

/// Lexes an operator, or any single character.
pub(crate) fn lex_operator(s: &mut Scanner) -> Option<StateFn> {
    match operator_len(s.remaining()) {
        Some(len) => {
            s.advance_bytes(len);
            s.emit(TokenKind::Operator);
        },
        None => {
            s.next()?;
            s.emit(TokenKind::SingleChar);
        },
    }
    Some(StateFn(lex_php))
}
