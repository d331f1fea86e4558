//! Comment lexing.
//!
//! Comments are emitted as tokens, not skipped, so that the token stream
//! still covers the whole input.

use tracing::warn;

use crate::token::TokenKind;

use super::core::{Scanner, StateFn};
use super::find_bytes;
use super::script::lex_php;

/// Lexes a `#` or `//` comment.
///
/// The comment runs up to, but not including, the next newline or close tag.
pub(crate) fn lex_line_comment(s: &mut Scanner) -> Option<StateFn> {
    let rest = s.remaining();
    let len = rest
        .iter()
        .enumerate()
        .find(|&(i, &b)| b == b'\n' || (b == b'?' && rest.get(i + 1) == Some(&b'>')))
        .map_or(rest.len(), |(i, _)| i);

    s.advance_bytes(len);
    s.emit(TokenKind::Comment);
    Some(StateFn(lex_php))
}

/// Lexes a `/* */` or `/** */` comment.
///
/// `/**` followed by whitespace opens a doc comment. An unterminated comment
/// runs to the end of input.
pub(crate) fn lex_block_comment(s: &mut Scanner) -> Option<StateFn> {
    let rest = s.remaining();
    let kind = match rest {
        [b'/', b'*', b'*', b' ' | b'\t' | b'\n' | b'\r', ..] => TokenKind::DocComment,
        _ => TokenKind::Comment,
    };
    let len = match find_bytes(&rest[2..], b"*/") {
        Some(offset) => offset + 4,
        None => {
            warn!(
                line = s.cursor().line(),
                column = s.cursor().column(),
                "unterminated comment"
            );
            rest.len()
        },
    };

    s.advance_bytes(len);
    s.emit(kind);
    Some(StateFn(lex_php))
}
