//! Inline HTML and open tag lexing.
//!
//! Everything outside `<?php ... ?>` is passed through as a single
//! [`TokenKind::InlineHtml`] token per run.

use crate::token::TokenKind;

use super::core::{Scanner, StateFn};
use super::script::lex_php;
use super::find_bytes;

/// Initial state: inline text up to the next open tag.
pub fn lex_text(s: &mut Scanner) -> Option<StateFn> {
    let rest_len = s.remaining().len();

    match find_open_tag(s.remaining()) {
        Some((offset, kind, len)) => {
            s.advance_bytes(offset);
            s.emit_pending(TokenKind::InlineHtml);
            s.advance_bytes(len);
            s.emit(kind);
            Some(StateFn(lex_php))
        },
        None => {
            s.advance_bytes(rest_len);
            s.emit_pending(TokenKind::InlineHtml);
            None
        },
    }
}

/// Finds the first open tag in `text`: its offset, kind and length.
fn find_open_tag(text: &[u8]) -> Option<(usize, TokenKind, usize)> {
    let mut from = 0;
    while let Some(idx) = find_bytes(&text[from..], b"<?") {
        let offset = from + idx;
        if let Some((kind, len)) = open_tag_at(&text[offset..]) {
            return Some((offset, kind, len));
        }
        from = offset + 2;
    }
    None
}

/// Matches `<?=`, or `<?php` (any case) followed by one whitespace
/// character or the end of input.
fn open_tag_at(text: &[u8]) -> Option<(TokenKind, usize)> {
    if text.starts_with(b"<?=") {
        return Some((TokenKind::OpenTagWithEcho, 3));
    }

    let tag = text.get(..5)?;
    if !tag.eq_ignore_ascii_case(b"<?php") {
        return None;
    }
    match &text[5..] {
        [] => Some((TokenKind::OpenTag, 5)),
        [b'\r', b'\n', ..] => Some((TokenKind::OpenTag, 7)),
        [b' ' | b'\t' | b'\n' | b'\r', ..] => Some((TokenKind::OpenTag, 6)),
        _ => None,
    }
}
