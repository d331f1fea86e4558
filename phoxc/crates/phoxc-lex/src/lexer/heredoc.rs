//! Heredoc lexing.
//!
//! ```text
//! <<<LABEL            T_START_HEREDOC (the newline included)
//! body $var text      T_ENCAPSED_AND_WHITESPACE / T_VARIABLE
//!     LABEL;          T_END_HEREDOC (preceding newline + indent + label)
//! ```
//!
//! The newline before the closing label (`\n` or `\r\n`) belongs to the end
//! token, which keeps it out of the string's value while still covering
//! every byte.

use crate::token::TokenKind;
use crate::unicode::is_label_byte;

use super::core::{Enclosure, Scanner, StateFn};
use super::operator::lex_operator;
use super::script::lex_php;
use super::string::lex_encapsed;

/// Lexes a heredoc header. A `<<<` that does not start a well-formed header
/// is lexed as operators instead.
pub(crate) fn lex_heredoc_start(s: &mut Scanner) -> Option<StateFn> {
    let Some((len, label)) = parse_header(s.remaining()) else {
        return lex_operator(s);
    };

    s.advance_bytes(len);
    s.emit(TokenKind::StartHeredoc);

    if let Some(len) = end_marker_len(s.remaining(), &label) {
        s.advance_bytes(len);
        s.emit(TokenKind::EndHeredoc);
        return Some(StateFn(lex_php));
    }

    s.enclosure = Enclosure::Heredoc(label);
    Some(StateFn(lex_encapsed))
}

/// Parses `<<<[ \t]*LABEL\n` or `<<<[ \t]*"LABEL"\n` (`\r\n` also ends the
/// line). Returns the header length and the label.
fn parse_header(rest: &[u8]) -> Option<(usize, Vec<u8>)> {
    let mut i = 3;
    while matches!(rest.get(i), Some(b' ' | b'\t')) {
        i += 1;
    }

    let quoted = rest.get(i) == Some(&b'"');
    if quoted {
        i += 1;
    }

    let label_start = i;
    match rest.get(i) {
        Some(&b) if is_label_byte(b) && !b.is_ascii_digit() => i += 1,
        _ => return None,
    }
    while rest.get(i).is_some_and(|&b| is_label_byte(b)) {
        i += 1;
    }
    let label = rest[label_start..i].to_vec();

    if quoted {
        if rest.get(i) != Some(&b'"') {
            return None;
        }
        i += 1;
    }

    match rest.get(i..i + 2) {
        Some(b"\r\n") => Some((i + 2, label)),
        _ if rest.get(i) == Some(&b'\n') => Some((i + 1, label)),
        _ => None,
    }
}

/// Length of a closing marker at the front of `rest`: optional spaces and
/// tabs, then `label` not followed by another label character.
pub(crate) fn end_marker_len(rest: &[u8], label: &[u8]) -> Option<usize> {
    let indent = rest
        .iter()
        .take_while(|&&b| b == b' ' || b == b'\t')
        .count();
    let end = indent + label.len();

    if !rest[indent..].starts_with(label) {
        return None;
    }
    match rest.get(end) {
        Some(&b) if is_label_byte(b) => None,
        _ => Some(end),
    }
}
