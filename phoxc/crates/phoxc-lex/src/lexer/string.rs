//! String lexing.
//!
//! A single-quoted string is one [`TokenKind::ConstantEncapsedString`]
//! token. Double-quoted, backtick and heredoc strings are split into their
//! parts: the opener, runs of [`TokenKind::EncapsedAndWhitespace`] text,
//! embedded `$name` variables and the terminator. Escapes are left as
//! written; decoding them is the literal compiler's job.

use tracing::warn;

use crate::token::TokenKind;
use crate::unicode::is_label_byte;

use super::core::{Enclosure, Scanner, StateFn};
use super::heredoc::end_marker_len;
use super::identifier::scan_variable;
use super::script::lex_php;

/// Lexes a single-quoted string, quotes included.
///
/// A backslash always takes the next character with it, so `\'` does not
/// end the string. An unterminated string becomes an
/// [`TokenKind::Invalid`] token running to the end of input.
pub(crate) fn lex_single_quoted(s: &mut Scanner) -> Option<StateFn> {
    s.next();
    loop {
        match s.next() {
            Some('\'') => {
                s.emit(TokenKind::ConstantEncapsedString);
                return Some(StateFn(lex_php));
            },
            Some('\\') => {
                s.next();
            },
            Some(_) => {},
            None => {
                warn!(
                    line = s.cursor().line(),
                    column = s.cursor().column(),
                    "unterminated single-quoted string"
                );
                s.emit(TokenKind::Invalid);
                return None;
            },
        }
    }
}

/// What the body loop found at the cursor.
enum Step {
    End,
    Escape,
    Variable,
    Close,
    EndMarker(usize),
    Text,
}

fn classify(rest: &[u8], enclosure: &Enclosure) -> Step {
    let Some(&b) = rest.first() else {
        return Step::End;
    };
    match (b, enclosure) {
        (b'\\', _) => Step::Escape,
        (b'$', _) if rest.get(1).is_some_and(|&c| is_label_byte(c) && !c.is_ascii_digit()) => {
            Step::Variable
        },
        (b'"', Enclosure::DoubleQuote) | (b'`', Enclosure::Backtick) => Step::Close,
        (b'\n', Enclosure::Heredoc(label)) => match end_marker_len(&rest[1..], label) {
            Some(len) => Step::EndMarker(len + 1),
            None => Step::Text,
        },
        (b'\r', Enclosure::Heredoc(label)) if rest.get(1) == Some(&b'\n') => {
            match end_marker_len(&rest[2..], label) {
                Some(len) => Step::EndMarker(len + 2),
                None => Step::Text,
            }
        },
        _ => Step::Text,
    }
}

/// Body state for double-quoted, backtick and heredoc strings.
///
/// Which terminator applies is taken from the scanner's current enclosure.
/// End of input inside a body ends the stream.
pub(crate) fn lex_encapsed(s: &mut Scanner) -> Option<StateFn> {
    loop {
        match classify(s.remaining(), &s.enclosure) {
            Step::End => {
                s.emit_pending(TokenKind::EncapsedAndWhitespace);
                warn!(enclosure = ?s.enclosure, "unterminated string body");
                s.enclosure = Enclosure::None;
                return None;
            },
            Step::Escape => {
                s.next();
                // a heredoc end marker is only recognised after a real newline
                let keeps_newline = matches!(s.enclosure, Enclosure::Heredoc(_));
                if !(keeps_newline && matches!(s.peek(), Some('\n' | '\r'))) {
                    s.next();
                }
            },
            Step::Variable => {
                s.emit_pending(TokenKind::EncapsedAndWhitespace);
                scan_variable(s);
                s.emit(TokenKind::Variable);
            },
            Step::Close => {
                s.emit_pending(TokenKind::EncapsedAndWhitespace);
                s.next();
                s.emit(TokenKind::SingleChar);
                s.enclosure = Enclosure::None;
                return Some(StateFn(lex_php));
            },
            Step::EndMarker(len) => {
                s.emit_pending(TokenKind::EncapsedAndWhitespace);
                s.advance_bytes(len);
                s.emit(TokenKind::EndHeredoc);
                s.enclosure = Enclosure::None;
                return Some(StateFn(lex_php));
            },
            Step::Text => {
                s.next();
            },
        }
    }
}
