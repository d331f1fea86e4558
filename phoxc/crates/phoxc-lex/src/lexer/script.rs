//! Dispatch inside script sections.
//!
//! `lex_php` looks at the next character, hands off to the lexer for the
//! construct it starts, and comes back to itself. It returns to
//! [`lex_text`](super::text::lex_text) after a close tag and stops at end of
//! input.

use crate::token::TokenKind;
use crate::unicode::{is_label_byte, is_label_start};

use super::comment::{lex_block_comment, lex_line_comment};
use super::core::{Enclosure, Scanner, StateFn};
use super::heredoc::lex_heredoc_start;
use super::identifier::{lex_label, lex_variable};
use super::number::lex_number;
use super::operator::lex_operator;
use super::string::{lex_encapsed, lex_single_quoted};
use super::text::lex_text;

const WHITESPACE: &str = " \t\n\r";

/// Script-section state.
pub fn lex_php(s: &mut Scanner) -> Option<StateFn> {
    let rest = s.remaining();
    let (first, second) = (rest.first().copied(), rest.get(1).copied());
    let heredoc = rest.starts_with(b"<<<");

    match (first?, second) {
        (b' ' | b'\t' | b'\n' | b'\r', _) => {
            s.accept_run(WHITESPACE);
            s.emit(TokenKind::Whitespace);
            Some(StateFn(lex_php))
        },
        (b'?', Some(b'>')) => Some(lex_close_tag(s)),
        (b'#', _) | (b'/', Some(b'/')) => lex_line_comment(s),
        (b'/', Some(b'*')) => lex_block_comment(s),
        (b'$', Some(c)) if is_label_byte(c) && !c.is_ascii_digit() => lex_variable(s),
        (b'0'..=b'9', _) => lex_number(s),
        (b'.', Some(b'0'..=b'9')) => lex_number(s),
        (b'\'', _) => lex_single_quoted(s),
        (b'"', _) => open_encapsed(s, Enclosure::DoubleQuote),
        (b'`', _) => open_encapsed(s, Enclosure::Backtick),
        (b'<', _) if heredoc => lex_heredoc_start(s),
        _ => match s.peek() {
            Some(c) if is_label_start(c) => lex_label(s),
            _ => lex_operator(s),
        },
    }
}

/// `?>` plus one directly following newline.
fn lex_close_tag(s: &mut Scanner) -> StateFn {
    s.advance_bytes(2);
    if s.remaining().starts_with(b"\r\n") {
        s.advance_bytes(2);
    } else if s.remaining().starts_with(b"\n") {
        s.advance_bytes(1);
    }
    s.emit(TokenKind::CloseTag);
    StateFn(lex_text)
}

/// Emits the opening quote and enters the body state.
fn open_encapsed(s: &mut Scanner, enclosure: Enclosure) -> Option<StateFn> {
    s.next();
    s.emit(TokenKind::SingleChar);
    s.enclosure = enclosure;
    Some(StateFn(lex_encapsed))
}

#[cfg(test)]
mod tests {
    use super::super::tests::{lex_pairs, lex_php_pairs};
    use crate::token::{Keyword, TokenKind::*};

    #[test]
    fn test_statement() {
        assert_eq!(
            lex_php_pairs("echo $a;"),
            [
                (Keyword(Keyword::Echo), "echo".into()),
                (Whitespace, " ".into()),
                (Variable, "$a".into()),
                (SingleChar, ";".into()),
            ]
        );
    }

    #[test]
    fn test_whitespace_run() {
        assert_eq!(lex_php_pairs(" \t\r\n x")[0], (Whitespace, " \t\r\n ".into()));
    }

    #[test]
    fn test_close_tag_returns_to_text() {
        let tokens = lex_pairs("<?php 1 ?>\n<p>");
        assert_eq!(tokens[3], (CloseTag, "?>\n".into()));
        assert_eq!(tokens[4], (InlineHtml, "<p>".into()));
    }

    #[test]
    fn test_close_tag_without_newline() {
        let tokens = lex_pairs("<?php ?> x");
        assert_eq!(tokens[1], (CloseTag, "?>".into()));
        assert_eq!(tokens[2], (InlineHtml, " x".into()));
    }

    #[test]
    fn test_lone_dollar_is_single_char() {
        assert_eq!(
            lex_php_pairs("$$a"),
            [(SingleChar, "$".into()), (Variable, "$a".into())]
        );
    }

    #[test]
    fn test_punctuation() {
        let kinds: Vec<_> = lex_php_pairs("(){}[],@").into_iter().map(|(k, _)| k).collect();
        assert!(kinds.iter().all(|k| *k == SingleChar));
        assert_eq!(kinds.len(), 8);
    }

    #[test]
    fn test_opening_quotes() {
        assert_eq!(lex_php_pairs("\"")[0], (SingleChar, "\"".into()));
        assert_eq!(lex_php_pairs("`")[0], (SingleChar, "`".into()));
    }

    #[test]
    fn test_leading_dot_number() {
        assert_eq!(lex_php_pairs(".5"), [(DNumber, ".5".into())]);
    }
}
