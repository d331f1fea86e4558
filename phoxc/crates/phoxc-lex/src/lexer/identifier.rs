//! Variable, label and keyword lexing.

use crate::token::{keyword_from_label, TokenKind};
use crate::unicode::is_label_continue;

use super::core::{Scanner, StateFn};
use super::script::lex_php;

/// Lexes a label, emitting a keyword kind if it is reserved.
///
/// Labels start with a letter, underscore or any non-ASCII character and
/// continue with those or digits.
pub(crate) fn lex_label(s: &mut Scanner) -> Option<StateFn> {
    s.accept_while(is_label_continue);
    let kind = keyword_from_label(s.pending()).map_or(TokenKind::Label, TokenKind::Keyword);
    s.emit(kind);
    Some(StateFn(lex_php))
}

/// Lexes `$` followed by a label.
pub(crate) fn lex_variable(s: &mut Scanner) -> Option<StateFn> {
    scan_variable(s);
    s.emit(TokenKind::Variable);
    Some(StateFn(lex_php))
}

/// Consumes `$name` without emitting. The caller has checked that a label
/// follows the sigil.
pub(crate) fn scan_variable(s: &mut Scanner) {
    s.next();
    s.accept_while(is_label_continue);
}

#[cfg(test)]
mod tests {
    use super::super::tests::lex_php_pairs;
    use crate::token::{Keyword, TokenKind};

    fn single(source: &str) -> (TokenKind, String) {
        let tokens = lex_php_pairs(source);
        assert_eq!(tokens.len(), 1, "{tokens:?}");
        tokens.into_iter().next().unwrap()
    }

    #[test]
    fn test_simple_label() {
        assert_eq!(single("foo"), (TokenKind::Label, "foo".into()));
    }

    #[test]
    fn test_label_with_underscore_and_digits() {
        assert_eq!(single("_foo_bar_123"), (TokenKind::Label, "_foo_bar_123".into()));
    }

    #[test]
    fn test_keyword_any_case() {
        assert_eq!(single("function").0, TokenKind::Keyword(Keyword::Function));
        assert_eq!(single("WHILE").0, TokenKind::Keyword(Keyword::While));
        assert_eq!(single("Echo").0, TokenKind::Keyword(Keyword::Echo));
    }

    #[test]
    fn test_keyword_prefix_is_label() {
        assert_eq!(single("classes").0, TokenKind::Label);
        assert_eq!(single("if_").0, TokenKind::Label);
    }

    #[test]
    fn test_unicode_label() {
        assert_eq!(single("café"), (TokenKind::Label, "café".into()));
    }

    #[test]
    fn test_variable() {
        assert_eq!(single("$user_id"), (TokenKind::Variable, "$user_id".into()));
        assert_eq!(single("$_"), (TokenKind::Variable, "$_".into()));
    }

    #[test]
    fn test_variable_stops_at_arrow() {
        let tokens = lex_php_pairs("$obj->name");
        assert_eq!(tokens[0], (TokenKind::Variable, "$obj".into()));
        assert_eq!(tokens[1], (TokenKind::Operator, "->".into()));
        assert_eq!(tokens[2], (TokenKind::Label, "name".into()));
    }
}
