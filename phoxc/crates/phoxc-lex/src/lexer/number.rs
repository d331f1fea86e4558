//! Number literal lexing.
//!
//! Integers may be decimal, hexadecimal (`0x`), binary (`0b`) or octal
//! (`0o` or a leading `0`), with `_` separators. A fraction or an exponent
//! makes the literal a float. Values are not computed here.

use crate::token::TokenKind;

use super::core::{Scanner, StateFn};
use super::script::lex_php;

const DECIMAL: &str = "0123456789_";
const HEX: &str = "0123456789abcdefABCDEF_";
const BINARY: &str = "01_";
const OCTAL: &str = "01234567_";

/// Lexes an integer or float literal starting at a digit or at `.` followed
/// by a digit.
pub(crate) fn lex_number(s: &mut Scanner) -> Option<StateFn> {
    let kind = scan_number(s);
    s.emit(kind);
    Some(StateFn(lex_php))
}

fn scan_number(s: &mut Scanner) -> TokenKind {
    if let Some(digits) = radix_prefix(s.remaining()) {
        s.advance_bytes(2);
        s.accept_run(digits);
        return TokenKind::LNumber;
    }

    let mut kind = TokenKind::LNumber;
    s.accept_run(DECIMAL);
    if s.accept(".") {
        kind = TokenKind::DNumber;
        s.accept_run(DECIMAL);
    }
    if let Some(len) = exponent_len(s.remaining()) {
        kind = TokenKind::DNumber;
        s.advance_bytes(len);
        s.accept_run(DECIMAL);
    }
    kind
}

/// Returns the digit set for a `0x`, `0b` or `0o` prefix that is followed
/// by at least one digit of that radix.
fn radix_prefix(rest: &[u8]) -> Option<&'static str> {
    let (digits, is_digit): (&str, fn(&u8) -> bool) = match rest {
        [b'0', b'x' | b'X', ..] => (HEX, u8::is_ascii_hexdigit),
        [b'0', b'b' | b'B', ..] => (BINARY, |b: &u8| matches!(*b, b'0' | b'1')),
        [b'0', b'o' | b'O', ..] => (OCTAL, |b: &u8| matches!(*b, b'0'..=b'7')),
        _ => return None,
    };
    rest.get(2).filter(|b| is_digit(b)).map(|_| digits)
}

/// Length of `[eE][+-]?` when a digit follows it.
fn exponent_len(rest: &[u8]) -> Option<usize> {
    let sign = match rest {
        [b'e' | b'E', b'+' | b'-', ..] => 1,
        [b'e' | b'E', ..] => 0,
        _ => return None,
    };
    let marker = 1 + sign;
    rest.get(marker)
        .filter(|b| b.is_ascii_digit())
        .map(|_| marker)
}

#[cfg(test)]
mod tests {
    use super::super::tests::lex_php_pairs;
    use crate::token::TokenKind::{self, *};

    fn kinds(source: &str) -> Vec<(TokenKind, String)> {
        lex_php_pairs(source)
            .into_iter()
            .filter(|(kind, _)| *kind != Whitespace)
            .collect()
    }

    #[test]
    fn test_integers() {
        assert_eq!(
            kinds("42 1_000 0x1F 0b1010 0o17 0755"),
            [
                (LNumber, "42".into()),
                (LNumber, "1_000".into()),
                (LNumber, "0x1F".into()),
                (LNumber, "0b1010".into()),
                (LNumber, "0o17".into()),
                (LNumber, "0755".into()),
            ]
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(
            kinds("3.14 1. .5 1e10 2.5e-3 7E+2"),
            [
                (DNumber, "3.14".into()),
                (DNumber, "1.".into()),
                (DNumber, ".5".into()),
                (DNumber, "1e10".into()),
                (DNumber, "2.5e-3".into()),
                (DNumber, "7E+2".into()),
            ]
        );
    }

    #[test]
    fn test_prefix_without_digits() {
        assert_eq!(kinds("0x"), [(LNumber, "0".into()), (Label, "x".into())]);
        assert_eq!(kinds("0b2"), [(LNumber, "0".into()), (Label, "b2".into())]);
    }

    #[test]
    fn test_exponent_without_digits() {
        assert_eq!(kinds("1e"), [(LNumber, "1".into()), (Label, "e".into())]);
        assert_eq!(
            kinds("1e+x"),
            [
                (LNumber, "1".into()),
                (Label, "e".into()),
                (SingleChar, "+".into()),
                (Label, "x".into()),
            ]
        );
    }

    #[test]
    fn test_number_then_concat() {
        assert_eq!(kinds("1.2.3"), [(DNumber, "1.2".into()), (DNumber, ".3".into())]);
    }
}
