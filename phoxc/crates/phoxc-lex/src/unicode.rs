//! Unicode and byte-level utilities for the Phox lexer.
//!
//! Source units are byte buffers that are *mostly* UTF-8. The helpers here
//! decode one code point at a time without ever failing, classify label
//! characters the way the language does (any byte `>= 0x80` is a letter),
//! and parse the hex digit runs used by escape sequences.

/// Decodes the code point at the front of `bytes`.
///
/// Returns the character and its width in bytes, or `None` when `bytes` is
/// empty. Malformed or truncated UTF-8 decodes as `U+FFFD` with a width of
/// one byte, so a caller advancing by the returned width always makes
/// progress.
///
/// # Example
///
/// ```
/// use phoxc_lex::unicode::decode_char;
///
/// assert_eq!(decode_char(b"abc"), Some(('a', 1)));
/// assert_eq!(decode_char("é!".as_bytes()), Some(('é', 2)));
/// assert_eq!(decode_char(&[0xFF, b'a']), Some(('\u{FFFD}', 1)));
/// assert_eq!(decode_char(b""), None);
/// ```
#[inline]
pub fn decode_char(bytes: &[u8]) -> Option<(char, usize)> {
    let &lead = bytes.first()?;

    // Fast path for ASCII (most common case)
    if lead < 0x80 {
        return Some((lead as char, 1));
    }

    let width = match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Some((char::REPLACEMENT_CHARACTER, 1)),
    };

    match bytes.get(..width).map(std::str::from_utf8) {
        Some(Ok(s)) => s.chars().next().map(|c| (c, width)),
        _ => Some((char::REPLACEMENT_CHARACTER, 1)),
    }
}

/// Checks if a character may start a label (identifier or variable name).
///
/// # Example
///
/// ```
/// use phoxc_lex::unicode::is_label_start;
///
/// assert!(is_label_start('a'));
/// assert!(is_label_start('_'));
/// assert!(is_label_start('é'));
/// assert!(!is_label_start('1'));
/// assert!(!is_label_start('$'));
/// ```
#[inline]
pub fn is_label_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Checks if a character may continue a label.
#[inline]
pub fn is_label_continue(c: char) -> bool {
    is_label_start(c) || c.is_ascii_digit()
}

/// Byte-level variant of [`is_label_continue`], for lookahead over raw input.
#[inline]
pub fn is_label_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

/// Converts a hex digit byte to its numeric value.
///
/// # Example
///
/// ```
/// use phoxc_lex::unicode::hex_digit_to_value;
///
/// assert_eq!(hex_digit_to_value(b'0'), Some(0));
/// assert_eq!(hex_digit_to_value(b'a'), Some(10));
/// assert_eq!(hex_digit_to_value(b'F'), Some(15));
/// assert_eq!(hex_digit_to_value(b'g'), None);
/// ```
#[inline]
pub fn hex_digit_to_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Parses exactly two hex digits into a byte.
///
/// Signs, separators and any other length are rejected.
///
/// # Example
///
/// ```
/// use phoxc_lex::unicode::parse_hex_byte;
///
/// assert_eq!(parse_hex_byte(b"41"), Some(0x41));
/// assert_eq!(parse_hex_byte(b"fF"), Some(0xFF));
/// assert_eq!(parse_hex_byte(b"4"), None);
/// assert_eq!(parse_hex_byte(b"+4"), None);
/// assert_eq!(parse_hex_byte(b"GG"), None);
/// ```
pub fn parse_hex_byte(hex: &[u8]) -> Option<u8> {
    match hex {
        [hi, lo] => Some((hex_digit_to_value(*hi)? << 4) | hex_digit_to_value(*lo)?),
        _ => None,
    }
}

/// Parses a non-empty run of hex digits into a `u64`.
///
/// Returns `None` for an empty run, any non-hex byte, or overflow.
///
/// # Example
///
/// ```
/// use phoxc_lex::unicode::parse_hex_u64;
///
/// assert_eq!(parse_hex_u64(b"1F600"), Some(0x1F600));
/// assert_eq!(parse_hex_u64(b"ffffffffffffffff"), Some(u64::MAX));
/// assert_eq!(parse_hex_u64(b"10000000000000000"), None);
/// assert_eq!(parse_hex_u64(b""), None);
/// ```
pub fn parse_hex_u64(hex: &[u8]) -> Option<u64> {
    if hex.is_empty() {
        return None;
    }
    let mut value = 0u64;
    for &b in hex {
        value = value.checked_mul(16)?;
        value = value.checked_add(u64::from(hex_digit_to_value(b)?))?;
    }
    Some(value)
}
