//! Escape sequence decoding.
//!
//! Two decoders live here. [`unescape`] handles the text segments of
//! double-quoted, backtick and heredoc strings. [`unescape_single_quoted`]
//! handles the body of a single-quoted string, where only `\\` and `\'`
//! are escapes.
//!
//! Neither decoder fails. A sequence that does not decode is copied to the
//! output as written.

use phoxc_lex::unicode::{parse_hex_byte, parse_hex_u64};

use crate::value::ByteString;

/// Decodes the escape sequences of one encapsed text segment.
///
/// | Escape      | Value                                            |
/// |-------------|--------------------------------------------------|
/// | `\t` `\n` `\v` `\f` `\r` | the control character               |
/// | `\"` `\\`   | the character                                    |
/// | `\0`..`\7`  | one byte, the digit's value; one digit only      |
/// | `\xHH`      | one byte; exactly two hex digits                 |
/// | `\u{H..}`   | the code point, UTF-8 encoded; U+FFFD if invalid |
///
/// Anything else, including a trailing lone backslash, is kept as written.
///
/// # Examples
///
/// ```
/// use phoxc_lit::unescape;
///
/// assert_eq!(unescape(br"a\tb\n"), "a\tb\n");
/// assert_eq!(unescape(br"\x41\u{48}"), "AH");
/// assert_eq!(unescape(br"\x4"), r"\x4");
/// assert_eq!(unescape(br"\q"), r"\q");
/// assert_eq!(unescape(br"\75"), b"\x075");
/// ```
pub fn unescape(segment: &[u8]) -> ByteString {
    if !segment.contains(&b'\\') {
        return ByteString::from(segment);
    }

    let mut out = ByteString::with_capacity(segment.len());
    let mut rest = segment;

    while let Some((&b, tail)) = rest.split_first() {
        if b != b'\\' {
            out.push(b);
            rest = tail;
            continue;
        }

        // `rest` starts at the byte after the backslash
        let Some(&c) = tail.first() else {
            out.push(b'\\');
            break;
        };
        rest = tail;

        let consumed = match c {
            b't' => push(&mut out, b'\t'),
            b'n' => push(&mut out, b'\n'),
            b'v' => push(&mut out, 0x0B),
            b'f' => push(&mut out, 0x0C),
            b'r' => push(&mut out, b'\r'),
            b'"' | b'\\' => push(&mut out, c),
            b'0'..=b'7' => push(&mut out, c - b'0'),
            b'x' => decode_hex_byte(&mut out, rest),
            b'u' => decode_code_point(&mut out, rest),
            _ => keep(&mut out, c),
        };
        rest = &rest[consumed..];
    }

    out
}

#[inline]
fn push(out: &mut ByteString, byte: u8) -> usize {
    out.push(byte);
    1
}

#[inline]
fn keep(out: &mut ByteString, c: u8) -> usize {
    out.push(b'\\');
    out.push(c);
    1
}

/// `rest` starts at the `x`. Returns the number of bytes consumed.
fn decode_hex_byte(out: &mut ByteString, rest: &[u8]) -> usize {
    match rest.get(1..3).and_then(parse_hex_byte) {
        Some(byte) => push(out, byte) + 2,
        None => keep(out, b'x'),
    }
}

/// `rest` starts at the `u`. Returns the number of bytes consumed.
fn decode_code_point(out: &mut ByteString, rest: &[u8]) -> usize {
    if rest.len() < 3 || rest[1] != b'{' {
        return keep(out, b'u');
    }
    let Some(close) = rest.iter().position(|&b| b == b'}') else {
        return keep(out, b'u');
    };
    let Some(value) = parse_hex_u64(&rest[2..close]) else {
        return keep(out, b'u');
    };

    // only the low 32 bits are kept
    let c = char::from_u32(value as u32).unwrap_or(char::REPLACEMENT_CHARACTER);
    out.push_char(c);
    close + 1
}

/// Decodes the body of a single-quoted string, quotes already removed.
///
/// Only `\\` and `\'` are escapes. Every other backslash is kept, as is a
/// trailing lone backslash.
///
/// # Examples
///
/// ```
/// use phoxc_lit::unescape_single_quoted;
///
/// assert_eq!(unescape_single_quoted(br"it\'s"), "it's");
/// assert_eq!(unescape_single_quoted(br"a\nb"), r"a\nb");
/// assert_eq!(unescape_single_quoted(br"C:\\dir\"), r"C:\dir\");
/// ```
pub fn unescape_single_quoted(body: &[u8]) -> ByteString {
    let mut out = ByteString::with_capacity(body.len());
    let mut bytes = body.iter().copied();

    while let Some(b) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        match bytes.next() {
            Some(c @ (b'\\' | b'\'')) => out.push(c),
            Some(c) => {
                out.push(b'\\');
                out.push(c);
            },
            None => out.push(b'\\'),
        }
    }

    out
}
