//! Owned byte strings.
//!
//! Decoded literal values are bytes, not text: `"\x80"` is a valid literal
//! whose value is not UTF-8.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::ops::Deref;

/// An owned, growable byte string.
///
/// Displays lossily as UTF-8 and debugs as a quoted, escaped string.
///
/// # Examples
///
/// ```
/// use phoxc_lit::ByteString;
///
/// let mut value = ByteString::from("caf");
/// value.push_char('é');
/// value.push(0x80);
/// assert_eq!(value.len(), 6);
/// assert_eq!(format!("{value:?}"), r#""caf\xc3\xa9\x80""#);
/// assert_eq!(value.to_string(), "café\u{FFFD}");
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.0.push(byte);
    }

    /// Appends `c` encoded as UTF-8.
    pub fn push_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.0.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    #[inline]
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Returns the value as text, replacing invalid UTF-8.
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl Deref for ByteString {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteString {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for ByteString {
    #[inline]
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteString {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteString {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for ByteString {
    #[inline]
    fn from(bytes: &[u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for ByteString {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for ByteString {
    #[inline]
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for ByteString {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.0 == other[..]
    }
}

impl PartialEq<str> for ByteString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for &b in &self.0 {
            match b {
                b'"' => f.write_str("\\\"")?,
                b'\\' => f.write_str("\\\\")?,
                b'\n' => f.write_str("\\n")?,
                b'\r' => f.write_str("\\r")?,
                b'\t' => f.write_str("\\t")?,
                0x20..=0x7E => write!(f, "{}", b as char)?,
                _ => write!(f, "\\x{b:02x}")?,
            }
        }
        f.write_str("\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let value = ByteString::new();
        assert!(value.is_empty());
        assert_eq!(value, "");
    }

    #[test]
    fn test_push_char_encodes_utf8() {
        let mut value = ByteString::new();
        value.push_char('H');
        value.push_char('€');
        assert_eq!(value, "H€");
        assert_eq!(value.len(), 4);
    }

    #[test]
    fn test_comparisons() {
        let value = ByteString::from(b"ab");
        assert_eq!(value, &b"ab"[..]);
        assert_eq!(value, b"ab");
        assert_eq!(value, "ab");
        assert_eq!(value, ByteString::from(vec![b'a', b'b']));
    }

    #[test]
    fn test_debug_escapes_controls_and_quotes() {
        let value = ByteString::from("a\t\"b\"\n");
        assert_eq!(format!("{value:?}"), r#""a\t\"b\"\n""#);
    }

    #[test]
    fn test_debug_keeps_single_quote() {
        assert_eq!(format!("{:?}", ByteString::from("it's")), r#""it's""#);
    }

    #[test]
    fn test_display_is_lossy() {
        let value = ByteString::from(vec![b'o', b'k', 0xFF]);
        assert_eq!(value.to_string(), "ok\u{FFFD}");
    }

    #[test]
    fn test_into_bytes() {
        assert_eq!(ByteString::from("xyz").into_bytes(), b"xyz".to_vec());
    }
}
