//! Byte cursor with single-step backtracking.
//!
//! This module provides the `Cursor` struct which holds the read position of
//! a scan pass. It tracks two offsets: `start`, where the token currently
//! being accumulated begins, and `pos`, the next byte to read. It also keeps
//! the width of the most recently decoded code point so that exactly one
//! `next` can be undone with `backup`.
//!
//! Invariant: `0 <= start <= pos <= len`.

use std::sync::Arc;

use phoxc_util::{FileId, Span};

use crate::unicode::decode_char;

/// A cursor for traversing a source buffer one code point at a time.
///
/// # Example
///
/// ```
/// use phoxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("$x = 1;".as_bytes());
///
/// assert_eq!(cursor.next(), Some('$'));
/// cursor.accept_run("abcdefghijklmnopqrstuvwxyz");
/// assert_eq!(cursor.pending(), b"$x");
/// assert_eq!(cursor.peek(), Some(' '));
/// ```
pub struct Cursor {
    /// The source buffer being traversed.
    source: Arc<[u8]>,

    /// Start of the pending token.
    start: usize,

    /// Next byte to read.
    pos: usize,

    /// Width in bytes of the last code point returned by `next`.
    width: usize,

    /// Line number of `start` (1-based).
    line: u32,

    /// Byte offset of the first byte of the line containing `start`.
    line_start: usize,
}

impl Cursor {
    /// Creates a new cursor at the beginning of `source`.
    pub fn new(source: impl Into<Arc<[u8]>>) -> Self {
        Self {
            source: source.into(),
            start: 0,
            pos: 0,
            width: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Decodes the code point at the cursor and advances past it.
    ///
    /// Returns `None` at end of input, in which case the recorded width is
    /// reset to 0. Malformed UTF-8 yields `U+FFFD` and advances one byte.
    ///
    /// # Example
    ///
    /// ```
    /// use phoxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("é".as_bytes());
    /// assert_eq!(cursor.next(), Some('é'));
    /// assert_eq!(cursor.position(), 2);
    /// assert_eq!(cursor.next(), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        match decode_char(&self.source[self.pos..]) {
            Some((c, width)) => {
                self.width = width;
                self.pos += width;
                Some(c)
            },
            None => {
                self.width = 0;
                None
            },
        }
    }

    /// Steps back over the code point returned by the last `next`.
    ///
    /// Only one step of history is kept: the width is zeroed, so a second
    /// `backup` without an intervening `next` does nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use phoxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab".as_bytes());
    /// cursor.next();
    /// cursor.next();
    /// cursor.backup();
    /// cursor.backup();
    /// assert_eq!(cursor.position(), 1);
    /// ```
    #[inline]
    pub fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// Returns the next code point without consuming it.
    ///
    /// Neither the position nor the recorded width changes, so a `backup`
    /// after `next`, `peek` still undoes the `next`.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        decode_char(&self.source[self.pos..]).map(|(c, _)| c)
    }

    /// Discards the pending text without emitting it.
    #[inline]
    pub fn ignore(&mut self) {
        self.advance_start();
    }

    /// Consumes the next code point if it is one of `valid`.
    ///
    /// # Example
    ///
    /// ```
    /// use phoxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("+1".as_bytes());
    /// assert!(cursor.accept("+-"));
    /// assert!(!cursor.accept("+-"));
    /// assert_eq!(cursor.position(), 1);
    /// ```
    pub fn accept(&mut self, valid: &str) -> bool {
        match self.next() {
            Some(c) if valid.contains(c) => true,
            _ => {
                self.backup();
                false
            },
        }
    }

    /// Consumes a run of code points from `valid`.
    ///
    /// Stops on the first code point outside the set (or at end of input)
    /// and leaves the cursor on it.
    pub fn accept_run(&mut self, valid: &str) {
        self.accept_while(|c| valid.contains(c));
    }

    /// Consumes code points while `pred` holds. Predicate form of
    /// [`accept_run`](Self::accept_run).
    pub fn accept_while(&mut self, pred: impl Fn(char) -> bool) {
        while matches!(self.next(), Some(c) if pred(c)) {}
        self.backup();
    }

    /// Advances over `count` bytes that a lookahead on
    /// [`remaining`](Self::remaining) already matched.
    ///
    /// Clamped to the end of input. Clears the backup history, since the
    /// skipped bytes were not decoded as one code point.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.source.len());
        self.width = 0;
    }

    /// Returns the unread part of the input.
    #[inline]
    pub fn remaining(&self) -> &[u8] {
        &self.source[self.pos..]
    }

    /// Returns the pending token text, `[start, pos)`.
    #[inline]
    pub fn pending(&self) -> &[u8] {
        &self.source[self.start..self.pos]
    }

    /// Closes the pending token: returns its span and moves `start` to
    /// `pos`.
    pub fn take_span(&mut self, file_id: FileId) -> Span {
        let span = Span::with_file(self.start, self.pos, file_id, self.line, self.column());
        self.advance_start();
        span
    }

    /// Moves `start` up to `pos`, keeping the line bookkeeping in step.
    fn advance_start(&mut self) {
        for (offset, &b) in self.source[self.start..self.pos].iter().enumerate() {
            if b == b'\n' {
                self.line += 1;
                self.line_start = self.start + offset + 1;
            }
        }
        self.start = self.pos;
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Line of the pending token's first byte (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the pending token's first byte (1-based, in bytes).
    #[inline]
    pub fn column(&self) -> u32 {
        (self.start - self.line_start + 1) as u32
    }

    /// Returns a shared handle to the source buffer.
    #[inline]
    pub fn source(&self) -> &Arc<[u8]> {
        &self.source
    }
}
