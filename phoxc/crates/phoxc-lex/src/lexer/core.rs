//! Core lexer implementation.
//!
//! The scan runs on its own thread. A [`Scanner`] owns the cursor and the
//! sending half of a bounded channel and drives a chain of state functions;
//! the [`Lexer`] handed back to the caller owns the receiving half and pulls
//! tokens one at a time. The channel is small, so the scanner never runs far
//! ahead of its consumer.

use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender};
use phoxc_util::FileId;
use tracing::{debug, trace, warn};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

use super::text::lex_text;

/// Default number of tokens buffered between scanner and consumer.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 2;

/// Name of the producer thread each [`Lexer`] starts.
pub const SCANNER_THREAD_NAME: &str = "phox-scanner";

/// Settings for one scan pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerOptions {
    /// Source unit the produced spans refer to.
    pub file_id: FileId,
    /// Tokens buffered between the scanner thread and the consumer.
    /// Values below 1 are treated as 1.
    pub channel_capacity: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            file_id: FileId::DUMMY,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// One state of the scanning state machine.
///
/// A state consumes some input, emits zero or more tokens and returns the
/// next state, or `None` to stop.
#[derive(Clone, Copy)]
pub struct StateFn(pub fn(&mut Scanner) -> Option<StateFn>);

impl StateFn {
    #[inline]
    fn call(self, scanner: &mut Scanner) -> Option<StateFn> {
        (self.0)(scanner)
    }
}

impl fmt::Debug for StateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StateFn(..)")
    }
}

/// The construct whose body the scanner is currently inside.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Enclosure {
    #[default]
    None,
    DoubleQuote,
    Backtick,
    Heredoc(Vec<u8>),
}

/// The producer half of a scan.
///
/// State functions receive a `&mut Scanner`; the cursor primitives are
/// forwarded from [`Cursor`] and [`emit`](Scanner::emit) publishes the
/// pending text as a token.
pub struct Scanner {
    cursor: Cursor,
    file_id: FileId,
    tx: Sender<Token>,
    emitted: usize,
    halted: bool,
    pub(crate) enclosure: Enclosure,
}

impl Scanner {
    /// Creates a scanner over `source` that publishes into `tx`.
    pub fn new(source: Arc<[u8]>, file_id: FileId, tx: Sender<Token>) -> Self {
        Self {
            cursor: Cursor::new(source),
            file_id,
            tx,
            emitted: 0,
            halted: false,
            enclosure: Enclosure::None,
        }
    }

    /// Runs the state machine from `initial` until a state returns `None`
    /// or the consumer goes away. Consumes the scanner, which closes the
    /// channel.
    pub fn run(mut self, initial: StateFn) {
        debug!(
            file = self.file_id.index(),
            bytes = self.cursor.source().len(),
            "scanner started"
        );

        let mut state = Some(initial);
        while let Some(current) = state {
            state = current.call(&mut self);
            if self.halted {
                break;
            }
        }

        debug!(
            file = self.file_id.index(),
            tokens = self.emitted,
            halted = self.halted,
            "scanner finished"
        );
    }

    /// Publishes `[start, pos)` as a token of `kind` and moves `start` up
    /// to `pos`.
    ///
    /// Blocks while the channel is full. If the consumer has gone away the
    /// scanner is marked halted and the token is dropped.
    pub fn emit(&mut self, kind: TokenKind) {
        let span = self.cursor.take_span(self.file_id);
        let token = Token::new(kind, span, Arc::clone(self.cursor.source()));
        trace!(kind = %token.kind, start = span.start, end = span.end, "emit");

        if self.tx.send(token).is_ok() {
            self.emitted += 1;
        } else if !self.halted {
            debug!(file = self.file_id.index(), "token consumer disconnected, halting scanner");
            self.halted = true;
        }
    }

    /// Emits only if the pending text is non-empty.
    pub fn emit_pending(&mut self, kind: TokenKind) {
        if !self.cursor.pending().is_empty() {
            self.emit(kind);
        }
    }

    /// Returns true once a send has failed.
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        self.cursor.next()
    }

    #[inline]
    pub fn backup(&mut self) {
        self.cursor.backup()
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.cursor.peek()
    }

    #[inline]
    pub fn ignore(&mut self) {
        self.cursor.ignore()
    }

    #[inline]
    pub fn accept(&mut self, valid: &str) -> bool {
        self.cursor.accept(valid)
    }

    #[inline]
    pub fn accept_run(&mut self, valid: &str) {
        self.cursor.accept_run(valid)
    }

    #[inline]
    pub fn accept_while(&mut self, pred: impl Fn(char) -> bool) {
        self.cursor.accept_while(pred)
    }

    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        self.cursor.advance_bytes(count)
    }

    #[inline]
    pub fn remaining(&self) -> &[u8] {
        self.cursor.remaining()
    }

    #[inline]
    pub fn pending(&self) -> &[u8] {
        self.cursor.pending()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}

/// Lexer for Phox source units.
///
/// Creating a lexer starts the scan on a background thread. Tokens are
/// delivered in source order, and together they cover every input byte
/// exactly once.
///
/// # Example
///
/// ```
/// use phoxc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("<?php echo $x;".as_bytes());
///
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::OpenTag);
/// let kinds: Vec<_> = lexer.map(|t| t.kind.to_string()).collect();
/// assert_eq!(kinds, ["T_ECHO", "T_WHITESPACE", "T_VARIABLE", "T_CHAR"]);
/// ```
pub struct Lexer {
    rx: Receiver<Token>,
    worker: Option<JoinHandle<()>>,
}

impl Lexer {
    /// Starts scanning `source` with default options.
    pub fn new(source: impl Into<Arc<[u8]>>) -> Self {
        Self::with_options(source, LexerOptions::default())
    }

    /// Starts scanning `source` with the given options.
    pub fn with_options(source: impl Into<Arc<[u8]>>, options: LexerOptions) -> Self {
        Self::with_state(source, options, StateFn(lex_text))
    }

    /// Starts scanning `source` from a caller-supplied initial state.
    ///
    /// This is how a different grammar is plugged into the same scanning
    /// machinery.
    pub fn with_state(
        source: impl Into<Arc<[u8]>>,
        options: LexerOptions,
        initial: StateFn,
    ) -> Self {
        let source = source.into();
        let (tx, rx) = channel::bounded(options.channel_capacity.max(1));
        let scanner = Scanner::new(Arc::clone(&source), options.file_id, tx);
        let spawned = thread::Builder::new()
            .name(SCANNER_THREAD_NAME.into())
            .spawn(move || scanner.run(initial));

        match spawned {
            Ok(worker) => Self {
                rx,
                worker: Some(worker),
            },
            Err(err) => {
                // the failed spawn dropped the first scanner and its sender
                warn!(%err, "could not start scanner thread, scanning inline");
                let (tx, rx) = channel::unbounded();
                Scanner::new(source, options.file_id, tx).run(initial);
                Self { rx, worker: None }
            },
        }
    }

    /// Returns the next token, blocking until the scanner produces one.
    ///
    /// Returns `None` once the scanner has finished. If the scanner thread
    /// panicked, the panic is resumed here.
    pub fn next_token(&mut self) -> Option<Token> {
        match self.rx.recv() {
            Ok(token) => Some(token),
            Err(_) => {
                self.join_worker();
                None
            },
        }
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            if let Err(payload) = worker.join() {
                std::panic::resume_unwind(payload);
            }
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl fmt::Debug for Lexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("buffered", &self.rx.len())
            .field("finished", &self.worker.is_none())
            .finish()
    }
}
