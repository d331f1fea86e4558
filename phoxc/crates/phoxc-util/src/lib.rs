//! phoxc-util - Shared foundation types for the Phox front end
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Every phase of the front end reports positions the same way: a [`Span`]
//! holding byte offsets into one source unit, the 1-based line and column of
//! its first byte, and the [`FileId`] of the unit. The scanner stamps a span
//! on each token; the literal compiler copies those spans onto the expression
//! nodes it builds; the CLI turns them back into `file:line:col` text through
//! a [`SourceMap`].
//!
//! SOURCE TEXT IS BYTES:
//! ---------------------
//! Source units are stored as `Arc<[u8]>`, not `Arc<str>`. The language
//! accepts arbitrary bytes inside string literals and labels, so nothing in
//! this crate assumes valid UTF-8. Rendering for humans goes through
//! `String::from_utf8_lossy`.

pub mod error;
pub mod span;

pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
