//! Source map for managing source files and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing multiple source files
//! and computing line/column information from byte offsets.

use std::sync::Arc;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use phoxc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "index.php", "<?php echo 1;");
/// assert_eq!(file.name(), "index.php");
/// assert_eq!(file.content(), b"<?php echo 1;");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content, not necessarily UTF-8
    content: Arc<[u8]>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `id` - Unique file identifier
    /// * `name` - File name or path
    /// * `content` - File content
    pub fn new(id: usize, name: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        let content: Arc<[u8]> = Arc::from(content.as_ref());
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &[u8]) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .iter()
                .enumerate()
                .filter(|(_, b)| **b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns a shared handle to the content, suitable for handing to a
    /// scanner thread without copying.
    #[inline]
    pub fn shared_content(&self) -> Arc<[u8]> {
        Arc::clone(&self.content)
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use phoxc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "a.php", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the text of a 1-based line without its line terminator.
    pub fn line_at(&self, line: usize) -> Option<&[u8]> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        let mut text = &self.content[start..end];
        while let [rest @ .., b'\n' | b'\r'] = text {
            text = rest;
        }
        Some(text)
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// The set of source units known to one front-end run.
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Registers a file and returns its id. Ids are dense and start at 0.
    pub fn add_file(&mut self, name: impl Into<String>, content: impl AsRef<[u8]>) -> FileId {
        let file = SourceFile::new(self.files.len(), name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.get(id)
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.0)))
    }

    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Renders `name:line:col` for a span, falling back to `line:col` when
    /// the file is unknown.
    pub fn location(&self, span: Span) -> String {
        match self.get(span.file_id) {
            Some(file) => format!("{}:{}:{}", file.name(), span.line, span.column),
            None => span.to_string(),
        }
    }

    /// Renders a span as a small snippet with a caret underline.
    pub fn format_span(&self, span: Span) -> Option<String> {
        let file = self.get(span.file_id)?;
        let line = file.line_at(span.line as usize)?;
        let line_num_width = file.line_count().to_string().len().max(3);

        let mut result = format!("--> {}\n", self.location(span));
        result.push_str(&format!(
            "{:>width$} | {}\n",
            span.line,
            String::from_utf8_lossy(line),
            width = line_num_width
        ));
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        // a span running past the end of its first line is underlined to
        // the end of that line
        let underline_start = (span.column as usize).saturating_sub(1);
        let underline_len = span
            .len()
            .min(line.len().saturating_sub(underline_start))
            .max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        Some(result)
    }
}
