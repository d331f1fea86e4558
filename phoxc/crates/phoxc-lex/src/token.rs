//! Token definitions for the Phox lexer.
//!
//! A [`Token`] is a classification plus a byte range of the source unit it
//! was cut from. The text is never copied: every token keeps a shared handle
//! to the source buffer, so [`Token::data`] is a borrowed slice.
//!
//! Kinds display with the names PHP tooling uses (`T_VARIABLE`,
//! `T_CONSTANT_ENCAPSED_STRING`, ...), which keeps token dumps comparable
//! with `token_get_all` output.

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use phoxc_util::Span;

use crate::error::Unexpected;
use crate::unicode::decode_char;

macro_rules! keywords {
    ($($variant:ident => $text:literal, $name:literal;)*) => {
        /// Reserved words, matched case-insensitively.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant),*];

            /// The keyword's canonical lowercase spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }

            /// The PHP token name, e.g. `T_ECHO`.
            pub const fn token_name(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $name,)*
                }
            }
        }
    };
}

keywords! {
    Abstract => "abstract", "T_ABSTRACT";
    Array => "array", "T_ARRAY";
    As => "as", "T_AS";
    Break => "break", "T_BREAK";
    Case => "case", "T_CASE";
    Catch => "catch", "T_CATCH";
    Class => "class", "T_CLASS";
    Clone => "clone", "T_CLONE";
    Const => "const", "T_CONST";
    Continue => "continue", "T_CONTINUE";
    Declare => "declare", "T_DECLARE";
    Default => "default", "T_DEFAULT";
    Do => "do", "T_DO";
    Echo => "echo", "T_ECHO";
    Else => "else", "T_ELSE";
    Elseif => "elseif", "T_ELSEIF";
    Empty => "empty", "T_EMPTY";
    Extends => "extends", "T_EXTENDS";
    Final => "final", "T_FINAL";
    Finally => "finally", "T_FINALLY";
    Fn => "fn", "T_FN";
    For => "for", "T_FOR";
    Foreach => "foreach", "T_FOREACH";
    Function => "function", "T_FUNCTION";
    Global => "global", "T_GLOBAL";
    If => "if", "T_IF";
    Implements => "implements", "T_IMPLEMENTS";
    Include => "include", "T_INCLUDE";
    IncludeOnce => "include_once", "T_INCLUDE_ONCE";
    Instanceof => "instanceof", "T_INSTANCEOF";
    Interface => "interface", "T_INTERFACE";
    Isset => "isset", "T_ISSET";
    List => "list", "T_LIST";
    Match => "match", "T_MATCH";
    Namespace => "namespace", "T_NAMESPACE";
    New => "new", "T_NEW";
    Print => "print", "T_PRINT";
    Private => "private", "T_PRIVATE";
    Protected => "protected", "T_PROTECTED";
    Public => "public", "T_PUBLIC";
    Require => "require", "T_REQUIRE";
    RequireOnce => "require_once", "T_REQUIRE_ONCE";
    Return => "return", "T_RETURN";
    Static => "static", "T_STATIC";
    Switch => "switch", "T_SWITCH";
    Throw => "throw", "T_THROW";
    Trait => "trait", "T_TRAIT";
    Try => "try", "T_TRY";
    Unset => "unset", "T_UNSET";
    Use => "use", "T_USE";
    Var => "var", "T_VAR";
    While => "while", "T_WHILE";
    Yield => "yield", "T_YIELD";
}

/// Looks up a label as a keyword, ignoring ASCII case.
///
/// # Example
///
/// ```
/// use phoxc_lex::token::{keyword_from_label, Keyword};
///
/// assert_eq!(keyword_from_label(b"echo"), Some(Keyword::Echo));
/// assert_eq!(keyword_from_label(b"ForEach"), Some(Keyword::Foreach));
/// assert_eq!(keyword_from_label(b"echoes"), None);
/// ```
pub fn keyword_from_label(label: &[u8]) -> Option<Keyword> {
    Keyword::ALL
        .iter()
        .copied()
        .find(|kw| kw.as_str().as_bytes().eq_ignore_ascii_case(label))
}

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TokenKind {
    /// Text outside the script tags.
    InlineHtml,
    /// `<?php` plus the one whitespace character after it.
    OpenTag,
    /// `<?=`
    OpenTagWithEcho,
    /// `?>` plus an optional directly following newline.
    CloseTag,
    Whitespace,
    /// `#`, `//` and `/* */` comments.
    Comment,
    /// `/** */` comments.
    DocComment,
    /// `$` followed by a label.
    Variable,
    /// A bare label that is not a keyword.
    Label,
    Keyword(Keyword),
    /// Integer literal.
    LNumber,
    /// Floating-point literal.
    DNumber,
    /// A complete single-quoted string, quotes included.
    ConstantEncapsedString,
    /// A run of literal text inside a double-quoted string, backtick string
    /// or heredoc body.
    EncapsedAndWhitespace,
    /// `<<<LABEL` or `<<<"LABEL"`, including the trailing newline.
    StartHeredoc,
    /// The heredoc closing label, together with the line break and
    /// indentation before it.
    EndHeredoc,
    /// A multi-character or single-character operator.
    Operator,
    /// Any other single character, including `"` and `` ` `` delimiters.
    SingleChar,
    /// Text that could not be tokenized, e.g. an unterminated string.
    Invalid,
}

impl TokenKind {
    /// The PHP token name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::InlineHtml => "T_INLINE_HTML",
            TokenKind::OpenTag => "T_OPEN_TAG",
            TokenKind::OpenTagWithEcho => "T_OPEN_TAG_WITH_ECHO",
            TokenKind::CloseTag => "T_CLOSE_TAG",
            TokenKind::Whitespace => "T_WHITESPACE",
            TokenKind::Comment => "T_COMMENT",
            TokenKind::DocComment => "T_DOC_COMMENT",
            TokenKind::Variable => "T_VARIABLE",
            TokenKind::Label => "T_STRING",
            TokenKind::Keyword(kw) => kw.token_name(),
            TokenKind::LNumber => "T_LNUMBER",
            TokenKind::DNumber => "T_DNUMBER",
            TokenKind::ConstantEncapsedString => "T_CONSTANT_ENCAPSED_STRING",
            TokenKind::EncapsedAndWhitespace => "T_ENCAPSED_AND_WHITESPACE",
            TokenKind::StartHeredoc => "T_START_HEREDOC",
            TokenKind::EndHeredoc => "T_END_HEREDOC",
            TokenKind::Operator => "T_OPERATOR",
            TokenKind::SingleChar => "T_CHAR",
            TokenKind::Invalid => "T_BAD_CHARACTER",
        }
    }

    /// Returns true for kinds that carry no meaning for a parser.
    ///
    /// # Example
    ///
    /// ```
    /// use phoxc_lex::TokenKind;
    ///
    /// assert!(TokenKind::Whitespace.is_trivia());
    /// assert!(TokenKind::DocComment.is_trivia());
    /// assert!(!TokenKind::Variable.is_trivia());
    /// ```
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of a source unit.
///
/// Tokens are immutable once emitted. Two tokens compare equal when their
/// kind, span and text agree.
#[derive(Clone)]
pub struct Token {
    /// Classification.
    pub kind: TokenKind,
    /// Location of the text in its source unit.
    pub span: Span,
    source: Arc<[u8]>,
    range: Range<usize>,
}

impl Token {
    /// Creates a token whose text is `source[span.start..span.end]`.
    pub(crate) fn new(kind: TokenKind, span: Span, source: Arc<[u8]>) -> Self {
        Self {
            kind,
            range: span.start..span.end,
            span,
            source,
        }
    }

    /// Creates a token that owns a copy of `data` instead of pointing into a
    /// source buffer. The span is kept as given.
    ///
    /// # Example
    ///
    /// ```
    /// use phoxc_lex::{Token, TokenKind};
    /// use phoxc_util::Span;
    ///
    /// let token = Token::detached(TokenKind::Variable, "$name", Span::new(6, 11, 1, 7));
    /// assert_eq!(token.data(), b"$name");
    /// ```
    pub fn detached(kind: TokenKind, data: impl AsRef<[u8]>, span: Span) -> Self {
        let source: Arc<[u8]> = Arc::from(data.as_ref());
        Self {
            kind,
            range: 0..source.len(),
            span,
            source,
        }
    }

    /// The token's raw bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.source[self.range.clone()]
    }

    /// The token's text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.data())
    }

    /// The first code point of the token, if any.
    pub fn first_char(&self) -> Option<char> {
        decode_char(self.data()).map(|(c, _)| c)
    }

    /// Returns true if this is a [`TokenKind::SingleChar`] token for `c`.
    pub fn is_char(&self, c: char) -> bool {
        self.kind == TokenKind::SingleChar && self.first_char() == Some(c)
    }

    /// Builds the error a consumer reports when it cannot use this token.
    pub fn unexpected(&self) -> Unexpected {
        Unexpected {
            kind: self.kind,
            text: self.text().into_owned(),
            span: self.span,
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.span == other.span && self.data() == other.data()
    }
}

impl Eq for Token {}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("kind", &self.kind)
            .field("span", &self.span)
            .field("data", &self.text())
            .finish()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_is_case_insensitive() {
        assert_eq!(keyword_from_label(b"ECHO"), Some(Keyword::Echo));
        assert_eq!(keyword_from_label(b"Function"), Some(Keyword::Function));
        assert_eq!(keyword_from_label(b"require_once"), Some(Keyword::RequireOnce));
        assert_eq!(keyword_from_label(b"requireonce"), None);
        assert_eq!(keyword_from_label(b""), None);
    }

    #[test]
    fn test_keyword_names() {
        for kw in Keyword::ALL {
            assert!(kw.token_name().starts_with("T_"));
            assert_eq!(
                kw.token_name(),
                format!("T_{}", kw.as_str().to_ascii_uppercase())
            );
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Variable.to_string(), "T_VARIABLE");
        assert_eq!(TokenKind::Keyword(Keyword::Echo).to_string(), "T_ECHO");
        assert_eq!(TokenKind::Label.to_string(), "T_STRING");
    }

    #[test]
    fn test_token_data_is_a_view() {
        let source: Arc<[u8]> = Arc::from(&b"<?php $x;"[..]);
        let token = Token::new(TokenKind::Variable, Span::new(6, 8, 1, 7), source);
        assert_eq!(token.data(), b"$x");
        assert_eq!(token.first_char(), Some('$'));
    }

    #[test]
    fn test_detached_equals_sourced() {
        let source: Arc<[u8]> = Arc::from(&b"  ;"[..]);
        let span = Span::new(2, 3, 1, 3);
        let sourced = Token::new(TokenKind::SingleChar, span, source);
        let detached = Token::detached(TokenKind::SingleChar, ";", span);
        assert_eq!(sourced, detached);
        assert!(detached.is_char(';'));
        assert!(!detached.is_char(','));
    }

    #[test]
    fn test_token_display() {
        let token = Token::detached(TokenKind::Variable, "$a", Span::DUMMY);
        assert_eq!(token.to_string(), "T_VARIABLE \"$a\"");
    }

    #[test]
    fn test_unexpected_carries_text() {
        let token = Token::detached(TokenKind::Label, "foo", Span::new(0, 3, 2, 5));
        let err = token.unexpected();
        assert_eq!(err.kind, TokenKind::Label);
        assert_eq!(err.text, "foo");
        assert_eq!(err.to_string(), "unexpected T_STRING \"foo\" at 2:5");
    }
}
