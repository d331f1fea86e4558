//! String literal compilation.
//!
//! Each entry point is called once the caller has consumed the literal's
//! opening token. The interpolating forms then pull tokens from the same
//! stream the caller reads, up to and including their terminator, so the
//! caller resumes right after the literal.

use phoxc_lex::{Token, TokenKind};
use phoxc_util::Span;
use tracing::{debug, trace};

use crate::ast::Expr;
use crate::error::{LiteralError, LiteralKind, LiteralResult};
use crate::escape::{unescape, unescape_single_quoted};

/// Compiles a single-quoted string token, quotes included, to a literal.
///
/// # Examples
///
/// ```
/// use phoxc_lex::{Token, TokenKind};
/// use phoxc_lit::{compile_single_quoted, Expr};
/// use phoxc_util::Span;
///
/// let token = Token::detached(TokenKind::ConstantEncapsedString, r"'it\'s'", Span::DUMMY);
/// assert_eq!(compile_single_quoted(&token).unwrap(), Expr::literal("it's", Span::DUMMY));
///
/// let broken = Token::detached(TokenKind::ConstantEncapsedString, "'open", Span::DUMMY);
/// assert!(compile_single_quoted(&broken).is_err());
/// ```
pub fn compile_single_quoted(token: &Token) -> LiteralResult<Expr> {
    match token.data() {
        [b'\'', body @ .., b'\''] => Ok(Expr::literal(unescape_single_quoted(body), token.span)),
        _ => {
            debug!(span = %token.span, "single-quoted literal without bounding quotes");
            Err(LiteralError::MalformedLiteral { span: token.span })
        },
    }
}

/// Compiles a heredoc body following its `StartHeredoc` token.
///
/// Text segments are escape-decoded, variables keep their name without the
/// sigil, and the `EndHeredoc` token ends the literal. The result is always
/// a [`Expr::Concat`], even with zero or one part.
pub fn compile_heredoc<I>(open: &Token, tokens: &mut I) -> LiteralResult<Expr>
where
    I: Iterator<Item = Token> + ?Sized,
{
    compile_interpolated(open, tokens, LiteralKind::Heredoc, None)
}

/// Compiles a double-quoted or backtick body following its opening quote.
///
/// Like [`compile_heredoc`], but the literal ends at the single-character
/// token equal to `quote`. Single-character tokens of any other character
/// are skipped.
pub fn compile_encapsed<I>(open: &Token, tokens: &mut I, quote: char) -> LiteralResult<Expr>
where
    I: Iterator<Item = Token> + ?Sized,
{
    compile_interpolated(open, tokens, LiteralKind::from_quote(quote), Some(quote))
}

/// Shared loop. `quote` is the closing character, or `None` for a heredoc.
fn compile_interpolated<I>(
    open: &Token,
    tokens: &mut I,
    literal: LiteralKind,
    quote: Option<char>,
) -> LiteralResult<Expr>
where
    I: Iterator<Item = Token> + ?Sized,
{
    let mut parts = Vec::new();

    loop {
        let Some(token) = tokens.next() else {
            debug!(%literal, span = %open.span, "token stream ended inside literal");
            return Err(LiteralError::UnexpectedEof {
                literal,
                span: open.span,
            });
        };

        match (token.kind, quote) {
            (TokenKind::EncapsedAndWhitespace, _) => {
                parts.push(Expr::literal(unescape(token.data()), token.span));
            },
            (TokenKind::Variable, _) => {
                let name = token.data().get(1..).unwrap_or_default();
                parts.push(Expr::variable(name, token.span));
            },
            (TokenKind::EndHeredoc, None) => {
                return Ok(concat(open, &token, parts));
            },
            (TokenKind::SingleChar, Some(q)) => {
                if token.is_char(q) {
                    return Ok(concat(open, &token, parts));
                }
                trace!(token = %token, %literal, "skipping single character");
            },
            _ => {
                debug!(token = %token, %literal, "unexpected token inside literal");
                return Err(token.unexpected().into());
            },
        }
    }
}

/// Builds the concatenation covering opener through terminator.
fn concat(open: &Token, close: &Token, parts: Vec<Expr>) -> Expr {
    let span = Span::with_file(
        open.span.start,
        close.span.end,
        open.span.file_id,
        open.span.line,
        open.span.column,
    );
    Expr::Concat { parts, span }
}
