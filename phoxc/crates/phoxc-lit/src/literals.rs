//! Literal extraction over a token stream.

use phoxc_lex::{Token, TokenKind};

use crate::ast::Expr;
use crate::error::{LiteralError, LiteralResult};
use crate::quote::{compile_encapsed, compile_heredoc, compile_single_quoted};

/// Iterator adapter that compiles every string literal in a token stream.
///
/// Tokens outside literals are skipped, except an invalid token opened by
/// `'`, which is an unterminated single-quoted literal and yields a
/// malformed literal error. The tokens of an interpolated
/// literal are consumed by the compiler from the same underlying iterator,
/// so each literal is seen exactly once.
///
/// # Examples
///
/// ```
/// use phoxc_lex::Lexer;
/// use phoxc_lit::literals;
///
/// let source = "<?php echo 'a', \"b $c\";";
/// let rendered: Vec<String> = literals(Lexer::new(source.as_bytes()))
///     .map(|expr| expr.unwrap().to_string())
///     .collect();
/// assert_eq!(rendered, [r#""a""#, r#"concat("b ", $c)"#]);
/// ```
#[derive(Debug)]
pub struct Literals<I> {
    tokens: I,
}

/// Wraps `tokens` in a [`Literals`] adapter.
pub fn literals<I>(tokens: I) -> Literals<I::IntoIter>
where
    I: IntoIterator<Item = Token>,
{
    Literals {
        tokens: tokens.into_iter(),
    }
}

impl<I> Literals<I> {
    /// Returns the underlying token stream.
    pub fn into_inner(self) -> I {
        self.tokens
    }
}

impl<I> Iterator for Literals<I>
where
    I: Iterator<Item = Token>,
{
    type Item = LiteralResult<Expr>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = self.tokens.next()?;
            let compiled = match token.kind {
                TokenKind::ConstantEncapsedString => compile_single_quoted(&token),
                TokenKind::Invalid if token.first_char() == Some('\'') => {
                    Err(LiteralError::MalformedLiteral { span: token.span })
                },
                TokenKind::StartHeredoc => compile_heredoc(&token, &mut self.tokens),
                TokenKind::SingleChar if token.is_char('"') => {
                    compile_encapsed(&token, &mut self.tokens, '"')
                },
                TokenKind::SingleChar if token.is_char('`') => {
                    compile_encapsed(&token, &mut self.tokens, '`')
                },
                _ => continue,
            };
            return Some(compiled);
        }
    }
}
