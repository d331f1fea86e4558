//! Expression nodes produced by the literal compiler.

use std::fmt;

use phoxc_util::Span;

use crate::value::ByteString;

/// A compiled string literal or one part of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// A fully decoded constant value.
    Literal { value: ByteString, span: Span },
    /// A variable reference; the name has no `$` sigil.
    Variable { name: ByteString, span: Span },
    /// Parts to be concatenated in order. May be empty.
    Concat { parts: Vec<Expr>, span: Span },
}

impl Expr {
    pub fn literal(value: impl Into<ByteString>, span: Span) -> Self {
        Expr::Literal {
            value: value.into(),
            span,
        }
    }

    pub fn variable(name: impl Into<ByteString>, span: Span) -> Self {
        Expr::Variable {
            name: name.into(),
            span,
        }
    }

    #[inline]
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal { span, .. } | Expr::Variable { span, .. } | Expr::Concat { span, .. } => {
                *span
            },
        }
    }

    /// Returns the value if this expression is constant: a literal, or a
    /// concatenation of constants.
    ///
    /// # Examples
    ///
    /// ```
    /// use phoxc_lit::Expr;
    /// use phoxc_util::Span;
    ///
    /// let parts = vec![Expr::literal("a", Span::DUMMY), Expr::literal("b", Span::DUMMY)];
    /// let concat = Expr::Concat { parts, span: Span::DUMMY };
    /// assert_eq!(concat.constant_value().unwrap(), "ab");
    ///
    /// assert!(Expr::variable("x", Span::DUMMY).constant_value().is_none());
    /// ```
    pub fn constant_value(&self) -> Option<ByteString> {
        match self {
            Expr::Literal { value, .. } => Some(value.clone()),
            Expr::Variable { .. } => None,
            Expr::Concat { parts, .. } => {
                let mut value = ByteString::new();
                for part in parts {
                    value.extend_from_slice(&part.constant_value()?);
                }
                Some(value)
            },
        }
    }
}

/// Renders the tree compactly: `"text"`, `$name`, `concat(a, b)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal { value, .. } => write!(f, "{value:?}"),
            Expr::Variable { name, .. } => write!(f, "${name}"),
            Expr::Concat { parts, .. } => {
                f.write_str("concat(")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{part}")?;
                }
                f.write_str(")")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_concat() {
        let expr = Expr::Concat {
            parts: vec![
                Expr::literal("hi ", Span::DUMMY),
                Expr::variable("name", Span::DUMMY),
                Expr::literal("\n", Span::DUMMY),
            ],
            span: Span::DUMMY,
        };
        assert_eq!(expr.to_string(), r#"concat("hi ", $name, "\n")"#);
    }

    #[test]
    fn test_display_empty_concat() {
        let expr = Expr::Concat {
            parts: Vec::new(),
            span: Span::DUMMY,
        };
        assert_eq!(expr.to_string(), "concat()");
        assert_eq!(expr.constant_value().unwrap(), "");
    }

    #[test]
    fn test_span() {
        let span = Span::new(3, 9, 1, 4);
        assert_eq!(Expr::literal("x", span).span(), span);
        assert_eq!(Expr::variable("x", span).span(), span);
    }

    #[test]
    fn test_constant_value_stops_at_variable() {
        let expr = Expr::Concat {
            parts: vec![Expr::literal("a", Span::DUMMY), Expr::variable("b", Span::DUMMY)],
            span: Span::DUMMY,
        };
        assert!(expr.constant_value().is_none());
    }
}
