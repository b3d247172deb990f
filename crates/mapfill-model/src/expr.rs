//! Expression tree for synthesized member values.
//!
//! This is deliberately tiny: the engine only ever emits literals,
//! identifiers, member-access chains and `default(T)` expressions. `Display`
//! renders the concrete source text the document edit splices in.

use std::fmt;

/// A synthesized value expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Bool(bool),
    Int(i64),
    Float(f64),
    /// High-precision decimal literal, rendered with the `m` suffix.
    Decimal(String),
    Char(char),
    Str(String),
    Ident(String),
    Member { object: Box<Expr>, name: String },
    /// Zero-equivalent default of a named type, rendered as `default(T)`.
    DefaultOf(String),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Expr {
        Expr::Ident(name.into())
    }

    /// Append one member access: `expr` becomes `expr.name`.
    pub fn member(self, name: impl Into<String>) -> Expr {
        Expr::Member {
            object: Box::new(self),
            name: name.into(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Bool(value) => write!(f, "{value}"),
            Expr::Int(value) => write!(f, "{value}"),
            Expr::Float(value) => {
                if value.fract() == 0.0 {
                    write!(f, "{value:.1}")
                } else {
                    write!(f, "{value}")
                }
            }
            Expr::Decimal(value) => write!(f, "{value}m"),
            Expr::Char(value) => write!(f, "'{value}'"),
            Expr::Str(value) => write!(f, "\"{value}\""),
            Expr::Ident(name) => write!(f, "{name}"),
            Expr::Member { object, name } => write!(f, "{object}.{name}"),
            Expr::DefaultOf(type_name) => write!(f, "default({type_name})"),
        }
    }
}
