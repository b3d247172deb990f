//! Scaffolding: placeholder values with no external source.
//!
//! Placeholders are fixed per type category and carry no meaning beyond
//! "any value of the right type", so two resolutions of the same type are
//! byte-identical. Enumerations take their first declared variant; the
//! universal object type has no safe placeholder and stays unresolved.

use crate::element::Resolution;
use crate::source::MappingSource;
use mapfill_model::{Expr, TypeData, TypeDatabase, TypeId};

/// Pure placeholder source. Never consults scope or a source object.
pub struct ScaffoldingSource;

impl ScaffoldingSource {
    /// The placeholder expression for `type_id`, if the category has one.
    pub fn default_expression(db: &dyn TypeDatabase, type_id: TypeId) -> Option<Expr> {
        if let TypeData::Enum { name, variants } = db.type_data(type_id) {
            // First declared variant, declaration order. An enum with zero
            // variants falls back to the zero-equivalent default.
            return Some(match variants.first() {
                Some(first) => Expr::ident(name).member(first.clone()),
                None => Expr::DefaultOf(name),
            });
        }

        match type_id {
            TypeId::BOOLEAN => Some(Expr::Bool(true)),
            TypeId::I8 | TypeId::U8 => Some(Expr::Int(1)),
            TypeId::I16 | TypeId::U16 => Some(Expr::Int(16)),
            TypeId::I32 | TypeId::U32 => Some(Expr::Int(32)),
            TypeId::I64 | TypeId::U64 => Some(Expr::Int(64)),
            TypeId::F32 | TypeId::F64 => Some(Expr::Float(1.0)),
            TypeId::CHAR => Some(Expr::Char('a')),
            TypeId::STRING => Some(Expr::Str("lorem ipsum".to_string())),
            TypeId::DECIMAL => Some(Expr::Decimal("2.0".to_string())),
            TypeId::OBJECT => None,
            _ => Some(Expr::Str("ccc".to_string())),
        }
    }
}

impl MappingSource for ScaffoldingSource {
    fn resolve(&self, db: &dyn TypeDatabase, _member_name: &str, member_type: TypeId) -> Resolution {
        match Self::default_expression(db, member_type) {
            Some(expression) => Resolution::resolved(expression, member_type),
            None => Resolution::Unresolved,
        }
    }
}
