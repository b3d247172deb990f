//! Matching against the members of a source object.
//!
//! Object-to-object mapping treats name equality as the contract signal, so
//! matching is name-based only: a direct member match first, then one level
//! of nested member access. There is no type-only fallback here, unlike the
//! local-scope rules.

use crate::element::Resolution;
use crate::enumerator::readable_members;
use crate::source::MappingSource;
use mapfill_model::{Expr, TypeDatabase, TypeId, is_assignable_to};

/// A source object: the expression to read from and its static type.
/// Typically a lambda parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceObject {
    pub expression: Expr,
    pub type_id: TypeId,
}

impl SourceObject {
    pub fn new(expression: Expr, type_id: TypeId) -> Self {
        SourceObject {
            expression,
            type_id,
        }
    }
}

/// Matches target members against the readable members of a source object.
pub struct ObjectMemberSource {
    source: SourceObject,
}

impl ObjectMemberSource {
    pub fn new(source: SourceObject) -> Self {
        ObjectMemberSource { source }
    }
}

impl MappingSource for ObjectMemberSource {
    fn resolve(&self, db: &dyn TypeDatabase, member_name: &str, member_type: TypeId) -> Resolution {
        let members = readable_members(db, self.source.type_id);

        // Direct match: source.Member
        if let Some(prop) = members
            .iter()
            .find(|p| p.name == member_name && is_assignable_to(db, p.type_id, member_type))
        {
            let expression = self.source.expression.clone().member(&prop.name);
            return Resolution::resolved(expression, prop.type_id);
        }

        // One level of nesting: source.X.Member
        for intermediate in &members {
            if let Some(prop) = readable_members(db, intermediate.type_id)
                .iter()
                .find(|p| p.name == member_name && is_assignable_to(db, p.type_id, member_type))
            {
                let expression = self
                    .source
                    .expression
                    .clone()
                    .member(&intermediate.name)
                    .member(&prop.name);
                return Resolution::resolved(expression, prop.type_id);
            }
        }

        Resolution::Unresolved
    }
}
