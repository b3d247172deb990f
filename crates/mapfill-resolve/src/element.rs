//! Resolution outcomes.

use mapfill_model::{Expr, TypeId};

/// A resolved value for one target member: the expression to splice in and
/// its static type. Produced fresh per member, consumed once.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingElement {
    pub expression: Expr,
    pub expression_type: TypeId,
}

/// Result of asking a mapping source for one member's value.
///
/// `Unresolved` is an expected alternative, not an error: the initializer
/// builder silently omits unresolved members.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(MappingElement),
    Unresolved,
}

impl Resolution {
    pub fn resolved(expression: Expr, expression_type: TypeId) -> Resolution {
        Resolution::Resolved(MappingElement {
            expression,
            expression_type,
        })
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn into_element(self) -> Option<MappingElement> {
        match self {
            Resolution::Resolved(element) => Some(element),
            Resolution::Unresolved => None,
        }
    }
}
