//! Matching against named bindings visible at the edit location.

use crate::element::Resolution;
use crate::source::MappingSource;
use mapfill_model::{Expr, TypeDatabase, TypeId, is_assignable_to};

/// A named, typed binding visible in scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBinding {
    pub name: String,
    pub type_id: TypeId,
}

impl LocalBinding {
    pub fn new(name: impl Into<String>, type_id: TypeId) -> Self {
        LocalBinding {
            name: name.into(),
            type_id,
        }
    }
}

/// Matches target members against in-scope bindings.
///
/// Bindings are ordered nearest-enclosing first, declaration order within a
/// scope. Two rules, tried in order, first success wins:
/// 1. exact case-sensitive name match with an assignment-compatible type;
/// 2. exact type match with a case-insensitive name match.
///
/// When several bindings satisfy rule 2, the first one in scope order wins.
/// That tie-break is a deliberate, deterministic policy; no stronger signal
/// is available to rank candidates.
pub struct LocalScopeSource {
    bindings: Vec<LocalBinding>,
}

impl LocalScopeSource {
    pub fn new(bindings: Vec<LocalBinding>) -> Self {
        LocalScopeSource { bindings }
    }
}

impl MappingSource for LocalScopeSource {
    fn resolve(&self, db: &dyn TypeDatabase, member_name: &str, member_type: TypeId) -> Resolution {
        if let Some(binding) = self
            .bindings
            .iter()
            .find(|b| b.name == member_name && is_assignable_to(db, b.type_id, member_type))
        {
            return Resolution::resolved(Expr::ident(&binding.name), binding.type_id);
        }

        if let Some(binding) = self
            .bindings
            .iter()
            .find(|b| b.type_id == member_type && b.name.eq_ignore_ascii_case(member_name))
        {
            return Resolution::resolved(Expr::ident(&binding.name), binding.type_id);
        }

        Resolution::Unresolved
    }
}
