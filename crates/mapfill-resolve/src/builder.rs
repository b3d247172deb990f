//! Initializer assembly.
//!
//! Drives the member enumerator and one active mapping source, producing the
//! declaration-ordered assignment list. Unresolved members are omitted, not
//! errors; the result is always a best-effort initializer. The cancellation
//! token is observed between member resolutions so a batch host can abort a
//! long pass without ever seeing a partial edit.

use crate::element::Resolution;
use crate::enumerator::writable_members;
use crate::source::MappingSource;
use mapfill_model::{CancellationToken, Expr, TypeDatabase, TypeId, is_assignable_to};
use std::fmt;
use tracing::trace;

/// One `Member = expression` entry of the composed initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub member_name: String,
    pub expression: Expr,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.member_name, self.expression)
    }
}

/// The build was cancelled between member resolutions; no edit is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInterrupted;

/// Resolve every writable member of `target` through `source`, in enumerator
/// order. Members the source cannot supply are skipped. An element whose
/// expression type is not assignment-compatible with the member's declared
/// type is also skipped; emitted pairs always satisfy that invariant.
pub fn build_assignments(
    db: &dyn TypeDatabase,
    target: TypeId,
    source: &dyn MappingSource,
    token: &CancellationToken,
) -> Result<Vec<Assignment>, BuildInterrupted> {
    let mut assignments = Vec::new();

    for member in writable_members(db, target) {
        if token.is_cancelled() {
            return Err(BuildInterrupted);
        }
        match source.resolve(db, &member.name, member.type_id) {
            Resolution::Resolved(element) => {
                if !is_assignable_to(db, element.expression_type, member.type_id) {
                    trace!(member = %member.name, "resolved expression type not assignable, skipping");
                    continue;
                }
                trace!(member = %member.name, expression = %element.expression, "member resolved");
                assignments.push(Assignment {
                    member_name: member.name,
                    expression: element.expression,
                });
            }
            Resolution::Unresolved => {
                trace!(member = %member.name, "no mapping source, member omitted");
            }
        }
    }
    Ok(assignments)
}
