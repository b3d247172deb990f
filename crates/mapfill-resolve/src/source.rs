//! The mapping-source seam.

use crate::element::Resolution;
use mapfill_model::{TypeDatabase, TypeId};

/// A strategy that maps one target member to a value expression.
///
/// Implementations are stateless between invocations: all context arrives via
/// the constructor parameters of the concrete source and the `db` handle, so
/// independent fix invocations can run concurrently without coordination.
pub trait MappingSource {
    /// Decide what expression supplies the value of the member named
    /// `member_name` with declared type `member_type`, or report that no
    /// candidate matches.
    fn resolve(&self, db: &dyn TypeDatabase, member_name: &str, member_type: TypeId) -> Resolution;
}
