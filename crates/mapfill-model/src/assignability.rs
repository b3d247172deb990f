//! Assignment compatibility.
//!
//! Compatibility is nominal: a source type is assignable to a target when the
//! two ids are identical, or when the source derives (transitively) from the
//! target through its base chain. There is no implicit numeric widening; a
//! mismatched category simply fails to match and the member stays unresolved.

use crate::types::{TypeData, TypeDatabase, TypeId};
use rustc_hash::FxHashSet;

/// Check whether a value of `source` can be assigned to a slot of `target`.
pub fn is_assignable_to(db: &dyn TypeDatabase, source: TypeId, target: TypeId) -> bool {
    if source == target {
        return true;
    }

    // Walk the base chain of the source. The seen set guards against cyclic
    // base declarations in a malformed model.
    let mut seen = FxHashSet::default();
    let mut current = source;
    while let TypeData::Named {
        base: Some(base), ..
    } = db.type_data(current)
    {
        if !seen.insert(base) {
            break;
        }
        if base == target {
            return true;
        }
        current = base;
    }
    false
}
