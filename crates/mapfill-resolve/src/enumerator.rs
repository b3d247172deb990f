//! Member enumeration over the type hierarchy.
//!
//! Walks a type and its base chain most-derived first with an explicit
//! worklist and a seen-name set, so a member redeclared in a derived type
//! shadows the base declaration and appears exactly once. The walk is
//! deterministic: output order is declaration order within each type, and
//! the assignment order of the final initializer depends on it.

use mapfill_model::{PropertyInfo, TypeData, TypeDatabase, TypeId};
use rustc_hash::FxHashSet;

/// Writable instance members of `target`, most-derived first, deduplicated by
/// name. Read-only, static and indexer members are excluded.
pub fn writable_members(db: &dyn TypeDatabase, target: TypeId) -> Vec<PropertyInfo> {
    collect_members(db, target, PropertyInfo::is_mapping_target)
}

/// Readable instance members of `source`, most-derived first, deduplicated by
/// name. Static and indexer members are excluded.
pub fn readable_members(db: &dyn TypeDatabase, source: TypeId) -> Vec<PropertyInfo> {
    collect_members(db, source, PropertyInfo::is_mapping_source)
}

fn collect_members(
    db: &dyn TypeDatabase,
    type_id: TypeId,
    eligible: fn(&PropertyInfo) -> bool,
) -> Vec<PropertyInfo> {
    let mut members = Vec::new();
    let mut seen_names: FxHashSet<String> = FxHashSet::default();
    let mut visited_types: FxHashSet<TypeId> = FxHashSet::default();
    let mut worklist = vec![type_id];

    while let Some(current) = worklist.pop() {
        if !visited_types.insert(current) {
            continue;
        }
        if let TypeData::Named { props, base, .. } = db.type_data(current) {
            for prop in props {
                if !eligible(&prop) {
                    continue;
                }
                if seen_names.insert(prop.name.clone()) {
                    members.push(prop);
                }
            }
            if let Some(base) = base {
                worklist.push(base);
            }
        }
    }
    members
}
