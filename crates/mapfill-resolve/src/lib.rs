//! Mapping-source resolution engine.
//!
//! Given a target type's writable members, this crate decides what expression
//! supplies each member's value:
//! - `ScaffoldingSource` — deterministic placeholder values, no external source
//! - `LocalScopeSource` — typed named bindings visible at the edit location
//! - `ObjectMemberSource` — members of a source object, with one level of nesting
//!
//! Each member resolves independently; members with no match are omitted, not
//! errors. `build_assignments` drives the member enumerator and an active
//! source to produce the declaration-ordered assignment list.

pub mod builder;
pub mod element;
pub mod enumerator;
pub mod local_scope;
pub mod object_member;
pub mod scaffolding;
pub mod source;

pub use builder::{Assignment, BuildInterrupted, build_assignments};
pub use element::{MappingElement, Resolution};
pub use enumerator::{readable_members, writable_members};
pub use local_scope::{LocalBinding, LocalScopeSource};
pub use object_member::{ObjectMemberSource, SourceObject};
pub use scaffolding::ScaffoldingSource;
pub use source::MappingSource;
