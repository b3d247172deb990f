//! Shared data model for the mapfill engine.
//!
//! This crate provides the foundational types used across all mapfill crates:
//! - Interned structural types (`TypeId`, `TypeData`, `TypeInterner`)
//! - Member metadata (`PropertyInfo`, `PropertyFlags`)
//! - Assignment compatibility (`is_assignable_to`)
//! - A small expression tree with text rendering (`Expr`)
//! - Cooperative cancellation (`CancellationToken`)

pub mod assignability;
pub mod cancellation;
pub mod expr;
pub mod types;

pub use assignability::is_assignable_to;
pub use cancellation::CancellationToken;
pub use expr::Expr;
pub use types::{
    IntrinsicKind, PropertyFlags, PropertyInfo, TypeData, TypeDatabase, TypeId, TypeInterner,
};
