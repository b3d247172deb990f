//! Host-facing code-fix surface.
//!
//! This crate is the boundary between the resolution engine and the hosting
//! environment. It provides:
//! - A document/edit model (`Document`, `Span`, `TextEdit`) with atomic
//!   replacement of an initializer block
//! - The fix registry (`FixKind`, `FixInfo`) with stable titles and
//!   equivalence keys for the host's quick-fix menu and fix-all batching
//! - The orchestrator (`EmptyInitializerFix`) that decides which actions to
//!   offer for a located empty initializer and applies a chosen action

pub mod document;
pub mod orchestrator;
pub mod registry;

pub use document::{Document, ObjectCreationSite, Span, TextEdit};
pub use orchestrator::{EmptyInitializerFix, FixContext, LambdaContext};
pub use registry::{FixInfo, FixKind, FixRegistry};
