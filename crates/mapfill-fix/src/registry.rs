//! Fix registry: the actions this provider can offer and their host-facing
//! metadata.

use serde::Serialize;

/// The three initializer-fix strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixKind {
    /// Match members against local variables in scope.
    Locals,
    /// Fill members with deterministic sample values.
    Scaffolding,
    /// Map members from the enclosing lambda's single parameter.
    LambdaParameter,
}

impl FixKind {
    /// Menu title, exactly as shown by the host.
    pub const fn title(self) -> &'static str {
        match self {
            FixKind::Locals => "Initialize with local variables",
            FixKind::Scaffolding => "Initialize with sample values",
            FixKind::LambdaParameter => "Initialize with lambda parameter",
        }
    }

    /// Stable key identifying equivalent fixes across sites, used by the
    /// host's fix-all batching.
    pub const fn equivalence_key(self) -> &'static str {
        match self {
            FixKind::Locals => "initializeWithLocals",
            FixKind::Scaffolding => "initializeWithScaffolding",
            FixKind::LambdaParameter => "initializeWithLambdaParameter",
        }
    }
}

/// Serializable descriptor of one offered fix, in the shape the host
/// protocol expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixInfo {
    /// The internal name of the fix.
    pub fix_name: String,
    /// Human-readable description shown in the quick-fix menu.
    pub description: String,
    /// Equivalence key for fix-all support.
    pub fix_id: String,
}

/// Maps fix kinds to their host-facing descriptors.
pub struct FixRegistry;

impl FixRegistry {
    pub fn descriptor(kind: FixKind) -> FixInfo {
        FixInfo {
            fix_name: Self::fix_name(kind).to_string(),
            description: kind.title().to_string(),
            fix_id: kind.equivalence_key().to_string(),
        }
    }

    const fn fix_name(kind: FixKind) -> &'static str {
        match kind {
            FixKind::Locals => "emptyInitializerLocals",
            FixKind::Scaffolding => "emptyInitializerScaffolding",
            FixKind::LambdaParameter => "emptyInitializerLambdaParameter",
        }
    }
}
