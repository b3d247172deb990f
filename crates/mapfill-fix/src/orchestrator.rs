//! Fix orchestration.
//!
//! Decides which initializer actions are offered for a located empty
//! initializer, runs the chosen mapping source through the assignment
//! builder, and turns the result into a single atomic document edit. Every
//! fatal condition degrades to "return the original document unchanged";
//! per-member failures were already absorbed as omissions by the builder.

use crate::document::{Document, ObjectCreationSite, TextEdit};
use crate::registry::FixKind;
use mapfill_model::{CancellationToken, Expr, TypeDatabase, TypeId};
use mapfill_resolve::{
    Assignment, LocalBinding, LocalScopeSource, ObjectMemberSource, ScaffoldingSource,
    SourceObject, build_assignments,
};
use tracing::debug;

/// The lambda enclosing the initializer, if any. The lambda-parameter action
/// is only offered for exactly one parameter with a resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaContext {
    pub parameter_count: usize,
    /// Name of the first parameter; the source-object expression.
    pub parameter_name: String,
    /// Resolved type of the first parameter, `None` when resolution failed.
    pub parameter_type: Option<TypeId>,
}

/// Everything the orchestrator needs for one fix invocation. Constructed
/// fresh per invocation and discarded afterwards; nothing is retained.
#[derive(Debug, Clone)]
pub struct FixContext {
    /// The located site, `None` when no empty initializer was found at the
    /// reported location.
    pub site: Option<ObjectCreationSite>,
    pub enclosing_lambda: Option<LambdaContext>,
    /// Visible bindings, nearest-enclosing first.
    pub locals: Vec<LocalBinding>,
    pub cancellation: CancellationToken,
}

impl FixContext {
    pub fn new(site: Option<ObjectCreationSite>) -> Self {
        FixContext {
            site,
            enclosing_lambda: None,
            locals: Vec::new(),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_locals(mut self, locals: Vec<LocalBinding>) -> Self {
        self.locals = locals;
        self
    }

    pub fn with_lambda(mut self, lambda: LambdaContext) -> Self {
        self.enclosing_lambda = Some(lambda);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }
}

/// The empty-initializer fix provider.
pub struct EmptyInitializerFix<'a> {
    db: &'a dyn TypeDatabase,
}

impl<'a> EmptyInitializerFix<'a> {
    pub fn new(db: &'a dyn TypeDatabase) -> Self {
        EmptyInitializerFix { db }
    }

    /// Actions offered for this context. Locals and Scaffolding are always
    /// available once a site exists; the lambda action additionally requires
    /// an enclosing lambda with exactly one parameter of resolved type.
    pub fn available_actions(&self, ctx: &FixContext) -> Vec<FixKind> {
        if ctx.site.is_none() {
            return Vec::new();
        }
        let mut actions = vec![FixKind::Locals, FixKind::Scaffolding];
        match &ctx.enclosing_lambda {
            Some(lambda) if lambda.parameter_count == 1 && lambda.parameter_type.is_some() => {
                actions.push(FixKind::LambdaParameter);
            }
            Some(lambda) => {
                debug!(
                    parameters = lambda.parameter_count,
                    resolved = lambda.parameter_type.is_some(),
                    "lambda-parameter action withheld"
                );
            }
            None => {}
        }
        actions
    }

    /// Compute the initializer replacement for one action, or `None` when
    /// the invocation cannot proceed (no site, unresolved target type,
    /// ineligible lambda, cancellation).
    pub fn edit_for(&self, ctx: &FixContext, kind: FixKind) -> Option<TextEdit> {
        let site = match &ctx.site {
            Some(site) => site,
            None => {
                debug!("no empty initializer at the reported location");
                return None;
            }
        };
        let target = match site.target_type {
            Some(target) => target,
            None => {
                debug!("target type unresolvable, fix aborted");
                return None;
            }
        };

        let assignments = match kind {
            FixKind::Locals => {
                let source = LocalScopeSource::new(ctx.locals.clone());
                build_assignments(self.db, target, &source, &ctx.cancellation)
            }
            FixKind::Scaffolding => {
                build_assignments(self.db, target, &ScaffoldingSource, &ctx.cancellation)
            }
            FixKind::LambdaParameter => {
                let lambda = ctx.enclosing_lambda.as_ref()?;
                if lambda.parameter_count != 1 {
                    return None;
                }
                let parameter_type = lambda.parameter_type?;
                let source = ObjectMemberSource::new(SourceObject::new(
                    Expr::ident(&lambda.parameter_name),
                    parameter_type,
                ));
                build_assignments(self.db, target, &source, &ctx.cancellation)
            }
        };

        match assignments {
            Ok(assignments) => Some(TextEdit::new(
                site.initializer_span,
                render_initializer(&assignments),
            )),
            Err(_) => {
                debug!("assignment build cancelled, no edit produced");
                None
            }
        }
    }

    /// Apply one action. Returns the transformed document, or the original
    /// document unchanged when the fix cannot proceed.
    pub fn apply(&self, document: &Document, ctx: &FixContext, kind: FixKind) -> Document {
        match self.edit_for(ctx, kind) {
            Some(edit) => document.apply_edit(&edit),
            None => document.clone(),
        }
    }

    /// Apply one action across many independent sites in a single pass.
    /// Each site resolves independently; a site that cannot proceed is
    /// skipped without affecting the others. Edits are applied back-to-front
    /// so earlier spans stay valid.
    pub fn apply_all(&self, document: &Document, contexts: &[FixContext], kind: FixKind) -> Document {
        let mut edits: Vec<TextEdit> = contexts
            .iter()
            .filter_map(|ctx| self.edit_for(ctx, kind))
            .collect();
        edits.sort_by_key(|edit| std::cmp::Reverse(edit.span.start));

        let mut result = document.clone();
        let mut last_start: Option<usize> = None;
        for edit in edits {
            // Overlapping sites would invalidate each other's spans; keep
            // the later one and skip the overlap.
            if let Some(start) = last_start {
                if edit.span.end > start {
                    continue;
                }
            }
            last_start = Some(edit.span.start);
            result = result.apply_edit(&edit);
        }
        result
    }
}

/// Compose the replacement initializer block.
fn render_initializer(assignments: &[Assignment]) -> String {
    if assignments.is_empty() {
        return "{ }".to_string();
    }
    let entries: Vec<String> = assignments.iter().map(|a| a.to_string()).collect();
    format!("{{ {} }}", entries.join(", "))
}
