//! Constant Registry - value deduplication and live declaration tracking.
//!
//! The registry owns every declaration the rewriter has inserted during
//! the session. It is idempotent per distinct literal value: asking for a
//! name twice yields the same constant, and only the first occurrence of
//! a value produces an insertion.
//!
//! Span maintenance is delta-driven: after every mutation the rewriter
//! hands the registry the exact [`EditDelta`], and every live span is
//! shifted immediately. The registry then verifies that each tracked span
//! still covers its declaration text; a mismatch is a terminal
//! [`MagicnumError::DeclarationRelocationFailed`], never silently ignored.

use crate::error::{MagicnumError, MagicnumResult};
use crate::rewrite::EditDelta;
use crate::span::Span;

/// A declaration the rewriter inserted, tracked across mutations.
#[derive(Debug, Clone)]
pub struct TrackedDeclaration {
    /// Generated constant name, unique within the session.
    pub name: String,
    /// Raw literal text the constant replaces.
    pub value: String,
    /// Inferred declared type (typed grammar only).
    pub ty: Option<String>,
    /// Exact declaration text as inserted.
    pub text: String,
    /// Current span of the declaration text in the live buffer.
    pub span: Span,
}

/// Session-scoped constant registry.
#[derive(Debug)]
pub struct ConstantRegistry {
    prefix: String,
    typed: bool,
    declarations: Vec<TrackedDeclaration>,
}

impl ConstantRegistry {
    pub fn new(prefix: impl Into<String>, typed: bool) -> Self {
        Self {
            prefix: prefix.into(),
            typed,
            declarations: Vec::new(),
        }
    }

    /// Canonical constant name for a literal value: the value with `.`
    /// replaced by `_`, behind the configured prefix.
    pub fn constant_name(&self, value: &str) -> String {
        format!("{}{}", self.prefix, value.replace('.', "_"))
    }

    /// Declared type inferred from the literal's shape: trailing suffix
    /// first (`d`, `f`, `l`), then the presence of a decimal point, else
    /// plain `int`.
    pub fn infer_type(value: &str) -> &'static str {
        if value.ends_with('d') {
            "double"
        } else if value.ends_with('f') {
            "float"
        } else if value.ends_with('l') {
            "long"
        } else if value.contains('.') {
            "double"
        } else {
            "int"
        }
    }

    /// Render the declaration text for a new constant. The untyped and
    /// int-only grammars always declare `int`; only the typed grammar
    /// uses the inferred type.
    pub fn declaration_text(&self, name: &str, value: &str) -> String {
        let ty = if self.typed {
            Self::infer_type(value)
        } else {
            "int"
        };
        format!("private static final {ty} {name} = {value};")
    }

    /// Has a constant with this name already been declared this session?
    pub fn contains(&self, name: &str) -> bool {
        self.declarations.iter().any(|d| d.name == name)
    }

    /// Record a freshly inserted declaration. The span must already be in
    /// post-insertion coordinates.
    pub fn record(&mut self, name: String, value: String, text: String, span: Span) {
        let ty = self.typed.then(|| Self::infer_type(&value).to_string());
        self.declarations.push(TrackedDeclaration {
            name,
            value,
            ty,
            text,
            span,
        });
    }

    /// Shift every live span through an edit delta.
    ///
    /// An edit that lands inside a tracked declaration would make its
    /// offsets unrecoverable; that cannot happen under the classifier's
    /// exclusion rules, so it is treated as a corrupt-state failure.
    pub fn apply_edit(&mut self, delta: &EditDelta) -> MagicnumResult<()> {
        for decl in &mut self.declarations {
            if delta.removed_end() <= decl.span.start {
                let shift = delta.shift();
                decl.span = Span::new(
                    (decl.span.start as isize + shift) as usize,
                    (decl.span.end as isize + shift) as usize,
                );
            } else if delta.at >= decl.span.end {
                // Edit strictly after this declaration.
            } else {
                return Err(MagicnumError::relocation(decl.name.clone()));
            }
        }
        Ok(())
    }

    /// Check every tracked span against the live buffer. Any span that no
    /// longer covers its declaration text means the offset bookkeeping is
    /// corrupt, and the session must fail rather than continue.
    pub fn verify(&self, text: &str) -> MagicnumResult<()> {
        for decl in &self.declarations {
            let covered = text.get(decl.span.start..decl.span.end);
            if covered != Some(decl.text.as_str()) {
                return Err(MagicnumError::relocation(decl.name.clone()));
            }
        }
        Ok(())
    }

    /// Tracked declarations in insertion order.
    pub fn declarations(&self) -> &[TrackedDeclaration] {
        &self.declarations
    }
}
