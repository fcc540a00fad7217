//! Session Driver - one full scan/classify/rewrite pass over one buffer.
//!
//! The driver owns the buffer exclusively for the session. Each loop
//! iteration scans the current snapshot from offset 0, admits the first
//! magic number the classifier accepts, and mutates the buffer through
//! the rewriter. Tracked spans (declarations, the insertion anchor) are
//! shifted through explicit edit deltas rather than re-discovered by
//! text search; after every mutation the registry verifies its spans and
//! the session fails hard on any mismatch.
//!
//! Termination: every accepted candidate is rewritten into text the
//! classifier permanently rejects (digits behind a `_` in the constant
//! reference, digits interior to the inserted declaration span), so the
//! admissible-candidate count strictly decreases.

use crate::classify;
use crate::config::ExtractOptions;
use crate::error::{MagicnumError, MagicnumResult};
use crate::regions::{RegionIndex, RegionPatterns};
use crate::registry::ConstantRegistry;
use crate::rewrite::{self, EditDelta};
use crate::scanner::{LiteralCandidate, LiteralScanner};
use serde::Serialize;
use tracing::debug;

/// Result of one rewrite session.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    /// The full rewritten buffer.
    pub text: String,
    /// Distinct extracted literal values, in first-encountered order.
    pub values: Vec<String>,
}

impl Extraction {
    /// Human-readable summary: `Extracted: v1;v2;` with a trailing
    /// separator, or the not-found sentinel when nothing was extracted.
    pub fn summary(&self) -> String {
        crate::report::render_summary(&self.values)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Extract magic numbers with default options (full literal grammar,
/// typed declaration grammar).
pub fn extract_magic_numbers(source: &str) -> MagicnumResult<Extraction> {
    extract_magic_numbers_with(source, &ExtractOptions::default())
}

/// Extract magic numbers with explicit options.
pub fn extract_magic_numbers_with(
    source: &str,
    options: &ExtractOptions,
) -> MagicnumResult<Extraction> {
    if source.is_empty() {
        return Err(MagicnumError::EmptyInput);
    }
    // Termination depends on replacements never re-scanning as literals:
    // the constant name must shield its digits behind `_` or a letter. An
    // empty or digit-trailing prefix would loop forever.
    let shields_digits = options
        .prefix
        .chars()
        .next_back()
        .is_some_and(|c| c == '_' || c.is_alphabetic());
    if !shields_digits {
        return Err(MagicnumError::InvalidPrefix {
            prefix: options.prefix.clone(),
        });
    }

    let mut session = Session::new(source, options);
    session.run()?;
    Ok(Extraction {
        text: session.text,
        values: session.values,
    })
}

struct Session<'o> {
    options: &'o ExtractOptions,
    scanner: LiteralScanner,
    patterns: RegionPatterns,
    registry: ConstantRegistry,
    /// Offset of the first scope-opening brace, located once at session
    /// start and kept valid through edit deltas. `None` means there is
    /// nowhere to insert; that only becomes an error if an insertion is
    /// actually required.
    anchor: Option<usize>,
    text: String,
    values: Vec<String>,
}

impl<'o> Session<'o> {
    fn new(source: &str, options: &'o ExtractOptions) -> Self {
        Self {
            options,
            scanner: LiteralScanner::new(options.literal_grammar),
            patterns: RegionPatterns::new(options.declaration_grammar),
            registry: ConstantRegistry::new(
                options.prefix.clone(),
                options.declaration_grammar.is_typed(),
            ),
            anchor: source.find('{'),
            text: source.to_string(),
            values: Vec::new(),
        }
    }

    fn run(&mut self) -> MagicnumResult<()> {
        loop {
            // Spans are only valid against this snapshot; the index is
            // rebuilt after every mutation.
            let regions = RegionIndex::build(&self.text, &self.patterns);
            let candidate = self
                .scanner
                .scan(&self.text)
                .find(|c| classify::admit(&self.text, c, &regions));

            let Some(candidate) = candidate else {
                break;
            };
            self.rewrite_candidate(candidate, &regions)?;
        }
        debug!(extracted = self.values.len(), "session complete");
        Ok(())
    }

    /// Perform the mutation(s) for one admitted candidate: insert the
    /// declaration if this value is new, then replace the occurrence.
    fn rewrite_candidate(
        &mut self,
        mut candidate: LiteralCandidate,
        regions: &RegionIndex,
    ) -> MagicnumResult<()> {
        let name = self.registry.constant_name(&candidate.text);

        // Dedup by generated name: either this session already declared
        // it, or the document carries a declaration with that exact name.
        let needs_declaration =
            !self.registry.contains(&name) && !regions.has_declared_name(&name);

        if needs_declaration {
            let anchor = self.anchor.ok_or(MagicnumError::NoInsertionAnchor)?;
            let declaration = self.registry.declaration_text(&name, &candidate.text);
            let (span, delta) = rewrite::insert_declaration(
                &mut self.text,
                anchor,
                &self.options.indent,
                &declaration,
            );
            // Previously tracked spans first, then the new one (already
            // in post-insertion coordinates).
            self.apply_delta(&delta)?;
            self.registry
                .record(name.clone(), candidate.text.clone(), declaration, span);

            if delta.at <= candidate.start {
                candidate.start += delta.inserted;
                candidate.end += delta.inserted;
            }
            debug!(constant = %name, value = %candidate.text, "inserted declaration");
        }

        let delta =
            rewrite::replace_literal(&mut self.text, candidate.start, candidate.end, &name);
        self.apply_delta(&delta)?;
        self.registry.verify(&self.text)?;

        if !self.values.iter().any(|v| v == &candidate.text) {
            self.values.push(candidate.text.clone());
        }
        debug!(constant = %name, offset = candidate.start, "replaced occurrence");
        Ok(())
    }

    /// Propagate one edit delta to every live offset the session tracks.
    fn apply_delta(&mut self, delta: &EditDelta) -> MagicnumResult<()> {
        self.registry.apply_edit(delta)?;
        if let Some(anchor) = self.anchor {
            // Keep the anchor pointing at the same brace character. All
            // insertions land at anchor+1 and never move it; an edit
            // entirely before the brace shifts it.
            if delta.removed_end() <= anchor {
                self.anchor = Some((anchor as isize + delta.shift()) as usize);
            }
        }
        Ok(())
    }
}
