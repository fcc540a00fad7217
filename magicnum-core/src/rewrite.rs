//! Rewriter - the two structural mutations and their edit deltas.
//!
//! Every mutation is performed in place on the full buffer and described
//! by an explicit [`EditDelta`]. Live spans (tracked declarations, the
//! insertion anchor) subscribe to these deltas instead of re-discovering
//! their positions by searching the new text.

use crate::span::Span;

/// One structural edit: `removed` bytes at `at` were replaced by
/// `inserted` bytes. A pure insertion has `removed == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDelta {
    pub at: usize,
    pub removed: usize,
    pub inserted: usize,
}

impl EditDelta {
    /// Net length change of the buffer.
    pub fn shift(&self) -> isize {
        self.inserted as isize - self.removed as isize
    }

    /// End of the removed region in pre-edit coordinates.
    pub fn removed_end(&self) -> usize {
        self.at + self.removed
    }

    /// Translate an offset at or after the edit into post-edit
    /// coordinates. Offsets before the edit are unchanged; offsets inside
    /// the removed region have no well-defined image and return `None`.
    pub fn translate(&self, offset: usize) -> Option<usize> {
        if offset <= self.at {
            Some(offset)
        } else if offset >= self.removed_end() {
            Some((offset as isize + self.shift()) as usize)
        } else {
            None
        }
    }
}

/// Insert a constant declaration immediately inside the anchor brace,
/// preceded by a newline and one indent unit.
///
/// Returns the span of the declaration text in the mutated buffer plus
/// the delta describing the insertion.
pub fn insert_declaration(
    text: &mut String,
    anchor: usize,
    indent: &str,
    declaration: &str,
) -> (Span, EditDelta) {
    let at = anchor + 1;
    let lead = 1 + indent.len();
    let mut inserted = String::with_capacity(lead + declaration.len());
    inserted.push('\n');
    inserted.push_str(indent);
    inserted.push_str(declaration);

    text.insert_str(at, &inserted);

    let span = Span::new(at + lead, at + lead + declaration.len());
    let delta = EditDelta {
        at,
        removed: 0,
        inserted: inserted.len(),
    };
    (span, delta)
}

/// Replace a literal occurrence with its constant name.
pub fn replace_literal(text: &mut String, start: usize, end: usize, name: &str) -> EditDelta {
    text.replace_range(start..end, name);
    EditDelta {
        at: start,
        removed: end - start,
        inserted: name.len(),
    }
}
