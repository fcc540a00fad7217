//! Classifier - decides whether a scanned literal is a magic number.
//!
//! A pure predicate over one snapshot: the candidate, its single-character
//! neighborhood, and the current region index. No side effects.
//!
//! The quote checks are a cheap adjacency heuristic, not string-literal
//! scanning: a candidate is excluded only when the characters immediately
//! before AND after are both `"` (or both `'`). Multi-character content
//! next to unrelated quote pairs can misfire; preserved as a documented
//! limitation.

use crate::regions::RegionIndex;
use crate::scanner::LiteralCandidate;

/// Should this candidate be rewritten into a named constant?
///
/// Rejects when any of:
/// - the preceding character is alphabetic or `_` (tail of an identifier,
///   e.g. the `1` in `var1`);
/// - the following character is alphabetic (head of an identifier, or a
///   suffix letter the literal grammar did not consume);
/// - the candidate sits between a `"` pair or a `'` pair;
/// - the candidate is strictly interior to a comment span;
/// - the candidate is strictly interior to a declaration span.
///
/// A candidate at the very start or end of the buffer has no neighbor on
/// that side; an absent neighbor never excludes.
pub fn admit(text: &str, candidate: &LiteralCandidate, regions: &RegionIndex) -> bool {
    let prev = prev_char(text, candidate.start);
    let next = next_char(text, candidate.end);

    if excluded_by_neighbors(prev, next) {
        return false;
    }
    if regions.in_comment(candidate.start, candidate.end) {
        return false;
    }
    if regions.in_declaration(candidate.start, candidate.end) {
        return false;
    }
    true
}

/// Neighborhood exclusion rules shared by every grammar variant.
fn excluded_by_neighbors(prev: Option<char>, next: Option<char>) -> bool {
    let prev_is_identifier = prev.is_some_and(|c| c.is_alphabetic() || c == '_');
    let next_is_identifier = next.is_some_and(|c| c.is_alphabetic());
    let in_string = prev == Some('"') && next == Some('"');
    let in_char = prev == Some('\'') && next == Some('\'');

    prev_is_identifier || next_is_identifier || in_string || in_char
}

fn prev_char(text: &str, offset: usize) -> Option<char> {
    text[..offset].chars().next_back()
}

fn next_char(text: &str, offset: usize) -> Option<char> {
    text[offset..].chars().next()
}
