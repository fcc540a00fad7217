//! magicnum-core: magic-number extraction and source rewriting library
//!
//! Given the full text of a source file, this library locates numeric
//! literals that are "magic numbers" (not part of identifiers, string or
//! char literals, comments, or existing constant declarations),
//! synthesizes one named constant declaration per distinct literal value,
//! inserts each declaration immediately inside the first scope-opening
//! brace, and replaces every qualifying occurrence with the constant name.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use magicnum_core::prelude::*;
//!
//! let out = extract_magic_numbers("class C { void m() { wait(42); } }")?;
//! assert!(out.text.contains("MAGIC_NUMBER_42"));
//! println!("{}", out.summary()); // "Extracted: 42;"
//! ```
//!
//! # Module Organization
//!
//! - [`span`]: half-open byte spans with the strict-containment rule
//! - [`regions`]: comment and declaration span index per text snapshot
//! - [`scanner`]: lazy, restartable numeric-literal scanning
//! - [`classify`]: the magic-number admission predicate
//! - [`registry`]: value dedup, type inference, live span tracking
//! - [`rewrite`]: declaration insertion and occurrence replacement
//! - [`session`]: the scan/classify/rewrite driver and public API
//! - [`config`]: session options and magicnum.toml loading
//! - [`error`]: typed error handling
//! - [`report`]: summary rendering and plain/JSON output
//!
//! # Fidelity notes
//!
//! The comment and string detection is intentionally heuristic (regex
//! spans and single-character quote adjacency, not a lexer) and the
//! strict-interior containment rule rejects boundary-touching spans.
//! Both are load-bearing for which literals get rewritten; see the
//! module docs in [`regions`] and [`classify`].

pub mod classify;
pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod regions;
pub mod registry;
pub mod report;
pub mod rewrite;
pub mod scanner;
pub mod session;
pub mod span;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{IoResultExt, MagicnumError, MagicnumResult};

// Session API
pub use session::{extract_magic_numbers, extract_magic_numbers_with, Extraction};

// Options and configuration
pub use config::{load_config, ExtractOptions, MagicnumConfig};

// Grammar variants
pub use regions::{Declaration, DeclarationGrammar, RegionIndex, RegionPatterns};
pub use scanner::{LiteralCandidate, LiteralGrammar, LiteralScanner};

// Classification
pub use classify::admit;

// Registry and rewriting
pub use registry::{ConstantRegistry, TrackedDeclaration};
pub use rewrite::{insert_declaration, replace_literal, EditDelta};

// Spans
pub use span::Span;

// Logging
pub use logging::{init_structured_logging, log_error, log_info, log_warn};

// Reporting
pub use report::{print_json, print_plain, render_summary, FileReport};

#[cfg(test)]
mod tests;
