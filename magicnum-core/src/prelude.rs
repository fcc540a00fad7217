//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use magicnum_core::prelude::*;
//! ```

// Entry points and session result
pub use crate::session::{extract_magic_numbers, extract_magic_numbers_with, Extraction};

// Options and grammar variants
pub use crate::config::{load_config, ExtractOptions, MagicnumConfig};
pub use crate::regions::DeclarationGrammar;
pub use crate::scanner::LiteralGrammar;

// Error handling
pub use crate::error::{MagicnumError, MagicnumResult};

// Reporting
pub use crate::report::{render_summary, FileReport};
