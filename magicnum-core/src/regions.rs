//! Region Index - comment and declaration spans over the current snapshot.
//!
//! The index is a read-only scan: it never mutates the buffer and must be
//! rebuilt whenever the buffer changes, because every span is an offset
//! into one specific snapshot.
//!
//! Known limitations, preserved deliberately (see DESIGN.md):
//! - A `//` inside a string literal still opens a line comment span.
//! - The block-comment pattern cannot cross a `/` inside the comment body
//!   and under-matches in that case.
//! This is not a lexer; changing either rule changes which literals get
//! rewritten.

use crate::span::Span;
use regex::Regex;
use std::str::FromStr;

/// Which declaration grammar the index recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclarationGrammar {
    /// Only `int ident = literal;`.
    IntOnly,
    /// Bare `ident = literal;` with no type prefix.
    Untyped,
    /// A fixed closed set of numeric types, primitive and boxed:
    /// `int long float double Integer Long Float Double`.
    #[default]
    Typed,
}

impl DeclarationGrammar {
    /// Regex source for this grammar. Capture 1 is the declared
    /// identifier, capture 2 the raw literal text.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::IntOnly => r"\bint\s+(\w+)\s*=\s*(\d+\.?\d*[dfl]?);",
            Self::Untyped => r"(\w+)\s*=\s*(\d+\.?\d*[dfl]?);",
            Self::Typed => {
                r"\b(int|long|float|double|Integer|Long|Float|Double)\s+(\w+)\s*=\s*(\d+\.?\d*[dfl]?);"
            }
        }
    }

    /// Whether the grammar carries a type prefix (affects capture layout
    /// and whether inserted declarations get an inferred type).
    pub fn is_typed(&self) -> bool {
        matches!(self, Self::Typed)
    }
}

impl FromStr for DeclarationGrammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int-only" | "int" => Ok(Self::IntOnly),
            "untyped" => Ok(Self::Untyped),
            "typed" => Ok(Self::Typed),
            other => Err(format!("unknown declaration grammar: {other}")),
        }
    }
}

/// A recognized constant declaration in the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared identifier.
    pub name: String,
    /// Raw literal text on the right-hand side.
    pub value: String,
    /// Declared type, present only under the typed grammar.
    pub ty: Option<String>,
    /// Span of the whole declaration, from the first matched character
    /// through the terminating `;`.
    pub span: Span,
}

/// Patterns compiled once per session and passed around explicitly.
#[derive(Debug)]
pub struct RegionPatterns {
    line_comment: Regex,
    block_comment: Regex,
    declaration: Regex,
    grammar: DeclarationGrammar,
}

impl RegionPatterns {
    pub fn new(grammar: DeclarationGrammar) -> Self {
        let compile = |src: &str| {
            Regex::new(src).unwrap_or_else(|e| panic!("region pattern is invalid: {e}"))
        };
        Self {
            line_comment: compile(r"//[^\n]*"),
            block_comment: compile(r"/\*[^/]*\*/"),
            declaration: compile(grammar.pattern()),
            grammar,
        }
    }

    pub fn grammar(&self) -> DeclarationGrammar {
        self.grammar
    }
}

/// The complete comment and declaration span sets for one snapshot.
#[derive(Debug, Default)]
pub struct RegionIndex {
    pub comments: Vec<Span>,
    pub declarations: Vec<Declaration>,
}

impl RegionIndex {
    /// Scan the snapshot and produce the full index.
    pub fn build(text: &str, patterns: &RegionPatterns) -> Self {
        let mut comments = Vec::new();
        for m in patterns.line_comment.find_iter(text) {
            comments.push(Span::new(m.start(), m.end()));
        }
        for m in patterns.block_comment.find_iter(text) {
            comments.push(Span::new(m.start(), m.end()));
        }

        let mut declarations = Vec::new();
        for caps in patterns.declaration.captures_iter(text) {
            let whole = caps.get(0).expect("capture 0 always present");
            let (ty, name, value) = if patterns.grammar.is_typed() {
                (
                    caps.get(1).map(|m| m.as_str().to_string()),
                    caps.get(2).map_or("", |m| m.as_str()),
                    caps.get(3).map_or("", |m| m.as_str()),
                )
            } else {
                (
                    None,
                    caps.get(1).map_or("", |m| m.as_str()),
                    caps.get(2).map_or("", |m| m.as_str()),
                )
            };
            declarations.push(Declaration {
                name: name.to_string(),
                value: value.to_string(),
                ty,
                span: Span::new(whole.start(), whole.end()),
            });
        }

        Self {
            comments,
            declarations,
        }
    }

    /// Does `[start, end)` fall strictly inside any comment span?
    pub fn in_comment(&self, start: usize, end: usize) -> bool {
        self.comments.iter().any(|c| c.surrounds(start, end))
    }

    /// Does `[start, end)` fall strictly inside any declaration span?
    pub fn in_declaration(&self, start: usize, end: usize) -> bool {
        self.declarations.iter().any(|d| d.span.surrounds(start, end))
    }

    /// Is an identifier already declared somewhere in the snapshot?
    pub fn has_declared_name(&self, name: &str) -> bool {
        self.declarations.iter().any(|d| d.name == name)
    }
}
