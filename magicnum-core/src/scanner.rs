//! Literal Scanner - lazy, finite, restartable numeric token discovery.
//!
//! The scanner compiles its pattern once per session and is handed around
//! explicitly; there is no global pattern cache. A scan is always a fresh
//! pass from offset 0 over the buffer it is given - absolute offsets from
//! a previous pass are invalid the moment the buffer mutates.

use regex::Regex;
use std::str::FromStr;

/// Which numeric-literal grammar the scanner recognizes.
///
/// The three grammars exist in increasing sophistication; `Full` is the
/// default and what the type-aware rewrite path expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralGrammar {
    /// Bare integer digits: `\d+`.
    BareDigits,
    /// Integer digits with an optional single suffix letter (`d`, `f`, `l`).
    SuffixedInt,
    /// `digits[.digits][suffix]` - decimal points and the `d`/`f`/`l`
    /// suffix alphabet, case-sensitive.
    #[default]
    Full,
}

impl LiteralGrammar {
    /// Regex source for this grammar.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::BareDigits => r"\d+",
            Self::SuffixedInt => r"\d+[dfl]?",
            Self::Full => r"\d+(?:\.\d+)?[dfl]?",
        }
    }
}

impl FromStr for LiteralGrammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bare" | "bare-digits" => Ok(Self::BareDigits),
            "suffixed" | "suffixed-int" => Ok(Self::SuffixedInt),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown literal grammar: {other}")),
        }
    }
}

/// A numeric token found in the current scan pass.
///
/// Valid only against the snapshot it was scanned from; never persisted
/// across mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralCandidate {
    /// Raw literal text, including any decimal part and suffix.
    pub text: String,
    /// Byte offset of the first digit.
    pub start: usize,
    /// Byte offset one past the last matched character.
    pub end: usize,
}

/// Compiled scanner for one session.
#[derive(Debug)]
pub struct LiteralScanner {
    re: Regex,
}

impl LiteralScanner {
    /// Compile the scanner for the chosen grammar.
    ///
    /// The grammar patterns are fixed strings, so compilation cannot fail
    /// for user-controlled reasons; an invalid pattern is a programming
    /// error caught by the test suite.
    pub fn new(grammar: LiteralGrammar) -> Self {
        let re = Regex::new(grammar.pattern())
            .unwrap_or_else(|e| panic!("literal grammar pattern is invalid: {e}"));
        Self { re }
    }

    /// Produce the candidate sequence for the given snapshot, in document
    /// order, starting from offset 0.
    pub fn scan<'t>(&'t self, text: &'t str) -> impl Iterator<Item = LiteralCandidate> + 't {
        self.re.find_iter(text).map(|m| LiteralCandidate {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        })
    }
}
