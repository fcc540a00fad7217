//! Configuration - rewrite options and magicnum.toml loading.

use crate::regions::DeclarationGrammar;
use crate::scanner::LiteralGrammar;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Options for one rewrite session.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Numeric-literal grammar the scanner uses.
    pub literal_grammar: LiteralGrammar,
    /// Declaration grammar the region index recognizes.
    pub declaration_grammar: DeclarationGrammar,
    /// Indent unit placed before each inserted declaration.
    pub indent: String,
    /// Prefix for generated constant names.
    pub prefix: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            literal_grammar: LiteralGrammar::Full,
            declaration_grammar: DeclarationGrammar::Typed,
            indent: "\t".to_string(),
            prefix: "MAGIC_NUMBER_".to_string(),
        }
    }
}

/// Main configuration structure for magicnum.toml.
#[derive(Debug, Deserialize, Default)]
pub struct MagicnumConfig {
    /// Literal grammar name: "bare", "suffixed", or "full".
    pub literal_grammar: Option<String>,
    /// Declaration grammar name: "int-only", "untyped", or "typed".
    pub declaration_grammar: Option<String>,
    /// Indent unit for inserted declarations.
    pub indent: Option<String>,
    /// Prefix for generated constant names.
    pub prefix: Option<String>,
    /// File extensions the CLI should rewrite (default: ["java"]).
    pub extensions: Option<Vec<String>>,
}

impl MagicnumConfig {
    /// Resolve the configured grammar names into session options,
    /// defaulting anything unspecified.
    pub fn to_options(&self) -> Result<ExtractOptions> {
        let mut options = ExtractOptions::default();
        if let Some(name) = &self.literal_grammar {
            options.literal_grammar = name
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("Invalid literal_grammar in magicnum.toml")?;
        }
        if let Some(name) = &self.declaration_grammar {
            options.declaration_grammar = name
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("Invalid declaration_grammar in magicnum.toml")?;
        }
        if let Some(indent) = &self.indent {
            options.indent = indent.clone();
        }
        if let Some(prefix) = &self.prefix {
            options.prefix = prefix.clone();
        }
        Ok(options)
    }
}

/// Loads configuration from magicnum.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<MagicnumConfig>> {
    let path = root.join("magicnum.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid magicnum.toml")?;
    Ok(Some(cfg))
}
