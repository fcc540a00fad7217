//! magicnum CLI - rewrite magic numbers into named constants.
//!
//! Features:
//! - Single file, directory tree, or stdin input
//! - Walkdir-based source discovery filtered by extension
//! - Rayon-powered parallel sessions (one buffer per file, nothing shared)
//! - Dry-run by default; `--write` commits rewrites in place
//! - Plain or JSON reporting, CI-friendly exit codes via `--check`

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use magicnum_core::{
    extract_magic_numbers_with, init_structured_logging, load_config, log_warn, print_json,
    print_plain, ExtractOptions, FileReport, MagicnumError,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Rewrite magic numbers into named constants")]
pub struct Cli {
    /// File or directory to rewrite, or `-` for stdin
    #[arg(default_value = ".")]
    path: String,

    /// Write rewritten files in place (default is a dry run)
    #[arg(long)]
    write: bool,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Exit with code 1 if any magic number is found (for CI)
    #[arg(long)]
    check: bool,

    /// File extensions to rewrite (default: java)
    #[arg(long, num_args = 1..)]
    ext: Vec<String>,

    /// Indent unit for inserted declarations (overrides magicnum.toml)
    #[arg(long)]
    indent: Option<String>,
}

/// Collect rewrite targets under a root, filtered by extension.
fn collect_source_files(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|x| x.to_str())
                .is_some_and(|x| extensions.iter().any(|want| want == x))
        })
        .map(|e| e.into_path())
        .collect()
}

/// Run one session over one file. Session failures are reported and
/// skipped; they never abort the other files.
fn process_file(path: &Path, options: &ExtractOptions, write: bool) -> Option<FileReport> {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            log_warn(&format!("skipping {}: {}", path.display(), e));
            return None;
        }
    };

    match extract_magic_numbers_with(&source, options) {
        Ok(out) => {
            let changed = out.text != source;
            if changed && write {
                if let Err(e) = fs::write(path, &out.text) {
                    log_warn(&format!("write failed for {}: {}", path.display(), e));
                    return None;
                }
            }
            Some(FileReport {
                path: path.display().to_string(),
                values: out.values,
                changed,
            })
        }
        Err(MagicnumError::EmptyInput) => Some(FileReport {
            path: path.display().to_string(),
            values: Vec::new(),
            changed: false,
        }),
        Err(e) => {
            log_warn(&format!("skipping {}: {}", path.display(), e));
            None
        }
    }
}

/// Stdin mode: rewritten text on stdout, summary on stderr.
fn run_stdin(options: &ExtractOptions) -> Result<i32> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("Failed to read stdin")?;

    let out = extract_magic_numbers_with(&source, options)?;
    print!("{}", out.text);
    eprintln!("{}", out.summary());
    Ok(if out.is_empty() { 0 } else { 1 })
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] magicnum internal error: {}", info);
        eprintln!("[PANIC] The process will exit safely with code 2.");
    }));

    // Structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    let cli = Cli::parse();

    // Resolve options: magicnum.toml first, then CLI overrides.
    let root = if cli.path == "-" {
        PathBuf::from(".")
    } else {
        PathBuf::from(&cli.path)
    };
    let config_root = if root.is_dir() {
        root.clone()
    } else {
        root.parent().map(Path::to_path_buf).unwrap_or_default()
    };
    let config = match load_config(&config_root) {
        Ok(cfg) => cfg.unwrap_or_default(),
        Err(e) => {
            log_warn(&format!("config load failed: {}", e));
            Default::default()
        }
    };
    let mut options = config.to_options()?;
    if let Some(indent) = &cli.indent {
        options.indent = indent.clone();
    }

    // Stdin mode
    if cli.path == "-" {
        let code = run_stdin(&options)?;
        std::process::exit(if cli.check { code } else { 0 });
    }

    // Gather rewrite targets
    let mut extensions = cli.ext.clone();
    if extensions.is_empty() {
        extensions = config
            .extensions
            .clone()
            .unwrap_or_else(|| vec!["java".to_string()]);
    }
    let files = collect_source_files(&root, &extensions);
    if files.is_empty() {
        eprintln!("No matching source files under: {}", root.display());
        std::process::exit(0);
    }

    // One independent session per file; sessions share nothing.
    let mut reports: Vec<FileReport> = files
        .par_iter()
        .filter_map(|path| process_file(path, &options, cli.write))
        .collect();
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    if cli.json {
        print_json(&reports);
    } else {
        print_plain(&reports);
        if !cli.write && reports.iter().any(|r| r.changed) {
            eprintln!("(dry run - pass --write to rewrite files in place)");
        }
    }

    let found_any = reports.iter().any(|r| !r.values.is_empty());
    std::process::exit(if cli.check && found_any { 1 } else { 0 });
}
