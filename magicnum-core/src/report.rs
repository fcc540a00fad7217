//! Output formatting - summary rendering, plaintext and JSON.

use serde_json::json;

/// Render the session summary: distinct values `;`-joined with a
/// trailing separator behind `Extracted: `, or the not-found sentinel.
pub fn render_summary(values: &[String]) -> String {
    if values.is_empty() {
        "No magic number found!".to_string()
    } else {
        let mut out = String::from("Extracted: ");
        for value in values {
            out.push_str(value);
            out.push(';');
        }
        out
    }
}

/// Per-file outcome, for hosts that run one session per file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: String,
    pub values: Vec<String>,
    pub changed: bool,
}

/// Prints per-file summaries in plain text format.
pub fn print_plain(reports: &[FileReport]) {
    for r in reports {
        println!("{}: {}", r.path, render_summary(&r.values));
    }
}

/// Prints per-file summaries in JSON format.
///
/// Falls back to a simple format if serialization fails (should never
/// happen with string arrays, but all cases are handled).
pub fn print_json(reports: &[FileReport]) {
    let entries: Vec<_> = reports
        .iter()
        .map(|r| {
            json!({
                "path": r.path,
                "extracted": r.values,
                "changed": r.changed,
            })
        })
        .collect();
    match serde_json::to_string_pretty(&json!({ "files": entries })) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            for r in reports {
                println!("{}: {:?}", r.path, r.values);
            }
        }
    }
}
