//! Command implementations.

use std::fs;
use std::path::Path;

use cfmt_core::Dialect;
use cfmt_syntax::diagnostics::{line_info, ConfigError, Severity};
use cfmt_syntax::tokenize;

/// Exit code meaning the file produced findings (not a tool failure).
const FINDINGS: u8 = 1;

/// Print the classified chunk table for one file.
pub fn dump(file: &Path, dialect: Dialect) -> Result<u8, ConfigError> {
    let source = read(file)?;
    let out = tokenize(&source, dialect);

    println!("# {} ({})", file.display(), dialect);
    println!("{:>5}  {:<14} {:>2} {:>2} {:>2}  text", "idx", "kind", "pd", "bd", "sd");
    for (idx, id) in out.seq.ids().into_iter().enumerate() {
        let chunk = out.seq.get(id);
        let text = if chunk.is_virtual {
            "<virtual>".to_string()
        } else {
            format!("{:?}", chunk.text(&source))
        };
        println!(
            "{:>5}  {:<14} {:>2} {:>2} {:>2}  {}",
            idx,
            format!("{:?}", chunk.kind),
            chunk.paren_depth,
            chunk.brace_depth,
            chunk.square_depth,
            text
        );
    }

    report_diagnostics(file, &source, &out);
    Ok(if out.diagnostics.is_empty() { 0 } else { FINDINGS })
}

/// Tokenize and report diagnostics only.
pub fn check(file: &Path, dialect: Dialect) -> Result<u8, ConfigError> {
    let source = read(file)?;
    let out = tokenize(&source, dialect);
    tracing::debug!(chunks = out.seq.len(), diagnostics = out.diagnostics.len(), "checked unit");

    report_diagnostics(file, &source, &out);
    if out.diagnostics.is_empty() && !out.seq.unbalanced() {
        println!("{}: ok ({} chunks)", file.display(), out.seq.len());
        Ok(0)
    } else {
        Ok(FINDINGS)
    }
}

fn read(file: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(file).map_err(|source| ConfigError::UnreadableInput {
        path: file.display().to_string(),
        source,
    })
}

fn report_diagnostics(file: &Path, source: &str, out: &cfmt_syntax::Tokenized) {
    for diag in &out.diagnostics {
        let (line, col, _) = line_info(source, diag.span.start);
        let level = match diag.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        eprintln!("{}:{}:{}: {}: {}", file.display(), line, col, level, diag.message);
    }
    if out.seq.unbalanced() {
        eprintln!("{}: error: bracket nesting is unbalanced", file.display());
    }
}
