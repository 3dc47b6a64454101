//! Diagnostics for the tokenizing front end.
//!
//! Two very different failure shapes live here:
//! - [`Diagnostic`] — non-fatal lexical recovery notes (unterminated string,
//!   stray character, unbalanced bracket). The pipeline always finishes the
//!   unit and hands these back alongside the chunk sequence.
//! - [`ConfigError`] — fatal before-lexing failures (unknown dialect,
//!   unreadable input). These abort the unit with a descriptive reason.

use crate::chunks::Span;
use cfmt_core::dialect::UnknownDialect;

// ============================================================================
// NON-FATAL DIAGNOSTICS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A recoverable problem found while processing one source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self { message: message.into(), span, severity: Severity::Error }
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self { message: message.into(), span, severity: Severity::Warning }
    }
}

/// Get line number, column number, and line text for a byte offset.
pub fn line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    (line_num, offset - line_start + 1, &source[line_start..line_end])
}

// ============================================================================
// FATAL CONFIGURATION ERRORS
// ============================================================================

/// A failure that prevents tokenization from starting at all.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error(transparent)]
    #[diagnostic(code(cfmt::unknown_dialect), help("supported: c, cpp, d, cs, java, pawn, oc"))]
    UnknownDialect(#[from] UnknownDialect),

    #[error("cannot infer a dialect for '{path}'")]
    #[diagnostic(code(cfmt::unknown_extension), help("pass --lang explicitly"))]
    UnknownExtension { path: String },

    #[error("cannot read '{path}': {source}")]
    #[diagnostic(code(cfmt::unreadable_input))]
    UnreadableInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// TESTS
// ============================================================================
