#![forbid(unsafe_code)]
//! Syntax frontend for the cfmt formatter: chunk sequence, raw lexer,
//! keyword resolver, and contextual re-tagger.
//!
//! This crate turns the raw text of one source unit into the ordered,
//! fully-classified chunk sequence the formatting engine consumes. It is
//! intentionally syntax-only: no type information, no symbol table, no AST.
//! Classification is deterministic best-effort; pathological macro-obscured
//! input may keep provisional kinds, never wrong-by-construction ones.
//!
//! ## Notes
//! - Vocabulary identity (kinds, keywords, punctuation) comes from the
//!   `cfmt_core` tables.
//! - One [`tokenize`] call owns its chunk sequence exclusively; separate
//!   units share nothing but the read-only tables and may run in parallel.
//!
//! ## Examples
//! ```rust
//! use cfmt_core::Dialect;
//!
//! let out = cfmt_syntax::tokenize("int x;\n", Dialect::C);
//! assert!(out.diagnostics.is_empty());
//! assert_eq!(out.seq.reconstruct("int x;\n"), "int x;\n");
//! ```

pub mod chunks;
pub mod diagnostics;
pub mod lexer;
pub mod resolve;
pub mod retag;

use cfmt_core::Dialect;

/// Output of the full front-end pipeline for one source unit.
#[derive(Debug)]
pub struct Tokenized {
    pub seq: chunks::ChunkSeq,
    pub diagnostics: Vec<diagnostics::Diagnostic>,
}

/// Run the whole pipeline: raw lex, keyword resolution, re-tagging.
///
/// Never fails: lexical trouble is reported through
/// [`Tokenized::diagnostics`] while the sequence is still produced whole.
#[tracing::instrument(skip_all, fields(dialect = %dialect, source_len = source.len()))]
pub fn tokenize(source: &str, dialect: Dialect) -> Tokenized {
    let lexer::Lexed { mut seq, diagnostics } = lexer::lex(source, dialect);
    resolve::resolve_keywords(&mut seq, source, dialect);
    retag::retag_all(&mut seq, source, dialect);
    Tokenized { seq, diagnostics }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cfmt_core::kinds::ChunkKind as K;

    #[test]
    fn pipeline_produces_classified_chunks() {
        let source = "int f(int x) { return x * 2; }";
        let out = tokenize(source, Dialect::C);
        assert!(out.diagnostics.is_empty());
        let kinds: Vec<K> = out
            .seq
            .ids()
            .into_iter()
            .map(|id| out.seq.kind(id))
            .filter(|k| !k.is_layout())
            .collect();
        assert_eq!(
            kinds,
            vec![
                K::Type,
                K::FuncDef,
                K::FParenOpen,
                K::Type,
                K::Word,
                K::FParenClose,
                K::BraceOpen,
                K::Return,
                K::Word,
                K::Arith,
                K::Number,
                K::Semicolon,
                K::BraceClose
            ]
        );
    }

    #[test]
    fn diagnostics_do_not_block_output() {
        let source = "char *s = \"oops";
        let out = tokenize(source, Dialect::C);
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.seq.reconstruct(source), source);
    }
}
