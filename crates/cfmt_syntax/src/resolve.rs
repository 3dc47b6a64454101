//! Keyword resolution.
//!
//! A pure per-chunk step between lexing and re-tagging: every generic word
//! is looked up by exact spelling in the active dialect's keyword table. A
//! hit replaces the chunk's kind; a miss leaves the word alone, where a later
//! pass may still decide it is a type name or a label. No look-ahead, no
//! state.

use crate::chunks::ChunkSeq;
use cfmt_core::dialect::Dialect;
use cfmt_core::keywords::keyword_kind;
use cfmt_core::kinds::ChunkKind;

/// Resolve every word chunk against the dialect's keyword table.
#[tracing::instrument(skip_all, fields(dialect = %dialect))]
pub fn resolve_keywords(seq: &mut ChunkSeq, source: &str, dialect: Dialect) {
    for id in seq.ids() {
        if seq.kind(id) != ChunkKind::Word {
            continue;
        }
        let spelling = seq.get(id).text(source);

        // Inside a directive's logical line, `defined` is an operator on
        // macro names, not the Pawn keyword.
        if seq.get(id).in_preproc && spelling == "defined" {
            seq.set_kind(id, ChunkKind::PpDefined);
            continue;
        }

        if let Some(kind) = keyword_kind(spelling, dialect) {
            seq.set_kind(id, kind);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
