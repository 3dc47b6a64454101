//! Special-statement parens.
//!
//! The paren opening after `if`/`for`/`while`/`switch` (and friends) is not
//! an expression grouping: later passes and the formatting engine treat it
//! differently. Both ends of the pair are re-tagged and remember the owning
//! keyword through `parent_kind`.

use crate::chunks::ChunkSeq;
use cfmt_core::kinds::ChunkKind as K;

pub(super) fn run(seq: &mut ChunkSeq) {
    for id in seq.ids() {
        if seq.kind(id) != K::ParenOpen {
            continue;
        }
        let Some(prev) = seq.prev_code(id) else {
            continue;
        };
        let owner = seq.kind(prev);
        let special = matches!(
            owner,
            K::If
                | K::Elseif
                | K::For
                | K::While
                | K::WhileOfDo
                | K::Switch
                | K::Catch
                | K::Scope
        );
        if !special {
            continue;
        }
        seq.set_kind(id, K::SParenOpen);
        seq.set_parent_kind(id, owner);
        if let Some(close) = seq.matching_close(id) {
            seq.set_kind(close, K::SParenClose);
            seq.set_parent_kind(close, owner);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
