//! Preprocessor refinement.
//!
//! Two jobs: give `#define` names their macro role (function-like only when
//! the paren is flush against the name), and promote the `#` of C# region
//! markers to the indenting variant.

use crate::chunks::ChunkSeq;
use cfmt_core::kinds::ChunkKind as K;

pub(super) fn run(seq: &mut ChunkSeq) {
    for id in seq.ids() {
        match seq.kind(id) {
            K::PpDefine => {
                let Some(name) = seq.next_code(id) else {
                    continue;
                };
                // Whatever the resolver thought the name was, after #define
                // it is a macro.
                let flush_paren = seq.next(name).filter(|n| {
                    matches!(seq.kind(*n), K::ParenOpen | K::FParenOpen)
                        && seq.get(name).span.end == seq.get(*n).span.start
                });
                match flush_paren {
                    Some(open) => {
                        seq.set_kind(name, K::MacroFunc);
                        if let Some(close) = seq.matching_close(open) {
                            seq.set_kind(close, K::FParenClose);
                        }
                        seq.set_kind(open, K::FParenOpen);
                    }
                    None => seq.set_kind(name, K::Macro),
                }
            }
            K::PpRegion | K::PpEndregion => {
                if let Some(pound) = seq.prev_code(id) {
                    if matches!(seq.kind(pound), K::Preproc | K::PreprocIndent) {
                        seq.set_kind(pound, K::PreprocIndent);
                    }
                }
            }
            _ => {}
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
