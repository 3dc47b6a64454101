//! Template angles vs comparison operators.
//!
//! A raw `<` only becomes an angle bracket when something type-like precedes
//! it and a matching `>` is found at the same nesting depth before the
//! statement can end. Everything unmatched falls back to comparison — the
//! safe reading — so no angle-open ever survives without its close. D spells
//! template instantiation with `!` instead; that is handled here too.

use std::collections::HashSet;

use crate::chunks::{ChunkId, ChunkSeq};
use cfmt_core::dialect::Dialect;
use cfmt_core::kinds::ChunkKind as K;

pub(super) fn run(seq: &mut ChunkSeq, dialect: Dialect) {
    // Angle depth is recomputed from scratch on every run.
    for id in seq.ids() {
        seq.get_mut(id).angle_depth = 0;
    }

    // No templates or generics in this dialect: every angle is a comparison.
    if !dialect.has_generics() {
        for id in seq.ids() {
            if matches!(seq.kind(id), K::AngleOpen | K::AngleClose) {
                seq.set_kind(id, K::Compare);
            }
        }
        return;
    }

    let mut matched: HashSet<ChunkId> = HashSet::new();

    for id in seq.ids() {
        if seq.kind(id) != K::AngleOpen {
            continue;
        }
        let introduces_template = seq
            .prev_code(id)
            .map(|p| {
                matches!(
                    seq.kind(p),
                    K::Word | K::Type | K::TypeCast | K::Template | K::Typename | K::OcClass
                )
            })
            .unwrap_or(false);
        if !introduces_template {
            seq.set_kind(id, K::Compare);
            continue;
        }

        match find_matching_close(seq, id) {
            Some(close) => {
                matched.insert(id);
                matched.insert(close);
                bump_angle_depths(seq, id, close);
            }
            None => seq.set_kind(id, K::Compare),
        }
    }

    // Leftover closes have no open; comparison is the only safe reading.
    for id in seq.ids() {
        if seq.kind(id) == K::AngleClose && !matched.contains(&id) {
            seq.set_kind(id, K::Compare);
        }
    }

    if dialect.template_bang() {
        mark_template_bangs(seq);
    }
}

/// Search forward for the `>` closing `open` at the same depth.
///
/// The search gives up at anything that ends the statement or leaves the
/// enclosing bracket, and at operators that cannot appear between template
/// arguments.
fn find_matching_close(seq: &ChunkSeq, open: ChunkId) -> Option<ChunkId> {
    let paren_floor = seq.get(open).paren_depth;
    let mut depth = 1usize;
    let mut cur = seq.next(open);
    while let Some(id) = cur {
        let chunk = seq.get(id);
        if chunk.paren_depth < paren_floor {
            return None;
        }
        match chunk.kind {
            K::AngleOpen => depth += 1,
            K::AngleClose => {
                depth -= 1;
                if depth == 0 {
                    return Some(id);
                }
            }
            K::Semicolon | K::VSemicolon | K::BraceOpen | K::BraceClose | K::Bool => return None,
            _ => {}
        }
        cur = seq.next(id);
    }
    None
}

/// Chunks strictly between a matched pair sit one angle level deeper.
/// Nested pairs accumulate naturally as each pair is processed.
fn bump_angle_depths(seq: &mut ChunkSeq, open: ChunkId, close: ChunkId) {
    let mut cur = seq.next(open);
    while let Some(id) = cur {
        if id == close {
            break;
        }
        seq.get_mut(id).angle_depth += 1;
        cur = seq.next(id);
    }
}

/// D `Foo!(args)` / `Foo!arg`: the `!` is instantiation, not negation.
fn mark_template_bangs(seq: &mut ChunkSeq) {
    for id in seq.ids() {
        if seq.kind(id) != K::Not {
            continue;
        }
        let template_prev = seq
            .prev_code(id)
            .map(|p| matches!(seq.kind(p), K::Word | K::Type))
            .unwrap_or(false);
        let template_next = seq
            .next_code(id)
            .map(|n| {
                matches!(
                    seq.kind(n),
                    K::ParenOpen | K::Word | K::Type | K::Number | K::String
                )
            })
            .unwrap_or(false);
        if template_prev && template_next {
            seq.set_kind(id, K::DTemplate);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
