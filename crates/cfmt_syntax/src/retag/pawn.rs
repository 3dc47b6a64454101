//! Virtual semicolon synthesis for the optional-terminator dialect.
//!
//! Pawn statements may end at the newline. Where a statement-ending chunk is
//! followed by a newline at the top paren level, a virtual semicolon is
//! spliced in so every later consumer sees uniformly terminated statements.
//! Virtual chunks carry no source text and are skipped on re-emission.

use crate::chunks::{Chunk, ChunkId, ChunkSeq};
use cfmt_core::dialect::Dialect;
use cfmt_core::kinds::ChunkKind as K;

pub(super) fn run(seq: &mut ChunkSeq, dialect: Dialect) {
    if !dialect.optional_semicolons() {
        return;
    }

    for id in seq.ids() {
        if seq.kind(id) != K::Newline {
            continue;
        }
        let Some(prev) = seq.prev_code(id) else {
            continue;
        };
        if !wants_vsemi(seq, prev) {
            continue;
        }
        // A continuation operator on the next line keeps the statement open.
        if seq.next_code(id).is_some_and(|n| continues_statement(seq.kind(n))) {
            continue;
        }
        insert_vsemi(seq, prev);
    }

    // A final statement may end at end of input instead of a newline.
    if let Some(last) = seq.last() {
        let tail = if seq.kind(last).is_layout() { seq.prev_code(last) } else { Some(last) };
        if let Some(t) = tail {
            if wants_vsemi(seq, t) {
                insert_vsemi(seq, t);
            }
        }
    }
}

/// The chunk can end a statement and sits at the top nesting level outside
/// any directive line.
fn wants_vsemi(seq: &ChunkSeq, id: ChunkId) -> bool {
    let chunk = seq.get(id);
    if chunk.paren_depth > 0 || chunk.in_preproc {
        return false;
    }
    matches!(
        chunk.kind,
        K::Word
            | K::Number
            | K::NumberFp
            | K::String
            | K::StringMulti
            | K::ParenClose
            | K::FParenClose
            | K::SquareClose
            | K::TSquare
            | K::IncdecAfter
            | K::Break
            | K::Continue
            | K::Return
    )
}

/// Operators opening the next line that splice the two lines into one
/// logical statement. The raw provisional kinds appear here alongside every
/// kind they can be re-tagged into, so re-running the pipeline reaches the
/// same insertion decisions.
fn continues_statement(kind: K) -> bool {
    matches!(
        kind,
        K::Assign
            | K::SAssign
            | K::Arith
            | K::SArith
            | K::Bool
            | K::SBool
            | K::Compare
            | K::SCompare
            | K::Member
            | K::DcMember
            | K::Comma
            | K::Question
            | K::QColon
            | K::Colon
            | K::BitColon
            | K::CaseColon
            | K::ClassColon
            | K::TagColon
            | K::BraceOpen
            | K::Star
            | K::Plus
            | K::Minus
            | K::Amp
            | K::Inv
            | K::Concat
            | K::PtrType
            | K::Deref
            | K::Addr
            | K::ByRef
            | K::Neg
            | K::Pos
            | K::IncdecAfter
            | K::IncdecBefore
            | K::Range
    )
}

fn insert_vsemi(seq: &mut ChunkSeq, after: ChunkId) {
    let anchor = seq.get(after);
    let mut vsemi = Chunk::virtual_at(K::VSemicolon, anchor.span.end);
    vsemi.paren_depth = anchor.paren_depth;
    vsemi.brace_depth = anchor.brace_depth;
    vsemi.square_depth = anchor.square_depth;
    seq.insert_after(after, vsemi);
}

// ============================================================================
// TESTS
// ============================================================================
