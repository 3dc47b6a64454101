//! Colon disambiguation.
//!
//! The raw `:` is the most overloaded character in the family. Resolution
//! order, first match wins:
//!
//! 1. ternary colon — an unmatched `?` earlier in the statement at the same
//!    paren depth
//! 2. case colon — a `case` earlier in the statement
//! 3. access colon — directly after `private`/`public`/`protected`
//! 4. constructor-initializer / class-inheritance colon
//! 5. special-statement paren colon (range-for, foreach) — left generic
//! 6. label colon — a lone word opening the statement
//! 7. Pawn tag colon, D array-initializer colon, Objective-C message colons
//! 8. bit-field/declaration colon as the default where a declaration shape
//!    precedes; otherwise the raw kind is retained

use crate::chunks::{ChunkId, ChunkSeq};
use cfmt_core::dialect::Dialect;
use cfmt_core::kinds::ChunkKind as K;

pub(super) fn run(seq: &mut ChunkSeq, dialect: Dialect) {
    for id in seq.ids() {
        if seq.kind(id) != K::Colon {
            continue;
        }

        match scan_back_in_statement(seq, id) {
            Some(K::Question) => {
                seq.set_kind(id, K::QColon);
                continue;
            }
            Some(K::Case) => {
                seq.set_kind(id, K::CaseColon);
                continue;
            }
            _ => {}
        }

        let prev = seq.prev_code(id);
        let prev_kind = prev.map(|p| seq.kind(p));

        if prev_kind == Some(K::Private) {
            seq.set_kind(id, K::PrivateColon);
            continue;
        }

        // Constructor initializer lists open right after the parameter list.
        if prev_kind == Some(K::FParenClose) {
            seq.set_kind(id, K::ClassColon);
            continue;
        }
        if class_header_before(seq, id) {
            seq.set_kind(id, K::ClassColon);
            continue;
        }

        // Range-for / foreach colons stay generic inside special parens.
        if inside_special_paren(seq, id) {
            continue;
        }

        if let Some(word) = prev.filter(|p| seq.kind(*p) == K::Word) {
            if label_position(seq, id, word) {
                seq.set_kind(word, K::Label);
                seq.set_kind(id, K::LabelColon);
                continue;
            }
        }

        if dialect == Dialect::Pawn
            && prev_kind == Some(K::Word)
            && seq.next_code(id).map(|n| seq.kind(n)) == Some(K::Word)
        {
            seq.set_kind(id, K::TagColon);
            if let Some(tag) = prev {
                seq.set_kind(tag, K::Tag);
            }
            continue;
        }

        if dialect == Dialect::D && seq.get(id).square_depth > 0 {
            seq.set_kind(id, K::DArrayColon);
            continue;
        }

        // Objective-C selector/message colons stay generic.
        if dialect == Dialect::Oc && seq.get(id).square_depth > 0 {
            continue;
        }

        if matches!(
            prev_kind,
            Some(K::Word | K::Type | K::SquareClose | K::TSquare | K::AngleClose)
        ) {
            seq.set_kind(id, K::BitColon);
        }
    }
}

/// Walk back through the current statement looking for an unmatched `?` at
/// the colon's paren depth, or a `case`. Statement boundaries and leaving
/// the enclosing paren stop the walk.
fn scan_back_in_statement(seq: &ChunkSeq, colon: ChunkId) -> Option<K> {
    let colon_depth = seq.get(colon).paren_depth;
    let mut cur = seq.prev_code(colon);
    while let Some(id) = cur {
        let chunk = seq.get(id);
        match chunk.kind {
            K::Question if chunk.paren_depth == colon_depth => return Some(K::Question),
            K::Case => return Some(K::Case),
            k if k.ends_statement() => return None,
            k if k.is_paren_open() && chunk.paren_depth < colon_depth => return None,
            _ => {}
        }
        cur = seq.prev_code(id);
    }
    None
}

/// A `class`/`struct`/`enum` header earlier in the statement makes this an
/// inheritance (or enum-base) colon.
fn class_header_before(seq: &ChunkSeq, colon: ChunkId) -> bool {
    let mut cur = seq.prev_code(colon);
    while let Some(id) = cur {
        match seq.kind(id) {
            K::Class | K::Struct | K::Enum | K::OcIntf => return true,
            k if k.ends_statement() => return false,
            _ => {}
        }
        cur = seq.prev_code(id);
    }
    false
}

fn inside_special_paren(seq: &ChunkSeq, id: ChunkId) -> bool {
    seq.enclosing_paren(id)
        .map(|open| seq.kind(open) == K::SParenOpen)
        .unwrap_or(false)
}

/// Label position: the word opens its statement and the colon ends the
/// label (nothing but layout after it on the line matters to us).
fn label_position(seq: &ChunkSeq, colon: ChunkId, word: ChunkId) -> bool {
    if seq.get(colon).paren_depth > 0 {
        return false;
    }
    match seq.prev_code(word).map(|b| seq.kind(b)) {
        None => true,
        Some(
            K::Semicolon
            | K::VSemicolon
            | K::BraceOpen
            | K::BraceClose
            | K::VBraceOpen
            | K::VBraceClose
            | K::CaseColon
            | K::LabelColon,
        ) => true,
        _ => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================
