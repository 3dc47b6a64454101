//! Function roles.
//!
//! A word directly followed by a paren (template argument groups skipped) is
//! a function of some role. The paren pair becomes a function paren pair and
//! the word is refined by context:
//!
//! - close paren followed by `{` (skipping trailing qualifiers) — definition
//! - word preceded by an operator or other expression position — call
//! - close paren followed by `:` — definition (constructor initializer list)
//! - close paren followed by `;`/`,`/`=` after a type — prototype, or a
//!   constructor-style variable when the arguments contain literals
//! - word preceded by `~` — class function (destructor)
//!
//! When nothing else decides, the word is a call.

use crate::chunks::{ChunkId, ChunkSeq};
use cfmt_core::kinds::ChunkKind as K;

pub(super) fn run(seq: &mut ChunkSeq) {
    for id in seq.ids() {
        if seq.kind(id) != K::Word {
            continue;
        }
        let Some((open, close)) = call_parens(seq, id) else {
            continue;
        };

        seq.set_kind(open, K::FParenOpen);
        seq.set_kind(close, K::FParenClose);
        seq.set_kind(id, K::Function);

        let prev_kind = seq.prev_code(id).map(|p| seq.kind(p));

        // Destructor: `~Name(...)`.
        if prev_kind == Some(K::Inv) {
            if let Some(p) = seq.prev_code(id) {
                seq.set_kind(p, K::Destructor);
            }
            seq.set_kind(id, K::FuncClass);
            continue;
        }

        let after_close = after_close_skipping_quals(seq, close).map(|a| seq.kind(a));

        // Operators and other expression positions force a call before any
        // look at what follows the close paren; member access does not,
        // because qualified definitions share that shape.
        let member_prev = matches!(prev_kind, Some(K::Member | K::DcMember));
        if prev_kind.is_some_and(expression_position) && !member_prev {
            seq.set_kind(id, K::FuncCall);
            continue;
        }
        if after_close == Some(K::BraceOpen) {
            seq.set_kind(id, K::FuncDef);
            continue;
        }
        if after_close == Some(K::Colon) {
            // Constructor with an initializer list.
            seq.set_kind(id, K::FuncDef);
            continue;
        }
        if matches!(after_close, Some(K::Semicolon | K::Comma | K::Assign)) {
            match prev_kind {
                _ if member_prev => seq.set_kind(id, K::FuncCall),
                Some(K::Type | K::PtrType | K::Qualifier | K::AngleClose | K::Word) => {
                    let role = if has_literal_arg(seq, open, close) {
                        K::FuncCtorVar
                    } else {
                        K::FuncProto
                    };
                    seq.set_kind(id, role);
                }
                kind if statement_boundary(kind) => seq.set_kind(id, K::FuncCall),
                _ => seq.set_kind(id, K::FuncCall),
            }
            continue;
        }

        seq.set_kind(id, K::FuncCall);
    }
}

/// The paren pair a function word owns, skipping one matched template
/// argument group between name and paren.
fn call_parens(seq: &ChunkSeq, word: ChunkId) -> Option<(ChunkId, ChunkId)> {
    let mut next = seq.next_code(word)?;
    if seq.kind(next) == K::AngleOpen {
        let close = seq.matching_close(next)?;
        next = seq.next_code(close)?;
    }
    if seq.kind(next) != K::ParenOpen {
        return None;
    }
    let close = seq.matching_close(next)?;
    Some((next, close))
}

/// Skip what may legally sit between a parameter list and the body.
fn after_close_skipping_quals(seq: &ChunkSeq, close: ChunkId) -> Option<ChunkId> {
    let mut cur = seq.next_code(close);
    while let Some(id) = cur {
        match seq.kind(id) {
            K::Qualifier | K::Volatile => cur = seq.next_code(id),
            K::Throw | K::Attribute => {
                let next = seq.next_code(id)?;
                if seq.kind(next).is_paren_open() {
                    let spec_close = seq.matching_close(next)?;
                    cur = seq.next_code(spec_close);
                } else {
                    cur = Some(next);
                }
            }
            _ => return Some(id),
        }
    }
    None
}

/// Kinds before a word that put it in expression position.
fn expression_position(kind: K) -> bool {
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
            | K::Star
            | K::Plus
            | K::Minus
            | K::Amp
            | K::Not
            | K::Deref
            | K::Addr
            | K::Neg
            | K::Pos
            | K::Question
            | K::QColon
            | K::Colon
            | K::Return
            | K::Case
            | K::Throw
            | K::New
            | K::ParenOpen
            | K::FParenOpen
            | K::SParenOpen
            | K::SquareOpen
            | K::Member
            | K::DcMember
            | K::Comma
    )
}

fn statement_boundary(kind: Option<K>) -> bool {
    match kind {
        None => true,
        Some(k) => matches!(
            k,
            K::Semicolon
                | K::VSemicolon
                | K::BraceOpen
                | K::BraceClose
                | K::VBraceOpen
                | K::VBraceClose
                | K::SParenClose
                | K::Else
                | K::Do
                | K::CaseColon
                | K::LabelColon
        ),
    }
}

fn has_literal_arg(seq: &ChunkSeq, open: ChunkId, close: ChunkId) -> bool {
    let mut cur = seq.next(open);
    while let Some(id) = cur {
        if id == close {
            return false;
        }
        if matches!(
            seq.kind(id),
            K::Number | K::NumberFp | K::String | K::StringMulti
        ) {
            return true;
        }
        cur = seq.next(id);
    }
    false
}

// ============================================================================
// TESTS
// ============================================================================
