//! Unary vs binary vs declarator punctuation.
//!
//! The raw `*`, `+`, `-`, `&`, `~` chunks get their role from the preceding
//! code chunk: after something that ends an operand they are binary
//! arithmetic, otherwise unary. The declaration tie-break prefers the
//! pointer/reference-declarator reading after a type (or after a word that a
//! declaration context promotes to a type); the arithmetic reading wins in
//! expression context.

use crate::chunks::{ChunkId, ChunkSeq};
use cfmt_core::dialect::Dialect;
use cfmt_core::kinds::ChunkKind as K;

pub(super) fn run(seq: &mut ChunkSeq, dialect: Dialect) {
    for id in seq.ids() {
        match seq.kind(id) {
            K::Star => resolve_star(seq, id),
            K::Plus => resolve_additive(seq, id, K::Pos),
            K::Minus => resolve_additive(seq, id, K::Neg),
            K::Amp => resolve_amp(seq, id),
            K::Inv => resolve_inv(seq, id, dialect),
            K::IncdecAfter => {
                if !prev_ends_operand(seq, id) {
                    seq.set_kind(id, K::IncdecBefore);
                }
            }
            K::Member => maybe_designated_init(seq, id),
            _ => {}
        }
    }
}

fn prev_ends_operand(seq: &ChunkSeq, id: ChunkId) -> bool {
    seq.prev_code(id)
        .map(|p| seq.kind(p).ends_operand())
        .unwrap_or(false)
}

fn resolve_additive(seq: &mut ChunkSeq, id: ChunkId, unary: K) {
    let kind = if prev_ends_operand(seq, id) { K::Arith } else { unary };
    seq.set_kind(id, kind);
}

fn resolve_star(seq: &mut ChunkSeq, id: ChunkId) {
    match seq.prev_code(id) {
        Some(p) if matches!(seq.kind(p), K::Type | K::PtrType | K::Qualifier) => {
            seq.set_kind(id, K::PtrType);
        }
        Some(p) if seq.kind(p) == K::Word => {
            if declares_through_word(seq, id, p) {
                seq.set_kind(p, K::Type);
                seq.set_kind(id, K::PtrType);
            } else {
                seq.set_kind(id, K::Arith);
            }
        }
        Some(p) if seq.kind(p).ends_operand() => seq.set_kind(id, K::Arith),
        _ => seq.set_kind(id, K::Deref),
    }
}

fn resolve_amp(seq: &mut ChunkSeq, id: ChunkId) {
    match seq.prev_code(id) {
        Some(p) if matches!(seq.kind(p), K::Type | K::PtrType | K::Qualifier) => {
            seq.set_kind(id, K::ByRef);
        }
        Some(p) if seq.kind(p) == K::Word => {
            if declares_through_word(seq, id, p) {
                seq.set_kind(p, K::Type);
                seq.set_kind(id, K::ByRef);
            } else {
                seq.set_kind(id, K::Arith);
            }
        }
        Some(p) if seq.kind(p).ends_operand() => seq.set_kind(id, K::Arith),
        _ => seq.set_kind(id, K::Addr),
    }
}

fn resolve_inv(seq: &mut ChunkSeq, id: ChunkId, dialect: Dialect) {
    match seq.prev_code(id) {
        // `Foo::~Foo` without a call paren.
        Some(p) if seq.kind(p) == K::DcMember => seq.set_kind(id, K::Destructor),
        Some(p) if seq.kind(p).ends_operand() && dialect.tilde_concat() => {
            seq.set_kind(id, K::Concat);
        }
        // Unary bitwise-not already carries the right kind.
        _ => {}
    }
}

/// `word * word` reads as a pointer declaration when the first word sits
/// where a declaration can start: after a statement boundary, or as a
/// parameter inside the paren list of a function declaration.
fn declares_through_word(seq: &ChunkSeq, op: ChunkId, word: ChunkId) -> bool {
    let declarator_next = seq
        .next_code(op)
        .map(|n| matches!(seq.kind(n), K::Word | K::Star | K::Amp))
        .unwrap_or(false);
    if !declarator_next {
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
            | K::VBraceClose,
        ) => true,
        Some(K::FParenOpen | K::Comma) => in_declaration_parens(seq, op),
        _ => false,
    }
}

/// Whether the nearest enclosing paren is the parameter list of a function
/// declaration rather than a call or a special-statement paren.
fn in_declaration_parens(seq: &ChunkSeq, id: ChunkId) -> bool {
    let Some(open) = seq.enclosing_paren(id) else {
        return false;
    };
    if seq.kind(open) != K::FParenOpen {
        return false;
    }
    seq.prev_code(open)
        .map(|w| {
            matches!(
                seq.kind(w),
                K::Function | K::FuncDef | K::FuncProto | K::FuncClass | K::MacroFunc
            )
        })
        .unwrap_or(false)
}

/// `.field = value` inside a braced initializer is designated-initializer
/// member access, not ordinary member access.
fn maybe_designated_init(seq: &mut ChunkSeq, id: ChunkId) {
    if seq.get(id).brace_depth == 0 {
        return;
    }
    let from_boundary = seq
        .prev_code(id)
        .map(|p| matches!(seq.kind(p), K::BraceOpen | K::Comma))
        .unwrap_or(false);
    if !from_boundary {
        return;
    }
    let Some(field) = seq.next_code(id) else {
        return;
    };
    if seq.kind(field) != K::Word {
        return;
    }
    if seq.next_code(field).map(|n| seq.kind(n)) == Some(K::Assign) {
        seq.set_kind(id, K::C99Member);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::lexer::lex;
    use crate::resolve::resolve_keywords;
    use crate::retag::retag_all;
    use cfmt_core::dialect::Dialect;
    use cfmt_core::kinds::ChunkKind as K;

    fn kinds_for(source: &str, dialect: Dialect, text: &str) -> Vec<K> {
        let mut lexed = lex(source, dialect);
        resolve_keywords(&mut lexed.seq, source, dialect);
        retag_all(&mut lexed.seq, source, dialect);
        let seq = &lexed.seq;
        seq.ids()
            .into_iter()
            .filter(|id| seq.get(*id).text(source) == text)
            .map(|id| seq.kind(id))
            .collect()
    }

    #[test]
    fn pointer_vs_multiply() {
        assert_eq!(
            kinds_for("int *p = a * b;", Dialect::C, "*"),
            vec![K::PtrType, K::Arith]
        );
    }

    #[test]
    fn double_pointer() {
        assert_eq!(
            kinds_for("char **argv;", Dialect::C, "*"),
            vec![K::PtrType, K::PtrType]
        );
    }

    #[test]
    fn dereference_in_expressions() {
        assert_eq!(kinds_for("x = *p;", Dialect::C, "*"), vec![K::Deref]);
        assert_eq!(kinds_for("return *p;", Dialect::C, "*"), vec![K::Deref]);
        assert_eq!(kinds_for("f(*p);", Dialect::C, "*"), vec![K::Deref]);
    }

    #[test]
    fn user_type_pointer_declaration() {
        let src = "Node *next;";
        assert_eq!(kinds_for(src, Dialect::C, "*"), vec![K::PtrType]);
        assert_eq!(kinds_for(src, Dialect::C, "Node"), vec![K::Type]);
    }

    #[test]
    fn pointer_parameter_in_prototype() {
        let src = "void free_list(Node *head);";
        assert_eq!(kinds_for(src, Dialect::C, "*"), vec![K::PtrType]);
    }

    #[test]
    fn address_of_vs_bitand() {
        assert_eq!(kinds_for("p = &x;", Dialect::C, "&"), vec![K::Addr]);
        assert_eq!(kinds_for("m = a & b;", Dialect::C, "&"), vec![K::Arith]);
        assert_eq!(kinds_for("int &ref = x;", Dialect::Cpp, "&"), vec![K::ByRef]);
    }

    #[test]
    fn sign_vs_additive() {
        assert_eq!(kinds_for("x = -1;", Dialect::C, "-"), vec![K::Neg]);
        assert_eq!(kinds_for("x = a - 1;", Dialect::C, "-"), vec![K::Arith]);
        assert_eq!(kinds_for("x = +1;", Dialect::C, "+"), vec![K::Pos]);
        assert_eq!(kinds_for("f(-y);", Dialect::C, "-"), vec![K::Neg]);
    }

    #[test]
    fn increment_position() {
        assert_eq!(kinds_for("i++;", Dialect::C, "++"), vec![K::IncdecAfter]);
        assert_eq!(kinds_for("++i;", Dialect::C, "++"), vec![K::IncdecBefore]);
        assert_eq!(kinds_for("a[i]++;", Dialect::C, "++"), vec![K::IncdecAfter]);
    }

    #[test]
    fn bitwise_not_stays_unary() {
        assert_eq!(kinds_for("x = ~mask;", Dialect::C, "~"), vec![K::Inv]);
    }

    #[test]
    fn d_tilde_concat() {
        assert_eq!(
            kinds_for(r#"s = "a" ~ name;"#, Dialect::D, "~"),
            vec![K::Concat]
        );
    }

    #[test]
    fn designated_initializer_dot() {
        assert_eq!(
            kinds_for("struct pt p = { .x = 1, .y = 2 };", Dialect::C, "."),
            vec![K::C99Member, K::C99Member]
        );
        assert_eq!(kinds_for("n = p.x;", Dialect::C, "."), vec![K::Member]);
    }
}
