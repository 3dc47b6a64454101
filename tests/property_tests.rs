//! Property-based tests for the tokenizing front end.
//!
//! These use proptest to verify the pipeline laws across many generated
//! inputs, catching edge cases hand-written tests miss.

use cfmt::frontend::{lexer, resolve, retag, tokenize};
use cfmt::Dialect;
use cfmt_core::kinds::ChunkKind as K;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Lexically complete fragments: every literal closed, no lone backslash.
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,8}".prop_map(|s| s),
        Just("if".to_string()),
        Just("while".to_string()),
        Just("static".to_string()),
        Just("int".to_string()),
        Just("return".to_string()),
        "[0-9]{1,6}".prop_map(|s| s),
        Just("3.25".to_string()),
        Just("0x1f".to_string()),
        Just("\"str\"".to_string()),
        Just("'c'".to_string()),
        Just("/* note */".to_string()),
        Just("// tail".to_string()),
        prop_oneof![
            Just("("), Just(")"), Just("["), Just("]"), Just("{"), Just("}"),
            Just(";"), Just(","), Just("?"), Just(":"), Just("="), Just("=="),
            Just("+"), Just("-"), Just("*"), Just("&"), Just("!"), Just("~"),
            Just("<"), Just(">"), Just("<<="), Just("->"), Just("::"), Just("..."),
            Just("++"), Just("##"),
        ]
        .prop_map(|s: &str| s.to_string()),
    ]
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("  ".to_string()),
        Just("\t".to_string()),
        Just("\n".to_string()),
        Just("\n\n".to_string()),
    ]
}

/// A source unit: fragments joined by whitespace so nothing merges.
fn source_strategy() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec((fragment_strategy(), separator_strategy()), 0..40),
        separator_strategy(),
    )
        .prop_map(|(pairs, tail)| {
            let mut out = String::new();
            for (frag, sep) in pairs {
                out.push_str(&frag);
                out.push_str(&sep);
            }
            out.push_str(&tail);
            out
        })
}

fn dialect_strategy() -> impl Strategy<Value = Dialect> {
    proptest::sample::select(Dialect::ALL.to_vec())
}

// =============================================================================
// Pipeline laws
// =============================================================================

proptest! {
    /// Non-virtual spans concatenate back to the exact input.
    #[test]
    fn span_coverage_round_trip(src in source_strategy(), dialect in dialect_strategy()) {
        let out = tokenize(&src, dialect);
        prop_assert_eq!(out.seq.reconstruct(&src), src);
    }

    /// Every chunk leaves the pipeline with a real kind.
    #[test]
    fn kind_totality(src in source_strategy(), dialect in dialect_strategy()) {
        let out = tokenize(&src, dialect);
        for id in out.seq.ids() {
            prop_assert!(out.seq.kind(id) != K::None);
        }
    }

    /// Re-running the re-tagger on its own output is a fixed point.
    #[test]
    fn retag_fixed_point(src in source_strategy(), dialect in dialect_strategy()) {
        let mut lexed = lexer::lex(&src, dialect);
        resolve::resolve_keywords(&mut lexed.seq, &src, dialect);
        retag::retag_all(&mut lexed.seq, &src, dialect);
        let first: Vec<K> = lexed.seq.ids().into_iter().map(|id| lexed.seq.kind(id)).collect();

        retag::retag_all(&mut lexed.seq, &src, dialect);
        let second: Vec<K> = lexed.seq.ids().into_iter().map(|id| lexed.seq.kind(id)).collect();

        prop_assert_eq!(first, second);
    }

    /// The lexer alone never emits a derived kind.
    #[test]
    fn lexer_emits_no_derived_kinds(src in source_strategy(), dialect in dialect_strategy()) {
        use cfmt_core::Stability;
        let lexed = lexer::lex(&src, dialect);
        for id in lexed.seq.ids() {
            let kind = lexed.seq.kind(id);
            prop_assert!(
                kind.stability() != Stability::Derived,
                "lexer produced {:?}", kind
            );
        }
    }

    /// Unterminated literals recover instead of panicking, on any prefix.
    #[test]
    fn truncated_input_never_panics(src in source_strategy(), cut in 0usize..200) {
        let cut = cut.min(src.len());
        if src.is_char_boundary(cut) {
            let truncated = &src[..cut];
            let out = tokenize(truncated, Dialect::C);
            prop_assert_eq!(out.seq.reconstruct(truncated), truncated);
        }
    }
}

// =============================================================================
// Focused generators
// =============================================================================

/// Identifiers that stay plain words in C.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}".prop_filter("not a keyword", |s| {
        cfmt_core::keywords::keyword_kind(s, Dialect::C).is_none()
    })
}

proptest! {
    /// Generated declarations classify their star as a pointer declarator.
    #[test]
    fn generated_pointer_declarations(
        ty in ident_strategy(),
        var in ident_strategy(),
    ) {
        let src = format!("{} *{};", ty, var);
        let out = tokenize(&src, Dialect::C);
        let star = out
            .seq
            .ids()
            .into_iter()
            .find(|id| out.seq.get(*id).text(&src) == "*")
            .expect("star chunk");
        prop_assert_eq!(out.seq.kind(star), K::PtrType);
    }

    /// Generated call statements classify the callee as a call.
    #[test]
    fn generated_call_statements(name in ident_strategy()) {
        let src = format!("{}(1);", name);
        let out = tokenize(&src, Dialect::C);
        let callee = out.seq.first().expect("chunks");
        prop_assert_eq!(out.seq.kind(callee), K::FuncCall);
    }
}
