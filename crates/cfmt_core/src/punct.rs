//! Multi-character punctuation tables.
//!
//! The lexer matches punctuation by maximal munch: the longest spelling that
//! matches the head of the remaining input wins, checked from the 4-character
//! table down to single characters. The single-character table maps the
//! ambiguous raw characters (`*`, `+`, `-`, `&`, `!`, `~`, `<`, `>`, `:`) to
//! their raw provisional kinds; the lexer never guesses their semantic role.

use crate::dialect::{Dialect, Langs};
use crate::kinds::ChunkKind;

/// One punctuation spelling, dialect-gated like keyword entries.
#[derive(Debug, Clone, Copy)]
pub struct PunctEntry {
    pub spelling: &'static str,
    pub langs: Langs,
    pub kind: ChunkKind,
}

const fn p(spelling: &'static str, langs: Langs, kind: ChunkKind) -> PunctEntry {
    PunctEntry { spelling, langs, kind }
}

const C: Langs = Langs::C;
const CPP: Langs = Langs::CPP;
const D: Langs = Langs::D;
const CS: Langs = Langs::CS;
const JAVA: Langs = Langs::JAVA;
const PAWN: Langs = Langs::PAWN;
const ALL: Langs = Langs::ALL;

use crate::kinds::ChunkKind as K;

/// Four-character operators.
pub const PUNCT4: &[PunctEntry] = &[
    p(">>>=", Langs(JAVA.0 | CS.0), K::Assign),
    p("!<>=", D, K::Compare),
];

/// Three-character operators.
pub const PUNCT3: &[PunctEntry] = &[
    p("<<=", ALL, K::Assign),
    p(">>=", ALL, K::Assign),
    p(">>>", Langs(JAVA.0 | CS.0), K::Arith),
    p("...", ALL, K::Ellipsis),
    p("->*", CPP, K::Member),
    p("!<>", D, K::Compare),
    p("!<=", D, K::Compare),
    p("!>=", D, K::Compare),
    p("<>=", D, K::Compare),
];

/// Two-character operators.
pub const PUNCT2: &[PunctEntry] = &[
    p("<<", ALL, K::Arith),
    p(">>", ALL, K::Arith),
    p("<=", ALL, K::Compare),
    p(">=", ALL, K::Compare),
    p("==", ALL, K::Compare),
    p("!=", ALL, K::Compare),
    p("<>", D, K::Compare),
    p("!<", D, K::Compare),
    p("!>", D, K::Compare),
    p("&&", ALL, K::Bool),
    p("||", ALL, K::Bool),
    p("+=", ALL, K::Assign),
    p("-=", ALL, K::Assign),
    p("*=", ALL, K::Assign),
    p("/=", ALL, K::Assign),
    p("%=", ALL, K::Assign),
    p("&=", ALL, K::Assign),
    p("|=", ALL, K::Assign),
    p("^=", ALL, K::Assign),
    p("~=", D, K::Assign),
    p("->", ALL, K::Member),
    p("::", Langs(CPP.0 | D.0 | CS.0), K::DcMember),
    p("++", ALL, K::IncdecAfter),
    p("--", ALL, K::IncdecAfter),
    p("##", ALL, K::PP),
    p("[]", ALL, K::TSquare),
    p("..", D, K::Range),
];

/// Single characters, including the raw provisional set.
pub const PUNCT1: &[PunctEntry] = &[
    p("(", ALL, K::ParenOpen),
    p(")", ALL, K::ParenClose),
    p("[", ALL, K::SquareOpen),
    p("]", ALL, K::SquareClose),
    p("{", ALL, K::BraceOpen),
    p("}", ALL, K::BraceClose),
    p(";", ALL, K::Semicolon),
    p(",", ALL, K::Comma),
    p("?", ALL, K::Question),
    p("=", ALL, K::Assign),
    p("/", ALL, K::Arith),
    p("%", ALL, K::Arith),
    p("^", ALL, K::Arith),
    p("|", ALL, K::Arith),
    // Pawn keeps its own dot kind; everyone else reads `.` as member access.
    p(".", PAWN, K::Dot),
    p(".", Langs(ALL.0 & !PAWN.0), K::Member),
    p("#", ALL, K::Pound),
    // Raw provisional characters, re-tagged by context.
    p("*", ALL, K::Star),
    p("+", ALL, K::Plus),
    p("-", ALL, K::Minus),
    p("&", ALL, K::Amp),
    p("!", ALL, K::Not),
    p("~", ALL, K::Inv),
    p("<", ALL, K::AngleOpen),
    p(">", ALL, K::AngleClose),
    p(":", ALL, K::Colon),
];

/// Maximal-munch lookup against the head of `rest`.
///
/// Returns the matched byte length and kind, preferring longer spellings.
pub fn lookup(rest: &str, dialect: Dialect) -> Option<(usize, ChunkKind)> {
    for table in [PUNCT4, PUNCT3, PUNCT2, PUNCT1] {
        for entry in table {
            if entry.langs.contains(dialect) && rest.starts_with(entry.spelling) {
                return Some((entry.spelling.len(), entry.kind));
            }
        }
    }
    None
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximal_munch_prefers_longest() {
        assert_eq!(lookup("<<= x", Dialect::C), Some((3, K::Assign)));
        assert_eq!(lookup("<< x", Dialect::C), Some((2, K::Arith)));
        assert_eq!(lookup("< x", Dialect::C), Some((1, K::AngleOpen)));
        assert_eq!(lookup(">>>= y", Dialect::Java), Some((4, K::Assign)));
        // C has no >>>=; the shift munches first.
        assert_eq!(lookup(">>>= y", Dialect::C), Some((2, K::Arith)));
    }

    #[test]
    fn raw_characters_get_raw_kinds() {
        assert_eq!(lookup("*p", Dialect::C), Some((1, K::Star)));
        assert_eq!(lookup("&x", Dialect::C), Some((1, K::Amp)));
        assert_eq!(lookup(":label", Dialect::C), Some((1, K::Colon)));
        assert_eq!(lookup("~x", Dialect::C), Some((1, K::Inv)));
    }

    #[test]
    fn dialect_gated_spellings() {
        assert_eq!(lookup("..", Dialect::D), Some((2, K::Range)));
        // In C a `..` is two member dots.
        assert_eq!(lookup("..", Dialect::C), Some((1, K::Member)));
        assert_eq!(lookup("!<>=", Dialect::D), Some((4, K::Compare)));
        assert_eq!(lookup("!<>=", Dialect::C), Some((1, K::Not)));
        assert_eq!(lookup("::", Dialect::Cpp), Some((2, K::DcMember)));
        assert_eq!(lookup("::", Dialect::C), Some((1, K::Colon)));
    }

    #[test]
    fn table_lengths_are_consistent() {
        for (table, len) in [(PUNCT4, 4), (PUNCT3, 3), (PUNCT2, 2), (PUNCT1, 1)] {
            for entry in table {
                assert_eq!(entry.spelling.len(), len, "{}", entry.spelling);
            }
        }
    }

    #[test]
    fn ellipsis_beats_member_dot() {
        assert_eq!(lookup("...", Dialect::C), Some((3, K::Ellipsis)));
        assert_eq!(lookup(".x", Dialect::C), Some((1, K::Member)));
    }
}
