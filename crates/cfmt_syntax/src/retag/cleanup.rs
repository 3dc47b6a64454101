//! Word-level fixups that belong between keyword resolution and the heavier
//! structural passes, plus comment placement classification.

use crate::chunks::{ChunkId, ChunkSeq};
use cfmt_core::dialect::Dialect;
use cfmt_core::kinds::ChunkKind as K;

pub(super) fn run(seq: &mut ChunkSeq, dialect: Dialect) {
    for id in seq.ids() {
        match seq.kind(id) {
            // D `version(...)` behaves like `if` unless it is being assigned.
            K::Version => {
                if seq.next_code(id).map(|n| seq.kind(n)) != Some(K::Assign) {
                    seq.set_kind(id, K::If);
                }
            }
            // C# `get`/`set` are only accessors when a block follows.
            K::Getset => {
                if seq.next_code(id).map(|n| seq.kind(n)) != Some(K::BraceOpen) {
                    seq.set_kind(id, K::Word);
                }
            }
            // `default:` is a case label.
            K::Default => {
                if seq.next_code(id).map(|n| seq.kind(n)) == Some(K::Colon) {
                    seq.set_kind(id, K::Case);
                }
            }
            K::While => {
                if closes_do_loop(seq, id) {
                    seq.set_kind(id, K::WhileOfDo);
                }
            }
            // Pawn writes `else if` chains that brace synthesis must see as
            // one keyword.
            K::If if dialect == Dialect::Pawn => {
                if seq.prev_code(id).map(|p| seq.kind(p)) == Some(K::Else) {
                    seq.set_kind(id, K::Elseif);
                }
            }
            // The name after @interface/@implementation.
            K::OcIntf | K::OcImpl => {
                if let Some(name) = seq.next_code(id) {
                    if seq.kind(name) == K::Word {
                        seq.set_kind(name, K::OcClass);
                    }
                }
            }
            kind if kind.is_comment() => classify_comment(seq, id),
            _ => {}
        }
    }
}

/// A `while` closes a do-loop when the statement before it is the body of a
/// `do`: either a brace block whose open is preceded by `do`, or a single
/// semicolon-terminated statement preceded by `do`.
fn closes_do_loop(seq: &ChunkSeq, while_id: ChunkId) -> bool {
    let Some(prev) = seq.prev_code(while_id) else {
        return false;
    };
    match seq.kind(prev) {
        K::BraceClose => {
            let Some(open) = matching_brace_open(seq, prev) else {
                return false;
            };
            seq.prev_code(open).map(|p| seq.kind(p)) == Some(K::Do)
        }
        K::Semicolon => {
            // Walk back through the single statement; one semicolon only.
            let mut cur = seq.prev_code(prev);
            while let Some(c) = cur {
                match seq.kind(c) {
                    K::Do => return true,
                    K::Semicolon | K::VSemicolon | K::BraceOpen | K::BraceClose => return false,
                    _ => cur = seq.prev_code(c),
                }
            }
            false
        }
        _ => false,
    }
}

fn matching_brace_open(seq: &ChunkSeq, close: ChunkId) -> Option<ChunkId> {
    let depth = seq.get(close).brace_depth;
    let mut cur = seq.prev(close);
    while let Some(id) = cur {
        let chunk = seq.get(id);
        if chunk.kind == K::BraceOpen && chunk.brace_depth == depth {
            return Some(id);
        }
        cur = seq.prev(id);
    }
    None
}

/// Record how a comment sits relative to surrounding code: alone on its
/// line(s), trailing code, leading code, or embedded mid-line.
fn classify_comment(seq: &mut ChunkSeq, id: ChunkId) {
    let newline_before = match neighbor_skipping_blanks(seq, id, Direction::Back) {
        None => true,
        Some(n) => matches!(seq.kind(n), K::Newline | K::NlCont),
    };
    let newline_after = match neighbor_skipping_blanks(seq, id, Direction::Fwd) {
        None => true,
        Some(n) => matches!(seq.kind(n), K::Newline | K::NlCont),
    };
    let placement = match (newline_before, newline_after) {
        (true, true) => K::CommentWhole,
        (true, false) => K::CommentStart,
        (false, true) => K::CommentEnd,
        (false, false) => K::CommentEmbed,
    };
    seq.set_parent_kind(id, placement);
}

enum Direction {
    Back,
    Fwd,
}

/// Adjacent chunk skipping only horizontal whitespace, so newlines count.
fn neighbor_skipping_blanks(seq: &ChunkSeq, id: ChunkId, dir: Direction) -> Option<ChunkId> {
    let step = |c| match dir {
        Direction::Back => seq.prev(c),
        Direction::Fwd => seq.next(c),
    };
    let mut cur = step(id);
    while let Some(c) = cur {
        if seq.kind(c) != K::Whitespace {
            return Some(c);
        }
        cur = step(c);
    }
    None
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

    fn pipeline(source: &str, dialect: Dialect) -> (crate::chunks::ChunkSeq, &str) {
        let mut lexed = lex(source, dialect);
        resolve_keywords(&mut lexed.seq, source, dialect);
        retag_all(&mut lexed.seq, source, dialect);
        (lexed.seq, source)
    }

    fn kind_of(seq: &crate::chunks::ChunkSeq, source: &str, text: &str) -> K {
        for id in seq.ids() {
            if seq.get(id).text(source) == text {
                return seq.kind(id);
            }
        }
        panic!("no chunk spelled {text:?}");
    }

    #[test]
    fn while_of_do_with_braces() {
        let (seq, src) = pipeline("do { x--; } while (x);", Dialect::C);
        assert_eq!(kind_of(&seq, src, "while"), K::WhileOfDo);
    }

    #[test]
    fn while_of_do_single_statement() {
        let (seq, src) = pipeline("do x--; while (x);", Dialect::C);
        assert_eq!(kind_of(&seq, src, "while"), K::WhileOfDo);
    }

    #[test]
    fn plain_while_stays() {
        let (seq, src) = pipeline("while (x) { }", Dialect::C);
        assert_eq!(kind_of(&seq, src, "while"), K::While);
    }

    #[test]
    fn d_version_becomes_if() {
        let (seq, src) = pipeline("version (linux) { }", Dialect::D);
        assert_eq!(kind_of(&seq, src, "version"), K::If);
        let (seq, src) = pipeline("version = 3;", Dialect::D);
        assert_eq!(kind_of(&seq, src, "version"), K::Version);
    }

    #[test]
    fn csharp_getset_reverts_without_block() {
        let (seq, src) = pipeline("int get;", Dialect::Cs);
        assert_eq!(kind_of(&seq, src, "get"), K::Word);
        let (seq, src) = pipeline("get { return x; }", Dialect::Cs);
        assert_eq!(kind_of(&seq, src, "get"), K::Getset);
    }

    #[test]
    fn default_colon_is_a_case() {
        let (seq, src) = pipeline("switch (x) { default: break; }", Dialect::C);
        assert_eq!(kind_of(&seq, src, "default"), K::Case);
    }

    #[test]
    fn comment_placement() {
        let src = "a; /* embed */ b;\n/* whole */\nc; // end\n";
        let (seq, src) = pipeline(src, Dialect::C);
        let mut placements = Vec::new();
        for id in seq.ids() {
            if seq.kind(id).is_comment() {
                placements.push(seq.get(id).parent_kind);
            }
        }
        assert_eq!(placements, vec![K::CommentEmbed, K::CommentWhole, K::CommentEnd]);
    }

    #[test]
    fn objc_class_name_after_interface() {
        let (seq, src) = pipeline("@interface Widget\n@end\n", Dialect::Oc);
        assert_eq!(kind_of(&seq, src, "Widget"), K::OcClass);
    }

    #[test]
    fn pawn_else_if_collapses() {
        let (seq, src) = pipeline("if (a) {} else if (b) {}", Dialect::Pawn);
        assert_eq!(kind_of(&seq, src, "if"), K::If);
        // The second `if` follows the `else`.
        let mut ifs: Vec<K> = Vec::new();
        for id in seq.ids() {
            if seq.get(id).text(src) == "if" {
                ifs.push(seq.kind(id));
            }
        }
        assert_eq!(ifs, vec![K::If, K::Elseif]);
    }
}
