//! Embedded SQL statement marking.
//!
//! `EXEC SQL ... ;` blocks inside C/C++ units are not C expressions: the
//! introducer gets its own kind (`BEGIN`/`END` variants for declare
//! sections) and every word through the terminating semicolon is marked as
//! SQL so the formatting engine leaves the statement text alone.

use crate::chunks::ChunkSeq;
use cfmt_core::dialect::Dialect;
use cfmt_core::kinds::ChunkKind as K;

pub(super) fn run(seq: &mut ChunkSeq, source: &str, dialect: Dialect) {
    if !dialect.embedded_sql() {
        return;
    }
    for id in seq.ids() {
        if seq.kind(id) != K::Word || !seq.get(id).text(source).eq_ignore_ascii_case("exec") {
            continue;
        }
        let Some(sql) = seq.next_code(id) else {
            continue;
        };
        if seq.kind(sql) != K::Word || !seq.get(sql).text(source).eq_ignore_ascii_case("sql") {
            continue;
        }

        let verb = seq.next_code(sql).map(|v| seq.get(v).text(source).to_ascii_lowercase());
        let intro = match verb.as_deref() {
            Some("begin") => K::SqlBegin,
            Some("end") => K::SqlEnd,
            _ => K::SqlExec,
        };
        seq.set_kind(id, intro);

        // Everything up to the terminating semicolon is SQL text.
        let mut cur = Some(sql);
        while let Some(c) = cur {
            match seq.kind(c) {
                K::Semicolon => break,
                K::Word | K::Type | K::Qualifier => {
                    seq.set_kind(c, K::SqlWord);
                    seq.set_parent(c, id);
                }
                _ => {}
            }
            cur = seq.next_code(c);
        }
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

    fn tagged(source: &str, dialect: Dialect) -> crate::chunks::ChunkSeq {
        let mut lexed = lex(source, dialect);
        resolve_keywords(&mut lexed.seq, source, dialect);
        retag_all(&mut lexed.seq, source, dialect);
        lexed.seq
    }

    #[test]
    fn exec_sql_statement() {
        let src = "EXEC SQL SELECT name INTO :n FROM users;";
        let seq = tagged(src, Dialect::C);
        let kinds: Vec<K> = seq
            .ids()
            .into_iter()
            .map(|id| seq.kind(id))
            .filter(|k| !k.is_layout())
            .collect();
        assert_eq!(kinds[0], K::SqlExec);
        assert!(kinds.contains(&K::SqlWord));
        assert_eq!(*kinds.last().unwrap(), K::Semicolon);
        // Words after the terminator are untouched.
        let src2 = "EXEC SQL COMMIT; x = 1;";
        let seq2 = tagged(src2, Dialect::C);
        for id in seq2.ids() {
            if seq2.get(id).text(src2) == "x" {
                assert_eq!(seq2.kind(id), K::Word);
            }
        }
    }

    #[test]
    fn begin_and_end_sections() {
        let src = "EXEC SQL BEGIN DECLARE SECTION;";
        let seq = tagged(src, Dialect::C);
        let first = seq.first().unwrap();
        assert_eq!(seq.kind(first), K::SqlBegin);

        let src = "EXEC SQL END DECLARE SECTION;";
        let seq = tagged(src, Dialect::C);
        let first = seq.first().unwrap();
        assert_eq!(seq.kind(first), K::SqlEnd);
    }

    #[test]
    fn only_c_family_units_have_embedded_sql() {
        let src = "EXEC SQL COMMIT;";
        let seq = tagged(src, Dialect::Java);
        let first = seq.first().unwrap();
        assert_eq!(seq.kind(first), K::Word);
    }

    #[test]
    fn plain_exec_word_is_left_alone() {
        let src = "exec(cmd);";
        let seq = tagged(src, Dialect::C);
        let first = seq.first().unwrap();
        assert_eq!(seq.kind(first), K::FuncCall);
    }
}
