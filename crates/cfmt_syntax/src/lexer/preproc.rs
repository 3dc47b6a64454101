//! Preprocessor directive lines.
//!
//! A `#` after nothing but whitespace opens a directive: the `#` becomes its
//! own chunk, the directive name is classified against the directive table,
//! and the body is handled one of two ways. `#define` bodies re-enter normal
//! lexing (macro replacement text is real code and gets re-tagged later);
//! every other body is captured as one opaque chunk honoring line
//! continuations. Body chunks link back to their directive chunk.

use super::Lexer;
use cfmt_core::keywords::directive_kind;
use cfmt_core::kinds::ChunkKind;

impl<'a> Lexer<'a> {
    /// Scan a whole directive line, starting at the `#`.
    pub(super) fn scan_directive(&mut self, start: usize) {
        self.advance(); // #
        let pound = self.add_chunk(ChunkKind::Preproc, start);
        self.seq.get_mut(pound).in_preproc = true;

        self.lex_directive_whitespace();

        // Directive name; a bare `#` line keeps everything on the pound.
        let name_start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_alphabetic() || c == '_') {
            self.advance();
        }
        if self.pos == name_start {
            self.preproc = Some(pound);
            self.capture_body();
            return;
        }

        let name = &self.source[name_start..self.pos];
        let kind = directive_kind(name, self.dialect);
        let directive = self.add_chunk(kind, name_start);
        self.seq.get_mut(directive).in_preproc = true;
        self.seq.set_parent(directive, pound);

        // From here every chunk on the logical line is flagged and parented.
        self.preproc = Some(directive);

        match kind {
            // Replacement text is lexed as ordinary code.
            ChunkKind::PpDefine => {}
            ChunkKind::PpInclude => {
                self.lex_directive_whitespace();
                self.scan_include_filename();
                self.capture_body();
            }
            _ => self.capture_body(),
        }
    }

    /// Whitespace inside a directive line, as its own flagged chunk.
    fn lex_directive_whitespace(&mut self) {
        let start = self.pos;
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.advance();
        }
        if self.pos > start {
            let id = self.add_chunk(ChunkKind::Whitespace, start);
            self.seq.get_mut(id).in_preproc = true;
        }
    }

    /// `<file.h>` after `#include`; quoted forms go through the string scan.
    fn scan_include_filename(&mut self) {
        match self.peek() {
            Some('<') => {
                let start = self.pos;
                self.advance();
                loop {
                    match self.peek() {
                        Some('>') => {
                            self.advance();
                            self.add_chunk(ChunkKind::String, start);
                            return;
                        }
                        None | Some('\n' | '\r') => {
                            let id = self.add_chunk(ChunkKind::String, start);
                            self.seq.get_mut(id).unterminated = true;
                            self.diagnostic("unterminated include filename", start);
                            return;
                        }
                        Some(_) => {
                            self.advance();
                        }
                    }
                }
            }
            Some('"') => {
                let start = self.pos;
                self.advance();
                self.scan_string(start, '"', super::strings::Flavor::Escaped, false);
            }
            // Computed includes and macros fall into the opaque body.
            _ => {}
        }
    }

    /// Everything else on the logical line, as one opaque chunk.
    fn capture_body(&mut self) {
        self.lex_directive_whitespace();
        let start = self.pos;
        let mut last = '\0';
        loop {
            match self.peek() {
                None => break,
                Some('\n' | '\r') => {
                    if last == '\\' {
                        // Continuation: the newline belongs to the body.
                        self.match_char('\r');
                        self.match_char('\n');
                        last = '\0';
                    } else {
                        break;
                    }
                }
                Some(c) => {
                    self.advance();
                    last = c;
                }
            }
        }
        if self.pos > start {
            self.add_chunk(ChunkKind::PreprocBody, start);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::lex;
    use cfmt_core::dialect::Dialect;
    use cfmt_core::kinds::ChunkKind as K;

    fn code_kinds(source: &str, dialect: Dialect) -> Vec<K> {
        let lexed = lex(source, dialect);
        lexed
            .seq
            .ids()
            .iter()
            .map(|id| lexed.seq.kind(*id))
            .filter(|k| !matches!(k, K::Whitespace | K::Newline))
            .collect()
    }

    #[test]
    fn include_angle_filename_is_a_string() {
        assert_eq!(
            code_kinds("#include <stdio.h>\n", Dialect::C),
            vec![K::Preproc, K::PpInclude, K::String]
        );
    }

    #[test]
    fn include_quoted_filename() {
        assert_eq!(
            code_kinds("#include \"local.h\"\n", Dialect::C),
            vec![K::Preproc, K::PpInclude, K::String]
        );
    }

    #[test]
    fn define_body_lexes_as_code() {
        let source = "#define SQR(x) ((x)*(x))\nint y;\n";
        let lexed = lex(source, Dialect::C);
        let seq = &lexed.seq;

        let directive = seq
            .ids()
            .into_iter()
            .find(|id| seq.kind(*id) == K::PpDefine)
            .expect("define directive");

        // Body chunks are real tokens, flagged and parented to the directive.
        let mut saw_star = false;
        for id in seq.ids() {
            let chunk = seq.get(id);
            if chunk.kind == K::Star {
                saw_star = true;
                assert!(chunk.in_preproc);
                assert_eq!(chunk.parent, Some(directive));
            }
            // The code after the directive line is not flagged.
            if chunk.kind == K::Semicolon {
                assert!(!chunk.in_preproc);
            }
        }
        assert!(saw_star);
    }

    #[test]
    fn non_define_bodies_are_opaque() {
        assert_eq!(
            code_kinds("#ifdef FOO && BAR\n", Dialect::C),
            vec![K::Preproc, K::PpIf, K::PreprocBody]
        );
        assert_eq!(code_kinds("#endif\n", Dialect::C), vec![K::Preproc, K::PpEndif]);
    }

    #[test]
    fn continued_body_is_one_chunk() {
        let source = "#pragma omp parallel \\\n    for\nx;\n";
        let lexed = lex(source, Dialect::C);
        let seq = &lexed.seq;
        let body = seq
            .ids()
            .into_iter()
            .find(|id| seq.kind(*id) == K::PreprocBody)
            .expect("body");
        assert_eq!(seq.get(body).text(source), "omp parallel \\\n    for");
        assert_eq!(lexed.seq.reconstruct(source), source);
    }

    #[test]
    fn pound_mid_line_is_not_a_directive() {
        assert_eq!(
            code_kinds("a # b ## c", Dialect::C),
            vec![K::Word, K::Pound, K::Word, K::PP, K::Word]
        );
    }

    #[test]
    fn directives_need_a_preprocessor_dialect() {
        // D has no preprocessor; `#` lexes as a plain pound and the rest of
        // the line as ordinary tokens.
        assert_eq!(
            code_kinds("#define X 1\n", Dialect::D),
            vec![K::Pound, K::Word, K::Word, K::Number]
        );
    }

    #[test]
    fn regions_and_pawn_directives() {
        assert_eq!(
            code_kinds("#region Setup\n", Dialect::Cs),
            vec![K::Preproc, K::PpRegion, K::PreprocBody]
        );
        assert_eq!(
            code_kinds("#emit load.s.pri 0\n", Dialect::Pawn),
            vec![K::Preproc, K::PpEmit, K::PreprocBody]
        );
        assert_eq!(code_kinds("#endinput\n", Dialect::Pawn), vec![K::Preproc, K::PpEndinput]);
    }

    #[test]
    fn indented_directive_still_counts() {
        assert_eq!(
            code_kinds("    #include <a.h>\n", Dialect::C),
            vec![K::Preproc, K::PpInclude, K::String]
        );
    }
}
