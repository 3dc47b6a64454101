//! Comment scanning.
//!
//! Line comments run to (not including) the newline, so a line comment chunk
//! is always followed by a newline chunk except at end of input. Block
//! comments are sub-typed by whether a newline occurred inside. D adds a
//! nesting `/+ +/` form.

use super::Lexer;
use cfmt_core::kinds::ChunkKind;

impl<'a> Lexer<'a> {
    /// `// ...` to end of line.
    pub(super) fn scan_line_comment(&mut self, start: usize) {
        self.advance(); // /
        self.advance(); // /
        while let Some(c) = self.peek() {
            if c == '\n' || c == '\r' {
                break;
            }
            self.advance();
        }
        self.add_chunk(ChunkKind::CommentCpp, start);
    }

    /// `/* ... */`, single- or multi-line by content.
    pub(super) fn scan_block_comment(&mut self, start: usize) {
        self.advance(); // /
        self.advance(); // *
        let mut saw_newline = false;

        loop {
            match self.peek() {
                None => {
                    let kind = block_kind(saw_newline);
                    let id = self.add_chunk(kind, start);
                    self.seq.get_mut(id).unterminated = true;
                    self.diagnostic("unterminated comment", start);
                    return;
                }
                Some('*') if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    break;
                }
                Some('\n' | '\r') => {
                    saw_newline = true;
                    self.advance();
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        self.add_chunk(block_kind(saw_newline), start);
    }

    /// D `/+ ... +/`, nesting.
    pub(super) fn scan_nesting_comment(&mut self, start: usize) {
        self.advance(); // /
        self.advance(); // +
        let mut depth = 1usize;
        let mut saw_newline = false;

        while depth > 0 {
            match self.peek() {
                None => {
                    let kind = block_kind(saw_newline);
                    let id = self.add_chunk(kind, start);
                    self.seq.get_mut(id).unterminated = true;
                    self.diagnostic("unterminated comment", start);
                    return;
                }
                Some('/') if self.peek_next() == Some('+') => {
                    self.advance();
                    self.advance();
                    depth += 1;
                }
                Some('+') if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    depth -= 1;
                }
                Some('\n' | '\r') => {
                    saw_newline = true;
                    self.advance();
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        self.add_chunk(block_kind(saw_newline), start);
    }
}

fn block_kind(saw_newline: bool) -> ChunkKind {
    if saw_newline { ChunkKind::CommentMulti } else { ChunkKind::Comment }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::lex;
    use cfmt_core::dialect::Dialect;
    use cfmt_core::kinds::ChunkKind as K;

    fn kinds(source: &str, dialect: Dialect) -> Vec<K> {
        let lexed = lex(source, dialect);
        lexed.seq.ids().iter().map(|id| lexed.seq.kind(*id)).collect()
    }

    #[test]
    fn line_comment_then_newline_chunk() {
        assert_eq!(
            kinds("a // note\nb", Dialect::C),
            vec![K::Word, K::Whitespace, K::CommentCpp, K::Newline, K::Word]
        );
    }

    #[test]
    fn block_comment_single_vs_multi() {
        assert_eq!(kinds("/* x */", Dialect::C), vec![K::Comment]);
        assert_eq!(kinds("/* x\ny */", Dialect::C), vec![K::CommentMulti]);
    }

    #[test]
    fn block_comment_does_not_nest_in_c() {
        // The first */ closes; the rest lexes as ordinary tokens.
        let ks = kinds("/* a /* b */", Dialect::C);
        assert_eq!(ks[0], K::Comment);
    }

    #[test]
    fn nesting_comment_in_d() {
        assert_eq!(kinds("/+ a /+ b +/ c +/", Dialect::D), vec![K::Comment]);
    }

    #[test]
    fn unterminated_block_comment_recovers() {
        let source = "a /* never closed";
        let lexed = lex(source, Dialect::C);
        let last = lexed.seq.last().unwrap();
        assert!(lexed.seq.get(last).unterminated);
        assert_eq!(lexed.seq.kind(last), K::Comment);
        assert_eq!(lexed.diagnostics.len(), 1);
        assert_eq!(lexed.seq.reconstruct(source), source);
    }

    #[test]
    fn comment_at_eof_without_newline() {
        assert_eq!(kinds("a // tail", Dialect::C), vec![K::Word, K::Whitespace, K::CommentCpp]);
    }
}
