//! Raw lexer: character stream to preliminary chunk sequence.
//!
//! One left-to-right pass with unbounded look-ahead only inside literals
//! (string/comment termination). The lexer works purely from lexical shape:
//! it emits terminal kinds for literals and layout, generic words for
//! identifier runs, and raw provisional kinds for the ambiguous punctuation
//! characters. It never guesses a semantic role; that is the re-tagger's job.
//!
//! ## Module Structure
//!
//! - `numbers` - integer/floating-point literal scanning
//! - `strings` - quoted literal scanning, all dialect flavors
//! - `comments` - line, block, and nesting comment scanning
//! - `preproc` - `#` directive lines and their bodies

mod comments;
mod numbers;
mod preproc;
mod strings;

use crate::chunks::{Chunk, ChunkId, ChunkSeq, Span};
use crate::diagnostics::Diagnostic;
use cfmt_core::dialect::{Dialect, Langs};
use cfmt_core::kinds::ChunkKind;
use cfmt_core::punct;

/// Lexer output: the preliminary sequence plus recovery notes.
///
/// Lexical trouble never aborts the run; a unit that hits a recovery case
/// still produces a complete best-effort sequence.
#[derive(Debug)]
pub struct Lexed {
    pub seq: ChunkSeq,
    pub diagnostics: Vec<Diagnostic>,
}

/// Raw lexer for one source unit.
pub struct Lexer<'a> {
    source: &'a str,
    dialect: Dialect,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
    seq: ChunkSeq,
    diagnostics: Vec<Diagnostic>,
    paren_depth: usize,
    brace_depth: usize,
    square_depth: usize,
    /// Expected close kind and the open chunk, for pairing validation.
    bracket_stack: Vec<(ChunkKind, ChunkId)>,
    /// Only whitespace seen since the last newline (so `#` opens a directive).
    at_line_start: bool,
    /// Inside a `#define` logical line; chunks get flagged and parented.
    preproc: Option<ChunkId>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, dialect: Dialect) -> Self {
        Self {
            source,
            dialect,
            chars: source.char_indices().peekable(),
            pos: 0,
            seq: ChunkSeq::new(),
            diagnostics: Vec::new(),
            paren_depth: 0,
            brace_depth: 0,
            square_depth: 0,
            bracket_stack: Vec::new(),
            at_line_start: true,
            preproc: None,
        }
    }

    /// Scan the whole unit into a chunk sequence.
    pub fn tokenize(mut self) -> Lexed {
        while !self.is_at_end() {
            self.scan_token();
        }

        // Anything still open at end of input is an unbalanced unit.
        while let Some((expected, open)) = self.bracket_stack.pop() {
            let span = self.seq.get(open).span;
            self.diagnostics.push(Diagnostic::error(
                format!("unclosed bracket, expected '{}'", close_char(expected)),
                span,
            ));
            self.seq.mark_unbalanced();
        }

        Lexed { seq: self.seq, diagnostics: self.diagnostics }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Chunk construction
    // ========================================================================

    /// Push a chunk covering `start..pos`, with depth and preproc bookkeeping.
    fn add_chunk(&mut self, kind: ChunkKind, start: usize) -> ChunkId {
        match kind {
            ChunkKind::ParenOpen => {
                let id = self.push_raw(kind, start);
                self.paren_depth += 1;
                self.bracket_stack.push((ChunkKind::ParenClose, id));
                id
            }
            ChunkKind::BraceOpen => {
                let id = self.push_raw(kind, start);
                self.brace_depth += 1;
                self.bracket_stack.push((ChunkKind::BraceClose, id));
                id
            }
            ChunkKind::SquareOpen => {
                let id = self.push_raw(kind, start);
                self.square_depth += 1;
                self.bracket_stack.push((ChunkKind::SquareClose, id));
                id
            }
            ChunkKind::ParenClose | ChunkKind::BraceClose | ChunkKind::SquareClose => {
                self.close_bracket(kind, start)
            }
            _ => self.push_raw(kind, start),
        }
    }

    fn push_raw(&mut self, kind: ChunkKind, start: usize) -> ChunkId {
        let mut chunk = Chunk::new(kind, Span::new(start, self.pos));
        chunk.paren_depth = self.paren_depth;
        chunk.brace_depth = self.brace_depth;
        chunk.square_depth = self.square_depth;
        if let Some(directive) = self.preproc {
            chunk.in_preproc = true;
            chunk.parent = Some(directive);
        }
        let id = self.seq.push(chunk);
        match kind {
            ChunkKind::Newline => self.at_line_start = true,
            ChunkKind::Whitespace => {}
            _ => self.at_line_start = false,
        }
        id
    }

    fn close_bracket(&mut self, kind: ChunkKind, start: usize) -> ChunkId {
        match self.bracket_stack.last() {
            Some((expected, _)) if *expected == kind => {
                self.bracket_stack.pop();
                match kind {
                    ChunkKind::ParenClose => self.paren_depth -= 1,
                    ChunkKind::BraceClose => self.brace_depth -= 1,
                    _ => self.square_depth -= 1,
                }
            }
            _ => {
                self.diagnostics.push(Diagnostic::error(
                    format!("unmatched '{}'", close_char(kind)),
                    Span::new(start, self.pos),
                ));
                self.seq.mark_unbalanced();
            }
        }
        self.push_raw(kind, start)
    }

    fn diagnostic(&mut self, message: impl Into<String>, start: usize) {
        self.diagnostics.push(Diagnostic::warning(message, Span::new(start, self.pos)));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return;
        };

        match c {
            ' ' | '\t' | '\x0b' | '\x0c' => {
                while matches!(self.peek(), Some(' ' | '\t' | '\x0b' | '\x0c')) {
                    self.advance();
                }
                self.add_chunk(ChunkKind::Whitespace, start);
            }

            // A run of newlines collapses into one chunk; a directive line
            // ends at its first un-continued newline.
            '\n' | '\r' => {
                self.preproc = None;
                while matches!(self.peek(), Some('\n' | '\r')) {
                    self.advance();
                }
                self.add_chunk(ChunkKind::Newline, start);
            }

            '\\' => {
                if matches!(self.peek_next(), Some('\n' | '\r')) {
                    self.advance(); // backslash
                    self.match_char('\r');
                    self.match_char('\n');
                    self.add_chunk(ChunkKind::NlCont, start);
                } else {
                    self.advance();
                    self.add_chunk(ChunkKind::Unknown, start);
                    self.diagnostic("stray '\\' outside a continuation", start);
                }
            }

            '/' => match self.peek_next() {
                Some('/') => self.scan_line_comment(start),
                Some('*') => self.scan_block_comment(start),
                Some('+') if self.dialect.nesting_comments() => self.scan_nesting_comment(start),
                _ => self.scan_punct(start),
            },

            '#' if self.at_line_start && self.dialect.has_preprocessor() && self.preproc.is_none() => {
                self.scan_directive(start);
            }

            '"' => {
                self.advance();
                let multi = self.dialect.allows_multiline_string();
                self.scan_string(start, '"', strings::Flavor::Escaped, multi);
            }
            '\'' => {
                self.advance();
                self.scan_string(start, '\'', strings::Flavor::Escaped, false);
            }
            '`' if self.dialect.wysiwyg_strings() => {
                self.advance();
                self.scan_string(start, '`', strings::Flavor::Raw, true);
            }
            'r' if self.dialect.wysiwyg_strings() && self.peek_next() == Some('"') => {
                self.advance();
                self.advance();
                self.scan_string(start, '"', strings::Flavor::Raw, true);
            }
            '@' if self.dialect.verbatim_strings() && self.peek_next() == Some('"') => {
                self.advance();
                self.advance();
                self.scan_string(start, '"', strings::Flavor::Verbatim, true);
            }
            'L' | 'u' | 'U'
                if Langs::ALLC.contains(self.dialect)
                    && matches!(self.peek_next(), Some('"' | '\'')) =>
            {
                self.advance();
                // Safe per the guard: the next char is the quote.
                let quote = self.advance().unwrap_or('"');
                let multi = self.dialect.allows_multiline_string() && quote == '"';
                self.scan_string(start, quote, strings::Flavor::Escaped, multi);
            }

            '@' => {
                self.advance();
                if self.peek().is_some_and(is_ident_start) {
                    self.scan_word(start);
                } else {
                    self.add_chunk(ChunkKind::Unknown, start);
                    self.diagnostic("stray '@'", start);
                }
            }

            '0'..='9' => self.scan_number(start),
            '.' if self.peek_next().is_some_and(|c| c.is_ascii_digit()) => self.scan_number(start),

            _ if is_ident_start(c) => {
                self.advance();
                self.scan_word(start);
            }

            _ => self.scan_punct(start),
        }
    }

    // ========================================================================
    // Words and punctuation
    // ========================================================================

    /// Consume the rest of an identifier run; the first char (and a possible
    /// `@` prefix) is already consumed.
    fn scan_word(&mut self, start: usize) {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }
        self.add_chunk(ChunkKind::Word, start);
    }

    fn scan_punct(&mut self, start: usize) {
        match punct::lookup(&self.source[self.pos..], self.dialect) {
            Some((len, kind)) => {
                for _ in 0..len {
                    self.advance();
                }
                self.add_chunk(kind, start);
            }
            None => {
                self.advance();
                self.add_chunk(ChunkKind::Unknown, start);
                self.diagnostic(
                    format!("unexpected character '{}'", &self.source[start..self.pos]),
                    start,
                );
            }
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn close_char(kind: ChunkKind) -> char {
    match kind {
        ChunkKind::ParenClose => ')',
        ChunkKind::BraceClose => '}',
        _ => ']',
    }
}

/// Convenience function to lex one source unit.
#[tracing::instrument(skip_all, fields(dialect = %dialect, source_len = source.len()))]
pub fn lex(source: &str, dialect: Dialect) -> Lexed {
    Lexer::new(source, dialect).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cfmt_core::kinds::ChunkKind as K;

    fn kinds(source: &str, dialect: Dialect) -> Vec<K> {
        let lexed = lex(source, dialect);
        lexed.seq.ids().iter().map(|id| lexed.seq.kind(*id)).collect()
    }

    fn code_kinds(source: &str, dialect: Dialect) -> Vec<K> {
        kinds(source, dialect)
            .into_iter()
            .filter(|k| !k.is_layout())
            .collect()
    }

    #[test]
    fn words_and_punctuation() {
        assert_eq!(
            code_kinds("a = b;", Dialect::C),
            vec![K::Word, K::Assign, K::Word, K::Semicolon]
        );
    }

    #[test]
    fn raw_characters_stay_raw() {
        assert_eq!(
            code_kinds("a * b & c : d", Dialect::C),
            vec![K::Word, K::Star, K::Word, K::Amp, K::Word, K::Colon, K::Word]
        );
    }

    #[test]
    fn maximal_munch_operators() {
        assert_eq!(
            code_kinds("a <<= b >> c != d", Dialect::C),
            vec![K::Word, K::Assign, K::Word, K::Arith, K::Word, K::Compare, K::Word]
        );
    }

    #[test]
    fn whitespace_and_newlines_collapse() {
        assert_eq!(
            kinds("a  \t b\n\n\nc", Dialect::C),
            vec![K::Word, K::Whitespace, K::Word, K::Newline, K::Word]
        );
    }

    #[test]
    fn line_continuation_chunk() {
        assert_eq!(
            kinds("a\\\nb", Dialect::C),
            vec![K::Word, K::NlCont, K::Word]
        );
    }

    #[test]
    fn depth_bookkeeping() {
        let lexed = lex("f(a[i]) { }", Dialect::C);
        let seq = &lexed.seq;
        for id in seq.ids() {
            let chunk = seq.get(id);
            match chunk.text("f(a[i]) { }") {
                "f" => assert_eq!((chunk.paren_depth, chunk.square_depth), (0, 0)),
                "a" => assert_eq!((chunk.paren_depth, chunk.square_depth), (1, 0)),
                "i" => assert_eq!((chunk.paren_depth, chunk.square_depth), (1, 1)),
                _ => {}
            }
        }
        assert!(!seq.unbalanced());
    }

    #[test]
    fn unmatched_close_flags_unbalanced() {
        let lexed = lex("a)", Dialect::C);
        assert!(lexed.seq.unbalanced());
        assert_eq!(lexed.diagnostics.len(), 1);
    }

    #[test]
    fn unclosed_open_flags_unbalanced() {
        let lexed = lex("f(a", Dialect::C);
        assert!(lexed.seq.unbalanced());
        assert!(!lexed.diagnostics.is_empty());
    }

    #[test]
    fn tsquare_is_one_chunk() {
        assert_eq!(
            code_kinds("int a[];", Dialect::C),
            vec![K::Word, K::Word, K::TSquare, K::Semicolon]
        );
    }

    #[test]
    fn at_words_lex_whole() {
        let lexed = lex("@interface Foo", Dialect::Oc);
        let seq = &lexed.seq;
        let first = seq.first().unwrap();
        assert_eq!(seq.kind(first), K::Word);
        assert_eq!(seq.get(first).text("@interface Foo"), "@interface");
    }

    #[test]
    fn unknown_character_recovers() {
        let lexed = lex("a € b", Dialect::C);
        let kinds: Vec<K> = lexed.seq.ids().iter().map(|id| lexed.seq.kind(*id)).collect();
        assert!(kinds.contains(&K::Unknown));
        assert_eq!(lexed.diagnostics.len(), 1);
        // Recovery keeps the rest of the line.
        assert_eq!(*kinds.last().unwrap(), K::Word);
    }

    #[test]
    fn round_trip_reconstruction() {
        let source = "int main(void) {\n\treturn 0; /* ok */\n}\n";
        let lexed = lex(source, Dialect::C);
        assert_eq!(lexed.seq.reconstruct(source), source);
    }
}
