//! Quoted literal scanning.
//!
//! The lexer never interprets escape contents; it only needs to find the
//! closing delimiter and to know whether an unescaped newline occurred before
//! it. Character literals and include filenames reuse the same scan.
//!
//! Dialect flavors:
//! - `Escaped` - ordinary C-family string, backslash escapes
//! - `Verbatim` - C# `@"..."`, doubled quotes escape, newlines allowed
//! - `Raw` - D `` `...` `` and `r"..."`, no escapes at all

use super::Lexer;
use cfmt_core::kinds::ChunkKind;

/// How the body of a quoted literal treats special characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Escaped,
    Verbatim,
    Raw,
}

impl<'a> Lexer<'a> {
    /// Scan to the closing quote; the opening quote (and any prefix) is
    /// already consumed.
    ///
    /// `multiline` says whether an unescaped newline is legal; when it is
    /// not, the chunk ends before the newline and a diagnostic is recorded.
    /// Running into end of input always produces a best-effort chunk.
    pub(super) fn scan_string(
        &mut self,
        start: usize,
        quote: char,
        flavor: Flavor,
        multiline: bool,
    ) {
        let mut saw_newline = false;

        loop {
            match self.peek() {
                None => {
                    self.unterminated_string(start, saw_newline);
                    return;
                }
                Some(c) if c == quote => {
                    self.advance();
                    if flavor == Flavor::Verbatim && self.peek() == Some(quote) {
                        // Doubled quote stays inside the literal.
                        self.advance();
                        continue;
                    }
                    break;
                }
                Some('\\') if flavor == Flavor::Escaped => {
                    self.advance();
                    if self.advance().is_none() {
                        self.unterminated_string(start, saw_newline);
                        return;
                    }
                }
                Some('\n' | '\r') => {
                    if multiline {
                        saw_newline = true;
                        self.advance();
                    } else {
                        self.unterminated_string(start, saw_newline);
                        return;
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        let kind = if saw_newline { ChunkKind::StringMulti } else { ChunkKind::String };
        self.add_chunk(kind, start);
    }

    fn unterminated_string(&mut self, start: usize, saw_newline: bool) {
        let kind = if saw_newline { ChunkKind::StringMulti } else { ChunkKind::String };
        let id = self.add_chunk(kind, start);
        self.seq.get_mut(id).unterminated = true;
        self.diagnostic("unterminated string literal", start);
    }
}

// ============================================================================
// TESTS
// ============================================================================
