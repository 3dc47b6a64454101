//! Numeric literal scanning.
//!
//! The integer/floating distinction is purely lexical: a literal is floating
//! when it contains a fraction dot, an exponent, or a float suffix. Radix
//! prefixes, digit separators (`'` and `_`), and hex-float `p` exponents are
//! all handled here so the re-tagger never has to look inside a number.

use super::Lexer;
use cfmt_core::kinds::ChunkKind;

impl<'a> Lexer<'a> {
    /// Scan a literal starting at a digit, or at a `.` followed by a digit.
    pub(super) fn scan_number(&mut self, start: usize) {
        let mut is_float = false;

        if self.peek() == Some('.') {
            // `.5` style fraction
            self.advance();
            is_float = true;
            self.consume_digits(10);
        } else if self.peek() == Some('0')
            && matches!(self.peek_next(), Some('x' | 'X' | 'b' | 'B'))
        {
            let radix = if matches!(self.peek_next(), Some('x' | 'X')) { 16 } else { 2 };
            self.advance(); // 0
            self.advance(); // x or b
            self.consume_digits(radix);
            if radix == 16 {
                // Hex floats: fraction and a mandatory-for-floats p exponent.
                if self.peek() == Some('.')
                    && self.peek_next().is_some_and(|c| c.is_ascii_hexdigit())
                {
                    self.advance();
                    is_float = true;
                    self.consume_digits(16);
                }
                if matches!(self.peek(), Some('p' | 'P')) {
                    is_float = true;
                    self.consume_exponent();
                }
            }
        } else {
            self.consume_digits(10);
            if self.peek() == Some('.') && self.peek_next() != Some('.') {
                // Not consuming `..`: that is a range, not a fraction.
                self.advance();
                is_float = true;
                self.consume_digits(10);
            }
            if matches!(self.peek(), Some('e' | 'E')) {
                is_float = true;
                self.consume_exponent();
            }
        }

        // Integer and float suffix letters, any order the dialects allow.
        while let Some(c) = self.peek() {
            match c {
                'u' | 'U' | 'l' | 'L' => {
                    self.advance();
                }
                'f' | 'F' | 'd' | 'D' | 'm' | 'M' | 'i' => {
                    is_float = true;
                    self.advance();
                }
                _ => break,
            }
        }

        let kind = if is_float { ChunkKind::NumberFp } else { ChunkKind::Number };
        self.add_chunk(kind, start);
    }

    /// Consume digits of the radix plus digit separators.
    fn consume_digits(&mut self, radix: u32) {
        while let Some(c) = self.peek() {
            if c.is_digit(radix) || c == '_' {
                self.advance();
            } else if c == '\'' && self.peek_next().is_some_and(|n| n.is_digit(radix)) {
                // C++14 separator; the guard keeps a following char literal intact.
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consume an `e`/`E`/`p`/`P` exponent with its optional sign.
    fn consume_exponent(&mut self) {
        self.advance();
        if matches!(self.peek(), Some('+' | '-')) {
            self.advance();
        }
        self.consume_digits(10);
    }
}

// ============================================================================
// TESTS
// ============================================================================
