//! cfmt front end.
//!
//! The pipeline stages live in the shared `cfmt_syntax` crate:
//! - `lexer`: raw scan into preliminary chunks
//! - `resolve`: dialect keyword resolution
//! - `retag`: contextual disambiguation passes
//! - `chunks`: the chunk sequence they all operate on
//! - `diagnostics`: recovery notes and configuration errors

pub use cfmt_syntax::{chunks, diagnostics, lexer, resolve, retag, tokenize, Tokenized};
