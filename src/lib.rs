#![forbid(unsafe_code)]
//! cfmt — tokenizing front end for a multi-dialect C-family source formatter.
//!
//! This crate wires the pieces together and owns the command-line surface:
//! the vocabulary and dialect tables live in `cfmt_core`, the lexer and
//! re-tagger in `cfmt_syntax`. The output of [`frontend::tokenize`] is the
//! classified chunk sequence a formatting engine consumes; nothing here
//! builds a syntax tree or does semantic analysis.
//!
//! ## Panic Policy
//!
//! Production code propagates errors with `Result` and `?`; `.unwrap()` and
//! `.expect()` are for tests.

pub mod cli;
pub mod frontend;

pub use cfmt_core::{Dialect, Langs};
pub use frontend::{tokenize, Tokenized};
