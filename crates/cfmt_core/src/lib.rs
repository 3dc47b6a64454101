#![forbid(unsafe_code)]
//! Canonical vocabulary for the cfmt tokenizing front end.
//!
//! This crate is intentionally small and dependency-light. It holds the data
//! every other stage agrees on:
//! - the closed chunk-kind vocabulary ([`kinds`]),
//! - the dialect registry and feature flags ([`dialect`]),
//! - the per-dialect keyword and directive tables ([`keywords`]),
//! - the maximal-munch punctuation tables ([`punct`]).
//!
//! ## Notes
//! - No IO and no global mutable state; tables are compile-time data.
//! - The lexer, resolver, and re-tagger refer to kinds by value, never by
//!   spelling — spelling knowledge lives here and only here.

pub mod dialect;
pub mod keywords;
pub mod kinds;
pub mod punct;

pub use dialect::{Dialect, Langs, UnknownDialect};
pub use kinds::{BracketPair, ChunkKind, Stability, BRACKET_PAIRS};
