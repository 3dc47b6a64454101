//! Contextual re-tagging: an ordered pipeline of disambiguation passes.
//!
//! Each pass is a free function over the chunk sequence with no state kept
//! between calls. A pass examines a bounded window (nearest code chunk on
//! either side plus nesting depths) and rewrites kinds in place. Order
//! matters and is fixed here: a pass may rely on every earlier pass having
//! settled its family (the function pass needs sparens identified; the colon
//! pass needs function parens identified).
//!
//! When no rule matches, the provisional kind is simply retained; the
//! pipeline never leaves a chunk kind-less and never aborts.
//!
//! ## Pass roster
//!
//! 1. `cleanup`   - word-level fixups and comment placement
//! 2. `parens`    - special-statement parens (`if`/`for`/`while`/`switch`)
//! 3. `pawn`      - virtual semicolon synthesis (early, so every later
//!    pass sees uniformly terminated statements)
//! 4. `angles`    - template angles vs comparison, D template-bang
//! 5. `preproc`   - `#define` name roles, `#region` indent pounds
//! 6. `functions` - definition / prototype / call / ctor-var roles
//! 7. `operators` - unary vs binary vs declarator punctuation
//! 8. `colons`    - case/ternary/class/label/bit-field colons
//! 9. `sql`       - embedded `EXEC SQL` statements

mod angles;
mod cleanup;
mod colons;
mod functions;
mod operators;
mod parens;
mod pawn;
mod preproc;
mod sql;

use crate::chunks::ChunkSeq;
use cfmt_core::dialect::Dialect;

/// Run every re-tag pass, in order, over one chunk sequence.
///
/// Idempotent: running it again on its own output changes nothing.
#[tracing::instrument(skip_all, fields(dialect = %dialect, chunks = seq.len()))]
pub fn retag_all(seq: &mut ChunkSeq, source: &str, dialect: Dialect) {
    cleanup::run(seq, dialect);
    tracing::trace!("cleanup pass done");
    parens::run(seq);
    tracing::trace!("paren pass done");
    pawn::run(seq, dialect);
    tracing::trace!("pawn pass done");
    angles::run(seq, dialect);
    tracing::trace!("angle pass done");
    preproc::run(seq);
    tracing::trace!("preprocessor pass done");
    functions::run(seq);
    tracing::trace!("function pass done");
    operators::run(seq, dialect);
    tracing::trace!("operator pass done");
    colons::run(seq, dialect);
    tracing::trace!("colon pass done");
    sql::run(seq, source, dialect);
    tracing::trace!("sql pass done");
}
