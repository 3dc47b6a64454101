//! Keyword and directive tables.
//!
//! One compile-time map covers every dialect; each spelling carries a list of
//! `(language mask, kind)` entries and resolution picks the first entry whose
//! mask contains the active dialect. Two dialects may give one spelling two
//! different kinds (`char` is a type in C but a size operator in Pawn); they
//! never mix within one run.
//!
//! We use `phf` (perfect hash function) for:
//! - O(1) guaranteed lookup (no hash collisions)
//! - Zero runtime initialization cost (computed at compile time)

use crate::dialect::{Dialect, Langs};
use crate::kinds::ChunkKind;
use phf::phf_map;

/// One dialect-gated keyword mapping.
#[derive(Debug, Clone, Copy)]
pub struct KwEntry {
    pub langs: Langs,
    pub kind: ChunkKind,
}

const fn kw(langs: Langs, kind: ChunkKind) -> KwEntry {
    KwEntry { langs, kind }
}

// Mask shorthands for the table below.
const C: Langs = Langs::C;
const CPP: Langs = Langs::CPP;
const D: Langs = Langs::D;
const CS: Langs = Langs::CS;
const JAVA: Langs = Langs::JAVA;
const PAWN: Langs = Langs::PAWN;
const OC: Langs = Langs::OC;
const ALL: Langs = Langs::ALL;
const ALLC: Langs = Langs::ALLC;

use crate::kinds::ChunkKind as K;

/// Keyword lookup table shared by every dialect.
pub static KEYWORDS: phf::Map<&'static str, &'static [KwEntry]> = phf_map! {
    // ========== Control flow ==========
    "if" => &[kw(ALL, K::If)],
    "else" => &[kw(ALL, K::Else)],
    "for" => &[kw(ALL, K::For)],
    "foreach" => &[kw(CS.union(D), K::For)],
    "foreach_reverse" => &[kw(D, K::For)],
    "while" => &[kw(ALL, K::While)],
    "do" => &[kw(ALL, K::Do)],
    "switch" => &[kw(ALL, K::Switch)],
    "case" => &[kw(ALL, K::Case)],
    "default" => &[kw(ALL, K::Default)],
    "break" => &[kw(ALL, K::Break)],
    "continue" => &[kw(ALL, K::Continue)],
    "goto" => &[kw(ALLC.union(CS).union(D).union(PAWN), K::Goto)],
    "return" => &[kw(ALL, K::Return)],

    // ========== Built-in types ==========
    "int" => &[kw(ALLC.union(CS).union(JAVA).union(D), K::Type)],
    "char" => &[kw(PAWN, K::CharKw), kw(ALLC.union(CS).union(JAVA).union(D), K::Type)],
    "long" => &[kw(ALLC.union(CS).union(JAVA).union(D), K::Type)],
    "short" => &[kw(ALLC.union(CS).union(JAVA).union(D), K::Type)],
    "float" => &[kw(ALLC.union(CS).union(JAVA).union(D), K::Type)],
    "double" => &[kw(ALLC.union(CS).union(JAVA).union(D), K::Type)],
    "signed" => &[kw(ALLC, K::Type)],
    "unsigned" => &[kw(ALLC, K::Type)],
    "void" => &[kw(ALLC.union(CS).union(JAVA).union(D), K::Type)],
    "bool" => &[kw(CPP.union(CS).union(D), K::Type)],
    "_Bool" => &[kw(C, K::Type)],
    "wchar_t" => &[kw(C.union(CPP), K::Type)],
    "boolean" => &[kw(JAVA, K::Type)],
    "byte" => &[kw(JAVA.union(CS).union(D), K::Type)],
    "sbyte" => &[kw(CS, K::Type)],
    "uint" => &[kw(CS.union(D), K::Type)],
    "ulong" => &[kw(CS.union(D), K::Type)],
    "ushort" => &[kw(CS.union(D), K::Type)],
    "ubyte" => &[kw(D, K::Type)],
    "cent" => &[kw(D, K::Type)],
    "ucent" => &[kw(D, K::Type)],
    "real" => &[kw(D, K::Type)],
    "ireal" => &[kw(D, K::Type)],
    "ifloat" => &[kw(D, K::Type)],
    "idouble" => &[kw(D, K::Type)],
    "creal" => &[kw(D, K::Type)],
    "cfloat" => &[kw(D, K::Type)],
    "cdouble" => &[kw(D, K::Type)],
    "dchar" => &[kw(D, K::Type)],
    "wchar" => &[kw(D, K::Type)],
    "decimal" => &[kw(CS, K::Type)],
    "object" => &[kw(CS, K::Type)],
    "string" => &[kw(CS, K::Type)],
    "var" => &[kw(CS, K::Type)],
    "id" => &[kw(OC, K::Type)],

    // ========== Qualifiers and storage classes ==========
    "auto" => &[kw(C.union(CPP), K::Qualifier)],
    "const" => &[kw(ALLC.union(CS).union(D), K::Qualifier)],
    "static" => &[kw(ALL, K::Qualifier)],
    "extern" => &[kw(ALLC.union(CS).union(D), K::Qualifier)],
    "register" => &[kw(C.union(CPP), K::Qualifier)],
    "inline" => &[kw(ALLC.union(D), K::Qualifier)],
    "restrict" => &[kw(C, K::Qualifier)],
    "volatile" => &[kw(ALLC.union(CS).union(JAVA).union(D), K::Volatile)],
    "virtual" => &[kw(CPP.union(CS), K::Qualifier)],
    "explicit" => &[kw(CPP.union(CS), K::Qualifier)],
    "final" => &[kw(JAVA.union(D), K::Qualifier)],
    "abstract" => &[kw(CS.union(JAVA).union(D), K::Qualifier)],
    "sealed" => &[kw(CS, K::Qualifier)],
    "readonly" => &[kw(CS, K::Qualifier)],
    "override" => &[kw(CS.union(D), K::Qualifier)],
    "out" => &[kw(CS.union(D), K::Qualifier)],
    "ref" => &[kw(CS, K::Qualifier)],
    "params" => &[kw(CS, K::Qualifier)],
    "throws" => &[kw(JAVA, K::Qualifier)],
    "transient" => &[kw(JAVA, K::Qualifier)],
    "synchronized" => &[kw(JAVA.union(D), K::Qualifier)],
    "strictfp" => &[kw(JAVA, K::Qualifier)],
    "implements" => &[kw(JAVA, K::Qualifier)],
    "extends" => &[kw(JAVA, K::Qualifier)],
    "deprecated" => &[kw(D, K::Qualifier)],
    "inout" => &[kw(D, K::Qualifier)],
    "pure" => &[kw(D, K::Qualifier)],
    "nothrow" => &[kw(D, K::Qualifier)],
    "checked" => &[kw(CS, K::Qualifier)],
    "unchecked" => &[kw(CS, K::Qualifier)],
    "fixed" => &[kw(CS, K::Qualifier)],
    "event" => &[kw(CS, K::Qualifier)],
    "where" => &[kw(CS, K::Qualifier)],
    "yield" => &[kw(CS, K::Qualifier)],
    "noexcept" => &[kw(CPP, K::Qualifier)],
    "mutable" => &[kw(CPP, K::Mutable)],
    "friend" => &[kw(CPP, K::Friend)],
    "lazy" => &[kw(D, K::Lazy)],
    "internal" => &[kw(CS, K::Private)],
    "public" => &[kw(PAWN, K::Qualifier), kw(CPP.union(CS).union(JAVA).union(D), K::Private)],
    "private" => &[kw(CPP.union(CS).union(JAVA).union(D), K::Private)],
    "protected" => &[kw(CPP.union(CS).union(JAVA).union(D), K::Private)],

    // ========== Declaration introducers ==========
    "typedef" => &[kw(ALLC, K::Typedef)],
    "struct" => &[kw(ALLC.union(CS).union(D), K::Struct)],
    "union" => &[kw(ALLC.union(D), K::Union)],
    "enum" => &[kw(ALLC.union(CS).union(JAVA).union(D), K::Enum)],
    "class" => &[kw(CPP.union(CS).union(JAVA).union(D), K::Class)],
    "interface" => &[kw(CS.union(JAVA).union(D), K::Class)],
    "namespace" => &[kw(CPP.union(CS), K::Namespace)],
    "using" => &[kw(CPP.union(CS), K::Using)],
    "template" => &[kw(CPP.union(D), K::Template)],
    "typename" => &[kw(CPP, K::Typename)],
    "operator" => &[kw(CPP.union(CS), K::Operator)],
    "package" => &[kw(JAVA, K::Namespace)],
    "module" => &[kw(D, K::Namespace)],
    "import" => &[kw(D.union(JAVA), K::Import)],
    "alias" => &[kw(D, K::Typedef)],
    "delegate" => &[kw(CS.union(D), K::Delegate)],
    "function" => &[kw(D, K::Delegate)],

    // ========== Expression keywords ==========
    "sizeof" => &[kw(ALLC.union(CS).union(PAWN), K::Sizeof)],
    "typeof" => &[kw(CS.union(D), K::Sizeof)],
    "typeid" => &[kw(CPP.union(D), K::Sizeof)],
    "new" => &[kw(PAWN, K::Type), kw(CPP.union(CS).union(JAVA).union(D), K::New)],
    "delete" => &[kw(CPP.union(D), K::Delete)],
    "this" => &[kw(CPP.union(CS).union(JAVA).union(D), K::This)],
    "base" => &[kw(CS, K::Base)],
    "super" => &[kw(JAVA.union(D), K::Super)],
    "cast" => &[kw(D, K::Cast)],
    "static_cast" => &[kw(CPP, K::TypeCast)],
    "dynamic_cast" => &[kw(CPP, K::TypeCast)],
    "const_cast" => &[kw(CPP, K::TypeCast)],
    "reinterpret_cast" => &[kw(CPP, K::TypeCast)],
    "is" => &[kw(CS.union(D), K::SCompare)],
    "as" => &[kw(CS, K::As)],
    "in" => &[kw(CS.union(D), K::In)],
    "instanceof" => &[kw(JAVA, K::SCompare)],
    "stackalloc" => &[kw(CS, K::New)],

    // ========== Exception handling ==========
    "throw" => &[kw(CPP.union(CS).union(JAVA).union(D), K::Throw)],
    "try" => &[kw(CPP.union(CS).union(JAVA).union(D), K::Try)],
    "catch" => &[kw(CPP.union(CS).union(JAVA).union(D), K::Catch)],
    "finally" => &[kw(CS.union(JAVA).union(D), K::Finally)],

    // ========== Misc keywords ==========
    "asm" => &[kw(C.union(CPP).union(D), K::Asm)],
    "__asm__" => &[kw(C.union(CPP), K::Asm)],
    "__attribute__" => &[kw(C.union(CPP), K::Attribute)],
    "export" => &[kw(CPP.union(D), K::Export)],
    "lock" => &[kw(CS, K::Lock)],
    "unsafe" => &[kw(CS, K::Unsafe)],
    "get" => &[kw(CS, K::Getset)],
    "set" => &[kw(CS, K::Getset)],

    // ========== Word-spelled operators (C++ alternative tokens) ==========
    "and" => &[kw(CPP, K::SBool)],
    "or" => &[kw(CPP, K::SBool)],
    "not" => &[kw(CPP, K::SArith)],
    "xor" => &[kw(CPP, K::SArith)],
    "bitand" => &[kw(CPP, K::SArith)],
    "bitor" => &[kw(CPP, K::SArith)],
    "compl" => &[kw(CPP, K::SArith)],
    "and_eq" => &[kw(CPP, K::SAssign)],
    "or_eq" => &[kw(CPP, K::SAssign)],
    "xor_eq" => &[kw(CPP, K::SAssign)],
    "not_eq" => &[kw(CPP, K::SCompare)],

    // ========== D ==========
    "align" => &[kw(D, K::Align)],
    "body" => &[kw(D, K::Body)],
    "debug" => &[kw(D, K::Debug)],
    "invariant" => &[kw(D, K::Invariant)],
    "unittest" => &[kw(D, K::Unittest)],
    "version" => &[kw(D, K::Version)],
    "scope" => &[kw(D, K::Scope)],
    "with" => &[kw(D, K::Scope)],
    "macro" => &[kw(D, K::DMacro)],
    "mixin" => &[kw(D, K::DMacro)],

    // ========== Pawn ==========
    "forward" => &[kw(PAWN, K::Forward)],
    "native" => &[kw(PAWN, K::Native), kw(JAVA, K::Qualifier)],
    "stock" => &[kw(PAWN, K::Stock)],
    "state" => &[kw(PAWN, K::State)],
    "tagof" => &[kw(PAWN, K::Tagof)],
    "defined" => &[kw(PAWN, K::Defined)],

    // ========== Objective-C @-directives ==========
    "@interface" => &[kw(OC, K::OcIntf)],
    "@implementation" => &[kw(OC, K::OcImpl)],
    "@end" => &[kw(OC, K::OcEnd)],
    "@protocol" => &[kw(OC, K::OcIntf)],
    "@class" => &[kw(OC, K::Class)],
    "@private" => &[kw(OC, K::Private)],
    "@public" => &[kw(OC, K::Private)],
    "@protected" => &[kw(OC, K::Private)],
    "@package" => &[kw(OC, K::Private)],
    "@selector" => &[kw(OC, K::Sizeof)],
    "@encode" => &[kw(OC, K::Sizeof)],
    "@synchronized" => &[kw(OC, K::Qualifier)],
    "@try" => &[kw(OC, K::Try)],
    "@catch" => &[kw(OC, K::Catch)],
    "@finally" => &[kw(OC, K::Finally)],
    "@throw" => &[kw(OC, K::Throw)],
};

/// Resolve a word spelling against the active dialect.
///
/// Returns `None` when the spelling is not a keyword of that dialect; the
/// chunk then stays a generic word.
pub fn keyword_kind(spelling: &str, dialect: Dialect) -> Option<ChunkKind> {
    KEYWORDS
        .get(spelling)?
        .iter()
        .find(|entry| entry.langs.contains(dialect))
        .map(|entry| entry.kind)
}

// ============================================================================
// PREPROCESSOR DIRECTIVES
// ============================================================================

/// Classify a directive name (the word following `#`).
///
/// Unknown names get the catch-all kind; the lexer still captures their body.
pub fn directive_kind(name: &str, dialect: Dialect) -> ChunkKind {
    match name {
        "define" => K::PpDefine,
        "undef" => K::PpUndef,
        "include" => K::PpInclude,
        "import" if dialect == Dialect::Oc => K::PpInclude,
        "if" | "ifdef" | "ifndef" => K::PpIf,
        "else" | "elif" => K::PpElse,
        "endif" => K::PpEndif,
        "pragma" => K::PpPragma,
        "error" => K::PpError,
        "line" => K::PpLine,
        "region" if dialect.has_regions() => K::PpRegion,
        "endregion" if dialect.has_regions() => K::PpEndregion,
        "assert" if dialect == Dialect::Pawn => K::PpAssert,
        "emit" if dialect == Dialect::Pawn => K::PpEmit,
        "endinput" | "endscript" if dialect == Dialect::Pawn => K::PpEndinput,
        "section" if dialect == Dialect::Pawn => K::PpSection,
        "file" if dialect == Dialect::Pawn => K::PpFile,
        _ => K::PpOther,
    }
}

// ============================================================================
// TESTS
// ============================================================================
