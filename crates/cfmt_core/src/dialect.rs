//! Dialect registry: the supported input languages and their feature flags.
//!
//! A [`Dialect`] is fixed for the whole run of one source unit. Keyword and
//! punctuation table entries carry a [`Langs`] mask saying which dialects
//! they apply to; resolution never mixes two dialects in one run.

use std::fmt;
use std::str::FromStr;

// ============================================================================
// LANGUAGE MASKS
// ============================================================================

/// Bit mask over dialects, used by keyword/punctuation table entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Langs(pub u16);

impl Langs {
    pub const C: Langs = Langs(0x0001);
    pub const CPP: Langs = Langs(0x0002);
    pub const D: Langs = Langs(0x0004);
    pub const CS: Langs = Langs(0x0008);
    pub const JAVA: Langs = Langs(0x0010);
    pub const PAWN: Langs = Langs(0x0020);
    pub const OC: Langs = Langs(0x0040);

    /// Every supported dialect.
    pub const ALL: Langs = Langs(0x007f);
    /// The preprocessor-carrying C family: C, C++, Objective-C.
    pub const ALLC: Langs = Langs(0x0001 | 0x0002 | 0x0040);

    pub const fn union(self, other: Langs) -> Langs {
        Langs(self.0 | other.0)
    }

    pub const fn contains(self, dialect: Dialect) -> bool {
        self.0 & dialect.mask().0 != 0
    }
}

// ============================================================================
// DIALECTS
// ============================================================================

/// One supported C-family input language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    C,
    Cpp,
    D,
    Cs,
    Java,
    Pawn,
    Oc,
}

impl Dialect {
    pub const fn mask(self) -> Langs {
        match self {
            Dialect::C => Langs::C,
            Dialect::Cpp => Langs::CPP,
            Dialect::D => Langs::D,
            Dialect::Cs => Langs::CS,
            Dialect::Java => Langs::JAVA,
            Dialect::Pawn => Langs::PAWN,
            Dialect::Oc => Langs::OC,
        }
    }

    /// All dialects, for table-driven tests.
    pub const ALL: [Dialect; 7] = [
        Dialect::C,
        Dialect::Cpp,
        Dialect::D,
        Dialect::Cs,
        Dialect::Java,
        Dialect::Pawn,
        Dialect::Oc,
    ];

    // ========================================================================
    // Feature flags
    // ========================================================================

    /// Whether `#` at the start of a line opens a directive.
    pub fn has_preprocessor(self) -> bool {
        !matches!(self, Dialect::D | Dialect::Java)
    }

    /// D spells template instantiation `Foo!(args)`.
    pub fn template_bang(self) -> bool {
        matches!(self, Dialect::D)
    }

    /// Whether `<`/`>` can delimit template/generic/protocol arguments at
    /// all; where they cannot, every raw angle is a comparison.
    pub fn has_generics(self) -> bool {
        !matches!(self, Dialect::C | Dialect::Pawn)
    }

    /// Whether a plain quoted string may contain an unescaped newline.
    pub fn allows_multiline_string(self) -> bool {
        matches!(self, Dialect::D | Dialect::Pawn)
    }

    /// Pawn statements may omit the terminating semicolon.
    pub fn optional_semicolons(self) -> bool {
        matches!(self, Dialect::Pawn)
    }

    /// C# `#region`/`#endregion` markers.
    pub fn has_regions(self) -> bool {
        matches!(self, Dialect::Cs)
    }

    /// Objective-C `@`-directives lex as single words (`@interface`).
    pub fn at_words(self) -> bool {
        matches!(self, Dialect::Oc)
    }

    /// C# verbatim strings: `@"..."`.
    pub fn verbatim_strings(self) -> bool {
        matches!(self, Dialect::Cs)
    }

    /// D wysiwyg strings: `` `...` `` and `r"..."`.
    pub fn wysiwyg_strings(self) -> bool {
        matches!(self, Dialect::D)
    }

    /// D `/+ ... +/` nesting comments.
    pub fn nesting_comments(self) -> bool {
        matches!(self, Dialect::D)
    }

    /// D `~` concatenation between string operands.
    pub fn tilde_concat(self) -> bool {
        matches!(self, Dialect::D)
    }

    /// Embedded `EXEC SQL ... ;` statements.
    pub fn embedded_sql(self) -> bool {
        matches!(self, Dialect::C | Dialect::Cpp)
    }

    /// Map a file extension to a dialect, for callers that infer it.
    pub fn from_extension(ext: &str) -> Option<Dialect> {
        match ext {
            "c" | "h" => Some(Dialect::C),
            "cpp" | "cxx" | "cc" | "hpp" | "hxx" | "hh" => Some(Dialect::Cpp),
            "d" | "di" => Some(Dialect::D),
            "cs" => Some(Dialect::Cs),
            "java" => Some(Dialect::Java),
            "p" | "pwn" | "sma" | "inc" => Some(Dialect::Pawn),
            "m" | "mm" => Some(Dialect::Oc),
            _ => None,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::C => "c",
            Dialect::Cpp => "cpp",
            Dialect::D => "d",
            Dialect::Cs => "cs",
            Dialect::Java => "java",
            Dialect::Pawn => "pawn",
            Dialect::Oc => "oc",
        };
        write!(f, "{}", name)
    }
}

/// Error for an unrecognized dialect name.
///
/// This crate stays dependency-light, so the error is a plain type; the
/// syntax crate wraps it into its configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDialect(pub String);

impl fmt::Display for UnknownDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dialect '{}'", self.0)
    }
}

impl std::error::Error for UnknownDialect {}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Dialect::C),
            "cpp" | "c++" | "cxx" => Ok(Dialect::Cpp),
            "d" => Ok(Dialect::D),
            "cs" | "c#" | "csharp" => Ok(Dialect::Cs),
            "java" => Ok(Dialect::Java),
            "pawn" => Ok(Dialect::Pawn),
            "oc" | "objc" | "objective-c" => Ok(Dialect::Oc),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
