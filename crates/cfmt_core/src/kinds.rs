//! The closed chunk-kind vocabulary.
//!
//! Every stage of the front end refers to these kinds by value, never by
//! spelling. The enum is additive-only: downstream stages (re-tagger,
//! formatting engine) match exhaustively on categories, so removing or
//! repurposing a variant is a breaking change.
//!
//! ## Notes
//! - Bracket pairs are modeled as explicit [`BracketPair`] records in
//!   [`BRACKET_PAIRS`]; pair lookup never relies on declaration order.
//! - [`Stability`] records how a kind enters a chunk: `Terminal` kinds are
//!   final the moment the lexer emits them, `Provisional` kinds are
//!   candidates for re-tagging, `Derived` kinds are only ever produced by
//!   re-tag passes.

// ============================================================================
// CHUNK KINDS
// ============================================================================

/// Semantic classification of one chunk of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    // ========== Bookkeeping ==========
    None,    // parent-kind slot when no association exists
    Unknown, // a character the lexer could not place

    // ========== Whitespace and layout ==========
    Whitespace, // spaces/tabs, no newline
    Newline,    // a run of one or more newlines
    NlCont,     // backslash-newline continuation

    // ========== Comments ==========
    CommentCpp,   // line comment, runs to end of line
    Comment,      // block comment without an embedded newline
    CommentMulti, // block comment spanning lines
    CommentEmbed, // placement: code on both sides (parent-kind only)
    CommentStart, // placement: newline before, code after (parent-kind only)
    CommentEnd,   // placement: code before, newline after (parent-kind only)
    CommentWhole, // placement: newline on both sides (parent-kind only)

    // ========== Words and literals ==========
    Word,        // identifier-shaped run, not (yet) a keyword
    Number,      // integer literal
    NumberFp,    // floating-point literal
    String,      // quoted literal, including 'c' and <include>
    StringMulti, // quoted literal with an embedded unescaped newline

    // ========== Shared keywords ==========
    If,
    Else,
    Elseif,
    For,
    While,
    WhileOfDo, // the `while` that closes a do-loop
    Switch,
    Case,
    Do,
    Volatile,
    Typedef,
    Struct,
    Enum,
    Sizeof,
    Return,
    Break,
    Union,
    Goto,
    Continue,
    Cast,     // D `cast(type)`
    TypeCast, // C++ `static_cast` and friends
    Typename,
    Template,

    // ========== Operators ==========
    Assign,   // = and compound assignments
    SAssign,  // word-spelled assignment: `and_eq`
    Compare,  // == != <= >= < >
    SCompare, // word-spelled comparison: `is`, `not_eq`, `instanceof`
    Bool,     // && ||
    SBool,    // word-spelled boolean: `and`, `or`
    Arith,    // binary / % ^ | << >> and re-tagged * + - &
    SArith,   // word-spelled arithmetic: `not`, `xor`, `bitand`
    Deref,        // unary * (dereference)
    IncdecBefore, // prefix ++ / --
    IncdecAfter,  // postfix ++ / --
    Member,       // . or ->
    DcMember,     // ::
    C99Member,    // . in a designated initializer
    Inv,          // unary ~ (bitwise not)
    Destructor,   // ~ introducing a destructor name
    Not,          // !
    DTemplate,    // D template instantiation: Foo!(A)
    Addr,         // unary & (address-of)
    Neg,          // unary -
    Pos,          // unary +
    Star,  // raw *, awaiting re-tag
    Plus,  // raw +, awaiting re-tag
    Minus, // raw -, awaiting re-tag
    Amp,   // raw &, awaiting re-tag
    ByRef, // & in a parameter declaration
    Concat, // D ~ between string operands

    // ========== Preprocessor punctuation ==========
    Pound,         // # not at the start of a line
    Preproc,       // # that opens a directive line
    PreprocIndent, // directive # that participates in indentation (#region)
    PreprocBody,   // opaque body of a non-#define directive
    PP,            // ## paste
    Ellipsis,      // ...
    Range,         // .. (D)

    // ========== Statement punctuation ==========
    Semicolon,
    VSemicolon, // synthesized statement terminator
    Colon,      // raw :, awaiting re-tag
    CaseColon,
    ClassColon,  // after a class header or ctor parameter list
    DArrayColon, // D named array initializer
    QColon,      // the : of a ternary
    Question,
    Comma,

    // ========== More keywords ==========
    Asm,
    Attribute,
    Catch,
    Class,
    Delete,
    Export,
    Friend,
    Mutable,
    Namespace,
    New,
    Operator,
    Private, // any access specifier keyword
    PrivateColon,
    Throw,
    Try,
    Using,
    Super,
    Delegate,
    Body,      // D
    Debug,     // D
    Invariant, // D
    Unittest,  // D
    Unsafe,    // C#
    Finally,
    Import,
    Scope, // D
    Lazy,  // D
    DMacro,

    // ========== Structural brackets ==========
    ParenOpen,
    ParenClose,
    AngleOpen,  // provisional until the angle pass confirms a match
    AngleClose, // provisional until the angle pass confirms a match
    SParenOpen, // paren after if/for/while/switch
    SParenClose,
    FParenOpen, // paren of a function or function-like macro
    FParenClose,
    BraceOpen,
    BraceClose,
    VBraceOpen, // synthesized brace
    VBraceClose,
    SquareOpen,
    SquareClose,
    TSquare, // the two-character token []
    MacroOpen, // user-configured open/close word pairs
    MacroClose,
    MacroElse,

    // ========== Aggregate / derived ==========
    Label,      // a non-case label
    LabelColon, // the colon of a label
    Function,   // word + paren, role not yet refined
    FuncCall,
    FuncDef,
    FuncProto,
    FuncClass,   // constructor or destructor
    FuncCtorVar, // variable declared with constructor arguments
    MacroFunc,   // function-like macro name
    Macro,       // object-like macro name
    Qualifier,   // static, const, extern, ...
    Align,       // D align(n)
    Type,
    PtrType,  // * that is part of a type
    BitColon, // : in a bit-field or plain declaration

    // ========== Objective-C ==========
    OcEnd,   // @end
    OcImpl,  // @implementation
    OcIntf,  // @interface
    OcClass, // the name following @interface/@implementation

    // ========== Preprocessor directives ==========
    PpDefine,
    PpDefined, // `defined` inside a directive body
    PpInclude,
    PpIf, // #if, #ifdef, #ifndef
    PpElse,
    PpEndif,
    PpAssert,   // Pawn
    PpEmit,     // Pawn
    PpEndinput, // Pawn
    PpError,
    PpFile,
    PpLine,
    PpSection, // Pawn
    PpUndef,
    PpPragma,
    PpRegion,    // C#
    PpEndregion, // C#
    PpOther,

    // ========== Pawn ==========
    CharKw, // Pawn `char` size operator
    Defined,
    Forward,
    Native,
    State,
    Stock,
    Tagof,
    Dot,
    Tag,
    TagColon,

    // ========== C# ==========
    Lock,
    As,
    In,
    Braced,
    Version, // D; becomes If unless followed by =
    This,
    Base,
    Default, // becomes Case when followed by a colon
    Getset,  // reverts to Word unless followed by {

    // ========== Embedded SQL ==========
    SqlExec,
    SqlBegin,
    SqlEnd,
    SqlWord,
}

// ============================================================================
// BRACKET PAIRS
// ============================================================================

/// An open/close bracket kind pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketPair {
    pub open: ChunkKind,
    pub close: ChunkKind,
}

/// Registry of every structural bracket pairing.
pub const BRACKET_PAIRS: &[BracketPair] = &[
    BracketPair { open: ChunkKind::ParenOpen, close: ChunkKind::ParenClose },
    BracketPair { open: ChunkKind::SParenOpen, close: ChunkKind::SParenClose },
    BracketPair { open: ChunkKind::FParenOpen, close: ChunkKind::FParenClose },
    BracketPair { open: ChunkKind::AngleOpen, close: ChunkKind::AngleClose },
    BracketPair { open: ChunkKind::BraceOpen, close: ChunkKind::BraceClose },
    BracketPair { open: ChunkKind::VBraceOpen, close: ChunkKind::VBraceClose },
    BracketPair { open: ChunkKind::SquareOpen, close: ChunkKind::SquareClose },
    BracketPair { open: ChunkKind::MacroOpen, close: ChunkKind::MacroClose },
];

// ============================================================================
// STABILITY
// ============================================================================

/// How a kind enters a chunk over the pipeline's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    /// Assigned by the lexer (or resolver) and never revised.
    Terminal,
    /// Assigned early, a candidate for re-tagging.
    Provisional,
    /// Only ever reachable through a re-tag pass.
    Derived,
}

impl ChunkKind {
    /// The close kind paired with this open kind, if it is one.
    pub fn matching_close(self) -> Option<ChunkKind> {
        BRACKET_PAIRS.iter().find(|p| p.open == self).map(|p| p.close)
    }

    /// The open kind paired with this close kind, if it is one.
    pub fn matching_open(self) -> Option<ChunkKind> {
        BRACKET_PAIRS.iter().find(|p| p.close == self).map(|p| p.open)
    }

    pub fn is_open_bracket(self) -> bool {
        BRACKET_PAIRS.iter().any(|p| p.open == self)
    }

    pub fn is_close_bracket(self) -> bool {
        BRACKET_PAIRS.iter().any(|p| p.close == self)
    }

    /// Paren-family kinds share one nesting counter.
    pub fn is_paren_open(self) -> bool {
        matches!(self, ChunkKind::ParenOpen | ChunkKind::SParenOpen | ChunkKind::FParenOpen)
    }

    pub fn is_paren_close(self) -> bool {
        matches!(self, ChunkKind::ParenClose | ChunkKind::SParenClose | ChunkKind::FParenClose)
    }

    pub fn is_comment(self) -> bool {
        matches!(self, ChunkKind::CommentCpp | ChunkKind::Comment | ChunkKind::CommentMulti)
    }

    /// Layout chunks skipped by every look-ahead/behind window.
    pub fn is_layout(self) -> bool {
        matches!(self, ChunkKind::Whitespace | ChunkKind::Newline | ChunkKind::NlCont)
            || self.is_comment()
    }

    /// True for kinds that end an operand, so a following `*`/`&`/`+`/`-`
    /// reads as a binary operator.
    pub fn ends_operand(self) -> bool {
        matches!(
            self,
            ChunkKind::Word
                | ChunkKind::Number
                | ChunkKind::NumberFp
                | ChunkKind::String
                | ChunkKind::StringMulti
                | ChunkKind::ParenClose
                | ChunkKind::FParenClose
                | ChunkKind::SquareClose
                | ChunkKind::TSquare
                | ChunkKind::AngleClose
                | ChunkKind::IncdecAfter
                | ChunkKind::This
                | ChunkKind::Base
        )
    }

    /// True for kinds that terminate a statement for window purposes.
    pub fn ends_statement(self) -> bool {
        matches!(
            self,
            ChunkKind::Semicolon
                | ChunkKind::VSemicolon
                | ChunkKind::BraceOpen
                | ChunkKind::BraceClose
                | ChunkKind::VBraceOpen
                | ChunkKind::VBraceClose
                | ChunkKind::CaseColon
                | ChunkKind::LabelColon
        )
    }

    /// Where this kind sits in the terminal/provisional/derived grouping.
    pub fn stability(self) -> Stability {
        use ChunkKind::*;
        match self {
            // Raw punctuation and word-shaped chunks wait for later passes.
            Word | Star | Plus | Minus | Amp | Not | Inv | Colon | AngleOpen | AngleClose
            | IncdecAfter | ParenOpen | ParenClose | Pound | Preproc | Member | Default
            | Getset | Version | While | Unknown => Stability::Provisional,
            // Reachable only through re-tagging.
            Deref | Addr | Neg | Pos | ByRef | PtrType | Destructor | DTemplate | Concat
            | WhileOfDo | Elseif | SParenOpen | SParenClose | FParenOpen | FParenClose | VBraceOpen
            | VBraceClose | VSemicolon | CaseColon | ClassColon | DArrayColon | QColon
            | LabelColon | BitColon | TagColon | PrivateColon | Label | Function | FuncCall
            | FuncDef | FuncProto | FuncClass | FuncCtorVar | MacroFunc | Macro
            | PreprocIndent | IncdecBefore | C99Member | SqlExec | SqlBegin | SqlEnd
            | SqlWord | CommentEmbed | CommentStart | CommentEnd | CommentWhole | MacroOpen
            | MacroClose | MacroElse | Braced | OcClass | Tag | ChunkKind::None => {
                Stability::Derived
            }
            _ => Stability::Terminal,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_pairs_round_trip() {
        for pair in BRACKET_PAIRS {
            assert_eq!(pair.open.matching_close(), Some(pair.close));
            assert_eq!(pair.close.matching_open(), Some(pair.open));
            assert!(pair.open.is_open_bracket());
            assert!(pair.close.is_close_bracket());
        }
    }

    #[test]
    fn non_brackets_have_no_pairing() {
        assert_eq!(ChunkKind::Word.matching_close(), None);
        assert_eq!(ChunkKind::Semicolon.matching_open(), None);
        assert!(!ChunkKind::TSquare.is_open_bracket());
    }

    #[test]
    fn raw_kinds_are_provisional() {
        for kind in [
            ChunkKind::Star,
            ChunkKind::Plus,
            ChunkKind::Minus,
            ChunkKind::Amp,
            ChunkKind::Not,
            ChunkKind::Inv,
            ChunkKind::Colon,
            ChunkKind::AngleOpen,
            ChunkKind::AngleClose,
        ] {
            assert_eq!(kind.stability(), Stability::Provisional, "{kind:?}");
        }
    }

    #[test]
    fn derived_kinds_are_derived() {
        for kind in [
            ChunkKind::Deref,
            ChunkKind::PtrType,
            ChunkKind::FuncDef,
            ChunkKind::LabelColon,
            ChunkKind::QColon,
            ChunkKind::VSemicolon,
            ChunkKind::SParenOpen,
        ] {
            assert_eq!(kind.stability(), Stability::Derived, "{kind:?}");
        }
    }

    #[test]
    fn literals_are_terminal() {
        for kind in [
            ChunkKind::Number,
            ChunkKind::NumberFp,
            ChunkKind::String,
            ChunkKind::StringMulti,
            ChunkKind::CommentCpp,
            ChunkKind::Newline,
        ] {
            assert_eq!(kind.stability(), Stability::Terminal, "{kind:?}");
        }
    }
}
