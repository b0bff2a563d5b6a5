//! Token definitions and the static lexical tables.
//!
//! A [`Token`] pairs a [`TokenKind`] category with the lexeme text it was
//! scanned from, plus the line/column it starts at. The keyword, operator,
//! and escape tables in this module are the only shared state the lexer
//! consults; they are built once on first use and never mutated, so any
//! number of concurrent parses can read them without synchronization.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fmt;

/// Line/column position in the source text (both 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// All token categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Identifiers and literals
    Ident,
    IntLit,
    FloatLit,
    CharLit,
    StrLit,
    BoolLit,

    // Type keywords
    KwInt,
    KwFloat,
    KwChar,
    KwBool,
    KwVoid,

    // Control keywords
    KwStruct,
    KwIf,
    KwElse,
    KwWhile,
    KwDo,
    KwFor,
    KwReturn,
    KwBreak,
    KwContinue,
    KwAssert,
    KwConst,
    KwExit,
    KwPrint,
    KwRead,
    KwSizeof,

    // Arithmetic
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %

    // Assignment
    Assign,        // =
    PlusAssign,    // +=
    MinusAssign,   // -=
    StarAssign,    // *=
    SlashAssign,   // /=
    PercentAssign, // %=

    // Comparison
    Eq,    // ==
    NotEq, // !=
    Lt,    // <
    Gt,    // >
    Le,    // <=
    Ge,    // >=

    // Logical
    AndAnd, // &&
    OrOr,   // ||
    Not,    // !

    // Bitwise
    Amp,   // &
    Pipe,  // |
    Caret, // ^
    Tilde, // ~
    Shl,   // <<
    Shr,   // >>

    // Increment/decrement
    Increment, // ++
    Decrement, // --

    // Ternary
    Question, // ?
    Colon,    // :

    // Punctuation
    Comma,     // ,
    Semicolon, // ;
    Dot,       // .
    Arrow,     // ->
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    LBracket,  // [
    RBracket,  // ]

    // End of input
    Eof,
}

impl TokenKind {
    /// True for `int`, `float`, `char`, `bool`, and `void`.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KwInt
                | TokenKind::KwFloat
                | TokenKind::KwChar
                | TokenKind::KwBool
                | TokenKind::KwVoid
        )
    }
}

/// A classified lexical unit: category plus the lexeme text backing it.
///
/// Tokens are immutable once produced; the parser only reads them by
/// position. For char literals `text` holds the decoded character, for
/// string literals the enclosed bytes verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident => write!(f, "identifier '{}'", self.text),
            TokenKind::IntLit => write!(f, "int literal {}", self.text),
            TokenKind::FloatLit => write!(f, "float literal {}", self.text),
            TokenKind::BoolLit => write!(f, "bool literal {}", self.text),
            TokenKind::CharLit => write!(f, "char literal '{}'", self.text.escape_default()),
            TokenKind::StrLit => write!(f, "string literal \"{}\"", self.text),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Reserved words, looked up after scanning a maximal identifier run.
pub static KEYWORDS: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    [
        ("int", TokenKind::KwInt),
        ("float", TokenKind::KwFloat),
        ("char", TokenKind::KwChar),
        ("bool", TokenKind::KwBool),
        ("void", TokenKind::KwVoid),
        ("struct", TokenKind::KwStruct),
        ("if", TokenKind::KwIf),
        ("else", TokenKind::KwElse),
        ("while", TokenKind::KwWhile),
        ("do", TokenKind::KwDo),
        ("for", TokenKind::KwFor),
        ("return", TokenKind::KwReturn),
        ("break", TokenKind::KwBreak),
        ("continue", TokenKind::KwContinue),
        ("assert", TokenKind::KwAssert),
        ("const", TokenKind::KwConst),
        ("exit", TokenKind::KwExit),
        ("print", TokenKind::KwPrint),
        ("read", TokenKind::KwRead),
        ("sizeof", TokenKind::KwSizeof),
    ]
    .into_iter()
    .collect()
});

/// Operator and punctuator lexemes. Every multi-character entry has all of
/// its prefixes in the table as well, which is what lets the lexer extend a
/// match one character at a time (maximal munch).
pub static OPERATORS: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    [
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("%", TokenKind::Percent),
        ("=", TokenKind::Assign),
        ("+=", TokenKind::PlusAssign),
        ("-=", TokenKind::MinusAssign),
        ("*=", TokenKind::StarAssign),
        ("/=", TokenKind::SlashAssign),
        ("%=", TokenKind::PercentAssign),
        ("==", TokenKind::Eq),
        ("!=", TokenKind::NotEq),
        ("<", TokenKind::Lt),
        (">", TokenKind::Gt),
        ("<=", TokenKind::Le),
        (">=", TokenKind::Ge),
        ("&&", TokenKind::AndAnd),
        ("||", TokenKind::OrOr),
        ("!", TokenKind::Not),
        ("&", TokenKind::Amp),
        ("|", TokenKind::Pipe),
        ("^", TokenKind::Caret),
        ("~", TokenKind::Tilde),
        ("<<", TokenKind::Shl),
        (">>", TokenKind::Shr),
        ("++", TokenKind::Increment),
        ("--", TokenKind::Decrement),
        ("?", TokenKind::Question),
        (":", TokenKind::Colon),
        (",", TokenKind::Comma),
        (";", TokenKind::Semicolon),
        (".", TokenKind::Dot),
        ("->", TokenKind::Arrow),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("{", TokenKind::LBrace),
        ("}", TokenKind::RBrace),
        ("[", TokenKind::LBracket),
        ("]", TokenKind::RBracket),
    ]
    .into_iter()
    .collect()
});

/// Escape sequences honored inside character literals, mapped to their
/// decoded values. String literals take their bytes verbatim and never
/// consult this table.
pub static CHAR_ESCAPES: Lazy<FxHashMap<char, char>> = Lazy::new(|| {
    [
        ('a', '\x07'),
        ('b', '\x08'),
        ('f', '\x0c'),
        ('n', '\n'),
        ('r', '\r'),
        ('t', '\t'),
        ('v', '\x0b'),
        ('\\', '\\'),
        ('\'', '\''),
        ('"', '"'),
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_covers_types_and_control() {
        assert_eq!(KEYWORDS.get("int"), Some(&TokenKind::KwInt));
        assert_eq!(KEYWORDS.get("assert"), Some(&TokenKind::KwAssert));
        assert_eq!(KEYWORDS.get("sizeof"), Some(&TokenKind::KwSizeof));
        assert_eq!(KEYWORDS.get("true"), None);
        assert_eq!(KEYWORDS.get("main"), None);
    }

    #[test]
    fn test_operator_prefix_closure() {
        // Maximal munch relies on every prefix of a multi-char operator
        // being a table entry itself.
        for op in OPERATORS.keys().filter(|op| op.len() > 1) {
            let prefix = &op[..op.len() - 1];
            assert!(
                OPERATORS.contains_key(prefix),
                "operator '{}' has unknown prefix '{}'",
                op,
                prefix
            );
        }
    }

    #[test]
    fn test_char_escape_decoding() {
        assert_eq!(CHAR_ESCAPES.get(&'n'), Some(&'\n'));
        assert_eq!(CHAR_ESCAPES.get(&'v'), Some(&'\x0b'));
        assert_eq!(CHAR_ESCAPES.get(&'z'), None);
    }
}
