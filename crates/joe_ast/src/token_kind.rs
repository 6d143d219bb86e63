//! TokenKind enum - every token kind in the Joe language.
//!
//! The set is closed: the lexer can only ever produce these 32 kinds.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// A byte the lexer could not classify.
    Illegal = 0,
    /// End of input; repeats forever once reached.
    EndOfFile = 1,

    // Identifiers + literals
    Ident = 2,
    Int = 3,
    String = 4,

    // Operators
    Assign = 5,
    Plus = 6,
    Minus = 7,
    Bang = 8,
    Asterisk = 9,
    Slash = 10,
    Lt = 11,
    Gt = 12,
    Eq = 13,
    NotEq = 14,

    // Delimiters
    Comma = 15,
    Semicolon = 16,
    LParen = 17,
    RParen = 18,
    LBrace = 19,
    RBrace = 20,
    LBracket = 21,
    RBracket = 22,
    Colon = 23,

    // Keywords
    Function = 24,
    Let = 25,
    True = 26,
    False = 27,
    If = 28,
    Else = 29,
    Return = 30,
    Macro = 31,
}

/// The reserved words of the language, built once and immutable thereafter.
fn keyword_table() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        let mut table = FxHashMap::default();
        table.insert("fn", TokenKind::Function);
        table.insert("let", TokenKind::Let);
        table.insert("true", TokenKind::True);
        table.insert("false", TokenKind::False);
        table.insert("if", TokenKind::If);
        table.insert("else", TokenKind::Else);
        table.insert("return", TokenKind::Return);
        table.insert("macro", TokenKind::Macro);
        table
    })
}

impl TokenKind {
    /// Look up an identifier-shaped string in the keyword table.
    /// Returns `None` unless the text exactly matches a reserved word.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        keyword_table().get(text).copied()
    }

    /// Whether this kind is a reserved word.
    pub fn is_keyword(&self) -> bool {
        *self >= TokenKind::Function
    }

    /// The human-readable name of this kind, used for diagnostics and the
    /// interactive loop. Never consulted for lexing decisions.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfFile => "EOF",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::Int => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Bang => "BANG",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Lt => "LESS THAN",
            TokenKind::Gt => "GREATER THAN",
            TokenKind::Eq => "EQUALS",
            TokenKind::NotEq => "NOT EQUALS",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LEFT PARENTHESES",
            TokenKind::RParen => "RIGHT PARENTHESES",
            TokenKind::LBrace => "LEFT BRACE",
            TokenKind::RBrace => "RIGHT BRACE",
            TokenKind::LBracket => "LEFT BRACKET",
            TokenKind::RBracket => "RIGHT BRACKET",
            TokenKind::Colon => "COLON",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Macro => "MACRO",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::from_keyword("fn"), Some(TokenKind::Function));
        assert_eq!(TokenKind::from_keyword("let"), Some(TokenKind::Let));
        assert_eq!(TokenKind::from_keyword("true"), Some(TokenKind::True));
        assert_eq!(TokenKind::from_keyword("false"), Some(TokenKind::False));
        assert_eq!(TokenKind::from_keyword("if"), Some(TokenKind::If));
        assert_eq!(TokenKind::from_keyword("else"), Some(TokenKind::Else));
        assert_eq!(TokenKind::from_keyword("return"), Some(TokenKind::Return));
        assert_eq!(TokenKind::from_keyword("macro"), Some(TokenKind::Macro));
    }

    #[test]
    fn test_keyword_lookup_is_exact() {
        // Near misses are identifiers, not keywords.
        assert_eq!(TokenKind::from_keyword("lets"), None);
        assert_eq!(TokenKind::from_keyword("fnx"), None);
        assert_eq!(TokenKind::from_keyword("Fn"), None);
        assert_eq!(TokenKind::from_keyword("LET"), None);
        assert_eq!(TokenKind::from_keyword("macros"), None);
        assert_eq!(TokenKind::from_keyword("retur"), None);
        assert_eq!(TokenKind::from_keyword(""), None);
    }

    #[test]
    fn test_is_keyword() {
        assert!(TokenKind::Function.is_keyword());
        assert!(TokenKind::Macro.is_keyword());
        assert!(!TokenKind::Ident.is_keyword());
        assert!(!TokenKind::Colon.is_keyword());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TokenKind::Eq.display_name(), "EQUALS");
        assert_eq!(TokenKind::NotEq.display_name(), "NOT EQUALS");
        assert_eq!(TokenKind::EndOfFile.display_name(), "EOF");
        assert_eq!(TokenKind::Ident.display_name(), "IDENTIFIER");
        assert_eq!(TokenKind::Int.display_name(), "INTEGER");
        assert_eq!(TokenKind::LParen.display_name(), "LEFT PARENTHESES");
        assert_eq!(TokenKind::False.display_name(), "FALSE");
        assert_eq!(TokenKind::Lt.to_string(), "LESS THAN");
    }
}
