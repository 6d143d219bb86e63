//! The token type produced by the lexer and held by AST nodes.

use crate::token_kind::TokenKind;
use crate::types::TokenFlags;
use joe_core::text::TextSpan;

/// A single lexical token.
///
/// `literal` is the exact text the token was scanned from: the payload for
/// identifiers, integers and strings (quotes stripped), the spelling for
/// operators and delimiters, and empty for end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The text of the token.
    pub literal: String,
    /// Where the token came from in the source, including any quotes.
    pub span: TextSpan,
    /// Extra scan information (unterminated string, etc.).
    pub flags: TokenFlags,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: TextSpan) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
            flags: TokenFlags::NONE,
        }
    }

    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether this is the terminal end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Whether the token was closed by end of input instead of a terminator.
    #[inline]
    pub fn is_unterminated(&self) -> bool {
        self.flags.contains(TokenFlags::UNTERMINATED)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.kind.display_name(), self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let tok = Token::new(TokenKind::Let, "let", TextSpan::from_bounds(0, 3));
        assert_eq!(tok.to_string(), "LET 'let'");
        assert!(!tok.is_eof());
        assert!(!tok.is_unterminated());
    }

    #[test]
    fn test_eof_token() {
        let tok = Token::new(TokenKind::EndOfFile, "", TextSpan::empty(10));
        assert!(tok.is_eof());
        assert_eq!(tok.literal, "");
    }
}
