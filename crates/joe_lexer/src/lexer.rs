//! The Joe lexer.
//!
//! Single pass over the source bytes with one byte of lookahead to resolve
//! `==` and `!=`. Each call to [`Lexer::next_token`] produces exactly one
//! token and advances the cursor past it; once the cursor reaches the
//! sentinel, every further call returns the end-of-input token.

use crate::char_codes::*;
use joe_ast::token::Token;
use joe_ast::token_kind::TokenKind;
use joe_ast::types::TokenFlags;
use joe_core::text::TextSpan;
use joe_diagnostics::{messages, Diagnostic, DiagnosticCollection};

/// The lexer converts Joe source text into tokens.
///
/// Not reusable across inputs: create one per source string.
pub struct Lexer {
    /// The source text being scanned, never mutated.
    input: Vec<u8>,
    /// Index of the byte currently under the cursor.
    position: usize,
    /// Index of the next byte to read; `position + 1` outside of lookahead.
    read_position: usize,
    /// The byte at `position`, or 0 once the cursor has passed the end.
    ch: u8,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Lexer {
    /// Create a new lexer over the given source text. The cursor is advanced
    /// once so it holds the first byte (or the sentinel for empty input).
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.as_bytes().to_vec(),
            position: 0,
            read_position: 0,
            ch: NULL_BYTE,
            diagnostics: DiagnosticCollection::new(),
        };
        lexer.read_char();
        lexer
    }

    /// Get the accumulated diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// Scan and return the next token, advancing the cursor past it.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let token = match self.ch {
            // The cursor parks on the sentinel: no advance, so the terminal
            // state repeats on every subsequent call.
            NULL_BYTE => {
                return Token::new(
                    TokenKind::EndOfFile,
                    "",
                    TextSpan::empty(self.input.len() as u32),
                )
            }

            b'"' => self.read_string(start),

            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    self.two_byte_token(TokenKind::Eq, "==", start)
                } else {
                    self.single_byte_token(TokenKind::Assign)
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    self.two_byte_token(TokenKind::NotEq, "!=", start)
                } else {
                    self.single_byte_token(TokenKind::Bang)
                }
            }

            b'+' => self.single_byte_token(TokenKind::Plus),
            b'-' => self.single_byte_token(TokenKind::Minus),
            b'/' => self.single_byte_token(TokenKind::Slash),
            b'*' => self.single_byte_token(TokenKind::Asterisk),
            b'<' => self.single_byte_token(TokenKind::Lt),
            b'>' => self.single_byte_token(TokenKind::Gt),
            b';' => self.single_byte_token(TokenKind::Semicolon),
            b',' => self.single_byte_token(TokenKind::Comma),
            b'(' => self.single_byte_token(TokenKind::LParen),
            b')' => self.single_byte_token(TokenKind::RParen),
            b'{' => self.single_byte_token(TokenKind::LBrace),
            b'}' => self.single_byte_token(TokenKind::RBrace),
            b'[' => self.single_byte_token(TokenKind::LBracket),
            b']' => self.single_byte_token(TokenKind::RBracket),
            b':' => self.single_byte_token(TokenKind::Colon),

            // Identifier and number scanning leave the cursor on the byte
            // after the token, so they return without the trailing advance.
            c if is_letter(c) => {
                let literal = self.read_identifier();
                let kind = TokenKind::from_keyword(&literal).unwrap_or(TokenKind::Ident);
                return Token::new(
                    kind,
                    literal,
                    TextSpan::from_bounds(start as u32, self.position as u32),
                );
            }
            c if is_digit(c) => {
                let literal = self.read_number();
                return Token::new(
                    TokenKind::Int,
                    literal,
                    TextSpan::from_bounds(start as u32, self.position as u32),
                );
            }

            c => {
                let literal = (c as char).to_string();
                let span = TextSpan::from_bounds(start as u32, start as u32 + 1);
                self.diagnostics.add(Diagnostic::with_span(
                    span,
                    &messages::INVALID_CHARACTER,
                    &[literal.as_str()],
                ));
                Token::new(TokenKind::Illegal, literal, span)
            }
        };

        self.read_char();
        token
    }

    /// Advance the cursor by one byte.
    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied().unwrap_or(NULL_BYTE);
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Look at the next byte without consuming it.
    #[inline]
    fn peek_char(&self) -> u8 {
        self.input.get(self.read_position).copied().unwrap_or(NULL_BYTE)
    }

    /// Consume whitespace; it is never represented as tokens.
    fn skip_whitespace(&mut self) {
        while is_white_space(self.ch) {
            self.read_char();
        }
    }

    /// A token for the single byte under the cursor.
    fn single_byte_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            (self.ch as char).to_string(),
            TextSpan::from_bounds(self.position as u32, self.position as u32 + 1),
        )
    }

    /// A token for a two-byte operator whose second byte is under the cursor.
    fn two_byte_token(&self, kind: TokenKind, literal: &'static str, start: usize) -> Token {
        Token::new(
            kind,
            literal,
            TextSpan::from_bounds(start as u32, self.position as u32 + 1),
        )
    }

    /// Scan the maximal run of letters starting at the cursor.
    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    /// Scan the maximal run of digits starting at the cursor.
    fn read_number(&mut self) -> String {
        let start = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    /// Scan a string literal. The cursor is on the opening quote; afterwards
    /// it is parked on the closing quote (or the sentinel) so the caller's
    /// trailing advance steps past it.
    ///
    /// No escape processing. A literal cut off by end of input is silently
    /// closed there; the token stream is unchanged but the token is flagged
    /// and a diagnostic recorded.
    fn read_string(&mut self, start: usize) -> Token {
        let content_start = self.position + 1;
        let closing_quote = memchr::memchr(b'"', &self.input[content_start..])
            .map(|offset| content_start + offset);
        let content_end = closing_quote.unwrap_or(self.input.len());

        let literal =
            String::from_utf8_lossy(&self.input[content_start..content_end]).into_owned();

        // Re-park the cursor on the terminator.
        self.position = content_end;
        self.read_position = content_end + 1;
        self.ch = if closing_quote.is_some() {
            b'"'
        } else {
            NULL_BYTE
        };

        let span_end = if closing_quote.is_some() {
            content_end + 1
        } else {
            content_end
        };
        let span = TextSpan::from_bounds(start as u32, span_end as u32);
        let mut token = Token::new(TokenKind::String, literal, span);
        if closing_quote.is_none() {
            token.flags |= TokenFlags::UNTERMINATED;
            self.diagnostics.add(Diagnostic::with_span(
                span,
                &messages::UNTERMINATED_STRING_LITERAL,
                &[],
            ));
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_tokens() {
        let mut lexer = Lexer::new("=+-!/*<>;,(){}[]:");
        let expected = [
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Slash,
            TokenKind::Asterisk,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Colon,
        ];
        for kind in expected {
            assert_eq!(lexer.next_token().kind, kind);
        }
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_two_byte_operators() {
        let mut lexer = Lexer::new("== != = !");
        assert_eq!(lexer.next_token().kind, TokenKind::Eq);
        assert_eq!(lexer.next_token().kind, TokenKind::NotEq);
        assert_eq!(lexer.next_token().kind, TokenKind::Assign);
        assert_eq!(lexer.next_token().kind, TokenKind::Bang);
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::EndOfFile);
        assert_eq!(tok.literal, "");
        assert!(tok.span.is_empty());
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        for _ in 0..5 {
            let tok = lexer.next_token();
            assert_eq!(tok.kind, TokenKind::EndOfFile);
            assert_eq!(tok.literal, "");
        }
    }

    #[test]
    fn test_identifier_stops_at_digit() {
        // Digits are not permitted mid-identifier in this grammar.
        let mut lexer = Lexer::new("abc123");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.literal, "abc");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Int);
        assert_eq!(tok.literal, "123");
    }

    #[test]
    fn test_spans() {
        let mut lexer = Lexer::new("let x == 5");
        let tok = lexer.next_token();
        assert_eq!(tok.span, TextSpan::from_bounds(0, 3));
        let tok = lexer.next_token();
        assert_eq!(tok.span, TextSpan::from_bounds(4, 5));
        let tok = lexer.next_token();
        assert_eq!(tok.span, TextSpan::from_bounds(6, 8));
        let tok = lexer.next_token();
        assert_eq!(tok.span, TextSpan::from_bounds(9, 10));
        let tok = lexer.next_token();
        assert_eq!(tok.span, TextSpan::empty(10));
    }

    #[test]
    fn test_string_span_includes_quotes() {
        let mut lexer = Lexer::new(r#""foo""#);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.literal, "foo");
        assert_eq!(tok.span, TextSpan::from_bounds(0, 5));
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_illegal_byte_records_diagnostic() {
        let mut lexer = Lexer::new("a @ b");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Illegal);
        assert_eq!(tok.literal, "@");
        // Lexing continues after the illegal byte.
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
        assert_eq!(lexer.diagnostics().error_count(), 1);
    }

    #[test]
    fn test_unterminated_string_silently_closes() {
        let mut lexer = Lexer::new(r#""foo bar"#);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.literal, "foo bar");
        assert!(tok.is_unterminated());
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
        // Flagged on the side channel, not in the token stream.
        assert_eq!(lexer.diagnostics().len(), 1);
        assert!(!lexer.diagnostics().has_errors());
    }

    #[test]
    fn test_take_diagnostics() {
        let mut lexer = Lexer::new("?");
        lexer.next_token();
        let diags = lexer.take_diagnostics();
        assert_eq!(diags.len(), 1);
        assert!(lexer.diagnostics().is_empty());
    }
}
