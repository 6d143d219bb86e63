//! joe_lexer: Lexer/tokenizer for Joe source code.
//!
//! Converts source text into a stream of tokens, pulled one at a time via
//! [`Lexer::next_token`] until the end-of-input token is observed. The lexer
//! is total: unrecognized bytes become `Illegal` tokens and every other
//! recoverable condition is reported through the diagnostics side channel,
//! never as a failure.

mod char_codes;
mod lexer;

pub use joe_ast::token::Token;
pub use lexer::Lexer;
