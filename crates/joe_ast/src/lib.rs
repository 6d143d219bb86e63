//! joe_ast: Token vocabulary and AST definitions for the Joe language.
//!
//! Defines the closed `TokenKind` enum with its keyword table and display
//! names, token flags, and the AST node data holders. The grammar is fixed
//! and finite, so nodes are closed tagged-variant enums rather than an open
//! class hierarchy.

pub mod node;
pub mod token;
pub mod token_kind;
pub mod types;

// Re-export key types
pub use node::*;
pub use token::Token;
pub use token_kind::TokenKind;
pub use types::TokenFlags;
