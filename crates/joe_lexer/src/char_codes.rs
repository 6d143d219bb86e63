//! Byte classification helpers used by the lexer.
//!
//! The lexer scans byte-by-byte; source is treated as ASCII and multi-byte
//! sequences fall out as `Illegal` tokens.

/// The sentinel the cursor holds once it has passed the end of input.
pub const NULL_BYTE: u8 = 0;

/// Whether a byte can appear in an identifier. Identifiers are runs of
/// ASCII letters only; digits terminate them.
#[inline]
pub fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic()
}

/// Whether a byte is a decimal digit.
#[inline]
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Whether a byte is whitespace the lexer consumes silently.
#[inline]
pub fn is_white_space(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}
