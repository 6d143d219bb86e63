//! Flag types shared by tokens.

bitflags::bitflags! {
    /// Extra information about a scanned token, orthogonal to its kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u8 {
        const NONE         = 0;
        /// A string literal that was closed by end of input rather than a
        /// quote. The literal text is unaffected.
        const UNTERMINATED = 1 << 0;
    }
}

impl Default for TokenFlags {
    fn default() -> Self {
        TokenFlags::NONE
    }
}
