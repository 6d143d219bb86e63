//! joe_core: Core utilities for the Joe compiler.
//!
//! Provides the fundamental types shared by the rest of the pipeline,
//! currently text spans for source location tracking.

pub mod text;

// Re-export commonly used types
pub use text::{TextPos, TextSpan};
