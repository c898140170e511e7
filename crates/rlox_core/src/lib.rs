//! rlox_core: Core utilities for the rlox interpreter.
//!
//! Provides the source-text primitives shared by the front-end crates.

pub mod text;

// Re-export commonly used types
pub use text::{TextPos, TextSpan};
