//! Cross-cutting helpers for the img2text plugin.
//!
//! # Submodules
//!
//! - `logging`: Tracing subscriber initialization.

pub mod logging;
