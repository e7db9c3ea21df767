//! Configuration types
//!
//! Board-agnostic link configuration, parsed from the `link.toml` text the
//! firmware embeds at compile time.

pub mod parse;
pub mod types;

pub use types::*;
