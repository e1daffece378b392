//! Fuzzy matching utilities for command suggestions.
//!
//! When the user types an unknown command word, the matcher proposes known
//! commands by prefix first and by edit distance second.

pub mod command_matcher;

pub use command_matcher::{CommandMatcher, Suggestion};
