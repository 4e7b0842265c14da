//! Fuzzy matching utilities for contact lookup.
//!
//! This module provides exact and fuzzy matching of contact names.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{MatchResult, NameMatcher};
