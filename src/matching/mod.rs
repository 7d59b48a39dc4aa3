//! Fuzzy matching for client history prefill.

mod client_matcher;

pub use client_matcher::{ClientMatch, ClientMatcher};
