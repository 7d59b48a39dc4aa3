//! Fuzzy matching of client names against the history index.
//!
//! Used to prefill a new quote from a partially typed client name:
//! - Exact matching on the normalized name
//! - Prefix, substring and word-overlap matching with decreasing confidence

use crate::models::ClientEntry;

/// A match result with its confidence score.
#[derive(Debug, Clone)]
pub struct ClientMatch {
    /// The matched history entry
    pub client: ClientEntry,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,
}

/// Matcher over the deduplicated client history.
pub struct ClientMatcher;

impl Default for ClientMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientMatcher {
    /// Create a new matcher.
    pub fn new() -> Self {
        Self
    }

    /// Rank clients by how well their name matches the query.
    ///
    /// Results are sorted by confidence (highest first), then by name, and
    /// truncated to `max_results`. Scores below 30 are dropped.
    pub fn find_matches(
        &self,
        query: &str,
        clients: &[ClientEntry],
        max_results: usize,
    ) -> Vec<ClientMatch> {
        const MIN_CONFIDENCE: u8 = 30;

        let mut results: Vec<ClientMatch> = clients
            .iter()
            .filter_map(|client| {
                let confidence = Self::score(query, &client.name);
                if confidence >= MIN_CONFIDENCE {
                    Some(ClientMatch {
                        client: client.clone(),
                        confidence,
                    })
                } else {
                    None
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.client.name.cmp(&b.client.name))
        });
        results.truncate(max_results);
        results
    }

    /// Normalize a name: lowercase, collapsed whitespace.
    fn normalize(name: &str) -> String {
        name.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Score a query against a name, 0-100.
    fn score(query: &str, name: &str) -> u8 {
        let query = Self::normalize(query);
        let name = Self::normalize(name);

        if query.is_empty() || name.is_empty() {
            return 0;
        }

        if query == name {
            return 100;
        }

        if name.starts_with(&query) {
            return 85;
        }

        if name.contains(&query) {
            // Longer overlap relative to the full name scores higher
            let ratio = query.len() as f64 / name.len() as f64;
            return (50.0 + ratio * 30.0) as u8;
        }

        // Word overlap: any query word appearing as a name word
        let name_words: Vec<&str> = name.split(' ').collect();
        let matched = query
            .split(' ')
            .filter(|w| name_words.contains(w))
            .count();
        if matched > 0 {
            let ratio = matched as f64 / query.split(' ').count() as f64;
            return (30.0 + ratio * 20.0) as u8;
        }

        0
    }
}
