//! Fuzzy matching of contact names.
//!
//! This module scores how well a query matches a contact name:
//! - Exact matching after normalization
//! - Substring matching scaled by how much of the name is covered
//! - Levenshtein similarity for typos
//! - Confidence scoring (0-100 scale)

/// A match result containing a name and its confidence score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The matched name
    pub name: &'a str,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,
}

/// Name matcher with exact and fuzzy matching.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameMatcher;

impl NameMatcher {
    /// Create a new NameMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find names matching `query`.
    ///
    /// # Arguments
    /// * `query` - Name (or part of one) to search for
    /// * `names` - Candidate names
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold (0-100)
    ///
    /// # Returns
    /// A vector of MatchResult, sorted by confidence (highest first)
    pub fn find_matches<'a, I>(
        &self,
        query: &str,
        names: I,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut results: Vec<MatchResult<'a>> = names
            .into_iter()
            .filter_map(|name| {
                let confidence = self.score(query, name)?;
                (confidence >= min_confidence).then_some(MatchResult { name, confidence })
            })
            .collect();

        // Sort by confidence (highest first), then by name
        results.sort_by(|a, b| b.confidence.cmp(&a.confidence).then_with(|| a.name.cmp(b.name)));
        results.truncate(max_results);

        results
    }

    /// Score `query` against one name.
    ///
    /// Returns confidence score (1-100) if matched, None otherwise.
    pub fn score(&self, query: &str, name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(name);

        match Self::calculate_fuzzy_score(&query_normalized, &name_normalized) {
            0 => None,
            score => Some(score),
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 100;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        // Contains match (substring)
        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8; // 10-95 range for contains matches
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            // Too many differences
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8 // Scale to 0-85 range
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
