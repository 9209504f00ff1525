//! Fuzzy row filtering using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched row in the current page.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Score each haystack against a fuzzy query.
///
/// Returns matches sorted by score descending, ties broken by row order.
/// An empty query matches every row with score 0, preserving row order.
pub fn fuzzy_filter(query: &str, haystacks: &[String]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return haystacks
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let mut matches: Vec<FilterMatch> = haystacks
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            let haystack = Utf32Str::new(text, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
    matches
}
