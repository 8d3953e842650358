//! Lexical utilities for the scoring heuristics
//!
//! A tiny, fast tokenizer plus the closed word sets the scoring engine
//! matches against. Deliberately token-level only; replace with semantic
//! similarity if scoring ever needs to be smarter than transparent.

/// Article/preposition/conjunction-class words dropped before scoring
const STOPWORDS: &[&str] = &[
    "the", "is", "in", "and", "to", "a", "of", "for", "on", "that", "with", "as", "are", "it",
    "this", "be", "by", "or", "an", "from",
];

/// Words treated as citations of evidence when scoring argument strength
pub const EVIDENCE_WORDS: &[&str] = &[
    "study",
    "data",
    "research",
    "statistics",
    "survey",
    "evidence",
    "report",
    "finding",
    "analysis",
];

/// Logical connectors rewarded when scoring argument strength
pub const CONNECTOR_WORDS: &[&str] = &[
    "therefore",
    "because",
    "thus",
    "hence",
    "however",
    "moreover",
    "furthermore",
    "consequently",
];

/// Lowercase, split on non-word-character runs, drop empties and stopwords.
///
/// Pure and total: never fails, empty input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty() && !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Climate Change: rising CO2!"),
            vec!["climate", "change", "rising", "co2"]
        );
    }

    #[test]
    fn test_stopwords_dropped() {
        assert_eq!(
            tokenize("the data is in the report"),
            vec!["data", "report"]
        );
    }

    #[test]
    fn test_only_stopwords_yields_empty() {
        assert!(tokenize("the and of").is_empty());
    }
}
