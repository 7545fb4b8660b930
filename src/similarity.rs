//! Normalized string similarity scorers.
//!
//! Footer fingerprinting only needs a symmetric score in `[0, 1]` where
//! identical strings score `1.0`. [`Similarity`] captures that contract so
//! any scorer (a built-in [`SimilarityMetric`], a custom type, or a plain
//! closure) can be plugged into the pipeline.
//!
//! # Example
//!
//! ```
//! use unfurnish::similarity::{Similarity, SimilarityMetric};
//!
//! let score = SimilarityMetric::default().similarity("Sheet 9", "Sheet 10");
//! assert!(score > 0.79);
//!
//! let exact = |a: &str, b: &str| if a == b { 1.0 } else { 0.0 };
//! assert_eq!(exact.similarity("x", "x"), 1.0);
//! ```

use serde::{Deserialize, Serialize};

/// A normalized, symmetric string similarity score.
pub trait Similarity: Send + Sync {
    /// Score two strings in `[0, 1]`; `similarity(a, a)` is `1.0`.
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Similarity for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// Built-in similarity scorers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityMetric {
    /// Insertion/deletion distance normalized by the combined length,
    /// `2 * LCS / (len(a) + len(b))`
    #[default]
    Indel,
    /// Levenshtein distance normalized by the longer string
    Levenshtein,
    /// Jaro-Winkler (rewards shared prefixes)
    JaroWinkler,
    /// Sørensen-Dice over character bigrams
    SorensenDice,
}

impl SimilarityMetric {
    /// All built-in metrics.
    pub const ALL: [SimilarityMetric; 4] = [
        SimilarityMetric::Indel,
        SimilarityMetric::Levenshtein,
        SimilarityMetric::JaroWinkler,
        SimilarityMetric::SorensenDice,
    ];
}

impl Similarity for SimilarityMetric {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        let score = match self {
            SimilarityMetric::Indel => indel_ratio(a, b),
            SimilarityMetric::Levenshtein => strsim::normalized_levenshtein(a, b),
            SimilarityMetric::JaroWinkler => strsim::jaro_winkler(a, b),
            SimilarityMetric::SorensenDice => strsim::sorensen_dice(a, b),
        };
        score.clamp(0.0, 1.0)
    }

    fn name(&self) -> &str {
        match self {
            SimilarityMetric::Indel => "indel",
            SimilarityMetric::Levenshtein => "levenshtein",
            SimilarityMetric::JaroWinkler => "jaro-winkler",
            SimilarityMetric::SorensenDice => "sorensen-dice",
        }
    }
}

/// `2 * LCS / (len(a) + len(b))`, i.e. one minus the normalized indel distance.
fn indel_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // Rolling single-row LCS table
    let mut row = vec![0usize; b.len() + 1];
    for ca in &a {
        let mut diagonal = 0;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    (2 * row[b.len()]) as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_one() {
        for metric in SimilarityMetric::ALL {
            assert_eq!(metric.similarity("Footer text 12", "Footer text 12"), 1.0);
            assert_eq!(metric.similarity("", ""), 1.0);
        }
    }

    #[test]
    fn test_scores_are_symmetric_and_bounded() {
        let pairs = [("Page 1", "Page 2"), ("abc", "xyz"), ("", "nonempty")];
        for metric in SimilarityMetric::ALL {
            for (a, b) in pairs {
                let ab = metric.similarity(a, b);
                let ba = metric.similarity(b, a);
                assert!((ab - ba).abs() < 1e-9, "{} not symmetric", metric.name());
                assert!((0.0..=1.0).contains(&ab));
            }
        }
    }

    #[test]
    fn test_page_numbers_are_similar() {
        let score = SimilarityMetric::Levenshtein.similarity("Page 1", "Page 2");
        assert!((score - 5.0 / 6.0).abs() < 1e-9);

        let score = SimilarityMetric::Indel.similarity("Page 1", "Page 2");
        assert!((score - 10.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_is_indel() {
        assert_eq!(SimilarityMetric::default(), SimilarityMetric::Indel);

        // Page numbers crossing a digit boundary stay within the default threshold
        let indel = SimilarityMetric::Indel.similarity("Sheet 9", "Sheet 10");
        assert!((indel - 0.8).abs() < 1e-9);
        assert!(indel >= 0.8);

        let levenshtein = SimilarityMetric::Levenshtein.similarity("Sheet 9", "Sheet 10");
        assert!((levenshtein - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_indel_ratio() {
        assert_eq!(indel_ratio("", ""), 1.0);
        assert_eq!(indel_ratio("abc", ""), 0.0);
        assert_eq!(indel_ratio("abc", "xyz"), 0.0);
        // LCS("kitten", "sitting") = "ittn"
        assert!((indel_ratio("kitten", "sitting") - 8.0 / 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_closure_scorer() {
        let always = |_: &str, _: &str| 0.25;
        assert_eq!(always.similarity("a", "b"), 0.25);
        assert_eq!(always.name(), "custom");
    }

    #[test]
    fn test_metric_serde_names() {
        let json = serde_json::to_string(&SimilarityMetric::JaroWinkler).unwrap();
        assert_eq!(json, "\"jaro-winkler\"");
        let metric: SimilarityMetric = serde_json::from_str("\"sorensen-dice\"").unwrap();
        assert_eq!(metric, SimilarityMetric::SorensenDice);
    }
}
