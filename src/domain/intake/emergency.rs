//! Emergency language detection.
//!
//! Classifies a single utterance as emergency/non-emergency by keyword
//! membership. Matching is substring containment over the lowercased
//! utterance, not word-boundary-aware; that looseness is preserved exactly
//! for compatibility with the upstream platform scripts, at the cost of
//! false positives on partial-word matches.

use serde::{Deserialize, Serialize};

/// Keywords compiled in when no keyword file is configured.
pub const DEFAULT_EMERGENCY_KEYWORDS: &[&str] = &[
    "burst pipe",
    "flooding",
    "flood",
    "gas leak",
    "sewage",
    "water everywhere",
    "no running water",
    "emergency",
];

/// A process-wide, read-only set of lowercase phrases loaded once at
/// startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyKeywordSet {
    phrases: Vec<String>,
}

impl EmergencyKeywordSet {
    /// Builds a set from arbitrary phrases, lowercasing and trimming each
    /// and dropping empties.
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = Vec::new();
        for phrase in phrases {
            let normalized = phrase.as_ref().trim().to_lowercase();
            if !normalized.is_empty() && !seen.contains(&normalized) {
                seen.push(normalized);
            }
        }
        Self { phrases: seen }
    }

    /// The compiled-in default keyword set.
    pub fn defaults() -> Self {
        Self::from_phrases(DEFAULT_EMERGENCY_KEYWORDS.iter().copied())
    }

    /// Parses keyword-file content: one phrase per line, blank lines and
    /// `#` comment lines skipped.
    pub fn from_file_content(content: &str) -> Self {
        Self::from_phrases(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Returns true if no phrases are loaded.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Number of loaded phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    fn matches(&self, normalized_utterance: &str) -> bool {
        self.phrases
            .iter()
            .any(|phrase| normalized_utterance.contains(phrase.as_str()))
    }
}

/// Classifies a single utterance as emergency or not.
///
/// The engine consults the classifier at most once per call: the sticky
/// `emergency_detected` gate short-circuits every later turn.
pub trait EmergencyClassifier: Send + Sync {
    fn is_emergency(&self, utterance: &str) -> bool;
}

/// Classifies utterances against a fixed keyword set.
///
/// Pure and stateless: the detector holds only the read-only set. An empty
/// set (including one from a failed config load) makes every utterance
/// non-emergency, so a missing keyword file never blocks intake.
#[derive(Debug, Clone, Default)]
pub struct EmergencyDetector {
    keywords: EmergencyKeywordSet,
}

impl EmergencyDetector {
    /// Creates a detector over the given keyword set.
    pub fn new(keywords: EmergencyKeywordSet) -> Self {
        Self { keywords }
    }

    /// Creates a detector over the compiled-in defaults.
    pub fn with_defaults() -> Self {
        Self::new(EmergencyKeywordSet::defaults())
    }

    /// Returns true iff the lowercased utterance contains at least one
    /// keyword as a substring.
    pub fn is_emergency(&self, utterance: &str) -> bool {
        if self.keywords.is_empty() {
            return false;
        }
        self.keywords.matches(&utterance.to_lowercase())
    }
}

impl EmergencyClassifier for EmergencyDetector {
    fn is_emergency(&self, utterance: &str) -> bool {
        EmergencyDetector::is_emergency(self, utterance)
    }
}
