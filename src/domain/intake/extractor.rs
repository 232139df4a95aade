//! Field extraction from caller utterances.
//!
//! Deliberately minimal NLU: each extractor is a pattern match over the raw
//! transcript text. The `FieldExtractor` seam exists so stricter extraction
//! can later replace pattern matching without touching the state machine.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches "my name is X" / "i am X" and captures X (letters and spaces).
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:my name is|i am)\s+([a-z][a-z ]*)").expect("name pattern"));

/// Matches a 10-digit number in 3-3-4 grouping, separators `-`, `.`, space,
/// or none.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern"));

/// Extracts one structured field from a raw utterance.
///
/// Returns `None` on mismatch; the engine answers a mismatch with a
/// same-phase re-prompt, never a placeholder value.
pub trait FieldExtractor: Send + Sync {
    fn extract(&self, utterance: &str) -> Option<String>;
}

/// Name extraction via the scripted self-introduction patterns.
///
/// Only letters and spaces are captured, so trailing punctuation never
/// leaks into the stored name. The capture is trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameExtractor;

impl FieldExtractor for NameExtractor {
    fn extract(&self, utterance: &str) -> Option<String> {
        let captures = NAME_RE.captures(utterance)?;
        let name = captures.get(1)?.as_str().trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

/// Callback-number extraction.
///
/// The matched substring is returned verbatim, original separators
/// included, so "555-123-4567" stays "555-123-4567".
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneExtractor;

impl FieldExtractor for PhoneExtractor {
    fn extract(&self, utterance: &str) -> Option<String> {
        PHONE_RE.find(utterance).map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod name_extraction {
        use super::*;

        #[test]
        fn extracts_from_my_name_is() {
            let name = NameExtractor.extract("My name is John Doe");
            assert_eq!(name.as_deref(), Some("John Doe"));
        }

        #[test]
        fn extracts_from_i_am() {
            let name = NameExtractor.extract("Hi, I am Jane");
            assert_eq!(name.as_deref(), Some("Jane"));
        }

        #[test]
        fn match_is_case_insensitive() {
            let name = NameExtractor.extract("MY NAME IS MARIA LOPEZ");
            assert_eq!(name.as_deref(), Some("MARIA LOPEZ"));
        }

        #[test]
        fn trailing_punctuation_is_not_captured() {
            let name = NameExtractor.extract("my name is Maria Lopez.");
            assert_eq!(name.as_deref(), Some("Maria Lopez"));
        }

        #[test]
        fn result_is_trimmed() {
            let name = NameExtractor.extract("I am   Bob   ");
            assert_eq!(name.as_deref(), Some("Bob"));
        }

        #[test]
        fn utterance_without_pattern_does_not_match() {
            assert!(NameExtractor.extract("it's John").is_none());
            assert!(NameExtractor.extract("").is_none());
        }

        #[test]
        fn digits_are_not_a_name() {
            assert!(NameExtractor.extract("my name is 12345").is_none());
        }
    }

    mod phone_extraction {
        use super::*;

        #[test]
        fn accepts_all_supported_groupings() {
            for raw in ["555-123-4567", "555.123.4567", "5551234567", "555 123 4567"] {
                let matched = PhoneExtractor.extract(raw);
                assert_eq!(matched.as_deref(), Some(raw), "should accept {raw}");
            }
        }

        #[test]
        fn keeps_original_separators_verbatim() {
            let matched = PhoneExtractor.extract("My number is 555-123-4567");
            assert_eq!(matched.as_deref(), Some("555-123-4567"));
        }

        #[test]
        fn rejects_short_numbers() {
            assert!(PhoneExtractor.extract("12345").is_none());
            assert!(PhoneExtractor.extract("call me back").is_none());
            assert!(PhoneExtractor.extract("").is_none());
        }
    }

    proptest! {
        #[test]
        fn any_three_three_four_grouping_matches(
            area in "[0-9]{3}",
            prefix in "[0-9]{3}",
            line in "[0-9]{4}",
            sep1 in prop_oneof![Just(""), Just("-"), Just("."), Just(" ")],
            sep2 in prop_oneof![Just(""), Just("-"), Just("."), Just(" ")],
        ) {
            let raw = format!("{area}{sep1}{prefix}{sep2}{line}");
            let matched = PhoneExtractor.extract(&raw);
            prop_assert_eq!(matched.as_deref(), Some(raw.as_str()));
        }

        #[test]
        fn digit_runs_shorter_than_ten_never_match(digits in "[0-9]{1,9}") {
            prop_assert!(PhoneExtractor.extract(&digits).is_none());
        }
    }
}
