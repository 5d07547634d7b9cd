//! Order-completion gate.
//!
//! A customer is treated as done ordering once they say where they will eat it. This is a
//! keyword heuristic over a single utterance, not language understanding: "I'd love to go
//! to Paris" also trips it. Callers accept that.

use once_cell::sync::Lazy;
use regex::Regex;

// A word pair may be joined by any run of whitespace (including none) or by a single hyphen.
static COMPLETION_PHRASES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)for(?:\s*|-)here|dine(?:\s*|-)in|stay(?:\s*|-)here|to(?:\s*|-)go|take(?:\s*|-)(?:away|out)|carry(?:\s*|-)out",
    )
    .expect("valid completion regex")
});

/// True when the utterance names a dine-in or takeaway option.
pub fn is_complete(utterance: &str) -> bool {
    COMPLETION_PHRASES.is_match(utterance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_phrases_match_in_any_form() {
        for phrase in [
            "for here",
            "FOR HERE",
            "forhere",
            "for-here",
            "dine in",
            "Dine-In",
            "stay here",
            "to go",
            "to-go",
            "togo",
            "take away",
            "takeaway",
            "take out",
            "Take-Out",
            "carry out",
            "carryout",
        ] {
            assert!(is_complete(phrase), "expected completion for {phrase:?}");
        }
    }

    #[test]
    fn test_phrase_inside_sentence() {
        assert!(is_complete("I'll have it To-Go"));
        assert!(is_complete("that's all, for here please."));
    }

    #[test]
    fn test_pattern_compiles() {
        Lazy::force(&COMPLETION_PHRASES);
    }

    #[test]
    fn test_ordinary_utterances_do_not_match() {
        assert!(!is_complete("large please"));
        assert!(!is_complete("a latte with oat milk"));
        assert!(!is_complete(""));
        assert!(!is_complete("to  -  go"));
    }
}
