//! Profanity detection and masking.
//!
//! Every check runs twice: once over the raw text and once over its
//! [`normalize`]d form. Either pass is enough to flag the input. Masking maps
//! hits in the normalized text back onto the original by byte offset, which
//! is exact because normalization never changes token positions.

use std::ops::Range;
use std::sync::{Arc, OnceLock};

use tracing::{debug, warn};

use crate::lexicon::Lexicon;
use crate::mask::mask_spans;
use crate::normalize::{normalize, tokens};

/// Character used for masking when none is given.
pub const DEFAULT_REPLACEMENT: char = '*';

/// Outcome of [`ProfanityFilter::analyze`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "verdict", rename_all = "snake_case"))]
pub enum Verdict {
    /// Nothing disallowed was found.
    Clean,
    /// Disallowed terms were found.
    Profane {
        /// Offending words, direct matches first.
        words: Vec<String>,
        /// The masked text.
        cleaned: String,
    },
}

impl Verdict {
    /// True for [`Verdict::Clean`].
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Clean)
    }
}

/// Leetspeak-aware profanity filter over a shared [`Lexicon`].
///
/// Cheap to clone; the lexicon sits behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ProfanityFilter {
    lexicon: Arc<Lexicon>,
    replacement: char,
}

impl ProfanityFilter {
    /// Create a filter masking with [`DEFAULT_REPLACEMENT`].
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            replacement: DEFAULT_REPLACEMENT,
        }
    }

    /// Change the default masking character.
    pub fn with_replacement(mut self, replacement: char) -> Self {
        self.replacement = replacement;
        self
    }

    /// Process-wide filter over [`Lexicon::load`], built on first use.
    ///
    /// If the standard lexicon cannot be built the filter falls back to an
    /// empty lexicon and logs a warning.
    pub fn shared() -> &'static ProfanityFilter {
        static FILTER: OnceLock<ProfanityFilter> = OnceLock::new();
        FILTER.get_or_init(|| {
            let lexicon = Lexicon::load().unwrap_or_else(|err| {
                warn!(
                    error = %err,
                    code = err.error_code(),
                    "Failed to build profanity lexicon; filtering disabled"
                );
                Lexicon::empty()
            });
            ProfanityFilter::new(Arc::new(lexicon))
        })
    }

    /// The lexicon this filter matches against.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Default masking character.
    pub fn replacement(&self) -> char {
        self.replacement
    }

    /// True if `text` or its normalized form contains a disallowed term.
    ///
    /// Empty and whitespace-only input is never profane.
    pub fn contains_profanity(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.lexicon.contains(text) || self.lexicon.contains(&normalize(text))
    }

    /// Mask profanity with the filter's replacement character.
    pub fn clean_profanity(&self, text: &str) -> String {
        self.clean_profanity_with(text, self.replacement)
    }

    /// Mask profanity with `replacement`.
    ///
    /// Tokens whose normalized form matches are masked whole, keeping the
    /// length of what was actually typed: `"ch00t1y4"` becomes eight
    /// replacement characters. Obfuscated phrases spanning several tokens
    /// are masked over their exact span. A final plain pass over the result
    /// catches anything left unobfuscated.
    pub fn clean_profanity_with(&self, text: &str, replacement: char) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let normalized = normalize(text);
        if !self.lexicon.contains(&normalized) {
            return self.lexicon.clean(text, replacement);
        }

        let mut spans: Vec<Range<usize>> = tokens(&normalized)
            .filter(|(_, token)| self.lexicon.contains(token))
            .map(|(start, token)| start..start + token.len())
            .collect();
        let token_hits = spans.len();

        spans.extend(
            self.lexicon
                .find(&normalized)
                .into_iter()
                .filter(|span| normalized[span.clone()].contains(char::is_whitespace)),
        );
        debug!(
            tokens = token_hits,
            phrases = spans.len() - token_hits,
            "Masking obfuscated profanity"
        );

        let masked = mask_spans(text, spans, replacement);
        self.lexicon.clean(&masked, replacement)
    }

    /// Lowercased words that are disallowed, direct matches first.
    ///
    /// Words only caught after normalization follow, skipping any word
    /// already reported by the direct pass. Relative order is kept within
    /// each group. Words are classified in their original case, exactly as
    /// [`contains_profanity`](Self::contains_profanity) sees them.
    pub fn profane_words(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let words: Vec<&str> = text.split_whitespace().collect();

        let mut found: Vec<String> = words
            .iter()
            .filter(|word| self.lexicon.contains(word))
            .map(|word| word.to_lowercase())
            .collect();

        let obfuscated: Vec<String> = words
            .iter()
            .filter(|word| self.lexicon.contains(&normalize(word)))
            .map(|word| word.to_lowercase())
            .filter(|word| !found.contains(word))
            .collect();

        found.extend(obfuscated);
        found
    }

    /// Detect, list and mask in one call.
    pub fn analyze(&self, text: &str) -> Verdict {
        if !self.contains_profanity(text) {
            return Verdict::Clean;
        }
        Verdict::Profane {
            words: self.profane_words(text),
            cleaned: self.clean_profanity(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(words: &[&str]) -> ProfanityFilter {
        let lexicon = Lexicon::builder()
            .with_words(words.iter().copied())
            .build()
            .unwrap();
        ProfanityFilter::new(Arc::new(lexicon))
    }

    #[test]
    fn test_empty_input() {
        let filter = filter(&["chutiya"]);
        assert!(!filter.contains_profanity(""));
        assert!(!filter.contains_profanity("   "));
        assert_eq!(filter.clean_profanity(""), "");
        assert_eq!(filter.clean_profanity(" \t"), " \t");
        assert!(filter.profane_words("").is_empty());
        assert_eq!(filter.analyze(""), Verdict::Clean);
    }

    #[test]
    fn test_direct_match() {
        let filter = filter(&["chutiya"]);
        assert!(filter.contains_profanity("tu chutiya hai"));
        assert_eq!(filter.clean_profanity("tu chutiya hai"), "tu ******* hai");
    }

    #[test]
    fn test_leetspeak_mask_keeps_typed_length() {
        let filter = filter(&["chootiya"]);
        assert!(filter.contains_profanity("tu ch00t1y4 hai"));
        assert_eq!(filter.clean_profanity("tu ch00t1y4 hai"), "tu ******** hai");
    }

    #[test]
    fn test_masks_whole_token_with_punctuation() {
        let filter = filter(&["shit"]);
        assert_eq!(filter.clean_profanity("oh sh!t, again"), "oh ***** again");
    }

    #[test]
    fn test_repeated_token_masked_by_position() {
        let filter = filter(&["shit"]);
        // the first "5h1t" is a number-shaped token and is left alone
        assert_eq!(filter.clean_profanity("5h1t $h1t"), "5h1t ****");
        assert_eq!(
            filter.clean_profanity("sh1t is sh1t"),
            "**** is ****"
        );
    }

    #[test]
    fn test_obfuscated_phrase() {
        let filter = filter(&["behen chod"]);
        assert!(filter.contains_profanity("b3h3n ch0d"));
        assert_eq!(filter.clean_profanity("arre b3h3n ch0d"), "arre ***** ****");
    }

    #[test]
    fn test_custom_replacement() {
        let filter = filter(&["darn"]).with_replacement('#');
        assert_eq!(filter.replacement(), '#');
        assert_eq!(filter.clean_profanity("darn it"), "#### it");
        assert_eq!(filter.clean_profanity_with("d4rn it", '-'), "---- it");
    }

    #[test]
    fn test_clean_input_untouched() {
        let filter = filter(&["chutiya", "ass"]);
        let text = "I love hiking and recycling, classic!";
        assert!(!filter.contains_profanity(text));
        assert_eq!(filter.clean_profanity(text), text);
    }

    #[test]
    fn test_structured_tokens_not_normalized_into_hits() {
        // "$1t" would normalize to "sit" if it were not numeric
        let filter = filter(&["sit", "boob"]);
        assert!(!filter.contains_profanity("costs $1t"));
        assert!(!filter.contains_profanity("see www.b00b.example.org"));
    }

    #[test]
    fn test_profane_words_order_and_dedup() {
        let filter = filter(&["shit", "darn"]);
        let words = filter.profane_words("Sh1t happens, DARN it, shit");
        assert_eq!(words, vec!["darn", "shit", "sh1t"]);
    }

    #[test]
    fn test_analyze() {
        let filter = filter(&["darn"]);
        assert!(filter.analyze("all good").is_clean());
        assert_eq!(
            filter.analyze("d4rn it"),
            Verdict::Profane {
                words: vec!["d4rn".to_string()],
                cleaned: "**** it".to_string(),
            }
        );
    }

    #[test]
    fn test_shared_filter_loaded_once() {
        let first = ProfanityFilter::shared() as *const ProfanityFilter;
        let second = ProfanityFilter::shared() as *const ProfanityFilter;
        assert_eq!(first, second);
        assert!(ProfanityFilter::shared().lexicon().is_term("lawda"));
    }
}
