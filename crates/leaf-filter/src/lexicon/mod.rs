//! The disallowed-term vocabulary.
//!
//! A [`Lexicon`] is an immutable, de-duplicated set of lowercase terms plus
//! an Aho-Corasick automaton over them. Matching is ASCII case-insensitive
//! and whole-word: a term only counts when the characters on either side of
//! it are not alphanumeric, so `"ass"` never fires inside `"classic"`.
//!
//! ```
//! use leaf_filter::Lexicon;
//!
//! let lexicon = Lexicon::builder().with_words(["darn"]).build().unwrap();
//! assert!(lexicon.contains("well DARN it"));
//! assert!(!lexicon.contains("darned socks"));
//! assert_eq!(lexicon.clean("well darn it", '*'), "well **** it");
//! ```

mod dictionary;
mod variants;

use std::collections::BTreeSet;
use std::ops::Range;

use aho_corasick::AhoCorasick;
use tracing::debug;

use crate::error::Result;
use crate::mask::mask_spans;

pub use self::dictionary::{ENGLISH, HINGLISH, HINGLISH_KEY_WORDS, VARIANT_SUFFIXES};
pub use self::variants::generate_variants;

/// Immutable set of disallowed terms with a compiled matcher.
#[derive(Debug, Clone)]
pub struct Lexicon {
    terms: BTreeSet<String>,
    matcher: AhoCorasick,
}

impl Lexicon {
    /// Start assembling a lexicon from nothing.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// The standard vocabulary: English base dictionary, the Hinglish list
    /// and the generated key-word variants.
    pub fn load() -> Result<Self> {
        Self::builder().with_base_dictionary().with_hinglish().build()
    }

    /// A lexicon that matches nothing.
    pub fn empty() -> Self {
        Self {
            terms: BTreeSet::new(),
            matcher: AhoCorasick::new(Vec::<String>::new())
                .expect("building empty Aho-Corasick should not fail"),
        }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when no terms are loaded.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Exact membership test for a single term (case-insensitive).
    pub fn is_term(&self, word: &str) -> bool {
        self.terms.contains(&word.trim().to_lowercase())
    }

    /// True if any term occurs in `text` as a whole word or phrase.
    pub fn contains(&self, text: &str) -> bool {
        self.matcher
            .find_overlapping_iter(text)
            .any(|m| is_whole_word(text, m.range()))
    }

    /// Byte spans of every whole-word occurrence, overlaps included.
    pub fn find(&self, text: &str) -> Vec<Range<usize>> {
        self.matcher
            .find_overlapping_iter(text)
            .map(|m| m.range())
            .filter(|span| is_whole_word(text, span.clone()))
            .collect()
    }

    /// Mask every occurrence with `replacement`, one per character.
    ///
    /// Whitespace inside a matched phrase is left in place.
    pub fn clean(&self, text: &str, replacement: char) -> String {
        mask_spans(text, self.find(text), replacement)
    }
}

/// Incremental construction of a [`Lexicon`].
///
/// Additions are set unions, so adding the same vocabulary twice is a no-op.
/// Allowed words are removed at [`build`](Self::build) time regardless of the
/// order in which they were registered.
#[derive(Debug, Default, Clone)]
pub struct LexiconBuilder {
    terms: BTreeSet<String>,
    allowed: BTreeSet<String>,
}

impl LexiconBuilder {
    /// Add the English base dictionary.
    pub fn with_base_dictionary(self) -> Self {
        self.with_words(ENGLISH.iter().copied())
    }

    /// Add the Hinglish vocabulary along with variants of its key words.
    pub fn with_hinglish(self) -> Self {
        self.with_words(HINGLISH.iter().copied())
            .with_key_words(HINGLISH_KEY_WORDS.iter().copied())
    }

    /// Add literal terms.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.terms.extend(words.into_iter().filter_map(canonical_term));
        self
    }

    /// Add key words together with their generated variants.
    pub fn with_key_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.terms.extend(generate_variants(words));
        self
    }

    /// Exclude terms from the final lexicon.
    pub fn allow<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed.extend(words.into_iter().filter_map(canonical_term));
        self
    }

    /// Compile the matcher.
    pub fn build(self) -> Result<Lexicon> {
        let LexiconBuilder { mut terms, allowed } = self;
        terms.retain(|term| !allowed.contains(term));

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&terms)?;

        debug!(
            terms = terms.len(),
            allowed = allowed.len(),
            "Built profanity lexicon"
        );
        Ok(Lexicon { terms, matcher })
    }
}

fn canonical_term<S: AsRef<str>>(word: S) -> Option<String> {
    let word = word.as_ref().trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Neither neighbour of `span` may be a word character.
pub(crate) fn is_whole_word(text: &str, span: Range<usize>) -> bool {
    let before = text[..span.start].chars().next_back();
    let after = text[span.end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}
