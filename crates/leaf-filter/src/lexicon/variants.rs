//! Morphological variant generation for key words.

use std::collections::BTreeSet;

use super::dictionary::VARIANT_SUFFIXES;

/// Expand key words into inflected variants.
///
/// A word ending in `a` or `i` loses that vowel and every suffix is attached
/// to the stem; any other word gets the suffixes appended directly. Phrases
/// (containing a space) are kept as-is. The input words themselves are part
/// of the result.
///
/// ```
/// use leaf_filter::lexicon::generate_variants;
///
/// let variants = generate_variants(["lawda"]);
/// assert!(variants.contains("lawde"));
/// assert!(variants.contains("lawdon"));
/// ```
pub fn generate_variants<I, S>(words: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = BTreeSet::new();
    for word in words {
        let word = word.as_ref().trim().to_lowercase();
        if word.is_empty() {
            continue;
        }
        if !word.contains(' ') {
            let stem = word
                .strip_suffix('a')
                .or_else(|| word.strip_suffix('i'))
                .filter(|stem| !stem.is_empty())
                .unwrap_or(&word);
            for suffix in VARIANT_SUFFIXES {
                out.insert(format!("{stem}{suffix}"));
            }
        }
        out.insert(word);
    }
    out
}
