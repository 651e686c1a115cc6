//! End-to-end moderation scenarios against the standard lexicon.

use std::sync::Arc;

use leaf_filter::{Lexicon, ProfanityFilter, Verdict};

fn standard() -> ProfanityFilter {
    ProfanityFilter::new(Arc::new(Lexicon::load().expect("standard lexicon builds")))
}

// =============================================================================
// Guarding
// =============================================================================

#[test]
fn empty_and_blank_inputs_are_negative() {
    let filter = standard();
    for input in ["", " ", "\n\t  "] {
        assert!(!filter.contains_profanity(input));
        assert_eq!(filter.clean_profanity(input), input);
        assert!(filter.profane_words(input).is_empty());
    }
}

// =============================================================================
// Detection and masking
// =============================================================================

#[test]
fn clean_sentence_is_untouched() {
    let filter = standard();
    let text = "I love hiking and recycling";
    assert!(!filter.contains_profanity(text));
    assert_eq!(filter.clean_profanity(text), text);
}

#[test]
fn direct_hinglish_match() {
    let filter = standard();
    assert!(filter.contains_profanity("tu chutiya hai"));
    assert_eq!(filter.clean_profanity("tu chutiya hai"), "tu ******* hai");
}

#[test]
fn leetspeak_hinglish_match() {
    let filter = standard();
    assert!(filter.contains_profanity("tu ch00t1y4 hai"));
    assert_eq!(filter.clean_profanity("tu ch00t1y4 hai"), "tu ******** hai");
}

#[test]
fn english_leetspeak_match() {
    let filter = standard();
    for text in ["sh!t happens", "you b1tch", "$h1t", "+w@7"] {
        assert!(filter.contains_profanity(text), "{text}");
    }
    // '*' is not a glyph
    assert!(!filter.contains_profanity("what the f*ck"));
}

#[test]
fn mixed_case_is_detected() {
    let filter = standard();
    assert!(filter.contains_profanity("ChUtIyA"));
    assert_eq!(filter.clean_profanity("What The FUCK"), "What The ****");
}

#[test]
fn hinglish_phrase_masking_keeps_spaces() {
    let filter = standard();
    assert_eq!(
        filter.clean_profanity("woh kutte ki aulad hai"),
        "woh ***** ** ***** hai"
    );
}

#[test]
fn generated_variants_are_detected() {
    let filter = standard();
    for variant in ["lawde", "lawdo", "lawdon", "chutiye", "madarchode", "haramon"] {
        assert!(filter.contains_profanity(&format!("abe {variant}")), "{variant}");
    }
}

#[test]
fn embedded_terms_do_not_match() {
    let filter = standard();
    for text in ["a classic assessment", "Scunthorpe United", "cockpit", "shitake mushrooms"] {
        assert!(!filter.contains_profanity(text), "{text}");
        assert_eq!(filter.clean_profanity(text), text);
    }
}

#[test]
fn only_profane_occurrences_are_masked() {
    let filter = standard();
    // "5h1t" is read as a number; "$h1t" is not
    assert_eq!(filter.clean_profanity("5h1t vs $h1t"), "5h1t vs ****");
}

#[test]
fn uppercase_obfuscations_agree_across_operations() {
    let filter = standard();
    for token in ["SHI7", "CUN+", "SHI+", "TWA7", "B1TCH"] {
        assert!(filter.contains_profanity(token), "{token}");
        assert_eq!(filter.clean_profanity(token), "*".repeat(token.len()), "{token}");
        assert_eq!(filter.profane_words(token), vec![token.to_lowercase()], "{token}");
    }
    assert_eq!(filter.clean_profanity("call me SHI+ head"), "call me **** head");
}

// =============================================================================
// Structured tokens
// =============================================================================

#[test]
fn structured_tokens_survive_normalization_and_cleaning() {
    let filter = standard();
    let samples = [
        "user@example.com",
        "https://example.com/path",
        "SHA-256",
        "UTF-8",
        "$500",
        "2024",
        "www.b00b.example.org",
    ];
    for sample in samples {
        assert_eq!(leaf_filter::normalize(sample), sample, "{sample}");
        assert!(!filter.contains_profanity(sample), "{sample}");
        assert_eq!(filter.clean_profanity(sample), sample, "{sample}");
        assert!(filter.profane_words(sample).is_empty(), "{sample}");
    }
}

// =============================================================================
// Word extraction and verdicts
// =============================================================================

#[test]
fn profane_words_lists_direct_then_obfuscated() {
    let filter = standard();
    let words = filter.profane_words("Ch00t1y4 aur CHUTIYA dono");
    assert_eq!(words, vec!["chutiya", "ch00t1y4"]);
}

#[test]
fn analyze_bundles_words_and_cleaned_text() {
    let filter = standard();
    match filter.analyze("tu ch00t1y4 hai") {
        Verdict::Profane { words, cleaned } => {
            assert_eq!(words, vec!["ch00t1y4"]);
            assert_eq!(cleaned, "tu ******** hai");
        }
        Verdict::Clean => panic!("expected a profane verdict"),
    }
    assert!(filter.analyze("planting trees today").is_clean());
}

#[test]
fn free_functions_use_the_shared_filter() {
    assert!(leaf_filter::contains_profanity("tu chutiya hai"));
    assert_eq!(leaf_filter::clean_profanity("tu chutiya hai"), "tu ******* hai");
    assert_eq!(leaf_filter::profane_words("tu chutiya hai"), vec!["chutiya"]);
}

#[test]
fn injected_lexicon_is_isolated() {
    let custom = ProfanityFilter::new(Arc::new(
        Lexicon::builder().with_words(["plastic straw"]).build().unwrap(),
    ));
    assert!(custom.contains_profanity("no pl4st1c straw please"));
    assert!(!custom.contains_profanity("tu chutiya hai"));
}

#[cfg(feature = "serde")]
#[test]
fn verdict_serializes_with_tag() {
    let filter = standard();
    let json = serde_json::to_value(filter.analyze("tu chutiya hai")).unwrap();
    assert_eq!(json["verdict"], "profane");
    assert_eq!(json["cleaned"], "tu ******* hai");
}
