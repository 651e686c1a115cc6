//! Leetspeak normalization.
//!
//! Each whitespace-delimited token is rewritten through [`canonical_char`]
//! unless it looks like structured data (an email, a URL, a technical code
//! or a number), in which case it is copied verbatim. Every substitution is
//! one ASCII byte for another, so the normalized text has exactly the byte
//! length and token offsets of its input. The detector relies on this to map
//! matches back onto the original text.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::error::{FilterError, Result};
use crate::lexicon::is_whole_word;

/// Canonical letters and the glyphs that stand in for them.
pub const LEET_MAP: &[(char, &[char])] = &[
    ('a', &['a', '@', '4']),
    ('o', &['o', '0']),
    ('i', &['i', '1', '!']),
    ('e', &['e', '3']),
    ('s', &['s', '5', '$']),
    ('t', &['t', '7', '+']),
    ('b', &['b', '8']),
    ('g', &['g', '9']),
];

/// Map a single leetspeak glyph to its canonical letter.
///
/// Characters with no mapping, letters included, are returned unchanged.
#[inline]
pub const fn canonical_char(c: char) -> char {
    match c {
        '@' | '4' => 'a',
        '0' => 'o',
        '1' | '!' => 'i',
        '3' => 'e',
        '5' | '$' => 's',
        '7' | '+' => 't',
        '8' => 'b',
        '9' => 'g',
        _ => c,
    }
}

/// Shape of a whitespace-delimited token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `user@example.com`
    Email,
    /// `https://example.com/path`, `www.example.com`
    Url,
    /// `SHA-256`, `UTF-8`
    TechnicalCode,
    /// `2024`, `$500`
    Numeric,
    /// Ordinary prose; eligible for normalization.
    Word,
}

impl TokenKind {
    /// Structured tokens are never rewritten.
    pub fn is_skippable(self) -> bool {
        !matches!(self, Self::Word)
    }
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\s@]+@[^\s@]+\.[^\s@]+").expect("valid email pattern"))
}

fn domain_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+){2,}").expect("valid domain pattern")
    })
}

/// Sentence punctuation a technical code may carry. Leet glyphs such as
/// `!`, `$` or `+` are deliberately absent.
const CODE_TRAILING_PUNCT: &[char] = &['.', ',', ';', ':', '?', ')'];

fn technical_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{2,}(?:-[0-9]+)?$").expect("valid code pattern"))
}

fn numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\$?[0-9]").expect("valid numeric pattern"))
}

/// `local@domain.tld`
pub fn looks_like_email(token: &str) -> bool {
    email_re().is_match(token)
}

/// A scheme separator, or at least three dot-separated segments.
pub fn looks_like_url(token: &str) -> bool {
    token.contains("://") || domain_re().is_match(token)
}

/// Uppercase identifiers such as `HTTP`, `UTF-8` or `SHA-256`.
///
/// Digits only count after a hyphen, so `SHI7` is a word, not a code.
pub fn looks_like_technical_code(token: &str) -> bool {
    technical_code_re().is_match(token.trim_end_matches(CODE_TRAILING_PUNCT))
}

/// Leading digit, optionally behind a dollar sign: `2024`, `$500`, `3rd`.
pub fn looks_like_numeric(token: &str) -> bool {
    numeric_re().is_match(token)
}

/// Classify a token. The first matching shape wins.
pub fn classify(token: &str) -> TokenKind {
    if looks_like_email(token) {
        TokenKind::Email
    } else if looks_like_url(token) {
        TokenKind::Url
    } else if looks_like_technical_code(token) {
        TokenKind::TechnicalCode
    } else if looks_like_numeric(token) {
        TokenKind::Numeric
    } else {
        TokenKind::Word
    }
}

/// Whitespace-delimited tokens with their byte offsets in `text`.
pub fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    let base = text.as_ptr() as usize;
    text.split_whitespace()
        .map(move |token| (token.as_ptr() as usize - base, token))
}

/// Normalize one token, borrowing when nothing changes.
pub fn normalize_token(token: &str) -> Cow<'_, str> {
    if classify(token).is_skippable() || !token.chars().any(|c| canonical_char(c) != c) {
        return Cow::Borrowed(token);
    }
    Cow::Owned(token.chars().map(canonical_char).collect())
}

/// Rewrite leetspeak in `text` to canonical letters.
///
/// ```
/// use leaf_filter::normalize;
///
/// assert_eq!(normalize("ch00t1y4 at $500"), "chootiya at $500");
/// assert_eq!(normalize("mail me@example.com"), "mail me@example.com");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, token) in tokens(text) {
        out.push_str(&text[cursor..start]);
        out.push_str(&normalize_token(token));
        cursor = start + token.len();
    }
    out.push_str(&text[cursor..]);
    out
}

/// Obfuscation-tolerant matcher for a single word.
///
/// Every canonical letter in the word accepts any of its glyphs, so the
/// pattern for `"shit"` also matches `"5h1+"` and `"$H!T"`.
#[derive(Debug, Clone)]
pub struct LeetPattern {
    word: String,
    regex: Regex,
}

impl LeetPattern {
    /// Compile the pattern for `word`.
    pub fn new(word: &str) -> Result<Self> {
        let word = word.trim().to_lowercase();
        let mut pattern = String::with_capacity(word.len() * 6);
        for c in word.chars() {
            match LEET_MAP.iter().find(|(letter, _)| *letter == c) {
                Some((_, glyphs)) => {
                    pattern.push('[');
                    for glyph in glyphs.iter() {
                        pattern.push_str(&regex::escape(&glyph.to_string()));
                    }
                    pattern.push(']');
                }
                None => pattern.push_str(&regex::escape(&c.to_string())),
            }
        }

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| FilterError::Pattern {
                word: word.clone(),
                source,
            })?;
        Ok(Self { word, regex })
    }

    /// The canonical word this pattern was built from.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// True if an obfuscated form of the word appears as a whole word.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex
            .find_iter(text)
            .any(|m| is_whole_word(text, m.range()))
    }
}

/// Shorthand for [`LeetPattern::new`].
pub fn leet_pattern(word: &str) -> Result<LeetPattern> {
    LeetPattern::new(word)
}
