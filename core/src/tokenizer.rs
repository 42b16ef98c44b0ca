use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tokens shorter than this (in chars) are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

lazy_static! {
    static ref NON_ALNUM_UNICODE: Regex = Regex::new(r"[^\p{L}\p{N}]+").expect("valid regex");
    static ref NON_ALNUM_ASCII: Regex = Regex::new(r"[^A-Za-z0-9]+").expect("valid regex");
}

/// Which characters survive stripping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharPolicy {
    /// Any Unicode letter or number.
    #[default]
    Unicode,
    /// `[A-Za-z0-9]` only.
    Ascii,
}

impl CharPolicy {
    fn strip<'a>(&self, word: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            CharPolicy::Unicode => NON_ALNUM_UNICODE.replace_all(word, ""),
            CharPolicy::Ascii => NON_ALNUM_ASCII.replace_all(word, ""),
        }
    }
}

/// Tokenize a title with the default (Unicode) policy.
pub fn tokenize(raw: &str) -> Vec<String> {
    tokenize_with(raw, CharPolicy::Unicode)
}

/// Tokenize a title: split on whitespace, lowercase, strip non-alphanumerics,
/// and drop anything under two characters. Order and duplicates are kept.
pub fn tokenize_with(raw: &str, policy: CharPolicy) -> Vec<String> {
    // lowercase before stripping: some case mappings emit combining marks
    raw.split_whitespace()
        .map(|word| policy.strip(&word.to_lowercase()).into_owned())
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .collect()
}
