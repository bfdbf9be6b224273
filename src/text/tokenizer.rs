use super::normalizer::normalize;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Words are maximal runs of non-whitespace characters.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("word regex is valid"));

/// Split `text` into raw tokens tagged with their 0-based byte offset.
/// Deterministic: the same text always yields the same token stream.
pub fn tokenize(text: &str) -> Vec<(&str, usize)> {
    WORD_REGEX
        .find_iter(text)
        .map(|m| (m.as_str(), m.start()))
        .collect()
}

/// Return the non-noise normalized words of `content`, in occurrence
/// order. Tokens that normalize to the empty string are dropped.
pub fn words(content: &str, noise: &HashSet<String>) -> Vec<String> {
    tokenize(content)
        .into_iter()
        .map(|(token, _)| normalize(token))
        .filter(|word| !word.is_empty() && !noise.contains(word))
        .collect()
}
