use std::collections::HashSet;

/// Normalize a raw token into a canonical index key: lower-case, stem,
/// then drop every character outside `a-z`. The result may be empty, in
/// which case the token is not indexable.
pub fn normalize(raw: &str) -> String {
    stem(&raw.to_lowercase())
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Minimal stemming rule: strip one trailing possessive `'s`.
fn stem(word: &str) -> &str {
    word.strip_suffix("'s").unwrap_or(word)
}

/// True iff `word` is a member of the noise-word set. Callers must pass
/// a word that has already been normalized; noise words themselves are
/// normalized with the same function when loaded.
pub fn is_noise(word: &str, noise: &HashSet<String>) -> bool {
    noise.contains(word)
}

/// Normalize every line of a noise-word listing, dropping lines that
/// normalize to the empty string.
pub fn normalize_noise_words(noise_text: &str) -> Vec<String> {
    noise_text
        .lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}
