use crate::index::types::InvertedIndex;
use crate::text::normalizer::normalize;
use std::collections::{BTreeSet, HashMap, HashSet};

/// A scored candidate document, before excerpt extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMatch {
    pub name: String,
    /// Sum of the surviving terms' occurrence counts in this document.
    pub score: usize,
    /// First offsets of the surviving terms present in this document,
    /// sorted ascending.
    pub offsets: Vec<usize>,
}

/// Score every document containing at least one surviving search term
/// and rank the matches: descending score, ties by ascending name.
///
/// Terms that normalize to nothing, are noise, or are absent from the
/// index are dropped without error; duplicate input terms count once.
/// An empty or fully dropped term list yields no matches.
pub fn score_documents(
    index: &InvertedIndex,
    noise: &HashSet<String>,
    terms: &[String],
) -> Vec<DocMatch> {
    let surviving: BTreeSet<String> = terms
        .iter()
        .map(|term| normalize(term))
        .filter(|word| !word.is_empty() && !noise.contains(word) && index.contains_key(word))
        .collect();

    if surviving.len() < terms.len() {
        tracing::debug!(
            "Search reduced {} input terms to {} surviving words",
            terms.len(),
            surviving.len()
        );
    }

    let mut tallies: HashMap<&str, (usize, Vec<usize>)> = HashMap::new();
    for word in &surviving {
        if let Some(postings) = index.get(word) {
            for (name, entry) in postings {
                let slot = tallies.entry(name.as_str()).or_insert((0, Vec::new()));
                slot.0 += entry.count;
                slot.1.push(entry.first_offset);
            }
        }
    }

    let mut matches: Vec<DocMatch> = tallies
        .into_iter()
        .map(|(name, (score, mut offsets))| {
            offsets.sort_unstable();
            DocMatch {
                name: name.to_string(),
                score,
                offsets,
            }
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    matches
}
