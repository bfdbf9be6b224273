use serde::{Deserialize, Serialize};
use std::fmt;

/// One matching document of a search, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The document name.
    pub name: String,
    /// Total occurrences of the surviving search terms in the document.
    pub score: usize,
    /// The distinct lines containing the earliest occurrence of each
    /// surviving term, in document order, newline excluded.
    pub lines: Vec<String>,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.name, self.score)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
