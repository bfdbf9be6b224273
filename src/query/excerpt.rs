use std::collections::HashSet;

/// Sorted byte offsets of every line start in one document, computed in
/// a single scan so each query offset resolves with a binary search
/// instead of rescanning the content.
#[derive(Debug)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let mut starts = vec![0];
        for (pos, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(pos + 1);
            }
        }
        Self { starts }
    }

    /// Byte offset of the start of the line containing `offset`: the
    /// position right after the nearest preceding newline, or the
    /// document start.
    pub fn line_start(&self, offset: usize) -> usize {
        let idx = self.starts.partition_point(|&start| start <= offset);
        self.starts[idx - 1]
    }
}

/// Extract the distinct lines of `content` containing the given byte
/// offsets, in ascending document order, each line at most once no
/// matter how many offsets fall inside it. `offsets` must be sorted
/// ascending. Lines are returned without their trailing newline.
pub fn extract_lines(content: &str, offsets: &[usize]) -> Vec<String> {
    let index = LineIndex::new(content);
    let mut seen: HashSet<usize> = HashSet::new();
    let mut lines = Vec::new();

    for &offset in offsets {
        let start = index.line_start(offset);
        if !seen.insert(start) {
            continue;
        }
        let end = content[start..]
            .find('\n')
            .map(|rel| start + rel)
            .unwrap_or(content.len());
        lines.push(content[start..end].to_string());
    }

    lines
}
