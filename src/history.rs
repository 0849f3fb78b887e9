/// Raw command lines in the order they were entered, for the life of the
/// process.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Every entry paired with its 1-based index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.tail(self.entries.len())
    }

    /// The most recent `n` entries with their 1-based indices. Asking for more
    /// than exists yields the whole history.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = (usize, &str)> {
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..]
            .iter()
            .enumerate()
            .map(move |(offset, line)| (start + offset + 1, line.as_str()))
    }
}
