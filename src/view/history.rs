/// Navigable address of a list view, holding query strings.
pub trait AddressBar: Send {
    /// Records a new entry after the current one, dropping any forward entries.
    fn push(&mut self, query: String);

    /// Rewrites the current entry in place.
    fn replace(&mut self, query: String);

    fn current(&self) -> Option<&str>;

    /// Moves one entry back and returns it.
    fn back(&mut self) -> Option<String>;

    /// Moves one entry forward and returns it.
    fn forward(&mut self) -> Option<String>;
}

/// In-memory session history.
#[derive(Debug, Default, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl AddressBar for MemoryHistory {
    fn push(&mut self, query: String) {
        if self.current() == Some(query.as_str()) {
            return;
        }
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(query);
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, query: String) {
        match self.entries.get_mut(self.cursor) {
            Some(entry) => *entry = query,
            None => self.entries.push(query),
        }
    }

    fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    fn back(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).cloned()
    }

    fn forward(&mut self) -> Option<String> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).cloned()
    }
}
