/// A snapshot of an engine's session history: how many entries, and which one is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryCursor {
    pub len: usize,
    pub current: usize,
}

impl HistoryCursor {
    pub fn new(len: usize, current: usize) -> Self {
        Self { len, current }
    }

    /// Step for the back button: `-1` if there is somewhere to go, else `0`.
    pub fn back_delta(self) -> i32 {
        if self.len > 1 && self.current > 0 { -1 } else { 0 }
    }

    /// Step for the forward button: `+1` if there is somewhere to go, else `0`.
    pub fn forward_delta(self) -> i32 {
        if self.len > 1 && self.current + 1 < self.len { 1 } else { 0 }
    }

    pub fn can_go_back(self) -> bool {
        self.current != 0
    }

    pub fn can_go_forward(self) -> bool {
        self.current + 1 < self.len
    }

    /// Reloading needs something to reload.
    pub fn can_reload(self) -> bool {
        self.len > 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: String,
    pub title: String,
}

/// A linear back/forward list, as kept by a web engine.
#[derive(Clone, Debug, Default)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
    current: usize,
}

impl SessionHistory {
    /// Visit `url`: forward entries are dropped and the new entry becomes current.
    pub fn push(&mut self, url: impl Into<String>) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.current + 1);
        }
        self.entries.push(HistoryEntry {
            url: url.into(),
            title: String::new(),
        });
        self.current = self.entries.len() - 1;
    }

    /// Move by `delta` entries, clamped to the list. Returns the new current entry.
    pub fn go(&mut self, delta: i32) -> Option<&HistoryEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        let target = if delta < 0 {
            self.current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (self.current + delta as usize).min(last)
        };
        self.current = target;
        self.entries.get(target)
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.current)
    }

    pub fn set_current_title(&mut self, title: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(self.current) {
            entry.title = title.into();
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> HistoryCursor {
        HistoryCursor::new(self.entries.len(), self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_follow_the_cursor() {
        let empty = HistoryCursor::new(0, 0);
        assert!(!empty.can_go_back());
        assert!(!empty.can_go_forward());
        assert!(!empty.can_reload());

        let middle = HistoryCursor::new(3, 1);
        assert_eq!(middle.back_delta(), -1);
        assert_eq!(middle.forward_delta(), 1);
        assert!(middle.can_go_back() && middle.can_go_forward());

        let last = HistoryCursor::new(3, 2);
        assert_eq!(last.forward_delta(), 0);
        assert!(!last.can_go_forward());

        let single = HistoryCursor::new(1, 0);
        assert_eq!(single.back_delta(), 0);
        assert_eq!(single.forward_delta(), 0);
    }

    #[test]
    fn push_after_going_back_drops_forward_entries() {
        let mut history = SessionHistory::default();
        history.push("a");
        history.push("b");
        history.push("c");
        assert_eq!(history.go(-2).map(|e| e.url.as_str()), Some("a"));

        history.push("d");
        let urls: Vec<&str> = history.entries().iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, ["a", "d"]);
        assert_eq!(history.cursor(), HistoryCursor::new(2, 1));
    }

    #[test]
    fn go_is_clamped() {
        let mut history = SessionHistory::default();
        assert!(history.go(1).is_none());
        history.push("a");
        history.push("b");
        assert_eq!(history.go(5).map(|e| e.url.as_str()), Some("b"));
        assert_eq!(history.go(-5).map(|e| e.url.as_str()), Some("a"));
    }
}
