use super::types::{ContainerId, Tab, TabId};

/// An ordered tab strip with an optional selection.
#[derive(Debug)]
pub struct TabContainer<Pane> {
    id: ContainerId,
    tabs: Vec<Tab<Pane>>,
    selected: Option<usize>,
}

impl<Pane> TabContainer<Pane> {
    pub(crate) fn new(id: ContainerId) -> Self {
        Self {
            id,
            tabs: Vec::new(),
            selected: None,
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab<Pane>] {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut [Tab<Pane>] {
        &mut self.tabs
    }

    pub fn tab_ids(&self) -> impl Iterator<Item = TabId> + '_ {
        self.tabs.iter().map(|t| t.id)
    }

    pub fn index_of(&self, tab: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_tab(&self) -> Option<&Tab<Pane>> {
        self.selected.and_then(|i| self.tabs.get(i))
    }

    pub fn selected_tab_mut(&mut self) -> Option<&mut Tab<Pane>> {
        self.selected.and_then(|i| self.tabs.get_mut(i))
    }

    /// Select the tab at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.selected = Some(index);
        }
    }

    /// Insert at `index`, clamped to the current length. Returns the index actually used.
    ///
    /// The selection keeps pointing at the same tab.
    pub fn insert(&mut self, index: usize, tab: Tab<Pane>) -> usize {
        let index = index.min(self.tabs.len());
        self.tabs.insert(index, tab);
        match self.selected {
            Some(sel) if sel >= index => self.selected = Some(sel + 1),
            None => self.selected = Some(index),
            Some(_) => {}
        }
        index
    }

    pub fn push(&mut self, tab: Tab<Pane>) -> usize {
        self.insert(self.tabs.len(), tab)
    }

    /// Remove the tab at `index`, fixing up the selection the way a tab strip does:
    /// the right neighbour (or the new last tab) takes over a removed selection.
    pub fn remove(&mut self, index: usize) -> Option<Tab<Pane>> {
        if index >= self.tabs.len() {
            return None;
        }
        let tab = self.tabs.remove(index);

        self.selected = match self.selected {
            _ if self.tabs.is_empty() => None,
            Some(sel) if sel > index => Some(sel - 1),
            Some(sel) if sel == index => Some(sel.min(self.tabs.len() - 1)),
            other => other,
        };

        Some(tab)
    }

    pub(crate) fn drain(&mut self) -> Vec<Tab<Pane>> {
        self.selected = None;
        std::mem::take(&mut self.tabs)
    }
}
