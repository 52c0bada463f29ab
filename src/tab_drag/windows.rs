use std::collections::BTreeMap;

use egui::{Pos2, Vec2};

use crate::error::{Result, ShellError};

use super::container::TabContainer;
use super::registry::TabContainerRegistry;
use super::types::{ContainerId, Tab, TabId, WindowId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowKind {
    /// The main window. Never closed by the window layer.
    Root,

    /// Created by tearing off a tab; closes itself once its tab strip runs empty.
    Detached,
}

/// A top-level window hosting exactly one tab strip.
#[derive(Clone, Debug)]
pub struct ShellWindow {
    id: WindowId,
    kind: WindowKind,
    container: ContainerId,

    /// Outer position in screen space, if known.
    pub position: Option<Pos2>,
    pub inner_size: Vec2,
}

impl ShellWindow {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn container(&self) -> ContainerId {
        self.container
    }
}

/// Owns every window, its tab strip and the drop-target registry.
///
/// All tab ownership changes go through here, so a tab is always in exactly one container.
#[derive(Debug)]
pub struct TabWindows<Pane> {
    windows: BTreeMap<WindowId, ShellWindow>,
    containers: BTreeMap<ContainerId, TabContainer<Pane>>,
    window_of_container: ahash::HashMap<ContainerId, WindowId>,
    registry: TabContainerRegistry,
    root: WindowId,
    next_serial: u64,
}

impl<Pane> Default for TabWindows<Pane> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Pane> TabWindows<Pane> {
    /// A root window with an empty, not yet registered, tab strip.
    pub fn new() -> Self {
        let mut this = Self {
            windows: BTreeMap::new(),
            containers: BTreeMap::new(),
            window_of_container: Default::default(),
            registry: TabContainerRegistry::default(),
            root: WindowId(0),
            next_serial: 1,
        };
        let (root, _container) = this.insert_window(WindowKind::Root, None, Vec2::ZERO);
        this.root = root;
        this
    }

    fn next_serial(&mut self) -> u64 {
        let serial = self.next_serial;
        self.next_serial += 1;
        serial
    }

    fn insert_window(
        &mut self,
        kind: WindowKind,
        position: Option<Pos2>,
        inner_size: Vec2,
    ) -> (WindowId, ContainerId) {
        let window = WindowId(self.next_serial());
        let container = ContainerId(self.next_serial());
        self.containers.insert(container, TabContainer::new(container));
        self.window_of_container.insert(container, window);
        self.windows.insert(
            window,
            ShellWindow {
                id: window,
                kind,
                container,
                position,
                inner_size,
            },
        );
        (window, container)
    }

    pub fn root_window(&self) -> WindowId {
        self.root
    }

    pub fn root_container(&self) -> ContainerId {
        self.windows
            .get(&self.root)
            .map(|w| w.container)
            .unwrap_or(ContainerId(0))
    }

    pub fn registry(&self) -> &TabContainerRegistry {
        &self.registry
    }

    /// Lazy registration: a container becomes a drop target the first time it takes part in a drag.
    pub fn register_container(&mut self, container: ContainerId) -> bool {
        if !self.containers.contains_key(&container) {
            return false;
        }
        self.registry.register(container)
    }

    pub fn windows(&self) -> impl Iterator<Item = &ShellWindow> {
        self.windows.values()
    }

    pub fn window(&self, window: WindowId) -> Option<&ShellWindow> {
        self.windows.get(&window)
    }

    pub fn window_mut(&mut self, window: WindowId) -> Option<&mut ShellWindow> {
        self.windows.get_mut(&window)
    }

    pub fn window_of_container(&self, container: ContainerId) -> Option<WindowId> {
        self.window_of_container.get(&container).copied()
    }

    pub fn container(&self, container: ContainerId) -> Option<&TabContainer<Pane>> {
        self.containers.get(&container)
    }

    pub fn container_mut(&mut self, container: ContainerId) -> Option<&mut TabContainer<Pane>> {
        self.containers.get_mut(&container)
    }

    pub fn containers(&self) -> impl Iterator<Item = &TabContainer<Pane>> {
        self.containers.values()
    }

    pub fn containers_mut(&mut self) -> impl Iterator<Item = &mut TabContainer<Pane>> {
        self.containers.values_mut()
    }

    pub fn find_tab(&self, tab: TabId) -> Option<(ContainerId, usize)> {
        self.containers
            .values()
            .find_map(|c| c.index_of(tab).map(|index| (c.id(), index)))
    }

    pub fn tab(&self, tab: TabId) -> Option<&Tab<Pane>> {
        let (container, index) = self.find_tab(tab)?;
        self.containers.get(&container)?.tabs().get(index)
    }

    pub fn tab_mut(&mut self, tab: TabId) -> Option<&mut Tab<Pane>> {
        let (container, index) = self.find_tab(tab)?;
        self.containers.get_mut(&container)?.tabs_mut().get_mut(index)
    }

    pub fn tab_count(&self) -> usize {
        self.containers.values().map(|c| c.len()).sum()
    }

    /// A new closable, detachable tab that is not in any container yet.
    pub fn new_tab(&mut self, label: impl Into<String>, pane: Pane) -> Tab<Pane> {
        Tab {
            id: TabId(self.next_serial()),
            label: label.into(),
            closable: true,
            detachable: true,
            pane,
        }
    }

    /// Insert `tab` at `index` (clamped) and select it.
    pub fn insert_tab(
        &mut self,
        container: ContainerId,
        index: usize,
        tab: Tab<Pane>,
    ) -> Result<usize> {
        let target = self
            .containers
            .get_mut(&container)
            .ok_or(ShellError::UnknownContainer(container))?;
        let index = target.insert(index, tab);
        target.select(index);
        Ok(index)
    }

    /// Append `tab` and select it.
    pub fn push_tab(&mut self, container: ContainerId, tab: Tab<Pane>) -> Result<TabId> {
        let id = tab.id;
        self.insert_tab(container, usize::MAX, tab)?;
        Ok(id)
    }

    /// Remove a tab from whichever container holds it.
    ///
    /// Does not close emptied windows; see [`Self::close_if_emptied`].
    pub fn take_tab(&mut self, tab: TabId) -> Result<(ContainerId, usize, Tab<Pane>)> {
        let (container, index) = self.find_tab(tab).ok_or(ShellError::UnknownTab(tab))?;
        let removed = self
            .containers
            .get_mut(&container)
            .and_then(|c| c.remove(index))
            .ok_or(ShellError::UnknownTab(tab))?;
        Ok((container, index, removed))
    }

    /// Remove a tab for good, closing its window if that was the last tab of a detached window.
    pub fn close_tab(&mut self, tab: TabId) -> Result<Tab<Pane>> {
        let (container, _index, removed) = self.take_tab(tab)?;
        self.close_if_emptied(container);
        Ok(removed)
    }

    /// Create a detached window with a fresh tab strip, which is registered right away.
    pub fn create_detached_window(
        &mut self,
        position: Pos2,
        inner_size: Vec2,
    ) -> (WindowId, ContainerId) {
        let (window, container) =
            self.insert_window(WindowKind::Detached, Some(position), inner_size);
        self.registry.register(container);
        log::debug!("window: created {window:?} with {container:?} at {position:?}");
        (window, container)
    }

    /// Close a window: its tab strip leaves the registry and is dropped.
    ///
    /// Returns the tabs that were still inside so the caller can shut their panes down.
    pub fn close_window(&mut self, window: WindowId) -> Result<Vec<Tab<Pane>>> {
        if window == self.root {
            return Err(ShellError::CannotCloseRoot);
        }
        let closed = self
            .windows
            .remove(&window)
            .ok_or(ShellError::UnknownWindow(window))?;

        self.registry.deregister(closed.container);
        self.window_of_container.remove(&closed.container);
        let tabs = self
            .containers
            .remove(&closed.container)
            .map(|mut c| c.drain())
            .unwrap_or_default();

        log::debug!(
            "window: closed {window:?} ({:?}, {} tabs left)",
            closed.container,
            tabs.len()
        );
        Ok(tabs)
    }

    /// Close the window of `container` if it is a detached window whose tab strip is now empty.
    pub fn close_if_emptied(&mut self, container: ContainerId) -> Option<WindowId> {
        if !self.containers.get(&container).is_some_and(|c| c.is_empty()) {
            return None;
        }
        let window = self.window_of_container(container)?;
        if self.windows.get(&window)?.kind != WindowKind::Detached {
            return None;
        }
        self.close_window(window).ok().map(|_empty| window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows_with_tabs(n: usize) -> (TabWindows<()>, Vec<TabId>) {
        let mut windows = TabWindows::new();
        let root = windows.root_container();
        let ids = (0..n)
            .map(|i| {
                let tab = windows.new_tab(format!("T{i}"), ());
                windows.push_tab(root, tab).unwrap()
            })
            .collect();
        (windows, ids)
    }

    #[test]
    fn root_container_is_not_registered_until_asked() {
        let (mut windows, _) = windows_with_tabs(1);
        let root = windows.root_container();
        assert!(!windows.registry().contains(root));
        assert!(windows.register_container(root));
        assert!(windows.registry().contains(root));
    }

    #[test]
    fn detached_window_registers_and_close_deregisters() {
        let (mut windows, ids) = windows_with_tabs(2);
        let (window, container) =
            windows.create_detached_window(Pos2::new(10.0, 10.0), Vec2::new(300.0, 200.0));
        assert!(windows.registry().contains(container));

        let (_, _, tab) = windows.take_tab(ids[0]).unwrap();
        windows.push_tab(container, tab).unwrap();

        let leftover = windows.close_window(window).unwrap();
        assert_eq!(leftover.len(), 1);
        assert!(!windows.registry().contains(container));
        assert!(windows.container(container).is_none());
        assert!(windows.find_tab(ids[0]).is_none());
    }

    #[test]
    fn root_window_cannot_be_closed() {
        let (mut windows, _) = windows_with_tabs(1);
        let root = windows.root_window();
        assert!(matches!(
            windows.close_window(root),
            Err(ShellError::CannotCloseRoot)
        ));
    }

    #[test]
    fn closing_last_tab_closes_detached_window_only() {
        let (mut windows, ids) = windows_with_tabs(2);
        let (window, container) = windows.create_detached_window(Pos2::ZERO, Vec2::splat(100.0));
        let (_, _, tab) = windows.take_tab(ids[1]).unwrap();
        windows.push_tab(container, tab).unwrap();

        windows.close_tab(ids[1]).unwrap();
        assert!(windows.window(window).is_none());

        windows.close_tab(ids[0]).unwrap();
        assert!(windows.window(windows.root_window()).is_some());
        assert_eq!(windows.tab_count(), 0);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut windows: TabWindows<()> = TabWindows::new();
        assert!(matches!(
            windows.take_tab(TabId(999)),
            Err(ShellError::UnknownTab(_))
        ));
        let tab = windows.new_tab("x", ());
        assert!(matches!(
            windows.insert_tab(ContainerId(999), 0, tab),
            Err(ShellError::UnknownContainer(_))
        ));
    }
}
