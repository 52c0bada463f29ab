/// Identifies a [`super::Tab`] for its whole lifetime, across moves between containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabId(pub(crate) u64);

/// Identifies a tab strip ([`super::TabContainer`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerId(pub(crate) u64);

/// Identifies a top-level window managed by [`super::TabWindows`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowId(pub(crate) u64);

impl TabId {
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// A stable `egui` id, e.g. for the tab label's drag sense.
    pub fn egui_id(self) -> egui::Id {
        egui::Id::new(("egui_browser_shell_tab", self.0))
    }
}

impl ContainerId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl WindowId {
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// The native viewport hosting this window.
    pub fn viewport_id(self) -> egui::ViewportId {
        egui::ViewportId::from_hash_of(("egui_browser_shell_window", self.0))
    }
}

/// Where a dragged tab would be inserted if released now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropTarget {
    pub container: ContainerId,

    /// Insertion index in the container *before* the dragged tab is removed.
    pub index: usize,
}

/// What a finished drag gesture did to the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The pointer never moved since press: a plain click.
    Click,

    /// The dragged tab disappeared mid-gesture (e.g. its window was closed).
    Lost,

    /// Dropped a lone tab back onto its own container.
    Unchanged,

    /// Moved within the same container; `index` is the final position.
    Reordered {
        container: ContainerId,
        index: usize,
    },

    /// Moved into another container; `index` is the final position.
    Moved {
        from: ContainerId,
        to: ContainerId,
        index: usize,
    },

    /// Torn off into a new window holding only the dragged tab.
    Detached {
        window: WindowId,
        container: ContainerId,
    },

    /// No drop target and the tab is not detachable.
    Rejected,
}

/// One slot in a tab strip.
#[derive(Clone, Debug)]
pub struct Tab<Pane> {
    pub(crate) id: TabId,
    pub label: String,
    pub closable: bool,

    /// If false, releasing the tab outside every tab strip does nothing.
    pub detachable: bool,

    pub pane: Pane,
}

impl<Pane> Tab<Pane> {
    pub fn id(&self) -> TabId {
        self.id
    }
}
