use egui::{Pos2, Vec2};

use super::marker::{DragPreview, OverlayMarker};
use super::types::{ContainerId, DropTarget, TabId};

/// State of one press-move-release gesture on a tab label.
///
/// The preview and the marker belong to the session and disappear with it.
#[derive(Clone, Debug)]
pub struct DragSession {
    pub(super) id: u64,
    pub(super) tab: TabId,
    pub(super) origin: ContainerId,
    pub(super) origin_index: usize,
    pub(super) press_point: Pos2,
    pub(super) label_size: Vec2,
    pub(super) moved: bool,
    pub(super) target: Option<DropTarget>,
    pub(super) marker: OverlayMarker,
    pub(super) preview: DragPreview,
}

impl DragSession {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn tab(&self) -> TabId {
        self.tab
    }

    /// Container and index of the tab when the gesture started.
    pub fn origin(&self) -> (ContainerId, usize) {
        (self.origin, self.origin_index)
    }

    pub fn press_point(&self) -> Pos2 {
        self.press_point
    }

    /// Whether the pointer moved at all since press.
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// The drop target computed on the last move, if any.
    pub fn target(&self) -> Option<DropTarget> {
        self.target
    }

    pub fn marker(&self) -> &OverlayMarker {
        &self.marker
    }

    pub fn preview(&self) -> &DragPreview {
        &self.preview
    }
}
