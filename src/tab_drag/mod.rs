//! Drag-to-reorder and tear-off tabs across top-level windows.
//!
//! The model is independent of a running `egui::Context`: the UI pass records screen rects into a
//! [`TabGeometry`] and feeds pointer events to a [`TabDragTracker`], which applies the gesture to
//! [`TabWindows`] on release.
//!
//! - Release over a registered tab strip: reorder (same strip) or move (other strip).
//! - Release elsewhere: tear the tab off into a new window, if the tab is detachable.
//! - Release without moving: a plain click.

mod container;
mod geometry;
mod locator;
mod marker;
mod options;
mod registry;
mod session;
mod tracker;
mod types;
mod windows;


pub use container::TabContainer;
pub use geometry::{
    local_to_screen, pointer_pos_in_screen, rect_local_to_screen, screen_to_local, ScreenRects,
    TabGeometry,
};
pub use locator::DropTargetLocator;
pub use marker::{DragPreview, OverlayMarker};
pub use options::TabDragOptions;
pub use registry::TabContainerRegistry;
pub use session::DragSession;
pub use tracker::TabDragTracker;
pub use types::{ContainerId, DropOutcome, DropTarget, Tab, TabId, WindowId};
pub use windows::{ShellWindow, TabWindows, WindowKind};
