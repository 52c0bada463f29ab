use egui::{Pos2, Rect, Vec2};

use super::geometry::TabGeometry;
use super::options::TabDragOptions;
use super::types::DropTarget;
use super::windows::TabWindows;

/// The small indicator showing where a dragged tab would land.
///
/// Owned by the drag session; it can't outlive the gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayMarker {
    rect: Option<Rect>,
}

impl OverlayMarker {
    /// Screen rect of the marker while shown.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn is_visible(&self) -> bool {
        self.rect.is_some()
    }

    pub fn position(&mut self, pos: Pos2, size: Vec2) {
        self.rect = Some(Rect::from_min_size(pos, size));
    }

    pub fn hide(&mut self) {
        self.rect = None;
    }

    /// Place the marker at the insertion boundary of `target`, or hide it.
    pub fn place<Pane>(
        &mut self,
        target: Option<DropTarget>,
        windows: &TabWindows<Pane>,
        geometry: &dyn TabGeometry,
        options: &TabDragOptions,
    ) {
        match target.and_then(|t| marker_pos(t, windows, geometry, options)) {
            Some(pos) => self.position(pos, options.marker_size),
            None => self.hide(),
        }
    }
}

fn marker_pos<Pane>(
    target: DropTarget,
    windows: &TabWindows<Pane>,
    geometry: &dyn TabGeometry,
    options: &TabDragOptions,
) -> Option<Pos2> {
    let container = windows.container(target.container)?;

    if container.is_empty() {
        let rect = geometry.container_rect(target.container)?;
        return Some(Pos2::new(rect.min.x, rect.min.y + options.marker_offset_y));
    }

    let append = target.index >= container.len();
    let anchor_index = if append { container.len() - 1 } else { target.index };
    let anchor = container.tabs().get(anchor_index)?;
    let rect = geometry.tab_rect(anchor.id())?;

    let x = if append {
        rect.max.x + options.marker_append_offset_x
    } else {
        rect.min.x
    };
    Some(Pos2::new(x, rect.max.y + options.marker_offset_y))
}

/// The label-sized window following the pointer while a tab is dragged.
#[derive(Clone, Debug, PartialEq)]
pub struct DragPreview {
    pub text: String,
    rect: Option<Rect>,
}

impl DragPreview {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rect: None,
        }
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn is_visible(&self) -> bool {
        self.rect.is_some()
    }

    /// Show the preview with its top-left corner at the pointer.
    pub fn follow(&mut self, pointer: Pos2, label_size: Vec2, padding: f32) {
        self.rect = Some(Rect::from_min_size(pointer, label_size + Vec2::splat(padding)));
    }

    pub fn hide(&mut self) {
        self.rect = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab_drag::{ContainerId, ScreenRects};

    fn setup(tabs: usize) -> (TabWindows<()>, ScreenRects, ContainerId) {
        let mut windows = TabWindows::new();
        let mut rects = ScreenRects::default();
        let root = windows.root_container();
        rects.set_container_rect(
            root,
            Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(600.0, 400.0)),
        );
        for i in 0..tabs {
            let tab = windows.new_tab(format!("T{i}"), ());
            let id = windows.push_tab(root, tab).unwrap();
            rects.set_tab_rect(
                id,
                Rect::from_min_size(Pos2::new(i as f32 * 100.0, 5.0), Vec2::new(80.0, 20.0)),
            );
        }
        (windows, rects, root)
    }

    #[test]
    fn marker_sits_under_left_edge_of_target_tab() {
        let (windows, rects, root) = setup(3);
        let mut marker = OverlayMarker::default();
        marker.place(
            Some(DropTarget {
                container: root,
                index: 1,
            }),
            &windows,
            &rects,
            &TabDragOptions::default(),
        );
        let rect = marker.rect().unwrap();
        assert_eq!(rect.min, Pos2::new(100.0, 35.0));
        assert_eq!(rect.size(), Vec2::new(3.0, 10.0));
    }

    #[test]
    fn append_marker_sits_right_of_last_tab() {
        let (windows, rects, root) = setup(2);
        let mut marker = OverlayMarker::default();
        marker.place(
            Some(DropTarget {
                container: root,
                index: 2,
            }),
            &windows,
            &rects,
            &TabDragOptions::default(),
        );
        assert_eq!(marker.rect().map(|r| r.min), Some(Pos2::new(193.0, 35.0)));
    }

    #[test]
    fn empty_container_marker_uses_container_corner() {
        let (windows, rects, root) = setup(0);
        let mut marker = OverlayMarker::default();
        marker.place(
            Some(DropTarget {
                container: root,
                index: 0,
            }),
            &windows,
            &rects,
            &TabDragOptions::default(),
        );
        assert_eq!(marker.rect().map(|r| r.min), Some(Pos2::new(0.0, 10.0)));
    }

    #[test]
    fn no_target_hides() {
        let (windows, rects, _root) = setup(1);
        let mut marker = OverlayMarker::default();
        marker.position(Pos2::ZERO, Vec2::splat(1.0));
        marker.place(None, &windows, &rects, &TabDragOptions::default());
        assert!(!marker.is_visible());
    }

    #[test]
    fn preview_is_label_plus_padding() {
        let mut preview = DragPreview::new("Tab");
        preview.follow(Pos2::new(5.0, 6.0), Vec2::new(40.0, 14.0), 10.0);
        let rect = preview.rect().unwrap();
        assert_eq!(rect.min, Pos2::new(5.0, 6.0));
        assert_eq!(rect.size(), Vec2::new(50.0, 24.0));
    }
}
