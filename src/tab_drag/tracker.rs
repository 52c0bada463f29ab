use egui::{Pos2, Vec2};

use super::geometry::TabGeometry;
use super::locator::DropTargetLocator;
use super::marker::{DragPreview, OverlayMarker};
use super::options::TabDragOptions;
use super::session::DragSession;
use super::types::{ContainerId, DropOutcome, DropTarget, TabId};
use super::windows::TabWindows;

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Turns press/move/release on a tab label into reorder, cross-window move, or tear-off.
///
/// Everything runs on the UI thread; a gesture is applied to [`TabWindows`] atomically on release.
#[derive(Debug, Default)]
pub struct TabDragTracker {
    pub options: TabDragOptions,
    state: DragState,
    next_session_id: u64,
}

impl TabDragTracker {
    pub fn new(options: TabDragOptions) -> Self {
        Self {
            options,
            state: DragState::Idle,
            next_session_id: 1,
        }
    }

    fn locator(&self) -> DropTargetLocator {
        DropTargetLocator::new(self.options.drop_band_below_tabs)
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session().is_some()
    }

    /// Start a gesture on `tab`. Returns `false` (and stays idle) if the tab doesn't exist.
    pub fn press<Pane>(
        &mut self,
        tab: TabId,
        point: Pos2,
        label_size: Vec2,
        windows: &TabWindows<Pane>,
    ) -> bool {
        let Some((origin, origin_index)) = windows.find_tab(tab) else {
            return false;
        };
        let text = windows.tab(tab).map(|t| t.label.clone()).unwrap_or_default();

        let id = self.next_session_id.max(1);
        self.next_session_id = id.saturating_add(1);
        log::debug!("drag: session START id={id} tab={tab:?} origin={origin:?}[{origin_index}]");

        self.state = DragState::Dragging(DragSession {
            id,
            tab,
            origin,
            origin_index,
            press_point: point,
            label_size,
            moved: false,
            target: None,
            marker: OverlayMarker::default(),
            preview: DragPreview::new(text),
        });
        true
    }

    /// Track the pointer: move the preview, recompute the drop target and place the marker.
    pub fn drag_move<Pane>(
        &mut self,
        point: Pos2,
        windows: &mut TabWindows<Pane>,
        geometry: &dyn TabGeometry,
    ) -> Option<DropTarget> {
        let locator = self.locator();
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };

        if point != session.press_point {
            session.moved = true;
        }
        if let Some((origin, _)) = windows.find_tab(session.tab) {
            windows.register_container(origin);
        }

        session
            .preview
            .follow(point, session.label_size, self.options.preview_padding);

        let target = locator.locate(point, windows, geometry);
        session.target = target;
        session
            .marker
            .place(target, windows, geometry, &self.options);
        target
    }

    /// Abandon the gesture without touching the model.
    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Idle => false,
            DragState::Dragging(session) => {
                log::debug!("drag: session CANCEL id={}", session.id);
                true
            }
        }
    }

    /// Finish the gesture at `point` and apply it.
    pub fn release<Pane>(
        &mut self,
        point: Pos2,
        windows: &mut TabWindows<Pane>,
        geometry: &dyn TabGeometry,
    ) -> DropOutcome {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return DropOutcome::Click;
        };

        let outcome = self.apply_release(&session, point, windows, geometry);
        log::debug!(
            "drag: session END id={} tab={:?} outcome={outcome:?}",
            session.id,
            session.tab
        );
        outcome
    }

    fn apply_release<Pane>(
        &self,
        session: &DragSession,
        point: Pos2,
        windows: &mut TabWindows<Pane>,
        geometry: &dyn TabGeometry,
    ) -> DropOutcome {
        let still_since_press = !session.moved && point == session.press_point;
        if still_since_press {
            return DropOutcome::Click;
        }

        // Origin is read at release time: the model may have changed since press.
        let Some((origin, origin_index)) = windows.find_tab(session.tab) else {
            return DropOutcome::Lost;
        };
        windows.register_container(origin);

        match self.locator().locate(point, windows, geometry) {
            Some(target) => drop_on_target(session.tab, origin, origin_index, target, windows),
            None => self.detach(session.tab, origin, point, windows),
        }
    }

    fn detach<Pane>(
        &self,
        tab: TabId,
        origin: ContainerId,
        point: Pos2,
        windows: &mut TabWindows<Pane>,
    ) -> DropOutcome {
        if !windows.tab(tab).is_some_and(|t| t.detachable) {
            return DropOutcome::Rejected;
        }
        let Ok((_, _, moved)) = windows.take_tab(tab) else {
            return DropOutcome::Lost;
        };

        let (window, container) =
            windows.create_detached_window(point, self.options.detached_window_size);
        if let Err(err) = windows.insert_tab(container, 0, moved) {
            log::warn!("drag: failed to insert torn-off tab: {err}");
            return DropOutcome::Lost;
        }
        windows.close_if_emptied(origin);

        DropOutcome::Detached { window, container }
    }
}

fn drop_on_target<Pane>(
    tab: TabId,
    origin: ContainerId,
    origin_index: usize,
    target: DropTarget,
    windows: &mut TabWindows<Pane>,
) -> DropOutcome {
    let same_container = target.container == origin;
    let Some(target_len) = windows.container(target.container).map(|c| c.len()) else {
        return DropOutcome::Lost;
    };
    if same_container && target_len == 1 {
        return DropOutcome::Unchanged;
    }

    let Ok((_, _, moved)) = windows.take_tab(tab) else {
        return DropOutcome::Lost;
    };

    let mut index = target.index;
    if same_container && origin_index < index {
        // Removing the tab shifted everything after it one slot to the left.
        index -= 1;
    }

    let index = match windows.insert_tab(target.container, index, moved) {
        Ok(index) => index,
        Err(err) => {
            log::warn!("drag: failed to insert dropped tab: {err}");
            return DropOutcome::Lost;
        }
    };

    if same_container {
        DropOutcome::Reordered {
            container: target.container,
            index,
        }
    } else {
        windows.close_if_emptied(origin);
        DropOutcome::Moved {
            from: origin,
            to: target.container,
            index,
        }
    }
}
