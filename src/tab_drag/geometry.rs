use egui::{Pos2, Rect, Vec2};

use super::types::{ContainerId, TabId};

/// Screen-space geometry of the tab strips, as last laid out.
///
/// A `None` means the lookup failed (window closed, widget never laid out) and callers treat
/// the owning container as "no target".
pub trait TabGeometry {
    fn container_rect(&self, container: ContainerId) -> Option<Rect>;
    fn tab_rect(&self, tab: TabId) -> Option<Rect>;
}

/// A [`TabGeometry`] filled in by the UI pass.
#[derive(Debug, Default)]
pub struct ScreenRects {
    containers: ahash::HashMap<ContainerId, Rect>,
    tabs: ahash::HashMap<TabId, Rect>,
}

impl ScreenRects {
    pub fn set_container_rect(&mut self, container: ContainerId, rect: Rect) {
        self.containers.insert(container, rect);
    }

    /// Record a tab label's rect. Only the label counts, not the whole tab button.
    pub fn set_tab_rect(&mut self, tab: TabId, rect: Rect) {
        self.tabs.insert(tab, rect);
    }

    pub fn forget_container(&mut self, container: ContainerId) {
        self.containers.remove(&container);
    }

    pub fn forget_tab(&mut self, tab: TabId) {
        self.tabs.remove(&tab);
    }

    pub fn clear(&mut self) {
        self.containers.clear();
        self.tabs.clear();
    }
}

impl TabGeometry for ScreenRects {
    fn container_rect(&self, container: ContainerId) -> Option<Rect> {
        self.containers.get(&container).copied()
    }

    fn tab_rect(&self, tab: TabId) -> Option<Rect> {
        self.tabs.get(&tab).copied()
    }
}

/// Local viewport coordinates to screen coordinates.
pub fn local_to_screen(viewport_inner: Rect, local: Pos2) -> Pos2 {
    viewport_inner.min + local.to_vec2()
}

pub fn rect_local_to_screen(viewport_inner: Rect, local: Rect) -> Rect {
    local.translate(viewport_inner.min.to_vec2())
}

/// Screen coordinates to local viewport coordinates, if inside the viewport.
pub fn screen_to_local(viewport_inner: Rect, screen: Pos2) -> Option<Pos2> {
    if !viewport_inner.contains(screen) {
        return None;
    }
    let delta: Vec2 = screen - viewport_inner.min;
    Some(Pos2::new(delta.x, delta.y))
}

/// The pointer in screen space, while the viewport of `ctx` has focus.
pub fn pointer_pos_in_screen(ctx: &egui::Context) -> Option<Pos2> {
    ctx.input(|i| {
        let local = i.pointer.interact_pos().or_else(|| i.pointer.latest_pos())?;
        let inner = i.viewport().inner_rect?;
        Some(local_to_screen(inner, local))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_and_screen_round_trip_inside_viewport() {
        let inner = Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(400.0, 300.0));
        let screen = local_to_screen(inner, Pos2::new(10.0, 20.0));
        assert_eq!(screen, Pos2::new(110.0, 70.0));
        assert_eq!(screen_to_local(inner, screen), Some(Pos2::new(10.0, 20.0)));
        assert_eq!(screen_to_local(inner, Pos2::new(0.0, 0.0)), None);
    }

    #[test]
    fn forgotten_container_has_no_rect() {
        let mut rects = ScreenRects::default();
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(10.0));
        rects.set_container_rect(ContainerId(1), rect);
        assert_eq!(rects.container_rect(ContainerId(1)), Some(rect));
        rects.forget_container(ContainerId(1));
        assert_eq!(rects.container_rect(ContainerId(1)), None);
    }
}
