use egui::{Pos2, Rect};
use itertools::Itertools as _;

use super::container::TabContainer;
use super::geometry::TabGeometry;
use super::types::{DropTarget, TabId};
use super::windows::TabWindows;

/// Finds which registered tab strip a screen point falls into, and where a tab would be inserted.
#[derive(Clone, Copy, Debug)]
pub struct DropTargetLocator {
    /// How far below the first tab label a point may be and still count as the tab-strip row.
    pub band_below_tabs: f32,
}

impl Default for DropTargetLocator {
    fn default() -> Self {
        Self {
            band_below_tabs: 60.0,
        }
    }
}

impl DropTargetLocator {
    pub fn new(band_below_tabs: f32) -> Self {
        Self { band_below_tabs }
    }

    /// The first registered container whose rect contains `point` decides the result.
    ///
    /// Containers whose geometry cannot be resolved are skipped. Containers must not overlap on
    /// screen for the answer to be unambiguous.
    pub fn locate<Pane>(
        &self,
        point: Pos2,
        windows: &TabWindows<Pane>,
        geometry: &dyn TabGeometry,
    ) -> Option<DropTarget> {
        for container_id in windows.registry().iter() {
            let Some(container) = windows.container(container_id) else {
                // Stale entry: the window is gone but the registry wasn't told yet.
                continue;
            };
            let Some(container_rect) = geometry.container_rect(container_id) else {
                continue;
            };
            if !container_rect.contains(point) {
                continue;
            }

            let Some(tab_rects) = tab_rects(container, geometry) else {
                log::debug!("locate: skipping {container_id:?}, tab geometry unavailable");
                continue;
            };

            return self
                .insertion_index(point, &tab_rects)
                .map(|index| DropTarget {
                    container: container_id,
                    index,
                });
        }
        None
    }

    /// Insertion index for `point` among tab label rects, or `None` if the point is outside the
    /// tab-strip row.
    pub fn insertion_index(&self, point: Pos2, tab_rects: &[Rect]) -> Option<usize> {
        let (Some(first), Some(last)) = (tab_rects.first(), tab_rects.last()) else {
            return Some(0);
        };

        if point.y > first.max.y + self.band_below_tabs || point.y < first.min.y {
            return None;
        }

        if point.x < first.center().x {
            return Some(0);
        }
        if point.x > last.center().x {
            return Some(tab_rects.len());
        }

        let index = tab_rects
            .iter()
            .tuple_windows()
            .position(|(left, right)| left.center().x <= point.x && point.x <= right.center().x)
            .map_or(0, |i| i + 1);
        Some(index)
    }
}

/// All tab label rects of `container`, or `None` if any of them can't be resolved.
fn tab_rects<Pane>(
    container: &TabContainer<Pane>,
    geometry: &dyn TabGeometry,
) -> Option<Vec<Rect>> {
    container
        .tab_ids()
        .map(|tab: TabId| geometry.tab_rect(tab))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;

    fn strip(n: usize) -> Vec<Rect> {
        // Labels 80 wide, 20 tall, 10 apart, starting at x=0, y=0.
        (0..n)
            .map(|i| Rect::from_min_size(Pos2::new(i as f32 * 90.0, 0.0), Vec2::new(80.0, 20.0)))
            .collect()
    }

    #[test]
    fn empty_strip_accepts_index_zero() {
        let locator = DropTargetLocator::default();
        assert_eq!(locator.insertion_index(Pos2::new(500.0, 500.0), &[]), Some(0));
    }

    #[test]
    fn left_of_first_midpoint_is_zero_and_right_of_last_is_append() {
        let locator = DropTargetLocator::default();
        let rects = strip(3);
        assert_eq!(locator.insertion_index(Pos2::new(39.0, 10.0), &rects), Some(0));
        assert_eq!(locator.insertion_index(Pos2::new(221.0, 10.0), &rects), Some(3));
    }

    #[test]
    fn between_midpoints_picks_the_boundary() {
        let locator = DropTargetLocator::default();
        let rects = strip(3);
        // Midpoints at 40, 130, 220.
        assert_eq!(locator.insertion_index(Pos2::new(100.0, 10.0), &rects), Some(1));
        assert_eq!(locator.insertion_index(Pos2::new(170.0, 10.0), &rects), Some(2));
    }

    #[test]
    fn band_below_first_tab_is_sixty_points() {
        let locator = DropTargetLocator::default();
        let rects = strip(2);
        assert_eq!(locator.insertion_index(Pos2::new(10.0, 80.0), &rects), Some(0));
        assert_eq!(locator.insertion_index(Pos2::new(10.0, 80.5), &rects), None);
        assert_eq!(locator.insertion_index(Pos2::new(10.0, -1.0), &rects), None);
    }
}
