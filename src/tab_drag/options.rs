use egui::{Color32, Vec2};

/// Options for [`super::TabDragTracker`] and the drag affordances drawn by the shell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabDragOptions {
    /// How far below the first tab label (in points) a drop is still accepted by a tab strip.
    ///
    /// Only the tab-strip row accepts drops; the content area below it does not.
    pub drop_band_below_tabs: f32,

    /// Vertical gap between the bottom of the target tab label and the overlay marker.
    pub marker_offset_y: f32,

    /// Horizontal gap right of the last tab label when the marker shows an append.
    pub marker_append_offset_x: f32,

    pub marker_size: Vec2,
    pub marker_color: Color32,

    /// Padding added to the tab label size for the drag preview window.
    pub preview_padding: f32,
    pub drag_preview_fill: Color32,

    /// Inner size of a window created by tearing off a tab.
    pub detached_window_size: Vec2,
}

impl Default for TabDragOptions {
    fn default() -> Self {
        Self {
            drop_band_below_tabs: 60.0,
            marker_offset_y: 10.0,
            marker_append_offset_x: 13.0,
            marker_size: Vec2::new(3.0, 10.0),
            marker_color: Color32::RED,
            preview_padding: 10.0,
            drag_preview_fill: Color32::from_gray(0xDD),
            detached_window_size: Vec2::new(800.0, 600.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tab_strip_metrics() {
        let opt = TabDragOptions::default();
        assert_eq!(opt.drop_band_below_tabs, 60.0);
        assert_eq!(opt.marker_size, Vec2::new(3.0, 10.0));
        assert_eq!(opt.preview_padding, 10.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_ron_falls_back_to_defaults() {
        let opt: TabDragOptions = ron::from_str("(drop_band_below_tabs: 40.0)").unwrap();
        assert_eq!(opt.drop_band_below_tabs, 40.0);
        assert_eq!(opt.marker_append_offset_x, 13.0);
    }
}
