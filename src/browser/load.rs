/// Lifecycle of a page load, as reported by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    NotStarted,
    Scheduled,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl LoadState {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Scheduled | Self::Running)
    }
}

/// The progress bar is shown only while a load is in flight (`0 <= progress < 1`).
pub fn progress_bar_visible(progress: f32) -> bool {
    (0.0..1.0).contains(&progress)
}

/// Opacity of the page area: fades out when a load is scheduled, back in when it succeeds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageFade {
    target: f32,
}

impl Default for PageFade {
    fn default() -> Self {
        Self { target: 1.0 }
    }
}

impl PageFade {
    /// Opacity the page is animating towards.
    pub fn target(self) -> f32 {
        self.target
    }

    pub fn on_state(&mut self, state: LoadState) {
        match state {
            LoadState::Scheduled => self.target = 0.0,
            LoadState::Succeeded => self.target = 1.0,
            _ => {}
        }
    }

    /// Current opacity, animated over `seconds`.
    pub fn opacity(self, ctx: &egui::Context, id: egui::Id, seconds: f32) -> f32 {
        ctx.animate_value_with_time(id, self.target, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_hides_when_idle_or_done() {
        assert!(!progress_bar_visible(-1.0));
        assert!(progress_bar_visible(0.0));
        assert!(progress_bar_visible(0.5));
        assert!(!progress_bar_visible(1.0));
    }

    #[test]
    fn fade_targets_follow_load_state() {
        let mut fade = PageFade::default();
        assert_eq!(fade.target(), 1.0);
        fade.on_state(LoadState::Scheduled);
        assert_eq!(fade.target(), 0.0);
        fade.on_state(LoadState::Running);
        assert_eq!(fade.target(), 0.0);
        fade.on_state(LoadState::Succeeded);
        assert_eq!(fade.target(), 1.0);
    }
}
