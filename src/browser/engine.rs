use super::{HistoryCursor, LoadState};

/// Something the engine reports between frames.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    LocationChanged(String),
    TitleChanged(String),
    StateChanged(LoadState),

    /// The load failed; carries the engine's description of why.
    Failed(String),
}

/// The web engine behind one page. Rendering and networking happen on its side.
pub trait WebEngine {
    fn load(&mut self, url: &str);

    fn reload(&mut self);

    /// Move `delta` entries through the session history.
    fn go(&mut self, delta: i32);

    fn cancel(&mut self);

    fn set_user_agent(&mut self, user_agent: &str);

    fn set_zoom(&mut self, zoom: f32);

    fn zoom(&self) -> f32;

    fn location(&self) -> &str;

    fn title(&self) -> &str;

    fn load_state(&self) -> LoadState;

    /// `-1.0` when idle, otherwise `0.0..=1.0`.
    fn progress(&self) -> f32;

    fn history(&self) -> HistoryCursor;

    /// Drains pending events, oldest first.
    fn poll_events(&mut self) -> Vec<EngineEvent>;
}
