use super::{
    favicon_url, sniff_download, BrowserOptions, DownloadRequest, EngineEvent, LoadState,
    Navigation, PageFade, WebEngine,
};

/// What the shell must do after a page has processed its engine's events.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEffect {
    /// The page title changed; the owning tab shows it.
    SetTabLabel(String),

    /// A load finished; fetch this icon for the owning tab.
    FetchFavicon(String),

    /// The location points at a file rather than a page.
    OfferDownload(DownloadRequest),
}

/// One browsing surface: the pane type of a browser tab.
pub struct BrowserPage<E> {
    engine: E,
    address: String,
    title: String,
    favicon: Option<egui::TextureHandle>,
    fade: PageFade,
    last_error: Option<String>,
}

impl<E: WebEngine> BrowserPage<E> {
    pub fn new(mut engine: E, options: &BrowserOptions) -> Self {
        engine.set_user_agent(&options.user_agent);
        let address = engine.location().to_owned();
        Self {
            engine,
            address,
            title: String::new(),
            favicon: None,
            fade: PageFade::default(),
            last_error: None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Address-bar text. Editable until submitted; replaced on every location change.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn address_mut(&mut self) -> &mut String {
        &mut self.address
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn favicon(&self) -> Option<&egui::TextureHandle> {
        self.favicon.as_ref()
    }

    pub fn set_favicon(&mut self, favicon: Option<egui::TextureHandle>) {
        self.favicon = favicon;
    }

    pub fn fade(&self) -> PageFade {
        self.fade
    }

    /// Description of the last failed load, cleared when the next load starts.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn load(&mut self, url: &str) {
        log::debug!("page load url={url:?}");
        self.engine.load(url);
    }

    /// Load whatever the address bar holds, or search for it.
    pub fn submit_address(&mut self, options: &BrowserOptions) -> Navigation {
        let navigation = options.resolver.resolve(&self.address);
        self.address = navigation.url().to_owned();
        self.load(navigation.url());
        navigation
    }

    pub fn go_home(&mut self, options: &BrowserOptions) {
        self.load(&options.home_page);
    }

    /// Returns whether the engine was asked to move.
    pub fn back(&mut self) -> bool {
        let delta = self.engine.history().back_delta();
        if delta != 0 {
            self.engine.go(delta);
        }
        delta != 0
    }

    pub fn forward(&mut self) -> bool {
        let delta = self.engine.history().forward_delta();
        if delta != 0 {
            self.engine.go(delta);
        }
        delta != 0
    }

    pub fn reload(&mut self) -> bool {
        let can_reload = self.engine.history().can_reload();
        if can_reload {
            self.engine.reload();
        }
        can_reload
    }

    pub fn stop(&mut self) {
        self.engine.cancel();
    }

    pub fn zoom_in(&mut self, step: f32) {
        let zoom = self.engine.zoom() * step;
        self.engine.set_zoom(zoom);
    }

    pub fn zoom_out(&mut self, step: f32) {
        let zoom = self.engine.zoom() / step;
        self.engine.set_zoom(zoom);
    }

    /// Called when the owning tab is closed: unloads the page so nothing keeps playing.
    pub fn close(&mut self) {
        self.engine.load("");
    }

    /// Drains engine events into page state.
    pub fn update(&mut self) -> Vec<PageEffect> {
        let mut effects = Vec::new();
        for event in self.engine.poll_events() {
            match event {
                EngineEvent::LocationChanged(location) => {
                    if let Some(request) = sniff_download(&location) {
                        effects.push(PageEffect::OfferDownload(request));
                    }
                    self.address = location;
                }
                EngineEvent::TitleChanged(title) => {
                    effects.push(PageEffect::SetTabLabel(title.clone()));
                    self.title = title;
                }
                EngineEvent::StateChanged(state) => {
                    self.fade.on_state(state);
                    match state {
                        LoadState::Scheduled => self.last_error = None,
                        LoadState::Succeeded => match favicon_url(self.engine.location()) {
                            Some(url) => effects.push(PageEffect::FetchFavicon(url)),
                            None => self.favicon = None,
                        },
                        LoadState::Failed => {
                            log::warn!("page load failed: {}", self.engine.location());
                        }
                        _ => {}
                    }
                }
                EngineEvent::Failed(reason) => {
                    log::warn!("page load failed: {reason}");
                    self.last_error = Some(reason);
                }
            }
        }
        effects
    }
}
