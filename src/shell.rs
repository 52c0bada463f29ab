//! The egui browser shell: tab strips, toolbar and page area in every window, plus the drag
//! preview and drop marker while a tab is being dragged.

use egui::{
    Color32, Context, Key, LayerId, Order, Pos2, Rect, Sense, Ui, Vec2, ViewportBuilder,
    ViewportClass, ViewportId,
};

use crate::browser::{
    progress_bar_visible, BrowserOptions, BrowserPage, DownloadHandler, FaviconSource,
    LogDownloads, NoFavicons, PageEffect, WebEngine,
};
use crate::error::Result;
use crate::tab_drag::{
    pointer_pos_in_screen, rect_local_to_screen, ContainerId, DropOutcome, ScreenRects,
    TabContainer, TabDragOptions, TabDragTracker, TabId, TabWindows, WindowId, WindowKind,
};

/// Something the user did during the UI pass, applied once all windows are drawn.
#[derive(Clone, Debug, PartialEq)]
enum ShellEvent {
    Press {
        tab: TabId,
        point: Pos2,
        label_size: Vec2,
    },
    Move(Pos2),

    /// `None` when the pointer left the window; the last known position is used.
    Release(Option<Pos2>),
    CancelDrag,
    Select(TabId),
    CloseTab(TabId),
    NewTab(ContainerId),
    CloseWindow(WindowId),
}

/// A tabbed browser whose tabs can be reordered, moved between windows, and torn off.
pub struct BrowserShell<E> {
    windows: TabWindows<BrowserPage<E>>,
    tracker: TabDragTracker,
    rects: ScreenRects,
    options: BrowserOptions,
    new_engine: Box<dyn FnMut() -> E>,
    favicons: Box<dyn FaviconSource>,
    downloads: Box<dyn DownloadHandler>,
    pending: Vec<ShellEvent>,
    last_pointer: Option<Pos2>,
    last_outcome: Option<DropOutcome>,
}

impl<E: WebEngine> BrowserShell<E> {
    /// A shell with one root window holding the welcome tab.
    pub fn new(
        options: BrowserOptions,
        drag_options: TabDragOptions,
        new_engine: impl FnMut() -> E + 'static,
    ) -> Self {
        let mut this = Self {
            windows: TabWindows::new(),
            tracker: TabDragTracker::new(drag_options),
            rects: ScreenRects::default(),
            options,
            new_engine: Box::new(new_engine),
            favicons: Box::new(NoFavicons),
            downloads: Box::new(LogDownloads),
            pending: Vec::new(),
            last_pointer: None,
            last_outcome: None,
        };

        let root = this.windows.root_container();
        let label = this.options.welcome_label.clone();
        let welcome_page = this.options.welcome_page.clone();
        if let Ok(tab) = this.open_tab(root, label) {
            if let (Some(url), Some(tab)) = (welcome_page, this.windows.tab_mut(tab)) {
                tab.pane.load(&url);
            }
        }
        this
    }

    pub fn with_favicon_source(mut self, favicons: impl FaviconSource + 'static) -> Self {
        self.favicons = Box::new(favicons);
        self
    }

    pub fn with_download_handler(mut self, downloads: impl DownloadHandler + 'static) -> Self {
        self.downloads = Box::new(downloads);
        self
    }

    pub fn windows(&self) -> &TabWindows<BrowserPage<E>> {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut TabWindows<BrowserPage<E>> {
        &mut self.windows
    }

    pub fn tracker(&self) -> &TabDragTracker {
        &self.tracker
    }

    pub fn options(&self) -> &BrowserOptions {
        &self.options
    }

    /// Outcome of the most recent finished drag gesture.
    pub fn last_outcome(&self) -> Option<DropOutcome> {
        self.last_outcome
    }

    /// Open a blank page in `container` and select it.
    pub fn open_tab(&mut self, container: ContainerId, label: impl Into<String>) -> Result<TabId> {
        let page = BrowserPage::new((self.new_engine)(), &self.options);
        let tab = self.windows.new_tab(label, page);
        self.windows.push_tab(container, tab)
    }

    /// Close a tab and unload its page. A detached window left empty closes with it.
    pub fn close_tab(&mut self, tab: TabId) -> Result<()> {
        if self.tracker.session().is_some_and(|s| s.tab() == tab) {
            self.tracker.cancel();
        }
        let mut closed = self.windows.close_tab(tab)?;
        closed.pane.close();
        self.rects.forget_tab(tab);
        Ok(())
    }

    /// Close a detached window and every tab still in it.
    pub fn close_window(&mut self, window: WindowId) -> Result<()> {
        let container = self.windows.window(window).map(|w| w.container());
        let tabs = self.windows.close_window(window)?;
        if let Some(container) = container {
            self.rects.forget_container(container);
        }
        for mut tab in tabs {
            if self.tracker.session().is_some_and(|s| s.tab() == tab.id()) {
                self.tracker.cancel();
            }
            self.rects.forget_tab(tab.id());
            tab.pane.close();
        }
        Ok(())
    }

    /// Draw every window, then apply what the user did.
    pub fn show(&mut self, ctx: &Context) {
        self.update_pages(ctx);
        self.rects.clear();

        self.show_root(ctx);
        let detached: Vec<WindowId> = self
            .windows
            .windows()
            .filter(|w| w.kind() == WindowKind::Detached)
            .map(|w| w.id())
            .collect();
        for window in detached {
            self.show_detached(ctx, window);
        }

        if self.tracker.is_dragging() {
            if ctx.input(|i| i.key_pressed(Key::Escape)) {
                self.pending.push(ShellEvent::CancelDrag);
            }
            ctx.request_repaint();
        }

        self.apply_pending(ctx);
        self.show_drag_overlays(ctx);
    }

    fn update_pages(&mut self, ctx: &Context) {
        for container in self.windows.containers_mut() {
            for tab in container.tabs_mut() {
                for effect in tab.pane.update() {
                    match effect {
                        PageEffect::SetTabLabel(label) => tab.label = label,
                        PageEffect::FetchFavicon(url) => {
                            let favicon = match self.favicons.fetch(&url) {
                                Ok(image) => Some(ctx.load_texture(
                                    format!("egui_browser_shell_favicon_{}", tab.id().as_u64()),
                                    image,
                                    egui::TextureOptions::LINEAR,
                                )),
                                Err(err) => {
                                    log::warn!("favicon {url}: {err}");
                                    None
                                }
                            };
                            tab.pane.set_favicon(favicon);
                        }
                        PageEffect::OfferDownload(request) => self.downloads.offer(request),
                    }
                }
            }
        }
    }

    fn show_root(&mut self, ctx: &Context) {
        let container = self.windows.root_container();
        egui::CentralPanel::default().show(ctx, |ui| {
            let inner = viewport_inner_rect(ctx);
            self.container_ui(ui, inner, container);
        });
    }

    fn show_detached(&mut self, ctx: &Context, window: WindowId) {
        let Some(shell_window) = self.windows.window(window) else {
            return;
        };
        let container = shell_window.container();
        let inner_size = shell_window.inner_size;
        let title = self
            .windows
            .container(container)
            .and_then(|c| c.selected_tab())
            .map(|t| t.label.trim().to_owned())
            .unwrap_or_else(|| "Browser".to_owned());

        let mut builder = ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(inner_size);
        if let Some(position) = shell_window.position {
            builder = builder.with_position(position);
        }

        let mut close_requested = false;
        ctx.show_viewport_immediate(window.viewport_id(), builder, |ctx, class| {
            if matches!(class, ViewportClass::Embedded) {
                egui::Window::new(title.clone())
                    .id(egui::Id::new(("egui_browser_shell_embedded", window.as_u64())))
                    .default_size(inner_size)
                    .show(ctx, |ui| {
                        let inner = viewport_inner_rect(ctx);
                        self.container_ui(ui, inner, container);
                    });
                return;
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                let inner = viewport_inner_rect(ctx);
                self.container_ui(ui, inner, container);
            });

            if ctx.input(|i| i.viewport().close_requested()) {
                close_requested = true;
            }
        });

        if close_requested {
            self.pending.push(ShellEvent::CloseWindow(window));
        }
    }

    /// Tab strip, toolbar and page of one container.
    ///
    /// `inner` is the viewport's inner rect on screen.
    fn container_ui(&mut self, ui: &mut Ui, inner: Rect, container: ContainerId) {
        let Some(tabs) = self.windows.container_mut(container) else {
            return;
        };
        self.rects
            .set_container_rect(container, rect_local_to_screen(inner, ui.max_rect()));

        tab_strip_ui(
            ui,
            inner,
            tabs,
            &self.options,
            &mut self.rects,
            &mut self.pending,
        );
        ui.separator();

        match tabs.selected_tab_mut() {
            Some(tab) => {
                let tab_id = tab.id();
                page_ui(ui, tab_id, &mut tab.pane, &self.options);
            }
            None => {
                ui.centered_and_justified(|ui| ui.weak("No tabs open"));
            }
        }
    }

    fn apply_pending(&mut self, ctx: &Context) {
        for event in std::mem::take(&mut self.pending) {
            self.apply(ctx, event);
        }
    }

    fn apply(&mut self, ctx: &Context, event: ShellEvent) {
        match event {
            ShellEvent::Press {
                tab,
                point,
                label_size,
            } => {
                self.last_pointer = Some(point);
                self.tracker.press(tab, point, label_size, &self.windows);
            }
            ShellEvent::Move(point) => {
                self.last_pointer = Some(point);
                self.tracker.drag_move(point, &mut self.windows, &self.rects);
            }
            ShellEvent::Release(point) => {
                let Some(tab) = self.tracker.session().map(|s| s.tab()) else {
                    return;
                };
                let Some(point) = point.or(self.last_pointer) else {
                    self.tracker.cancel();
                    return;
                };
                let outcome = self.tracker.release(point, &mut self.windows, &self.rects);
                if outcome == DropOutcome::Click {
                    self.select(tab);
                }
                self.last_outcome = Some(outcome);
                ctx.request_repaint_of(ViewportId::ROOT);
            }
            ShellEvent::CancelDrag => {
                self.tracker.cancel();
            }
            ShellEvent::Select(tab) => self.select(tab),
            ShellEvent::CloseTab(tab) => {
                if let Err(err) = self.close_tab(tab) {
                    log::debug!("close tab {tab:?}: {err}");
                }
            }
            ShellEvent::NewTab(container) => {
                let label = self.options.new_tab_label.clone();
                if let Err(err) = self.open_tab(container, label) {
                    log::debug!("new tab in {container:?}: {err}");
                }
            }
            ShellEvent::CloseWindow(window) => {
                if let Err(err) = self.close_window(window) {
                    log::debug!("close window {window:?}: {err}");
                }
            }
        }
    }

    fn select(&mut self, tab: TabId) {
        if let Some((container, index)) = self.windows.find_tab(tab) {
            if let Some(container) = self.windows.container_mut(container) {
                container.select(index);
            }
        }
    }

    fn show_drag_overlays(&self, ctx: &Context) {
        let Some(session) = self.tracker.session() else {
            return;
        };
        let options = &self.tracker.options;

        if let Some(rect) = session.preview().rect() {
            let text = session.preview().text.clone();
            show_overlay(ctx, "preview", rect, options.drag_preview_fill, Some(&text));
        }
        if let Some(rect) = session.marker().rect() {
            show_overlay(ctx, "marker", rect, options.marker_color, None);
        }
    }
}

fn tab_strip_ui<E: WebEngine>(
    ui: &mut Ui,
    inner: Rect,
    tabs: &TabContainer<BrowserPage<E>>,
    options: &BrowserOptions,
    rects: &mut ScreenRects,
    pending: &mut Vec<ShellEvent>,
) {
    let selected = tabs.selected();
    ui.horizontal(|ui| {
        for (index, tab) in tabs.tabs().iter().enumerate() {
            let id = tab.id();
            if let Some(favicon) = tab.pane.favicon() {
                ui.add(
                    egui::Image::new(favicon).fit_to_exact_size(Vec2::splat(options.favicon_size)),
                );
            }

            let response = tab_label_ui(ui, &tab.label, selected == Some(index));
            rects.set_tab_rect(id, rect_local_to_screen(inner, response.rect));

            if response.drag_started() {
                let press = ui.input(|i| i.pointer.press_origin());
                if let Some(press) = press {
                    pending.push(ShellEvent::Press {
                        tab: id,
                        point: inner.min + press.to_vec2(),
                        label_size: response.rect.size(),
                    });
                }
            }
            if response.dragged() {
                if let Some(point) = pointer_pos_in_screen(ui.ctx()) {
                    pending.push(ShellEvent::Move(point));
                }
            }
            if response.drag_stopped() {
                pending.push(ShellEvent::Release(pointer_pos_in_screen(ui.ctx())));
            }
            if response.clicked() {
                pending.push(ShellEvent::Select(id));
            }

            if tab.closable && ui.small_button("x").on_hover_text("Close tab").clicked() {
                pending.push(ShellEvent::CloseTab(id));
            }
        }

        if ui.button("+").on_hover_text("New tab").clicked() {
            pending.push(ShellEvent::NewTab(tabs.id()));
        }
    });
}

fn tab_label_ui(ui: &mut Ui, label: &str, selected: bool) -> egui::Response {
    let padding = ui.spacing().button_padding;
    let text_color = ui.visuals().text_color();
    let galley = ui.painter().layout_no_wrap(
        label.to_owned(),
        egui::TextStyle::Button.resolve(ui.style()),
        text_color,
    );
    let (rect, response) =
        ui.allocate_exact_size(galley.size() + padding * 2.0, Sense::click_and_drag());
    let response = response.on_hover_cursor(egui::CursorIcon::Grab);

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact_selectable(&response, selected);
        ui.painter()
            .rect_filled(rect, visuals.corner_radius, visuals.weak_bg_fill);
        ui.painter()
            .galley(rect.min + padding, galley, visuals.text_color());
    }
    response
}

fn page_ui<E: WebEngine>(
    ui: &mut Ui,
    tab: TabId,
    page: &mut BrowserPage<E>,
    options: &BrowserOptions,
) {
    ui.horizontal(|ui| {
        if ui.button("Home").clicked() {
            page.go_home(options);
        }
        let history = page.engine().history();
        if ui
            .add_enabled(history.can_go_back(), egui::Button::new("Back"))
            .clicked()
        {
            page.back();
        }
        if ui
            .add_enabled(history.can_go_forward(), egui::Button::new("Forward"))
            .clicked()
        {
            page.forward();
        }
        if ui
            .add_enabled(history.can_reload(), egui::Button::new("Reload"))
            .clicked()
        {
            page.reload();
        }

        let go_width = 40.0;
        let address = ui.add(
            egui::TextEdit::singleline(page.address_mut())
                .hint_text("Search or enter address")
                .desired_width((ui.available_width() - go_width).max(0.0)),
        );
        let submitted = address.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if ui.button("Go").clicked() || submitted {
            page.submit_address(options);
        }
    });

    let progress = page.engine().progress();
    if progress_bar_visible(progress) {
        ui.add(egui::ProgressBar::new(progress).desired_height(4.0));
    }
    if let Some(err) = page.last_error() {
        ui.colored_label(ui.visuals().error_fg_color, err);
    }

    let opacity = page
        .fade()
        .opacity(ui.ctx(), tab.egui_id().with("fade"), options.fade_seconds);
    let area = ui.available_rect_before_wrap();
    let response = ui.interact(area, tab.egui_id().with("page"), Sense::click());
    ui.scope_builder(egui::UiBuilder::new().max_rect(area), |ui| {
        ui.multiply_opacity(opacity);
        egui::Frame::canvas(ui.style()).show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.heading(page.title());
            ui.weak(page.engine().location());
            ui.label(format!("Zoom: {:.0}%", page.engine().zoom() * 100.0));
        });
    });

    response.context_menu(|ui| {
        if ui.button("Stop").clicked() {
            page.stop();
            ui.close();
        }
        if ui.button("Zoom in").clicked() {
            page.zoom_in(options.zoom_step);
            ui.close();
        }
        if ui.button("Zoom out").clicked() {
            page.zoom_out(options.zoom_step);
            ui.close();
        }
    });
}

/// A borderless, click-through, always-on-top window at `rect` (screen space).
///
/// Falls back to painting on top of the root viewport when the backend embeds viewports.
fn show_overlay(ctx: &Context, name: &str, rect: Rect, fill: Color32, text: Option<&str>) {
    let builder = ViewportBuilder::default()
        .with_title(name)
        .with_position(rect.min)
        .with_inner_size(rect.size())
        .with_decorations(false)
        .with_resizable(false)
        .with_always_on_top()
        .with_mouse_passthrough(true)
        .with_taskbar(false);
    let viewport_id = ViewportId::from_hash_of(("egui_browser_shell_overlay", name));

    ctx.show_viewport_immediate(viewport_id, builder, |ctx, class| {
        if matches!(class, ViewportClass::Embedded) {
            let local = rect.translate(-viewport_inner_rect(ctx).min.to_vec2());
            let painter =
                ctx.layer_painter(LayerId::new(Order::Tooltip, egui::Id::new(viewport_id)));
            paint_overlay(&painter, local, fill, text);
            return;
        }
        let painter = ctx.layer_painter(LayerId::background());
        paint_overlay(&painter, ctx.screen_rect(), fill, text);
    });
}

fn paint_overlay(painter: &egui::Painter, rect: Rect, fill: Color32, text: Option<&str>) {
    painter.rect_filled(rect, 0.0, fill);
    if let Some(text) = text {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(14.0),
            Color32::BLACK,
        );
    }
}

/// The current viewport's inner rect on screen; the origin if the backend doesn't report it.
fn viewport_inner_rect(ctx: &Context) -> Rect {
    ctx.input(|i| i.viewport().inner_rect)
        .unwrap_or_else(|| Rect::from_min_size(Pos2::ZERO, ctx.screen_rect().size()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{EngineEvent, HistoryCursor, LoadState, SessionHistory};
    use crate::tab_drag::TabGeometry;

    #[derive(Default)]
    struct TestEngine {
        history: SessionHistory,
        location: String,
        zoom: f32,
        events: Vec<EngineEvent>,
    }

    impl WebEngine for TestEngine {
        fn load(&mut self, url: &str) {
            self.history.push(url);
            self.location = url.to_owned();
        }
        fn reload(&mut self) {}
        fn go(&mut self, delta: i32) {
            self.history.go(delta);
        }
        fn cancel(&mut self) {}
        fn set_user_agent(&mut self, _user_agent: &str) {}
        fn set_zoom(&mut self, zoom: f32) {
            self.zoom = zoom;
        }
        fn zoom(&self) -> f32 {
            self.zoom
        }
        fn location(&self) -> &str {
            &self.location
        }
        fn title(&self) -> &str {
            ""
        }
        fn load_state(&self) -> LoadState {
            LoadState::NotStarted
        }
        fn progress(&self) -> f32 {
            -1.0
        }
        fn history(&self) -> HistoryCursor {
            self.history.cursor()
        }
        fn poll_events(&mut self) -> Vec<EngineEvent> {
            std::mem::take(&mut self.events)
        }
    }

    fn shell() -> BrowserShell<TestEngine> {
        BrowserShell::new(
            BrowserOptions::default(),
            TabDragOptions::default(),
            TestEngine::default,
        )
    }

    fn run_frame(ctx: &Context, shell: &mut BrowserShell<TestEngine>) {
        let _output = ctx.run(egui::RawInput::default(), |ctx| shell.show(ctx));
    }

    #[test]
    fn starts_with_the_welcome_tab() {
        let shell = shell();
        let root = shell.windows().root_container();
        let tabs = shell.windows().container(root).unwrap();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs.tabs()[0].label, " Welcome ");
        assert_eq!(tabs.selected(), Some(0));
    }

    #[test]
    fn welcome_page_is_loaded_when_configured() {
        let options = BrowserOptions {
            welcome_page: Some("https://mirea.ru".to_owned()),
            ..Default::default()
        };
        let shell = BrowserShell::new(options, TabDragOptions::default(), TestEngine::default);
        let root = shell.windows().root_container();
        let tab = shell.windows().container(root).unwrap().selected_tab().unwrap();
        assert_eq!(tab.pane.engine().location(), "https://mirea.ru");
    }

    #[test]
    fn page_titles_become_tab_labels() {
        let ctx = Context::default();
        let mut shell = shell();
        let root = shell.windows().root_container();
        let tab = shell.windows().container(root).unwrap().tabs()[0].id();
        shell
            .windows_mut()
            .tab_mut(tab)
            .unwrap()
            .pane
            .engine_mut()
            .events
            .push(EngineEvent::TitleChanged("Rust".to_owned()));

        run_frame(&ctx, &mut shell);
        assert_eq!(shell.windows().tab(tab).unwrap().label, "Rust");
    }

    #[test]
    fn new_tab_and_close_tab_events() {
        let ctx = Context::default();
        let mut shell = shell();
        let root = shell.windows().root_container();

        shell.apply(&ctx, ShellEvent::NewTab(root));
        let tabs = shell.windows().container(root).unwrap();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs.tabs()[1].label, "New Tab");
        assert_eq!(tabs.selected(), Some(1));

        let first = tabs.tabs()[0].id();
        shell.apply(&ctx, ShellEvent::CloseTab(first));
        assert_eq!(shell.windows().container(root).unwrap().len(), 1);
        assert!(shell.windows().tab(first).is_none());
    }

    #[test]
    fn closing_a_detached_window_closes_its_tabs() {
        let ctx = Context::default();
        let mut shell = shell();
        let (window, container) = shell
            .windows_mut()
            .create_detached_window(Pos2::new(300.0, 300.0), Vec2::new(800.0, 600.0));
        let tab = shell.open_tab(container, "Docs").unwrap();

        // Detached windows are embedded without a native backend.
        run_frame(&ctx, &mut shell);

        shell.apply(&ctx, ShellEvent::CloseWindow(window));
        assert!(shell.windows().window(window).is_none());
        assert!(shell.windows().tab(tab).is_none());
        assert!(!shell.windows().registry().contains(container));
    }

    #[test]
    fn root_window_cannot_be_closed() {
        let mut shell = shell();
        let root = shell.windows().root_window();
        assert!(shell.close_window(root).is_err());
    }

    #[test]
    fn drag_events_are_applied_in_order() {
        let ctx = Context::default();
        let mut shell = shell();
        let root = shell.windows().root_container();
        shell.open_tab(root, "Second").unwrap();

        // Lay the strip out once so the rects are known.
        run_frame(&ctx, &mut shell);
        let tabs: Vec<TabId> = shell.windows().container(root).unwrap().tab_ids().collect();
        let first = shell.rects.tab_rect(tabs[0]).unwrap();
        let second = shell.rects.tab_rect(tabs[1]).unwrap();

        shell.apply(
            &ctx,
            ShellEvent::Press {
                tab: tabs[0],
                point: first.center(),
                label_size: first.size(),
            },
        );
        let past_second = Pos2::new(second.max.x + 5.0, second.center().y);
        shell.apply(&ctx, ShellEvent::Move(past_second));
        assert!(shell.tracker().session().unwrap().marker().is_visible());

        shell.apply(&ctx, ShellEvent::Release(Some(past_second)));
        assert!(!shell.tracker().is_dragging());
        assert_eq!(
            shell.last_outcome(),
            Some(DropOutcome::Reordered {
                container: root,
                index: 1,
            })
        );
        let order: Vec<TabId> = shell.windows().container(root).unwrap().tab_ids().collect();
        assert_eq!(order, [tabs[1], tabs[0]]);
    }
}
