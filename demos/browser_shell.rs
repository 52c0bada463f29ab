// Hide the console window on Windows in release.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use egui_browser_shell::browser::{EngineEvent, HistoryCursor, LoadState, SessionHistory};
use egui_browser_shell::{BrowserOptions, BrowserShell, TabDragOptions, WebEngine};

/// Pretends to load pages: progress advances a little every frame, then the load succeeds.
#[derive(Default)]
struct StubEngine {
    history: SessionHistory,
    user_agent: String,
    zoom: f32,
    state: LoadState,
    progress: f32,
    events: Vec<EngineEvent>,
}

impl StubEngine {
    fn new() -> Self {
        Self {
            zoom: 1.0,
            progress: -1.0,
            ..Default::default()
        }
    }

    fn start_load(&mut self) {
        let location = self.location().to_owned();
        log::debug!("stub engine ({}) loading {location:?}", self.user_agent);
        self.set_state(LoadState::Scheduled);
        self.events.push(EngineEvent::LocationChanged(location));
        self.progress = 0.0;
        self.set_state(LoadState::Running);
    }

    fn set_state(&mut self, state: LoadState) {
        self.state = state;
        self.events.push(EngineEvent::StateChanged(state));
    }
}

impl WebEngine for StubEngine {
    fn load(&mut self, url: &str) {
        if url.is_empty() {
            self.cancel();
            return;
        }
        self.history.push(url);
        self.start_load();
    }

    fn reload(&mut self) {
        self.start_load();
    }

    fn go(&mut self, delta: i32) {
        if self.history.go(delta).is_some() {
            self.start_load();
        }
    }

    fn cancel(&mut self) {
        if self.state.is_loading() {
            self.progress = -1.0;
            self.set_state(LoadState::Cancelled);
        }
    }

    fn set_user_agent(&mut self, user_agent: &str) {
        self.user_agent = user_agent.to_owned();
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    fn zoom(&self) -> f32 {
        self.zoom
    }

    fn location(&self) -> &str {
        self.history.current().map_or("", |e| e.url.as_str())
    }

    fn title(&self) -> &str {
        self.history.current().map_or("", |e| e.title.as_str())
    }

    fn load_state(&self) -> LoadState {
        self.state
    }

    fn progress(&self) -> f32 {
        self.progress
    }

    fn history(&self) -> HistoryCursor {
        self.history.cursor()
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        if self.state == LoadState::Running {
            self.progress = (self.progress + 0.02).min(1.0);
            if self.progress >= 1.0 {
                let title = url::Url::parse(self.location())
                    .ok()
                    .and_then(|u| u.host_str().map(str::to_owned))
                    .unwrap_or_else(|| "Untitled".to_owned());
                self.history.set_current_title(title.clone());
                self.events.push(EngineEvent::TitleChanged(title));
                self.set_state(LoadState::Succeeded);
            }
        }
        std::mem::take(&mut self.events)
    }
}

struct App {
    shell: BrowserShell<StubEngine>,
}

impl Default for App {
    fn default() -> Self {
        let options = BrowserOptions {
            welcome_page: Some("https://mirea.ru".to_owned()),
            ..Default::default()
        };
        Self {
            shell: BrowserShell::new(options, TabDragOptions::default(), StubEngine::new),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("egui_browser_shell_demo_status").show(ctx, |ui| {
            let status = match self.shell.last_outcome() {
                Some(outcome) => format!("Last drop: {outcome:?}"),
                None => "Drag a tab to reorder it, onto another window to move it, \
                         or outside to tear it off."
                    .to_owned(),
            };
            ui.add(egui::Label::new(status).selectable(false));
        });
        self.shell.show(ctx);
        ctx.request_repaint_after(std::time::Duration::from_millis(30));
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("egui_browser_shell demo"),
        ..Default::default()
    };

    eframe::run_native(
        "egui_browser_shell demo",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )
}
