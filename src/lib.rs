//! A tabbed browser shell for egui with tabs that can be reordered, moved between windows,
//! and torn off into new native windows.
//!
//! - [`tab_drag`]: the drag-and-drop model, independent of a running UI.
//! - [`browser`]: address resolution, navigation rules and load feedback for a tab's page.
//! - [`BrowserShell`]: draws it all with egui, one native viewport per window.

#![forbid(unsafe_code)]

pub mod browser;
mod error;
pub mod shell;
pub mod tab_drag;

pub use browser::{BrowserOptions, BrowserPage, WebEngine};
pub use error::{Result, ShellError};
pub use shell::BrowserShell;
pub use tab_drag::{DropOutcome, TabDragOptions, TabDragTracker, TabWindows};
