use crate::tab_drag::{ContainerId, TabId, WindowId};

/// Errors surfaced by the window layer and by the browsing collaborators.
#[derive(Debug)]
pub enum ShellError {
    UnknownTab(TabId),
    UnknownContainer(ContainerId),
    UnknownWindow(WindowId),

    /// The root window lives as long as the shell itself.
    CannotCloseRoot,

    /// A network-bound collaborator (favicon, download) failed.
    Fetch(String),
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTab(id) => write!(f, "unknown tab: {id:?}"),
            Self::UnknownContainer(id) => write!(f, "unknown tab container: {id:?}"),
            Self::UnknownWindow(id) => write!(f, "unknown window: {id:?}"),
            Self::CannotCloseRoot => write!(f, "the root window cannot be closed"),
            Self::Fetch(err) => write!(f, "fetch failed: {err}"),
        }
    }
}

impl std::error::Error for ShellError {}

pub type Result<T, E = ShellError> = std::result::Result<T, E>;
