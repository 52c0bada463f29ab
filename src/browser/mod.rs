//! Browsing glue for a tab's content: address resolution, navigation rules, load feedback,
//! favicons and download sniffing.
//!
//! Page rendering and networking live behind [`WebEngine`]; favicon fetching and saving files
//! live behind [`FaviconSource`] and [`DownloadHandler`].

mod address;
mod download;
mod engine;
mod favicon;
mod history;
mod load;
mod options;
mod page;

pub use address::{AddressResolver, Navigation};
pub use download::{
    sniff_download, DownloadHandler, DownloadRequest, LogDownloads, DOWNLOADABLE_EXTENSIONS,
};
pub use engine::{EngineEvent, WebEngine};
pub use favicon::{favicon_url, FaviconSource, NoFavicons};
pub use history::{HistoryCursor, HistoryEntry, SessionHistory};
pub use load::{progress_bar_visible, LoadState, PageFade};
pub use options::BrowserOptions;
pub use page::{BrowserPage, PageEffect};
