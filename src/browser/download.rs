/// Locations ending with one of these are offered as downloads instead of being browsed.
pub const DOWNLOADABLE_EXTENSIONS: [&str; 38] = [
    ".doc", ".xls", ".zip", ".tgz", ".jar", ".mp3", ".txt", ".mp4", ".exe", ".msi", ".pdf",
    ".docx", ".css", ".js", ".psd", ".svg", ".jpg", ".png", ".bmp", ".gif", ".dmg", ".bat",
    ".dll", ".xml", ".xlsx", ".rar", ".7z", ".htm", ".avi", ".torrent", ".bin", ".iso", ".ini",
    ".midi", ".ppt", ".pptx", ".wav", ".sai",
];

/// A location that looks like a file to save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub extension: &'static str,

    /// Last path segment, suggested as the file name.
    pub file_name: String,

    pub dialog_title: String,
}

/// Matches `location` against [`DOWNLOADABLE_EXTENSIONS`], first match wins.
pub fn sniff_download(location: &str) -> Option<DownloadRequest> {
    let slash = location.rfind('/')?;
    let extension = DOWNLOADABLE_EXTENSIONS
        .iter()
        .copied()
        .find(|ext| location.ends_with(ext))?;
    Some(DownloadRequest {
        url: location.to_owned(),
        extension,
        file_name: location[slash + 1..].to_owned(),
        dialog_title: format!("Save {location}"),
    })
}

/// Save dialog and copy, performed outside the shell.
pub trait DownloadHandler {
    fn offer(&mut self, request: DownloadRequest);
}

/// Logs download offers and does nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDownloads;

impl DownloadHandler for LogDownloads {
    fn offer(&mut self, request: DownloadRequest) {
        log::info!(
            "download offered: {} as {:?} ({})",
            request.url,
            request.file_name,
            request.extension
        );
    }
}
