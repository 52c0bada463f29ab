use url::Url;

use crate::Result;

/// `scheme://host/favicon.ico` for a page location.
///
/// `None` for `about:blank`, an empty location, or a location without a host.
pub fn favicon_url(location: &str) -> Option<String> {
    if location.is_empty() || location == "about:blank" {
        return None;
    }
    let url = match Url::parse(location) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("favicon: cannot parse location {location:?}: {err}");
            return None;
        }
    };
    let host = url.host_str()?;
    Some(format!("{}://{host}/favicon.ico", url.scheme()))
}

/// Fetches and decodes a favicon.
pub trait FaviconSource {
    fn fetch(&mut self, url: &str) -> Result<egui::ColorImage>;
}

/// Never finds an icon; tabs keep no icon.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFavicons;

impl FaviconSource for NoFavicons {
    fn fetch(&mut self, url: &str) -> Result<egui::ColorImage> {
        Err(crate::ShellError::Fetch(format!("no favicon source for {url}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favicon_lives_at_the_host_root() {
        assert_eq!(
            favicon_url("https://mirea.ru/about/contacts?x=1").as_deref(),
            Some("https://mirea.ru/favicon.ico")
        );
        assert_eq!(
            favicon_url("http://example.com:8080/").as_deref(),
            Some("http://example.com/favicon.ico")
        );
    }

    #[test]
    fn blank_and_broken_locations_have_no_favicon() {
        assert_eq!(favicon_url(""), None);
        assert_eq!(favicon_url("about:blank"), None);
        assert_eq!(favicon_url("not a url"), None);
    }
}
