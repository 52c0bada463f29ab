use std::net::IpAddr;

use url::{Host, Url};

/// What the address bar asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// A valid web address.
    Load(String),

    /// Anything else, as a search-engine URL.
    Search(String),
}

impl Navigation {
    /// The URL to hand to the engine.
    pub fn url(&self) -> &str {
        match self {
            Self::Load(url) | Self::Search(url) => url,
        }
    }
}

/// Resolves address-bar input into a URL or a web search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AddressResolver {
    /// Accepted URL schemes.
    pub schemes: Vec<String>,

    /// Prefix the (percent-encoded) query is appended to.
    pub search_template: String,
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self {
            schemes: ["http", "https", "ftp"].map(str::to_owned).to_vec(),
            search_template: "https://google.com/search?q=".to_owned(),
        }
    }
}

impl AddressResolver {
    pub fn resolve(&self, input: &str) -> Navigation {
        let input = input.trim();

        // `host.tld:port` parses as a URL with scheme `host.tld`; retry such input with http.
        let candidate = match Url::parse(input) {
            Ok(url) if url.has_host() || !url.scheme().contains('.') => Some(url),
            _ => Url::parse(&format!("http://{input}")).ok(),
        };

        match candidate {
            Some(url) if !input.is_empty() && self.is_valid(&url) => Navigation::Load(url.into()),
            _ => Navigation::Search(self.search_url(input)),
        }
    }

    pub fn search_url(&self, query: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{}{encoded}", self.search_template)
    }

    fn is_valid(&self, url: &Url) -> bool {
        if !self.schemes.iter().any(|s| s.eq_ignore_ascii_case(url.scheme())) {
            return false;
        }
        match url.host() {
            Some(Host::Domain(domain)) => is_valid_domain(domain),
            Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
            None => false,
        }
    }
}

/// Dot-separated labels ending in an alphabetic top-level label of at least two characters.
fn is_valid_domain(domain: &str) -> bool {
    if domain.parse::<IpAddr>().is_ok() {
        return true;
    }
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    if rest.is_empty() || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    rest.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
