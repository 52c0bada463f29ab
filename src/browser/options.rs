use super::AddressResolver;

/// Browsing defaults shared by every page in the shell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BrowserOptions {
    pub home_page: String,
    pub user_agent: String,
    pub resolver: AddressResolver,

    /// Label of tabs opened with the "+" button.
    pub new_tab_label: String,

    /// Label of the tab the shell starts with.
    pub welcome_label: String,

    /// What the welcome tab loads, if anything.
    pub welcome_page: Option<String>,

    /// Factor applied per zoom in/out step.
    pub zoom_step: f32,

    /// Duration of the page fade-out/fade-in around a load.
    pub fade_seconds: f32,

    /// Edge length of the favicon shown in a tab label, in points.
    pub favicon_size: f32,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            home_page: "https://mirea.ru".to_owned(),
            user_agent: "JFXWeb Browser by Miyo - AppleWebKit/555.99".to_owned(),
            resolver: AddressResolver::default(),
            new_tab_label: "New Tab".to_owned(),
            welcome_label: " Welcome ".to_owned(),
            welcome_page: None,
            zoom_step: 1.1,
            fade_seconds: 1.0,
            favicon_size: 15.0,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let options: BrowserOptions =
            serde_json::from_str(r#"{ "home_page": "https://www.rust-lang.org" }"#).unwrap();
        assert_eq!(options.home_page, "https://www.rust-lang.org");
        assert_eq!(options.user_agent, BrowserOptions::default().user_agent);
        assert_eq!(options.resolver.schemes, ["http", "https", "ftp"]);
    }
}
