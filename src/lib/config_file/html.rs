//! Options for the HTML render of the documentation
use serde::Deserialize;

/// [`HtmlAttribute`] - The HTML output surface of the site generator
/// * `theme` - The theme used for the rendered pages
/// * `logo` - Logo image placed in the sidebar
/// * `static_path` - Directories with static assets copied into the output
/// * `theme_options` - The nested, theme specific options record
///
/// ### Tests
///
/// ```rust
/// use lgdocs::config_file::html::HtmlAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[html]
///     theme = 'sphinx_rtd_theme'
///     logo = 'telescope-logo.png'
///     [theme_options]
///     navigation_depth = 2
///     logo_only = false
///"#;
///
/// let config: HtmlAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the lgdocs toml file");
///
/// assert_eq!(config.theme, Some("sphinx_rtd_theme"));
/// assert_eq!(config.logo, Some("telescope-logo.png"));
///
/// let theme_options = config.theme_options.unwrap();
/// assert_eq!(theme_options.navigation_depth, Some(2));
/// assert_eq!(theme_options.logo_only, Some(false));
/// assert_eq!(theme_options.collapse_navigation, None);
/// ```
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct HtmlAttribute<'a> {
    #[serde(borrow)]
    pub theme: Option<&'a str>,
    pub logo: Option<&'a str>,
    pub static_path: Option<Vec<&'a str>>,
    pub theme_options: Option<ThemeOptionsAttribute<'a>>,
}

/// [`ThemeOptionsAttribute`] - The theme specific knobs, mirroring the
/// options record the theme documents
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeOptionsAttribute<'a> {
    #[serde(borrow)]
    pub canonical_url: Option<&'a str>,
    pub analytics_id: Option<&'a str>,
    pub display_version: Option<bool>,
    pub prev_next_buttons_location: Option<&'a str>,
    pub style_external_links: Option<bool>,
    pub logo_only: Option<bool>,
    pub collapse_navigation: Option<bool>,
    pub sticky_navigation: Option<bool>,
    pub navigation_depth: Option<u8>,
    pub includehidden: Option<bool>,
    pub titles_only: Option<bool>,
}
