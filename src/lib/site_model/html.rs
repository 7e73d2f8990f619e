use std::borrow::Cow;

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize, Default)]
pub struct HtmlModel<'a> {
    pub theme: Cow<'a, str>,
    pub logo: Cow<'a, str>,
    pub static_path: Vec<Cow<'a, str>>,
    pub theme_options: ThemeOptionsModel<'a>,
}

/// The theme specific options record, nested under the HTML output options
/// in the serialized site configuration
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ThemeOptionsModel<'a> {
    pub canonical_url: Cow<'a, str>,
    pub analytics_id: Cow<'a, str>,
    pub display_version: bool,
    pub prev_next_buttons_location: Cow<'a, str>,
    pub style_external_links: bool,
    pub logo_only: bool,
    pub collapse_navigation: bool,
    pub sticky_navigation: bool,
    pub navigation_depth: u8,
    pub includehidden: bool,
    pub titles_only: bool,
}

impl Default for ThemeOptionsModel<'_> {
    fn default() -> Self {
        Self {
            canonical_url: Cow::Borrowed(""),
            analytics_id: Cow::Borrowed(""),
            display_version: false,
            prev_next_buttons_location: Cow::Borrowed("bottom"),
            style_external_links: false,
            logo_only: true,
            collapse_navigation: true,
            sticky_navigation: true,
            navigation_depth: 4,
            includehidden: true,
            titles_only: false,
        }
    }
}
