//! General options handed to the site generator
use serde::Deserialize;

/// [`GeneralAttribute`] - Generator options that aren't tied to a concrete
/// output format
/// * `extensions` - Generator extension modules loaded for the build
/// * `highlight_language` - Default highlighting applied to literal blocks
/// * `templates_path` - Directories containing page templates
/// * `exclude_patterns` - Source patterns skipped when collecting documents
///
/// ### Tests
///
/// ```rust
/// use lgdocs::config_file::general::GeneralAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[general]
///     extensions = [ 'breathe' ]
///     highlight_language = 'cpp'
///"#;
///
/// let config: GeneralAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the lgdocs toml file");
///
/// assert_eq!(config.extensions, Some(vec!["breathe"]));
/// assert_eq!(config.highlight_language, Some("cpp"));
/// assert_eq!(config.templates_path, None);
/// assert_eq!(config.exclude_patterns, None);
/// ```
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct GeneralAttribute<'a> {
    #[serde(borrow)]
    pub extensions: Option<Vec<&'a str>>,
    pub highlight_language: Option<&'a str>,
    pub templates_path: Option<Vec<&'a str>>,
    pub exclude_patterns: Option<Vec<&'a str>>,
}
