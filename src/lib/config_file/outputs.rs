//! The files lgdocs generates into the docs root
use serde::Deserialize;

/// [`OutputsAttribute`] - Relative paths, from the docs root, of the
/// artifacts written on every run
/// * `site_config` - The resolved site configuration record, serialized
/// for the downstream generator
/// * `substitutions` - The version stamp substitution fragment
/// * `impressum` - The legal notice text file
///
/// ### Tests
///
/// ```rust
/// use lgdocs::config_file::outputs::OutputsAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[outputs]
///     substitutions = 'generated/subs.rst'
///"#;
///
/// let config: OutputsAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the lgdocs toml file");
///
/// assert_eq!(config.substitutions, Some("generated/subs.rst"));
/// assert_eq!(config.site_config, None);
/// assert_eq!(config.impressum, None);
/// ```
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputsAttribute<'a> {
    #[serde(borrow)]
    pub site_config: Option<&'a str>,
    pub substitutions: Option<&'a str>,
    pub impressum: Option<&'a str>,
}
