//! Metadata about the documented project
use serde::Deserialize;

/// [`ProjectAttribute`] - Metadata stamped into the rendered site
/// * `name` - The documented project's name
/// * `author` - The author line shown by the site generator
/// * `copyright` - The copyright notice for the rendered pages
///
/// ### Tests
///
/// ```rust
/// use lgdocs::config_file::project::ProjectAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[project]
///     name = 'Telescope Looking Glass Proxy'
///     author = 'Tim Dettmar and contributors'
///"#;
///
/// let config: ProjectAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the lgdocs toml file");
///
/// assert_eq!(config.name, Some("Telescope Looking Glass Proxy"));
/// assert_eq!(config.author, Some("Tim Dettmar and contributors"));
/// assert_eq!(config.copyright, None);
/// ```
///
/// > Note: TOML tables are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the configuration file.
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectAttribute<'a> {
    #[serde(borrow)]
    pub name: Option<&'a str>,
    pub author: Option<&'a str>,
    pub copyright: Option<&'a str>,
}
