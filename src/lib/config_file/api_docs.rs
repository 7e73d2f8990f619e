//! The bridge towards the API doc extraction tool
use serde::Deserialize;

/// [`ApiDocsAttribute`] - Configures the Doxygen pre-build step and the
/// mapping that lets the site generator pick up its XML output
/// * `doxyfile` - The Doxygen configuration file invoked from the docs root
/// * `project` - The name under which the extracted API docs are registered
/// * `xml_output_dir` - Where the extraction tool leaves its XML tree
///
/// ### Tests
///
/// ```rust
/// use lgdocs::config_file::api_docs::ApiDocsAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[api_docs]
///     doxyfile = 'Doxyfile.in'
///     xml_output_dir = '_BUILD/xml/'
///"#;
///
/// let config: ApiDocsAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the lgdocs toml file");
///
/// assert_eq!(config.doxyfile, Some("Doxyfile.in"));
/// assert_eq!(config.project, None);
/// assert_eq!(config.xml_output_dir, Some("_BUILD/xml/"));
/// ```
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ApiDocsAttribute<'a> {
    #[serde(borrow)]
    pub doxyfile: Option<&'a str>,
    pub project: Option<&'a str>,
    pub xml_output_dir: Option<&'a str>,
}
