//! root file for the crate where the datastructures that holds the TOML
//! parsed data lives.
pub mod api_docs;
pub mod general;
pub mod html;
pub mod outputs;
pub mod project;

use serde::Deserialize;

use self::{
    api_docs::ApiDocsAttribute, general::GeneralAttribute, html::HtmlAttribute,
    outputs::OutputsAttribute, project::ProjectAttribute,
};

/// ```rust
/// use lgdocs::config_file::DocsConfigFile;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [project]
///     name = 'Some documentation site'
///
///     [html]
///     theme = 'alabaster'
///
///     [api_docs]
///     doxyfile = 'Doxyfile'
/// "#;
///
/// let config: DocsConfigFile = toml::from_str(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the lgdocs toml file");
///
/// assert_eq!(config.project.unwrap().name, Some("Some documentation site"));
/// assert_eq!(config.html.unwrap().theme, Some("alabaster"));
/// assert_eq!(config.api_docs.unwrap().doxyfile, Some("Doxyfile"));
/// assert!(config.general.is_none());
/// assert!(config.outputs.is_none());
/// ```
/// The representation of the `lgdocs.toml` override file. Every table and
/// every attribute is optional; whatever the user leaves out keeps the
/// upstream Looking Glass Proxy site defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct DocsConfigFile<'a> {
    #[serde(borrow)]
    pub project: Option<ProjectAttribute<'a>>,
    #[serde(borrow)]
    pub general: Option<GeneralAttribute<'a>>,
    #[serde(borrow)]
    pub html: Option<HtmlAttribute<'a>>,
    #[serde(borrow)]
    pub api_docs: Option<ApiDocsAttribute<'a>>,
    #[serde(borrow)]
    pub outputs: Option<OutputsAttribute<'a>>,
}

/// Deserializes the raw TOML text into the [`DocsConfigFile`] struct
pub fn docs_cfg_from_file(cfg: &str) -> Result<DocsConfigFile<'_>, toml::de::Error> {
    toml::from_str(cfg)
}
