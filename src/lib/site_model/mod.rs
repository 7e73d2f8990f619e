pub mod api_docs;
pub mod general;
pub mod html;
pub mod outputs;
pub mod project;

use serde::Serialize;

use self::{
    api_docs::ApiDocsModel, general::GeneralModel, html::HtmlModel, outputs::OutputsModel,
    project::ProjectModel,
};

/// The resolved, read only record of everything the documentation build
/// needs: the user overrides from `lgdocs.toml` merged over the upstream
/// Looking Glass Proxy site defaults.
///
/// Serialized as-is into the site configuration artifact consumed by the
/// downstream generator.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SiteModel<'a> {
    pub project: ProjectModel<'a>,
    pub general: GeneralModel<'a>,
    pub html: HtmlModel<'a>,
    pub api_docs: ApiDocsModel<'a>,
    #[serde(skip)]
    pub outputs: OutputsModel<'a>,
}
