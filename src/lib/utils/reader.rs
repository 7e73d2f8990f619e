use crate::{
    config_file::{
        api_docs::ApiDocsAttribute, general::GeneralAttribute, html::HtmlAttribute,
        outputs::OutputsAttribute, project::ProjectAttribute, DocsConfigFile,
    },
    site_model::{
        api_docs::ApiDocsModel,
        general::GeneralModel,
        html::{HtmlModel, ThemeOptionsModel},
        outputs::OutputsModel,
        project::ProjectModel,
        SiteModel,
    },
    utils::constants::{file_names, site_defaults},
};
use color_eyre::Result;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::constants::{CONFIG_FILE_EXT, CONFIG_FILE_NAME};

/// Details about a found configuration file on the docs tree
///
/// This is just a configuration file with a valid name found
/// at a valid path in some subdirectory
#[derive(Debug)]
pub struct ConfigFile {
    pub path: PathBuf,
}

/// Checks for the existence of a `lgdocs_<any>.toml` configuration file
/// below the docs root, returning the first one found.
///
/// *base_path* - A parameter for receive an input via command line
/// parameter to indicate where the configuration file lives in
/// the client's docs tree. Defaults to `.`
///
/// Unlike a build system, the documentation pipeline is fully usable
/// without an override file, so finding none is not an error: the caller
/// falls back to the upstream site defaults.
pub fn find_config_file(
    base_path: &Path,
    filename_match: &Option<String>,
) -> Result<Option<ConfigFile>> {
    log::debug!("Searching for lgdocs configuration files...");

    for e in WalkDir::new(base_path)
        .max_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let filename = e.file_name().to_str().unwrap_or_default();
        let file_match = filename_match
            .as_ref()
            .map(|fm| fm.as_str())
            .unwrap_or(filename);
        if e.metadata().map(|md| md.is_file()).unwrap_or(false)
            && filename.starts_with(CONFIG_FILE_NAME)
            && filename.ends_with(CONFIG_FILE_EXT)
            && filename.contains(file_match)
        {
            return Ok(Some(ConfigFile {
                path: e.path().to_path_buf(),
            }));
        }
    }

    Ok(None)
}

/// Resolves the final [`SiteModel`] from the parsed override file, filling
/// every absent attribute with the upstream Looking Glass Proxy defaults
pub fn build_model(config: DocsConfigFile) -> SiteModel {
    let project = assemble_project_model(config.project.unwrap_or_default());
    let general = assemble_general_model(config.general.unwrap_or_default());
    let html = assemble_html_model(config.html.unwrap_or_default());
    let api_docs = assemble_api_docs_model(config.api_docs.unwrap_or_default(), &project);
    let outputs = assemble_outputs_model(config.outputs.unwrap_or_default());

    SiteModel {
        project,
        general,
        html,
        api_docs,
        outputs,
    }
}

fn assemble_project_model(config: ProjectAttribute) -> ProjectModel {
    ProjectModel {
        name: Cow::Borrowed(config.name.unwrap_or(site_defaults::PROJECT_NAME)),
        author: Cow::Borrowed(config.author.unwrap_or(site_defaults::AUTHOR)),
        copyright: Cow::Borrowed(config.copyright.unwrap_or(site_defaults::COPYRIGHT)),
    }
}

fn assemble_general_model(config: GeneralAttribute) -> GeneralModel {
    GeneralModel {
        extensions: borrowed_list(config.extensions, &site_defaults::EXTENSIONS),
        highlight_language: Cow::Borrowed(
            config
                .highlight_language
                .unwrap_or(site_defaults::HIGHLIGHT_LANGUAGE),
        ),
        templates_path: borrowed_list(config.templates_path, &site_defaults::TEMPLATES_PATH),
        exclude_patterns: borrowed_list(config.exclude_patterns, &site_defaults::EXCLUDE_PATTERNS),
    }
}

fn assemble_html_model(config: HtmlAttribute) -> HtmlModel {
    let theme_options = config.theme_options.unwrap_or_default();
    let defaults = ThemeOptionsModel::default();

    HtmlModel {
        theme: Cow::Borrowed(config.theme.unwrap_or(site_defaults::HTML_THEME)),
        logo: Cow::Borrowed(config.logo.unwrap_or(site_defaults::HTML_LOGO)),
        static_path: borrowed_list(config.static_path, &site_defaults::STATIC_PATH),
        theme_options: ThemeOptionsModel {
            canonical_url: theme_options
                .canonical_url
                .map(Cow::Borrowed)
                .unwrap_or(defaults.canonical_url),
            analytics_id: theme_options
                .analytics_id
                .map(Cow::Borrowed)
                .unwrap_or(defaults.analytics_id),
            display_version: theme_options
                .display_version
                .unwrap_or(defaults.display_version),
            prev_next_buttons_location: theme_options
                .prev_next_buttons_location
                .map(Cow::Borrowed)
                .unwrap_or(defaults.prev_next_buttons_location),
            style_external_links: theme_options
                .style_external_links
                .unwrap_or(defaults.style_external_links),
            logo_only: theme_options.logo_only.unwrap_or(defaults.logo_only),
            collapse_navigation: theme_options
                .collapse_navigation
                .unwrap_or(defaults.collapse_navigation),
            sticky_navigation: theme_options
                .sticky_navigation
                .unwrap_or(defaults.sticky_navigation),
            navigation_depth: theme_options
                .navigation_depth
                .unwrap_or(defaults.navigation_depth),
            includehidden: theme_options
                .includehidden
                .unwrap_or(defaults.includehidden),
            titles_only: theme_options.titles_only.unwrap_or(defaults.titles_only),
        },
    }
}

fn assemble_api_docs_model<'a>(
    config: ApiDocsAttribute<'a>,
    project: &ProjectModel<'a>,
) -> ApiDocsModel<'a> {
    ApiDocsModel {
        doxyfile: Cow::Borrowed(config.doxyfile.unwrap_or(file_names::DOXYFILE)),
        // The extracted API docs are registered under the project's own name
        // unless the override file says otherwise
        project: config
            .project
            .map(Cow::Borrowed)
            .unwrap_or_else(|| project.name.clone()),
        xml_output_dir: Cow::Borrowed(
            config
                .xml_output_dir
                .unwrap_or(site_defaults::API_DOCS_XML_DIR),
        ),
    }
}

fn assemble_outputs_model(config: OutputsAttribute) -> OutputsModel {
    OutputsModel {
        site_config: Cow::Borrowed(config.site_config.unwrap_or(file_names::SITE_CONFIG)),
        substitutions: Cow::Borrowed(config.substitutions.unwrap_or(file_names::SUBSTITUTIONS)),
        impressum: Cow::Borrowed(config.impressum.unwrap_or(file_names::IMPRESSUM)),
    }
}

fn borrowed_list<'a>(
    overridden: Option<Vec<&'a str>>,
    defaults: &[&'static str],
) -> Vec<Cow<'a, str>> {
    overridden
        .map(|list| list.into_iter().map(Cow::Borrowed).collect())
        .unwrap_or_else(|| defaults.iter().copied().map(Cow::Borrowed).collect())
}
