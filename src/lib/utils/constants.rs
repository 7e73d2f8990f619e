//! Constant value definitions to use across the whole program

pub const LGDOCS: &str = "lgdocs";

pub const CONFIG_FILE_NAME: &str = "lgdocs";
pub const CONFIG_FILE_EXT: &str = "toml";

/// Environment variable holding the legal notice text, with literal
/// `\n` sequences standing in for real line breaks
pub const IMPRESSUM_ENV_VAR: &str = "IMPRESSUM_RST";

/// The names of the files generated into the docs root, not their paths
pub mod file_names {
    pub const SITE_CONFIG: &str = "siteconf.json";
    pub const SUBSTITUTIONS: &str = "subs.rst";
    pub const IMPRESSUM: &str = "legal/texts/impressum.rst";
    pub const DOXYFILE: &str = "Doxyfile.in";
}

pub mod site_defaults {
    pub const PROJECT_NAME: &str = "Telescope Looking Glass Proxy";
    pub const AUTHOR: &str = "Tim Dettmar and contributors";
    pub const COPYRIGHT: &str = "2022-2023 Tim Dettmar and contributors";
    pub const HTML_THEME: &str = "sphinx_rtd_theme";
    pub const HTML_LOGO: &str = "telescope-logo.png";
    pub const HIGHLIGHT_LANGUAGE: &str = "none";
    pub const API_DOCS_XML_DIR: &str = "_BUILD/xml/";

    pub const EXTENSIONS: [&str; 12] = [
        "sphinx.ext.autodoc",
        "sphinx.ext.intersphinx",
        "sphinx.ext.autosectionlabel",
        "sphinx.ext.todo",
        "sphinx.ext.coverage",
        "sphinx.ext.mathjax",
        "sphinx.ext.ifconfig",
        "sphinx.ext.viewcode",
        "sphinx_sitemap",
        "sphinx.ext.inheritance_diagram",
        "sphinx_toolbox.collapse",
        "breathe",
    ];

    pub const TEMPLATES_PATH: [&str; 1] = ["_templates"];
    pub const STATIC_PATH: [&str; 1] = ["_static"];
    pub const EXCLUDE_PATTERNS: [&str; 3] = ["_build", "Thumbs.db", ".DS_Store"];
}

/// Substitution macros stamped into the generated fragment consumed
/// by the document sources
pub mod substitutions {
    pub const GIT_VERSION_MACRO: &str = "GITVER";
    pub const GIT_URL_MACRO: &str = "GITURL";

    /// Emitted for the version macro when the checkout metadata is unavailable
    pub const BLANK_DIRECTIVE: &str = "unicode:: U+0020";

    /// Fallback URL pointing at the upstream project when the remote is unset
    pub const FALLBACK_ORIGIN_URL: &str = "https://github.com/telescope-proj/lgproxy";
}

/// Placeholder written when no imprint was provided and none exists on disk.
/// Possibly required for upstream LGProxy due to § 5 TMG; forks should add
/// their own if applicable laws require one.
pub const DEFAULT_IMPRESSUM_NOTICE: &str = r#".. note::
    | No imprint is configured.
    | Telescope Project contributors are not liable for the content of any forks.
    | Please set the environment variable ``IMPRESSUM_RST``
    | Alternatively, modify ``docs/legal/texts/impressum.rst``
"#;

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const FAILURE_GATHERING_DOCS_ROOT_ABS_PATH: &str =
        "Error getting the absolute path for the docs root";
    pub const FAILURE_WRITING_SITE_CONFIG: &str =
        "Failed to write the site configuration consumed by the generator";
    pub const FAILURE_WRITING_SUBSTITUTIONS: &str =
        "Failed to write the version stamp substitution file";
    pub const FAILURE_WRITING_IMPRESSUM: &str = "Failed to write the legal notice file";
    pub const SERIALIZE_SITE_CONFIG: &str = "Error serializing the site configuration record";
}
