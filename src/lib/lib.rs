pub mod api_docs;
pub mod cli;
pub mod config_file;
pub mod legal;
pub mod site_model;
pub mod utils;
pub mod vcs;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::path::{Path, PathBuf};
    use std::{fs, time::Instant};

    use color_eyre::{eyre::Context, Report, Result};

    use crate::site_model::SiteModel;
    use crate::utils::constants::error_messages;
    use crate::{
        api_docs,
        cli::input::CliArgs,
        config_file,
        legal, utils,
        utils::reader::{build_model, find_config_file},
        vcs,
    };

    /// The main work of the program. Prepares the documentation tree
    /// rooted at the inputted docs root for the downstream site generator
    pub fn run_lgdocs(cli_args: &CliArgs, base_path: &Path) -> std::result::Result<(), Report> {
        let abs_docs_root = determine_absolute_path_of_the_docs_root(cli_args, base_path)?;

        let raw_file = load_raw_config_file(&abs_docs_root, cli_args)?;
        let config = config_file::docs_cfg_from_file(raw_file.as_str())
            .with_context(|| error_messages::PARSE_CFG_FILE)?;

        let model = {
            // The model is resolved once and read-only afterwards; every
            // writer below receives its piece of it explicitly
            let model: SiteModel<'_> = build_model(config);
            log::debug!("Resolved site model: {model:?}");
            model
        };

        if cli_args.skip_api_docs {
            log::debug!("Skipping the API doc extraction on user request");
        } else {
            let extraction_ts = Instant::now();
            api_docs::run_extraction(&abs_docs_root, model.api_docs.doxyfile.as_ref());
            log::debug!(
                "lgdocs took a total of {:?} ms on the API doc extraction",
                extraction_ts.elapsed().as_millis()
            );
        }

        emit_site_config(&abs_docs_root, &model)?;
        stamp_version_metadata(&abs_docs_root, &model)?;

        legal::materialize_impressum(
            &abs_docs_root,
            model.outputs.impressum.as_ref(),
            legal::impressum_from_env().as_deref(),
        )
    }

    /// Resolves the full path of the location of the docs root on the fs. If
    /// the `--root` [`CliArgs`] arg is present, it will be used relative to
    /// *base_path*, otherwise, we will assume that the docs root is exactly
    /// the directory from where the binary was invoked by the user
    fn determine_absolute_path_of_the_docs_root(
        cli_args: &CliArgs,
        base_path: &Path,
    ) -> Result<PathBuf> {
        let docs_root = cli_args
            .root
            .as_deref()
            .map(|root| base_path.join(root))
            .unwrap_or_else(|| base_path.to_path_buf());

        utils::fs::get_docs_root_absolute_path(&docs_root)
            .with_context(|| error_messages::FAILURE_GATHERING_DOCS_ROOT_ABS_PATH)
    }

    /// Loads the raw text of the first `lgdocs*.toml` found below the docs
    /// root. An empty string stands in when there's none, which resolves the
    /// model to the built-in upstream defaults.
    fn load_raw_config_file(abs_docs_root: &Path, cli_args: &CliArgs) -> Result<String> {
        match find_config_file(abs_docs_root, &cli_args.match_files)? {
            Some(config_file) => {
                let cfg_path = &config_file.path;
                log::debug!(
                    "Launching a lgdocs work event for the configuration file: {:?}",
                    cfg_path,
                );
                fs::read_to_string(cfg_path)
                    .with_context(|| format!("{}: {:?}", error_messages::READ_CFG_FILE, cfg_path))
            }
            None => {
                log::debug!("No configuration file found, using the upstream site defaults");
                Ok(String::new())
            }
        }
    }

    /// Serializes the resolved configuration record to the artifact the
    /// downstream site generator consumes
    fn emit_site_config(abs_docs_root: &Path, model: &SiteModel) -> Result<()> {
        let serialized = serde_json::to_string_pretty(model)
            .with_context(|| error_messages::SERIALIZE_SITE_CONFIG)?;

        utils::fs::create_file(
            abs_docs_root,
            model.outputs.site_config.as_ref(),
            serialized.as_bytes(),
        )
        .with_context(|| error_messages::FAILURE_WRITING_SITE_CONFIG)
    }

    /// Queries the checkout metadata and writes the substitution fragment.
    /// Both queries degrade to the fallback macro values on failure, so docs
    /// built outside a checkout still render.
    fn stamp_version_metadata(abs_docs_root: &Path, model: &SiteModel) -> Result<()> {
        let version = vcs::short_revision_hash(abs_docs_root);
        let origin = vcs::remote_origin_url(abs_docs_root);

        vcs::write_substitutions(
            abs_docs_root,
            model.outputs.substitutions.as_ref(),
            version.as_deref(),
            origin.as_deref(),
        )
    }

    #[cfg(test)]
    mod tests {
        use clap::Parser;
        use color_eyre::Result;
        use tempfile::tempdir;

        use crate::cli::input::CliArgs;

        use super::{determine_absolute_path_of_the_docs_root, load_raw_config_file};

        #[test]
        fn the_docs_root_resolves_against_the_base_path() -> Result<()> {
            let temp = tempdir()?;
            std::fs::create_dir(temp.path().join("user"))?;

            let cli_args = CliArgs::parse_from(["", "--root", "user"]);
            let abs_docs_root = determine_absolute_path_of_the_docs_root(&cli_args, temp.path())?;

            assert!(abs_docs_root.is_absolute());
            assert!(abs_docs_root.ends_with("user"));

            Ok(temp.close()?)
        }

        #[test]
        fn a_missing_docs_root_is_a_hard_failure() -> Result<()> {
            let temp = tempdir()?;

            let cli_args = CliArgs::parse_from(["", "--root", "nowhere"]);
            assert!(determine_absolute_path_of_the_docs_root(&cli_args, temp.path()).is_err());

            Ok(temp.close()?)
        }

        #[test]
        fn a_docs_tree_without_config_file_loads_as_empty() -> Result<()> {
            let temp = tempdir()?;

            let cli_args = CliArgs::parse_from([""]);
            let raw_file = load_raw_config_file(temp.path(), &cli_args)?;
            assert!(raw_file.is_empty());

            Ok(temp.close()?)
        }

        #[test]
        fn the_config_file_is_discovered_below_the_docs_root() -> Result<()> {
            let temp = tempdir()?;
            std::fs::create_dir(temp.path().join("user"))?;
            std::fs::write(
                temp.path().join("user/lgdocs.toml"),
                "[project]\nname = 'Forked LGProxy'\n",
            )?;

            let cli_args = CliArgs::parse_from([""]);
            let raw_file = load_raw_config_file(temp.path(), &cli_args)?;
            assert!(raw_file.contains("Forked LGProxy"));

            Ok(temp.close()?)
        }
    }
}
