use clap::Parser;
use color_eyre::Result;
use std::path::Path;
use tempfile::tempdir;

use lgdocs::cli::input::CliArgs;
use lgdocs::worker::run_lgdocs;

#[test]
fn test_full_run_on_an_empty_docs_tree() -> Result<()> {
    let temp = tempdir()?;

    // No config file, no checkout, no doxyfile: every step must degrade
    // gracefully and the run as a whole must still succeed
    assert!(run_lgdocs(&CliArgs::parse_from(["", "-v"]), Path::new(temp.path())).is_ok());

    assert!(temp.path().join("siteconf.json").exists());

    let fragment = std::fs::read_to_string(temp.path().join("subs.rst"))?;
    assert!(fragment.lines().count() == 2);
    assert!(fragment.starts_with(".. |GITVER| "));
    assert!(fragment.contains(".. |GITURL| replace:: "));

    assert!(temp.path().join("legal/texts/impressum.rst").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_full_run_with_an_override_config_file() -> Result<()> {
    let temp = tempdir()?;

    std::fs::write(
        temp.path().join("lgdocs.toml"),
        r#"
            [project]
            name = 'Forked LGProxy'

            [outputs]
            site_config = 'generated.json'
        "#,
    )?;

    assert!(run_lgdocs(
        &CliArgs::parse_from(["", "--skip-api-docs"]),
        Path::new(temp.path())
    )
    .is_ok());

    let site_config = std::fs::read_to_string(temp.path().join("generated.json"))?;
    let record: serde_json::Value = serde_json::from_str(&site_config)?;

    assert_eq!(record["project"]["name"], "Forked LGProxy");
    // Untouched attributes keep the upstream literals
    assert_eq!(record["html"]["theme"], "sphinx_rtd_theme");
    assert_eq!(record["html"]["theme_options"]["navigation_depth"], 4);
    assert_eq!(record["general"]["highlight_language"], "none");
    assert_eq!(record["api_docs"]["project"], "Forked LGProxy");

    temp.close()?;
    Ok(())
}

#[test]
fn test_rerunning_leaves_a_materialized_notice_untouched() -> Result<()> {
    let temp = tempdir()?;
    let cli_args = CliArgs::parse_from(["", "--skip-api-docs"]);

    assert!(run_lgdocs(&cli_args, Path::new(temp.path())).is_ok());

    let notice_path = temp.path().join("legal/texts/impressum.rst");
    std::fs::write(&notice_path, "Manually authored imprint")?;

    assert!(run_lgdocs(&cli_args, Path::new(temp.path())).is_ok());
    assert_eq!(
        std::fs::read_to_string(&notice_path)?,
        "Manually authored imprint"
    );

    temp.close()?;
    Ok(())
}
