//! Version control metadata stamped into the generated documentation.
//!
//! The rendered pages reference the short revision hash and the remote origin
//! URL of the checkout through a two-macro substitution fragment. Both
//! queries are best effort: building the docs from a tarball, or from a
//! checkout with no remote, degrades to the fallback macro values instead of
//! aborting the run.

use std::path::Path;
use std::process::Command;

use color_eyre::{eyre::Context, Result};

use crate::utils::constants::{error_messages, substitutions};
use crate::utils::fs;

/// Short revision hash of the checkout at *repo_root*, or [`None`] when the
/// query fails
pub fn short_revision_hash(repo_root: &Path) -> Option<String> {
    git_query(repo_root, &["rev-parse", "--short", "HEAD"])
}

/// URL of the `origin` remote of the checkout at *repo_root*, or [`None`]
/// when the query fails
pub fn remote_origin_url(repo_root: &Path) -> Option<String> {
    git_query(repo_root, &["remote", "get-url", "origin"])
}

fn git_query(repo_root: &Path, args: &[&str]) -> Option<String> {
    let output = match Command::new("git").args(args).current_dir(repo_root).output() {
        Ok(output) => output,
        Err(err) => {
            log::warn!("[git] - Unable to launch the query {args:?} ({err})");
            return None;
        }
    };

    if !output.status.success() {
        log::warn!(
            "[git] - The query {args:?} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Writes the substitution fragment with the `|GITVER|` and `|GITURL|` macro
/// definitions into *out_dir*/*filename*.
///
/// An absent version renders as a blank character and an absent origin falls
/// back to the upstream repository URL, so the document sources can expand
/// both macros unconditionally.
pub fn write_substitutions(
    out_dir: &Path,
    filename: &str,
    version: Option<&str>,
    origin: Option<&str>,
) -> Result<()> {
    let mut fragment = String::new();

    match version {
        Some(ver) => {
            fragment.push_str(&format!(
                ".. |{}| replace:: {}\n",
                substitutions::GIT_VERSION_MACRO,
                ver
            ));
        }
        None => {
            fragment.push_str(&format!(
                ".. |{}| {}\n",
                substitutions::GIT_VERSION_MACRO,
                substitutions::BLANK_DIRECTIVE
            ));
        }
    }

    match origin {
        Some(url) => {
            fragment.push_str(&format!(
                ".. |{}| replace:: {}\n",
                substitutions::GIT_URL_MACRO,
                url
            ));
        }
        None => {
            fragment.push_str(&format!(
                ".. |{}| replace:: {}\n",
                substitutions::GIT_URL_MACRO,
                substitutions::FALLBACK_ORIGIN_URL
            ));
        }
    }

    fs::create_file(out_dir, filename, fragment.as_bytes())
        .with_context(|| error_messages::FAILURE_WRITING_SUBSTITUTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::Result;
    use tempfile::tempdir;

    #[test]
    fn substitutions_with_both_values_present() -> Result<()> {
        let temp = tempdir()?;

        write_substitutions(
            temp.path(),
            "subs.rst",
            Some("abc1234"),
            Some("https://example.com/repo.git"),
        )?;

        let fragment = std::fs::read_to_string(temp.path().join("subs.rst"))?;
        assert_eq!(
            fragment,
            ".. |GITVER| replace:: abc1234\n\
             .. |GITURL| replace:: https://example.com/repo.git\n"
        );

        Ok(temp.close()?)
    }

    #[test]
    fn substitutions_degrade_to_the_fallback_macros() -> Result<()> {
        let temp = tempdir()?;

        write_substitutions(temp.path(), "subs.rst", None, None)?;

        let fragment = std::fs::read_to_string(temp.path().join("subs.rst"))?;
        assert_eq!(
            fragment,
            ".. |GITVER| unicode:: U+0020\n\
             .. |GITURL| replace:: https://github.com/telescope-proj/lgproxy\n"
        );

        Ok(temp.close()?)
    }

    #[test]
    fn queries_on_a_plain_directory_yield_none() -> Result<()> {
        let temp = tempdir()?;

        // Not a checkout: both queries must degrade instead of erroring
        assert_eq!(short_revision_hash(temp.path()), None);
        assert_eq!(remote_origin_url(temp.path()), None);

        Ok(temp.close()?)
    }

    #[test]
    fn queries_on_a_real_checkout_return_its_metadata() -> Result<()> {
        let temp = tempdir()?;
        let repo = temp.path();

        let git = |args: &[&str]| {
            Command::new("git")
                .args(args)
                .current_dir(repo)
                .output()
                .map(|out| out.status.success())
                .unwrap_or(false)
        };

        assert!(git(&["init", "-q"]));
        assert!(git(&[
            "-c",
            "user.name=lgdocs",
            "-c",
            "user.email=lgdocs@invalid",
            "commit",
            "--allow-empty",
            "-q",
            "-m",
            "stamp",
        ]));
        assert!(git(&["remote", "add", "origin", "https://example.com/repo.git"]));

        let version = short_revision_hash(repo).expect("short hash of the fresh commit");
        assert!(!version.is_empty());
        assert!(!version.contains('\n'));

        let origin = remote_origin_url(repo).expect("configured origin URL");
        assert_eq!(origin, "https://example.com/repo.git");

        write_substitutions(repo, "subs.rst", Some(&version), Some(&origin))?;
        let fragment = std::fs::read_to_string(repo.join("subs.rst"))?;
        assert!(fragment.contains(&format!(".. |GITVER| replace:: {version}\n")));
        assert!(fragment.contains(".. |GITURL| replace:: https://example.com/repo.git\n"));

        Ok(temp.close()?)
    }
}
