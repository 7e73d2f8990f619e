//! Materializes the impressum (legal notice) shipped with the rendered docs.
//!
//! Jurisdictions such as § 5 TMG may require the upstream project to publish
//! an imprint; forks bring their own through the `IMPRESSUM_RST` environment
//! variable. A notice provided that way always wins. When nothing is
//! provided, a placeholder is written once and a manually authored file at
//! the same path is never clobbered.

use std::path::Path;

use color_eyre::eyre::{Context, ContextCompat};
use color_eyre::Result;

use crate::utils::constants::{error_messages, DEFAULT_IMPRESSUM_NOTICE, IMPRESSUM_ENV_VAR};
use crate::utils::fs;

/// Reads the imprint override from the process environment, if any
pub fn impressum_from_env() -> Option<String> {
    std::env::var(IMPRESSUM_ENV_VAR).ok()
}

/// Turns the literal two-character `\n` sequences of an environment-provided
/// notice into real line breaks. No further validation is applied: the text
/// is written through as-is.
pub fn decode_escaped_newlines(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

/// Writes the legal notice to *docs_root*/*relative_path*, creating the
/// parent directories when missing.
///
/// With an override the file is rewritten unconditionally on every run.
/// Without one the default placeholder is only written if the file does not
/// exist yet, so a previously authored notice survives rebuilds untouched.
pub fn materialize_impressum(
    docs_root: &Path,
    relative_path: &str,
    override_text: Option<&str>,
) -> Result<()> {
    let notice_path = docs_root.join(relative_path);

    let filename = notice_path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid legal notice path {notice_path:?}"))?;
    let parent = notice_path
        .parent()
        .with_context(|| format!("Invalid legal notice path {notice_path:?}"))?;
    fs::create_directory(parent)?;

    match override_text {
        Some(raw) => {
            log::info!("Writing the imprint provided through the environment");
            let decoded = decode_escaped_newlines(raw);
            fs::create_file(parent, filename, decoded.as_bytes())
                .with_context(|| error_messages::FAILURE_WRITING_IMPRESSUM)
        }
        None if !notice_path.exists() => {
            log::info!("No imprint configured, writing the placeholder notice");
            fs::create_file(parent, filename, DEFAULT_IMPRESSUM_NOTICE.as_bytes())
                .with_context(|| error_messages::FAILURE_WRITING_IMPRESSUM)
        }
        None => {
            log::debug!("Leaving the existing legal notice untouched");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::Result;
    use tempfile::tempdir;

    const NOTICE_PATH: &str = "legal/texts/impressum.rst";

    #[test]
    fn the_placeholder_is_written_when_nothing_exists() -> Result<()> {
        let temp = tempdir()?;

        materialize_impressum(temp.path(), NOTICE_PATH, None)?;

        let notice = std::fs::read_to_string(temp.path().join(NOTICE_PATH))?;
        assert_eq!(notice, DEFAULT_IMPRESSUM_NOTICE);

        Ok(temp.close()?)
    }

    #[test]
    fn an_existing_notice_is_never_clobbered() -> Result<()> {
        let temp = tempdir()?;
        let notice_path = temp.path().join(NOTICE_PATH);

        std::fs::create_dir_all(notice_path.parent().unwrap())?;
        std::fs::write(&notice_path, "Handwritten imprint")?;

        materialize_impressum(temp.path(), NOTICE_PATH, None)?;

        assert_eq!(std::fs::read_to_string(&notice_path)?, "Handwritten imprint");

        Ok(temp.close()?)
    }

    #[test]
    fn an_override_rewrites_the_notice_and_decodes_newlines() -> Result<()> {
        let temp = tempdir()?;
        let notice_path = temp.path().join(NOTICE_PATH);

        std::fs::create_dir_all(notice_path.parent().unwrap())?;
        std::fs::write(&notice_path, "Stale imprint")?;

        materialize_impressum(temp.path(), NOTICE_PATH, Some("Line1\\nLine2"))?;

        let notice = std::fs::read_to_string(&notice_path)?;
        assert_eq!(notice, "Line1\nLine2");
        assert!(!notice.contains("\\n"));

        Ok(temp.close()?)
    }

    #[test]
    fn overriding_twice_is_idempotent() -> Result<()> {
        let temp = tempdir()?;

        materialize_impressum(temp.path(), NOTICE_PATH, Some("Imprint\\nSecond line"))?;
        let first = std::fs::read_to_string(temp.path().join(NOTICE_PATH))?;

        materialize_impressum(temp.path(), NOTICE_PATH, Some("Imprint\\nSecond line"))?;
        let second = std::fs::read_to_string(temp.path().join(NOTICE_PATH))?;

        assert_eq!(first, second);
        assert_eq!(second, "Imprint\nSecond line");

        Ok(temp.close()?)
    }

    #[test]
    fn decoding_only_touches_the_escape_sequences() {
        assert_eq!(decode_escaped_newlines("plain text"), "plain text");
        assert_eq!(decode_escaped_newlines("a\\nb\\nc"), "a\nb\nc");
    }
}
