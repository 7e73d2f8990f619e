use std::borrow::Cow;

/// Locations, relative to the docs root, of the files written on every run.
/// Writers always receive the root and one of these explicitly, so the whole
/// pipeline can run against a throwaway directory.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct OutputsModel<'a> {
    pub site_config: Cow<'a, str>,
    pub substitutions: Cow<'a, str>,
    pub impressum: Cow<'a, str>,
}
