use std::borrow::Cow;

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize, Default)]
pub struct GeneralModel<'a> {
    pub extensions: Vec<Cow<'a, str>>,
    pub highlight_language: Cow<'a, str>,
    pub templates_path: Vec<Cow<'a, str>>,
    pub exclude_patterns: Vec<Cow<'a, str>>,
}
