use std::borrow::Cow;

use serde::Serialize;

/// The Doxygen bridge: which configuration file triggers the extraction and
/// where the generator finds the resulting XML tree afterwards
#[derive(Debug, PartialEq, Eq, Serialize, Default)]
pub struct ApiDocsModel<'a> {
    pub doxyfile: Cow<'a, str>,
    pub project: Cow<'a, str>,
    pub xml_output_dir: Cow<'a, str>,
}
