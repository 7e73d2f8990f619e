use std::borrow::Cow;

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize, Default)]
pub struct ProjectModel<'a> {
    pub name: Cow<'a, str>,
    pub author: Cow<'a, str>,
    pub copyright: Cow<'a, str>,
}
