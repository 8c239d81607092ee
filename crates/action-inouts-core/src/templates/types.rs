//! Context types handed to the enum templates

use serde::Serialize;

use crate::descriptor::ParameterDescriptor;
use crate::utils::{comment_text, to_constant_name};

/// One enum member, as seen by a template
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// Member name (uppercased parameter name)
    pub constant: String,
    /// Original parameter name
    pub value: String,
    /// Single-line comment text
    pub comment: String,
    pub required: bool,
}

impl EnumMember {
    pub fn new(name: &str, param: &ParameterDescriptor) -> Self {
        Self {
            constant: to_constant_name(name),
            value: name.to_string(),
            comment: comment_text(&param.description),
            required: param.required,
        }
    }
}

/// Everything a template needs to render one enum
#[derive(Clone, Debug, Serialize)]
pub struct EnumContext {
    pub name: String,
    pub members: Vec<EnumMember>,
}
