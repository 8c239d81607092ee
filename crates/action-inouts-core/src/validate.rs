//! Checks on parameter names that the generated enums rely on.
//!
//! A name that is not an identifier once uppercased, or two names that only
//! differ by case, produce a generated file that doesn't compile. These checks
//! catch that before the file is written.

// Internal imports (std, crate)
use std::collections::BTreeMap;
use std::fmt;

use crate::descriptor::ParameterSet;
use crate::utils::to_constant_name;

// External imports (alphabetized)
use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"));

/// A problem with one or more parameter names in a set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameIssue {
    /// The uppercased name is not a valid identifier
    NotAnIdentifier { name: String },
    /// Several names map to the same member name
    Collision { constant: String, names: Vec<String> },
}

impl fmt::Display for NameIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnIdentifier { name } => write!(
                f,
                "'{}' does not produce a valid member name ('{}')",
                name,
                to_constant_name(name)
            ),
            Self::Collision { constant, names } => {
                write!(f, "{} all map to '{}'", names.join(", "), constant)
            }
        }
    }
}

/// Check every name in `set`.
pub fn validate(set: &ParameterSet) -> Vec<NameIssue> {
    let mut issues = Vec::new();
    let mut by_constant: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for name in set.keys() {
        let constant = to_constant_name(name);
        if !IDENTIFIER.is_match(&constant) {
            issues.push(NameIssue::NotAnIdentifier { name: name.clone() });
        }
        by_constant.entry(constant).or_default().push(name.clone());
    }

    issues.extend(
        by_constant
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(constant, names)| NameIssue::Collision { constant, names }),
    );
    issues
}
