//! Action descriptor (`action.yml`) format.
//!
//! The descriptor declares an action's name, description, inputs, outputs and
//! how it runs. Only the parts needed to generate the parameter enums are
//! modelled; unknown keys are ignored.
//!
//! # Examples
//!
//! ```
//! use action_inouts_core::descriptor::ActionDescriptor;
//!
//! let yaml = r#"
//! name: hello
//! description: Say hello
//! inputs:
//!   who:
//!     description: Who to greet
//!     required: true
//! runs:
//!   using: node20
//!   main: dist/index.js
//! "#;
//! let action = ActionDescriptor::from_yaml_str(yaml, "action.yml").unwrap();
//! assert_eq!(action.inputs.len(), 1);
//! assert!(action.outputs.is_empty());
//! ```

// Internal imports (std, crate)
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use crate::error::LoadError;

// External imports (alphabetized)
use serde::{Deserialize, Deserializer, Serialize};
use tokio::fs;

/// Parameters keyed by name.
pub type ParameterSet = BTreeMap<String, ParameterDescriptor>;

/// The root of an action descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Display name of the action
    pub name: String,

    /// What the action does
    pub description: String,

    /// Input parameters; absent or `null` means none
    #[serde(default, deserialize_with = "deserialize_parameter_set")]
    pub inputs: ParameterSet,

    /// Output parameters; absent or `null` means none
    #[serde(default, deserialize_with = "deserialize_parameter_set")]
    pub outputs: ParameterSet,

    /// How the action is executed
    pub runs: RunsConfig,
}

/// A single input or output parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub description: String,

    /// Outputs never declare this, so it defaults to `false`
    #[serde(default)]
    pub required: bool,
}

/// The `runs` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunsConfig {
    /// Runtime, e.g. `node20`
    pub using: String,

    /// Entry point, relative to the action root
    pub main: String,
}

impl ActionDescriptor {
    /// Load a descriptor from disk.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the file doesn't exist,
    /// [`LoadError::Read`] if it can't be read, and the errors of
    /// [`ActionDescriptor::from_yaml_str`] for its content.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        log::debug!("Reading action descriptor from {}", path.display());

        let content = fs::read_to_string(path).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        Self::from_yaml_str(&content, path)
    }

    /// Parse descriptor content. `origin` is only used in error messages.
    ///
    /// The document is decoded in two steps so that an empty document is
    /// reported as [`LoadError::Empty`] rather than as a shape error.
    pub fn from_yaml_str(content: &str, origin: impl AsRef<Path>) -> Result<Self, LoadError> {
        let origin = origin.as_ref();
        let invalid = |source| LoadError::Invalid {
            path: origin.to_path_buf(),
            source,
        };

        if content.trim().is_empty() {
            return Err(LoadError::Empty(origin.to_path_buf()));
        }

        let raw: serde_yaml::Value = serde_yaml::from_str(content).map_err(invalid)?;
        if raw.is_null() {
            return Err(LoadError::Empty(origin.to_path_buf()));
        }

        serde_yaml::from_value(raw).map_err(invalid)
    }

    /// Inputs as `(name, descriptor)` pairs
    pub fn input_entries(&self) -> Vec<(String, ParameterDescriptor)> {
        entries(&self.inputs)
    }

    /// Outputs as `(name, descriptor)` pairs
    pub fn output_entries(&self) -> Vec<(String, ParameterDescriptor)> {
        entries(&self.outputs)
    }
}

fn entries(set: &ParameterSet) -> Vec<(String, ParameterDescriptor)> {
    set.iter()
        .map(|(name, param)| (name.clone(), param.clone()))
        .collect()
}

/// `inputs:` with no value is `null` in YAML; treat it like an absent key.
fn deserialize_parameter_set<'de, D>(deserializer: D) -> Result<ParameterSet, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ParameterSet>::deserialize(deserializer)?.unwrap_or_default())
}
