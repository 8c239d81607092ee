//! Configuration management for enum generation.
//!
//! Settings live in an optional `inouts.yaml` next to the action descriptor.
//! Every field has a default, so a project that only has an `action.yml`
//! needs no configuration at all.
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use action_inouts_core::config::Config;
//! use action_inouts_core::templates::TemplateKind;
//!
//! let mut config = Config::default();
//! config.template_kind = TemplateKind::Rust;
//!
//! let settings = config
//!     .resolve(Path::new("/work/my-action"), None, "tools/gen.rs")
//!     .unwrap();
//! assert_eq!(settings.descriptor_path, Path::new("/work/my-action/action.yml"));
//! assert_eq!(
//!     settings.output_path,
//!     Path::new("/work/my-action/src/generated/inputs_outputs.rs")
//! );
//! ```

// Internal imports (std, crate)
use std::io;
use std::path::{Path, PathBuf};

use crate::emit::DEFAULT_BANNER;
use crate::templates::TemplateKind;
use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Name of the configuration file inside the install root
pub const CONFIG_FILE: &str = "inouts.yaml";

/// Environment variable overriding the install root
pub const ROOT_ENV: &str = "ACTION_INOUTS_ROOT";

/// Contents of `inouts.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Action descriptor, relative to the install root
    #[serde(default = "default_descriptor")]
    pub descriptor: PathBuf,

    /// Generated file, relative to the install root. Defaults per template kind.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Output language
    #[serde(default)]
    pub template_kind: TemplateKind,

    /// Directory holding `enum.tera`
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    /// Replaces the default license banner
    #[serde(default)]
    pub banner: Option<String>,

    /// Fail instead of warn on unusable parameter names
    #[serde(default)]
    pub strict: bool,
}

/// Fully resolved settings for one generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub descriptor_path: PathBuf,
    pub output_path: PathBuf,
    pub template_kind: TemplateKind,
    pub template_dir: Option<PathBuf>,
    pub banner: String,
    /// Shown in the do-not-edit notice
    pub generated_by: String,
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descriptor: default_descriptor(),
            output: None,
            template_kind: TemplateKind::default(),
            template_dir: None,
            banner: None,
            strict: false,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        serde_yaml::from_str(&content).map_err(|e| {
            Error::config(format!("Invalid configuration {}: {}", path.display(), e))
        })
    }

    /// Load `inouts.yaml` from `root`, falling back to defaults when absent
    pub async fn load_or_default(root: &Path) -> crate::Result<Self> {
        let path = root.join(CONFIG_FILE);
        match Self::from_file(&path).await {
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No {} in {}, using defaults", CONFIG_FILE, root.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::config(format!("Failed to serialize configuration: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Anchor relative paths at `root` and apply the command-line output.
    ///
    /// `output_override` is used as given, relative to the working directory.
    pub fn resolve(
        self,
        root: &Path,
        output_override: Option<PathBuf>,
        generated_by: &str,
    ) -> crate::Result<GeneratorSettings> {
        let output_path = match (output_override, self.output) {
            (Some(path), _) => path,
            (None, Some(path)) => root.join(path),
            (None, None) => {
                let default = self.template_kind.default_output().ok_or_else(|| {
                    Error::config(format!(
                        "Template kind '{}' has no default output; set `output` in {}",
                        self.template_kind, CONFIG_FILE
                    ))
                })?;
                root.join(default)
            }
        };

        Ok(GeneratorSettings {
            descriptor_path: root.join(self.descriptor),
            output_path,
            template_kind: self.template_kind,
            template_dir: self.template_dir.map(|dir| root.join(dir)),
            banner: self.banner.unwrap_or_else(|| DEFAULT_BANNER.to_string()),
            generated_by: generated_by.to_string(),
            strict: self.strict,
        })
    }
}

/// `ACTION_INOUTS_ROOT` if set, otherwise `default`
pub fn install_root(default: &Path) -> PathBuf {
    std::env::var_os(ROOT_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| default.to_path_buf())
}

fn default_descriptor() -> PathBuf {
    PathBuf::from("action.yml")
}
