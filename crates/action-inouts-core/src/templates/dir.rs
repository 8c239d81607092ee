//! Resolution of the directory holding a custom `enum.tera`

use std::io;
use std::path::{Path, PathBuf};

/// File name of the enum template inside a template directory
pub const ENUM_TEMPLATE_FILE: &str = "enum.tera";

/// Environment variable naming a custom template directory
pub const TEMPLATE_DIR_ENV: &str = "ACTION_INOUTS_TEMPLATE_DIR";

/// A template directory with a validated `enum.tera`
#[derive(Debug, Clone)]
pub struct TemplateDir {
    root_dir: PathBuf,
}

impl TemplateDir {
    pub fn new(root_dir: PathBuf) -> Self {
        Self { root_dir }
    }

    /// Find the template directory, preferring `custom_dir` when given.
    ///
    /// Without an explicit directory the lookup order is the
    /// `ACTION_INOUTS_TEMPLATE_DIR` environment variable, then
    /// `~/.action-inouts/templates`.
    pub fn discover(custom_dir: Option<&Path>) -> io::Result<Self> {
        let root_dir = if let Some(dir) = custom_dir {
            if !dir.exists() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Template directory not found: {}", dir.display()),
                ));
            }
            dir.to_path_buf()
        } else {
            Self::find_template_base_dir().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "Could not find template directory in any standard location",
                )
            })?
        };

        let template = root_dir.join(ENUM_TEMPLATE_FILE);
        if !template.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Template not found: {}", template.display()),
            ));
        }

        Ok(Self::new(root_dir))
    }

    fn find_template_base_dir() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
            let path = PathBuf::from(dir);
            if path.exists() {
                return Some(path);
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let templates_dir = home_dir.join(".action-inouts").join("templates");
            if templates_dir.exists() {
                return Some(templates_dir);
            }
        }

        None
    }

    /// Get the root directory containing the templates
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Path of the enum template
    pub fn enum_template(&self) -> PathBuf {
        self.root_dir.join(ENUM_TEMPLATE_FILE)
    }
}
