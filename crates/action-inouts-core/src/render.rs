//! Rendering of parameter sets into enum source text.
//!
//! # Examples
//!
//! ```
//! use action_inouts_core::descriptor::ParameterDescriptor;
//! use action_inouts_core::render::EnumRenderer;
//! use action_inouts_core::templates::TemplateKind;
//!
//! let renderer = EnumRenderer::builtin(TemplateKind::TypeScript).unwrap();
//! let entries = vec![(
//!     "repoToken".to_string(),
//!     ParameterDescriptor { description: "Auth token".into(), required: true },
//! )];
//! let text = renderer.render("Inputs", entries).unwrap();
//! assert_eq!(
//!     text,
//!     "export enum Inputs {\n    // Auth token\n    REPOTOKEN = \"repoToken\",\n}\n"
//! );
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::descriptor::ParameterDescriptor;
use crate::templates::{EnumContext, EnumMember, TemplateDir, TemplateKind};
use crate::{Error, Result};

// External imports (alphabetized)
use tera::{Context, Tera};
use tokio::fs;

const ENUM_TEMPLATE: &str = "enum";

/// Renders one enum per call from a single Tera template
#[derive(Debug)]
pub struct EnumRenderer {
    tera: Tera,
}

impl EnumRenderer {
    /// Renderer for a built-in kind.
    ///
    /// # Errors
    ///
    /// `Custom` has no built-in template and fails with a configuration error.
    pub fn builtin(kind: TemplateKind) -> Result<Self> {
        let source = kind.builtin_template().ok_or_else(|| {
            Error::config(format!("Template kind '{kind}' needs a template directory"))
        })?;
        Self::from_source(source)
    }

    /// Renderer for `kind`, loading `enum.tera` from disk for `Custom`.
    ///
    /// A `template_dir` given for a built-in kind overrides its template too.
    pub async fn new(kind: TemplateKind, template_dir: Option<&Path>) -> Result<Self> {
        if kind != TemplateKind::Custom && template_dir.is_none() {
            return Self::builtin(kind);
        }

        let dir = TemplateDir::discover(template_dir)
            .map_err(|e| Error::template(format!("Failed to resolve template directory: {e}")))?;
        let path = dir.enum_template();
        log::debug!("Loading enum template from {}", path.display());

        let source = fs::read_to_string(&path).await.map_err(|e| {
            Error::template(format!(
                "Failed to read template {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_source(&source)
    }

    /// Renderer for raw Tera source
    pub fn from_source(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(ENUM_TEMPLATE, source)?;
        Ok(Self { tera })
    }

    /// Render `entries` as an enum called `enum_name`.
    ///
    /// Entries are sorted by parameter name first, so the output does not
    /// depend on the order they came in. The result always ends with exactly
    /// one newline.
    pub fn render(
        &self,
        enum_name: &str,
        mut entries: Vec<(String, ParameterDescriptor)>,
    ) -> Result<String> {
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        let context = EnumContext {
            name: enum_name.to_string(),
            members: entries
                .iter()
                .map(|(name, param)| EnumMember::new(name, param))
                .collect(),
        };
        log::debug!(
            "Rendering enum {} with {} members",
            enum_name,
            context.members.len()
        );

        let rendered = self
            .tera
            .render(ENUM_TEMPLATE, &Context::from_serialize(&context)?)
            .map_err(|e| {
                log::error!("Rendering enum {} failed: {:?}", enum_name, e);
                Error::template(format!("Failed to render enum {enum_name}: {e}"))
            })?;

        let mut text = rendered.trim_end().to_string();
        text.push('\n');
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn param(description: &str, required: bool) -> ParameterDescriptor {
        ParameterDescriptor {
            description: description.to_string(),
            required,
        }
    }

    fn typescript() -> EnumRenderer {
        EnumRenderer::builtin(TemplateKind::TypeScript).unwrap()
    }

    #[test]
    fn test_typescript_members_sorted() {
        let entries = vec![
            ("namespace".to_string(), param("Target namespace", false)),
            ("clusterUrl".to_string(), param("  Cluster API URL  ", true)),
            ("Zone".to_string(), param("Zone", false)),
        ];
        let text = typescript().render("Inputs", entries).unwrap();
        assert_eq!(
            text,
            "export enum Inputs {\n\
             \x20   // Zone\n\
             \x20   ZONE = \"Zone\",\n\
             \x20   // Cluster API URL\n\
             \x20   CLUSTERURL = \"clusterUrl\",\n\
             \x20   // Target namespace\n\
             \x20   NAMESPACE = \"namespace\",\n\
             }\n"
        );
    }

    #[test]
    fn test_order_independent() {
        let a = vec![
            ("b".to_string(), param("B", false)),
            ("a".to_string(), param("A", false)),
        ];
        let b = vec![
            ("a".to_string(), param("A", false)),
            ("b".to_string(), param("B", false)),
        ];
        let renderer = typescript();
        assert_eq!(
            renderer.render("Outputs", a).unwrap(),
            renderer.render("Outputs", b).unwrap()
        );
    }

    #[test]
    fn test_first_newline_escape_collapsed() {
        let entries = vec![(
            "buildId".to_string(),
            param("The build id\\nused later\\nby deploy", false),
        )];
        let text = typescript().render("Outputs", entries).unwrap();
        assert!(text.contains("    // The build id used later\\nby deploy\n"));
        assert!(text.contains("    BUILDID = \"buildId\",\n"));
    }

    #[test]
    fn test_empty_enum() {
        let text = typescript().render("Outputs", Vec::new()).unwrap();
        assert_eq!(text, "export enum Outputs {\n}\n");
    }

    #[test]
    fn test_description_not_escaped() {
        let entries = vec![("html".to_string(), param("Use <b>bold</b> & \"quotes\"", false))];
        let text = typescript().render("Inputs", entries).unwrap();
        assert!(text.contains("// Use <b>bold</b> & \"quotes\""));
    }

    #[test]
    fn test_rust_enum() {
        let renderer = EnumRenderer::builtin(TemplateKind::Rust).unwrap();
        let entries = vec![("repoToken".to_string(), param("Auth token", true))];
        let text = renderer.render("Inputs", entries).unwrap();
        assert_eq!(
            text,
            "#[allow(non_camel_case_types)]\n\
             #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n\
             pub enum Inputs {\n\
             \x20   // Auth token\n\
             \x20   REPOTOKEN,\n\
             }\n\
             \n\
             impl Inputs {\n\
             \x20   pub const fn as_str(self) -> &'static str {\n\
             \x20       match self {\n\
             \x20           Self::REPOTOKEN => \"repoToken\",\n\
             \x20       }\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn test_custom_kind_requires_directory() {
        let err = EnumRenderer::builtin(TemplateKind::Custom).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_custom_template_from_dir() -> crate::Result<()> {
        let dir = tempdir()?;
        tokio::fs::write(
            dir.path().join("enum.tera"),
            "{{ name }}:{% for m in members %} {{ m.constant }}={{ m.value }}{% if m.required %}!{% endif %}{% endfor %}",
        )
        .await?;

        let renderer = EnumRenderer::new(TemplateKind::Custom, Some(dir.path())).await?;
        let entries = vec![
            ("b".to_string(), param("B", false)),
            ("a".to_string(), param("A", true)),
        ];
        assert_eq!(renderer.render("Inputs", entries)?, "Inputs: A=a! B=b\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_broken_custom_template() {
        let dir = tempdir().unwrap();
        tokio::fs::write(dir.path().join("enum.tera"), "{% for %}")
            .await
            .unwrap();
        let result = EnumRenderer::new(TemplateKind::Custom, Some(dir.path())).await;
        assert!(matches!(result, Err(Error::Tera(_))));
    }
}
