//! Output language definitions for the generated enums.
//!
//! Each kind knows the Tera source of its enum template and where its output
//! goes by default. `Custom` has no built-in template; it is read from a
//! directory found by [`TemplateDir::discover`](super::TemplateDir::discover).
//!
//! # Examples
//!
//! ```
//! use action_inouts_core::templates::TemplateKind;
//! use std::str::FromStr;
//!
//! let kind = TemplateKind::from_str("rust").unwrap();
//! assert_eq!(kind, TemplateKind::Rust);
//! assert_eq!(kind.to_string(), "rust");
//!
//! // The default matches what the generator has always produced
//! assert_eq!(TemplateKind::default(), TemplateKind::TypeScript);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

const TYPESCRIPT_ENUM: &str = r#"export enum {{ name }} {
{%- for member in members %}
    // {{ member.comment }}
    {{ member.constant }} = "{{ member.value }}",
{%- endfor %}
}
"#;

const RUST_ENUM: &str = r#"#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum {{ name }} {
{%- for member in members %}
    // {{ member.comment }}
    {{ member.constant }},
{%- endfor %}
}

impl {{ name }} {
    pub const fn as_str(self) -> &'static str {
        match self {
{%- for member in members %}
            Self::{{ member.constant }} => "{{ member.value }}",
{%- endfor %}
        }
    }
}
"#;

/// Supported output languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// TypeScript string enums
    #[default]
    TypeScript,
    /// Rust enums with an `as_str` accessor
    Rust,
    /// User-supplied `enum.tera`
    Custom,
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Ok(TemplateKind::TypeScript),
            "rust" | "rs" => Ok(TemplateKind::Rust),
            "custom" => Ok(TemplateKind::Custom),
            _ => Err(format!("Unknown template kind: {}", s)),
        }
    }
}

impl TemplateKind {
    /// Returns the template identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Rust => "rust",
            Self::Custom => "custom",
        }
    }

    /// Built-in enum template, `None` for `Custom`
    pub fn builtin_template(&self) -> Option<&'static str> {
        match self {
            Self::TypeScript => Some(TYPESCRIPT_ENUM),
            Self::Rust => Some(RUST_ENUM),
            Self::Custom => None,
        }
    }

    /// Output path relative to the install root when none is configured
    pub fn default_output(&self) -> Option<&'static str> {
        match self {
            Self::TypeScript => Some("src/generated/inputs-outputs.ts"),
            Self::Rust => Some("src/generated/inputs_outputs.rs"),
            Self::Custom => None,
        }
    }

    /// Returns an iterator over all available template kinds
    pub fn all() -> impl Iterator<Item = Self> {
        use TemplateKind::*;
        [TypeScript, Rust, Custom].iter().copied()
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
