//! action-inouts core library
//!
//! Generates enums of an action's input and output parameter names from its
//! `action.yml`, so that implementation code refers to parameters through
//! compiler-checked names instead of string literals.

pub mod config;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod generate;
pub mod render;
pub mod templates;
pub mod utils;
pub mod validate;

pub use crate::{
    config::{Config, GeneratorSettings},
    descriptor::{ActionDescriptor, ParameterDescriptor, ParameterSet},
    error::{Error, LoadError, Result},
    generate::{generate, GenerationReport},
    render::EnumRenderer,
    templates::TemplateKind,
};
