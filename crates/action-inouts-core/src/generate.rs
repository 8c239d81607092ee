//! Code generation driver

// Internal imports (std, crate)
use std::path::PathBuf;

use crate::{
    config::GeneratorSettings,
    descriptor::{ActionDescriptor, ParameterSet},
    emit::{assemble, emit, header},
    error::{Error, Result},
    render::EnumRenderer,
    validate::validate,
};

/// Enum name for input parameters
pub const INPUTS_ENUM: &str = "Inputs";
/// Enum name for output parameters
pub const OUTPUTS_ENUM: &str = "Outputs";

/// What a generator run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub inputs: usize,
    pub outputs: usize,
    pub output_path: PathBuf,
}

/// Main entry point for code generation
pub async fn generate(settings: &GeneratorSettings) -> Result<GenerationReport> {
    // 1. Load the action descriptor
    let action = ActionDescriptor::load(&settings.descriptor_path).await?;

    // 2. Check parameter names
    check_names(&action, settings.strict)?;

    // 3. Render both enums and write the file
    let contents = render_file(&action, settings).await?;
    emit(&contents, &settings.output_path).await?;

    Ok(GenerationReport {
        inputs: action.inputs.len(),
        outputs: action.outputs.len(),
        output_path: settings.output_path.clone(),
    })
}

/// Render the complete generated file for `action`
pub async fn render_file(action: &ActionDescriptor, settings: &GeneratorSettings) -> Result<String> {
    let renderer =
        EnumRenderer::new(settings.template_kind, settings.template_dir.as_deref()).await?;
    let inputs = renderer.render(INPUTS_ENUM, action.input_entries())?;
    let outputs = renderer.render(OUTPUTS_ENUM, action.output_entries())?;
    Ok(assemble(
        &header(&settings.banner, &settings.generated_by),
        &inputs,
        &outputs,
    ))
}

/// Warn about unusable parameter names, or fail on them when `strict`
pub fn check_names(action: &ActionDescriptor, strict: bool) -> Result<()> {
    let mut problems = Vec::new();
    for (enum_name, set) in [(INPUTS_ENUM, &action.inputs), (OUTPUTS_ENUM, &action.outputs)] {
        problems.extend(issues_in(enum_name, set));
    }

    if problems.is_empty() {
        return Ok(());
    }
    if strict {
        return Err(Error::validation(problems.join("; ")));
    }
    for problem in &problems {
        log::warn!("{}", problem);
    }
    Ok(())
}

fn issues_in(enum_name: &str, set: &ParameterSet) -> Vec<String> {
    validate(set)
        .into_iter()
        .map(|issue| format!("{enum_name}: {issue}"))
        .collect()
}
