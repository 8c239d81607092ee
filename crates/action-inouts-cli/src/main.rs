//! action-inouts CLI entrypoint
//! Loads the action descriptor, renders the parameter enums and writes them out.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use action_inouts_core::{
    config::{self, Config},
    descriptor::ActionDescriptor,
    emit,
    generate::{check_names, render_file},
};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Generate enums of an action's input and output names from its action.yml
#[derive(Parser)]
#[command(name = "action-inouts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write the generated file here instead of the configured location
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("❌ Failed to generate inputs and outputs");
        return Err(e);
    }

    println!("Success");
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let root = config::install_root(&default_root());
    tracing::debug!(root = %root.display(), "Resolved install root");

    let settings = Config::load_or_default(&root)
        .await
        .context("Failed to load configuration")?
        .resolve(&root, cli.output, file!())?;

    let action = ActionDescriptor::load(&settings.descriptor_path).await?;
    println!(
        "Found {} inputs and {} outputs.",
        action.inputs.len(),
        action.outputs.len()
    );

    check_names(&action, settings.strict)?;
    let contents = render_file(&action, &settings)
        .await
        .context("Failed to render enums")?;

    println!(
        "Outputting inputs and outputs to {}",
        settings.output_path.display()
    );
    emit::emit(&contents, &settings.output_path).await?;
    Ok(())
}

/// Workspace root this binary was built from
fn default_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}
