// SPDX-License-Identifier: MIT OR Apache-2.0
//! `shadergraph` - generates GLSL for the bundled demo material.
//!
//! Usage:
//! - `shadergraph [settings.ron]` builds the vertex and fragment graphs,
//!   checks that the stages link, and writes `<material>.vert` and
//!   `<material>.frag` into the configured output directory
//! - `shadergraph --init [settings.ron]` writes a settings file with the
//!   defaults
//!
//! Logging goes through `tracing`; set `RUST_LOG` to change the filter.

mod demo;
mod settings;

use settings::{AppSettings, SETTINGS_FILE_NAME};
use shadergraph_codegen::{GenerateError, GlslGenerator, SettingsError};
use shadergraph_graph::{GraphError, Script};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Error that stops the tool
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Failed to build shader graph: {0}")]
    Graph(#[from] GraphError),

    #[error("Failed to generate GLSL: {0}")]
    Generate(#[from] GenerateError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stage outputs of '{0}' do not match the next stage's inputs")]
    Linkage(String),
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,shadergraph_codegen=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting shadergraph v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1).peekable();
    let init = args.next_if(|a| a == "--init").is_some();
    let path = args.next().map(PathBuf::from);

    let result = if init {
        write_default_settings(path.as_deref().unwrap_or(Path::new(SETTINGS_FILE_NAME)))
    } else {
        run(path.as_deref())
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn write_default_settings(path: &Path) -> Result<(), AppError> {
    AppSettings::default().save(path)?;
    tracing::info!("Wrote default settings to {:?}", path);
    Ok(())
}

fn run(settings_path: Option<&Path>) -> Result<(), AppError> {
    let settings = AppSettings::resolve(settings_path)?;
    let vertex = demo::build_vertex(&settings.material_name)?;
    let fragment = demo::build_fragment(&settings.material_name)?;

    if !vertex.check_linkage(&fragment) {
        return Err(AppError::Linkage(vertex.name.clone()));
    }

    std::fs::create_dir_all(&settings.output_dir)?;
    let generator = GlslGenerator::new(settings.generator.clone());
    for script in [&vertex, &fragment] {
        write_stage(&generator, script, &settings)?;
    }
    Ok(())
}

fn write_stage(generator: &GlslGenerator, script: &Script, settings: &AppSettings) -> Result<(), AppError> {
    let source = generator.generate(script)?;
    let path = settings.output_path(script.stage().file_extension());
    std::fs::write(&path, &source)?;
    tracing::info!("Wrote {} bytes to {:?}", source.len(), path);
    Ok(())
}
