//! CLI logic for the airline architecture renderer.
//!
//! The binary renders one fixed diagram: the Amazon Lex airline solution
//! architecture declared in [`airline`]. Style configuration is the only
//! variable input.

pub mod airline;
pub mod report;

mod args;
mod config;

pub use args::Args;

use std::path::PathBuf;

use log::info;

use armature::RenderError;

/// Run the airline architecture renderer
///
/// This function declares the fixed airline diagram, applies the loaded
/// style configuration, renders the result to `airline_architecture.png` in
/// the current working directory, and opens it in the platform viewer.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `RenderError` for:
/// - Configuration loading errors
/// - Missing or failing Graphviz backend
/// - File I/O errors
pub fn run(args: &Args) -> Result<PathBuf, RenderError> {
    info!(output = airline::FILENAME; "Rendering airline architecture diagram");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Declare and render the fixed architecture
    let diagram = airline::diagram().with_config(app_config).with_show(true);
    let path = diagram.render()?;

    info!(path = path.display().to_string(); "Diagram rendered successfully");

    Ok(path)
}
