//! Graphviz invocation and viewer handoff.
//!
//! Rendering shells out to the Graphviz `dot` executable: the exporter's
//! output is piped in, and the rasterized bytes come back on stdout. The
//! backend is treated as opaque; nothing here inspects or post-processes
//! what Graphviz produces. [`OutputFormat::Dot`] bypasses the executable
//! entirely, since the DOT source itself is the output.

use std::{io, path::Path, process::Command};

use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec_dot,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// File format of the rendered output.
///
/// The serialized names are the lowercase file extensions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Portable Network Graphics raster image
    #[default]
    Png,
    /// JPEG raster image
    Jpg,
    /// Scalable Vector Graphics document
    Svg,
    /// Portable Document Format document
    Pdf,
    /// The generated DOT source itself, written without invoking Graphviz
    Dot,
}

impl OutputFormat {
    /// The file extension rendered output of this format carries.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Dot => "dot",
        }
    }

    /// Whether producing this format requires the Graphviz executable.
    pub fn requires_backend(self) -> bool {
        !matches!(self, OutputFormat::Dot)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(OutputFormat::Png),
            "jpg" => Ok(OutputFormat::Jpg),
            "svg" => Ok(OutputFormat::Svg),
            "pdf" => Ok(OutputFormat::Pdf),
            "dot" => Ok(OutputFormat::Dot),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl From<OutputFormat> for &'static str {
    fn from(format: OutputFormat) -> Self {
        format.extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => Format::Png,
            OutputFormat::Jpg => Format::Jpg,
            OutputFormat::Svg => Format::Svg,
            OutputFormat::Pdf => Format::Pdf,
            OutputFormat::Dot => Format::Dot,
        }
    }
}

/// Returns true when the Graphviz `dot` executable can be invoked.
///
/// Useful for callers that want to degrade gracefully on machines without
/// Graphviz installed instead of failing at render time.
pub fn is_available() -> bool {
    Command::new("dot").arg("-V").output().is_ok()
}

/// Pipes DOT source through the Graphviz executable and returns the
/// rasterized bytes.
pub(crate) fn render_image(source: String, format: OutputFormat) -> Result<Vec<u8>, RenderError> {
    debug!(output_format:? = format, source_bytes = source.len(); "Invoking Graphviz backend");

    exec_dot(source, vec![CommandArg::Format(format.into())]).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            RenderError::BackendMissing(
                "the Graphviz `dot` executable was not found on PATH".to_string(),
            )
        } else {
            RenderError::Backend(err.to_string())
        }
    })
}

/// Opens the rendered file in the platform viewer, best effort.
///
/// The viewer is detached and never waited on; failure to launch is logged
/// and otherwise ignored, since the file itself was already written.
pub(crate) fn open_in_viewer(path: &Path) {
    match open_command(path).spawn() {
        Ok(_) => debug!(path = path.display().to_string(); "Opened rendered file in viewer"),
        Err(err) => {
            warn!(path = path.display().to_string(), error = err.to_string(); "Failed to open viewer");
        }
    }
}

#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn open_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
