//! Error adapter for converting RenderError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use armature::RenderError;

/// Adapter implementing [`MietteDiagnostic`] for [`RenderError`].
///
/// Render errors carry no source spans, so the adapter only contributes an
/// error code and, where the failure is actionable, a help message.
pub struct Report<'a>(pub &'a RenderError);

impl fmt::Debug for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            RenderError::Io(_) => "armature::io",
            RenderError::Config(_) => "armature::config",
            RenderError::BackendMissing(_) | RenderError::Backend(_) => "armature::backend",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            RenderError::BackendMissing(_) => Some(Box::new(
                "Install Graphviz (https://graphviz.org/download/) and make sure \
                 the `dot` executable is on your PATH.",
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn code_of(err: &RenderError) -> String {
        Report(err).code().expect("every error has a code").to_string()
    }

    #[test]
    fn test_error_codes() {
        let io_err = RenderError::Io(io::Error::other("disk full"));
        assert_eq!(code_of(&io_err), "armature::io");

        let config_err = RenderError::Config("bad color".to_string());
        assert_eq!(code_of(&config_err), "armature::config");

        let backend_err = RenderError::Backend("dot crashed".to_string());
        assert_eq!(code_of(&backend_err), "armature::backend");
    }

    #[test]
    fn test_help_only_for_missing_backend() {
        let missing = RenderError::BackendMissing("not on PATH".to_string());
        let help = Report(&missing).help().expect("install hint").to_string();
        assert!(help.contains("graphviz.org"));

        let io_err = RenderError::Io(io::Error::other("disk full"));
        assert!(Report(&io_err).help().is_none());
    }

    #[test]
    fn test_display_delegates_to_error() {
        let err = RenderError::Config("bad color".to_string());
        assert_eq!(Report(&err).to_string(), err.to_string());
    }
}
