//! Manifest + entrypoint installer for the browser-bridge native host.
//!
//! Split the same way the install runs: [`paths`] resolves where the
//! manifest goes, [`templates`] renders the two artifacts, and
//! [`installer`] sequences the writes.

pub mod installer;
pub mod paths;
pub mod templates;

use std::io;

use thiserror::Error;

/// Everything that can go wrong during an install.
///
/// Render errors are not expected at runtime: the templates are embedded in
/// the binary and exercised by the test suite, so a `Render` here points at
/// a broken build rather than bad user input.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("unknown browser {name:?} (supported: {supported})")]
    UnknownBrowser { name: String, supported: String },

    #[error("unable to determine the user home directory")]
    HomeDir,

    #[error("unable to determine the running executable path")]
    ExePath(#[source] io::Error),

    #[error("unable to render the {template} template")]
    Render {
        template: &'static str,
        #[source]
        source: minijinja::Error,
    },

    #[error("unable to {step}")]
    Io {
        step: String,
        #[source]
        source: io::Error,
    },
}

impl InstallError {
    /// Wrap an io error with a description of the step that failed.
    pub(crate) fn io(step: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            step: step.into(),
            source,
        }
    }
}

pub use installer::{install, InstallRequest};
pub use paths::{manifest_path, supported_browsers, MANIFEST_NAME};
