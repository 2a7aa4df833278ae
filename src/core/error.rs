//=========================================================================
// Harness Errors
//=========================================================================
//
// Errors surfaced to callers of the harness and to example programs.
//
// Resource failures that would otherwise abort the example (missing file,
// failed open, failed read) are all reported as `ResourceUnavailable`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::io;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformError;

//=== HarnessError ========================================================

#[derive(Debug)]
pub enum HarnessError {
    /// A logical resource could not be resolved or read.
    ResourceUnavailable { name: String, detail: String },

    /// The example worker thread could not be started.
    WorkerSpawn(io::Error),

    /// The example entry point panicked.
    WorkerPanicked,

    /// The window / event loop failed.
    Platform(PlatformError),
}

impl HarnessError {
    pub(crate) fn resource(name: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self::ResourceUnavailable {
            name: name.into(),
            detail: detail.to_string(),
        }
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceUnavailable { name, detail } => {
                write!(f, "Resource unavailable: {} ({})", name, detail)
            }
            Self::WorkerSpawn(e) => write!(f, "Worker thread spawn failed: {}", e),
            Self::WorkerPanicked => write!(f, "Example worker panicked"),
            Self::Platform(e) => write!(f, "Platform error: {}", e),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WorkerSpawn(e) => Some(e),
            Self::Platform(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PlatformError> for HarnessError {
    fn from(e: PlatformError) -> Self {
        Self::Platform(e)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_error_names_the_resource() {
        let err = HarnessError::resource("ms-appx:///media/drumloop.wav", "not found");
        let text = err.to_string();
        assert!(text.contains("drumloop.wav"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn platform_error_is_wrapped_with_source() {
        use std::error::Error;

        let err: HarnessError = PlatformError::EventLoopCreation("no display".into()).into();
        assert!(matches!(err, HarnessError::Platform(_)));
        assert!(err.source().is_some());
    }
}
