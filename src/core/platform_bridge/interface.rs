//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Worker-to-platform interface types (events and errors).
//
// Defines the contract for communication between the example worker and
// the UI thread. Input travels the other way through the shared
// `InputTranslator`, not through this channel.
//
//=========================================================================

//=== UiEvent =============================================================

/// Messages sent from the example worker to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Replaces the text panel contents (one frame of `draw_text` output).
    Display(String),

    /// The example asked the application to exit.
    Exit(i32),

    /// The example entry point returned.
    WorkerFinished(i32),
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// Event loop execution error.
    EventLoopExecution(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}
