//=========================================================================
// UI Link
//=========================================================================
//
// Worker-side handle for posting events to the UI thread.
//
// Architecture:
//   ExampleContext → UiLink::post() / send_control() → Sender<UiEvent> → Platform
//
// Display frames are posted without blocking: a full queue or a closed UI
// drops the frame with a log line. Control events (exit, worker finished)
// wait for queue space instead, and only fail once the UI is gone.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Sender, TrySendError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::UiEvent;

//=== UiLink ==============================================================

/// Worker-side sender of [`UiEvent`]s.
#[derive(Debug, Clone)]
pub struct UiLink {
    sender: Sender<UiEvent>,
}

impl UiLink {
    pub fn new(sender: Sender<UiEvent>) -> Self {
        Self { sender }
    }

    /// Posts an event without waiting. Returns `false` if it was dropped.
    pub fn post(&self, event: UiEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                trace!(target: "platform::ui", "UI queue full, dropping {:?}", event);
                false
            }
            Err(TrySendError::Disconnected(event)) => {
                warn!(target: "platform::ui", "UI disconnected, dropping {:?}", event);
                false
            }
        }
    }

    /// Sends an event that must not be dropped, waiting for queue space.
    ///
    /// Returns `false` only if the UI side has shut down.
    pub fn send_control(&self, event: UiEvent) -> bool {
        match self.sender.send(event) {
            Ok(()) => true,
            Err(err) => {
                warn!(target: "platform::ui", "UI disconnected, dropping {:?}", err.into_inner());
                false
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
