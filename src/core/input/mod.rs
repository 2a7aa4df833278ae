//=========================================================================
// Input System
//
// Logical buttons and the translator that turns raw key/touch records into
// a per-frame button snapshot.
//
// Responsibilities:
// - Define the fixed button set and its bit layout
// - Bind physical keys to buttons
// - Merge keyboard and touch state once per frame with edge detection
//
// Notes:
// The translator is shared (`Arc`) between the platform thread, which
// records events, and the example worker, which polls and queries.
//
//=========================================================================

//=== Submodules ==========================================================

mod button;
mod event;
mod translator;

//=== Public API ==========================================================

pub use button::{button_name, Button, ButtonMask, UNKNOWN_BUTTON};
pub use event::{key_button, key_mask, KeyCode};
pub use translator::{ButtonSnapshot, InputTranslator};
