//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the example worker.
//
// Components:
// - `interface`: UI event types and platform errors (the contract)
// - `ui_link`: Worker-side, fire-and-forget sender of UI events
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod interface;
pub(crate) mod ui_link;

//=== Public API ==========================================================

pub use interface::{PlatformError, UiEvent};
pub use ui_link::UiLink;
