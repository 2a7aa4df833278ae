//=========================================================================
// Core
//
// Platform-independent harness services used by example programs.
//
// Responsibilities:
// - Translate key/touch records into per-frame button state (`input`)
// - Buffer per-frame text for the UI thread (`display`)
// - Resolve and load packaged resources (`resources`)
// - Bundle the above into the worker-facing `ExampleContext`
//
// Notes:
// Nothing here touches winit. The platform layer feeds `InputTranslator`
// and receives `UiEvent`s; everything else runs on the example worker.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod context;
pub mod display;
pub mod error;
pub mod input;
pub mod platform_bridge;
pub mod resources;

//=== Public API ==========================================================

pub use context::ExampleContext;
pub use error::HarnessError;
