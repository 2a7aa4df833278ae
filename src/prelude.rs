//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use example_harness::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Harness entry point
pub use crate::harness::{Harness, HarnessBuilder};

// Worker-facing surface
pub use crate::core::{ExampleContext, HarnessError};

// Input system
pub use crate::core::input::{button_name, Button, ButtonMask, ButtonSnapshot, InputTranslator, KeyCode};
