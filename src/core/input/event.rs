//=========================================================================
// Key Codes
//
// Platform-independent physical key identifiers delivered by the platform
// layer, and their binding to logical buttons.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    KeyCode (this module)
//         ↓
//    key_mask() → ButtonMask
//         ↓
//    InputTranslator (keyboard state)
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::button::{Button, ButtonMask};

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Only the keys the harness can meaningfully receive are listed; the
/// platform maps anything else to `Unidentified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Any key without a mapping.
    Unidentified,
}

//=== Key Binding =========================================================

/// Button bound to a key, if any.
pub fn key_button(key: KeyCode) -> Option<Button> {
    match key {
        KeyCode::Digit1 => Some(Button::Action1),
        KeyCode::Digit2 => Some(Button::Action2),
        KeyCode::Digit3 => Some(Button::Action3),
        KeyCode::Digit4 => Some(Button::Action4),
        KeyCode::ArrowLeft => Some(Button::Left),
        KeyCode::ArrowRight => Some(Button::Right),
        KeyCode::ArrowUp => Some(Button::Up),
        KeyCode::ArrowDown => Some(Button::Down),
        // Space activates focused UI elements, so "more" lives on Q.
        KeyCode::KeyQ => Some(Button::More),
        KeyCode::Escape => Some(Button::Quit),
        _ => None,
    }
}

/// Mask for a key. Unbound keys yield an empty mask.
#[inline]
pub fn key_mask(key: KeyCode) -> ButtonMask {
    key_button(key).map_or(ButtonMask::EMPTY, Button::mask)
}

//=========================================================================
// Unit Tests
//=========================================================================
