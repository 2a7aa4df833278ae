//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit input into translator records.
//
// Architecture:
//   Winit Events → InputProcessor → InputTranslator (record_*)
//
// Keys go through `KeyCode`; pointer presses and touch starts are resolved
// to buttons by the touch pad. The processor keeps the last cursor position
// because winit reports mouse presses without coordinates.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== External Dependencies ===============================================

use log::trace;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use super::touch_pad;
use crate::core::input::{Button, InputTranslator, KeyCode};

//=== InputProcessor ======================================================

/// Feeds winit keyboard and pointer input into the shared translator.
pub(crate) struct InputProcessor {
    input: Arc<InputTranslator>,
    cursor: Option<PhysicalPosition<f64>>,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(input: Arc<InputTranslator>) -> Self {
        Self { input, cursor: None }
    }

    //--- Keyboard ---------------------------------------------------------

    /// Records a key transition. Repeats are ignored.
    pub(crate) fn process_key(&self, physical_key: PhysicalKey, state: ElementState, repeat: bool) {
        if repeat {
            return;
        }

        let key = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            PhysicalKey::Unidentified(_) => KeyCode::Unidentified,
        };

        match state {
            ElementState::Pressed => self.input.record_key_down(key),
            ElementState::Released => self.input.record_key_up(key),
        }
    }

    //--- Pointer ----------------------------------------------------------

    pub(crate) fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(position);
    }

    /// Left presses act as taps on the touch pad.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
        window: PhysicalSize<u32>,
        scale_factor: f64,
    ) -> Option<Button> {
        if button != WinitMouseButton::Left || state != ElementState::Pressed {
            return None;
        }
        let cursor = self.cursor?;
        self.process_tap(cursor, window, scale_factor)
    }

    /// Records a touch if `position` lands on an on-screen button.
    pub(crate) fn process_tap(
        &self,
        position: PhysicalPosition<f64>,
        window: PhysicalSize<u32>,
        scale_factor: f64,
    ) -> Option<Button> {
        let window = window.to_logical::<f64>(scale_factor);
        let point = position.to_logical::<f64>(scale_factor);

        let hit = touch_pad::hit_test((window.width, window.height), (point.x, point.y));
        match hit {
            Some(button) => {
                trace!(target: "platform::input", "Tap on {}", button);
                self.input.record_touch(button);
            }
            None => trace!(target: "platform::input", "Tap missed touch pad"),
        }
        hit
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to harness key codes.
///
/// Maps A-Z, 0-9, arrows, and a few special keys. Everything else returns
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    fn window() -> PhysicalSize<u32> {
        PhysicalSize::new(350, 600)
    }

    fn processor() -> (InputProcessor, Arc<InputTranslator>) {
        let input = Arc::new(InputTranslator::new());
        (InputProcessor::new(Arc::clone(&input)), input)
    }

    #[test]
    fn key_press_and_release_reach_translator() {
        let (processor, input) = processor();

        processor.process_key(PhysicalKey::Code(WinitKeyCode::Digit3), ElementState::Pressed, false);
        input.poll();
        assert!(input.is_pressed(Button::Action3));

        processor.process_key(PhysicalKey::Code(WinitKeyCode::Digit3), ElementState::Released, false);
        input.poll();
        assert!(!input.is_down(Button::Action3));
    }

    #[test]
    fn key_repeat_is_ignored() {
        let (processor, input) = processor();

        processor.process_key(PhysicalKey::Code(WinitKeyCode::Escape), ElementState::Pressed, true);
        input.poll();
        assert!(!input.is_down(Button::Quit));
    }

    #[test]
    fn unidentified_physical_key_is_ignored() {
        let (processor, input) = processor();

        processor.process_key(
            PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
            ElementState::Pressed,
            false,
        );
        assert!(input.poll().down.is_empty());
    }

    #[test]
    fn keycode_conversion() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyQ), KeyCode::KeyQ);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
    }

    #[test]
    fn left_click_on_button_records_touch() {
        let (mut processor, input) = processor();

        // Centre cell of the grid in a 350x600 window.
        processor.process_cursor_moved(PhysicalPosition::new(175.0, 600.0 - 10.0 - 96.0));
        let hit = processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed, window(), 1.0);

        assert_eq!(hit, Some(Button::More));
        assert!(input.poll().pressed.contains(Button::More));
    }

    #[test]
    fn click_without_cursor_or_on_release_is_ignored() {
        let (mut processor, input) = processor();

        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed, window(), 1.0),
            None
        );

        processor.process_cursor_moved(PhysicalPosition::new(175.0, 494.0));
        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Left, ElementState::Released, window(), 1.0),
            None
        );
        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Right, ElementState::Pressed, window(), 1.0),
            None
        );
        assert!(input.poll().down.is_empty());
    }

    #[test]
    fn tap_is_scaled_to_logical_pixels() {
        let (processor, input) = processor();

        // Same centre cell on a 2x display.
        let hit = processor.process_tap(
            PhysicalPosition::new(350.0, 988.0),
            PhysicalSize::new(700, 1200),
            2.0,
        );

        assert_eq!(hit, Some(Button::More));
        assert!(input.poll().pressed.contains(Button::More));
    }
}
