//=========================================================================
// Example Context
//=========================================================================
//
// The callback surface handed to an example program on the worker thread.
//
// Frame lifecycle:
// ```text
//   loop {
//       ctx.update();                    // poll input, flush last frame's text
//       if ctx.btn_press(Button::Quit) { break; }
//       ctx.draw_text(...);              // build this frame's text
//       ctx.sleep(50);
//   }
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::display::{self, TextDisplay};
use crate::core::input::{Button, ButtonSnapshot, InputTranslator};
use crate::core::platform_bridge::{UiEvent, UiLink};
use crate::core::resources::ResourceLocator;
use crate::core::HarnessError;

//=== ExampleContext ======================================================

/// Per-example harness services, owned by the worker thread.
pub struct ExampleContext {
    input: Arc<InputTranslator>,
    display: TextDisplay,
    resources: ResourceLocator,
    link: UiLink,
}

impl ExampleContext {
    pub(crate) fn new(input: Arc<InputTranslator>, resources: ResourceLocator, link: UiLink) -> Self {
        Self {
            input,
            display: TextDisplay::new(link.clone()),
            resources,
            link,
        }
    }

    pub(crate) fn ui_link(&self) -> UiLink {
        self.link.clone()
    }

    //--- Frame ------------------------------------------------------------

    /// Polls input for this frame and sends the accumulated text to the UI.
    pub fn update(&mut self) -> ButtonSnapshot {
        let snapshot = self.input.poll();
        self.display.flush();
        snapshot
    }

    pub fn sleep(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }

    /// Asks the UI to close. The entry point should return afterwards.
    ///
    /// Waits for queue space if the UI is behind on display frames.
    pub fn exit(&self, code: i32) {
        info!(target: "harness", "Example requested exit ({})", code);
        self.link.send_control(UiEvent::Exit(code));
    }

    //--- Input ------------------------------------------------------------

    pub fn btn_press(&self, button: Button) -> bool {
        self.input.is_pressed(button)
    }

    pub fn btn_down(&self, button: Button) -> bool {
        self.input.is_down(button)
    }

    pub fn btn_str(&self, button: Button) -> &'static str {
        button.name()
    }

    //--- Text -------------------------------------------------------------

    pub fn draw_text(&mut self, text: &str) {
        self.display.draw_text(text);
    }

    pub fn tty(&self, message: &str) {
        display::tty(message);
    }

    //--- Files ------------------------------------------------------------

    pub fn media_path(&self, file_name: &str) -> String {
        self.resources.media_path(file_name)
    }

    pub fn write_path(&self, file_name: &str) -> PathBuf {
        self.resources.write_path(file_name)
    }

    /// Reads a packaged file whole. Dropping the buffer releases it.
    pub fn load_file(&self, name: &str) -> Result<Vec<u8>, HarnessError> {
        self.resources.load_file(name)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
