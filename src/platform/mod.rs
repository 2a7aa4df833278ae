//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the example worker.
//
// Architecture:
// ```text
//  Main Thread:                      Worker Thread:
//  ┌───────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop         │    │  Example entry point │
//  │   ↓                       │    │   ↓                  │
//  │  InputProcessor           │    │  ExampleContext      │
//  │   ├─ keys → KeyCode       │    │   ├─ update()        │
//  │   └─ taps → touch pad     │    │   │   ├─ poll() ◄────┼── InputTranslator
//  │   ↓                       │    │   │   └─ flush text  │      (shared)
//  │  InputTranslator.record_* │    │   └─ btn_press() ... │
//  │                           │    └──────────┬───────────┘
//  │  about_to_wait            │               │
//  │   └─ drain UiEvents ◄─────┼───────────────┘
//  └───────────────────────────┘   crossbeam channel (UiEvent)
// ```
//
// Key Design Decisions:
// - Input is not queued: records go straight into the shared translator,
//   so the worker sees them on its next poll regardless of frame rate
// - The UI side wakes on a short timer to drain worker events, so display
//   frames and exit requests are picked up without a custom user event
// - Closing the window records a one-shot Quit and exits the loop; the
//   harness then waits for the worker to return
// - Nothing is drawn inside the window: display frames go to the `display`
//   log target and the title bar, and the touch pad is hit-tested only
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;
mod touch_pad;

//=== Standard Library Imports ============================================

use std::sync::Arc;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::input::{Button, InputTranslator};
use crate::core::platform_bridge::{PlatformError, UiEvent};
use input_processor::InputProcessor;

//=== Constants ===========================================================

/// How often the UI thread checks for worker events while idle.
const UI_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Logical window size and minimum size, in that order.
const WINDOW_SIZE: (u32, u32) = (350, 600);
const WINDOW_MIN_SIZE: (u32, u32) = (350, 500);

//=== PlatformConfig ======================================================

#[derive(Debug, Clone)]
pub(crate) struct PlatformConfig {
    pub title: String,
    pub display_rows: usize,
}

//=== Platform ============================================================

/// Window owner and input source for the example worker.
///
/// Runs on the main thread (Winit requirement on macOS/iOS). Not Send.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    config: PlatformConfig,

    /// Converts Winit events into translator records.
    input_processor: InputProcessor,

    /// Shared with the worker; used directly for window-close Quit.
    input: Arc<InputTranslator>,

    /// Events from the worker.
    ui_events: Receiver<UiEvent>,

    /// Text panel contents (latest display frame).
    text: String,

    /// Set once the worker finishes or requests exit.
    exit_code: Option<i32>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet - that happens lazily in `resumed()`.
    pub fn new(
        input: Arc<InputTranslator>,
        ui_events: Receiver<UiEvent>,
        config: PlatformConfig,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            config,
            input_processor: InputProcessor::new(Arc::clone(&input)),
            input,
            ui_events,
            text: String::new(),
            exit_code: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or the worker exits.
    ///
    /// Returns the exit code reported by the worker, if any.
    pub fn run(mut self) -> Result<Option<i32>, PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new()
            .map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        Ok(self.exit_code)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Drains pending worker events. Returns `true` once the loop should end.
    fn drain_ui_events(&mut self) -> bool {
        loop {
            match self.ui_events.try_recv() {
                Ok(UiEvent::Display(text)) => self.show_text(text),
                Ok(UiEvent::Exit(code)) => {
                    info!(target: "platform", "Exit requested by example ({})", code);
                    self.exit_code = Some(code);
                }
                Ok(UiEvent::WorkerFinished(code)) => {
                    info!(target: "platform", "Example finished ({})", code);
                    self.exit_code.get_or_insert(code);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!(target: "platform", "Worker link closed");
                    return true;
                }
            }
        }
        self.exit_code.is_some()
    }

    /// Replaces the panel text, keeping at most `display_rows` lines.
    ///
    /// Changed frames are logged at `info` (target `display`) and the first
    /// line with readable content goes into the window title.
    fn show_text(&mut self, mut text: String) {
        let rows = self.config.display_rows;
        let cut = text.match_indices('\n').nth(rows.saturating_sub(1)).map(|(end, _)| end + 1);
        if let Some(cut) = cut {
            text.truncate(cut);
        }
        if text == self.text {
            return;
        }
        self.text = text;

        info!(target: "display", "\n{}", self.text.trim_end());

        if let Some(window) = &self.window {
            window.set_title(&self.window_title());
        }
    }

    fn window_title(&self) -> String {
        match headline(&self.text) {
            Some(line) => format!("{} - {}", self.config.title, line),
            None => self.config.title.clone(),
        }
    }

    /// Records a one-shot Quit so a worker waiting on it can return.
    fn request_close(&self) {
        info!(target: "platform", "Window close requested");
        self.input.record_touch(Button::Quit);
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

/// First line of a frame that has letters or digits, trimmed.
///
/// Banner rows such as `=====` are skipped.
fn headline(text: &str) -> Option<&str> {
    text.lines()
        .map(str::trim)
        .find(|line| line.chars().any(char::is_alphanumeric))
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1))
            .with_min_inner_size(LogicalSize::new(WINDOW_MIN_SIZE.0, WINDOW_MIN_SIZE.1));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.request_close();
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.request_close();
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.input_processor
                    .process_key(key_event.physical_key, key_event.state, key_event.repeat);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input_processor.process_cursor_moved(position);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(window) = &self.window {
                    self.input_processor.process_mouse_button(
                        button,
                        state,
                        window.inner_size(),
                        window.scale_factor(),
                    );
                }
            }

            WindowEvent::Touch(touch) if touch.phase == TouchPhase::Started => {
                if let Some(window) = &self.window {
                    self.input_processor.process_tap(
                        touch.location,
                        window.inner_size(),
                        window.scale_factor(),
                    );
                }
            }

            _ => {
                // Ignore: Resized, Focused, RedrawRequested, etc.
            }
        }
    }

    /// Picks up worker events, then sleeps until the next check.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.drain_ui_events() {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + UI_POLL_INTERVAL));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
