//=========================================================================
// Text Display
//=========================================================================
//
// Worker-owned text buffer for the on-screen panel, plus debug output.
//
// Frame lifecycle: draw_text()* → flush() → (UI thread replaces panel)
//
// The buffer belongs to the worker alone. `flush()` hands a copy to the UI
// thread without waiting; ordering against later frames is only "eventually
// delivered", which is enough for diagnostic text.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{UiEvent, UiLink};

//=== Limits ==============================================================

/// Characters kept per `draw_text` line, newline excluded.
pub const MAX_LINE_CHARS: usize = 254;

/// Characters kept per `tty` message.
pub const MAX_TTY_CHARS: usize = 1023;

//=== TextDisplay =========================================================

pub struct TextDisplay {
    buffer: String,
    link: UiLink,
}

impl TextDisplay {
    pub fn new(link: UiLink) -> Self {
        Self {
            buffer: String::with_capacity(1024),
            link,
        }
    }

    /// Appends one line to the current frame.
    pub fn draw_text(&mut self, text: &str) {
        self.buffer.extend(text.chars().take(MAX_LINE_CHARS));
        self.buffer.push('\n');
    }

    /// Sends the current frame to the UI thread and starts a new one.
    ///
    /// An empty frame is still sent so the panel is cleared.
    pub fn flush(&mut self) {
        let frame = std::mem::replace(&mut self.buffer, String::with_capacity(1024));
        self.link.post(UiEvent::Display(frame));
    }

    /// Text accumulated since the last flush.
    pub fn pending(&self) -> &str {
        &self.buffer
    }
}

//=== TTY =================================================================

/// Writes a debug message to the log under target `tty`.
pub fn tty(message: &str) {
    match message.char_indices().nth(MAX_TTY_CHARS) {
        Some((cut, _)) => debug!(target: "tty", "{}", &message[..cut]),
        None => debug!(target: "tty", "{}", message),
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn lines_are_newline_terminated() {
        let (tx, _rx) = unbounded();
        let mut display = TextDisplay::new(UiLink::new(tx));

        display.draw_text("==================================================");
        display.draw_text("Play Sound Example.");
        display.draw_text("");

        assert_eq!(
            display.pending(),
            "==================================================\nPlay Sound Example.\n\n"
        );
    }

    #[test]
    fn long_lines_are_truncated() {
        let (tx, _rx) = unbounded();
        let mut display = TextDisplay::new(UiLink::new(tx));

        display.draw_text(&"x".repeat(1000));

        assert_eq!(display.pending().len(), MAX_LINE_CHARS + 1);
        assert!(display.pending().ends_with('\n'));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let (tx, _rx) = unbounded();
        let mut display = TextDisplay::new(UiLink::new(tx));

        display.draw_text(&"é".repeat(300));

        assert_eq!(display.pending().chars().count(), MAX_LINE_CHARS + 1);
    }

    #[test]
    fn flush_sends_frame_and_clears() {
        let (tx, rx) = unbounded();
        let mut display = TextDisplay::new(UiLink::new(tx));

        display.draw_text("Press 1 to play");
        display.flush();

        assert_eq!(rx.try_recv().unwrap(), UiEvent::Display("Press 1 to play\n".into()));
        assert!(display.pending().is_empty());
    }

    #[test]
    fn empty_flush_clears_panel() {
        let (tx, rx) = unbounded();
        let mut display = TextDisplay::new(UiLink::new(tx));

        display.flush();

        assert_eq!(rx.try_recv().unwrap(), UiEvent::Display(String::new()));
    }

    #[test]
    fn flush_survives_closed_ui() {
        let (tx, rx) = unbounded();
        let mut display = TextDisplay::new(UiLink::new(tx));
        drop(rx);

        display.draw_text("still running");
        display.flush();
        assert!(display.pending().is_empty());
    }

    #[test]
    fn tty_accepts_long_and_multibyte_messages() {
        tty(&"ü".repeat(2000));
        tty("short");
    }
}
