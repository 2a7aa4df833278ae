//=========================================================================
// Input Translator
//=========================================================================
//
// Turns asynchronous key/touch records into a polled, edge-detected button
// snapshot.
//
// Architecture:
//   UI thread:     record_key_down/up() → keyboard ─┐
//                  record_touch()       → touch    ─┤ (AtomicU32)
//   Worker thread: poll() → merged → (down, pressed) ┘ (AtomicU64)
//                  is_pressed() / is_down()
//
// Frame lifecycle: poll() → any number of queries → poll() ...
//
// Keyboard bits persist until key-up. Touch bits are one-shot: the poll
// that observes them also clears them. Edges are recomputed from the full
// merged mask on every poll, so a burst of key-downs between two polls
// reports one press, and a press+release between two polls reports none.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

//=== Internal Dependencies ===============================================

use super::button::{Button, ButtonMask};
use super::event::{key_mask, KeyCode};

//=== ButtonSnapshot ======================================================

/// Button state computed by one [`InputTranslator::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonSnapshot {
    /// Buttons held as of the poll.
    pub down: ButtonMask,

    /// Buttons that went from released to held during the poll.
    pub pressed: ButtonMask,
}

impl ButtonSnapshot {
    fn pack(self) -> u64 {
        (self.pressed.bits() as u64) << 32 | self.down.bits() as u64
    }

    fn unpack(packed: u64) -> Self {
        Self {
            down: ButtonMask(packed as u32),
            pressed: ButtonMask((packed >> 32) as u32),
        }
    }
}

//=== InputTranslator =====================================================

/// Shared button state between the event thread and the polling worker.
///
/// Records may be issued from any thread at any time. `poll()` is expected
/// from a single consumer once per frame. Records use `Release` and the
/// poll acquires them, so every record is visible to the poll that follows
/// it.
pub struct InputTranslator {
    keyboard: AtomicU32,
    touch: AtomicU32,
    snapshot: AtomicU64,
}

impl InputTranslator {
    /// Creates a translator with every mask zeroed.
    pub fn new() -> Self {
        Self {
            keyboard: AtomicU32::new(0),
            touch: AtomicU32::new(0),
            snapshot: AtomicU64::new(0),
        }
    }

    //--- Producer Side ----------------------------------------------------

    /// Marks the button bound to `key` as held. Unbound keys are ignored.
    pub fn record_key_down(&self, key: KeyCode) {
        let mask = key_mask(key);
        if !mask.is_empty() {
            self.keyboard.fetch_or(mask.bits(), Ordering::Release);
        }
    }

    /// Releases the button bound to `key`. Unbound keys are ignored.
    pub fn record_key_up(&self, key: KeyCode) {
        let mask = key_mask(key);
        if !mask.is_empty() {
            self.keyboard.fetch_and(!mask.bits(), Ordering::Release);
        }
    }

    /// Registers a momentary press, seen by the next poll only.
    pub fn record_touch(&self, button: Button) {
        self.touch.fetch_or(button.mask().bits(), Ordering::Release);
    }

    //--- Consumer Side ----------------------------------------------------

    /// Merges keyboard and touch state and recomputes the snapshot.
    ///
    /// Touch state is taken and cleared in one atomic step, so a touch
    /// racing with this call lands in this poll or the next.
    pub fn poll(&self) -> ButtonSnapshot {
        let touch = self.touch.swap(0, Ordering::AcqRel);
        let keyboard = self.keyboard.load(Ordering::Acquire);
        let merged = keyboard | touch;

        let previous = ButtonSnapshot::unpack(self.snapshot.load(Ordering::Acquire));
        let snapshot = ButtonSnapshot {
            down: ButtonMask(merged),
            pressed: ButtonMask((previous.down.bits() ^ merged) & merged),
        };

        self.snapshot.store(snapshot.pack(), Ordering::Release);
        snapshot
    }

    /// State computed by the last poll.
    pub fn snapshot(&self) -> ButtonSnapshot {
        ButtonSnapshot::unpack(self.snapshot.load(Ordering::Acquire))
    }

    /// `true` if `button` went down during the last poll.
    pub fn is_pressed(&self, button: Button) -> bool {
        self.snapshot().pressed.contains(button)
    }

    /// `true` if `button` was held as of the last poll.
    pub fn is_down(&self, button: Button) -> bool {
        self.snapshot().down.contains(button)
    }
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InputTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("InputTranslator")
            .field("keyboard", &ButtonMask(self.keyboard.load(Ordering::Relaxed)))
            .field("touch", &ButtonMask(self.touch.load(Ordering::Relaxed)))
            .field("down", &snapshot.down)
            .field("pressed", &snapshot.pressed)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
