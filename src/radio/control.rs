//! Control Flags
//!
//! The only state written by the control context and read by the sample
//! context. Every field is a single atomic, so a reader never sees a
//! half-written update. The mute request is a one-shot handed over by
//! swap; the AGC itself is only ever touched from the sample context.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::types::Mode;

/// Mode and mute flags shared between contexts
#[derive(Debug)]
pub struct ControlFlags {
    mode: AtomicU8,
    mute_requested: AtomicBool,
}

impl ControlFlags {
    /// Flags for `mode`, no mute pending
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode: AtomicU8::new(mode.as_u8()),
            mute_requested: AtomicBool::new(false),
        }
    }

    /// Select the demodulation mode (control context)
    pub fn set_mode(&self, mode: Mode) {
        let previous = self.mode.swap(mode.as_u8(), Ordering::Release);
        if previous != mode.as_u8() {
            debug!("demodulation mode -> {}", mode);
        }
    }

    /// Current demodulation mode
    #[must_use]
    pub fn mode(&self) -> Mode {
        // Only `set_mode` stores, so the value always decodes
        Mode::from_u8(self.mode.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Ask the sample context to mute the audio (control context)
    pub fn request_mute(&self) {
        self.mute_requested.store(true, Ordering::Release);
        trace!("mute requested");
    }

    /// Consume a pending mute request (sample context)
    pub fn take_mute(&self) -> bool {
        self.mute_requested.swap(false, Ordering::AcqRel)
    }

    /// True while a mute request is pending
    #[must_use]
    pub fn mute_pending(&self) -> bool {
        self.mute_requested.load(Ordering::Acquire)
    }
}

impl Default for ControlFlags {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
