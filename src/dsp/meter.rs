//! Display Meters
//!
//! Millisecond-clocked helpers for display values that are decoupled from
//! the signal path: the microphone peak meter and the deadline test shared
//! with the S-meter.

use crate::config::{MIC_LEVEL_DECAY_MS, MIC_LEVEL_HANG_MS};

/// True once `now_ms` is strictly past `deadline_ms`
///
/// Compares on the wrapping difference so a free-running millisecond
/// counter can roll over.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn deadline_passed(now_ms: u32, deadline_ms: u32) -> bool {
    (now_ms.wrapping_sub(deadline_ms) as i32) > 0
}

/// Microphone peak meter with hang time
///
/// A new peak is adopted immediately. Once the hang time has run out the
/// held peak falls by one count every decay period.
#[derive(Clone, Copy, Debug, Default)]
pub struct MicLevelMeter {
    peak: u32,
    decay_deadline_ms: u32,
    hang_deadline_ms: u32,
}

impl MicLevelMeter {
    /// Create a new meter reading zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            peak: 0,
            decay_deadline_ms: 0,
            hang_deadline_ms: 0,
        }
    }

    /// Feed one raw (centred) mic sample
    pub fn update(&mut self, sample: i16, now_ms: u32) -> u32 {
        let level = u32::from(sample.unsigned_abs());
        if level > self.peak {
            self.peak = level;
            self.decay_deadline_ms = now_ms.wrapping_add(MIC_LEVEL_DECAY_MS);
            self.hang_deadline_ms = now_ms.wrapping_add(MIC_LEVEL_HANG_MS);
        } else if deadline_passed(now_ms, self.hang_deadline_ms)
            && deadline_passed(now_ms, self.decay_deadline_ms)
        {
            self.peak = self.peak.saturating_sub(1);
            self.decay_deadline_ms = now_ms.wrapping_add(MIC_LEVEL_DECAY_MS);
        }
        self.peak
    }

    /// Held peak
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.peak
    }
}
