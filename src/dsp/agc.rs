//! Automatic Gain Control
//!
//! Peak-tracking AGC with instant attack and slow exponential release, and
//! the S-meter derived from its envelope. The AGC envelope is the only level
//! measurement in the receive chain.

use super::meter::deadline_passed;
use crate::config::{
    AGC_DECAY, AGC_MAX_GAIN, AGC_MUTE_LEVEL, AGC_TARGET, SMETER_MAX, SMETER_S0_LEVEL,
    SMETER_S9_LEVEL, SMETER_UPDATE_MS,
};
#[cfg(not(feature = "std"))]
use micromath::F32Ext;

/// AGC configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgcConfig {
    /// Output level the gain aims for
    pub target: f32,
    /// Gain ceiling, also the fixed gain below an envelope of 1.0
    pub max_gain: f32,
    /// Envelope release factor per sample
    pub decay: f32,
    /// Envelope forced by [`Agc::mute`]
    pub mute_level: f32,
}

impl AgcConfig {
    /// Default receive configuration
    pub const DEFAULT: Self = Self {
        target: AGC_TARGET,
        max_gain: AGC_MAX_GAIN,
        decay: AGC_DECAY,
        mute_level: AGC_MUTE_LEVEL,
    };
}

impl Default for AgcConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// AGC state
#[derive(Clone, Copy, Debug)]
pub struct Agc {
    config: AgcConfig,
    /// Peak envelope, never negative
    envelope: f32,
}

impl Agc {
    /// Create a new AGC processor
    #[must_use]
    pub const fn new(config: AgcConfig) -> Self {
        Self {
            config,
            envelope: 0.0,
        }
    }

    /// Process a single sample, returning the gain-adjusted DAC value
    ///
    /// The cast truncates toward zero and saturates, so every input,
    /// including NaN, yields a defined sample.
    #[allow(clippy::cast_possible_truncation)]
    pub fn process(&mut self, input: f32) -> i16 {
        let magnitude = input.abs();
        if magnitude > self.envelope {
            self.envelope = magnitude;
        } else {
            self.envelope *= self.config.decay;
        }

        (input * self.gain()) as i16
    }

    /// Process a block of samples into `out`
    ///
    /// Stops at the shorter of the two slices.
    pub fn process_block(&mut self, input: &[f32], out: &mut [i16]) {
        for (sample, dst) in input.iter().zip(out.iter_mut()) {
            *dst = self.process(*sample);
        }
    }

    /// Gain applied at the current envelope
    #[must_use]
    pub fn gain(&self) -> f32 {
        // Near-silence gets the fixed ceiling rather than target / envelope
        if self.envelope < 1.0 {
            self.config.max_gain
        } else {
            (self.config.target / self.envelope).min(self.config.max_gain)
        }
    }

    /// Get current envelope level
    #[must_use]
    pub const fn envelope(&self) -> f32 {
        self.envelope
    }

    /// Force the envelope high so the next samples come out near silent
    ///
    /// The envelope then releases at the normal rate.
    pub fn mute(&mut self) {
        self.envelope = self.config.mute_level;
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &AgcConfig {
        &self.config
    }
}

impl Default for Agc {
    fn default() -> Self {
        Self::new(AgcConfig::default())
    }
}

/// S-meter reading derived from the AGC envelope
///
/// Recomputed at most once every [`SMETER_UPDATE_MS`]; between updates the
/// cached value is returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct SMeter {
    value: u8,
    next_update_ms: Option<u32>,
}

impl SMeter {
    /// Create a new S-meter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: 0,
            next_update_ms: None,
        }
    }

    /// Refresh from the AGC envelope if the update interval has elapsed
    pub fn update(&mut self, now_ms: u32, envelope: f32) -> u8 {
        let due = self
            .next_update_ms
            .map_or(true, |deadline| deadline_passed(now_ms, deadline));
        if due {
            self.next_update_ms = Some(now_ms.wrapping_add(SMETER_UPDATE_MS));
            self.value = level_from_envelope(envelope);
        }
        self.value
    }

    /// Refresh from an AGC
    pub fn update_from_agc(&mut self, now_ms: u32, agc: &Agc) -> u8 {
        self.update(now_ms, agc.envelope())
    }

    /// Last computed reading (0 to [`SMETER_MAX`])
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for SMeter {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "S-meter {}/255", self.value);
    }
}

/// Map an AGC envelope onto the meter range
///
/// Scaled `log10` of the envelope, linear between the S0 and S9
/// calibration levels and clamped outside them. Envelopes at or below
/// 1.0 read zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn level_from_envelope(envelope: f32) -> u8 {
    if envelope.is_nan() || envelope <= 1.0 {
        return 0;
    }

    let log_scaled = |level: f32| (level.log10() * 1024.0) as u32;
    let low = log_scaled(SMETER_S0_LEVEL);
    let high = log_scaled(SMETER_S9_LEVEL);
    let peak = log_scaled(envelope);

    if peak <= low {
        0
    } else if peak >= high {
        SMETER_MAX
    } else {
        ((peak - low) * u32::from(SMETER_MAX) / (high - low)) as u8
    }
}
