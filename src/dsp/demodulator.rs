//! Receive Demodulator
//!
//! Phasing-method SSB/CW demodulation: DC removal on each branch, the
//! all-pass phase networks, image rejection by subtraction, mode-selected
//! selectivity and finally the AGC.
//!
//! ```text
//! I ─ DC ─ AP(+) ─┐
//!                 (−) ─ LPF 2600 / BPF 700 ─ ×8192 ─ AGC ─ audio
//! Q ─ DC ─ AP(−) ─┘
//! ```
//!
//! The chain always computes `I − Q`; upper/lower sideband selection
//! happens upstream of this module.

use super::agc::{Agc, AgcConfig};
use super::filter_bank::RxFilterBank;
use crate::config::RX_AGC_INPUT_SCALE;
use crate::types::{IqSample, Mode};

/// SSB/CW demodulator with its own filters and AGC
#[derive(Clone, Debug)]
pub struct Demodulator {
    filters: RxFilterBank,
    agc: Agc,
}

impl Demodulator {
    /// Create a demodulator with the default AGC
    #[must_use]
    pub const fn new() -> Self {
        Self::with_agc(AgcConfig::DEFAULT)
    }

    /// Create a demodulator with a specific AGC configuration
    #[must_use]
    pub const fn with_agc(config: AgcConfig) -> Self {
        Self {
            filters: RxFilterBank::new(),
            agc: Agc::new(config),
        }
    }

    /// Demodulate one IQ sample to baseband audio, before the AGC
    ///
    /// Only the filter selected by `mode` advances.
    pub fn demodulate(&mut self, iq: IqSample, mode: Mode) -> f32 {
        let f = &mut self.filters;
        let i = f.dc_i.process(iq.i);
        let q = f.dc_q.process(iq.q);

        let i_shifted = f.phase_i.process(i);
        let q_shifted = f.phase_q.process(q);

        // Reject image
        let ssb = i_shifted - q_shifted;

        match mode {
            Mode::Ssb => f.ssb.process(ssb),
            Mode::Cw => f.cw.process(ssb),
        }
    }

    /// Demodulate one IQ sample to a 12-bit signed DAC value
    pub fn process(&mut self, iq: IqSample, mode: Mode) -> i16 {
        let audio = self.demodulate(iq, mode);
        self.agc.process(audio * RX_AGC_INPUT_SCALE)
    }

    /// Process a block of IQ samples into `out`
    ///
    /// Stops at the shorter of the two slices.
    pub fn process_block(&mut self, iq: &[IqSample], out: &mut [i16], mode: Mode) {
        for (sample, dst) in iq.iter().zip(out.iter_mut()) {
            *dst = self.process(*sample, mode);
        }
    }

    /// Mute the audio by saturating the AGC envelope
    pub fn mute(&mut self) {
        self.agc.mute();
    }

    /// AGC state, for metering
    #[must_use]
    pub const fn agc(&self) -> &Agc {
        &self.agc
    }
}

impl Default for Demodulator {
    fn default() -> Self {
        Self::new()
    }
}
