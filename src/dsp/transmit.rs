//! Transmit Processor
//!
//! Microphone to SSB I/Q with first-order controlled-envelope (CESSB)
//! limiting. The phase networks produce a quadrature pair whose
//! instantaneous magnitude is normalized to at most one before final
//! low-pass shaping, bounding peak power while keeping the phase.
//!
//! ```text
//! mic ─ DC ─ ×gain ─ LPF 2600 ─┬─ AP(+) ─┐            ┌─ LPF I ─ ×512 ─ I
//!                              │         ├─ ÷max(|IQ|,1) ┤
//!                              └─ AP(−) ─┘            └─ LPF Q ─ ×512 ─ Q
//! ```

use super::filter_bank::TxFilterBank;
use crate::config::{MIC_FULL_SCALE, MIC_GAIN, TX_OUTPUT_SCALE};
use crate::types::{IqSample, TxIq};
#[cfg(not(feature = "std"))]
use micromath::F32Ext;

/// Mic-to-I/Q transmit chain
#[derive(Clone, Debug)]
pub struct TxProcessor {
    filters: TxFilterBank,
}

impl TxProcessor {
    /// Create a transmit processor with zeroed filter state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filters: TxFilterBank::new(),
        }
    }

    /// Run one signed 12-bit mic sample through the chain at unit scale
    pub fn modulate(&mut self, mic: i16) -> IqSample {
        let f = &mut self.filters;

        let ac = f.mic_dc.process(f32::from(mic) / MIC_FULL_SCALE);
        let shaped = f.shaping.process(ac * MIC_GAIN);

        let i = f.phase_i.process(shaped);
        let q = f.phase_q.process(shaped);

        // Floor at 1.0: small signals pass unchanged, large ones are limited
        let magnitude = (i * i + q * q).sqrt().max(1.0);

        IqSample::new(
            f.lowpass_i.process(i / magnitude),
            f.lowpass_q.process(q / magnitude),
        )
    }

    /// Run one signed 12-bit mic sample through the chain
    #[allow(clippy::cast_possible_truncation)]
    pub fn process(&mut self, mic: i16) -> TxIq {
        let iq = self.modulate(mic);
        TxIq::new(
            (iq.i * TX_OUTPUT_SCALE) as i16,
            (iq.q * TX_OUTPUT_SCALE) as i16,
        )
    }

    /// Process a block of mic samples into `out`
    ///
    /// Stops at the shorter of the two slices.
    pub fn process_block(&mut self, mic: &[i16], out: &mut [TxIq]) {
        for (sample, dst) in mic.iter().zip(out.iter_mut()) {
            *dst = self.process(*sample);
        }
    }
}

impl Default for TxProcessor {
    fn default() -> Self {
        Self::new()
    }
}
