//! Half-Duplex Transceiver
//!
//! Owns both signal chains and the display meters, and runs exactly one
//! direction at a time. The hardware glue calls [`Transceiver::receive`]
//! or [`Transceiver::transmit`] once per sample period; the control
//! context talks to it only through [`ControlFlags`] and
//! [`Transceiver::set_txrx`].

use super::control::ControlFlags;
use crate::dsp::agc::SMeter;
use crate::dsp::demodulator::Demodulator;
use crate::dsp::filter::FixedDcBlocker;
use crate::dsp::filter_bank::IqSmoother;
use crate::dsp::meter::MicLevelMeter;
use crate::dsp::transmit::TxProcessor;
use crate::types::{adc_to_signed, IqSample, TxIq, TxRxState};

/// Sample engine for the receive and transmit chains
pub struct Transceiver<'a> {
    flags: &'a ControlFlags,
    state: TxRxState,
    smoother: IqSmoother,
    demodulator: Demodulator,
    transmitter: TxProcessor,
    mic_dc: FixedDcBlocker,
    mic_level: MicLevelMeter,
    smeter: SMeter,
}

impl<'a> Transceiver<'a> {
    /// Create a receiving transceiver with zeroed filter and AGC state
    #[must_use]
    pub const fn new(flags: &'a ControlFlags) -> Self {
        Self {
            flags,
            state: TxRxState::Rx,
            smoother: IqSmoother::new(),
            demodulator: Demodulator::new(),
            transmitter: TxProcessor::new(),
            mic_dc: FixedDcBlocker::new(),
            mic_level: MicLevelMeter::new(),
            smeter: SMeter::new(),
        }
    }

    /// Current direction
    #[must_use]
    pub const fn txrx(&self) -> TxRxState {
        self.state
    }

    /// Switch direction
    ///
    /// Returning to receive mutes the AGC so the first received samples
    /// come in at low gain.
    pub fn set_txrx(&mut self, state: TxRxState) {
        if state == self.state {
            return;
        }
        info!("T/R switch -> {}", state);
        self.state = state;
        if state == TxRxState::Rx {
            self.demodulator.mute();
        }
    }

    /// Smooth one pair of raw ADC readings (ADC-rate front end)
    pub fn smooth_adc(&mut self, raw_i: u16, raw_q: u16) -> IqSample {
        self.smoother.process(raw_i, raw_q)
    }

    /// Demodulate one IQ sample to a DAC value
    ///
    /// Silent, without advancing any filter, while transmitting.
    pub fn receive(&mut self, iq: IqSample) -> i16 {
        if self.state != TxRxState::Rx {
            return 0;
        }
        if self.flags.take_mute() {
            self.demodulator.mute();
        }
        self.demodulator.process(iq, self.flags.mode())
    }

    /// Demodulate a block of IQ samples into `out`
    ///
    /// Stops at the shorter of the two slices.
    pub fn receive_block(&mut self, iq: &[IqSample], out: &mut [i16]) {
        for (sample, dst) in iq.iter().zip(out.iter_mut()) {
            *dst = self.receive(*sample);
        }
    }

    /// Modulate one raw (biased 12-bit) mic sample
    ///
    /// Zero drive, without advancing any filter, while receiving.
    pub fn transmit(&mut self, raw_mic: u16, now_ms: u32) -> TxIq {
        if self.state != TxRxState::Tx {
            return TxIq::default();
        }
        let mic = self.mic_dc.process(adc_to_signed(raw_mic));
        self.mic_level.update(mic, now_ms);
        self.transmitter.process(mic)
    }

    /// Modulate a block of raw mic samples into `out`
    ///
    /// Stops at the shorter of the two slices.
    pub fn transmit_block(&mut self, raw_mic: &[u16], out: &mut [TxIq], now_ms: u32) {
        for (sample, dst) in raw_mic.iter().zip(out.iter_mut()) {
            *dst = self.transmit(*sample, now_ms);
        }
    }

    /// S-meter reading, refreshed at most every 20 ms
    pub fn smeter(&mut self, now_ms: u32) -> u8 {
        self.smeter.update_from_agc(now_ms, self.demodulator.agc())
    }

    /// Held microphone peak
    #[must_use]
    pub const fn mic_level(&self) -> u32 {
        self.mic_level.level()
    }

    /// Receive chain, for metering
    #[must_use]
    pub const fn demodulator(&self) -> &Demodulator {
        &self.demodulator
    }
}
