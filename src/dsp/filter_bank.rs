//! Filter Bank
//!
//! Every filter instance the transceiver uses, by name. Each named instance
//! owns its history; instances that share a coefficient table still never
//! share state. Receive and transmit own separate all-pass cascades so the
//! two directions stay independent even if they were ever run concurrently.

use super::coefficients::{
    ALLPASS_MINUS_K, ALLPASS_PLUS_K, BPF_700_TAPS, LPF_2600_SHORT_TAPS, LPF_2600_TAPS,
};
use super::filter::{AllPassCascade, DcBlocker, FirFilter, MovingAverage4};
use crate::config::{ALLPASS_STAGES, DC_BLOCK_K, MOVING_AVERAGE_LEN, MOVING_AVERAGE_STAGES};
use crate::types::IqSample;

/// Immutable description of a filter: family plus coefficients
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterSpec {
    /// Single-pole DC blocker
    DcBlock {
        /// Feedback coefficient
        k: f32,
    },
    /// Three-section all-pass cascade
    AllPass {
        /// Section coefficients
        k: [f32; ALLPASS_STAGES],
    },
    /// FIR convolver
    Fir {
        /// Coefficient table
        taps: &'static [f32],
    },
    /// Cascaded box-car averages
    MovingAverage {
        /// Samples per stage
        len: usize,
        /// Number of stages
        stages: usize,
    },
}

impl FilterSpec {
    /// Receive and transmit DC removal
    pub const DC_BLOCK: Self = Self::DcBlock { k: DC_BLOCK_K };
    /// I-branch phase network
    pub const PHASE_PLUS: Self = Self::AllPass { k: ALLPASS_PLUS_K };
    /// Q-branch phase network
    pub const PHASE_MINUS: Self = Self::AllPass { k: ALLPASS_MINUS_K };
    /// 2600 Hz low-pass, full length
    pub const LPF_2600: Self = Self::Fir { taps: &LPF_2600_TAPS };
    /// 700 Hz CW band-pass
    pub const BPF_700: Self = Self::Fir { taps: &BPF_700_TAPS };
    /// 2600 Hz low-pass, short
    pub const LPF_2600_SHORT: Self = Self::Fir { taps: &LPF_2600_SHORT_TAPS };
    /// ADC smoother
    pub const SINC4: Self = Self::MovingAverage {
        len: MOVING_AVERAGE_LEN,
        stages: MOVING_AVERAGE_STAGES,
    };

    /// FIR coefficient table, if this is an FIR spec
    #[must_use]
    pub const fn fir_taps(&self) -> Option<&'static [f32]> {
        match self {
            Self::Fir { taps } => Some(*taps),
            _ => None,
        }
    }
}

/// Named filter instances of the bank
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterId {
    /// Receive I-branch DC blocker
    RxDcI,
    /// Receive Q-branch DC blocker
    RxDcQ,
    /// Receive I-branch phase network
    RxPhaseI,
    /// Receive Q-branch phase network
    RxPhaseQ,
    /// Voice selectivity
    RxSsb,
    /// CW selectivity
    RxCw,
    /// Microphone DC blocker
    TxMicDc,
    /// Band-limiting ahead of the transmit phase networks
    TxShaping,
    /// Transmit I-branch phase network
    TxPhaseI,
    /// Transmit Q-branch phase network
    TxPhaseQ,
    /// Final I shaping after envelope normalization
    TxLowPassI,
    /// Final Q shaping after envelope normalization
    TxLowPassQ,
    /// ADC I smoother
    AdcSmoothI,
    /// ADC Q smoother
    AdcSmoothQ,
}

impl FilterId {
    /// Every instance in the bank
    pub const ALL: [Self; 14] = [
        Self::RxDcI,
        Self::RxDcQ,
        Self::RxPhaseI,
        Self::RxPhaseQ,
        Self::RxSsb,
        Self::RxCw,
        Self::TxMicDc,
        Self::TxShaping,
        Self::TxPhaseI,
        Self::TxPhaseQ,
        Self::TxLowPassI,
        Self::TxLowPassQ,
        Self::AdcSmoothI,
        Self::AdcSmoothQ,
    ];

    /// Characteristic of this instance
    #[must_use]
    pub const fn spec(self) -> FilterSpec {
        match self {
            Self::RxDcI | Self::RxDcQ | Self::TxMicDc => FilterSpec::DC_BLOCK,
            Self::RxPhaseI | Self::TxPhaseI => FilterSpec::PHASE_PLUS,
            Self::RxPhaseQ | Self::TxPhaseQ => FilterSpec::PHASE_MINUS,
            Self::RxSsb | Self::TxShaping => FilterSpec::LPF_2600,
            Self::RxCw => FilterSpec::BPF_700,
            Self::TxLowPassI | Self::TxLowPassQ => FilterSpec::LPF_2600_SHORT,
            Self::AdcSmoothI | Self::AdcSmoothQ => FilterSpec::SINC4,
        }
    }
}

impl FilterId {
    // Only evaluated in the const templates below, so a family mismatch
    // fails the build rather than the sample path.

    const fn dc_blocker(self) -> DcBlocker {
        match self.spec() {
            FilterSpec::DcBlock { k } => DcBlocker::new(k),
            _ => panic!("not a DC blocker instance"),
        }
    }

    const fn all_pass(self) -> AllPassCascade {
        match self.spec() {
            FilterSpec::AllPass { k } => AllPassCascade::new(k),
            _ => panic!("not an all-pass instance"),
        }
    }

    const fn fir(self) -> FirFilter {
        match self.spec() {
            FilterSpec::Fir { taps } => FirFilter::new(taps),
            _ => panic!("not an FIR instance"),
        }
    }
}

const RX_DC_I: DcBlocker = FilterId::RxDcI.dc_blocker();
const RX_DC_Q: DcBlocker = FilterId::RxDcQ.dc_blocker();
const RX_PHASE_I: AllPassCascade = FilterId::RxPhaseI.all_pass();
const RX_PHASE_Q: AllPassCascade = FilterId::RxPhaseQ.all_pass();
const RX_SSB: FirFilter = FilterId::RxSsb.fir();
const RX_CW: FirFilter = FilterId::RxCw.fir();

const TX_MIC_DC: DcBlocker = FilterId::TxMicDc.dc_blocker();
const TX_SHAPING: FirFilter = FilterId::TxShaping.fir();
const TX_PHASE_I: AllPassCascade = FilterId::TxPhaseI.all_pass();
const TX_PHASE_Q: AllPassCascade = FilterId::TxPhaseQ.all_pass();
const TX_LOWPASS_I: FirFilter = FilterId::TxLowPassI.fir();
const TX_LOWPASS_Q: FirFilter = FilterId::TxLowPassQ.fir();

/// Receive-direction instances
#[derive(Clone, Debug)]
pub struct RxFilterBank {
    /// I-branch DC blocker
    pub dc_i: DcBlocker,
    /// Q-branch DC blocker
    pub dc_q: DcBlocker,
    /// I-branch phase network
    pub phase_i: AllPassCascade,
    /// Q-branch phase network
    pub phase_q: AllPassCascade,
    /// Voice selectivity
    pub ssb: FirFilter,
    /// CW selectivity
    pub cw: FirFilter,
}

impl RxFilterBank {
    /// Zero-initialized receive filters
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dc_i: RX_DC_I,
            dc_q: RX_DC_Q,
            phase_i: RX_PHASE_I,
            phase_q: RX_PHASE_Q,
            ssb: RX_SSB,
            cw: RX_CW,
        }
    }
}

impl Default for RxFilterBank {
    fn default() -> Self {
        Self::new()
    }
}

/// Transmit-direction instances
#[derive(Clone, Debug)]
pub struct TxFilterBank {
    /// Microphone DC blocker
    pub mic_dc: DcBlocker,
    /// Band-limiting ahead of the phase networks
    pub shaping: FirFilter,
    /// I-branch phase network
    pub phase_i: AllPassCascade,
    /// Q-branch phase network
    pub phase_q: AllPassCascade,
    /// Final I shaping
    pub lowpass_i: FirFilter,
    /// Final Q shaping
    pub lowpass_q: FirFilter,
}

impl TxFilterBank {
    /// Zero-initialized transmit filters
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mic_dc: TX_MIC_DC,
            shaping: TX_SHAPING,
            phase_i: TX_PHASE_I,
            phase_q: TX_PHASE_Q,
            lowpass_i: TX_LOWPASS_I,
            lowpass_q: TX_LOWPASS_Q,
        }
    }
}

impl Default for TxFilterBank {
    fn default() -> Self {
        Self::new()
    }
}

/// ADC-rate smoothers for the raw I and Q streams
#[derive(Clone, Default)]
pub struct IqSmoother {
    /// I smoother
    pub i: MovingAverage4,
    /// Q smoother
    pub q: MovingAverage4,
}

impl IqSmoother {
    /// Zero-initialized smoothers
    #[must_use]
    pub const fn new() -> Self {
        Self {
            i: MovingAverage4::new(),
            q: MovingAverage4::new(),
        }
    }

    /// Smooth one pair of biased 12-bit ADC readings
    pub fn process(&mut self, raw_i: u16, raw_q: u16) -> IqSample {
        let raw = IqSample::from_adc(raw_i, raw_q);
        IqSample::new(self.i.process(raw.i), self.q.process(raw.q))
    }
}
