//! Shared types used across the signal chains
//!
//! Boundary sample types, the demodulation mode and the transmit/receive
//! direction. Conversions that can fail return `Option` rather than panic.

use crate::config::ADC_MIDSCALE;
#[cfg(not(feature = "std"))]
use micromath::F32Ext;

/// Convert a biased 12-bit ADC sample to a float in [-1, 1)
#[must_use]
pub fn adc_to_unit(raw: u16) -> f32 {
    (f32::from(raw) - f32::from(ADC_MIDSCALE)) / f32::from(ADC_MIDSCALE)
}

/// Convert a biased 12-bit ADC sample to a signed sample around zero
#[must_use]
pub fn adc_to_signed(raw: u16) -> i16 {
    // 16-bit raw values above i16::MAX saturate instead of wrapping
    let centered = i32::from(raw) - i32::from(ADC_MIDSCALE);
    centered.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

/// Quadrature sample pair at unit scale
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IqSample {
    /// In-phase component
    pub i: f32,
    /// Quadrature component
    pub q: f32,
}

impl IqSample {
    /// Create a new IQ sample
    #[must_use]
    pub const fn new(i: f32, q: f32) -> Self {
        Self { i, q }
    }

    /// Build a sample from a pair of biased 12-bit ADC readings
    #[must_use]
    pub fn from_adc(raw_i: u16, raw_q: u16) -> Self {
        Self::new(adc_to_unit(raw_i), adc_to_unit(raw_q))
    }

    /// Get magnitude
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        (self.i * self.i + self.q * self.q).sqrt()
    }
}

/// Signed transmit sample pair at the DAC boundary (10-bit effective range)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TxIq {
    /// In-phase drive
    pub i: i16,
    /// Quadrature drive
    pub q: i16,
}

impl TxIq {
    /// Create a new transmit pair
    #[must_use]
    pub const fn new(i: i16, q: i16) -> Self {
        Self { i, q }
    }

    /// Get magnitude
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        let (i, q) = (f32::from(self.i), f32::from(self.q));
        (i * i + q * q).sqrt()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TxIq {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TxIq({}, {})", self.i, self.q);
    }
}

/// Demodulation mode
///
/// Selects the receive selectivity filter. Sideband polarity is resolved
/// upstream of the signal chain and is not part of the mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Single sideband voice (2.6 kHz low-pass)
    #[default]
    Ssb,
    /// Continuous Wave (700 Hz band-pass)
    Cw,
}

impl Mode {
    /// Decode a mode from its control-plane representation
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Ssb),
            1 => Some(Self::Cw),
            _ => None,
        }
    }

    /// Encode the mode for atomic storage
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Ssb => 0,
            Self::Cw => 1,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Mode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Ssb => defmt::write!(f, "SSB"),
            Self::Cw => defmt::write!(f, "CW"),
        }
    }
}

/// Transmit/Receive state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TxRxState {
    /// Receiving
    #[default]
    Rx,
    /// Transmitting
    Tx,
}

impl TxRxState {
    /// Decode from the control-plane representation
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Rx),
            1 => Some(Self::Tx),
            _ => None,
        }
    }

    /// Encode for atomic storage
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Rx => 0,
            Self::Tx => 1,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TxRxState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Rx => defmt::write!(f, "RX"),
            Self::Tx => defmt::write!(f, "TX"),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn adc_midscale_is_zero() {
        assert_eq!(adc_to_unit(2048), 0.0);
        assert_eq!(adc_to_signed(2048), 0);
    }

    #[test]
    fn adc_extremes() {
        assert_eq!(adc_to_unit(0), -1.0);
        assert!((adc_to_unit(4095) - 0.99951).abs() < 1e-4);
        assert_eq!(adc_to_signed(0), -2048);
        assert_eq!(adc_to_signed(u16::MAX), i16::MAX);
    }

    #[test]
    fn mode_roundtrip() {
        for mode in [Mode::Ssb, Mode::Cw] {
            assert_eq!(Mode::from_u8(mode.as_u8()), Some(mode));
        }
        assert_eq!(Mode::from_u8(7), None);
    }

    #[test]
    fn txrx_roundtrip() {
        for state in [TxRxState::Rx, TxRxState::Tx] {
            assert_eq!(TxRxState::from_u8(state.as_u8()), Some(state));
        }
        assert_eq!(TxRxState::from_u8(2), None);
    }

    #[test]
    fn tx_iq_magnitude() {
        assert!((TxIq::new(3, 4).magnitude() - 5.0).abs() < 1e-6);
    }
}
