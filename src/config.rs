//! System configuration and signal-chain constants
//!
//! This module defines compile-time constants for the receive and transmit
//! chains. Sample rates, scaling factors and time constants are centralized
//! here; coefficient tables live in [`crate::dsp::coefficients`].

/// Design sample rate of the receive and transmit chains
pub const SAMPLE_RATE_HZ: u32 = 31_250;

/// Mid-scale bias of the 12-bit unsigned ADC samples
pub const ADC_MIDSCALE: u16 = 2048;

/// Single-pole DC blocker feedback (~200 Hz corner at [`SAMPLE_RATE_HZ`])
pub const DC_BLOCK_K: f32 = 0.05;

/// Number of first-order sections in each all-pass cascade
pub const ALLPASS_STAGES: usize = 3;

/// Capacity of every FIR history buffer (power of two)
pub const FIR_HISTORY_LEN: usize = 256;

/// Box-car length of one moving-average stage (power of two)
pub const MOVING_AVERAGE_LEN: usize = 32;

/// Number of cascaded moving-average stages in the ADC smoother
pub const MOVING_AVERAGE_STAGES: usize = 4;

/// Scaling from demodulated baseband to the AGC input range
pub const RX_AGC_INPUT_SCALE: f32 = 8192.0;

/// AGC output target (positive half-range of the 12-bit DAC)
pub const AGC_TARGET: f32 = 2047.0;

/// AGC gain ceiling (32 dB)
pub const AGC_MAX_GAIN: f32 = 40.0;

/// AGC envelope release per sample (about 10 dB per second)
pub const AGC_DECAY: f32 = 0.99996;

/// Envelope forced by a mute, collapsing the gain on the following samples
pub const AGC_MUTE_LEVEL: f32 = 8192.0;

/// S-meter recompute interval in milliseconds
pub const SMETER_UPDATE_MS: u32 = 20;

/// Envelope reported as the bottom of the S-meter scale
pub const SMETER_S0_LEVEL: f32 = 30.0;

/// Envelope reported as the top of the S-meter scale (S9)
pub const SMETER_S9_LEVEL: f32 = 120.0;

/// Top of the S-meter output range
pub const SMETER_MAX: u8 = 255;

/// Divisor taking a signed 12-bit mic sample to unit scale
pub const MIC_FULL_SCALE: f32 = 2048.0;

/// Fixed mic input gain applied after DC removal
pub const MIC_GAIN: f32 = 4.0;

/// Transmit I/Q output scaling (10-bit signed)
pub const TX_OUTPUT_SCALE: f32 = 512.0;

/// Mic level meter: one count of decay per period, in milliseconds
pub const MIC_LEVEL_DECAY_MS: u32 = 50;

/// Mic level meter: hold time after a new peak, in milliseconds
pub const MIC_LEVEL_HANG_MS: u32 = 500;
