//! Digital Signal Processing
//!
//! Provides the sample-rate signal chains of the transceiver:
//! - Stream filter primitives (DC blocker, all-pass cascade, FIR, moving average)
//! - The named filter bank and its coefficient tables
//! - Phasing SSB/CW demodulator with AGC and S-meter
//! - Controlled-envelope SSB transmit processor
//! - Display meters

pub mod agc;
pub mod coefficients;
pub mod demodulator;
pub mod filter;
pub mod filter_bank;
pub mod meter;
pub mod transmit;
