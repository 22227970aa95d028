//! Direct-Conversion Transceiver DSP Core
//!
//! This library provides the real-time signal processing for a
//! direct-conversion (phasing) SSB/CW transceiver: quadrature baseband
//! samples in, demodulated audio out, and microphone samples in,
//! envelope-limited SSB I/Q out.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CONTROL CONTEXT                          │
//! │  Mode selection  │  Mute requests  │  T/R switching          │
//! ├─────────────────────── ControlFlags ────────────────────────┤
//! │                  SAMPLE CONTEXT (Transceiver)                │
//! │  ADC smoother → Demodulator → AGC → S-meter          (RX)    │
//! │  Mic DC → TxProcessor (phasing + CESSB) → I/Q        (TX)    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      FILTER BANK                             │
//! │  DC blockers │ All-pass cascades │ FIR │ Moving averages     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Fixed-size state**: every filter owns a statically sized history;
//!   nothing allocates
//! - **Infallible hot path**: every sample yields a defined value; hazards
//!   are handled by flooring divisors, masking indices and clamping gain
//! - **Explicit ownership**: each named filter instance belongs to exactly
//!   one chain, so no two paths can alias the same history
//! - **Single-writer flags**: the control context only writes atomics

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod fmt;

/// Digital Signal Processing
///
/// Filter primitives, the filter bank, demodulation, AGC and transmit.
pub mod dsp;

/// Radio Control Logic
///
/// Half-duplex sample engine and control-context flags.
pub mod radio;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types.

    pub use crate::config::*;
    pub use crate::dsp::agc::{Agc, AgcConfig, SMeter};
    pub use crate::dsp::demodulator::Demodulator;
    pub use crate::dsp::transmit::TxProcessor;
    pub use crate::radio::control::ControlFlags;
    pub use crate::radio::transceiver::Transceiver;
    pub use crate::types::*;
}
