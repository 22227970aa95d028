//! Radio Control Logic
//!
//! The half-duplex sample engine and the flags it shares with the
//! control context.

pub mod control;
pub mod transceiver;
