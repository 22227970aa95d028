//! Transmit Chain and Mic Meter Tests
//!
//! Run with: cargo test --features std --test transmit_tests

use core::f32::consts::PI;

use dcr_dsp::config::{MIC_LEVEL_DECAY_MS, MIC_LEVEL_HANG_MS, SAMPLE_RATE_HZ};
use dcr_dsp::dsp::meter::MicLevelMeter;
use dcr_dsp::dsp::transmit::TxProcessor;
use dcr_dsp::types::TxIq;

#[allow(clippy::cast_possible_truncation)]
fn mic_tone(freq_hz: f32, amplitude: f32, n: usize) -> i16 {
    let phase = 2.0 * PI * freq_hz * n as f32 / SAMPLE_RATE_HZ as f32;
    (amplitude * phase.sin()) as i16
}

/// Settled (min, max) envelope of the unit-scale output
fn envelope_range(freq_hz: f32, amplitude: f32) -> (f32, f32) {
    let mut tx = TxProcessor::new();
    let (mut lo, mut hi) = (f32::MAX, 0.0f32);
    for n in 0..3000 {
        let mag = tx.modulate(mic_tone(freq_hz, amplitude, n)).magnitude();
        if n >= 1500 {
            lo = lo.min(mag);
            hi = hi.max(mag);
        }
    }
    (lo, hi)
}

// =============================================================================
// Controlled Envelope Tests
// =============================================================================

#[test]
fn test_envelope_held_near_unity_over_mic_range() {
    // Across more than 20 dB of drive
    for amplitude in [600.0, 1000.0, 2000.0, 6500.0] {
        let (lo, hi) = envelope_range(1000.0, amplitude);
        assert!((lo - 1.0).abs() < 0.01, "{amplitude}: min {lo}");
        assert!((hi - 1.0).abs() < 0.01, "{amplitude}: max {hi}");
    }
}

#[test]
fn test_envelope_flat_across_voice_band() {
    for freq in [300.0, 500.0, 1000.0] {
        let (lo, hi) = envelope_range(freq, 2000.0);
        assert!(hi - lo < 0.01, "{freq} Hz: {lo}..{hi}");
        assert!((hi - 1.0).abs() < 0.01, "{freq} Hz: max {hi}");
    }
}

#[test]
fn test_small_signal_not_expanded() {
    let (_, hi) = envelope_range(1000.0, 400.0);
    assert!(hi < 0.9, "max {hi}");
}

#[test]
fn test_output_scaled_to_dac_range() {
    let mut tx = TxProcessor::new();
    let mut out = TxIq::default();
    for n in 0..3000 {
        out = tx.process(mic_tone(1000.0, 3000.0, n));
    }
    let mag = out.magnitude();
    assert!((mag - 512.0).abs() < 10.0, "magnitude {mag}");
}

#[test]
fn test_overdrive_stays_bounded() {
    let mut tx = TxProcessor::new();
    for n in 0..3000 {
        let out = tx.process(mic_tone(1000.0, 30_000.0, n));
        // Shaping ringing after the limiter, never near i16 range
        assert!(out.magnitude() < 700.0, "sample {n}: {out:?}");
    }
}

#[test]
fn test_block_matches_per_sample() {
    let mic: Vec<i16> = (0..400).map(|n| mic_tone(800.0, 1500.0, n)).collect();
    let mut block = TxProcessor::new();
    let mut single = TxProcessor::new();
    let mut out = vec![TxIq::default(); mic.len()];
    block.process_block(&mic, &mut out);
    for (sample, got) in mic.iter().zip(out.iter()) {
        assert_eq!(single.process(*sample), *got);
    }
}

// =============================================================================
// Mic Level Meter Tests
// =============================================================================

#[test]
fn test_mic_meter_adopts_new_peak() {
    let mut meter = MicLevelMeter::new();
    assert_eq!(meter.update(100, 0), 100);
    assert_eq!(meter.update(-300, 1), 300);
    assert_eq!(meter.update(200, 2), 300);
    assert_eq!(meter.level(), 300);
}

#[test]
fn test_mic_meter_hangs_then_decays() {
    let mut meter = MicLevelMeter::new();
    meter.update(1000, 0);

    // Held through the hang time
    assert_eq!(meter.update(0, MIC_LEVEL_HANG_MS), 1000);

    // Then one count per decay period
    let mut now = MIC_LEVEL_HANG_MS + 1;
    assert_eq!(meter.update(0, now), 999);
    assert_eq!(meter.update(0, now + MIC_LEVEL_DECAY_MS), 999);
    now += MIC_LEVEL_DECAY_MS + 1;
    assert_eq!(meter.update(0, now), 998);

    for _ in 0..10 {
        now += MIC_LEVEL_DECAY_MS + 1;
        meter.update(0, now);
    }
    assert_eq!(meter.level(), 988);
}

#[test]
fn test_mic_meter_new_peak_restarts_hang() {
    let mut meter = MicLevelMeter::new();
    meter.update(500, 0);
    meter.update(0, 600);
    assert_eq!(meter.level(), 499);

    meter.update(800, 700);
    assert_eq!(meter.update(0, 700 + MIC_LEVEL_HANG_MS), 800);
    assert_eq!(meter.update(0, 701 + MIC_LEVEL_HANG_MS), 799);
}

#[test]
fn test_mic_meter_floor_at_zero() {
    let mut meter = MicLevelMeter::new();
    meter.update(1, 0);
    let mut now = MIC_LEVEL_HANG_MS;
    for _ in 0..5 {
        now += MIC_LEVEL_DECAY_MS + 1;
        meter.update(0, now);
    }
    assert_eq!(meter.level(), 0);
}
