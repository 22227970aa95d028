//! Transceiver and Control Flag Tests
//!
//! Run with: cargo test --features std --test transceiver_tests

use core::f32::consts::PI;

use dcr_dsp::dsp::filter::FixedDcBlocker;
use dcr_dsp::prelude::*;

fn tone(freq_hz: f32, amplitude: f32, n: usize) -> IqSample {
    let phase = 2.0 * PI * freq_hz * n as f32 / SAMPLE_RATE_HZ as f32;
    IqSample::new(amplitude * phase.sin(), amplitude * phase.cos())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn raw_mic(amplitude: f32, n: usize) -> u16 {
    let phase = 2.0 * PI * 1000.0 * n as f32 / SAMPLE_RATE_HZ as f32;
    (f32::from(ADC_MIDSCALE) + amplitude * phase.sin()) as u16
}

// =============================================================================
// T/R Gating Tests
// =============================================================================

#[test]
fn test_transmit_silent_while_receiving() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    for n in 0..100 {
        assert_eq!(trx.transmit(raw_mic(1500.0, n), 0), TxIq::default());
    }
    assert_eq!(trx.mic_level(), 0);
}

#[test]
fn test_receive_silent_while_transmitting() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    trx.set_txrx(TxRxState::Tx);
    for n in 0..100 {
        assert_eq!(trx.receive(tone(1000.0, 0.5, n)), 0);
    }
    assert_eq!(trx.demodulator().agc().envelope(), 0.0);
}

#[test]
fn test_return_to_receive_resumes_muted() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    trx.set_txrx(TxRxState::Tx);
    for n in 0..100 {
        trx.transmit(raw_mic(1500.0, n), 0);
        trx.receive(tone(1000.0, 0.5, n));
    }
    trx.set_txrx(TxRxState::Rx);

    // Receive filters did not advance during transmit
    let mut reference = Demodulator::new();
    reference.mute();
    for n in 0..50 {
        let iq = tone(1000.0, 0.5, n);
        assert_eq!(trx.receive(iq), reference.process(iq, Mode::Ssb));
    }
}

#[test]
fn test_repeated_switch_is_noop() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    trx.set_txrx(TxRxState::Rx);
    assert_eq!(trx.demodulator().agc().envelope(), 0.0);
}

// =============================================================================
// Receive Path Tests
// =============================================================================

#[test]
fn test_receive_matches_demodulator() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    let mut reference = Demodulator::new();
    for n in 0..500 {
        let iq = tone(1200.0, 0.3, n);
        assert_eq!(trx.receive(iq), reference.process(iq, Mode::Ssb));
    }
}

#[test]
fn test_mode_flag_selects_cw_filter() {
    let flags = ControlFlags::new(Mode::Ssb);
    let mut trx = Transceiver::new(&flags);
    flags.set_mode(Mode::Cw);

    let mut reference = Demodulator::new();
    for n in 0..500 {
        let iq = tone(700.0, 0.3, n);
        assert_eq!(trx.receive(iq), reference.process(iq, Mode::Cw));
    }
}

#[test]
fn test_mute_request_consumed_by_sample_path() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    for n in 0..100 {
        trx.receive(tone(1000.0, 0.01, n));
    }

    flags.request_mute();
    assert!(flags.mute_pending());
    trx.receive(IqSample::default());

    assert!(!flags.mute_pending());
    let envelope = trx.demodulator().agc().envelope();
    assert!(envelope > 8000.0 && envelope <= AGC_MUTE_LEVEL);
}

#[test]
fn test_flags_written_from_another_thread() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);

    std::thread::scope(|s| {
        s.spawn(|| {
            flags.set_mode(Mode::Cw);
            flags.request_mute();
        });
    });

    trx.receive(IqSample::default());
    assert_eq!(flags.mode(), Mode::Cw);
    assert!(!flags.mute_pending());
    assert!(trx.demodulator().agc().envelope() > 8000.0);
}

#[test]
fn test_receive_block() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    let mut reference = Demodulator::new();

    let input: Vec<IqSample> = (0..256).map(|n| tone(900.0, 0.2, n)).collect();
    let mut out = vec![0i16; input.len()];
    trx.receive_block(&input, &mut out);

    let mut want = vec![0i16; input.len()];
    reference.process_block(&input, &mut want, Mode::Ssb);
    assert_eq!(out, want);
}

// =============================================================================
// ADC Front End Tests
// =============================================================================

#[test]
fn test_smooth_adc_midscale_is_zero() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    for _ in 0..300 {
        assert_eq!(trx.smooth_adc(ADC_MIDSCALE, ADC_MIDSCALE), IqSample::default());
    }
}

#[test]
fn test_smooth_adc_settles_to_unit_scale() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    let mut iq = IqSample::default();
    for _ in 0..200 {
        iq = trx.smooth_adc(ADC_MIDSCALE + 1024, ADC_MIDSCALE - 512);
    }
    assert!((iq.i - 0.5).abs() < 1e-4, "I {}", iq.i);
    assert!((iq.q + 0.25).abs() < 1e-4, "Q {}", iq.q);
}

// =============================================================================
// Transmit Path and Meter Tests
// =============================================================================

#[test]
fn test_transmit_matches_processor() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    trx.set_txrx(TxRxState::Tx);

    let mut dc = FixedDcBlocker::new();
    let mut reference = TxProcessor::new();
    for n in 0..500 {
        let raw = raw_mic(1500.0, n);
        let mic = dc.process(adc_to_signed(raw));
        assert_eq!(trx.transmit(raw, 0), reference.process(mic));
    }
}

#[test]
fn test_transmit_block() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    let mut single = Transceiver::new(&flags);
    trx.set_txrx(TxRxState::Tx);
    single.set_txrx(TxRxState::Tx);

    let mic: Vec<u16> = (0..200).map(|n| raw_mic(800.0, n)).collect();
    let mut out = vec![TxIq::default(); mic.len()];
    trx.transmit_block(&mic, &mut out, 10);
    for (raw, got) in mic.iter().zip(out.iter()) {
        assert_eq!(single.transmit(*raw, 10), *got);
    }
}

#[test]
fn test_mic_level_follows_transmit() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    trx.set_txrx(TxRxState::Tx);

    trx.transmit(ADC_MIDSCALE + 1000, 0);
    assert_eq!(trx.mic_level(), 1000);

    // Held, then one count off after the hang time
    trx.transmit(ADC_MIDSCALE, MIC_LEVEL_HANG_MS);
    assert_eq!(trx.mic_level(), 1000);
    trx.transmit(ADC_MIDSCALE, MIC_LEVEL_HANG_MS + 1);
    assert_eq!(trx.mic_level(), 999);
}

#[test]
fn test_smeter_tracks_receive_envelope() {
    let flags = ControlFlags::default();
    let mut trx = Transceiver::new(&flags);
    assert_eq!(trx.smeter(0), 0);

    for n in 0..2000 {
        trx.receive(tone(1000.0, 0.5, n));
    }
    // Cached until the interval has passed
    assert_eq!(trx.smeter(SMETER_UPDATE_MS), 0);
    assert_eq!(trx.smeter(SMETER_UPDATE_MS + 1), SMETER_MAX);
}
