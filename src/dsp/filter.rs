//! Stream Filter Primitives
//!
//! One-sample-in, one-sample-out filters with fixed coefficients and owned
//! history. Each instance carries its own state; nothing here allocates,
//! branches on buffer bounds or can fail.

use fixed::types::I48F16;

use crate::config::{ALLPASS_STAGES, DC_BLOCK_K, FIR_HISTORY_LEN, MOVING_AVERAGE_LEN, MOVING_AVERAGE_STAGES};

const FIR_HISTORY_MASK: usize = FIR_HISTORY_LEN - 1;

/// DC blocking filter (single-pole IIR highpass)
#[derive(Clone, Copy, Debug)]
pub struct DcBlocker {
    /// Running state
    acc: f32,
    /// Previous input
    x_prev: f32,
    /// Previous output
    y_prev: f32,
    /// Feedback coefficient
    k: f32,
}

impl DcBlocker {
    /// Create a new DC blocker with feedback `k`
    #[must_use]
    pub const fn new(k: f32) -> Self {
        Self {
            acc: 0.0,
            x_prev: 0.0,
            y_prev: 0.0,
            k,
        }
    }

    /// Process a single sample
    pub fn process(&mut self, input: f32) -> f32 {
        self.acc -= self.x_prev;
        self.x_prev = input;
        self.acc += input - self.k * self.y_prev;
        self.y_prev = self.acc;
        self.y_prev
    }
}

impl Default for DcBlocker {
    fn default() -> Self {
        Self::new(DC_BLOCK_K)
    }
}

/// Integer DC blocker for raw signed samples
///
/// Same topology as [`DcBlocker`] evaluated in Q16 fixed point with a
/// feedback of 1/256. The output is the floor of the accumulator,
/// saturated to `i16`.
#[derive(Clone, Copy, Debug)]
pub struct FixedDcBlocker {
    acc: I48F16,
    x_prev: I48F16,
    y_prev: I48F16,
}

impl FixedDcBlocker {
    /// Feedback coefficient, 2^-8
    const K: I48F16 = I48F16::from_bits(1 << 8);

    /// Create a new integer DC blocker
    #[must_use]
    pub const fn new() -> Self {
        Self {
            acc: I48F16::ZERO,
            x_prev: I48F16::ZERO,
            y_prev: I48F16::ZERO,
        }
    }

    /// Process a single sample
    pub fn process(&mut self, input: i16) -> i16 {
        let x = I48F16::from_num(input);
        self.acc -= self.x_prev;
        self.x_prev = x;
        self.acc += x - self.y_prev * Self::K;
        let y = self.acc.floor().saturating_to_num::<i16>();
        self.y_prev = I48F16::from_num(y);
        y
    }
}

impl Default for FixedDcBlocker {
    fn default() -> Self {
        Self::new()
    }
}

/// First-order all-pass section state
#[derive(Clone, Copy, Debug, Default)]
struct AllPassStage {
    x_prev: f32,
    y_prev: f32,
}

/// Three cascaded first-order all-pass sections
///
/// Unity magnitude at every frequency; two cascades with different
/// coefficient triples hold a near-constant phase offset across the
/// voice band, which is what the phasing method relies on.
#[derive(Clone, Copy, Debug)]
pub struct AllPassCascade {
    k: [f32; ALLPASS_STAGES],
    stages: [AllPassStage; ALLPASS_STAGES],
}

impl AllPassCascade {
    /// Create a cascade from its section coefficients
    #[must_use]
    pub const fn new(k: [f32; ALLPASS_STAGES]) -> Self {
        Self {
            k,
            stages: [AllPassStage {
                x_prev: 0.0,
                y_prev: 0.0,
            }; ALLPASS_STAGES],
        }
    }

    /// Section coefficients
    #[must_use]
    pub const fn coefficients(&self) -> [f32; ALLPASS_STAGES] {
        self.k
    }

    /// Process a single sample
    pub fn process(&mut self, input: f32) -> f32 {
        let mut x = input;
        for (stage, &k) in self.stages.iter_mut().zip(self.k.iter()) {
            let y = k * (x + stage.y_prev) - stage.x_prev;
            stage.x_prev = x;
            stage.y_prev = y;
            x = y;
        }
        x
    }
}

/// FIR filter over a 256-entry circular history
///
/// The coefficient table is borrowed; the history is owned, so two
/// instances built from the same table never share state. Taps beyond
/// the history capacity are ignored.
#[derive(Clone)]
pub struct FirFilter {
    /// Filter coefficients
    taps: &'static [f32],
    /// Delay line (circular buffer)
    history: [f32; FIR_HISTORY_LEN],
    /// Current write position
    pos: usize,
}

impl FirFilter {
    /// Create a new FIR filter with given coefficients
    #[must_use]
    pub const fn new(taps: &'static [f32]) -> Self {
        Self {
            taps,
            history: [0.0; FIR_HISTORY_LEN],
            pos: 0,
        }
    }

    /// Coefficient table
    #[must_use]
    pub const fn taps(&self) -> &'static [f32] {
        self.taps
    }

    /// Number of taps that take part in the convolution
    #[must_use]
    pub fn len(&self) -> usize {
        self.taps.len().min(FIR_HISTORY_LEN)
    }

    /// True for an empty coefficient table
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// Process a single sample
    pub fn process(&mut self, input: f32) -> f32 {
        self.history[self.pos] = input;

        // Newest sample first, walking back through the ring
        let mut acc = 0.0;
        let mut idx = self.pos;
        for &tap in self.taps.iter().take(FIR_HISTORY_LEN) {
            acc += tap * self.history[idx];
            idx = idx.wrapping_sub(1) & FIR_HISTORY_MASK;
        }

        self.pos = (self.pos + 1) & FIR_HISTORY_MASK;
        acc
    }
}

impl core::fmt::Debug for FirFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FirFilter")
            .field("taps", &self.taps.len())
            .field("pos", &self.pos)
            .finish_non_exhaustive()
    }
}

/// Box-car moving average over `N` samples
///
/// `N` must be a power of two so the ring index wraps by masking.
#[derive(Clone)]
pub struct MovingAverage<const N: usize> {
    buffer: [f32; N],
    sum: f32,
    pos: usize,
}

impl<const N: usize> MovingAverage<N> {
    const LENGTH_IS_POWER_OF_TWO: () = assert!(N.is_power_of_two(), "length must be a power of two");
    const SCALE: f32 = 1.0 / N as f32;

    /// Create a new moving average filter
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::LENGTH_IS_POWER_OF_TWO;
        Self {
            buffer: [0.0; N],
            sum: 0.0,
            pos: 0,
        }
    }

    /// Process a single sample
    pub fn process(&mut self, input: f32) -> f32 {
        self.sum = self.sum - self.buffer[self.pos] + input;
        self.buffer[self.pos] = input;
        self.pos = (self.pos + 1) & (N - 1);
        self.sum * Self::SCALE
    }
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Four cascaded 32-sample moving averages (sinc^4 response)
///
/// Notches the input rate / 32 and its harmonics; runs on the raw ADC
/// stream ahead of the phasing network.
#[derive(Clone)]
pub struct MovingAverage4 {
    stages: [MovingAverage<MOVING_AVERAGE_LEN>; MOVING_AVERAGE_STAGES],
}

impl MovingAverage4 {
    /// Create a new smoother
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stages: [
                MovingAverage::new(),
                MovingAverage::new(),
                MovingAverage::new(),
                MovingAverage::new(),
            ],
        }
    }

    /// Process a single unit-scale sample
    pub fn process(&mut self, input: f32) -> f32 {
        self.stages
            .iter_mut()
            .fold(input, |sample, stage| stage.process(sample))
    }
}

impl Default for MovingAverage4 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn dc_blocker_removes_offset() {
        let mut dc = DcBlocker::default();
        let mut out = 1.0;
        for _ in 0..2000 {
            out = dc.process(0.5);
        }
        assert!(out.abs() < 1e-3, "residual DC {out}");
    }

    #[test]
    fn dc_blocker_first_sample_passes() {
        let mut dc = DcBlocker::default();
        assert_eq!(dc.process(0.25), 0.25);
    }

    #[test]
    fn fixed_dc_blocker_centres_biased_input() {
        let mut dc = FixedDcBlocker::new();
        let mut out = i16::MAX;
        for _ in 0..20_000 {
            out = dc.process(2048);
        }
        assert!(out.abs() <= 1, "residual DC {out}");
    }

    #[test]
    fn fixed_dc_blocker_saturates() {
        let mut dc = FixedDcBlocker::new();
        dc.process(i16::MIN);
        let out = dc.process(i16::MAX);
        assert_eq!(out, i16::MAX);
    }

    #[test]
    fn allpass_first_output() {
        let mut ap = AllPassCascade::new([0.5, 0.5, 0.5]);
        // Each stage scales a fresh input by k
        assert!((ap.process(1.0) - 0.125).abs() < 1e-6);
    }

    #[test]
    fn fir_ignores_excess_taps() {
        static LONG: [f32; 300] = [1.0; 300];
        let fir = FirFilter::new(&LONG);
        assert_eq!(fir.len(), FIR_HISTORY_LEN);
    }

    #[test]
    fn moving_average_settles() {
        let mut ma = MovingAverage::<8>::new();
        let mut out = 0.0;
        for _ in 0..8 {
            out = ma.process(1.0);
        }
        assert!((out - 1.0).abs() < 1e-6);
    }

    #[test]
    fn smoother_passes_dc_after_fill() {
        let mut ma = MovingAverage4::new();
        let mut out = 0.0;
        for _ in 0..(MOVING_AVERAGE_LEN * MOVING_AVERAGE_STAGES) {
            out = ma.process(0.5);
        }
        assert!((out - 0.5).abs() < 1e-5, "got {out}");
    }

    #[test]
    fn smoother_notches_rate_over_32() {
        let mut ma = MovingAverage4::new();
        let mut peak = 0.0f32;
        for n in 0..2048 {
            let phase = 2.0 * core::f32::consts::PI * n as f32 / MOVING_AVERAGE_LEN as f32;
            let out = ma.process(phase.sin());
            if n > 256 {
                peak = peak.max(out.abs());
            }
        }
        assert!(peak < 1e-3, "notch leak {peak}");
    }
}
