/// Anything smaller than this is flushed out of the recursive state. Keeps
/// sub-normal floats from recirculating in the feedback path, which stalls
/// the FPU on some hardware.
const DENORMAL_FLUSH: f32 = 1e-25;

/// Normalized peaking-EQ biquad coefficients (a0 divided out).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakingCoefficients {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
}

impl PeakingCoefficients {
    /// Unity-gain pass-through.
    pub fn identity() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
        }
    }

    /// Peaking (bell) filter design, bilinear transform. `gain` is a linear
    /// amplitude ratio; unity gain yields a pass-through at any frequency.
    pub fn peaking(frequency: f32, q: f32, gain: f32, sample_rate: f32) -> Self {
        // The bilinear transform blows up at Nyquist; keep the center
        // strictly below it instead of erroring on the audio thread.
        let frequency = frequency.clamp(20.0, 0.49 * sample_rate);
        let a = gain.sqrt();
        let omega = 2.0 * std::f32::consts::PI * frequency / sample_rate;
        let cosw = omega.cos();
        let sinw = omega.sin();
        let alpha = sinw / (2.0 * q);
        let b0 = 1.0 + alpha * a;
        let b1 = -2.0 * cosw;
        let b2 = 1.0 - alpha * a;
        let a0 = 1.0 + alpha / a;
        let a1 = -2.0 * cosw;
        let a2 = 1.0 - alpha / a;
        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        }
    }
}

/// One channel's filter stage: a biquad plus its two-deep delay line. Each
/// channel owns exactly one instance; sharing one across channels would leak
/// history between them.
#[derive(Debug, Clone, Copy)]
pub struct Biquad {
    coeffs: PeakingCoefficients,
    z1: f32,
    z2: f32,
}

impl Biquad {
    pub fn new() -> Self {
        Self {
            coeffs: PeakingCoefficients::identity(),
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Swap in a new coefficient set. The delay line is left untouched so the
    /// signal stays continuous; a discrete note change may click, which is
    /// accepted for a stepped control.
    pub fn set_coefficients(&mut self, coeffs: PeakingCoefficients) {
        self.coeffs = coeffs;
    }

    /// Zero the delay line. Called on stream (re)starts so energy from a
    /// previous configuration never bleeds into the next one.
    pub fn reset(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;
    }

    pub fn process_sample(&mut self, x: f32) -> f32 {
        // Direct Form II Transposed to keep numerical stability
        let y = self.coeffs.b0 * x + self.z1;
        self.z1 = self.coeffs.b1 * x - self.coeffs.a1 * y + self.z2;
        self.z2 = self.coeffs.b2 * x - self.coeffs.a2 * y;
        if self.z1.abs() < DENORMAL_FLUSH {
            self.z1 = 0.0;
        }
        if self.z2.abs() < DENORMAL_FLUSH {
            self.z2 = 0.0;
        }
        y
    }

    /// Filter a channel buffer in place. Samples go through in index order;
    /// the recurrence depends on it.
    pub fn process_block(&mut self, samples: &mut [f32]) {
        for sample in samples.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new()
    }
}
