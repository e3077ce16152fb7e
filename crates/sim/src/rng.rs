//! Normal Random Variate Generation.
//!
//! This module implements the polar (Marsaglia) method for sampling from a
//! normal distribution. Each accepted rejection-sampling iteration yields two
//! independent standard-normal scalars; the sampler returns the first and
//! buffers the second for the following call instead of discarding it, so
//! two consecutive calls consume exactly one iteration. The buffered scalar
//! is stored unscaled and takes the mean and deviation of the call that
//! consumes it.
//!
//! The sampler owns its uniform source. Trials that run in parallel must
//! each own an independent sampler; there is no process-global state.

use rand::Rng;

/// Polar-method normal variate sampler with a single-slot spare cache.
#[derive(Debug, Clone)]
pub struct NormalSampler<R: Rng> {
    rng: R,
    /// Second standard-normal scalar of the last accepted pair, if unconsumed.
    spare: Option<f64>,
}

impl<R: Rng> NormalSampler<R> {
    /// Creates a sampler drawing uniforms from `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng, spare: None }
    }

    /// Draws one sample from N(`mu`, `sigma`²).
    ///
    /// Alternates between performing one rejection-sampling iteration
    /// (returning the first scalar of the pair) and consuming the buffered
    /// second scalar from the previous call.
    pub fn sample(&mut self, mu: f64, sigma: f64) -> f64 {
        if let Some(spare) = self.spare.take() {
            return sigma.mul_add(spare, mu);
        }

        let (u1, u2, w) = loop {
            let u1: f64 = self.rng.gen_range(-1.0..1.0);
            let u2: f64 = self.rng.gen_range(-1.0..1.0);
            let w = u1 * u1 + u2 * u2;
            // Reject points outside the unit circle and the degenerate origin.
            if w > 0.0 && w < 1.0 {
                break (u1, u2, w);
            }
        };

        let mult = (-2.0 * w.ln() / w).sqrt();
        self.spare = Some(u2 * mult);
        sigma.mul_add(u1 * mult, mu)
    }
}
