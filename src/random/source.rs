//! Sources of uniform samples.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A stream of samples uniformly distributed in `[0, 1)`.
///
/// Random generators consume exactly one sample per decision and in a fixed
/// order, so a source replaying the same sequence reproduces the same graph.
///
/// Any closure returning `f64` is a source, as is any [`rand::Rng`] wrapped
/// in [`RngSource`].
///
/// # Example
///
/// ```
/// # use graphgen::random::{RngSource, UniformSource};
/// let mut constant = || 0.25;
/// assert_eq!(constant.next_f64(), 0.25);
///
/// let mut seeded = RngSource::seeded(42);
/// let sample = seeded.next_f64();
/// assert!((0.0..1.0).contains(&sample));
/// ```
pub trait UniformSource {
    /// Returns the next sample. It must lie in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<F> UniformSource for F
where
    F: FnMut() -> f64,
{
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Adapts a [`rand::Rng`] into a [`UniformSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// A [`StdRng`] source seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R> RngSource<R> {
    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// The source used when none is given: a [`StdRng`] seeded by the operating
/// system.
pub fn default_source() -> RngSource<StdRng> {
    RngSource(StdRng::from_os_rng())
}
