//! A reproducible source keyed by a string.
//!
//! [`Arc4Source`] runs the RC4 keystream (dropping the first 256 bytes) keyed
//! by the UTF-16 code units of a seed string, and assembles each sample from
//! at least seven keystream bytes into a float with 52 bits of precision.
//! Identical seeds always yield identical sequences, on every platform.

use super::UniformSource;

/// Keystream bytes consumed for the leading part of every sample.
const CHUNKS: usize = 6;
/// `256^CHUNKS`, the denominator of a sample before extension.
const START_DENOM: f64 = 281_474_976_710_656.0;
/// Samples are extended until their numerator reaches `2^52`.
const SIGNIFICANCE: u64 = 1 << 52;
/// Numerators are halved back below `2^53`.
const OVERFLOW: u64 = 1 << 53;

/// A [`UniformSource`] seeded from a string.
///
/// # Example
///
/// ```
/// # use graphgen::random::{Arc4Source, UniformSource};
/// let mut a = Arc4Source::new("seed");
/// let mut b = Arc4Source::new("seed");
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Clone)]
pub struct Arc4Source {
    state: [u8; 256],
    i: u8,
    j: u8,
}

impl Arc4Source {
    /// Creates a source keyed by `seed`.
    pub fn new(seed: &str) -> Self {
        let mut key = mix_key(seed);
        if key.is_empty() {
            key.push(0);
        }

        let mut state: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut j = 0u8;
        for i in 0..state.len() {
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(state[i]);
            state.swap(i, j as usize);
        }

        let mut source = Self { state, i: 0, j: 0 };
        for _ in 0..256 {
            source.next_byte();
        }
        source
    }

    #[inline]
    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.state[self.i as usize];
        self.j = self.j.wrapping_add(t);
        self.state[self.i as usize] = self.state[self.j as usize];
        self.state[self.j as usize] = t;
        self.state[self.state[self.i as usize].wrapping_add(t) as usize]
    }

    /// Reads `count` keystream bytes as a big-endian integer.
    #[inline]
    fn next_bytes(&mut self, count: usize) -> u64 {
        (0..count).fold(0, |acc, _| acc * 256 + u64::from(self.next_byte()))
    }
}

impl UniformSource for Arc4Source {
    fn next_f64(&mut self) -> f64 {
        let mut n = self.next_bytes(CHUNKS);
        let mut d = START_DENOM;
        let mut x = 0u64;
        while n < SIGNIFICANCE {
            n = (n + x) * 256;
            d *= 256.0;
            x = u64::from(self.next_byte());
        }
        // `n` is a multiple of 256 here, so halving stays exact.
        while n >= OVERFLOW {
            n /= 2;
            d /= 2.0;
            x >>= 1;
        }
        (n + x) as f64 / d
    }
}

impl std::fmt::Debug for Arc4Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arc4Source").finish_non_exhaustive()
    }
}

/// Folds the seed into a key of at most 256 bytes.
fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear = 0u32;
    for (j, unit) in seed.encode_utf16().enumerate() {
        let slot = j & 0xff;
        smear ^= key.get(slot).map_or(0, |&k| u32::from(k) * 19);
        let value = (smear + u32::from(unit)) as u8;
        match key.get_mut(slot) {
            Some(k) => *k = value,
            None => key.push(value),
        }
    }
    key
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rstest::rstest;

    #[test]
    fn known_sequence() {
        let mut source = Arc4Source::new("test");
        let samples = (0..5).map(|_| source.next_f64()).collect_vec();
        assert_eq!(
            samples,
            [
                0.8722025543160253,
                0.4023928518604753,
                0.9647289658507073,
                0.30479896375101545,
                0.3521069009157321,
            ]
        );
    }

    #[rstest]
    #[case("hello.", 0.9282578795792454)]
    #[case("hello world", 0.5407725273692652)]
    #[case("", 0.23144008215179881)]
    fn first_sample(#[case] seed: &str, #[case] expected: f64) {
        assert_eq!(Arc4Source::new(seed).next_f64(), expected);
    }

    #[test]
    fn short_keys_are_copied() {
        assert_eq!(mix_key("test"), b"test");
        assert!(mix_key("").is_empty());
    }

    #[test]
    fn long_keys_wrap() {
        let seed = "x".repeat(300);
        let key = mix_key(&seed);
        assert_eq!(key.len(), 256);
        // Slots past the first lap mix in the previous byte.
        assert_ne!(key[0], b'x');
        assert_eq!(key[100], b'x');
    }

    #[test]
    fn samples_in_unit_interval() {
        let mut source = Arc4Source::new("bounds");
        for _ in 0..10_000 {
            let sample = source.next_f64();
            assert!((0.0..1.0).contains(&sample));
        }
    }
}
