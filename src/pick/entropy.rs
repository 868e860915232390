//! Randomness source used by the pick engine and the reveal animator.

use rand::Rng;

/// A source of uniform floats in `[0, 1)`.
///
/// Implemented for every `rand::Rng`, so the app can pass a `StdRng` while
/// tests script exact values.
pub trait Entropy {
    /// Next uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`, computed as `floor(unit * len)`.
    ///
    /// `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let idx = (self.unit() * len as f64).floor() as usize;
        idx.min(len.saturating_sub(1))
    }

    /// Bernoulli trial that succeeds with `probability`.
    fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }
}

impl<R: Rng + ?Sized> Entropy for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct Scripted {
    values: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "scripted entropy needs at least one value");
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }

    /// How many values have been drawn so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
impl Entropy for Scripted {
    fn unit(&mut self) -> f64 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_index_floor() {
        let mut e = Scripted::new(&[0.0, 0.249, 0.25, 0.999]);
        assert_eq!(e.index(4), 0);
        assert_eq!(e.index(4), 0);
        assert_eq!(e.index(4), 1);
        assert_eq!(e.index(4), 3);
    }

    #[test]
    fn test_index_never_out_of_range() {
        // A misbehaving source returning 1.0 still lands on the last index
        let mut e = Scripted::new(&[1.0]);
        assert_eq!(e.index(3), 2);
    }

    #[test]
    fn test_chance() {
        let mut e = Scripted::new(&[0.1, 0.5, 0.9]);
        assert!(e.chance(0.5));
        assert!(!e.chance(0.5));
        assert!(!e.chance(0.5));
        assert_eq!(e.draws(), 3);
    }

    #[test]
    fn test_rng_unit_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.unit();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
