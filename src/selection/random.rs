//! Injectable randomness for [`AvatarSelection::randomize`](super::AvatarSelection::randomize).

use rand::Rng;

/// A source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Uniform pick from a non-empty list: index `floor(r * len)`.
///
/// Out-of-range draws are clamped so a misbehaving source can never index
/// past the end.
pub(crate) fn pick(rng: &mut dyn RandomSource, items: &'static [&'static str]) -> &'static str {
    let r = rng.next_unit();
    let r = if r.is_finite() { r.clamp(0.0, 1.0) } else { 0.0 };
    let idx = ((r * items.len() as f64).floor() as usize).min(items.len() - 1);
    items[idx]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Replays a fixed list of draws, cycling when exhausted.
    pub(crate) struct SequenceSource {
        draws: Vec<f64>,
        pos: usize,
    }

    impl SequenceSource {
        pub(crate) fn new(draws: Vec<f64>) -> Self {
            Self { draws, pos: 0 }
        }
    }

    impl RandomSource for SequenceSource {
        fn next_unit(&mut self) -> f64 {
            let r = self.draws[self.pos % self.draws.len()];
            self.pos += 1;
            r
        }
    }

    const ITEMS: &[&str] = &["a", "b", "c", "d"];

    #[test]
    fn test_pick_maps_unit_interval_to_index() {
        let mut src = SequenceSource::new(vec![0.0, 0.25, 0.5, 0.74, 0.99]);
        let picks: Vec<_> = (0..5).map(|_| pick(&mut src, ITEMS)).collect();
        assert_eq!(picks, vec!["a", "b", "c", "c", "d"]);
    }

    #[test]
    fn test_pick_clamps_bad_draws() {
        let mut src = SequenceSource::new(vec![1.0, -0.5, f64::NAN, 7.0]);
        assert_eq!(pick(&mut src, ITEMS), "d");
        assert_eq!(pick(&mut src, ITEMS), "a");
        assert_eq!(pick(&mut src, ITEMS), "a");
        assert_eq!(pick(&mut src, ITEMS), "d");
    }

    #[test]
    fn test_rng_source_stays_in_range() {
        use rand::SeedableRng;
        let mut src = RngSource(rand::rngs::StdRng::seed_from_u64(42));
        for _ in 0..1_000 {
            let r = src.next_unit();
            assert!((0.0..1.0).contains(&r));
        }
    }
}
