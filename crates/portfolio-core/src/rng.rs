/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, wasm-safe — no system entropy required.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random integer in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Generate a random integer in [lo, hi] inclusive.
    pub fn next_range(&mut self, lo: u32, hi: u32) -> u32 {
        lo + self.next_int(hi - lo + 1)
    }

    /// Generate a random float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits give a uniform float without precision loss.
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }

    /// Generate a random float in [-half_range, +half_range).
    pub fn jitter(&mut self, half_range: f32) -> f32 {
        (self.next_f32() - 0.5) * 2.0 * half_range
    }

    /// Derive a fresh generator from this one's stream.
    pub fn fork(&mut self) -> Rng {
        Rng::new(self.next_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_same_seed() {
        let mut a = Rng::new(7);
        let mut b = Rng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_int(1000), b.next_int(1000));
        }
    }

    #[test]
    fn zero_seed_is_valid() {
        let mut rng = Rng::new(0);
        // xorshift's zero state would be a fixed point; the constructor avoids it
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn next_range_is_inclusive() {
        let mut rng = Rng::new(42);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let v = rng.next_range(1, 5);
            assert!((1..=5).contains(&v));
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "all values in [1,5] should occur");
    }

    #[test]
    fn next_f32_in_unit_interval() {
        let mut rng = Rng::new(123);
        for _ in 0..1000 {
            let f = rng.next_f32();
            assert!((0.0..1.0).contains(&f), "f32 out of range: {}", f);
        }
    }

    #[test]
    fn jitter_bounded() {
        let mut rng = Rng::new(9);
        for _ in 0..1000 {
            let j = rng.jitter(10.0);
            assert!((-10.0..10.0).contains(&j), "jitter out of range: {}", j);
        }
    }
}
