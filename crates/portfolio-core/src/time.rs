/// Fixed-period accumulator.
/// Converts variable frame deltas into a whole number of fixed steps, so the
/// same wall-clock feed can drive both the 60 Hz physics step and the coarse
/// one-second landing poll.
pub struct Cadence {
    period: f32,
    accumulator: f32,
}

impl Cadence {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            accumulator: 0.0,
        }
    }

    /// Add elapsed time. Returns how many whole periods are now due.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed;
        // Cap the backlog (max 10 steps) so a stalled tab cannot trigger a
        // spiral of catch-up work.
        self.accumulator = self.accumulator.min(self.period * 10.0);
        let steps = (self.accumulator / self.period) as u32;
        self.accumulator -= steps as f32 * self.period;
        steps
    }

    /// The fixed period length.
    pub fn period(&self) -> f32 {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_period_exact() {
        let mut c = Cadence::new(1.0 / 60.0);
        assert_eq!(c.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut c = Cadence::new(1.0 / 60.0);
        assert_eq!(c.advance(0.008), 0);
        assert_eq!(c.advance(0.010), 1);
    }

    #[test]
    fn backlog_capped_at_ten() {
        let mut c = Cadence::new(1.0 / 60.0);
        assert_eq!(c.advance(5.0), 10);
    }

    #[test]
    fn one_second_poll_cadence() {
        let mut c = Cadence::new(1.0);
        let mut fired = 0;
        // 2.5 seconds worth of 60fps frames
        for _ in 0..150 {
            fired += c.advance(1.0 / 60.0);
        }
        assert_eq!(fired, 2);
    }
}
