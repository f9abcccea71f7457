// File: crates/pitch-feed/src/mock.rs
// Summary: Seeded mock delivery generator standing in for the live analytics feed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pitch_core::adapters::ZoneSample;
use pitch_core::error::FetchError;
use pitch_core::sample::Sample;
use pitch_core::widget::DataSource;

/// Deterministic stand-in for the analytics backend: same seed, same match.
pub struct MockFeed {
    rng: StdRng,
    balls_per_tick: usize,
}

impl MockFeed {
    pub fn seeded(seed: u64, balls_per_tick: usize) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), balls_per_tick: balls_per_tick.max(1) }
    }

    fn roll_delivery(&mut self) -> Sample {
        // Rough T20 distribution: mostly dots and singles, occasional wicket.
        let roll = self.rng.gen_range(0..100u32);
        let (runs, wicket) = match roll {
            0..=34 => (0.0, false),
            35..=64 => (1.0, false),
            65..=74 => (2.0, false),
            75..=87 => (4.0, false),
            88..=94 => (6.0, false),
            _ => (0.0, true),
        };
        let mut sample = Sample::new(runs);
        if wicket {
            sample = sample.marked();
        }
        sample
    }

    /// Zone tuples for the heatmap demo; intensities on the 0..100 band scale.
    pub fn roll_zones(&mut self, zone_count: usize) -> Vec<ZoneSample> {
        (0..zone_count)
            .map(|i| ZoneSample {
                x: (i % 4) as f64,
                y: (i / 4) as f64,
                intensity: self.rng.gen_range(0.0..100.0),
                count: self.rng.gen_range(0..20),
            })
            .collect()
    }
}

impl DataSource for MockFeed {
    fn fetch(&mut self) -> Result<Vec<Sample>, FetchError> {
        Ok((0..self.balls_per_tick).map(|_| self.roll_delivery()).collect())
    }
}
