// File: crates/pitch-core/src/buffer.rs
// Summary: Capacity-bounded, append-only sample history driven by refresh ticks.

use std::collections::VecDeque;

use crate::error::ChartError;
use crate::sample::{Sample, Series};

/// Rolling history of samples owned by exactly one chart widget.
/// Invariant: `len() <= capacity`; the oldest sample is evicted first.
#[derive(Clone, Debug)]
pub struct SeriesBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl SeriesBuffer {
    /// Create a buffer holding at most `capacity` samples.
    /// A zero capacity is a configuration error, not a fallback.
    pub fn with_capacity(capacity: usize) -> Result<Self, ChartError> {
        if capacity == 0 {
            return Err(ChartError::ZeroCapacity);
        }
        Ok(Self { samples: VecDeque::with_capacity(capacity), capacity })
    }

    /// Append one sample, evicting from the front once at capacity.
    /// Duplicate consecutive values are kept; flat periods are meaningful.
    pub fn append(&mut self, sample: Sample) {
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Ordered copy of the current contents for the normalizer.
    pub fn snapshot(&self) -> Series {
        Series::from_samples(self.samples.iter().cloned().collect())
    }

    /// Clear all contents (the charted entity changed).
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
