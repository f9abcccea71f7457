// File: crates/pitch-core/src/sample.rs
// Summary: Sample and Series model shared by the buffer, normalizer, and adapters.

/// One observed value in a series. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub label: Option<String>,
    pub category: Option<String>,
    /// Marked observations (wickets) take visual precedence in adapters.
    pub marked: bool,
}

impl Sample {
    pub fn new(value: f64) -> Self {
        Self { value, label: None, category: None, marked: false }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn marked(mut self) -> Self {
        self.marked = true;
        self
    }
}

/// 2D observation for scatter and heatmap inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSample {
    pub x: f64,
    pub y: f64,
}

impl PointSample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered sequence of samples; insertion order is delivery/time order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn from_values(values: &[f64]) -> Self {
        Self { samples: values.iter().map(|&v| Sample::new(v)).collect() }
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}
