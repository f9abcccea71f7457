// File: crates/pitch-core/src/classify.rs
// Summary: Delivery, strike-rate, and heat-intensity classification rules.

/// Color-coding class for a single delivery.
/// A dismissal classifies as `Wicket` independent of the runs scored and
/// takes visual precedence over the runs-based class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryClass {
    Dot,
    Single,
    Double,
    /// Covers 3, 4, 5 and 6; rendered with the boundary color.
    Boundary,
    Wicket,
}

impl DeliveryClass {
    pub fn of(runs: u32, wicket: bool) -> Self {
        if wicket {
            return Self::Wicket;
        }
        match runs {
            0 => Self::Dot,
            1 => Self::Single,
            2 => Self::Double,
            _ => Self::Boundary,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Single => "single",
            Self::Double => "double",
            Self::Boundary => "boundary",
            Self::Wicket => "wicket",
        }
    }
}

/// Strike-rate band: `> 120` high, `90..=120` normal, `< 90` low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrikeRateBand {
    High,
    Normal,
    Low,
}

impl StrikeRateBand {
    pub fn of(strike_rate: f64) -> Self {
        if strike_rate > 120.0 {
            Self::High
        } else if strike_rate >= 90.0 {
            Self::Normal
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

/// Five-bucket heat intensity scale, hottest to coolest.
/// Boundaries are strict (`>`, not `>=`): an exact 80 falls in `Hot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeatBand {
    Searing,
    Hot,
    Warm,
    Mild,
    Cool,
}

impl HeatBand {
    pub fn of(value: f64) -> Self {
        if value > 80.0 {
            Self::Searing
        } else if value > 60.0 {
            Self::Hot
        } else if value > 40.0 {
            Self::Warm
        } else if value > 20.0 {
            Self::Mild
        } else {
            Self::Cool
        }
    }

    /// Index into a five-color scale, 0 = hottest.
    pub fn index(&self) -> usize {
        match self {
            Self::Searing => 0,
            Self::Hot => 1,
            Self::Warm => 2,
            Self::Mild => 3,
            Self::Cool => 4,
        }
    }
}
