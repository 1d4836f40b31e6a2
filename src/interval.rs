//! Interval arithmetic for ray parameter ranges.
//!
//! Provides closed intervals [min, max] used for ray t-values and bounds checking.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f64,
    /// Maximum value of the interval
    pub max: f64,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Calculate the size (width) of the interval
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to be within this interval's bounds
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }
}

/// Commonly used interval constants
impl Interval {
    /// Empty interval constant
    pub const EMPTY: Interval = Interval {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Universe interval constant
    pub const UNIVERSE: Interval = Interval {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Displayable color-channel intensity range, applied before 8-bit quantization
    pub const INTENSITY: Interval = Interval { min: 0.0, max: 0.999 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let i = Interval::new(0.0, 1.0);
        assert!(i.contains(0.0));
        assert!(i.contains(1.0));
        assert!(i.contains(0.5));
        assert!(!i.contains(-0.1));
        assert!(!i.contains(1.1));
    }

    #[test]
    fn test_surrounds_is_exclusive() {
        let i = Interval::new(0.0, 1.0);
        assert!(!i.surrounds(0.0));
        assert!(!i.surrounds(1.0));
        assert!(i.surrounds(0.5));
    }

    #[test]
    fn test_clamp() {
        let i = Interval::INTENSITY;
        assert_eq!(i.clamp(-2.0), 0.0);
        assert_eq!(i.clamp(0.25), 0.25);
        assert_eq!(i.clamp(1.7), 0.999);
    }

    #[test]
    fn test_empty_contains_nothing() {
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(Interval::UNIVERSE.contains(1e300));
        assert_eq!(Interval::new(1.0, 3.5).size(), 2.5);
    }
}
