/*

    Responsible for creating a struct that represents
    ranges from a to b and functionality to check if
    x is in range [a,b].

    An EMPTY interval (inf, -inf) that is expanded by a
    sequence of values ends up as the tightest [min, max]
    around them, which is how slice extents are accumulated.

    @author: Bartu
    @date: Sept 2025

*/

use crate::numeric::{Float, approx_zero};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub const EMPTY: Self = Self {
        min: Float::INFINITY,
        max: Float::NEG_INFINITY,
    };

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    /// Tightest interval containing every value, EMPTY if there are none
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Float>,
    {
        let mut interval = Self::EMPTY;
        for x in values {
            interval.expand(x);
        }
        interval
    }

    pub fn size(&self) -> Float {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        approx_zero(self.size())
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn clamp(&self, x: Float) -> Float {
        if x < self.min { self.min }
        else if x > self.max { self.max }
        else { x }
    }

    pub fn expand(&mut self, x: Float) {
        if x < self.min { self.min = x; }
        if x > self.max { self.max = x; }
    }

}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_interval_collapses_onto_first_value() {
        let mut interval = Interval::EMPTY;
        assert!(interval.size() < 0.0);

        interval.expand(3.0);
        assert!(interval.is_degenerate());
        assert_eq!(interval, Interval::new(3.0, 3.0));
    }

    #[test]
    fn from_values_keeps_extremes() {
        let interval = Interval::from_values([0.5, -2.0, 7.25, 1.0]);
        assert_eq!(interval.min, -2.0);
        assert_eq!(interval.max, 7.25);
        assert_eq!(interval.size(), 9.25);
    }

    #[test]
    fn from_no_values_is_empty() {
        assert_eq!(Interval::from_values(std::iter::empty()), Interval::EMPTY);
    }

    #[test]
    fn contains_is_closed_and_clamp_snaps_to_bounds() {
        let interval = Interval::new(0.0, 1.0);
        assert!(interval.contains(0.0));
        assert!(interval.contains(1.0));
        assert!(!interval.contains(1.5));

        assert_eq!(interval.clamp(2.0), 1.0);
        assert_eq!(interval.clamp(-2.0), 0.0);
        assert_eq!(interval.clamp(0.25), 0.25);
    }
}
