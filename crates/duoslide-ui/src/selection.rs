//! The two selected values and the thumb that owns each.

use crate::error::{SliderError, SliderResult, ensure_finite};
use crate::range::ValueRange;

/// One of the two slider thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Thumb {
    #[default]
    Low,
    High,
}

impl Thumb {
    /// The other thumb.
    #[inline]
    pub fn other(self) -> Thumb {
        match self {
            Thumb::Low => Thumb::High,
            Thumb::High => Thumb::Low,
        }
    }
}

/// Selected `low`/`high` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub low: f32,
    pub high: f32,
}

impl Selection {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// The full range: `low = min`, `high = max`.
    pub fn full(range: &ValueRange) -> Self {
        Self::new(range.min(), range.max())
    }

    /// Validate a requested pair against `range`.
    ///
    /// Out-of-range values are clamped; an inverted pair is rejected.
    pub fn validated(low: f32, high: f32, range: &ValueRange) -> SliderResult<Self> {
        let low = ensure_finite("low", low)?;
        let high = ensure_finite("high", high)?;
        if low > high {
            return Err(SliderError::InvertedSelection { low, high });
        }
        Ok(Self::new(range.clamp(low), range.clamp(high)))
    }

    #[inline]
    pub fn get(&self, thumb: Thumb) -> f32 {
        match thumb {
            Thumb::Low => self.low,
            Thumb::High => self.high,
        }
    }

    /// Copy with `thumb`'s value replaced; the other side is untouched.
    #[inline]
    pub fn with(mut self, thumb: Thumb, value: f32) -> Self {
        match thumb {
            Thumb::Low => self.low = value,
            Thumb::High => self.high = value,
        }
        self
    }

    /// Clamp both values into `range`, keeping `low <= high`.
    pub fn clamped(&self, range: &ValueRange) -> Self {
        let low = range.clamp(self.low);
        let high = range.clamp(self.high).max(low);
        Self::new(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> ValueRange {
        ValueRange::new(0.0, 100.0, 1.0).unwrap()
    }

    #[test]
    fn test_validated_clamps() {
        let sel = Selection::validated(-10.0, 150.0, &range()).unwrap();
        assert_eq!(sel, Selection::new(0.0, 100.0));
    }

    #[test]
    fn test_validated_rejects_inverted() {
        assert_eq!(
            Selection::validated(60.0, 40.0, &range()),
            Err(SliderError::InvertedSelection {
                low: 60.0,
                high: 40.0
            })
        );
    }

    #[test]
    fn test_with_substitutes_one_side() {
        let sel = Selection::new(20.0, 80.0);
        assert_eq!(sel.with(Thumb::Low, 35.0), Selection::new(35.0, 80.0));
        assert_eq!(sel.with(Thumb::High, 50.0), Selection::new(20.0, 50.0));
        assert_eq!(sel.get(Thumb::High), 80.0);
    }

    #[test]
    fn test_clamped_into_narrower_range() {
        let narrow = ValueRange::new(30.0, 50.0, 1.0).unwrap();
        assert_eq!(
            Selection::new(20.0, 80.0).clamped(&narrow),
            Selection::new(30.0, 50.0)
        );
    }

    #[test]
    fn test_thumb_other() {
        assert_eq!(Thumb::Low.other(), Thumb::High);
        assert_eq!(Thumb::High.other(), Thumb::Low);
        assert_eq!(Thumb::default(), Thumb::Low);
    }
}
