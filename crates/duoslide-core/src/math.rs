//! Math types re-exported from [`glam`].
//!
//! Pixel offsets along the track are plain `f32`; two-dimensional offsets (the value label sits
//! above the track) use [`Vec2`].
//!
//! ```
//! use duoslide_core::math::Vec2;
//!
//! let label = Vec2::new(42.0, -18.0);
//! assert_eq!(label.x, 42.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};

/// Approximate equality for pixel offsets.
///
/// Offsets are derived from divisions, so exact comparison would flag sub-pixel noise as change.
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.00001));
        assert!(!approx_eq(1.0, 1.01));
    }
}
