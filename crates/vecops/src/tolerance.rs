//! Zero tolerance tiers.
use crate::Scalar;

/// How close to zero a component must be to count as zero.
///
/// Tolerances only decide whether a vector is treated as the zero vector
/// before length, normalization and signum computations. They never change
/// the arithmetic result for vectors outside the band.
///
/// A component `c` is within the band when `abs(c) <= epsilon`, so
/// [`Tolerance::EXACT`] accepts only `0.0` and `-0.0`, and NaN is never within
/// any band.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Only an exact zero counts.
    pub const EXACT: Self = Tolerance(0.0);
    /// `1e-4`
    pub const EM4: Self = Tolerance(1e-4);
    /// `1e-6`
    pub const EM6: Self = Tolerance(1e-6);
    /// `1e-8`
    pub const EM8: Self = Tolerance(1e-8);

    /// A caller-supplied tolerance. The sign of `epsilon` is ignored.
    pub const fn new(epsilon: f64) -> Self {
        Tolerance(epsilon.abs())
    }

    pub const fn epsilon(self) -> f64 {
        self.0
    }

    /// Returns whether `x` lies within the band.
    pub fn contains<S: Scalar>(self, x: S) -> bool {
        x.abs() <= S::from_f64(self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_accepts_only_zero() {
        assert!(Tolerance::EXACT.contains(0.0f32));
        assert!(Tolerance::EXACT.contains(-0.0f64));
        assert!(!Tolerance::EXACT.contains(f64::MIN_POSITIVE));
        assert!(!Tolerance::EXACT.contains(f64::NAN));
    }

    #[test]
    fn presets_are_ordered() {
        assert!(Tolerance::EXACT < Tolerance::EM8);
        assert!(Tolerance::EM8 < Tolerance::EM6);
        assert!(Tolerance::EM6 < Tolerance::EM4);
        assert_eq!(Tolerance::EXACT, Tolerance::default());
    }

    #[test]
    fn band_is_inclusive() {
        assert!(Tolerance::new(0.5).contains(0.5f64));
        assert!(Tolerance::new(-0.5).contains(-0.5f64));
        assert!(!Tolerance::new(0.5).contains(0.5000001f64));
        assert!(Tolerance::EM6.contains(-1e-7f32));
        assert!(!Tolerance::EM8.contains(-1e-7f32));
    }
}
