//! The scalar formula layer.
//!
//! Pure functions over bare floats. Nothing here knows about vectors; the
//! vector operations in [`crate::ops`] apply these per component.
//!
//! | Function | Formula |
//! | --- | --- |
//! | `sqrt(x)` | √x |
//! | `inv_sqrt(x)` | 1 / √x |
//! | `rec(x)` | 1 / x |
//! | `lerp(alpha, a, b)` | a + alpha * (b - a) |
//! | `step(alpha, midpoint, a, b)` | a if alpha < midpoint, else b |
//! | `smoothstep(alpha, a, b)` | lerp(alpha² (3 - 2 alpha), a, b) |
//! | `smootherstep(alpha, a, b)` | lerp(alpha³ (alpha (6 alpha - 15) + 10), a, b) |
//! | `int_lerp(alpha, a, b)` | lerp(trunc(alpha), a, b) |
//! | `fma(a, b, c)` | a * b + c, single rounding |
//! | `signum(x)` | 1, -1 or 0 |
//! | `signum_tol(x, tol)` | 0 if abs(x) <= tol, else signum(x) |
//!
//! Division by zero and square roots of negatives follow IEEE semantics.
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Tolerance;

/// A floating point component type.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    /// Converts from `f64`, rounding to nearest when narrowing.
    fn from_f64(value: f64) -> Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn trunc(self) -> Self;
    /// `self * a + b` with a single rounding.
    fn mul_add(self, a: Self, b: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn to_radians(self) -> Self;
    fn is_normal(self) -> bool;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            fn sqrt(self) -> Self {
                self.sqrt()
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn trunc(self) -> Self {
                self.trunc()
            }

            fn mul_add(self, a: Self, b: Self) -> Self {
                self.mul_add(a, b)
            }

            fn sin_cos(self) -> (Self, Self) {
                self.sin_cos()
            }

            fn to_radians(self) -> Self {
                self.to_radians()
            }

            fn is_normal(self) -> bool {
                self.is_normal()
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

/// Returns the square root of x.
pub fn sqrt<S: Scalar>(x: S) -> S {
    x.sqrt()
}

/// Returns the reciprocal square root of x.
///
/// Always computed as `1 / sqrt(x)` so that it agrees with [`sqrt`] to the
/// last bit. `inv_sqrt(0)` is `+inf`.
pub fn inv_sqrt<S: Scalar>(x: S) -> S {
    S::ONE / x.sqrt()
}

/// Returns 1 / x. `rec(0)` is `+inf`.
pub fn rec<S: Scalar>(x: S) -> S {
    S::ONE / x
}

pub fn abs<S: Scalar>(x: S) -> S {
    x.abs()
}

/// Rounds toward zero.
pub fn trunc<S: Scalar>(x: S) -> S {
    x.trunc()
}

/// Returns 1 when x > 0, -1 when x < 0 and 0 otherwise (including NaN).
pub fn signum<S: Scalar>(x: S) -> S {
    if x > S::ZERO {
        S::ONE
    } else if x < S::ZERO {
        -S::ONE
    } else {
        S::ZERO
    }
}

/// Like [`signum`], but anything within `tolerance` of zero counts as zero.
pub fn signum_tol<S: Scalar>(x: S, tolerance: Tolerance) -> S {
    if tolerance.contains(x) {
        S::ZERO
    } else {
        signum(x)
    }
}

/// Linear blend: `a + alpha * (b - a)`.
///
/// Exact at both ends for finite inputs: `lerp(0, a, b) == a` and
/// `lerp(1, a, b) == b`.
pub fn lerp<S: Scalar>(alpha: S, a: S, b: S) -> S {
    if alpha == S::ZERO {
        // b - a may overflow, and inf * 0 is NaN.
        a
    } else if alpha == S::ONE {
        // a + (b - a) is not always exactly b in floating point.
        b
    } else {
        a + alpha * (b - a)
    }
}

/// Returns `a` while `alpha < midpoint`, `b` from the midpoint on.
pub fn step<S: Scalar>(alpha: S, midpoint: S, a: S, b: S) -> S {
    if alpha < midpoint { a } else { b }
}

/// Cubic Hermite blend, `alpha² (3 - 2 alpha)`, then [`lerp`].
pub fn smoothstep<S: Scalar>(alpha: S, a: S, b: S) -> S {
    let three = S::ONE + S::TWO;
    let t = alpha * alpha * (three - S::TWO * alpha);
    lerp(t, a, b)
}

/// Quintic blend, `alpha³ (alpha (6 alpha - 15) + 10)`, then [`lerp`].
pub fn smootherstep<S: Scalar>(alpha: S, a: S, b: S) -> S {
    let six = S::from_f64(6.0);
    let fifteen = S::from_f64(15.0);
    let ten = S::from_f64(10.0);
    let t = alpha * alpha * alpha * (alpha * (alpha * six - fifteen) + ten);
    lerp(t, a, b)
}

/// Stepped interpolation: `alpha` is truncated toward zero before blending,
/// so the result only moves in whole multiples of `b - a`.
pub fn int_lerp<S: Scalar>(alpha: S, a: S, b: S) -> S {
    lerp(alpha.trunc(), a, b)
}

/// Fused multiply-add: `a * b + c`.
pub fn fma<S: Scalar>(a: S, b: S, c: S) -> S {
    a.mul_add(b, c)
}

/// Restricts x to `[low, high]`.
pub fn clamp<S: Scalar>(x: S, low: S, high: S) -> S {
    if x < low {
        low
    } else if x > high {
        high
    } else {
        x
    }
}

pub fn to_radians<S: Scalar>(degrees: S) -> S {
    degrees.to_radians()
}
