//! Component-wise blends between two vectors.
//!
//! Each operation applies the scalar blend of the same name from
//! [`scalar`](crate::scalar) to every component pair, with one shared
//! `alpha`.
use crate::{Destination, Source, ops::zip, scalar};

macro_rules! blend {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub fn $name<A, B, D, const N: usize>(alpha: A::Scalar, a: A, b: B, dst: D) -> D::Output
        where
            A: Source<N>,
            B: Source<N, Scalar = A::Scalar>,
            D: Destination<A::Scalar, N>,
        {
            zip(a, b, |x, y| scalar::$name(alpha, x, y), dst)
        }
    };
}

blend!(
    /// `a + alpha * (b - a)`, exact at `alpha = 0` and `alpha = 1`.
    lerp
);
blend!(
    /// [`lerp`] with `alpha` eased by `alpha² (3 - 2 alpha)`.
    smoothstep
);
blend!(
    /// [`lerp`] with `alpha` eased by the quintic
    /// `alpha³ (alpha (6 alpha - 15) + 10)`.
    smootherstep
);
blend!(
    /// [`lerp`] with `alpha` truncated toward zero.
    int_lerp
);

/// `a` while `alpha < midpoint`, otherwise `b`.
pub fn step<A, B, D, const N: usize>(
    alpha: A::Scalar,
    midpoint: A::Scalar,
    a: A,
    b: B,
    dst: D,
) -> D::Output
where
    A: Source<N>,
    B: Source<N, Scalar = A::Scalar>,
    D: Destination<A::Scalar, N>,
{
    zip(a, b, |x, y| scalar::step(alpha, midpoint, x, y), dst)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Construct, array};

    #[test]
    fn sanity_lerp() {
        let a = [0.1f64, -3.0, 7.0];
        let b = [0.7f64, 2.0, -1.0];
        assert_eq!(a, lerp(0.0, a, b, array()));
        assert_eq!(b, lerp(1.0, a, b, array()));
        assert_eq!([1.0, 2.0], lerp(0.5, [0.0f64, 4.0], [2.0, 0.0], array()));
    }

    #[test]
    fn sanity_step() {
        let a = [0.0f64, 0.0];
        let b = [1.0f64, 2.0];
        assert_eq!(a, step(0.49, 0.5, a, b, array()));
        assert_eq!(b, step(0.5, 0.5, a, b, array()));
    }

    #[test]
    fn smooth_blends_hit_the_ends_and_middle() {
        let a = [0.0f64, 10.0];
        let b = [4.0f64, 20.0];
        type Blend = fn(f64, [f64; 2], [f64; 2], Construct<[f64; 2]>) -> [f64; 2];
        let blends: [Blend; 2] = [smoothstep, smootherstep];
        for blend in blends {
            assert_eq!(a, blend(0.0, a, b, array()));
            assert_eq!(b, blend(1.0, a, b, array()));
            assert_eq!([2.0, 15.0], blend(0.5, a, b, array()));
        }
        let s: [f64; 2] = smoothstep(0.25, a, b, array());
        assert_eq!([0.625, 11.5625], s);
    }

    #[test]
    fn sanity_int_lerp() {
        let a = [0.0f64, 1.0];
        let b = [2.0f64, 3.0];
        assert_eq!(a, int_lerp(0.99, a, b, array()));
        assert_eq!(b, int_lerp(1.5, a, b, array()));
        assert_eq!([4.0, 5.0], int_lerp(2.0, a, b, array()));
    }
}
