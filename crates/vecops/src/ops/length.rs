//! Length, distance and the zero test.
use crate::{Scalar, Source, Tolerance, array, ops::sub, ops::dot, scalar};

/// Returns whether every component of `v` lies within `tolerance` of zero.
///
/// This is a per-component magnitude test. No length is computed.
pub fn is_zero<V: Source<N>, const N: usize>(v: V, tolerance: Tolerance) -> bool {
    v.components().into_iter().all(|c| tolerance.contains(c))
}

/// The squared length, `dot(v, v)`.
pub fn len_sq<V: Source<N>, const N: usize>(v: V) -> V::Scalar {
    let c = v.components();
    dot(c, c)
}

/// The Euclidean length, or exactly zero when `v` is zero under `tolerance`.
pub fn len<V: Source<N>, const N: usize>(v: V, tolerance: Tolerance) -> V::Scalar {
    let c = v.components();
    if is_zero(c, tolerance) {
        return V::Scalar::ZERO;
    }
    let sq = len_sq(c);
    if in_range(sq) {
        scalar::sqrt(sq)
    } else {
        let (largest, unit) = rescale(c);
        largest * scalar::sqrt(len_sq(unit))
    }
}

/// Whether a squared length can be used as is: it neither underflowed into
/// the subnormal range or to zero, nor overflowed.
pub(crate) fn in_range<S: Scalar>(sq: S) -> bool {
    sq.is_normal()
}

/// Splits `c` into its largest component magnitude and `c` divided by it.
///
/// The divided vector has a largest magnitude of 1, so its squared length
/// lies in `[1, N]` whatever the magnitude of `c`. `c` must not be zero.
pub(crate) fn rescale<S: Scalar, const N: usize>(c: [S; N]) -> (S, [S; N]) {
    let largest = c
        .into_iter()
        .map(scalar::abs)
        .fold(S::ZERO, |m, x| if x > m { x } else { m });
    (largest, c.map(|x| x / largest))
}

/// The reciprocal length, `1 / len(v)`.
///
/// There is no zero guard: the zero vector gives `+inf`. Callers asking for
/// a reciprocal length are expected to have excluded it already.
pub fn len_rc<V: Source<N>, const N: usize>(v: V) -> V::Scalar {
    scalar::inv_sqrt(len_sq(v))
}

/// The squared distance between points `a` and `b`.
pub fn dist_sq<A, B, const N: usize>(a: A, b: B) -> A::Scalar
where
    A: Source<N>,
    B: Source<N, Scalar = A::Scalar>,
{
    len_sq(sub(a, b, array::<A::Scalar, N>()))
}

/// The distance between points `a` and `b`, zero when `a - b` is zero under
/// `tolerance`.
pub fn dist<A, B, const N: usize>(a: A, b: B, tolerance: Tolerance) -> A::Scalar
where
    A: Source<N>,
    B: Source<N, Scalar = A::Scalar>,
{
    len(sub(a, b, array::<A::Scalar, N>()), tolerance)
}
