//! Normalization.
use crate::{
    Destination, Source, Tolerance,
    ops::{is_zero, len_sq, length::in_range, length::rescale},
    scalar,
};

/// Scales `v` to unit length.
///
/// A vector that is zero under `tolerance` has no direction and is emitted
/// unchanged. So the zero vector normalizes to itself and never to NaN, as
/// long as the tolerance admits it; under [`Tolerance::EXACT`] that means
/// only the exact zero vector.
///
/// Vectors whose squared length underflows or overflows are first divided by
/// their largest component, so the result is finite for every finite input.
pub fn nrm<V, D, const N: usize>(v: V, tolerance: Tolerance, dst: D) -> D::Output
where
    V: Source<N>,
    D: Destination<V::Scalar, N>,
{
    let c = v.components();
    if is_zero(c, tolerance) {
        log::trace!("normalizing {c:?}, zero under {tolerance:?}, left as is");
        return dst.emit(c);
    }
    let c = if in_range(len_sq(c)) {
        c
    } else {
        log::trace!("squared length of {c:?} is out of range, rescaling first");
        rescale(c).1
    };
    let s = scalar::inv_sqrt(len_sq(c));
    dst.emit(c.map(|x| x * s))
}
