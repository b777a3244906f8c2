//! Projection, reflection and planar rotation.
use crate::{Destination, Scalar, Source, ops::dot, scalar};

/// Projects `v` onto the direction of `target`: `dot(v, target) * target`.
///
/// `target` is used as given. The result is the true projection only when
/// `target` is a unit vector.
pub fn project<V, T, D, const N: usize>(v: V, target: T, dst: D) -> D::Output
where
    V: Source<N>,
    T: Source<N, Scalar = V::Scalar>,
    D: Destination<V::Scalar, N>,
{
    let t = target.components();
    let d = dot(v, t);
    dst.emit(t.map(|x| d * x))
}

/// Reflects `v` off the surface with normal `normal`:
/// `v - 2 dot(v, normal) normal`.
///
/// `normal` is expected to be unit length and is not normalized here.
pub fn reflect<V, M, D, const N: usize>(v: V, normal: M, dst: D) -> D::Output
where
    V: Source<N>,
    M: Source<N, Scalar = V::Scalar>,
    D: Destination<V::Scalar, N>,
{
    let c = v.components();
    let n = normal.components();
    let d = V::Scalar::TWO * dot(c, n);
    dst.emit(std::array::from_fn(|i| c[i] - d * n[i]))
}

/// Rotates the 2D vector `v` counterclockwise by `angle` radians.
pub fn rot_rad<V, D>(angle: V::Scalar, v: V, dst: D) -> D::Output
where
    V: Source<2>,
    D: Destination<V::Scalar, 2>,
{
    let [x, y] = v.components();
    let (s, c) = angle.sin_cos();
    dst.emit([x * c - y * s, x * s + y * c])
}

/// Rotates the 2D vector `v` counterclockwise by `angle` degrees.
pub fn rot_deg<V, D>(angle: V::Scalar, v: V, dst: D) -> D::Output
where
    V: Source<2>,
    D: Destination<V::Scalar, 2>,
{
    rot_rad(scalar::to_radians(angle), v, dst)
}
