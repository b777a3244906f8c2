//! Dot and cross products.
use crate::{Destination, Scalar, Source, Then};

/// The inner product of `a` and `b`.
pub fn dot<A, B, const N: usize>(a: A, b: B) -> A::Scalar
where
    A: Source<N>,
    B: Source<N, Scalar = A::Scalar>,
{
    a.components()
        .into_iter()
        .zip(b.components())
        .fold(A::Scalar::ZERO, |acc, (x, y)| acc + x * y)
}

/// The right-handed cross product `a × b`.
pub fn cross<A, B, D>(a: A, b: B, dst: D) -> D::Output
where
    A: Source<3>,
    B: Source<3, Scalar = A::Scalar>,
    D: Destination<A::Scalar, 3>,
{
    let [ax, ay, az] = a.components();
    let [bx, by, bz] = b.components();
    dst.emit([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
}

/// `-(a × b)`, which is `b × a`.
pub fn rev_cross<A, B, D>(a: A, b: B, dst: D) -> D::Output
where
    A: Source<3>,
    B: Source<3, Scalar = A::Scalar>,
    D: Destination<A::Scalar, 3>,
{
    cross(a, b, Then(|c: [A::Scalar; 3]| dst.emit(c.map(|x| -x))))
}

/// The 2D analogue of the cross product: the z component of `a × b` with
/// both vectors lifted into the xy plane.
pub fn cross_2d<A, B>(a: A, b: B) -> A::Scalar
where
    A: Source<2>,
    B: Source<2, Scalar = A::Scalar>,
{
    let [ax, ay] = a.components();
    let [bx, by] = b.components();
    ax * by - ay * bx
}

/// `-cross_2d(a, b)`
pub fn rev_cross_2d<A, B>(a: A, b: B) -> A::Scalar
where
    A: Source<2>,
    B: Source<2, Scalar = A::Scalar>,
{
    -cross_2d(a, b)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::array;

    #[test]
    fn sanity_dot() {
        assert_eq!(32.0, dot([1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]));
        assert_eq!(0.0, dot([1.0f64, 0.0], (0.0, 1.0)));
    }

    #[test]
    fn sanity_cross() {
        assert_eq!([0.0, 0.0, 1.0], cross([1.0f64, 0.0, 0.0], [0.0, 1.0, 0.0], array()));
        assert_eq!([1.0, 0.0, 0.0], cross([0.0f64, 1.0, 0.0], [0.0, 0.0, 1.0], array()));
        assert_eq!(
            [-3.0, 6.0, -3.0],
            cross([1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0], array())
        );
    }

    #[test]
    fn rev_cross_swaps_operands() {
        let a = [1.0f64, 2.0, 3.0];
        let b = [-2.0f64, 0.5, 4.0];
        let rev: [f64; 3] = rev_cross(a, b, array());
        let swapped: [f64; 3] = cross(b, a, array());
        assert_eq!(swapped, rev);
    }

    #[test]
    fn cross_is_orthogonal() {
        let a = [1.0f64, 2.0, 3.0];
        let b = [4.0f64, 5.0, 6.0];
        let c: [f64; 3] = cross(a, b, array());
        assert_eq!(0.0, dot(a, c));
        assert_eq!(0.0, dot(b, c));
    }

    #[test]
    fn sanity_cross_2d() {
        assert_eq!(1.0, cross_2d([1.0f64, 0.0], [0.0, 1.0]));
        assert_eq!(-1.0, rev_cross_2d([1.0f64, 0.0], [0.0, 1.0]));
        assert_eq!(-2.0, cross_2d([1.0f64, 2.0], [3.0, 4.0]));
    }
}
