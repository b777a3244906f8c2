//! Component-wise extrema.
//!
//! All comparisons are strict, so on ties the earliest component wins and a
//! NaN component is never selected unless it comes first.
use crate::{Destination, IndexValuePair, KeyValuePair, Source, ops::map, ops::zip, scalar};

macro_rules! extremum {
    ($name:ident, $cmp:tt, $what:literal) => {
        paste::paste! {
            #[doc = "The " $what " component of `v` with its index."]
            pub fn $name<V: Source<N>, const N: usize>(v: V) -> IndexValuePair<V::Scalar> {
                const { assert!(N > 0, "a zero component vector has no extremum") };
                let c = v.components();
                let mut best = IndexValuePair::new(c[0], 0);
                for (index, value) in c.into_iter().enumerate().skip(1) {
                    if value $cmp best.value {
                        best = IndexValuePair::new(value, index);
                    }
                }
                best
            }

            #[doc = "The " $what " component of `v`."]
            pub fn [<$name _comp>]<V: Source<N>, const N: usize>(v: V) -> V::Scalar {
                $name(v).value
            }

            #[doc = "The " $what " component of `v`, reported by `keys[index]` "]
            #[doc = "instead of its index."]
            pub fn [<$name _keyed>]<V, K: Copy, const N: usize>(
                v: V,
                keys: [K; N],
            ) -> KeyValuePair<K, V::Scalar>
            where
                V: Source<N>,
            {
                $name(v).with_key(keys)
            }

            #[doc = "Component-wise " $name " of `a` and `b`. Ties keep `a`."]
            pub fn [<$name _each>]<A, B, D, const N: usize>(a: A, b: B, dst: D) -> D::Output
            where
                A: Source<N>,
                B: Source<N, Scalar = A::Scalar>,
                D: Destination<A::Scalar, N>,
            {
                zip(a, b, |x, y| if y $cmp x { y } else { x }, dst)
            }
        }
    };
}

extremum!(min, <, "smallest");
extremum!(max, >, "largest");

/// Clamps every component of `v` to `[low, high]`.
pub fn clamp_each<V, D, const N: usize>(v: V, low: V::Scalar, high: V::Scalar, dst: D) -> D::Output
where
    V: Source<N>,
    D: Destination<V::Scalar, N>,
{
    map(v, |x| scalar::clamp(x, low, high), dst)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::array;

    #[test]
    fn sanity_min_max() {
        assert_eq!(IndexValuePair::new(2.0, 1), min([5.0f64, 2.0]));
        assert_eq!(IndexValuePair::new(5.0, 0), max([5.0f64, 2.0]));
        assert_eq!(IndexValuePair::new(-1.0, 2), min((0.5f32, 3.0, -1.0)));
        assert_eq!(3.0, max_comp((0.5f32, 3.0, -1.0)));
        assert_eq!(-1.0, min_comp([0.5f32, 3.0, -1.0]));
    }

    #[test]
    fn ties_keep_the_first_index() {
        assert_eq!(IndexValuePair::new(2.0, 0), min([2.0f64, 2.0]));
        assert_eq!(IndexValuePair::new(2.0, 0), max([2.0f64, 2.0]));
        assert_eq!(IndexValuePair::new(4.0, 1), max([1.0f64, 4.0, 4.0]));
    }

    #[test]
    fn sanity_keyed() {
        #[derive(Clone, Copy, Debug, PartialEq)]
        enum Axis {
            X,
            Y,
            Z,
        }
        let keys = [Axis::X, Axis::Y, Axis::Z];
        assert_eq!(KeyValuePair::new(7.0, Axis::Y), max_keyed([1.0f64, 7.0, 3.0], keys));
        assert_eq!(KeyValuePair::new(1.0, Axis::X), min_keyed([1.0f64, 7.0, 3.0], keys));
        assert_eq!(
            KeyValuePair::new(-2.0, "depth"),
            min_keyed([0.0f64, -2.0], ["width", "depth"])
        );
        assert_eq!(KeyValuePair::new(3.0, Axis::Z), max_keyed([1.0f64, -7.0, 3.0], keys));
    }

    #[test]
    fn sanity_each() {
        let a = [1.0f64, 5.0, -3.0];
        let b = [2.0f64, 4.0, -3.0];
        assert_eq!([1.0, 4.0, -3.0], min_each(a, b, array()));
        assert_eq!([2.0, 5.0, -3.0], max_each(a, b, array()));
    }

    #[test]
    fn sanity_clamp_each() {
        assert_eq!(
            [0.0, 0.5, 1.0],
            clamp_each([-1.0f64, 0.5, 2.0], 0.0, 1.0, array())
        );
    }
}
