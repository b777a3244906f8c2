//! The vector-operation layer.
//!
//! Every operation here is written once, generically over where its operands
//! come from ([`Source`]) and where its result goes ([`Destination`]). So the
//! same `nrm` reads from a literal array, an interleaved buffer or a domain
//! type, and writes into a buffer, an existing object, a new value or a
//! continuation:
//!
//! ```rust
//! use vecops::{Buffer, BufferMut, Then, Tolerance, array, nrm};
//!
//! let data = [0.0f64, 3.0, 4.0, 0.0];
//! let v = Buffer::<f64, 2>::aligned(&data[..], 1).unwrap();
//!
//! let fresh: [f64; 2] = nrm(v, Tolerance::EXACT, array());
//!
//! let mut out = [0.0f64; 4];
//! nrm(v, Tolerance::EXACT, BufferMut::aligned(&mut out[..], 2).unwrap());
//! assert_eq!(fresh, [out[2], out[3]]);
//!
//! let y = nrm([3.0f64, 4.0], Tolerance::EXACT, Then(|[_, y]: [f64; 2]| y));
//! assert_eq!(fresh[1], y);
//! ```
//!
//! Zero-length vectors are special-cased only by the length family
//! ([`len`], [`nrm`], [`signum`]). Everything else, including [`div`],
//! [`rec`] and [`len_rc`], follows IEEE semantics and will happily produce
//! infinities and NaNs.
use crate::{Destination, Source};

mod arith;
mod geometry;
mod interpolate;
mod length;
mod minmax;
mod normalize;
mod product;
mod swizzle;

pub use arith::*;
pub use geometry::*;
pub use interpolate::*;
pub use length::*;
pub use minmax::*;
pub use normalize::*;
pub use product::*;
pub use swizzle::*;

/// Emits `f` applied to every component of `v`.
pub(crate) fn map<V, D, const N: usize>(
    v: V,
    f: impl Fn(V::Scalar) -> V::Scalar,
    dst: D,
) -> D::Output
where
    V: Source<N>,
    D: Destination<V::Scalar, N>,
{
    dst.emit(v.components().map(f))
}

/// Emits `f` applied to every pair of matching components of `a` and `b`.
pub(crate) fn zip<A, B, D, const N: usize>(
    a: A,
    b: B,
    f: impl Fn(A::Scalar, A::Scalar) -> A::Scalar,
    dst: D,
) -> D::Output
where
    A: Source<N>,
    B: Source<N, Scalar = A::Scalar>,
    D: Destination<A::Scalar, N>,
{
    let a = a.components();
    let b = b.components();
    dst.emit(std::array::from_fn(|i| f(a[i], b[i])))
}
