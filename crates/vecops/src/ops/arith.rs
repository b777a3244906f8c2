//! Component-wise arithmetic.
//!
//! No zero guards: `div([1, 2], [0, 2])` is `[inf, 1]`.
use crate::{Destination, Source, Tolerance, ops::map, ops::zip, scalar};

/// Generates a component-wise binary operation.
macro_rules! componentwise_binary {
    ($(#[$meta:meta])* $name:ident, |$x:ident, $y:ident| $body:expr) => {
        $(#[$meta])*
        pub fn $name<A, B, D, const N: usize>(a: A, b: B, dst: D) -> D::Output
        where
            A: Source<N>,
            B: Source<N, Scalar = A::Scalar>,
            D: Destination<A::Scalar, N>,
        {
            zip(a, b, |$x, $y| $body, dst)
        }
    };
}

/// Generates a component-wise unary operation.
macro_rules! componentwise_unary {
    ($(#[$meta:meta])* $name:ident, |$x:ident| $body:expr) => {
        $(#[$meta])*
        pub fn $name<V, D, const N: usize>(v: V, dst: D) -> D::Output
        where
            V: Source<N>,
            D: Destination<V::Scalar, N>,
        {
            map(v, |$x| $body, dst)
        }
    };
}

componentwise_binary!(
    /// `a + b`
    add,
    |x, y| x + y
);
componentwise_binary!(
    /// `a - b`
    sub,
    |x, y| x - y
);
componentwise_binary!(
    /// Component-wise (Hadamard) product.
    mul,
    |x, y| x * y
);
componentwise_binary!(
    /// Component-wise quotient. Division by zero gives ±inf or NaN.
    div,
    |x, y| x / y
);

componentwise_unary!(
    /// `-v`
    neg,
    |x| -x
);
componentwise_unary!(
    /// Component-wise reciprocal. A zero component gives ±inf.
    rec,
    |x| scalar::rec(x)
);
componentwise_unary!(
    /// Component-wise absolute value.
    abs,
    |x| scalar::abs(x)
);
componentwise_unary!(
    /// Component-wise truncation toward zero.
    trunc,
    |x| scalar::trunc(x)
);

/// `v * s`
pub fn scale<V, D, const N: usize>(v: V, s: V::Scalar, dst: D) -> D::Output
where
    V: Source<N>,
    D: Destination<V::Scalar, N>,
{
    map(v, |x| x * s, dst)
}

/// Component-wise fused multiply-add, `a * b + c`.
pub fn fma<A, B, C, D, const N: usize>(a: A, b: B, c: C, dst: D) -> D::Output
where
    A: Source<N>,
    B: Source<N, Scalar = A::Scalar>,
    C: Source<N, Scalar = A::Scalar>,
    D: Destination<A::Scalar, N>,
{
    let a = a.components();
    let b = b.components();
    let c = c.components();
    dst.emit(std::array::from_fn(|i| scalar::fma(a[i], b[i], c[i])))
}

/// Scaled add, `v * s + t`, fused per component.
pub fn fma_scaled<V, T, D, const N: usize>(v: V, s: V::Scalar, t: T, dst: D) -> D::Output
where
    V: Source<N>,
    T: Source<N, Scalar = V::Scalar>,
    D: Destination<V::Scalar, N>,
{
    zip(v, t, |x, y| scalar::fma(x, s, y), dst)
}

/// Component-wise sign, with every component inside `tolerance` mapped to
/// zero. Use [`Tolerance::EXACT`] for the plain sign.
pub fn signum<V, D, const N: usize>(v: V, tolerance: Tolerance, dst: D) -> D::Output
where
    V: Source<N>,
    D: Destination<V::Scalar, N>,
{
    map(v, |x| scalar::signum_tol(x, tolerance), dst)
}
