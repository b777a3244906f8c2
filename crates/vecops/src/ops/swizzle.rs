//! Reordering and selecting components.
use crate::{Destination, Source, error::*};

/// Selects components of `v` by index: component `i` of the result is
/// component `indices[i]` of `v`.
///
/// Indices may repeat, and `M` need not equal `N`, so this covers both
/// permutations and broadcasts like `[0, 0, 0]`. Every index is checked
/// against `N` before anything is emitted.
pub fn swizzle<V, D, const N: usize, const M: usize>(
    v: V,
    indices: [usize; M],
    dst: D,
) -> Result<D::Output>
where
    V: Source<N>,
    D: Destination<V::Scalar, M>,
{
    check_indices(&indices, N)?;
    let c = v.components();
    Ok(dst.emit(indices.map(|i| c[i])))
}

/// Exchanges components `a` and `b` of `v`.
pub fn swap<V, D, const N: usize>(v: V, a: usize, b: usize, dst: D) -> Result<D::Output>
where
    V: Source<N>,
    D: Destination<V::Scalar, N>,
{
    check_indices(&[a, b], N)?;
    let mut c = v.components();
    c.swap(a, b);
    Ok(dst.emit(c))
}

vecops_macros::swizzle!(Swizzle2, 2, [x, y]);
vecops_macros::swizzle!(Swizzle3, 3, [x, y, z]);
