//! Where an operation's result goes.
//!
//! Every vector-producing operation takes a [`Destination`] and returns its
//! [`Output`](Destination::Output):
//!
//! | Destination | Effect | Output |
//! | --- | --- | --- |
//! | [`BufferMut`] / [`IndexedMut`] | writes into part of a larger buffer | `()` |
//! | `&mut T` where `T: SetComponents` | overwrites an existing object | `()` |
//! | [`Construct<T>`] | builds a new `T` | `T` |
//! | [`Then<F>`] | hands the components to `F` | whatever `F` returns |
use std::marker::PhantomData;

use crate::{
    ComponentWrite, FromComponents, Scalar, SetComponents, error::*, source::aligned_indices,
};

/// Receives the `N` components computed by an operation.
pub trait Destination<S, const N: usize> {
    type Output;

    fn emit(self, components: [S; N]) -> Self::Output;
}

impl<T: SetComponents<N> + ?Sized, const N: usize> Destination<T::Scalar, N> for &mut T {
    type Output = ();

    fn emit(self, components: [T::Scalar; N]) {
        self.set_components(components);
    }
}

/// `N` components written into a larger [`ComponentWrite`] object.
///
/// Indices are validated on construction. With unaligned addressing a
/// repeated index receives the last component written to it.
#[derive(Debug)]
pub struct IndexedMut<'a, T: ?Sized, const N: usize> {
    object: &'a mut T,
    indices: [usize; N],
}

/// `N` components of a mutable scalar slice.
pub type BufferMut<'a, S, const N: usize> = IndexedMut<'a, [S], N>;

impl<'a, T: ComponentWrite + ?Sized, const N: usize> IndexedMut<'a, T, N> {
    /// Components `offset..offset + N` of `object`.
    pub fn aligned(object: &'a mut T, offset: usize) -> Result<Self> {
        Self::unaligned(object, aligned_indices(offset))
    }

    /// Component `i` is written to `object` at `indices[i]`.
    pub fn unaligned(object: &'a mut T, indices: [usize; N]) -> Result<Self> {
        check_indices(&indices, object.len())?;
        Ok(IndexedMut { object, indices })
    }

    pub fn indices(&self) -> [usize; N] {
        self.indices
    }
}

impl<T: ComponentWrite + ?Sized, const N: usize> SetComponents<N> for IndexedMut<'_, T, N> {
    type Scalar = T::Scalar;

    fn set_components(&mut self, components: [T::Scalar; N]) {
        for (index, value) in self.indices.into_iter().zip(components) {
            self.object.set(index, value);
        }
    }
}

impl<T: ComponentWrite + ?Sized, const N: usize> Destination<T::Scalar, N>
    for IndexedMut<'_, T, N>
{
    type Output = ();

    fn emit(mut self, components: [T::Scalar; N]) {
        self.set_components(components);
    }
}

/// Builds a fresh `T` from the result.
pub struct Construct<T>(PhantomData<fn() -> T>);

/// A [`Construct`] destination for `T`.
pub const fn construct<T>() -> Construct<T> {
    Construct(PhantomData)
}

/// A [`Construct`] destination returning the components as a plain array.
pub const fn array<S: Scalar, const N: usize>() -> Construct<[S; N]> {
    Construct(PhantomData)
}

impl<T> Default for Construct<T> {
    fn default() -> Self {
        construct()
    }
}

impl<T> Clone for Construct<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Construct<T> {}

impl<T> std::fmt::Debug for Construct<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Construct<{}>", std::any::type_name::<T>())
    }
}

impl<T: FromComponents<N>, const N: usize> Destination<T::Scalar, N> for Construct<T> {
    type Output = T;

    fn emit(self, components: [T::Scalar; N]) -> T {
        T::from_components(components)
    }
}

/// Forwards the result to a continuation instead of materializing a vector.
///
/// ```rust
/// use vecops::{Then, Tolerance, nrm};
///
/// let sum = nrm([3.0f64, 4.0], Tolerance::EXACT, Then(|[x, y]: [f64; 2]| x + y));
/// assert!((sum - 1.4).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Then<F>(pub F);

impl<S, R, F: FnOnce([S; N]) -> R, const N: usize> Destination<S, N> for Then<F> {
    type Output = R;

    fn emit(self, components: [S; N]) -> R {
        (self.0)(components)
    }
}
