//! Capabilities consumed from surrounding domain types.
//!
//! The kernel does not define concrete point or vector types. It only needs
//! to read components out of things and to write or build results, so these
//! small traits are all a domain type must provide. Named-field types get
//! them in one line with [`impl_components!`](crate::impl_components).
use crate::Scalar;

/// Indexable read access to a run of scalars, such as an interleaved vertex
/// buffer.
pub trait ComponentRead {
    type Scalar: Scalar;

    /// Number of addressable scalars.
    fn len(&self) -> usize;

    /// Reads the scalar at `index`, which must be below [`len`](Self::len).
    fn get(&self, index: usize) -> Self::Scalar;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Indexable write access to a run of scalars.
pub trait ComponentWrite: ComponentRead {
    /// Writes the scalar at `index`, which must be below
    /// [`len`](ComponentRead::len).
    fn set(&mut self, index: usize, value: Self::Scalar);
}

/// An object whose `N` components can be overwritten in place.
pub trait SetComponents<const N: usize> {
    type Scalar: Scalar;

    fn set_components(&mut self, components: [Self::Scalar; N]);
}

/// A type that can be built from `N` components.
pub trait FromComponents<const N: usize>: Sized {
    type Scalar: Scalar;

    fn from_components(components: [Self::Scalar; N]) -> Self;
}

impl<S: Scalar> ComponentRead for [S] {
    type Scalar = S;

    fn len(&self) -> usize {
        <[S]>::len(self)
    }

    fn get(&self, index: usize) -> S {
        self[index]
    }
}

impl<S: Scalar> ComponentWrite for [S] {
    fn set(&mut self, index: usize, value: S) {
        self[index] = value;
    }
}

impl<S: Scalar> ComponentRead for Vec<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> S {
        self[index]
    }
}

impl<S: Scalar> ComponentWrite for Vec<S> {
    fn set(&mut self, index: usize, value: S) {
        self[index] = value;
    }
}

impl<S: Scalar, const N: usize> SetComponents<N> for [S; N] {
    type Scalar = S;

    fn set_components(&mut self, components: [S; N]) {
        *self = components;
    }
}

impl<S: Scalar, const N: usize> FromComponents<N> for [S; N] {
    type Scalar = S;

    fn from_components(components: [S; N]) -> Self {
        components
    }
}

impl<S: Scalar> SetComponents<2> for (S, S) {
    type Scalar = S;

    fn set_components(&mut self, [x, y]: [S; 2]) {
        *self = (x, y);
    }
}

impl<S: Scalar> FromComponents<2> for (S, S) {
    type Scalar = S;

    fn from_components([x, y]: [S; 2]) -> Self {
        (x, y)
    }
}

impl<S: Scalar> SetComponents<3> for (S, S, S) {
    type Scalar = S;

    fn set_components(&mut self, [x, y, z]: [S; 3]) {
        *self = (x, y, z);
    }
}

impl<S: Scalar> FromComponents<3> for (S, S, S) {
    type Scalar = S;

    fn from_components([x, y, z]: [S; 3]) -> Self {
        (x, y, z)
    }
}

/// Registers a type with named component fields as a
/// [`Source`](crate::Source), [`SetComponents`] and [`FromComponents`].
///
/// ```rust
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// vecops::impl_components!(Point, f64, 2, [x, y]);
///
/// let p = Point { x: 3.0, y: 4.0 };
/// assert_eq!(5.0, vecops::len(&p, vecops::Tolerance::EXACT));
/// let half: Point = vecops::scale(&p, 0.5, vecops::construct());
/// assert_eq!(Point { x: 1.5, y: 2.0 }, half);
/// ```
#[macro_export]
macro_rules! impl_components {
    ($ty:ty, $scalar:ty, $n:literal, [$($field:ident),+]) => {
        impl $crate::Source<$n> for $ty {
            type Scalar = $scalar;

            fn component(&self, index: usize) -> $scalar {
                [$(self.$field),+][index]
            }

            fn components(&self) -> [$scalar; $n] {
                [$(self.$field),+]
            }
        }

        impl $crate::SetComponents<$n> for $ty {
            type Scalar = $scalar;

            fn set_components(&mut self, components: [$scalar; $n]) {
                let [$($field),+] = components;
                $(self.$field = $field;)+
            }
        }

        impl $crate::FromComponents<$n> for $ty {
            type Scalar = $scalar;

            fn from_components(components: [$scalar; $n]) -> Self {
                let [$($field),+] = components;
                Self { $($field),+ }
            }
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Named {
        x: f32,
        y: f32,
        z: f32,
    }

    crate::impl_components!(Named, f32, 3, [x, y, z]);

    #[test]
    fn sanity_slice_access() {
        let mut data = vec![1.0f64, 2.0, 3.0];
        assert_eq!(3, ComponentRead::len(&data));
        assert_eq!(2.0, ComponentRead::get(&data, 1));
        data.as_mut_slice().set(1, 5.0);
        assert_eq!(vec![1.0, 5.0, 3.0], data);
    }

    #[test]
    fn named_fields_round_trip_through_arrays() {
        use crate::Source;

        let mut named = Named::from_components([1.0, 2.0, 3.0]);
        assert_eq!([1.0, 2.0, 3.0], named.components());
        assert_eq!(2.0, named.component(1));
        named.set_components([4.0, 5.0, 6.0]);
        assert_eq!(
            Named {
                x: 4.0,
                y: 5.0,
                z: 6.0
            },
            named
        );
    }

    #[test]
    fn tuples_are_settable() {
        let mut pair = (0.0f32, 0.0);
        pair.set_components([1.0, 2.0]);
        assert_eq!((1.0, 2.0), pair);
        assert_eq!((1.0, 2.0, 3.0), <(f64, f64, f64)>::from_components([1.0, 2.0, 3.0]));
    }
}
