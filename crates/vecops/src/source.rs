//! Where a vector's components are read from.
//!
//! A [`Source<N>`] is anything that can hand out `N` components:
//!
//! * literal scalars: `[x, y]`, `[x, y, z]`, `(x, y)` and `(x, y, z)`
//! * a [`Buffer`], `N` components of a larger slice, either aligned (a
//!   contiguous run from an offset) or unaligned (an explicit index per
//!   component)
//! * an [`Indexed`], the same addressing over any [`ComponentRead`] object
//! * a domain type with named fields, see
//!   [`impl_components!`](crate::impl_components)
//! * a reference to any of the above
use crate::{ComponentRead, Scalar, error::*};

/// Read access to the `N` components of a vector, in order `0..N`.
pub trait Source<const N: usize> {
    type Scalar: Scalar;

    /// Returns the component at `index`.
    ///
    /// # Panics
    /// Implementations may panic when `index >= N`. Use
    /// [`try_component`](Self::try_component) for untrusted indices.
    fn component(&self, index: usize) -> Self::Scalar;

    /// Returns all components.
    fn components(&self) -> [Self::Scalar; N] {
        std::array::from_fn(|i| self.component(i))
    }

    /// Returns the component at `index`, or an error if `index >= N`.
    fn try_component(&self, index: usize) -> Result<Self::Scalar> {
        check_indices(&[index], N)?;
        Ok(self.component(index))
    }
}

impl<S: Scalar, const N: usize> Source<N> for [S; N] {
    type Scalar = S;

    fn component(&self, index: usize) -> S {
        self[index]
    }

    fn components(&self) -> [S; N] {
        *self
    }
}

impl<S: Scalar> Source<2> for (S, S) {
    type Scalar = S;

    fn component(&self, index: usize) -> S {
        match index {
            0 => self.0,
            1 => self.1,
            _ => panic!("index out of bounds: a 2 component source has no index {index}"),
        }
    }
}

impl<S: Scalar> Source<3> for (S, S, S) {
    type Scalar = S;

    fn component(&self, index: usize) -> S {
        match index {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => panic!("index out of bounds: a 3 component source has no index {index}"),
        }
    }
}

impl<T: Source<N> + ?Sized, const N: usize> Source<N> for &T {
    type Scalar = T::Scalar;

    fn component(&self, index: usize) -> Self::Scalar {
        (**self).component(index)
    }

    fn components(&self) -> [Self::Scalar; N] {
        (**self).components()
    }
}

/// Resolves aligned addressing into one index per component.
pub(crate) fn aligned_indices<const N: usize>(offset: usize) -> [usize; N] {
    std::array::from_fn(|i| offset.saturating_add(i))
}

/// `N` components read out of a larger [`ComponentRead`] object.
///
/// All indices are validated against the object's length on construction,
/// so reading never goes out of bounds afterwards.
#[derive(Debug)]
pub struct Indexed<'a, T: ?Sized, const N: usize> {
    object: &'a T,
    indices: [usize; N],
}

/// `N` components of a scalar slice.
pub type Buffer<'a, S, const N: usize> = Indexed<'a, [S], N>;

impl<'a, T: ComponentRead + ?Sized, const N: usize> Indexed<'a, T, N> {
    /// Components `offset..offset + N` of `object`.
    pub fn aligned(object: &'a T, offset: usize) -> Result<Self> {
        Self::unaligned(object, aligned_indices(offset))
    }

    /// Component `i` is read from `object` at `indices[i]`.
    pub fn unaligned(object: &'a T, indices: [usize; N]) -> Result<Self> {
        check_indices(&indices, object.len())?;
        Ok(Indexed { object, indices })
    }

    /// The resolved index of each component within the object.
    pub fn indices(&self) -> [usize; N] {
        self.indices
    }
}

impl<T: ?Sized, const N: usize> Clone for Indexed<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, const N: usize> Copy for Indexed<'_, T, N> {}

impl<T: ComponentRead + ?Sized, const N: usize> Source<N> for Indexed<'_, T, N> {
    type Scalar = T::Scalar;

    fn component(&self, index: usize) -> T::Scalar {
        self.object.get(self.indices[index])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sanity_literals() {
        assert_eq!([1.0, 2.0], [1.0f32, 2.0].components());
        assert_eq!([1.0, 2.0, 3.0], (1.0f64, 2.0, 3.0).components());
        assert_eq!(2.0, (1.0f64, 2.0).component(1));
    }

    #[test]
    fn try_component_rejects_out_of_range() {
        assert_eq!(Ok(3.0), [1.0f64, 2.0, 3.0].try_component(2));
        assert_eq!(
            Err(Error::IndexOutOfRange { index: 2, len: 2 }),
            (1.0f64, 2.0).try_component(2)
        );
    }

    #[test]
    fn try_component_logs_the_rejected_index() {
        crate::error::captured_log::install();
        assert!([1.0f32, 2.0].try_component(11).is_err());
        assert!(crate::error::captured_log::contains(
            "rejecting component index 11, only 2 components available"
        ));
    }

    #[test]
    fn buffer_aligned_reads_contiguous_run() {
        // Interleaved position (2) + uv (2).
        let data = [0.0f32, 1.0, 0.25, 0.5, 2.0, 3.0, 0.75, 1.0];
        let uv = Buffer::<f32, 2>::aligned(&data[..], 6).unwrap();
        assert_eq!([0.75, 1.0], uv.components());
        assert_eq!([6, 7], uv.indices());
    }

    #[test]
    fn buffer_unaligned_reads_scattered_indices() {
        let data = [9.0f64, 8.0, 7.0, 6.0];
        let v = Buffer::<f64, 3>::unaligned(&data[..], [3, 0, 3]).unwrap();
        assert_eq!([6.0, 9.0, 6.0], v.components());
    }

    #[test]
    fn buffer_rejects_addresses_past_the_end() {
        let data = [0.0f64; 4];
        assert_eq!(
            Err(Error::IndexOutOfRange { index: 4, len: 4 }),
            Buffer::<f64, 2>::aligned(&data[..], 3).map(|_| ())
        );
        assert_eq!(
            Err(Error::IndexOutOfRange { index: 9, len: 4 }),
            Buffer::<f64, 2>::unaligned(&data[..], [0, 9]).map(|_| ())
        );
        assert!(Buffer::<f64, 2>::aligned(&data[..], usize::MAX).is_err());
    }

    #[test]
    fn indexed_reads_any_component_object() {
        let data = vec![1.0f32, 2.0, 3.0, 4.0];
        let v = Indexed::<_, 2>::aligned(&data, 1).unwrap();
        assert_eq!([2.0, 3.0], v.components());
        let by_ref = &v;
        assert_eq!(3.0, by_ref.component(1));
    }
}
