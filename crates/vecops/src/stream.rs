//! Per-vertex operations over interleaved buffers.
//!
//! Vertex data is commonly laid out as one record per vertex, `stride`
//! scalars long, with the vector of interest at a fixed `offset` inside each
//! record. A [`Stream`] applies an operation to that vector in every complete
//! record. Records never overlap, so each one is an independent destination
//! and [`Stream::par_map`] can write them concurrently.
use snafu::prelude::*;

use crate::{Scalar, error::*};

/// A mutable view of the records of an interleaved buffer.
#[derive(Debug)]
pub struct Stream<'a, S> {
    data: &'a mut [S],
    stride: usize,
    offset: usize,
}

impl<'a, S: Scalar> Stream<'a, S> {
    /// Views `data` as records of `stride` scalars, with the vector starting
    /// `offset` scalars into each record.
    ///
    /// Trailing scalars that do not fill a whole record are never touched.
    pub fn new(data: &'a mut [S], stride: usize, offset: usize) -> Result<Self> {
        let fits = stride > 0 && offset < stride;
        if !fits {
            log::debug!("offset {offset} lies outside a stride of {stride}");
        }
        ensure!(
            fits,
            StrideTooSmallSnafu {
                stride,
                offset,
                needed: 1usize,
            }
        );
        Ok(Stream {
            data,
            stride,
            offset,
        })
    }

    /// Number of complete records.
    pub fn len(&self) -> usize {
        self.data.len() / self.stride
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_fits<const N: usize>(&self) -> Result<()> {
        let fits = self
            .offset
            .checked_add(N)
            .is_some_and(|end| end <= self.stride);
        if !fits {
            log::debug!(
                "{N} components at offset {} do not fit a stride of {}",
                self.offset,
                self.stride
            );
        }
        ensure!(
            fits,
            StrideTooSmallSnafu {
                stride: self.stride,
                offset: self.offset,
                needed: N,
            }
        );
        Ok(())
    }

    /// Replaces the `N` component vector of every record with `f` of it.
    ///
    /// ```rust
    /// use vecops::{Stream, Tolerance, array, nrm};
    ///
    /// // x, y, then a per-vertex weight
    /// let mut data = [0.0f64, 4.0, 1.0, 2.0, 0.0, 0.5];
    /// Stream::new(&mut data, 3, 0)
    ///     .unwrap()
    ///     .map::<2>(|v| nrm(v, Tolerance::EXACT, array()))
    ///     .unwrap();
    /// assert_eq!([0.0, 1.0, 1.0, 1.0, 0.0, 0.5], data);
    /// ```
    pub fn map<const N: usize>(&mut self, mut f: impl FnMut([S; N]) -> [S; N]) -> Result<()> {
        self.check_fits::<N>()?;
        let offset = self.offset;
        for record in self.data.chunks_exact_mut(self.stride) {
            apply(&mut record[offset..offset + N], &mut f);
        }
        Ok(())
    }

    /// Like [`map`](Self::map), with records processed in parallel on the
    /// rayon thread pool.
    #[cfg(feature = "rayon")]
    pub fn par_map<const N: usize, F>(&mut self, f: F) -> Result<()>
    where
        F: Fn([S; N]) -> [S; N] + Sync + Send,
    {
        use rayon::{iter::ParallelIterator, slice::ParallelSliceMut};

        self.check_fits::<N>()?;
        let offset = self.offset;
        self.data
            .par_chunks_exact_mut(self.stride)
            .for_each(|record| apply(&mut record[offset..offset + N], &f));
        Ok(())
    }
}

fn apply<S: Scalar, const N: usize>(
    vector: &mut [S],
    f: impl FnOnce([S; N]) -> [S; N],
) {
    let input: [S; N] = std::array::from_fn(|i| vector[i]);
    vector.copy_from_slice(&f(input));
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Tolerance, array, error::captured_log, nrm, ops::scale};

    #[test]
    fn sanity_new() {
        let mut data = [0.0f32; 7];
        assert_eq!(2, Stream::new(&mut data, 3, 1).unwrap().len());
        assert_eq!(
            Err(Error::StrideTooSmall {
                stride: 0,
                offset: 0,
                needed: 1
            }),
            Stream::new(&mut data, 0, 0).map(|_| ())
        );
        assert!(Stream::new(&mut data, 3, 3).is_err());
    }

    #[test]
    fn bad_geometry_is_logged() {
        captured_log::install();
        let mut data = [0.0f32; 4];
        assert!(Stream::new(&mut data, 2, 7).is_err());
        assert!(captured_log::contains("offset 7 lies outside a stride of 2"));

        let mut stream = Stream::new(&mut data, 2, 1).unwrap();
        assert!(stream.map::<2>(|v| v).is_err());
        assert!(captured_log::contains("2 components at offset 1 do not fit a stride of 2"));
    }

    #[test]
    fn map_touches_only_the_vector() {
        let mut data = [1.0f64, 2.0, 9.0, 3.0, 4.0, 9.0, 5.0];
        let mut stream = Stream::new(&mut data, 3, 0).unwrap();
        stream.map::<2>(|v| scale(v, 2.0, array())).unwrap();
        assert_eq!([2.0, 4.0, 9.0, 6.0, 8.0, 9.0, 5.0], data);
    }

    #[test]
    fn map_rejects_vectors_wider_than_the_record() {
        let mut data = [0.0f64; 8];
        let mut stream = Stream::new(&mut data, 4, 2).unwrap();
        assert_eq!(
            Err(Error::StrideTooSmall {
                stride: 4,
                offset: 2,
                needed: 3
            }),
            stream.map::<3>(|v| v)
        );
        assert!(stream.map::<2>(|v| v).is_ok());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn par_map_matches_map() {
        let input: Vec<f64> = (0..3000).map(|i| (i % 17) as f64 - 8.0).collect();

        let mut sequential = input.clone();
        Stream::new(&mut sequential, 5, 1)
            .unwrap()
            .map::<3>(|v| nrm(v, Tolerance::EM6, array()))
            .unwrap();

        let mut parallel = input;
        Stream::new(&mut parallel, 5, 1)
            .unwrap()
            .par_map::<3, _>(|v| nrm(v, Tolerance::EM6, array()))
            .unwrap();

        assert_eq!(sequential, parallel);
    }
}
