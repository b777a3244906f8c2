//! Structural errors.
//!
//! Only addressing mistakes are errors here. Numeric degeneracies (zero-length
//! vectors, division by zero) are handled by IEEE semantics or by the explicit
//! tolerance gates in the length family, never by an `Error`.
use snafu::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Component index {index} is out of range for {len} components"))]
    IndexOutOfRange { index: usize, len: usize },

    #[snafu(display(
        "Stream stride {stride} cannot hold {needed} components starting at offset {offset}"
    ))]
    StrideTooSmall {
        stride: usize,
        offset: usize,
        needed: usize,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Checks that every index in `indices` addresses one of `len` components.
pub(crate) fn check_indices(indices: &[usize], len: usize) -> Result<()> {
    for &index in indices {
        if index >= len {
            log::debug!("rejecting component index {index}, only {len} components available");
            return IndexOutOfRangeSnafu { index, len }.fail();
        }
    }
    Ok(())
}
