//! A small vector-algebra kernel for 2 and 3 component float vectors.
//!
//! The crate is layered:
//!
//! * [`scalar`] holds the per-component formulas (`lerp`, `smoothstep`,
//!   `signum`, `fma`, ...).
//! * The operand layer describes where a vector comes from ([`Source`]) and
//!   where a result goes ([`Destination`]).
//! * The operations ([`len`], [`nrm`], [`dot`], [`cross`], [`reflect`],
//!   [`rot_deg`], [`lerp`], [`swizzle`], [`min`], [`add`], ...) are each
//!   written once against those two traits.
//!
//! ```rust
//! use vecops::{Tolerance, array, construct, len, nrm, reflect};
//!
//! #[derive(Debug, PartialEq)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! vecops::impl_components!(Point, f64, 2, [x, y]);
//!
//! assert_eq!(5.0, len([3.0f64, 4.0], Tolerance::EXACT));
//!
//! let bounced: Point = reflect((1.0, -1.0), [0.0, 1.0], construct());
//! assert_eq!(Point { x: 1.0, y: 1.0 }, bounced);
//!
//! // Zero vectors normalize to themselves instead of NaN.
//! assert_eq!([0.0, 0.0], nrm([0.0f64, 0.0], Tolerance::EXACT, array()));
//! ```
//!
//! There are no concrete vector types here. Domain types opt in through
//! [`impl_components!`], and with the `glam` feature glam's `Vec2`, `Vec3`,
//! `DVec2` and `DVec3` work out of the box.
mod components;
mod destination;
mod error;
#[cfg(feature = "glam")]
mod interop;
pub mod ops;
mod pair;
pub mod scalar;
mod source;
mod stream;
mod tolerance;

pub use components::{ComponentRead, ComponentWrite, FromComponents, SetComponents};
pub use destination::{BufferMut, Construct, Destination, IndexedMut, Then, array, construct};
pub use error::{Error, Result};
pub use ops::*;
pub use pair::{IndexValuePair, KeyValuePair};
pub use scalar::Scalar;
pub use source::{Buffer, Indexed, Source};
pub use stream::Stream;
pub use tolerance::Tolerance;
