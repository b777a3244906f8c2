//! Operand impls for glam's vector types.
//!
//! With the `glam` feature, `Vec2`, `Vec3`, `DVec2` and `DVec3` work as
//! sources, as `&mut` destinations and with [`construct`](crate::construct).
crate::impl_components!(glam::Vec2, f32, 2, [x, y]);
crate::impl_components!(glam::Vec3, f32, 3, [x, y, z]);
crate::impl_components!(glam::DVec2, f64, 2, [x, y]);
crate::impl_components!(glam::DVec3, f64, 3, [x, y, z]);
