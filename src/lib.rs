//! LumaPath path tracer
//!
//! A minimal offline path tracer: spheres with diffuse, metallic, and
//! dielectric materials, rendered through a thin-lens camera to ASCII PPM.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod hittable;
pub mod interval;
pub mod material;
pub mod output;
pub mod random;
pub mod ray;
pub mod sphere;
