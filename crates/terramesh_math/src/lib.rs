//! Math types for the terramesh isosurface toolkit
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`IVec3`] - integer vector used for grid coordinates

mod ivec3;
mod vec3;

pub use ivec3::IVec3;
pub use vec3::Vec3;
