//! Terramesh - isosurface extraction from editable scalar fields
//!
//! Builds triangle meshes from dense 3D density grids with marching cubes
//! or marching tetrahedra, on the CPU or through wgpu compute shaders.

pub mod config;

pub use terramesh_core::{
    field, generate_surface, Grid3D, IVec3, Mesh, SurfaceAlgorithm, SurfaceParams, Vec3,
};
