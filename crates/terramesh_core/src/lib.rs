//! Isosurface extraction core
//!
//! Extracts a triangle mesh from a regular 3D scalar field at a given
//! isovalue, using either of two classic polygonization algorithms.
//!
//! ## Core Types
//!
//! - [`Grid3D`] - dense 3D scalar field storage
//! - [`Mesh`] - append-only vertex/triangle accumulator
//! - [`SurfaceParams`] - isovalue plus cell geometry
//! - [`SurfaceAlgorithm`] - marching cubes or marching tetrahedra
//!
//! ## Entry Point
//!
//! [`generate_surface`] runs the selected algorithm over a grid and returns
//! an owned mesh. The grid is read-only during a pass; callers must not
//! mutate it until the pass returns.

pub mod cell;
pub mod field;
pub mod grid3d;
pub mod marching_cubes;
pub mod marching_tetrahedra;
pub mod mesh;
pub mod surface;
pub mod tables;

pub use grid3d::Grid3D;
pub use mesh::Mesh;
pub use surface::{generate_surface, SurfaceAlgorithm, SurfaceParams};

// Re-export the math types used throughout the public API
pub use terramesh_math::{IVec3, Vec3};
