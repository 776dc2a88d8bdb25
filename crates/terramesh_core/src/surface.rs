//! Surface generation entry point

use std::time::Instant;

use serde::{Deserialize, Serialize};
use terramesh_math::Vec3;

use crate::grid3d::Grid3D;
use crate::mesh::Mesh;
use crate::{marching_cubes, marching_tetrahedra};

/// Which polygonization algorithm to run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceAlgorithm {
    #[default]
    MarchingCubes,
    MarchingTetrahedra,
}

/// Isovalue and cell geometry for one extraction pass
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceParams {
    /// Samples strictly above this value are inside the surface
    pub isovalue: f32,
    /// World-space size of one cell along each axis
    pub cell_dimensions: Vec3,
    /// World position of grid index (0, 0, 0)
    pub zero_cell_offset: Vec3,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            isovalue: 0.0,
            cell_dimensions: Vec3::ONE,
            zero_cell_offset: Vec3::ZERO,
        }
    }
}

/// Extract the isosurface of `grid` and return it as an owned mesh.
///
/// The grid is only read; two passes over the same samples with the same
/// parameters produce identical meshes.
pub fn generate_surface(
    grid: &Grid3D<f32>,
    params: &SurfaceParams,
    algorithm: SurfaceAlgorithm,
) -> Mesh {
    let start = Instant::now();
    let mut mesh = Mesh::new();
    match algorithm {
        SurfaceAlgorithm::MarchingCubes => marching_cubes::generate(grid, params, &mut mesh),
        SurfaceAlgorithm::MarchingTetrahedra => {
            marching_tetrahedra::generate(grid, params, &mut mesh)
        }
    }
    log::debug!(
        "{:?} extracted {} triangles from {}x{}x{} grid in {:?}",
        algorithm,
        mesh.triangle_count(),
        grid.size_x(),
        grid.size_y(),
        grid.size_z(),
        start.elapsed()
    );
    mesh
}
