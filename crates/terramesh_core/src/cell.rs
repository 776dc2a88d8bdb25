//! Per-cell sampling shared by both generators

use terramesh_math::{IVec3, Vec3};

use crate::grid3d::Grid3D;
use crate::surface::SurfaceParams;
use crate::tables::CUBE_VERTEX_OFFSETS;

/// The 8 corner samples of one grid cell, in Bourke corner order
#[derive(Clone, Copy, Debug)]
pub struct GridCell {
    pub positions: [Vec3; 8],
    pub values: [f32; 8],
}

impl GridCell {
    /// Sample the cell whose minimum-index corner is `cell`. All 8 corners
    /// must lie inside the grid.
    pub fn from_grid(grid: &Grid3D<f32>, cell: IVec3, params: &SurfaceParams) -> Self {
        let mut positions = [Vec3::ZERO; 8];
        let mut values = [0.0_f32; 8];
        for (corner, &offset) in CUBE_VERTEX_OFFSETS.iter().enumerate() {
            let index = cell + offset;
            positions[corner] = params.zero_cell_offset
                + index.as_vec3().component_mul(params.cell_dimensions);
            values[corner] = grid.get_at(index);
        }
        Self { positions, values }
    }

    /// 8-bit configuration index: bit `i` is set when corner `i` lies above
    /// the isovalue. Values exactly equal to the isovalue count as outside.
    #[inline]
    pub fn config_index(&self, isovalue: f32) -> usize {
        let mut index = 0;
        for (corner, &value) in self.values.iter().enumerate() {
            if value > isovalue {
                index |= 1 << corner;
            }
        }
        index
    }
}

/// Locate the isovalue crossing on the segment between two samples.
///
/// When the two values are nearly identical the crossing position is
/// numerically meaningless; the first endpoint is returned unchanged.
#[inline]
pub fn interpolate_vertex(isovalue: f32, p1: Vec3, p2: Vec3, v1: f32, v2: f32) -> Vec3 {
    if (v2 - v1).abs() < 1e-5 {
        return p1;
    }
    let t = (isovalue - v1) / (v2 - v1);
    p1 + (p2 - p1) * t
}
