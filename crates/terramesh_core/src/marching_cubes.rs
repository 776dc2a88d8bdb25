//! Marching cubes polygonization
//!
//! Classic table-driven extraction: each cell's 8 corner samples select a
//! configuration, the edge table says which of the 12 cube edges the surface
//! crosses, and the triangle table stitches the crossing points into up to
//! 5 triangles.

use terramesh_math::{IVec3, Vec3};

use crate::cell::{interpolate_vertex, GridCell};
use crate::grid3d::Grid3D;
use crate::mesh::Mesh;
use crate::surface::SurfaceParams;
use crate::tables::{EDGE_TABLE, TRI_TABLE, VERTICES_ON_EDGE};

/// Run marching cubes over the whole grid, appending to `mesh`
pub fn generate(grid: &Grid3D<f32>, params: &SurfaceParams, mesh: &mut Mesh) {
    for z in 0..grid.size_z() - 1 {
        for y in 0..grid.size_y() - 1 {
            for x in 0..grid.size_x() - 1 {
                polygonize_cell(grid, IVec3::new(x, y, z), params, mesh);
            }
        }
    }
}

fn polygonize_cell(grid: &Grid3D<f32>, coords: IVec3, params: &SurfaceParams, mesh: &mut Mesh) {
    let cell = GridCell::from_grid(grid, coords, params);
    let config = cell.config_index(params.isovalue);
    let crossed = EDGE_TABLE[config];
    if crossed == 0 {
        return;
    }

    // Interpolate only the crossed edges
    let mut edge_vertices = [Vec3::ZERO; 12];
    for (edge, vertex) in edge_vertices.iter_mut().enumerate() {
        if crossed & (1 << edge) != 0 {
            let [a, b] = VERTICES_ON_EDGE[edge];
            *vertex = interpolate_vertex(
                params.isovalue,
                cell.positions[a],
                cell.positions[b],
                cell.values[a],
                cell.values[b],
            );
        }
    }

    let strip = &TRI_TABLE[config];
    let mut i = 0;
    while strip[i] != -1 {
        mesh.append_triangle_vertices(
            edge_vertices[strip[i] as usize],
            edge_vertices[strip[i + 1] as usize],
            edge_vertices[strip[i + 2] as usize],
        );
        i += 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(isovalue: f32) -> SurfaceParams {
        SurfaceParams {
            isovalue,
            cell_dimensions: Vec3::ONE,
            zero_cell_offset: Vec3::ZERO,
        }
    }

    fn run(grid: &Grid3D<f32>, isovalue: f32) -> Mesh {
        let mut mesh = Mesh::new();
        generate(grid, &params(isovalue), &mut mesh);
        mesh
    }

    #[test]
    fn test_uniform_field_yields_no_triangles() {
        let below = Grid3D::new(4, 4, 4, -1.0_f32);
        let above = Grid3D::new(4, 4, 4, 1.0_f32);
        assert!(run(&below, 0.0).is_empty());
        assert!(run(&above, 0.0).is_empty());
    }

    #[test]
    fn test_field_equal_to_isovalue_yields_no_triangles() {
        // Samples exactly at the isovalue count as outside
        let grid = Grid3D::new(4, 4, 4, 0.0_f32);
        assert!(run(&grid, 0.0).is_empty());
    }

    #[test]
    fn test_single_corner_above_yields_one_triangle() {
        let mut grid = Grid3D::new(2, 2, 2, -1.0_f32);
        grid.set(0, 0, 0, 1.0);
        let mesh = run(&grid, 0.0);
        assert_eq!(mesh.triangle_count(), 1);
        // Midpoints of the three edges meeting at the origin corner
        let vertices = mesh.vertices();
        let expected = [
            Vec3::new(0.5, 0.0, 0.0),
            Vec3::new(0.0, 0.5, 0.0),
            Vec3::new(0.0, 0.0, 0.5),
        ];
        for e in expected {
            assert!(
                vertices.iter().any(|v| v.distance(e) < 1e-6),
                "Missing vertex {e:?}"
            );
        }
    }

    #[test]
    fn test_epsilon_crossing_still_emits() {
        // An arbitrarily small sign change across a cell still polygonizes
        let mut grid = Grid3D::new(2, 2, 2, -1e-7_f32);
        grid.set(0, 0, 0, 1e-7);
        let mesh = run(&grid, 0.0);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_horizontal_slab_crossing_at_half() {
        // 2x2x2 grid, bottom layer below, top layer above: the surface is
        // the plane z = 0.5 triangulated as one quad
        let mut grid = Grid3D::new(2, 2, 2, -1.0_f32);
        for y in 0..2 {
            for x in 0..2 {
                grid.set(x, y, 1, 1.0);
            }
        }
        let mesh = run(&grid, 0.0);
        assert_eq!(mesh.triangle_count(), 2);
        for v in mesh.vertices() {
            assert!((v.z - 0.5).abs() < 1e-6, "Vertex off plane: {v:?}");
        }
    }

    #[test]
    fn test_interpolation_respects_isovalue() {
        // Crossing between -1 and 3 at isovalue 0 sits a quarter along
        let mut grid = Grid3D::new(2, 2, 2, -1.0_f32);
        for y in 0..2 {
            for x in 0..2 {
                grid.set(x, y, 1, 3.0);
            }
        }
        let mesh = run(&grid, 0.0);
        for v in mesh.vertices() {
            assert!((v.z - 0.25).abs() < 1e-6, "Vertex off plane: {v:?}");
        }
    }

    #[test]
    fn test_no_vertex_sharing() {
        let mut grid = Grid3D::new(2, 2, 2, -1.0_f32);
        grid.set(0, 0, 0, 1.0);
        grid.set(1, 1, 1, 1.0);
        let mesh = run(&grid, 0.0);
        assert_eq!(mesh.vertex_count(), mesh.triangle_count() * 3);
    }

    #[test]
    fn test_cell_dimensions_scale_output() {
        let mut grid = Grid3D::new(2, 2, 2, -1.0_f32);
        for y in 0..2 {
            for x in 0..2 {
                grid.set(x, y, 1, 1.0);
            }
        }
        let p = SurfaceParams {
            isovalue: 0.0,
            cell_dimensions: Vec3::new(1.0, 1.0, 10.0),
            zero_cell_offset: Vec3::ZERO,
        };
        let mut mesh = Mesh::new();
        generate(&grid, &p, &mut mesh);
        // Crossing at index z = 0.5, scaled by the cell height
        for v in mesh.vertices() {
            assert!((v.z - 5.0).abs() < 1e-5, "Vertex off plane: {v:?}");
        }
    }

    #[test]
    fn test_zero_cell_offset_translates_output() {
        // The offset is the world position of grid index (0, 0, 0), so a
        // crossing at index z = 0.5 with unit cells lands at world z = 10.5
        let mut grid = Grid3D::new(2, 2, 2, -1.0_f32);
        for y in 0..2 {
            for x in 0..2 {
                grid.set(x, y, 1, 1.0);
            }
        }
        let p = SurfaceParams {
            isovalue: 0.0,
            cell_dimensions: Vec3::ONE,
            zero_cell_offset: Vec3::new(0.0, 0.0, 10.0),
        };
        let mut mesh = Mesh::new();
        generate(&grid, &p, &mut mesh);
        assert!(!mesh.is_empty());
        for v in mesh.vertices() {
            assert!((v.z - 10.5).abs() < 1e-5, "Vertex off plane: {v:?}");
        }
    }
}
