//! Marching tetrahedra polygonization
//!
//! Each cell is split into 6 tetrahedra whose face diagonals line up with
//! the neighbouring cells' decomposition, so the output is watertight
//! across cell boundaries. Crossing points live on the 19 extended cell
//! edges and are interpolated once per cell, then shared by all 6
//! tetrahedra.

use terramesh_math::{IVec3, Vec3};

use crate::cell::{interpolate_vertex, GridCell};
use crate::grid3d::Grid3D;
use crate::mesh::Mesh;
use crate::surface::SurfaceParams;
use crate::tables::{
    CUBE_EDGE_TABLE, CUBE_VERTEX_PAIR_TO_EDGE, CUBE_VERTICES_ON_EDGE, TETRAHEDRON_LIST,
    TETRA_TRI_TABLE, TETRA_VERTICES_ON_EDGE,
};

/// Run marching tetrahedra over the whole grid, appending to `mesh`
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
    let crossed = CUBE_EDGE_TABLE[config];
    if crossed == 0 {
        return;
    }

    // One interpolation per crossed extended edge, reused by every
    // tetrahedron that touches it
    let mut edge_vertices = [Vec3::ZERO; 19];
    for (edge, vertex) in edge_vertices.iter_mut().enumerate() {
        if crossed & (1 << edge) != 0 {
            let [a, b] = CUBE_VERTICES_ON_EDGE[edge];
            *vertex = interpolate_vertex(
                params.isovalue,
                cell.positions[a],
                cell.positions[b],
                cell.values[a],
                cell.values[b],
            );
        }
    }

    for corners in &TETRAHEDRON_LIST {
        polygonize_tetrahedron(&cell, corners, params.isovalue, &edge_vertices, mesh);
    }
}

fn polygonize_tetrahedron(
    cell: &GridCell,
    corners: &[usize; 4],
    isovalue: f32,
    edge_vertices: &[Vec3; 19],
    mesh: &mut Mesh,
) {
    let mut config = 0;
    for (bit, &corner) in corners.iter().enumerate() {
        if cell.values[corner] > isovalue {
            config |= 1 << bit;
        }
    }

    let strip = &TETRA_TRI_TABLE[config];
    if strip[0] == -1 {
        return;
    }

    let a = cached_vertex(corners, strip[0], edge_vertices);
    let b = cached_vertex(corners, strip[1], edge_vertices);
    let c = cached_vertex(corners, strip[2], edge_vertices);
    mesh.append_triangle_vertices(a, b, c);

    // Quad configurations carry a fourth edge; the second triangle winds
    // in reverse so both face the same way
    if strip[3] != -1 {
        let d = cached_vertex(corners, strip[3], edge_vertices);
        mesh.append_triangle_vertices(d, c, b);
    }
}

/// Translate a tetrahedron-local edge into the cell's extended edge and
/// fetch its interpolated crossing point
#[inline]
fn cached_vertex(corners: &[usize; 4], local_edge: i8, edge_vertices: &[Vec3; 19]) -> Vec3 {
    let [a, b] = TETRA_VERTICES_ON_EDGE[local_edge as usize];
    let edge = CUBE_VERTEX_PAIR_TO_EDGE[corners[a]][corners[b]];
    if edge < 0 {
        panic!(
            "Tetrahedron corner pair ({}, {}) does not lie on a cell edge",
            corners[a], corners[b]
        );
    }
    edge_vertices[edge as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

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

    fn sphere_grid(size: i32, radius: f32) -> Grid3D<f32> {
        let mut grid = Grid3D::new(size, size, size, 0.0_f32);
        let center = (size - 1) as f32 / 2.0;
        for z in 0..size {
            for y in 0..size {
                for x in 0..size {
                    let d = Vec3::new(x as f32 - center, y as f32 - center, z as f32 - center)
                        .length();
                    grid.set(x, y, z, radius - d);
                }
            }
        }
        grid
    }

    fn quantize(v: Vec3) -> [i64; 3] {
        [
            (v.x as f64 * 16384.0).round() as i64,
            (v.y as f64 * 16384.0).round() as i64,
            (v.z as f64 * 16384.0).round() as i64,
        ]
    }

    #[test]
    fn test_uniform_field_yields_no_triangles() {
        let below = Grid3D::new(4, 4, 4, -1.0_f32);
        let above = Grid3D::new(4, 4, 4, 1.0_f32);
        assert!(run(&below, 0.0).is_empty());
        assert!(run(&above, 0.0).is_empty());
    }

    #[test]
    fn test_single_corner_emits() {
        let mut grid = Grid3D::new(2, 2, 2, -1.0_f32);
        grid.set(0, 0, 0, 1.0);
        let mesh = run(&grid, 0.0);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_no_vertex_sharing() {
        let mesh = run(&sphere_grid(6, 2.0), 0.0);
        assert_eq!(mesh.vertex_count(), mesh.triangle_count() * 3);
    }

    #[test]
    fn test_slab_crossing_on_plane() {
        let mut grid = Grid3D::new(3, 3, 2, -1.0_f32);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, 1, 1.0);
            }
        }
        let mesh = run(&grid, 0.0);
        assert!(!mesh.is_empty());
        for v in mesh.vertices() {
            assert!((v.z - 0.5).abs() < 1e-6, "Vertex off plane: {v:?}");
        }
    }

    #[test]
    fn test_zero_cell_offset_translates_output() {
        let mut grid = Grid3D::new(3, 3, 2, -1.0_f32);
        for y in 0..3 {
            for x in 0..3 {
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

    #[test]
    fn test_sphere_is_watertight() {
        // Every triangle edge of a closed surface must be shared by
        // exactly two triangles
        let mesh = run(&sphere_grid(8, 2.5), 0.0);
        assert!(mesh.triangle_count() > 50);

        let mut edge_counts: HashMap<([i64; 3], [i64; 3]), u32> = HashMap::new();
        for tri in mesh.triangles() {
            let p: Vec<[i64; 3]> = tri
                .iter()
                .map(|&i| quantize(mesh.vertices()[i as usize]))
                .collect();
            for (a, b) in [(0, 1), (1, 2), (2, 0)] {
                let key = if p[a] <= p[b] { (p[a], p[b]) } else { (p[b], p[a]) };
                *edge_counts.entry(key).or_insert(0) += 1;
            }
        }
        for (edge, count) in &edge_counts {
            assert_eq!(*count, 2, "Edge {edge:?} shared by {count} triangles");
        }
    }

    #[test]
    fn test_sphere_winding_is_consistent() {
        // Signed volume via the divergence theorem only approximates the
        // sphere when every triangle faces the same way
        let radius = 2.5_f32;
        let mesh = run(&sphere_grid(8, radius), 0.0);
        let mut signed = 0.0_f64;
        for tri in mesh.triangles() {
            let a = mesh.vertices()[tri[0] as usize];
            let b = mesh.vertices()[tri[1] as usize];
            let c = mesh.vertices()[tri[2] as usize];
            signed += (a.dot(b.cross(c)) / 6.0) as f64;
        }
        let expected = 4.0 / 3.0 * std::f64::consts::PI * (radius as f64).powi(3);
        let ratio = signed.abs() / expected;
        assert!(
            (0.5..1.5).contains(&ratio),
            "Signed volume {signed} vs sphere volume {expected}"
        );
    }

    #[test]
    fn test_quad_configuration_emits_two_triangles() {
        // Two adjacent corners above the isovalue cut at least one
        // tetrahedron through a quad configuration
        let mut grid = Grid3D::new(2, 2, 2, -1.0_f32);
        grid.set(0, 0, 0, 1.0);
        grid.set(1, 0, 0, 1.0);
        let mesh = run(&grid, 0.0);
        assert!(mesh.triangle_count() >= 2);
    }
}
