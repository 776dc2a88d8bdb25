//! Triangle mesh accumulator
//!
//! Generators append vertices and index triples as they sweep the grid; the
//! finished mesh is handed to the caller by value. No welding or
//! deduplication happens here, every emitted corner is a fresh vertex.

use terramesh_math::Vec3;

/// Append-only triangle mesh
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and return its index
    #[inline]
    pub fn append_vertex(&mut self, position: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Append a triangle by vertex indices.
    ///
    /// # Panics
    /// Panics if any index does not refer to an existing vertex.
    #[inline]
    pub fn append_triangle(&mut self, a: u32, b: u32, c: u32) {
        let count = self.vertices.len() as u32;
        assert!(
            a < count && b < count && c < count,
            "Triangle ({a}, {b}, {c}) references a vertex beyond {count}"
        );
        self.triangles.push([a, b, c]);
    }

    /// Append three fresh vertices forming one triangle
    #[inline]
    pub fn append_triangle_vertices(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let ia = self.append_vertex(a);
        let ib = self.append_vertex(b);
        let ic = self.append_vertex(c);
        self.triangles.push([ia, ib, ic]);
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Build a mesh from a flat list of vertex positions, three per
    /// triangle, as produced by the accelerated compute path
    pub fn from_vertex_triplets(positions: &[Vec3]) -> Self {
        assert_eq!(
            positions.len() % 3,
            0,
            "Vertex triplet list length {} is not a multiple of 3",
            positions.len()
        );
        let mut mesh = Self::new();
        for triangle in positions.chunks_exact(3) {
            mesh.append_triangle_vertices(triangle[0], triangle[1], triangle[2]);
        }
        mesh
    }
}
