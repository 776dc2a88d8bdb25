//! GPU-compatible data types for the extraction pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A vertex produced by the extraction compute shader
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct GpuVertex {
    /// Position in world space
    pub position: [f32; 3],
    /// Padding to align to 16 bytes
    pub _padding: f32,
}

/// Parameters for the extraction compute shaders.
/// Layout: 64 bytes total (must match the Params struct in both shaders).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ComputeParams {
    /// Grid sample counts per axis, fourth component unused
    pub grid_size: [u32; 4],
    /// World-space cell size per axis, fourth component unused
    pub cell_dimensions: [f32; 4],
    /// World position of grid index (0, 0, 0), fourth component unused
    pub zero_offset: [f32; 4],
    /// Samples strictly above this value are inside the surface
    pub isovalue: f32,
    /// Padding for 16-byte alignment
    pub _padding: [f32; 3],
}

impl Default for ComputeParams {
    fn default() -> Self {
        Self {
            grid_size: [0; 4],
            cell_dimensions: [1.0, 1.0, 1.0, 0.0],
            zero_offset: [0.0; 4],
            isovalue: 0.0,
            _padding: [0.0; 3],
        }
    }
}

/// Atomic counter for triangle output
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct AtomicCounter {
    pub count: u32,
}

/// Maximum number of output triangles from the compute shader
pub const MAX_OUTPUT_TRIANGLES: usize = 400_000;

/// Size of a single triangle in GpuVertex units (3 vertices)
pub const TRIANGLE_VERTEX_COUNT: usize = 3;
