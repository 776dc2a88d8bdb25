//! GPU-accelerated isosurface extraction
//!
//! Mirrors the CPU generators in `terramesh_core` with wgpu compute
//! shaders: same tables, same interpolation, same output format. Intended
//! for large grids where the per-cell work dominates.

pub mod context;
pub mod pipeline;
pub mod types;

pub use context::{GpuContext, GpuError};
pub use pipeline::SurfaceCompute;

use terramesh_core::{Grid3D, Mesh, SurfaceAlgorithm, SurfaceParams};

/// Run a full GPU extraction on a worker thread and hand the result to
/// `callback` when it completes.
///
/// The callback is invoked exactly once, with an error if no adapter is
/// available or readback fails. Callers that want a fallback run the CPU
/// generator from the error arm.
pub fn generate_with_callback<F>(
    grid: Grid3D<f32>,
    params: SurfaceParams,
    algorithm: SurfaceAlgorithm,
    callback: F,
) where
    F: FnOnce(Result<Mesh, GpuError>) + Send + 'static,
{
    std::thread::spawn(move || {
        let result = pollster::block_on(async {
            let context = GpuContext::new().await?;
            let mut compute = SurfaceCompute::new(&context.device);
            compute.generate(&context, &grid, &params, algorithm).await
        });
        callback(result);
    });
}
