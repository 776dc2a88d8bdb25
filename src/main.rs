//! Terramesh - isosurface extraction from editable scalar fields
//!
//! Seeds a density grid from configuration, extracts its isosurface on the
//! CPU or GPU, optionally applies a brush edit and extracts again.

use rand::rngs::StdRng;
use rand::SeedableRng;

use terramesh::config::{AppConfig, FieldFill};
use terramesh_core::{field, generate_surface, Grid3D, Mesh, SurfaceParams, Vec3};
use terramesh_gpu::{GpuContext, SurfaceCompute};

fn main() {
    // Load configuration first so the log level can come from it
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.debug.log_level),
    )
    .init();
    log::info!("Starting terramesh");
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {e}. Using defaults.");
    }

    let mut grid = build_grid(&config);
    let params = config.surface.to_surface_params();

    let mesh = extract(&grid, &params, &config);
    log::info!(
        "Extracted {} triangles ({} vertices)",
        mesh.triangle_count(),
        mesh.vertex_count()
    );

    if config.brush.enabled {
        field::add_in_radius(
            &mut grid,
            Vec3::from(config.brush.center),
            Vec3::from(config.brush.radius),
            config.brush.amount,
        );
        let edited = extract(&grid, &params, &config);
        log::info!(
            "After brush edit: {} triangles ({} vertices)",
            edited.triangle_count(),
            edited.vertex_count()
        );
    }
}

/// Seed the density grid from the grid config section
fn build_grid(config: &AppConfig) -> Grid3D<f32> {
    let [sx, sy, sz] = config.grid.size;
    let mut grid = Grid3D::new(sx, sy, sz, 0.0_f32);
    match config.grid.fill {
        FieldFill::Radial => field::fill_radial(&mut grid),
        FieldFill::Sphere => {
            let center = Vec3::new(
                (sx - 1) as f32 / 2.0,
                (sy - 1) as f32 / 2.0,
                (sz - 1) as f32 / 2.0,
            );
            field::fill_sphere(&mut grid, center, config.grid.sphere_radius);
        }
        FieldFill::Random => {
            let [min, max] = config.grid.random_range;
            let mut rng = StdRng::seed_from_u64(config.grid.random_seed);
            field::fill_random(&mut grid, &mut rng, min..max);
        }
    }
    log::debug!("Seeded {sx}x{sy}x{sz} grid with {:?} fill", config.grid.fill);
    grid
}

/// Run one extraction, on the GPU when configured and available
fn extract(grid: &Grid3D<f32>, params: &SurfaceParams, config: &AppConfig) -> Mesh {
    let algorithm = config.surface.algorithm;
    if config.surface.use_gpu {
        let result = pollster::block_on(async {
            let context = GpuContext::new().await?;
            let mut compute = SurfaceCompute::new(&context.device);
            compute.generate(&context, grid, params, algorithm).await
        });
        match result {
            Ok(mesh) => return mesh,
            Err(e) => {
                log::warn!("GPU extraction unavailable ({e}), falling back to CPU");
            }
        }
    }
    generate_surface(grid, params, algorithm)
}
