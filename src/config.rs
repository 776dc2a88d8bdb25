//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TM_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use terramesh_core::{SurfaceAlgorithm, SurfaceParams, Vec3};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Grid configuration
    #[serde(default)]
    pub grid: GridConfig,
    /// Surface extraction configuration
    #[serde(default)]
    pub surface: SurfaceConfig,
    /// Brush edit configuration
    #[serde(default)]
    pub brush: BrushConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // TM_SURFACE__ISOVALUE=0.5 -> surface.isovalue = 0.5
        figment = figment.merge(Env::prefixed("TM_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// How the density grid is seeded before extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFill {
    /// Negated distance from the grid origin
    #[default]
    Radial,
    /// Signed sphere centered in the grid
    Sphere,
    /// Uniform random samples
    Random,
}

/// Grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Sample counts per axis [x, y, z]
    pub size: [i32; 3],
    /// Initial field contents
    pub fill: FieldFill,
    /// Sphere radius for the sphere fill, in grid cells
    pub sphere_radius: f32,
    /// Seed for the random fill
    pub random_seed: u64,
    /// Value range for the random fill [min, max]
    pub random_range: [f32; 2],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: [32, 32, 32],
            fill: FieldFill::Radial,
            sphere_radius: 10.0,
            random_seed: 0,
            random_range: [-1.0, 1.0],
        }
    }
}

/// Surface extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Extraction algorithm (marching_cubes, marching_tetrahedra)
    pub algorithm: SurfaceAlgorithm,
    /// Samples strictly above this value are inside the surface
    pub isovalue: f32,
    /// World-space cell size per axis
    pub cell_dimensions: [f32; 3],
    /// World position of grid index (0, 0, 0)
    pub zero_cell_offset: [f32; 3],
    /// Run the wgpu compute path, falling back to the CPU on failure
    pub use_gpu: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            algorithm: SurfaceAlgorithm::MarchingCubes,
            isovalue: -8.0,
            cell_dimensions: [1.0, 1.0, 1.0],
            zero_cell_offset: [0.0, 0.0, 0.0],
            use_gpu: false,
        }
    }
}

impl SurfaceConfig {
    /// The extraction parameters described by this section
    pub fn to_surface_params(&self) -> SurfaceParams {
        SurfaceParams {
            isovalue: self.isovalue,
            cell_dimensions: Vec3::from(self.cell_dimensions),
            zero_cell_offset: Vec3::from(self.zero_cell_offset),
        }
    }
}

/// Brush edit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrushConfig {
    /// Apply one brush edit after the first extraction
    pub enabled: bool,
    /// Brush center in grid index space
    pub center: [f32; 3],
    /// Per-axis brush radius in grid cells
    pub radius: [f32; 3],
    /// Value added to every sample inside the brush
    pub amount: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            center: [16.0, 16.0, 16.0],
            radius: [4.0, 4.0, 4.0],
            amount: 5.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
