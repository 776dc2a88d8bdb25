//! GPU device acquisition

use std::fmt;

/// Errors raised while acquiring the GPU or reading results back
#[derive(Debug)]
pub enum GpuError {
    /// No suitable adapter was found on this machine
    AdapterUnavailable,
    /// The adapter refused the device request
    DeviceRequest(wgpu::RequestDeviceError),
    /// Mapping a staging buffer for readback failed
    Readback(String),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::AdapterUnavailable => {
                write!(f, "No compatible GPU adapter available")
            }
            GpuError::DeviceRequest(e) => {
                write!(f, "Failed to acquire GPU device: {e}")
            }
            GpuError::Readback(e) => {
                write!(f, "Failed to read results back from the GPU: {e}")
            }
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::AdapterUnavailable => None,
            GpuError::DeviceRequest(e) => Some(e),
            GpuError::Readback(_) => None,
        }
    }
}

/// Owns the wgpu device and queue used by the extraction pipelines
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    /// Acquire a device suitable for headless compute work
    pub async fn new() -> Result<Self, GpuError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::AdapterUnavailable)?;

        log::info!("Using GPU adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Surface Extraction Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(GpuError::DeviceRequest)?;

        Ok(Self { device, queue })
    }
}
