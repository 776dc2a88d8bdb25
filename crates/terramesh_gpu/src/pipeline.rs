//! Compute pipelines for isosurface extraction
//!
//! One thread per cell classifies its corner samples and appends triangles
//! to a shared output buffer through an atomic counter. Both algorithms
//! share buffers and bind group layouts; only the shader differs.

use wgpu::util::DeviceExt;

use terramesh_core::tables::{CUBE_EDGE_TABLE, EDGE_TABLE, TRI_TABLE};
use terramesh_core::{Grid3D, Mesh, SurfaceAlgorithm, SurfaceParams, Vec3};

use crate::context::{GpuContext, GpuError};
use crate::types::{
    AtomicCounter, ComputeParams, GpuVertex, MAX_OUTPUT_TRIANGLES, TRIANGLE_VERTEX_COUNT,
};

/// Compute pipelines and buffers for GPU surface extraction
#[allow(dead_code)] // Fields hold GPU resources that must outlive bind groups
pub struct SurfaceCompute {
    /// One pipeline per algorithm
    cubes_pipeline: wgpu::ComputePipeline,
    tetrahedra_pipeline: wgpu::ComputePipeline,
    /// Bind group layout for field + output + counter + params
    bind_group_layout_main: wgpu::BindGroupLayout,
    /// Bind group layout for lookup tables
    bind_group_layout_tables: wgpu::BindGroupLayout,
    /// Lookup table buffers
    edge_table_buffer: wgpu::Buffer,
    tri_table_buffer: wgpu::Buffer,
    cube_edge_table_buffer: wgpu::Buffer,
    /// Bind group for lookup tables (created once)
    tables_bind_group: wgpu::BindGroup,
    /// Output buffer for triangle vertices
    output_buffer: wgpu::Buffer,
    /// Atomic counter buffer for triangle count
    counter_buffer: wgpu::Buffer,
    /// Staging buffers for CPU readback
    counter_staging_buffer: wgpu::Buffer,
    vertex_staging_buffer: wgpu::Buffer,
    /// Extraction parameters uniform buffer
    params_buffer: wgpu::Buffer,
    /// Input field buffer (recreated when the grid changes)
    field_buffer: Option<wgpu::Buffer>,
    cell_count: u32,
    /// Main bind group (recreated with the field buffer)
    main_bind_group: Option<wgpu::BindGroup>,
}

impl SurfaceCompute {
    /// Create the pipelines and static buffers
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout_main =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Extraction Main Bind Group Layout"),
                entries: &[
                    // Scalar field input (read-only storage)
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Storage { read_only: true },
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    // Output vertices (read-write storage)
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Storage { read_only: false },
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    // Atomic counter buffer
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Storage { read_only: false },
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    // Extraction parameters uniform
                    wgpu::BindGroupLayoutEntry {
                        binding: 3,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                ],
            });

        let table_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::COMPUTE,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only: true },
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        let bind_group_layout_tables =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Extraction Tables Bind Group Layout"),
                entries: &[table_entry(0), table_entry(1), table_entry(2)],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Extraction Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout_main, &bind_group_layout_tables],
            push_constant_ranges: &[],
        });

        let make_pipeline = |label: &str, source: &str| {
            let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(source.into()),
            });
            device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                module: &shader,
                entry_point: Some("main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                cache: None,
            })
        };
        let cubes_pipeline = make_pipeline(
            "Marching Cubes Pipeline",
            include_str!("shaders/marching_cubes.wgsl"),
        );
        let tetrahedra_pipeline = make_pipeline(
            "Marching Tetrahedra Pipeline",
            include_str!("shaders/marching_tetrahedra.wgsl"),
        );

        // Upload lookup tables
        let edge_table_data: Vec<u32> = EDGE_TABLE.iter().map(|&x| x as u32).collect();
        let edge_table_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Edge Table Buffer"),
            contents: bytemuck::cast_slice(&edge_table_data),
            usage: wgpu::BufferUsages::STORAGE,
        });

        // Flatten triangle table to i32 array
        let tri_table_data: Vec<i32> = TRI_TABLE
            .iter()
            .flat_map(|row| row.iter().map(|&x| x as i32))
            .collect();
        let tri_table_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Triangle Table Buffer"),
            contents: bytemuck::cast_slice(&tri_table_data),
            usage: wgpu::BufferUsages::STORAGE,
        });

        let cube_edge_table_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Extended Edge Table Buffer"),
            contents: bytemuck::cast_slice(&CUBE_EDGE_TABLE),
            usage: wgpu::BufferUsages::STORAGE,
        });

        let tables_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Extraction Tables Bind Group"),
            layout: &bind_group_layout_tables,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: edge_table_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: tri_table_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: cube_edge_table_buffer.as_entire_binding(),
                },
            ],
        });

        let output_size = (MAX_OUTPUT_TRIANGLES
            * TRIANGLE_VERTEX_COUNT
            * std::mem::size_of::<GpuVertex>()) as u64;
        let output_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Extraction Output Buffer"),
            size: output_size,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });

        let counter_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Extraction Counter Buffer"),
            size: std::mem::size_of::<AtomicCounter>() as u64,
            usage: wgpu::BufferUsages::STORAGE
                | wgpu::BufferUsages::COPY_DST
                | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });

        let counter_staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Counter Staging Buffer"),
            size: std::mem::size_of::<AtomicCounter>() as u64,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let vertex_staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Vertex Staging Buffer"),
            size: output_size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Extraction Params Buffer"),
            size: std::mem::size_of::<ComputeParams>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            cubes_pipeline,
            tetrahedra_pipeline,
            bind_group_layout_main,
            bind_group_layout_tables,
            edge_table_buffer,
            tri_table_buffer,
            cube_edge_table_buffer,
            tables_bind_group,
            output_buffer,
            counter_buffer,
            counter_staging_buffer,
            vertex_staging_buffer,
            params_buffer,
            field_buffer: None,
            cell_count: 0,
            main_bind_group: None,
        }
    }

    /// Upload the scalar field to the GPU
    pub fn upload_field(&mut self, device: &wgpu::Device, grid: &Grid3D<f32>) {
        self.cell_count =
            ((grid.size_x() - 1) * (grid.size_y() - 1) * (grid.size_z() - 1)) as u32;

        let field_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Field Buffer"),
            contents: bytemuck::cast_slice(grid.as_slice()),
            usage: wgpu::BufferUsages::STORAGE,
        });

        self.main_bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Extraction Main Bind Group"),
            layout: &self.bind_group_layout_main,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: field_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: self.output_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: self.counter_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: self.params_buffer.as_entire_binding(),
                },
            ],
        }));
        // Keep the buffer alive for the bind group's lifetime
        self.field_buffer = Some(field_buffer);
    }

    /// Update extraction parameters
    pub fn update_params(&self, queue: &wgpu::Queue, params: &ComputeParams) {
        queue.write_buffer(&self.params_buffer, 0, bytemuck::bytes_of(params));
    }

    /// Reset the triangle counter to zero
    pub fn reset_counter(&self, queue: &wgpu::Queue) {
        let zero = AtomicCounter { count: 0 };
        queue.write_buffer(&self.counter_buffer, 0, bytemuck::bytes_of(&zero));
    }

    /// Record the extraction compute pass, one thread per cell
    pub fn run_extraction_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        algorithm: SurfaceAlgorithm,
    ) {
        let Some(main_bind_group) = self.main_bind_group.as_ref() else {
            return;
        };
        if self.cell_count == 0 {
            return;
        }

        let mut compute_pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("Extraction Compute Pass"),
            timestamp_writes: None,
        });

        let pipeline = match algorithm {
            SurfaceAlgorithm::MarchingCubes => &self.cubes_pipeline,
            SurfaceAlgorithm::MarchingTetrahedra => &self.tetrahedra_pipeline,
        };
        compute_pass.set_pipeline(pipeline);
        compute_pass.set_bind_group(0, main_bind_group, &[]);
        compute_pass.set_bind_group(1, &self.tables_bind_group, &[]);

        // 64 threads per workgroup
        let workgroup_count = self.cell_count.div_ceil(64);
        compute_pass.dispatch_workgroups(workgroup_count, 1, 1);
    }

    /// Run a full extraction on the GPU and read the mesh back.
    ///
    /// Uploads the field, dispatches the selected shader, then maps the
    /// counter and vertex staging buffers. The returned mesh matches the
    /// CPU generators' output format: three fresh vertices per triangle.
    pub async fn generate(
        &mut self,
        context: &GpuContext,
        grid: &Grid3D<f32>,
        params: &SurfaceParams,
        algorithm: SurfaceAlgorithm,
    ) -> Result<Mesh, GpuError> {
        let device = &context.device;
        let queue = &context.queue;

        self.upload_field(device, grid);
        self.update_params(queue, &compute_params(grid, params));
        self.reset_counter(queue);

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Extraction Encoder"),
        });
        self.run_extraction_pass(&mut encoder, algorithm);
        encoder.copy_buffer_to_buffer(
            &self.counter_buffer,
            0,
            &self.counter_staging_buffer,
            0,
            std::mem::size_of::<AtomicCounter>() as u64,
        );
        queue.submit(Some(encoder.finish()));

        // Read the triangle count first, then copy only what was written
        let count = {
            let slice = self.counter_staging_buffer.slice(..);
            map_buffer(device, &slice)?;
            let data = slice.get_mapped_range();
            let counter: AtomicCounter = *bytemuck::from_bytes(&data);
            drop(data);
            self.counter_staging_buffer.unmap();
            counter.count
        };

        // The shader stops writing at capacity but keeps counting
        let triangle_count = (count as usize).min(MAX_OUTPUT_TRIANGLES);
        if count as usize > MAX_OUTPUT_TRIANGLES {
            log::warn!(
                "Extraction produced {count} triangles, truncated to {MAX_OUTPUT_TRIANGLES}"
            );
        }
        if triangle_count == 0 {
            return Ok(Mesh::new());
        }

        let byte_count = (triangle_count
            * TRIANGLE_VERTEX_COUNT
            * std::mem::size_of::<GpuVertex>()) as u64;
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Readback Encoder"),
        });
        encoder.copy_buffer_to_buffer(
            &self.output_buffer,
            0,
            &self.vertex_staging_buffer,
            0,
            byte_count,
        );
        queue.submit(Some(encoder.finish()));

        let positions = {
            let slice = self.vertex_staging_buffer.slice(..byte_count);
            map_buffer(device, &slice)?;
            let data = slice.get_mapped_range();
            let vertices: &[GpuVertex] = bytemuck::cast_slice(&data);
            let positions: Vec<Vec3> =
                vertices.iter().map(|v| Vec3::from(v.position)).collect();
            drop(data);
            self.vertex_staging_buffer.unmap();
            positions
        };

        Ok(Mesh::from_vertex_triplets(&positions))
    }
}

/// Pack grid dimensions and extraction parameters for the shaders
fn compute_params(grid: &Grid3D<f32>, params: &SurfaceParams) -> ComputeParams {
    ComputeParams {
        grid_size: [
            grid.size_x() as u32,
            grid.size_y() as u32,
            grid.size_z() as u32,
            0,
        ],
        cell_dimensions: [
            params.cell_dimensions.x,
            params.cell_dimensions.y,
            params.cell_dimensions.z,
            0.0,
        ],
        zero_offset: [
            params.zero_cell_offset.x,
            params.zero_cell_offset.y,
            params.zero_cell_offset.z,
            0.0,
        ],
        isovalue: params.isovalue,
        _padding: [0.0; 3],
    }
}

/// Map a staging buffer slice for reading, waiting for the device
fn map_buffer(device: &wgpu::Device, slice: &wgpu::BufferSlice<'_>) -> Result<(), GpuError> {
    let (tx, rx) = std::sync::mpsc::channel();
    slice.map_async(wgpu::MapMode::Read, move |result| {
        let _ = tx.send(result);
    });
    let _ = device.poll(wgpu::Maintain::Wait);
    match rx.recv() {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(GpuError::Readback(e.to_string())),
        Err(_) => Err(GpuError::Readback(
            "Mapping callback never completed".to_string(),
        )),
    }
}
