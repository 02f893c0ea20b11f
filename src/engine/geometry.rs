use std::f32::consts::{PI, TAU};

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 24,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

/// Parametric shape description; tessellated on demand by [`Geometry::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    /// Flat annulus in the XY plane facing +Z.
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        theta_segments: u32,
    },
}

impl Geometry {
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self::Sphere {
            radius,
            width_segments: width_segments.max(3),
            height_segments: height_segments.max(2),
        }
    }

    pub fn ring(inner_radius: f32, outer_radius: f32, theta_segments: u32) -> Self {
        Self::Ring {
            inner_radius,
            outer_radius,
            theta_segments: theta_segments.max(3),
        }
    }

    pub fn build(&self) -> MeshData {
        match *self {
            Self::Sphere {
                radius,
                width_segments,
                height_segments,
            } => build_sphere(radius, width_segments, height_segments),
            Self::Ring {
                inner_radius,
                outer_radius,
                theta_segments,
            } => build_ring(inner_radius, outer_radius, theta_segments),
        }
    }
}

// UVs use a top-left texel origin, so v runs from 0 at the north pole to 1 at the south.
fn build_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let columns = width_segments as usize + 1;
    let mut vertices = Vec::with_capacity(columns * (height_segments as usize + 1));

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        // Pole vertices sit half a segment over so their triangles sample mid-column.
        let u_offset = if iy == 0 {
            0.5 / width_segments as f32
        } else if iy == height_segments {
            -0.5 / width_segments as f32
        } else {
            0.0
        };

        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let phi = u * TAU;
            let theta = v * PI;
            let position = Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            );
            let normal = position.normalize_or_zero();
            vertices.push(MeshVertex {
                position: position.to_array(),
                normal: normal.to_array(),
                uv: [u + u_offset, v],
            });
        }
    }

    let mut indices = Vec::new();
    let at = |iy: u32, ix: u32| iy * columns as u32 + ix;
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = at(iy, ix + 1);
            let b = at(iy, ix);
            let c = at(iy + 1, ix);
            let d = at(iy + 1, ix + 1);
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

fn build_ring(inner_radius: f32, outer_radius: f32, theta_segments: u32) -> MeshData {
    let columns = theta_segments + 1;
    let mut vertices = Vec::with_capacity(2 * columns as usize);

    for radius in [inner_radius, outer_radius] {
        for i in 0..=theta_segments {
            let angle = i as f32 / theta_segments as f32 * TAU;
            let x = radius * angle.cos();
            let y = radius * angle.sin();
            vertices.push(MeshVertex {
                position: [x, y, 0.0],
                normal: [0.0, 0.0, 1.0],
                uv: [
                    (x / outer_radius + 1.0) * 0.5,
                    1.0 - (y / outer_radius + 1.0) * 0.5,
                ],
            });
        }
    }

    let mut indices = Vec::with_capacity(theta_segments as usize * 6);
    for i in 0..theta_segments {
        let a = i;
        let b = i + columns;
        let c = i + columns + 1;
        let d = i + 1;
        indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    MeshData { vertices, indices }
}
