use crate::core::geometry::{box_mesh, triangle_edge_indices, uv_sphere_mesh, MeshData};
use crate::core::constants::{
    BAR_WIDTH, WAVE_POINT_RADIUS, WAVE_POINT_SEGMENTS,
};
use crate::core::GeometrySet;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) light_dir: [f32; 4],
    pub(crate) light_color: [f32; 4],
    pub(crate) fog: [f32; 4],
    pub(crate) wire_color: [f32; 4],
    pub(crate) params: [f32; 4],
}

/// Position + normal, shared by the static meshes and the wire sphere.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LitVertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshInstance {
    pub(crate) offset_scale: [f32; 4],
    pub(crate) color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointInstance {
    pub(crate) position: [f32; 4],
    pub(crate) color: [f32; 4],
}

const LIT_VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const MESH_INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![2 => Float32x4, 3 => Float32x4];
const POINT_INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

pub(crate) fn lit_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LitVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &LIT_VERTEX_ATTRS,
    }
}

pub(crate) fn mesh_instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &MESH_INSTANCE_ATTRS,
    }
}

pub(crate) fn point_instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PointInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &POINT_INSTANCE_ATTRS,
    }
}

/// Static indexed mesh uploaded once.
pub(crate) struct StaticMesh {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) indices: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl StaticMesh {
    fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let verts: Vec<LitVertex> = mesh
            .positions
            .iter()
            .zip(mesh.normals.iter())
            .map(|(p, n)| LitVertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect();
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&verts),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices,
            indices,
            index_count: mesh.indices.len() as u32,
        }
    }
}

/// The box used for bars and the small sphere used for wave points.
pub(crate) struct SharedMeshes {
    pub(crate) bar: StaticMesh,
    pub(crate) wave_point: StaticMesh,
}

impl SharedMeshes {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        Self {
            bar: StaticMesh::upload(device, "bar_mesh", &box_mesh(BAR_WIDTH, 1.0, BAR_WIDTH)),
            wave_point: StaticMesh::upload(
                device,
                "wave_point_mesh",
                &uv_sphere_mesh(WAVE_POINT_RADIUS, WAVE_POINT_SEGMENTS, WAVE_POINT_SEGMENTS),
            ),
        }
    }
}

/// GPU buffers for whichever geometry set is live. Replaced wholesale when
/// the scene rebuilds; dropping the old value releases its buffers.
pub(crate) enum ModeBuffers {
    Bars { instances: wgpu::Buffer, count: u32 },
    Wave { instances: wgpu::Buffer, count: u32 },
    Particles { instances: wgpu::Buffer, count: u32 },
    Sphere { vertices: wgpu::Buffer, edges: wgpu::Buffer, edge_index_count: u32 },
}

fn dynamic_buffer(device: &wgpu::Device, label: &str, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: size.max(16),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl ModeBuffers {
    pub(crate) fn for_geometry(device: &wgpu::Device, geometry: &GeometrySet) -> Self {
        let inst = std::mem::size_of::<MeshInstance>() as u64;
        match geometry {
            GeometrySet::Bars(bars) => ModeBuffers::Bars {
                instances: dynamic_buffer(device, "bar_instances", inst * bars.len() as u64),
                count: bars.len() as u32,
            },
            GeometrySet::Wave(points) => ModeBuffers::Wave {
                instances: dynamic_buffer(device, "wave_instances", inst * points.len() as u64),
                count: points.len() as u32,
            },
            GeometrySet::Particles(cloud) => {
                let size = std::mem::size_of::<PointInstance>() as u64;
                ModeBuffers::Particles {
                    instances: dynamic_buffer(
                        device,
                        "particle_instances",
                        size * cloud.positions.len() as u64,
                    ),
                    count: cloud.positions.len() as u32,
                }
            }
            GeometrySet::Sphere(sphere) => {
                let size = std::mem::size_of::<LitVertex>() as u64;
                let edges = triangle_edge_indices(sphere.positions.len());
                ModeBuffers::Sphere {
                    vertices: dynamic_buffer(
                        device,
                        "sphere_vertices",
                        size * sphere.positions.len() as u64,
                    ),
                    edges: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("sphere_edges"),
                        contents: bytemuck::cast_slice(&edges),
                        usage: wgpu::BufferUsages::INDEX,
                    }),
                    edge_index_count: edges.len() as u32,
                }
            }
        }
    }
}

/// Reusable CPU staging for per-frame uploads.
#[derive(Default)]
pub(crate) struct Staging {
    pub(crate) instances: Vec<MeshInstance>,
    pub(crate) points: Vec<PointInstance>,
    pub(crate) vertices: Vec<LitVertex>,
}

impl Staging {
    /// Pack `geometry` into the matching staging vector and write it to
    /// `buffers`. Mismatched pairs are ignored.
    pub(crate) fn upload(&mut self, queue: &wgpu::Queue, geometry: &GeometrySet, buffers: &ModeBuffers) {
        match (geometry, buffers) {
            (GeometrySet::Bars(bars), ModeBuffers::Bars { instances, .. }) => {
                self.instances.clear();
                self.instances.extend(bars.iter().map(|b| MeshInstance {
                    offset_scale: [b.position.x, b.position.y, b.position.z, b.scale_y],
                    color: [b.color[0], b.color[1], b.color[2], 1.0],
                }));
                queue.write_buffer(instances, 0, bytemuck::cast_slice(&self.instances));
            }
            (GeometrySet::Wave(points), ModeBuffers::Wave { instances, .. }) => {
                self.instances.clear();
                self.instances.extend(points.iter().map(|p| MeshInstance {
                    offset_scale: [p.position.x, p.position.y, p.position.z, 1.0],
                    color: [p.color[0], p.color[1], p.color[2], 1.0],
                }));
                queue.write_buffer(instances, 0, bytemuck::cast_slice(&self.instances));
            }
            (GeometrySet::Particles(cloud), ModeBuffers::Particles { instances, .. }) => {
                self.points.clear();
                self.points.extend(cloud.positions.iter().zip(cloud.colors.iter()).map(
                    |(p, c)| PointInstance {
                        position: [p.x, p.y, p.z, 1.0],
                        color: [c[0], c[1], c[2], 1.0],
                    },
                ));
                queue.write_buffer(instances, 0, bytemuck::cast_slice(&self.points));
            }
            (GeometrySet::Sphere(sphere), ModeBuffers::Sphere { vertices, .. }) => {
                self.vertices.clear();
                self.vertices.extend(sphere.positions.iter().zip(sphere.normals.iter()).map(
                    |(p, n)| LitVertex {
                        position: p.to_array(),
                        normal: n.to_array(),
                    },
                ));
                queue.write_buffer(vertices, 0, bytemuck::cast_slice(&self.vertices));
            }
            _ => {}
        }
    }
}
