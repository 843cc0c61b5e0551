//! Scene objects and meshes
//!
//! An [`Object`] is a named collection of meshes with a [`Transform`] and an
//! optional material reference. The simulation mutates transforms every
//! frame; the GPU side only sees the composed matrix when transforms are
//! synced.

use std::ops::Range;

use cgmath::{Matrix4, Rad, Vector3};
use wgpu::Device;

use super::vertex::Vertex3D;
use crate::gfx::geometry::GeometryData;

/// Position / rotation / scale of one scene object
///
/// Rotation is Euler angles in radians; the per-frame motion only ever
/// touches `rotation.x`, `rotation.y`, `position.y`, and `position.z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Composes the model matrix: translation, then yaw/pitch/roll, then scale
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_z(Rad(self.rotation.z))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

/// One mesh with optional GPU buffers
pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
}

impl Mesh {
    pub fn from_geometry(geometry: &GeometryData) -> Self {
        let (vertices, indices) = geometry.to_scene_format();
        let index_count = indices.len() as u32;
        Self {
            vertices,
            indices,
            vertex_buffer: None,
            index_buffer: None,
            index_count,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// GPU resources backing one object's transform
pub struct ObjectGpuResources {
    pub transform_buffer: wgpu::Buffer,
    pub transform_bind_group: wgpu::BindGroup,
}

/// A named, transformable scene object
pub struct Object {
    pub name: String,
    pub meshes: Vec<Mesh>,
    pub transform: Transform,
    pub material_id: Option<String>,
    pub visible: bool,
    pub gpu_resources: Option<ObjectGpuResources>,
}

impl Object {
    pub fn new(name: &str, meshes: Vec<Mesh>) -> Self {
        Self {
            name: name.to_string(),
            meshes,
            transform: Transform::default(),
            material_id: None,
            visible: true,
            gpu_resources: None,
        }
    }

    pub fn set_material(&mut self, material_id: &str) {
        self.material_id = Some(material_id.to_string());
    }

    /// Uploads mesh buffers and creates the transform uniform resources
    pub fn init_gpu_resources(&mut self, device: &Device) {
        for mesh in self.meshes.iter_mut() {
            let vertex_buffer = wgpu::util::DeviceExt::create_buffer_init(
                device,
                &wgpu::util::BufferInitDescriptor {
                    label: Some("Vertex Buffer"),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                },
            );

            let index_buffer = wgpu::util::DeviceExt::create_buffer_init(
                device,
                &wgpu::util::BufferInitDescriptor {
                    label: Some("Index Buffer"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                },
            );

            mesh.vertex_buffer = Some(vertex_buffer);
            mesh.index_buffer = Some(index_buffer);
        }

        let transform_matrix = self.transform.matrix();
        let transform_data: &[f32; 16] = transform_matrix.as_ref();

        let transform_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some("Transform Uniform Buffer"),
                contents: bytemuck::cast_slice(transform_data),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            },
        );

        let transform_bind_group_layout = Self::transform_bind_group_layout(device);

        let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Transform Bind Group"),
            layout: &transform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_buffer.as_entire_binding(),
            }],
        });

        self.gpu_resources = Some(ObjectGpuResources {
            transform_buffer,
            transform_bind_group,
        });
    }

    /// Layout shared by every object's transform bind group
    pub fn transform_bind_group_layout(device: &Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Transform Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        })
    }

    /// Writes the composed transform matrix to the GPU if resources exist
    pub fn update_transform(&mut self, queue: &wgpu::Queue) {
        if let Some(gpu_resources) = &self.gpu_resources {
            let matrix = self.transform.matrix();
            let transform_data: &[f32; 16] = matrix.as_ref();
            queue.write_buffer(
                &gpu_resources.transform_buffer,
                0,
                bytemuck::cast_slice(transform_data),
            );
        }
    }

    pub fn get_transform_bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.gpu_resources
            .as_ref()
            .map(|res| &res.transform_bind_group)
    }
}

/// Builder for configuring an object right after it is added to a scene
pub struct ObjectBuilder<'a> {
    pub(crate) object: &'a mut Object,
}

impl<'a> ObjectBuilder<'a> {
    pub fn with_material(self, material_id: &str) -> Self {
        self.object.set_material(material_id);
        self
    }

    pub fn with_position(self, x: f32, y: f32, z: f32) -> Self {
        self.object.transform.position = Vector3::new(x, y, z);
        self
    }

    pub fn with_scale(self, scale: f32) -> Self {
        self.object.transform.scale = Vector3::new(scale, scale, scale);
        self
    }

    pub fn with_scale_xyz(self, x: f32, y: f32, z: f32) -> Self {
        self.object.transform.scale = Vector3::new(x, y, z);
        self
    }

    pub fn with_visible(self, visible: bool) -> Self {
        self.object.visible = visible;
        self
    }
}

pub trait DrawObject<'a> {
    fn draw_mesh(&mut self, mesh: &'a Mesh);
    fn draw_mesh_instanced(&mut self, mesh: &'a Mesh, instances: Range<u32>);
    fn draw_object(&mut self, object: &'a Object);
    fn draw_object_instanced(&mut self, object: &'a Object, instances: Range<u32>);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b Mesh) {
        self.draw_mesh_instanced(mesh, 0..1);
    }

    fn draw_mesh_instanced(&mut self, mesh: &'b Mesh, instances: Range<u32>) {
        let vertex_buffer = match &mesh.vertex_buffer {
            Some(buffer) => buffer,
            None => return, // Skip drawing if not uploaded
        };
        let index_buffer = match &mesh.index_buffer {
            Some(buffer) => buffer,
            None => return,
        };

        self.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, instances);
    }

    fn draw_object(&mut self, object: &'b Object) {
        self.draw_object_instanced(object, 0..1);
    }

    fn draw_object_instanced(&mut self, object: &'b Object, instances: Range<u32>) {
        for mesh in &object.meshes {
            self.draw_mesh_instanced(mesh, instances.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transform_is_identity_translation() {
        let transform = Transform::default();
        let matrix = transform.matrix();
        // Translation column is the origin
        assert_eq!(matrix.w.x, 0.0);
        assert_eq!(matrix.w.y, 0.0);
        assert_eq!(matrix.w.z, 0.0);
        assert_eq!(matrix.w.w, 1.0);
    }

    #[test]
    fn test_translation_lands_in_matrix() {
        let mut transform = Transform::default();
        transform.position = Vector3::new(1.6, -3.0, 2.0);
        let matrix = transform.matrix();
        assert!((matrix.w.x - 1.6).abs() < 1e-6);
        assert!((matrix.w.y + 3.0).abs() < 1e-6);
        assert!((matrix.w.z - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_mesh_from_geometry_counts() {
        let geometry = crate::gfx::geometry::generate_cube();
        let mesh = Mesh::from_geometry(&geometry);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
    }
}
