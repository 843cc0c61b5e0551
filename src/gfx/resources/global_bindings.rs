//! Global uniform bindings for camera and lighting data
//!
//! Manages the GPU uniform buffer and bind group for per-frame global state
//! shared by every object: the camera matrices and the point light rig.

use crate::{
    gfx::camera::scene_camera::CameraUniform,
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// Number of point lights in the rig; must match the shader
pub const MAX_POINT_LIGHTS: usize = 3;

/// One point light
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
}

impl PointLight {
    pub fn new(position: [f32; 3], color: [f32; 3], intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }
}

/// The scene's fixed-size light rig
///
/// Three point lights, tunable at runtime through the debug panel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightRig {
    pub lights: [PointLight; MAX_POINT_LIGHTS],
}

impl Default for LightRig {
    /// Key light plus two colored accents
    fn default() -> Self {
        Self {
            lights: [
                PointLight::new([2.0, 3.0, 4.0], [1.0, 1.0, 1.0], 1.0),
                PointLight::new([-3.2, 1.8, -2.1], [0.0, 1.0, 1.0], 0.2),
                PointLight::new([5.6, -1.6, -5.2], [1.0, 0.0, 0.0], 0.4),
            ],
        }
    }
}

/// GPU layout of one point light (std140-style 16-byte aligned pair of vec4s)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct PointLightGpu {
    position: [f32; 3],
    intensity: f32,
    color: [f32; 3],
    _padding: f32,
}

/// Global uniform buffer content structure
///
/// MUST match the Globals struct in the shader exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
    lights: [PointLightGpu; MAX_POINT_LIGHTS],
}
// Total: 16 + 64 + 3*32 = 176 bytes

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Updates the global uniform buffer with camera and light data
///
/// Called each frame so the shader sees the current camera matrices and any
/// light tuning made through the UI.
pub fn update_global_ubo(
    ubo: &mut GlobalUBO,
    queue: &wgpu::Queue,
    camera: CameraUniform,
    lights: &LightRig,
) {
    let mut gpu_lights = [PointLightGpu {
        position: [0.0; 3],
        intensity: 0.0,
        color: [0.0; 3],
        _padding: 0.0,
    }; MAX_POINT_LIGHTS];

    for (gpu, light) in gpu_lights.iter_mut().zip(lights.lights.iter()) {
        gpu.position = light.position;
        gpu.intensity = light.intensity;
        gpu.color = light.color;
    }

    let content = GlobalUBOContent {
        view_position: camera.view_position,
        view_proj: camera.view_proj,
        lights: gpu_lights,
    };

    ubo.update_content(queue, content);
}

/// Manages bind group layouts and bind groups for global uniforms
///
/// Bound to slot 0 in the render pipeline.
pub struct GlobalBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: Option<wgpu::BindGroup>,
}

impl GlobalBindings {
    /// Creates a new global bindings manager
    ///
    /// Sets up the bind group layout for global uniforms but doesn't create
    /// the actual bind group until `create_bind_group()` is called.
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform())
            .create(device, "Globals Bind Group");

        GlobalBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    /// Creates the bind group with the provided uniform buffer
    ///
    /// Must be called after the uniform buffer is created and before any
    /// rendering operations that need global uniforms.
    pub fn create_bind_group(&mut self, device: &wgpu::Device, ubo: &GlobalUBO) {
        self.bind_group = Some(
            BindGroupBuilder::new(&self.bind_group_layout)
                .resource(ubo.binding_resource())
                .create(device, "Global Bind Group"),
        );
    }

    /// Returns the bind group layout
    pub fn bind_group_layouts(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    /// Returns the bind group for rendering
    ///
    /// # Panics
    /// Panics if `create_bind_group()` hasn't been called yet
    pub fn bind_groups(&self) -> &wgpu::BindGroup {
        self.bind_group
            .as_ref()
            .expect("Bind group has not been created yet!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rig_matches_demo_lighting() {
        let rig = LightRig::default();
        assert_eq!(rig.lights[0].position, [2.0, 3.0, 4.0]);
        assert_eq!(rig.lights[1].color, [0.0, 1.0, 1.0]);
        assert!((rig.lights[2].intensity - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_gpu_content_size() {
        assert_eq!(std::mem::size_of::<GlobalUBOContent>(), 176);
    }
}
