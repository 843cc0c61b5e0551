//! Material system for the standard textured shading model
//!
//! Provides material definitions and centralized management with GPU resource
//! handling. Materials are stored in MaterialManager and objects reference
//! them by ID. A material combines a base color, metalness/roughness tuning,
//! and optional color/normal maps whose UV settings come from the texture's
//! own load-time configuration.

use std::collections::HashMap;
use wgpu::Device;

use super::texture_loader::TextureData;
use super::texture_resource::{TextureResource, TextureSettings};
use crate::wgpu_utils::{
    binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
    binding_types,
    uniform_buffer::UniformBuffer,
};

/// Material ID for referencing materials
pub type MaterialId = String;

const HAS_COLOR_MAP: u32 = 1;
const HAS_NORMAL_MAP: u32 = 2;

/// GPU uniform data for materials
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
    pub uv_repeat: [f32; 2],
    pub uv_offset: [f32; 2],
    pub metalness: f32,
    pub roughness: f32,
    pub normal_scale: f32,
    pub flags: u32,
}

type MaterialUBO = UniformBuffer<MaterialUniform>;

/// Material bind group management
pub struct MaterialBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: Option<wgpu::BindGroup>,
}

impl MaterialBindings {
    pub fn new(device: &Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_fragment(binding_types::uniform())
            .next_binding_fragment(binding_types::texture_2d())
            .next_binding_fragment(binding_types::sampler(wgpu::SamplerBindingType::Filtering))
            .next_binding_fragment(binding_types::texture_2d())
            .next_binding_fragment(binding_types::sampler(wgpu::SamplerBindingType::Filtering))
            .create(device, "Material Bind Group");

        MaterialBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    pub fn create_bind_group(
        &mut self,
        device: &Device,
        ubo: &MaterialUBO,
        color_map: &TextureResource,
        normal_map: &TextureResource,
    ) {
        self.bind_group = Some(
            BindGroupBuilder::new(&self.bind_group_layout)
                .resource(ubo.binding_resource())
                .resource(wgpu::BindingResource::TextureView(&color_map.view))
                .resource(wgpu::BindingResource::Sampler(&color_map.sampler))
                .resource(wgpu::BindingResource::TextureView(&normal_map.view))
                .resource(wgpu::BindingResource::Sampler(&normal_map.sampler))
                .create(device, "Material Bind Group"),
        );
    }

    pub fn bind_group_layouts(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    pub fn bind_groups(&self) -> &wgpu::BindGroup {
        self.bind_group
            .as_ref()
            .expect("Bind group has not been created yet!")
    }
}

/// 1x1 stand-in textures bound when a material has no map assigned
pub struct FallbackMaps {
    pub white: TextureResource,
    pub flat_normal: TextureResource,
}

impl FallbackMaps {
    pub fn new(device: &Device, queue: &wgpu::Queue) -> Self {
        let white = TextureResource::create_from_rgba_data(
            device,
            queue,
            &[255, 255, 255, 255],
            1,
            1,
            "Fallback White",
            TextureSettings::default(),
        );
        let flat_normal = TextureResource::create_from_rgba_data_with_format(
            device,
            queue,
            &[128, 128, 255, 255],
            1,
            1,
            "Fallback Flat Normal",
            TextureSettings::default(),
            wgpu::TextureFormat::Rgba8Unorm,
        );
        Self { white, flat_normal }
    }
}

/// Material definition with standard shading properties
///
/// Contains material properties and GPU resources. Materials are stored
/// centrally in MaterialManager and shared between objects.
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],
    pub metalness: f32,
    pub roughness: f32,
    pub normal_scale: f32,
    pub color_map: Option<TextureData>,
    pub normal_map: Option<TextureData>,

    // GPU resources - shared by all objects using this material
    color_texture: Option<TextureResource>,
    normal_texture: Option<TextureResource>,
    material_ubo: Option<MaterialUBO>,
    material_bindings: Option<MaterialBindings>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            base_color: [0.8, 0.8, 0.8, 1.0],
            metalness: 0.0,
            roughness: 0.5,
            normal_scale: 1.0,
            color_map: None,
            normal_map: None,
            color_texture: None,
            normal_texture: None,
            material_ubo: None,
            material_bindings: None,
        }
    }
}

impl Material {
    /// Creates a new material with basic shading properties
    ///
    /// # Arguments
    /// * `name` - Unique name for this material
    /// * `base_color` - RGBA base color
    /// * `metalness` - Metalness factor (0.0 = dielectric, 1.0 = metallic)
    /// * `roughness` - Surface roughness (0.0 = mirror, 1.0 = rough)
    pub fn new(name: &str, base_color: [f32; 4], metalness: f32, roughness: f32) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            metalness: metalness.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    /// Builder pattern: Set base color from RGB values
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.base_color = [r, g, b, self.base_color[3]];
        self
    }

    /// Builder pattern: Set metalness factor
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness.clamp(0.0, 1.0);
        self
    }

    /// Builder pattern: Set roughness factor
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Builder pattern: Attach a color map
    pub fn with_color_map(mut self, texture: TextureData) -> Self {
        self.color_map = Some(texture);
        self
    }

    /// Builder pattern: Attach a normal map
    pub fn with_normal_map(mut self, texture: TextureData) -> Self {
        self.normal_map = Some(texture);
        self
    }

    /// Builder pattern: Set normal map strength
    pub fn with_normal_scale(mut self, scale: f32) -> Self {
        self.normal_scale = scale;
        self
    }

    /// UV settings that apply to this material's maps
    ///
    /// The color map's settings win when both maps carry one; maps configured
    /// by their load hook carry repeat/offset here.
    fn uv_settings(&self) -> TextureSettings {
        self.color_map
            .as_ref()
            .or(self.normal_map.as_ref())
            .map(|t| t.settings)
            .unwrap_or_default()
    }

    /// Updates GPU resources for this material
    ///
    /// Uploads any pending texture data, then syncs the uniform. Must be
    /// called after material properties change to sync with GPU.
    pub fn update_gpu_resources(
        &mut self,
        device: &Device,
        queue: &wgpu::Queue,
        fallbacks: &FallbackMaps,
    ) {
        if self.material_ubo.is_none() {
            self.material_ubo = Some(MaterialUBO::new(device));
        }

        if self.color_texture.is_none() {
            if let Some(data) = &self.color_map {
                self.color_texture = Some(data.upload(device, queue));
            }
        }
        if self.normal_texture.is_none() {
            if let Some(data) = &self.normal_map {
                self.normal_texture = Some(data.upload(device, queue));
            }
        }

        if self.material_bindings.is_none() {
            let mut bindings = MaterialBindings::new(device);
            bindings.create_bind_group(
                device,
                self.material_ubo.as_ref().unwrap(),
                self.color_texture.as_ref().unwrap_or(&fallbacks.white),
                self.normal_texture
                    .as_ref()
                    .unwrap_or(&fallbacks.flat_normal),
            );
            self.material_bindings = Some(bindings);
        }

        let uv = self.uv_settings();
        let mut flags = 0;
        if self.color_map.is_some() {
            flags |= HAS_COLOR_MAP;
        }
        if self.normal_map.is_some() {
            flags |= HAS_NORMAL_MAP;
        }

        let uniform_data = MaterialUniform {
            base_color: self.base_color,
            uv_repeat: uv.repeat,
            uv_offset: uv.offset,
            metalness: self.metalness,
            roughness: self.roughness,
            normal_scale: self.normal_scale,
            flags,
        };

        if let Some(ubo) = &mut self.material_ubo {
            ubo.update_content(queue, uniform_data);
        }
    }

    /// Gets the bind group for rendering
    pub fn get_bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.material_bindings.as_ref().map(|b| b.bind_groups())
    }

    /// Gets the bind group layout for pipeline creation
    pub fn get_bind_group_layout(&self) -> Option<&wgpu::BindGroupLayout> {
        self.material_bindings
            .as_ref()
            .map(|b| b.bind_group_layouts())
    }
}

/// Manages all materials in the engine
///
/// Centralized storage for all materials. Objects reference materials by ID
/// rather than storing material data directly, enabling efficient sharing
/// of GPU resources between objects.
pub struct MaterialManager {
    materials: HashMap<MaterialId, Material>,
    default_material_id: MaterialId,
    fallbacks: Option<FallbackMaps>,
}

impl MaterialManager {
    /// Creates a new material manager with a default material
    pub fn new() -> Self {
        let mut manager = Self {
            materials: HashMap::new(),
            default_material_id: "default".to_string(),
            fallbacks: None,
        };

        manager
            .materials
            .insert("default".to_string(), Material::default());

        manager
    }

    /// Adds a material to the library
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    /// Gets a material by ID
    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Gets a mutable material by ID
    pub fn get_material_mut(&mut self, id: &str) -> Option<&mut Material> {
        self.materials.get_mut(id)
    }

    /// Gets the default material
    pub fn get_default_material(&self) -> &Material {
        self.materials.get(&self.default_material_id).unwrap()
    }

    /// Gets material for an object with fallback to default
    ///
    /// # Arguments
    /// * `material_id` - Optional material ID from object
    pub fn get_material_for_object(&self, material_id: Option<&MaterialId>) -> &Material {
        match material_id {
            Some(id) => self
                .get_material(id)
                .unwrap_or_else(|| self.get_default_material()),
            None => self.get_default_material(),
        }
    }

    /// Lists all material IDs
    pub fn list_materials(&self) -> Vec<&MaterialId> {
        self.materials.keys().collect()
    }

    /// Updates GPU resources for all materials
    ///
    /// Should be called when the GPU context is available or when materials
    /// have been modified.
    pub fn update_all_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        if self.fallbacks.is_none() {
            self.fallbacks = Some(FallbackMaps::new(device, queue));
        }
        let fallbacks = self.fallbacks.as_ref().unwrap();
        for material in self.materials.values_mut() {
            material.update_gpu_resources(device, queue, fallbacks);
        }
    }

    /// Gets material bind group layout for pipeline creation
    ///
    /// Uses the default material's layout as all materials share the same layout.
    pub fn get_bind_group_layout(&self) -> Option<&wgpu::BindGroupLayout> {
        self.get_default_material().get_bind_group_layout()
    }
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_clamps_factors() {
        let material = Material::new("golf", [1.0, 1.0, 1.0, 1.0], 1.5, -0.2);
        assert_eq!(material.metalness, 1.0);
        assert_eq!(material.roughness, 0.0);
    }

    #[test]
    fn test_manager_falls_back_to_default() {
        let manager = MaterialManager::new();
        let missing = "nope".to_string();
        assert_eq!(
            manager.get_material_for_object(Some(&missing)).name,
            "default"
        );
        assert_eq!(manager.get_material_for_object(None).name, "default");
    }

    #[test]
    fn test_add_and_list_materials() {
        let mut manager = MaterialManager::new();
        manager.add_material(Material::new("hoop", [0.8, 0.6, 0.4, 1.0], 0.0, 0.8));
        assert!(manager.get_material("hoop").is_some());
        assert_eq!(manager.list_materials().len(), 2);
    }
}
