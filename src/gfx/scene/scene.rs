use wgpu::Device;

use crate::gfx::{
    camera::scene_camera::SceneCamera,
    geometry::GeometryData,
    resources::global_bindings::LightRig,
    resources::material::{Material, MaterialManager},
    scene::object::Mesh,
};

use super::object::{Object, ObjectBuilder};

/// Main scene containing objects, materials, lights, and the camera
pub struct Scene {
    pub camera: SceneCamera,
    pub objects: Vec<Object>,
    pub material_manager: MaterialManager,
    pub lights: LightRig,
}

impl Scene {
    /// Creates a new scene with the given camera and the default light rig
    pub fn new(camera: SceneCamera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            material_manager: MaterialManager::new(),
            lights: LightRig::default(),
        }
    }

    /// Updates the scene (camera matrices, etc.)
    pub fn update(&mut self) {
        self.camera.update_view_proj();
    }

    /// Adds an object built from procedural geometry
    ///
    /// The name is made unique if an object with the same name already
    /// exists. Returns a builder for configuring material, transform, and
    /// visibility.
    pub fn add_object(&mut self, name: &str, geometry: GeometryData) -> ObjectBuilder<'_> {
        let unique_name = self.ensure_unique_name(name);
        let mesh = Mesh::from_geometry(&geometry);
        let object = Object::new(&unique_name, vec![mesh]);
        self.objects.push(object);
        let object = self.objects.last_mut().unwrap();
        ObjectBuilder { object }
    }

    /// Gets an object by name
    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|obj| obj.name == name)
    }

    /// Gets a mutable object by name
    pub fn object_mut(&mut self, name: &str) -> Option<&mut Object> {
        self.objects.iter_mut().find(|obj| obj.name == name)
    }

    /// Adds a material to the material manager
    pub fn add_material(&mut self, material: Material) {
        self.material_manager.add_material(material);
    }

    /// Gets material for rendering an object
    ///
    /// Returns the material assigned to the object, or the default material
    /// if no material is assigned or the assigned material doesn't exist.
    pub fn get_material_for_object(&self, object: &Object) -> &Material {
        self.material_manager
            .get_material_for_object(object.material_id.as_ref())
    }

    /// Initializes GPU resources for all objects and materials
    ///
    /// Must be called after the GPU context is available and before rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        for object in self.objects.iter_mut() {
            object.init_gpu_resources(device);
        }
        self.material_manager.update_all_gpu_resources(device, queue);
    }

    /// Writes every visible object's transform matrix to the GPU
    ///
    /// Called once per tick after the simulation has mutated transforms.
    pub fn sync_transforms(&mut self, queue: &wgpu::Queue) {
        for object in &mut self.objects {
            if object.gpu_resources.is_some() {
                object.update_transform(queue);
            }
        }
    }

    /// Gets all object names for UI display
    pub fn get_object_names(&self) -> Vec<String> {
        self.objects.iter().map(|obj| obj.name.clone()).collect()
    }

    /// Gets the total number of objects
    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        let total_triangles: u32 = self
            .objects
            .iter()
            .map(|obj| obj.meshes.iter().map(|m| m.index_count() / 3).sum::<u32>())
            .sum();

        let total_vertices: u32 = self
            .objects
            .iter()
            .map(|obj| obj.meshes.iter().map(|m| m.vertex_count()).sum::<u32>())
            .sum();

        SceneStatistics {
            object_count: self.objects.len(),
            material_count: self.material_manager.list_materials().len(),
            total_triangles,
            total_vertices,
        }
    }

    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.iter().any(|obj| obj.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub material_count: usize,
    pub total_triangles: u32,
    pub total_vertices: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_cube;

    fn test_scene() -> Scene {
        Scene::new(SceneCamera::new(1.5))
    }

    #[test]
    fn test_add_and_find_object() {
        let mut scene = test_scene();
        scene
            .add_object("golf_sphere", generate_cube())
            .with_position(1.6, 0.0, 0.0);

        let object = scene.object("golf_sphere").expect("object should exist");
        assert!((object.transform.position.x - 1.6).abs() < 1e-6);
        assert!(scene.object("missing").is_none());
    }

    #[test]
    fn test_duplicate_names_are_made_unique() {
        let mut scene = test_scene();
        scene.add_object("cube", generate_cube());
        scene.add_object("cube", generate_cube());
        assert_eq!(scene.get_object_names(), vec!["cube", "cube (1)"]);
    }

    #[test]
    fn test_statistics_count_meshes() {
        let mut scene = test_scene();
        scene.add_object("cube", generate_cube());
        let stats = scene.get_statistics();
        assert_eq!(stats.object_count, 1);
        assert_eq!(stats.total_triangles, 12);
        assert_eq!(stats.total_vertices, 24);
    }

    #[test]
    fn test_unassigned_material_falls_back_to_default() {
        let mut scene = test_scene();
        scene.add_object("cube", generate_cube());
        let object = scene.object("cube").unwrap();
        assert_eq!(scene.get_material_for_object(object).name, "default");
    }
}
