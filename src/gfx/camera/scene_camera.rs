use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Fixed perspective camera looking at the scene origin
///
/// The demo views the scene from a point on the +Z axis; the camera does not
/// move at runtime, only its projection follows window resizes.
#[derive(Debug, Clone, Copy)]
pub struct SceneCamera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl SceneCamera {
    /// Creates the demo camera: 75° vertical fov, eye at (0, 0, 8)
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            eye: Vector3::new(0.0, 0.0, 8.0),
            target: Vector3::zero(),
            up: Vector3::unit_y(),
            aspect,
            fovy: Deg(75.0).into(),
            znear: 0.1,
            zfar: 100.0,
            uniform: CameraUniform::default(),
        };
        camera.update_view_proj();
        camera
    }

    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = matrix4[i][j];
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_looks_down_negative_z() {
        let camera = SceneCamera::new(1.5);
        assert_eq!(camera.eye.z, 8.0);
        assert_eq!(camera.target, Vector3::zero());
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut camera = SceneCamera::new(1.0);
        camera.resize_projection(1600, 800);
        assert!((camera.aspect - 2.0).abs() < 1e-6);

        // Zero-height resizes are ignored rather than dividing by zero
        camera.resize_projection(1600, 0);
        assert!((camera.aspect - 2.0).abs() < 1e-6);
    }
}
