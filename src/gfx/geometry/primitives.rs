//! # Primitive Shape Generation
//!
//! This module contains functions to generate the primitive shapes used by
//! the demo scenes. All shapes are generated with proper normals and texture
//! coordinates, in a Y-up coordinate system.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate a unit cube centered at the origin
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes.
/// Each face has proper normals pointing outward and UV coordinates from 0 to 1.
pub fn generate_cube() -> GeometryData {
    generate_box(1.0, 1.0, 1.0)
}

/// Generate an axis-aligned box centered at the origin
///
/// # Arguments
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
pub fn generate_box(width: f32, height: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();

    let hw = width * 0.5;
    let hh = height * 0.5;
    let hd = depth * 0.5;

    // Box vertices, four per face
    let positions = [
        // Front face (positive Z)
        [-hw, -hh, hd], [hw, -hh, hd], [hw, hh, hd], [-hw, hh, hd],
        // Back face (negative Z)
        [hw, -hh, -hd], [-hw, -hh, -hd], [-hw, hh, -hd], [hw, hh, -hd],
        // Left face (negative X)
        [-hw, -hh, -hd], [-hw, -hh, hd], [-hw, hh, hd], [-hw, hh, -hd],
        // Right face (positive X)
        [hw, -hh, hd], [hw, -hh, -hd], [hw, hh, -hd], [hw, hh, hd],
        // Top face (positive Y)
        [-hw, hh, hd], [hw, hh, hd], [hw, hh, -hd], [-hw, hh, -hd],
        // Bottom face (negative Y)
        [-hw, -hh, -hd], [hw, -hh, -hd], [hw, -hh, hd], [-hw, -hh, hd],
    ];

    // Texture coordinates (same for each face)
    let face_uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    let face_normals = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    data.vertices = positions.to_vec();
    for normal in face_normals.iter() {
        for _ in 0..4 {
            data.normals.push(*normal);
        }
        data.tex_coords.extend_from_slice(&face_uvs);
    }

    // Two counter-clockwise triangles per face
    for face in 0..6u32 {
        let base = face * 4;
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere with specified resolution
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
///
/// Returns a sphere of radius 1.0 centered at the origin.
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    // Generate vertices
    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 to PI
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32; // 0 to 2*PI
            let sin_phi = phi.sin();
            let cos_phi = phi.cos();

            // Spherical to Cartesian, Y-up
            let x = sin_theta * cos_phi;
            let y = cos_theta;
            let z = sin_theta * sin_phi;

            data.vertices.push([x, y, z]);
            data.normals.push([x, y, z]); // Normal is same as position for unit sphere

            let u = long as f32 / long_segs as f32;
            let v = lat as f32 / lat_segs as f32;
            data.tex_coords.push([u, v]);
        }
    }

    // Generate indices
    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices.push(first);
            data.indices.push(second);
            data.indices.push(first + 1);

            data.indices.push(second);
            data.indices.push(second + 1);
            data.indices.push(first + 1);
        }
    }

    data
}

/// Generate a cylinder along the Y axis
///
/// # Arguments
/// * `radius` - Radius of the cylinder
/// * `height` - Height of the cylinder (along Y)
/// * `segments` - Number of circular segments
///
/// Returns a capped cylinder centered at the origin extending from -height/2
/// to height/2 in Y.
pub fn generate_cylinder(radius: f32, height: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = segments.max(3);
    let half_height = height * 0.5;

    // Side vertices, bottom/top pair per segment
    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        let x = radius * cos_a;
        let z = radius * sin_a;

        data.vertices.push([x, -half_height, z]);
        data.normals.push([cos_a, 0.0, sin_a]);
        data.tex_coords.push([i as f32 / segs as f32, 1.0]);

        data.vertices.push([x, half_height, z]);
        data.normals.push([cos_a, 0.0, sin_a]);
        data.tex_coords.push([i as f32 / segs as f32, 0.0]);
    }

    // Side faces
    for i in 0..segs {
        let bottom_current = i * 2;
        let top_current = bottom_current + 1;
        let bottom_next = (i + 1) * 2;
        let top_next = bottom_next + 1;

        data.indices.push(bottom_current);
        data.indices.push(bottom_next);
        data.indices.push(top_current);

        data.indices.push(top_current);
        data.indices.push(bottom_next);
        data.indices.push(top_next);
    }

    // Cap center vertices
    let center_bottom_idx = data.vertices.len() as u32;
    data.vertices.push([0.0, -half_height, 0.0]);
    data.normals.push([0.0, -1.0, 0.0]);
    data.tex_coords.push([0.5, 0.5]);

    let center_top_idx = data.vertices.len() as u32;
    data.vertices.push([0.0, half_height, 0.0]);
    data.normals.push([0.0, 1.0, 0.0]);
    data.tex_coords.push([0.5, 0.5]);

    // Bottom cap
    for i in 0..segs {
        let current = i * 2;
        let next = (i + 1) * 2;

        data.indices.push(center_bottom_idx);
        data.indices.push(current);
        data.indices.push(next);
    }

    // Top cap
    for i in 0..segs {
        let current = i * 2 + 1;
        let next = (i + 1) * 2 + 1;

        data.indices.push(center_top_idx);
        data.indices.push(next);
        data.indices.push(current);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube();
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.tex_coords.len(), cube.vertices.len());
    }

    #[test]
    fn test_box_extents() {
        let floor = generate_box(50.0, 1.0, 50.0);
        let max_x = floor.vertices.iter().map(|v| v[0]).fold(f32::MIN, f32::max);
        let max_y = floor.vertices.iter().map(|v| v[1]).fold(f32::MIN, f32::max);
        assert!((max_x - 25.0).abs() < 1e-6);
        assert!((max_y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(8, 6);
        assert!(sphere.vertices.len() > 0);
        assert!(sphere.indices.len() > 0);
        assert_eq!(sphere.vertices.len(), sphere.normals.len());
        assert_eq!(sphere.vertices.len(), sphere.tex_coords.len());
    }

    #[test]
    fn test_sphere_vertices_are_unit_length() {
        let sphere = generate_sphere(16, 12);
        for v in &sphere.vertices {
            let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cylinder_generation() {
        let cylinder = generate_cylinder(5.0, 20.0, 64);
        // Sides span the full height along Y
        let min_y = cylinder.vertices.iter().map(|v| v[1]).fold(f32::MAX, f32::min);
        let max_y = cylinder.vertices.iter().map(|v| v[1]).fold(f32::MIN, f32::max);
        assert!((min_y + 10.0).abs() < 1e-5);
        assert!((max_y - 10.0).abs() < 1e-5);
        assert_eq!(cylinder.vertices.len(), cylinder.normals.len());
        assert_eq!(cylinder.vertices.len(), cylinder.tex_coords.len());
        // 64 side quads + 128 cap triangles
        assert_eq!(cylinder.triangle_count(), 64 * 2 + 64 * 2);
    }
}
