//! # Scene Management Module
//!
//! Scene container, object hierarchy, and vertex data structures: the
//! organization of the meshes the simulation animates and the renderer draws.
//!
//! ## Key Components
//!
//! - [`Scene`] - The main scene container that manages objects, camera,
//!   materials, and lights
//! - [`Object`] - Individual 3D objects with meshes, materials, and
//!   transforms
//! - [`ObjectBuilder`] - Builder pattern for configuring objects
//! - [`Transform`] - Position / rotation / scale mutated by the simulation
//! - [`Vertex3D`] - Vertex data with position, normal, and texture
//!   coordinates

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, Object, ObjectBuilder, Transform};
pub use scene::Scene;
pub use vertex::Vertex3D;
