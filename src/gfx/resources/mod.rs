// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Handles textures, materials, and global uniform bindings for rendering.

pub mod global_bindings;
pub mod material;
pub mod texture_loader;
pub mod texture_resource;

// Re-export main types
pub use global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO, LightRig, PointLight};
pub use texture_loader::{TextureData, TextureError};
pub use texture_resource::{TextureResource, TextureSettings, WrapMode};
