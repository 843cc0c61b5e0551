// src/gfx/camera/mod.rs
//! Camera system

pub mod scene_camera;

pub use scene_camera::{CameraUniform, SceneCamera};
