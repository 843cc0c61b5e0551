// src/gfx/rendering/mod.rs
//! Rendering pipeline
//!
//! WGPU render engine and pipeline management for the standard textured
//! shading pass.

pub mod pipeline_manager;
pub mod render_engine;

pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::RenderEngine;
