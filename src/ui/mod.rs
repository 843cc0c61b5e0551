//! # User Interface Module
//!
//! Dear ImGui-based debug UI: the runtime equivalent of the original demo's
//! tuning panel. Handles UI rendering, input capture, and provides the
//! default panels for light tuning and scene inspection.
//!
//! ## Key Components
//!
//! - [`UiManager`] - Core UI manager that handles ImGui integration with
//!   winit and wgpu
//! - [`panel`] - Pre-built UI panels
//! - [`light_panel`] - Point light tuning controls
//!
//! ## Input Handling
//!
//! The UI system captures input before it reaches the scene: while a panel
//! has mouse or keyboard focus, pointer motion is not fed to the easing
//! pipeline.

pub mod manager;
pub mod panel;

// Re-export main types
pub use manager::UiManager;
pub use panel::{light_panel, scene_panel};
