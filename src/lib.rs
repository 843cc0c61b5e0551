// src/lib.rs
//! Rebound
//!
//! A small 3D bouncing-ball scene demo built on wgpu and winit: closed-form
//! bounce kinematics and pointer-driven easing, plugged into a per-frame
//! simulation loop.

pub mod app;
pub mod gfx;
pub mod prelude;
pub mod sim;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::ReboundApp;

/// Creates a default Rebound application instance
pub fn default() -> ReboundApp {
    pollster::block_on(ReboundApp::new())
}
