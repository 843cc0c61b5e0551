//! # Rebound Prelude
//!
//! Brings the types a typical demo needs into scope:
//!
//! ```no_run
//! use rebound::prelude::*;
//! ```

// Re-export core application types
pub use crate::app::ReboundApp;
pub use crate::default;

// Re-export graphics and scene types
pub use crate::gfx::geometry::{
    generate_box, generate_cube, generate_cylinder, generate_sphere, GeometryData,
};
pub use crate::gfx::resources::global_bindings::{LightRig, PointLight};
pub use crate::gfx::resources::material::Material;
pub use crate::gfx::scene::{Scene, Transform};

// Re-export the simulation framework
pub use crate::sim::{
    BounceKinematics, BounceParams, EasingParams, EasingTarget, FrameContext, Simulation,
    SimulationManager,
};

// Re-export UI types and utilities
pub use crate::ui::{light_panel, scene_panel};

// Re-export common external dependencies
pub use cgmath::Vector3;
pub use imgui::Ui;
