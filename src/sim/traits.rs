//! Core simulation trait
//!
//! Defines the interface user simulations implement to be driven by the
//! rendering loop.

use crate::gfx::scene::Scene;
use crate::sim::context::FrameContext;
use imgui::Ui;

/// Trait for user-defined per-frame simulations
///
/// The app calls these lifecycle methods: `initialize` once when the
/// simulation is attached, `update` once per display frame, `on_scroll` from
/// the scroll event path, and `render_ui` while the debug UI is drawn.
pub trait Simulation {
    /// Called once when the simulation is attached
    ///
    /// Use this to look up scene objects, cache indices, and seed state.
    fn initialize(&mut self, scene: &mut Scene);

    /// Advances the simulation by one frame
    ///
    /// This runs on the tick path, before transforms are synced to the GPU
    /// and the frame is rendered.
    ///
    /// # Arguments
    /// * `ctx` - Frozen per-frame inputs (clock sample, pointer, target)
    /// * `scene` - Scene whose object transforms the simulation mutates
    fn update(&mut self, ctx: &FrameContext, scene: &mut Scene);

    /// Called from the scroll event callback, outside the tick
    ///
    /// `scroll_y` is the accumulated scroll offset in pixels. Writes made
    /// here land on the scene immediately and survive until the next tick
    /// runs; anything the tick also writes wins from then on.
    fn on_scroll(&mut self, _scroll_y: f32, _scene: &mut Scene) {}

    /// Renders the simulation's own debug UI controls
    fn render_ui(&mut self, ui: &Ui);

    /// Simulation name for UI display
    fn name(&self) -> &str;

    /// Whether the simulation is currently running
    fn is_running(&self) -> bool;

    /// Start/pause the simulation
    fn set_running(&mut self, running: bool);

    /// Reset the simulation to its initial state
    fn reset(&mut self, scene: &mut Scene);

    /// Optional cleanup when the simulation is detached
    fn cleanup(&mut self, _scene: &mut Scene) {}
}
