//! Simulation manager
//!
//! Owns the attached simulation and routes the app's tick, scroll, and UI
//! callbacks into it.

use super::traits::Simulation;
use crate::gfx::scene::Scene;
use crate::sim::context::FrameContext;
use imgui::Ui;

/// Manages the lifecycle of the attached simulation
pub struct SimulationManager {
    simulation: Option<Box<dyn Simulation>>,
    is_paused: bool,
}

impl SimulationManager {
    pub fn new() -> Self {
        Self {
            simulation: None,
            is_paused: false,
        }
    }

    /// Attaches a simulation, replacing and cleaning up any previous one
    pub fn attach_simulation(&mut self, mut simulation: Box<dyn Simulation>, scene: &mut Scene) {
        if let Some(mut old) = self.simulation.take() {
            old.cleanup(scene);
        }

        simulation.initialize(scene);
        log::info!("simulation attached: {}", simulation.name());
        self.simulation = Some(simulation);
        self.is_paused = false;
    }

    /// Detaches and cleans up the current simulation
    pub fn detach_simulation(&mut self, scene: &mut Scene) {
        if let Some(mut sim) = self.simulation.take() {
            sim.cleanup(scene);
        }
    }

    /// Runs one tick of the attached simulation
    pub fn update(&mut self, ctx: &FrameContext, scene: &mut Scene) {
        if self.is_paused {
            return;
        }
        if let Some(simulation) = &mut self.simulation {
            simulation.update(ctx, scene);
        }
    }

    /// Forwards a scroll event to the attached simulation
    ///
    /// Scroll is delivered even while paused; it is an input-path write, not
    /// part of the tick.
    pub fn on_scroll(&mut self, scroll_y: f32, scene: &mut Scene) {
        if let Some(simulation) = &mut self.simulation {
            simulation.on_scroll(scroll_y, scene);
        }
    }

    /// Renders the control window plus the simulation's own UI
    pub fn render_ui(&mut self, ui: &Ui, scene: &mut Scene) {
        let display_size = ui.io().display_size;
        let panel_width = 280.0;
        let panel_x = display_size[0] - panel_width - 20.0;

        if let Some(simulation) = &mut self.simulation {
            ui.window("Simulation")
                .size([panel_width, 120.0], imgui::Condition::FirstUseEver)
                .position([panel_x, 20.0], imgui::Condition::FirstUseEver)
                .build(|| {
                    ui.text(simulation.name());
                    ui.separator();

                    if ui.button(if self.is_paused { "Play" } else { "Pause" }) {
                        self.is_paused = !self.is_paused;
                        simulation.set_running(!self.is_paused);
                    }
                    ui.same_line();
                    if ui.button("Reset") {
                        simulation.reset(scene);
                    }
                });

            simulation.render_ui(ui);
        }
    }

    pub fn has_simulation(&self) -> bool {
        self.simulation.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
        if let Some(simulation) = &mut self.simulation {
            simulation.set_running(!paused);
        }
    }

    pub fn current_simulation_name(&self) -> Option<&str> {
        self.simulation.as_ref().map(|s| s.name())
    }
}

impl Default for SimulationManager {
    fn default() -> Self {
        Self::new()
    }
}
