//! # Night Court Demo
//!
//! The same bouncing-basketball scene with moodier lighting: the key light is
//! dimmed and the colored accents carry the scene. Every mesh spins here,
//! including the basketball, and the scroll wheel targets the basketball
//! itself. The bounce integrator overwrites that write on the very next
//! tick, so scrolling only nudges the ball for a single frame.
//!
//! ## Usage
//! ```bash
//! cargo run --example night_court
//! ```

use anyhow::Result;

use rebound::gfx::resources::texture_loader::{
    generate_checkerboard, generate_noise_normal, generate_planks, generate_seamed_panels,
    TextureData,
};
use rebound::gfx::resources::texture_resource::{TextureSettings, WrapMode};
use rebound::gfx::scene::Transform;
use rebound::prelude::*;

const GOLF_SPHERE: &str = "golf_sphere";
const BASKETBALL: &str = "basketball";
const CUBE: &str = "cube";

struct NightCourtSimulation {
    bounce: BounceKinematics,
    meshes: Vec<(&'static str, EasingParams)>,
    initial_transforms: Vec<(String, Transform)>,
    running: bool,
}

impl NightCourtSimulation {
    fn new() -> Self {
        Self {
            bounce: BounceKinematics::new(BounceParams::default()),
            // Every mesh gets the base spin in this variant
            meshes: vec![
                (GOLF_SPHERE, EasingParams::default()),
                (BASKETBALL, EasingParams::default()),
                (CUBE, EasingParams::default()),
            ],
            initial_transforms: Vec::new(),
            running: true,
        }
    }
}

impl Simulation for NightCourtSimulation {
    fn initialize(&mut self, scene: &mut Scene) {
        self.initial_transforms = self
            .meshes
            .iter()
            .filter_map(|(name, _)| scene.object(name).map(|o| (o.name.clone(), o.transform)))
            .collect();
    }

    fn update(&mut self, ctx: &FrameContext, scene: &mut Scene) {
        if !self.running {
            return;
        }

        for (name, params) in &self.meshes {
            if let Some(object) = scene.object_mut(name) {
                params.apply_to(&mut object.transform, ctx.target, ctx.elapsed);
            }
        }

        if let Some(ball) = scene.object_mut(BASKETBALL) {
            let y = self.bounce.advance(ball.transform.position.y);
            ball.transform.position.y = y;
        }
    }

    fn on_scroll(&mut self, scroll_y: f32, scene: &mut Scene) {
        // Writes to the bounce mesh survive only until the next tick; the
        // integrator's assignment wins from then on
        if let Some(ball) = scene.object_mut(BASKETBALL) {
            ball.transform.position.y = scroll_y * 0.001;
        }
    }

    fn render_ui(&mut self, ui: &Ui) {
        let display_size = ui.io().display_size;
        let panel_width = 280.0;
        let panel_x = display_size[0] - panel_width - 20.0;

        ui.window("Bounce")
            .size([panel_width, 120.0], imgui::Condition::FirstUseEver)
            .position([panel_x, 160.0], imgui::Condition::FirstUseEver)
            .build(|| {
                ui.text(format!("time cursor: {:.2}s", self.bounce.time_cursor()));
                ui.text(format!("launch speed: {:.2}", self.bounce.initial_speed()));
                if ui.button("Restart arc") {
                    self.bounce.reset();
                }
            });
    }

    fn name(&self) -> &str {
        "Night Court"
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    fn reset(&mut self, scene: &mut Scene) {
        self.bounce.reset();
        for (name, transform) in &self.initial_transforms {
            if let Some(object) = scene.object_mut(name) {
                object.transform = *transform;
            }
        }
    }
}

fn build_materials(scene: &mut Scene) {
    // This variant always uses the generated textures
    scene.add_material(
        Material::new("golf", [0.9, 0.9, 1.0, 1.0], 0.6, 0.25).with_normal_map(
            TextureData::normal_from_rgba(
                generate_noise_normal(256, 256, 1.2, 11),
                256,
                256,
                "golf normal",
            ),
        ),
    );

    scene.add_material(
        Material::new("basketball", [1.0, 1.0, 1.0, 1.0], 0.0, 0.95)
            .with_color_map(TextureData::color_from_rgba(
                generate_seamed_panels(512, 512, [160, 64, 24], [20, 16, 14], 4),
                512,
                512,
                "basketball color",
            ))
            .with_normal_map(TextureData::normal_from_rgba(
                generate_noise_normal(256, 256, 0.6, 23),
                256,
                256,
                "basketball normal",
            )),
    );

    let gem_settings = |s: &mut TextureSettings| {
        s.wrap = WrapMode::Repeat;
        s.repeat = [2.0, 2.0];
        s.offset = [0.0, 0.0];
    };
    scene.add_material(
        Material::new("gem", [0.2, 0.4, 1.0, 1.0], 0.3, 0.3)
            .with_color_map(
                TextureData::color_from_rgba(
                    generate_checkerboard(256, 256, 8, [70, 90, 220], [20, 24, 80]),
                    256,
                    256,
                    "gem color",
                )
                .with_settings(gem_settings),
            )
            .with_normal_map(
                TextureData::normal_from_rgba(
                    generate_noise_normal(256, 256, 0.9, 41),
                    256,
                    256,
                    "gem normal",
                )
                .with_settings(gem_settings),
            ),
    );

    scene.add_material(
        Material::new("hardwood", [0.7, 0.7, 0.8, 1.0], 0.0, 0.9).with_color_map(
            TextureData::color_from_rgba(
                generate_planks(512, 512, 32, [90, 70, 50], [40, 28, 18], 3),
                512,
                512,
                "wood floor",
            ),
        ),
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let mut app = rebound::default();
    let scene = &mut app.app_state.scene;

    build_materials(scene);

    // Moodier rig: dim key light, strong accents
    scene.lights = LightRig {
        lights: [
            PointLight::new([2.0, 3.0, 4.0], [1.0, 1.0, 1.0], 0.3),
            PointLight::new([-3.2, 1.8, -2.1], [0.0, 1.0, 1.0], 1.2),
            PointLight::new([5.6, -1.6, -5.2], [1.0, 0.0, 0.2], 0.9),
        ],
    };

    scene
        .add_object(GOLF_SPHERE, generate_sphere(64, 64))
        .with_material("golf")
        .with_scale(0.5)
        .with_position(1.6, 0.0, 0.0);

    scene
        .add_object(BASKETBALL, generate_sphere(64, 64))
        .with_material("basketball")
        .with_position(0.0, -3.0, 0.0);

    // The cube is part of the night scene
    scene
        .add_object(CUBE, generate_cube())
        .with_material("gem")
        .with_position(-1.8, 0.5, 0.0);

    scene
        .add_object("floor", generate_box(50.0, 1.0, 50.0))
        .with_material("hardwood")
        .with_position(0.0, -10.0, 0.0);

    app.attach_simulation(NightCourtSimulation::new());

    app.set_ui(|ui, scene| {
        light_panel(ui, &mut scene.lights);
        scene_panel(ui, scene);
    });

    app.run();
    Ok(())
}
