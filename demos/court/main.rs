//! # Court Demo
//!
//! The bouncing-basketball scene: a basketball free-falls and bounces off an
//! invisible floor plane while every mesh eases its rotation toward the mouse
//! cursor. Scrolling the wheel lifts the golf ball.
//!
//! Textures are loaded from `assets/textures/` when present; otherwise the
//! demo generates procedural stand-ins so it runs from a bare checkout.
//!
//! ## Usage
//! ```bash
//! cargo run --example court
//! ```

use anyhow::Result;
use std::path::Path;

use rebound::gfx::resources::texture_loader::{
    generate_checkerboard, generate_noise_normal, generate_planks, generate_seamed_panels,
    load_color_texture, load_normal_texture, TextureData,
};
use rebound::gfx::resources::texture_resource::{TextureSettings, WrapMode};
use rebound::gfx::scene::Transform;
use rebound::prelude::*;
use rebound::sim::stats::FrameStats;

const GOLF_SPHERE: &str = "golf_sphere";
const BASKETBALL: &str = "basketball";
const CUBE: &str = "cube";

/// Per-frame motion for the court scene
///
/// Easing runs over every tracked mesh first, then the bounce integrator
/// overwrites the basketball's vertical position.
struct CourtSimulation {
    bounce: BounceKinematics,
    meshes: Vec<(&'static str, EasingParams)>,
    initial_transforms: Vec<(String, Transform)>,
    stats: FrameStats,
    running: bool,
}

impl CourtSimulation {
    fn new() -> Self {
        Self {
            bounce: BounceKinematics::new(BounceParams::default()),
            meshes: vec![
                (GOLF_SPHERE, EasingParams::default()),
                // The basketball keeps its easing-accumulated yaw; no spin
                // overwrite
                (BASKETBALL, EasingParams::without_spin()),
                (CUBE, EasingParams::default()),
            ],
            initial_transforms: Vec::new(),
            stats: FrameStats::new(),
            running: true,
        }
    }
}

impl Simulation for CourtSimulation {
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
        self.stats.record(ctx.delta);

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
        // The scroll path lifts the golf ball directly from the event
        // callback
        if let Some(golf) = scene.object_mut(GOLF_SPHERE) {
            golf.transform.position.y = scroll_y * 0.001;
        }
    }

    fn render_ui(&mut self, ui: &Ui) {
        let display_size = ui.io().display_size;
        let panel_width = 280.0;
        let panel_x = display_size[0] - panel_width - 20.0;

        ui.window("Bounce")
            .size([panel_width, 150.0], imgui::Condition::FirstUseEver)
            .position([panel_x, 160.0], imgui::Condition::FirstUseEver)
            .build(|| {
                ui.text(format!("time cursor: {:.2}s", self.bounce.time_cursor()));
                ui.text(format!("launch speed: {:.2}", self.bounce.initial_speed()));
                ui.text(format!("apex time: {:.2}s", self.bounce.apex_time()));
                ui.separator();
                ui.text(format!("fps: {:.0}", self.stats.fps()));

                if ui.button("Restart arc") {
                    self.bounce.reset();
                }
            });
    }

    fn name(&self) -> &str {
        "Court"
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    fn reset(&mut self, scene: &mut Scene) {
        self.bounce.reset();
        self.stats.reset();
        for (name, transform) in &self.initial_transforms {
            if let Some(object) = scene.object_mut(name) {
                object.transform = *transform;
            }
        }
    }
}

fn build_materials(scene: &mut Scene) {
    let textures = Path::new("assets/textures");

    let golf_normal = load_normal_texture(&textures.join("NormalMap.png"), "golf normal", |_| {})
        .unwrap_or_else(|e| {
            log::warn!("{e}; generating dimple map");
            TextureData::normal_from_rgba(
                generate_noise_normal(256, 256, 1.2, 11),
                256,
                256,
                "golf normal",
            )
        });
    scene.add_material(
        Material::new("golf", [1.0, 1.0, 1.0, 1.0], 0.85, 0.04).with_normal_map(golf_normal),
    );

    let ball_color = load_color_texture(
        &textures.join("BasketballColor.jpg"),
        "basketball color",
        |_| {},
    )
    .unwrap_or_else(|e| {
        log::warn!("{e}; generating paneled ball texture");
        TextureData::color_from_rgba(
            generate_seamed_panels(512, 512, [205, 90, 30], [30, 25, 20], 4),
            512,
            512,
            "basketball color",
        )
    });
    let ball_normal = load_normal_texture(
        &textures.join("basketballNormal.jpg"),
        "basketball normal",
        |_| {},
    )
    .unwrap_or_else(|e| {
        log::warn!("{e}; generating pebble map");
        TextureData::normal_from_rgba(
            generate_noise_normal(256, 256, 0.6, 23),
            256,
            256,
            "basketball normal",
        )
    });
    scene.add_material(
        Material::new("basketball", [1.0, 1.0, 1.0, 1.0], 0.0, 0.9)
            .with_color_map(ball_color)
            .with_normal_map(ball_normal),
    );

    // The gem maps tile twice in each direction; the hook configures that as
    // soon as the data is available
    let gem_settings = |s: &mut TextureSettings| {
        s.wrap = WrapMode::Repeat;
        s.repeat = [2.0, 2.0];
        s.offset = [0.0, 0.0];
    };
    let gem_color = load_color_texture(&textures.join("gemTexture.jpg"), "gem color", gem_settings)
        .unwrap_or_else(|e| {
            log::warn!("{e}; generating checker texture");
            TextureData::color_from_rgba(
                generate_checkerboard(256, 256, 8, [46, 204, 113], [18, 90, 52]),
                256,
                256,
                "gem color",
            )
            .with_settings(gem_settings)
        });
    let gem_normal = load_normal_texture(&textures.join("gemNormal.jpg"), "gem normal", gem_settings)
        .unwrap_or_else(|e| {
            log::warn!("{e}; generating facet map");
            TextureData::normal_from_rgba(
                generate_noise_normal(256, 256, 0.9, 41),
                256,
                256,
                "gem normal",
            )
            .with_settings(gem_settings)
        });
    scene.add_material(
        Material::new("gem", [0.0, 1.0, 0.0, 1.0], 0.1, 0.4)
            .with_color_map(gem_color)
            .with_normal_map(gem_normal),
    );

    let wood = load_color_texture(&textures.join("woodFloor.jpg"), "wood floor", |_| {})
        .unwrap_or_else(|e| {
            log::warn!("{e}; generating plank texture");
            TextureData::color_from_rgba(
                generate_planks(512, 512, 32, [150, 105, 60], [70, 45, 25], 3),
                512,
                512,
                "wood floor",
            )
        });
    scene
        .add_material(Material::new("hardwood", [1.0, 1.0, 1.0, 1.0], 0.0, 0.85).with_color_map(wood));

    let hoop = load_color_texture(&textures.join("hoopTexture.jpg"), "hoop", |_| {})
        .unwrap_or_else(|e| {
            log::warn!("{e}; generating hoop texture");
            TextureData::color_from_rgba(
                generate_seamed_panels(256, 256, [200, 60, 30], [240, 240, 240], 6),
                256,
                256,
                "hoop",
            )
        });
    scene.add_material(Material::new("hoop", [1.0, 1.0, 1.0, 1.0], 0.2, 0.6).with_color_map(hoop));
}

fn main() -> Result<()> {
    env_logger::init();

    let mut app = rebound::default();
    let scene = &mut app.app_state.scene;

    build_materials(scene);

    scene
        .add_object(GOLF_SPHERE, generate_sphere(64, 64))
        .with_material("golf")
        .with_scale(0.5)
        .with_position(1.6, 0.0, 0.0);

    scene
        .add_object(BASKETBALL, generate_sphere(64, 64))
        .with_material("basketball")
        .with_position(0.0, -3.0, 0.0);

    // Animated but not shown by default, same as the original scene; toggle
    // them from the Scene panel
    scene
        .add_object(CUBE, generate_cube())
        .with_material("gem")
        .with_visible(false);

    scene
        .add_object("hoop", generate_cylinder(5.0, 20.0, 64))
        .with_material("hoop")
        .with_scale(0.5)
        .with_visible(false);

    scene
        .add_object("floor", generate_box(50.0, 1.0, 50.0))
        .with_material("hardwood")
        .with_position(0.0, -10.0, 0.0);

    app.attach_simulation(CourtSimulation::new());

    app.set_ui(|ui, scene| {
        light_panel(ui, &mut scene.lights);
        scene_panel(ui, scene);
    });

    app.run();
    Ok(())
}
