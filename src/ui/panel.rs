//! Pre-built debug UI panels

use imgui::Ui;

use crate::gfx::resources::global_bindings::LightRig;
use crate::gfx::scene::Scene;

/// Point light tuning panel
///
/// Position, intensity, and color controls for each light in the rig; the
/// runtime version of the original demo's commented-out tuning knobs.
pub fn light_panel(ui: &Ui, lights: &mut LightRig) {
    ui.window("Lights")
        .size([300.0, 280.0], imgui::Condition::FirstUseEver)
        .position([10.0, 20.0], imgui::Condition::FirstUseEver)
        .build(|| {
            for (i, light) in lights.lights.iter_mut().enumerate() {
                if let Some(_node) = ui.tree_node(format!("light {}", i)) {
                    ui.slider(format!("x##{}", i), -10.0, 10.0, &mut light.position[0]);
                    ui.slider(format!("y##{}", i), -10.0, 10.0, &mut light.position[1]);
                    ui.slider(format!("z##{}", i), -10.0, 10.0, &mut light.position[2]);
                    ui.slider(format!("intensity##{}", i), 0.0, 3.0, &mut light.intensity);
                    ui.color_edit3(format!("color##{}", i), &mut light.color);
                }
            }
        });
}

/// Scene inspection panel: object visibility toggles and mesh statistics
pub fn scene_panel(ui: &Ui, scene: &mut Scene) {
    let stats = scene.get_statistics();

    ui.window("Scene")
        .size([300.0, 200.0], imgui::Condition::FirstUseEver)
        .position([10.0, 320.0], imgui::Condition::FirstUseEver)
        .build(|| {
            ui.text(format!("Objects: {}", stats.object_count));
            ui.text(format!("Triangles: {}", stats.total_triangles));
            ui.separator();

            for object in scene.objects.iter_mut() {
                ui.checkbox(&object.name, &mut object.visible);
            }
        });
}
