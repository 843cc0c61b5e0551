//! Application shell: window, event loop, and the per-frame tick
//!
//! Owns the collaborators the simulation core plugs into: the winit event
//! loop (frame scheduler), the cursor and scroll event paths (input sources),
//! and the render engine (render sink). Every `RedrawRequested` runs one
//! tick (pointer snapshot, simulation update, transform sync, render) and
//! `about_to_wait` re-arms the next frame.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::gfx::{
    camera::scene_camera::SceneCamera, rendering::render_engine::RenderEngine, scene::Scene,
};
use crate::sim::{
    FrameContext, PointerTracker, Simulation, SimulationClock, SimulationManager,
};
use crate::ui::UiManager;

/// UI callback type
pub type UiCallback = Box<dyn Fn(&imgui::Ui, &mut Scene) + Send + Sync>;

/// Pixels of scroll offset per mouse wheel line
const SCROLL_LINE_PIXELS: f32 = 40.0;

pub struct ReboundApp {
    event_loop: Option<EventLoop<()>>,
    pub app_state: AppState,
    ui_callback: Option<UiCallback>,
}

pub struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    pub scene: Scene,
    pub simulation: SimulationManager,
    clock: SimulationClock,
    pointer: Option<PointerTracker>,
    scroll_y: f32,
    ui_callback: Option<UiCallback>,
}

impl ReboundApp {
    /// Create a new application with default settings
    pub async fn new() -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let camera = SceneCamera::new(1.0);
        let scene = Scene::new(camera);

        Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                scene,
                simulation: SimulationManager::new(),
                clock: SimulationClock::new(),
                pointer: None,
                scroll_y: 0.0,
                ui_callback: None,
            },
            ui_callback: None,
        }
    }

    /// Set UI callback
    pub fn set_ui<F>(&mut self, ui_fn: F)
    where
        F: Fn(&imgui::Ui, &mut Scene) + Send + Sync + 'static,
    {
        self.ui_callback = Some(Box::new(ui_fn));
    }

    /// Attach the simulation driven by the frame loop
    pub fn attach_simulation(&mut self, simulation: impl Simulation + 'static) {
        self.app_state
            .simulation
            .attach_simulation(Box::new(simulation), &mut self.app_state.scene);
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) {
        self.app_state.ui_callback = self.ui_callback.take();

        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .expect("Failed to run event loop");
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Ok(window) = event_loop.create_window(
            WindowAttributes::default().with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) {
            let window_handle = Arc::new(window);
            self.window = Some(window_handle.clone());

            let (width, height) = window_handle.inner_size().into();

            // Half extents are captured here, once; later resizes do not
            // re-center the pointer offset
            self.pointer = Some(PointerTracker::new(width as f32, height as f32));
            self.scene.camera.resize_projection(width, height);

            let window_clone = window_handle.clone();
            let renderer =
                pollster::block_on(
                    async move { RenderEngine::new(window_clone, width, height).await },
                );

            self.scene
                .init_gpu_resources(renderer.device(), renderer.queue());

            let ui_manager = UiManager::new(
                renderer.device(),
                renderer.queue(),
                renderer.surface_format(),
                &window_handle,
            );

            self.ui_manager = Some(ui_manager);
            self.render_engine = Some(renderer);

            log::info!("window created ({}x{})", width, height);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        let Some(window) = self.window.as_ref() else {
            return;
        };

        // Handle UI input first
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(window, &ui_event) {
                // UI consumed the event - request redraw and return early
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                if matches!(key_code, winit::keyboard::KeyCode::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(pointer) = self.pointer.as_mut() {
                    pointer.cursor_moved(position.x as f32, position.y as f32);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => lines * SCROLL_LINE_PIXELS,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32,
                };
                // Wheel-down grows the offset, like a page scrolling down
                self.scroll_y = (self.scroll_y - amount).max(0.0);

                // Scroll writes land on the scene now, from this event path;
                // the next tick may overwrite them
                self.simulation.on_scroll(self.scroll_y, &mut self.scene);
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.scene.camera.resize_projection(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let sample = self.clock.tick();
                let pointer = self
                    .pointer
                    .as_ref()
                    .map(|p| p.snapshot())
                    .unwrap_or_default();
                let ctx = FrameContext::new(sample, pointer);

                self.simulation.update(&ctx, &mut self.scene);

                self.scene.update();
                render_engine.update(self.scene.camera.uniform, &self.scene.lights);
                self.scene.sync_transforms(render_engine.queue());

                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    // Build the UI first, while the scene may still be
                    // mutated, then replay it after the 3D pass
                    let simulation = &mut self.simulation;
                    let scene = &mut self.scene;
                    let ui_callback = &self.ui_callback;
                    ui_manager.update_logic(window, |ui| {
                        simulation.render_ui(ui, scene);
                        if let Some(callback) = ui_callback {
                            callback(ui, scene);
                        }
                    });

                    render_engine.render_frame(
                        &self.scene,
                        Some(
                            |device: &wgpu::Device,
                             queue: &wgpu::Queue,
                             encoder: &mut wgpu::CommandEncoder,
                             view: &wgpu::TextureView| {
                                ui_manager.render_display_only(device, queue, encoder, view);
                            },
                        ),
                    );
                } else {
                    render_engine.render_frame_simple(&self.scene);
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Manual re-arm: each finished frame schedules the next one
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
