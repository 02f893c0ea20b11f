pub mod camera;
pub mod controls;
pub mod core;
pub mod geometry;
pub mod light;
pub mod material;
pub mod renderer;
pub mod resize;
pub mod resources;
pub mod scene;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use glam::Vec2;
use wgpu::SurfaceError;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use self::controls::OrbitControls;
use self::core::{EngineConfig, FrameTiming, StopCondition};
use self::renderer::Renderer;
use self::resize::{ResizeHandler, Viewport};
use self::resources::ResourceManager;
use crate::solar::animation::AnimationDriver;
use crate::solar::catalog::SolarCatalog;
use crate::solar::SolarSystem;

/// Pixels of trackpad scroll treated as one wheel notch.
const PIXELS_PER_LINE: f64 = 50.0;

pub struct EngineApp {
    config: EngineConfig,
    resources: ResourceManager,
    system: SolarSystem,
    driver: AnimationDriver,
    controls: OrbitControls,
    resize: ResizeHandler,
    stop: StopCondition,
    timing: FrameTiming,
}

impl EngineApp {
    pub fn new(config: EngineConfig, catalog: &SolarCatalog) -> Self {
        let mut resources = ResourceManager::new(&config.asset_dir);
        let aspect = config.window_width as f32 / config.window_height.max(1) as f32;
        let system = SolarSystem::build(catalog, &mut resources, aspect);
        let driver = AnimationDriver::for_system(&system);
        let controls = OrbitControls::new(system.scene.camera.target);

        Self {
            resources,
            driver,
            controls,
            resize: ResizeHandler::new(config.max_pixel_ratio),
            stop: config.stop_condition(),
            timing: FrameTiming::default(),
            system,
            config,
        }
    }

    pub fn run(self) -> Result<()> {
        tracing::info!(
            target: "engine",
            app = %self.config.app_name,
            bodies = self.system.bodies.len(),
            scene_nodes = self.system.scene.graph.len(),
            "Engine starting"
        );

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let mut engine = self;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(engine.config.app_name.clone())
                .with_inner_size(LogicalSize::new(
                    engine.config.window_width as f64,
                    engine.config.window_height as f64,
                ))
                .build(&event_loop)
                .context("failed to create window")?,
        );
        let mut renderer: Option<Renderer> = None;
        let mut last_frame = Instant::now();

        event_loop
            .run(move |event, target| match event {
                Event::Resumed => {
                    if renderer.is_none() {
                        let created = pollster::block_on(Renderer::new(
                            window.clone(),
                            &engine.system.scene,
                            &mut engine.resources,
                        ));
                        match created {
                            Ok(mut new_renderer) => {
                                tracing::info!(target: "engine", "renderer initialized");
                                engine.apply_viewport(
                                    Viewport::from_physical(window.inner_size(), window.scale_factor()),
                                    &mut new_renderer,
                                );
                                renderer = Some(new_renderer);
                            }
                            Err(err) => {
                                tracing::error!(target: "engine", error = %format!("{err:#}"), "failed to initialize renderer");
                                target.exit();
                            }
                        }
                    }
                }
                Event::AboutToWait => {
                    if renderer.is_some() {
                        window.request_redraw();
                    }
                }
                Event::WindowEvent { window_id, event } if window_id == window.id() => {
                    match event {
                        WindowEvent::CloseRequested
                        | WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    state: ElementState::Pressed,
                                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                                    ..
                                },
                            ..
                        } => {
                            tracing::info!(target: "engine", "window close requested");
                            target.exit();
                        }
                        WindowEvent::Resized(size) => {
                            if let Some(renderer) = renderer.as_mut() {
                                renderer.resize(size);
                                engine.apply_viewport(
                                    Viewport::from_physical(size, window.scale_factor()),
                                    renderer,
                                );
                            }
                        }
                        WindowEvent::ScaleFactorChanged {
                            scale_factor,
                            mut inner_size_writer,
                        } => {
                            let new_size = window.inner_size();
                            let _ = inner_size_writer.request_inner_size(new_size);
                            if let Some(renderer) = renderer.as_mut() {
                                renderer.resize(new_size);
                                engine.apply_viewport(
                                    Viewport::from_physical(new_size, scale_factor),
                                    renderer,
                                );
                            }
                        }
                        WindowEvent::MouseInput { state, button, .. } => {
                            engine.controls.pointer_button(button, state);
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            engine.controls.pointer_moved(
                                Vec2::new(position.x as f32, position.y as f32),
                                &engine.system.scene.camera,
                            );
                        }
                        WindowEvent::MouseWheel { delta, .. } => {
                            let lines = match delta {
                                MouseScrollDelta::LineDelta(_, y) => y,
                                MouseScrollDelta::PixelDelta(offset) => {
                                    (offset.y / PIXELS_PER_LINE) as f32
                                }
                            };
                            engine.controls.wheel(lines);
                        }
                        WindowEvent::RedrawRequested => {
                            if let Some(renderer) = renderer.as_mut() {
                                let now = Instant::now();
                                engine.timing.record(now.duration_since(last_frame));
                                last_frame = now;

                                engine.tick();
                                match renderer.render(&engine.system.scene) {
                                    Ok(()) => {}
                                    Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                                        renderer.resize(window.inner_size());
                                    }
                                    Err(SurfaceError::OutOfMemory) => {
                                        tracing::error!(target: "engine", "GPU out of memory, shutting down engine");
                                        target.exit();
                                    }
                                    Err(SurfaceError::Timeout) => {
                                        tracing::warn!(target: "engine", "surface timeout, retrying next frame");
                                    }
                                }

                                if engine.stop.should_stop(engine.driver.frames()) {
                                    tracing::info!(target: "engine", frames = engine.driver.frames(), "frame limit reached");
                                    target.exit();
                                }
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            })
            .map_err(|err| anyhow!(err))?;

        tracing::info!(target: "engine", "Engine shutdown complete");
        Ok(())
    }

    fn apply_viewport(&mut self, viewport: Viewport, renderer: &mut Renderer) {
        if self
            .resize
            .handle(viewport, &mut self.system.scene.camera, renderer)
        {
            self.controls
                .set_viewport_height(renderer.size().height as f32);
        }
    }

    /// One frame of scene state: rotations first, then camera input.
    fn tick(&mut self) {
        self.driver.advance(&mut self.system.scene.graph);
        self.controls.update(&mut self.system.scene.camera);
        tracing::trace!(
            target: "engine",
            frame = self.driver.frames(),
            frame_delta_ms = self.timing.delta_seconds * 1000.0,
            fps = self.timing.fps,
            "frame tick"
        );
    }
}
