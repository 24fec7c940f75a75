//! GH-X PRO - windowed entry point
//!
//! Opens a winit window, renders the shell with egui on top of a wgpu
//! backdrop, and runs the timer tasks on a tokio runtime.
//! Controls:
//!   Drag the panel header to move the panel
//!   Escape: close the panel, or quit from the landing screen

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use egui_wgpu::ScreenDescriptor;
use egui_winit::State as EguiWinitState;
use tokio::runtime::Runtime;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use ghx_pro::core::config::{self, AppConfig};
use ghx_pro::core::error::{GhxError, Result};
use ghx_pro::renderer::Renderer;
use ghx_pro::shell::Shell;

/// GH-X PRO - the ultimate game hacking simulator
#[derive(Parser, Debug)]
#[command(name = "ghx-pro")]
#[command(about = "Cosmetic game hacking simulator with a draggable panel")]
struct Args {
    /// TOML config file; defaults are used for anything it leaves out
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for scan results, overriding the config
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ghx_pro=info")),
        )
        .init();

    let args = Args::parse();

    let mut app_config = match &args.config {
        Some(path) => AppConfig::load_from_toml(path)?,
        None => AppConfig::default(),
    };
    if args.seed.is_some() {
        app_config.scanner.seed = args.seed;
    }
    let _ = config::set_config(app_config);
    let app_config = config::config();

    tracing::info!("Starting GH-X PRO");

    // Timer tasks run here; the UI thread only polls their channels
    let runtime = Runtime::new()?;

    let event_loop = EventLoop::new().map_err(|e| GhxError::WindowError(e.to_string()))?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(app_config.window.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                app_config.window.width,
                app_config.window.height,
            ))
            .build(&event_loop)
            .map_err(|e| GhxError::WindowError(e.to_string()))?,
    );

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;

    let egui_ctx = egui::Context::default();
    egui_ctx.set_visuals(egui::Visuals::dark());
    let mut egui_winit_state = EguiWinitState::new(
        egui_ctx.clone(),
        egui::ViewportId::ROOT,
        &window,
        None,
        None,
    );

    let mut egui_renderer =
        egui_wgpu::Renderer::new(renderer.device(), renderer.surface_format(), None, 1);

    let mut shell = Shell::new(runtime.handle().clone(), app_config.clone());

    let mut last_title_update = Instant::now();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { ref event, .. } => {
                let egui_consumed = egui_winit_state.on_window_event(&window, event).consumed;

                if !egui_consumed {
                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }

                        WindowEvent::Resized(size) => {
                            renderer.resize(size.width, size.height);
                        }

                        WindowEvent::KeyboardInput {
                            event: key_event, ..
                        } => {
                            if key_event.state == ElementState::Pressed
                                && key_event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                            {
                                if shell.is_panel_visible() {
                                    shell.close();
                                } else {
                                    elwt.exit();
                                }
                            }
                        }

                        _ => {}
                    }
                }

                // Always handle RedrawRequested regardless of egui consumption
                if let WindowEvent::RedrawRequested = event {
                    shell.pump();

                    let raw_input = egui_winit_state.take_egui_input(&window);
                    egui_ctx.begin_frame(raw_input);
                    ghx_pro::ui::draw(&egui_ctx, &mut shell);
                    let full_output = egui_ctx.end_frame();

                    egui_winit_state
                        .handle_platform_output(&window, full_output.platform_output);
                    let paint_jobs =
                        egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

                    let (width, height) = renderer.size();
                    let screen_descriptor = ScreenDescriptor {
                        size_in_pixels: [width, height],
                        pixels_per_point: full_output.pixels_per_point,
                    };

                    let render_result =
                        renderer.render_with_egui(|device, queue, encoder, view| {
                            for (id, image_delta) in &full_output.textures_delta.set {
                                egui_renderer.update_texture(device, queue, *id, image_delta);
                            }

                            let uploads = egui_renderer.update_buffers(
                                device,
                                queue,
                                encoder,
                                &paint_jobs,
                                &screen_descriptor,
                            );

                            {
                                let mut render_pass =
                                    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                                        label: Some("egui Render Pass"),
                                        color_attachments: &[Some(
                                            wgpu::RenderPassColorAttachment {
                                                view,
                                                resolve_target: None,
                                                ops: wgpu::Operations {
                                                    // Keep the backdrop clear
                                                    load: wgpu::LoadOp::Load,
                                                    store: wgpu::StoreOp::Store,
                                                },
                                            },
                                        )],
                                        depth_stencil_attachment: None,
                                        timestamp_writes: None,
                                        occlusion_query_set: None,
                                    });
                                egui_renderer.render(
                                    &mut render_pass,
                                    &paint_jobs,
                                    &screen_descriptor,
                                );
                            }

                            for id in &full_output.textures_delta.free {
                                egui_renderer.free_texture(id);
                            }

                            uploads
                        });

                    match render_result {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            let (w, h) = renderer.size();
                            renderer.resize(w, h);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            tracing::error!("Out of GPU memory!");
                            elwt.exit();
                        }
                        Err(e) => {
                            tracing::warn!("Render error: {:?}", e);
                        }
                    }

                    if last_title_update.elapsed().as_secs_f32() >= 1.0 {
                        window.set_title(&format!(
                            "{} | {:.0} FPS",
                            config::config().window.title,
                            renderer.metrics().fps(),
                        ));
                        last_title_update = Instant::now();
                    }
                }
            }

            Event::AboutToWait => {
                window.request_redraw();
            }

            _ => {}
        })
        .map_err(|e| GhxError::WindowError(e.to_string()))?;

    Ok(())
}
