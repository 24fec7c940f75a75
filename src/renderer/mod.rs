//! wgpu-based renderer for GH-X.
//!
//! There is no scene to draw: each frame clears to the backdrop colour and
//! hands the pass over to egui.

pub mod gpu;
pub mod metrics;

use std::sync::Arc;
use winit::window::Window;

use crate::core::error::Result;
use gpu::GpuContext;

/// Clear colour behind the landing screen and panel
const BACKDROP: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.04,
    b: 0.03,
    a: 1.0,
};

/// Main renderer struct.
pub struct Renderer {
    ctx: GpuContext,
    metrics: RenderMetrics,
}

impl Renderer {
    /// Create a new renderer for the given window.
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let ctx = GpuContext::new(window).await?;
        Ok(Self {
            ctx,
            metrics: RenderMetrics::new(),
        })
    }

    /// Handle window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
    }

    /// Get current surface size.
    pub fn size(&self) -> (u32, u32) {
        self.ctx.size()
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.ctx.device
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.ctx.format()
    }

    /// Get render metrics.
    pub fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    /// Clear the frame, then let `paint` record the egui pass.
    ///
    /// `paint` returns any extra command buffers it produced (egui's buffer
    /// uploads); they are submitted ahead of the frame's own encoder.
    pub fn render_with_egui<F>(&mut self, paint: F) -> std::result::Result<(), wgpu::SurfaceError>
    where
        F: FnOnce(
            &wgpu::Device,
            &wgpu::Queue,
            &mut wgpu::CommandEncoder,
            &wgpu::TextureView,
        ) -> Vec<wgpu::CommandBuffer>,
    {
        self.metrics.begin_frame();

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let _clear = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Backdrop Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(BACKDROP),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        let extra = paint(&self.ctx.device, &self.ctx.queue, &mut encoder, &view);

        self.ctx
            .queue
            .submit(extra.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();

        Ok(())
    }
}

pub use metrics::RenderMetrics;
