use wgpu::{CommandEncoder, TextureView};
use winit::event::WindowEvent;
use winit::window::Window;

use super::gpu_context::GpuContext;

/// Text overlay drawn on top of the presented canvas: the sketch's status
/// lines at a fixed top-left offset.
pub struct Hud {
    renderer: egui_wgpu::Renderer,
    state: egui_winit::State,
    ctx: egui::Context,
}

impl Hud {
    pub fn new(window: &Window, gpu: &GpuContext, surface_format: wgpu::TextureFormat) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(
            gpu.device(),
            surface_format,
            egui_wgpu::RendererOptions::default(),
        );

        Self {
            renderer,
            state,
            ctx,
        }
    }

    /// Let egui see a window event; returns true if it consumed it.
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run the overlay UI and record its draw commands into `encoder`.
    pub fn draw(
        &mut self,
        gpu: &GpuContext,
        encoder: &mut CommandEncoder,
        view: &TextureView,
        window: &Window,
        lines: &[String],
        size: (u32, u32),
    ) {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| {
            egui::Window::new("status")
                .title_bar(false)
                .resizable(false)
                .fixed_pos(egui::pos2(10.0, 10.0))
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    for line in lines {
                        ui.label(
                            egui::RichText::new(line)
                                .monospace()
                                .size(14.0)
                                .color(egui::Color32::from_rgb(230, 230, 230)),
                        );
                    }
                });
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .ctx
            .tessellate(full_output.shapes, self.ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(gpu.device(), gpu.queue(), *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.0, size.1],
            pixels_per_point: window.scale_factor() as f32,
        };

        self.renderer.update_buffers(
            gpu.device(),
            gpu.queue(),
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("hud pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            // SAFETY: the pass borrows the encoder, but egui-wgpu wants
            // 'static. The pass is dropped before the encoder is touched
            // again, so the lifetime extension is sound.
            let render_pass_static = unsafe {
                std::mem::transmute::<&mut wgpu::RenderPass<'_>, &mut wgpu::RenderPass<'static>>(
                    &mut render_pass,
                )
            };

            self.renderer
                .render(render_pass_static, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
