use anyhow::{anyhow, Result};
use cgmath::*;
use std::{rc::Rc, time::Duration};
use winit::{
    event::{KeyEvent, WindowEvent},
    keyboard::PhysicalKey,
};

use crate::{
    camera,
    input::{InputState, GAME_KEYS},
    rendering::{self, Material, Quad, QuadBatch},
    Options,
};

use super::{
    constants::{colors, MAX_FRAME_DT_MS, WINDOW_HEIGHT, WINDOW_WIDTH},
    debug_overlay::DebugOverlay,
    game_state::GameState,
    game_ui::GameUi,
    gpu_state::GpuState,
};

// --------------------------------------------------------------------------------------------------------------------

pub struct AppState {
    gpu: GpuState,
    game_state: GameState,
    game_ui: GameUi,
    overlay: Option<DebugOverlay>,
    input_state: InputState,
    gilrs: Option<gilrs::Gilrs>,

    world_uniforms: camera::Uniforms,
    ui_uniforms: camera::Uniforms,
    world_batch: QuadBatch,
    ui_batch: QuadBatch,
    world_quads: Vec<Quad>,
    ui_quads: Vec<Quad>,
}

impl AppState {
    pub fn new(gpu: GpuState, options: &Options) -> Self {
        let game_state = GameState::new(options);
        let overlay = if options.debug_overlay {
            Some(DebugOverlay::default())
        } else {
            None
        };

        let gilrs = match gilrs::Gilrs::new() {
            Ok(gilrs) => Some(gilrs),
            Err(e) => {
                log::warn!("Gamepad support unavailable: {}", e);
                None
            }
        };

        let world_uniforms = camera::Uniforms::new(&gpu.device);
        let mut ui_uniforms = camera::Uniforms::new(&gpu.device);
        ui_uniforms.data.update_view_proj(camera::screen_projection(
            point2(0.0, 0.0),
            vec2(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
        ));
        ui_uniforms.write(&gpu.queue);

        let material = Rc::new(Material::new(
            &gpu.device,
            gpu.config.format,
            &world_uniforms,
        ));
        let world_batch = QuadBatch::new(&gpu.device, material.clone());
        let ui_batch = QuadBatch::new(&gpu.device, material);

        Self {
            gpu,
            game_state,
            game_ui: GameUi::default(),
            overlay,
            input_state: InputState::for_keys(&GAME_KEYS),
            gilrs,
            world_uniforms,
            ui_uniforms,
            world_batch,
            ui_batch,
            world_quads: vec![],
            ui_quads: vec![],
        }
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.gpu.resize(new_size);
    }

    /// Returns true if the event was consumed as game input.
    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state,
                        ..
                    },
                ..
            } => self.input_state.process_keyboard(*key_code, *state),
            WindowEvent::MouseInput { state, button, .. } => {
                self.input_state.process_mouse(*button, *state)
            }
            _ => false,
        }
    }

    pub fn update(&mut self, dt: Duration) {
        // Set a max timestep - this is crude, but prevents explosions when stopping
        // execution in the debugger, and we get a HUGE timestep after resuming.
        let dt = dt.min(Duration::from_millis(MAX_FRAME_DT_MS));

        if let Some(gilrs) = &mut self.gilrs {
            while let Some(gilrs::Event { event, .. }) = gilrs.next_event() {
                self.input_state.process_gamepad(event);
            }
        }

        self.game_state.update(dt, &self.input_state);
        self.game_ui.update(&self.game_state);
        if let Some(overlay) = &mut self.overlay {
            overlay.update(&self.game_state);
        }

        self.input_state.update();
    }

    pub fn render(&mut self) -> Result<()> {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Timed out acquiring surface texture, skipping frame");
                return Ok(());
            }
            Err(e) => {
                return Err(anyhow!("Unable to acquire surface texture: {}", e));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.world_quads.clear();
        self.game_state.draw(&mut self.world_quads);
        if let Some(overlay) = &self.overlay {
            overlay.draw(&mut self.world_quads);
        }

        self.ui_quads.clear();
        self.game_ui.draw(&mut self.ui_quads);

        self.world_uniforms
            .data
            .update_view_proj(self.game_state.camera().calc_matrix());
        self.world_uniforms.write(&self.gpu.queue);

        self.world_batch
            .write(&self.gpu.device, &self.gpu.queue, &self.world_quads);
        self.ui_batch
            .write(&self.gpu.device, &self.gpu.queue, &self.ui_quads);

        let mut encoder = self.gpu.encoder();
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(rendering::srgb_to_linear(colors::SKY)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.world_batch
                .draw(&mut render_pass, &self.world_uniforms);
            self.ui_batch.draw(&mut render_pass, &self.ui_uniforms);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
