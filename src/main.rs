use anyhow::Result;
use futures::executor::block_on;
use std::{sync::Arc, time::Instant};
use structopt::StructOpt;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod animation;
mod camera;
mod collision;
mod entities;
mod entity;
mod event_dispatch;
mod input;
mod rendering;
mod state;
mod util;

use state::constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

// ---------------------------------------------------------------------------------------------------------------------

#[derive(StructOpt, Debug, Clone, Default)]
pub struct Options {
    ///Display a debug overlay of physics bodies and contacts
    #[structopt(short, long)]
    pub debug_overlay: bool,

    ///Seed for star bounce and slime spawning; random if omitted
    #[structopt(short, long)]
    pub seed: Option<u64>,
}

// ---------------------------------------------------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::from_args();
    log::info!("Starting with {:?}", options);

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .build(&event_loop)?,
    );

    let gpu = block_on(state::gpu_state::GpuState::new(window.clone()))?;
    let mut state = state::app_state::AppState::new(gpu, &options);
    let mut last_render_time = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { window_id, event } if window_id == window.id() => {
            if !state.input(&event) {
                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(KeyCode::Escape),
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    } => elwt.exit(),
                    WindowEvent::Resized(physical_size) => {
                        state.resize(physical_size);
                    }
                    WindowEvent::RedrawRequested => {
                        let now = Instant::now();
                        let dt = now - last_render_time;
                        last_render_time = now;
                        state.update(dt);
                        if let Err(e) = state.render() {
                            log::error!("Render failed, exiting: {:?}", e);
                            elwt.exit();
                        }
                    }
                    _ => {}
                }
            }
        }
        Event::AboutToWait => {
            // we have to explicitly request a redraw
            window.request_redraw();
        }
        _ => {}
    })?;

    Ok(())
}
