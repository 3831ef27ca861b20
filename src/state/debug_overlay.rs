use cgmath::*;

use crate::{collision::Body, rendering::Quad};

use super::{constants::colors, game_state::GameState};

const OUTLINE_THICKNESS: f32 = 1.0;
const TOUCHING_THICKNESS: f32 = 3.0;

/// Draws physics bodies over the world: an outline for every platform and active body,
/// with a thick bar on each side of a body currently in contact with something.
#[derive(Default)]
pub struct DebugOverlay {
    quads: Vec<Quad>,
}

impl DebugOverlay {
    pub fn update(&mut self, game_state: &GameState) {
        self.quads.clear();

        for platform in game_state.space().static_bodies() {
            self.quads.extend_from_slice(&Quad::outline(
                platform,
                OUTLINE_THICKNESS,
                colors::DEBUG_BODY,
            ));
        }

        for body in game_state.active_bodies() {
            self.quads.extend_from_slice(&Quad::outline(
                &body.bounds(),
                OUTLINE_THICKNESS,
                colors::DEBUG_BODY,
            ));
            touching_bars(&body, &mut self.quads);
        }
    }

    /// World-space quads; drawn with the world camera after the scene
    pub fn draw(&self, quads: &mut Vec<Quad>) {
        quads.extend_from_slice(&self.quads);
    }
}

fn touching_bars(body: &Body, quads: &mut Vec<Quad>) {
    if !body.touching.any() {
        return;
    }
    let b = body.bounds();
    let t = TOUCHING_THICKNESS;
    if body.touching.down {
        quads.push(Quad::new(
            point2(b.left(), b.bottom() - t),
            vec2(b.width(), t),
            colors::DEBUG_TOUCHING,
        ));
    }
    if body.touching.up {
        quads.push(Quad::new(b.origin, vec2(b.width(), t), colors::DEBUG_TOUCHING));
    }
    if body.touching.left {
        quads.push(Quad::new(b.origin, vec2(t, b.height()), colors::DEBUG_TOUCHING));
    }
    if body.touching.right {
        quads.push(Quad::new(
            point2(b.right() - t, b.top()),
            vec2(t, b.height()),
            colors::DEBUG_TOUCHING,
        ));
    }
}
