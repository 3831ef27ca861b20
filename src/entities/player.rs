use std::{collections::HashMap, time::Duration};

use cgmath::*;

use crate::{
    animation::{Animation, AnimationPlayer},
    collision::Body,
    entity::Entity,
    rendering::Quad,
    state::constants::{colors, player, spell},
};

use super::{util::Facing, EntityClass};

// ---------------------------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAnimation {
    Left,
    Turn,
    Right,
}

fn player_animations() -> HashMap<PlayerAnimation, Animation> {
    let mut animations = HashMap::new();
    animations.insert(PlayerAnimation::Left, Animation::range(0, 3, 10.0, true));
    animations.insert(PlayerAnimation::Turn, Animation::new(vec![4], 20.0, false));
    animations.insert(PlayerAnimation::Right, Animation::range(5, 8, 10.0, true));
    animations
}

// ---------------------------------------------------------------------------------------------------------------------

pub struct Player {
    entity_id: u32,
    body: Body,
    facing: Facing,
    animation: AnimationPlayer<PlayerAnimation>,
    tint: Option<[f32; 4]>,
}

impl Player {
    pub fn new(entity_id: u32) -> Self {
        let mut body = Body::new(
            point2(player::START_X, player::START_Y),
            vec2(player::WIDTH, player::HEIGHT),
        );
        body.bounce = vec2(player::BOUNCE, player::BOUNCE);
        body.collide_world_bounds = true;

        Self {
            entity_id,
            body,
            facing: Facing::Right,
            animation: AnimationPlayer::new(player_animations()),
            tint: None,
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Horizontal movement for this frame; `None` stands still and faces the camera.
    pub fn walk(&mut self, direction: Option<Facing>) {
        match direction {
            Some(Facing::Left) => {
                self.facing = Facing::Left;
                self.body.velocity.x = -player::WALK_SPEED;
                self.animation.play(PlayerAnimation::Left, true);
            }
            Some(Facing::Right) => {
                self.facing = Facing::Right;
                self.body.velocity.x = player::WALK_SPEED;
                self.animation.play(PlayerAnimation::Right, true);
            }
            None => {
                self.body.velocity.x = 0.0;
                self.animation.play(PlayerAnimation::Turn, false);
            }
        }
    }

    /// Jumps only when standing on something
    pub fn jump(&mut self) -> bool {
        if self.body.touching.down {
            self.body.velocity.y = player::JUMP_VEL;
            true
        } else {
            false
        }
    }

    /// Where spells launch from: just above the player's center
    pub fn cast_origin(&self) -> Point2<f32> {
        self.body.center() + vec2(0.0, spell::CAST_OFFSET_Y)
    }

    pub fn die(&mut self) {
        self.tint = Some(colors::PLAYER_TINT_DEAD);
        self.animation.play(PlayerAnimation::Turn, false);
    }

    pub fn is_tinted(&self) -> bool {
        self.tint.is_some()
    }

    pub fn current_animation(&self) -> Option<PlayerAnimation> {
        self.animation.current()
    }

    pub fn animation_frame(&self) -> Option<u32> {
        self.animation.frame()
    }
}

impl Entity for Player {
    fn entity_id(&self) -> u32 {
        self.entity_id
    }

    fn entity_class(&self) -> EntityClass {
        EntityClass::Player
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: Duration) {
        self.animation.update(dt);
    }

    fn draw(&self, quads: &mut Vec<Quad>) {
        let bounds = self.body.bounds();
        let robe = self.tint.unwrap_or(colors::PLAYER);
        let hat = self.tint.unwrap_or(colors::PLAYER_HAT);

        quads.push(Quad::new(
            point2(bounds.left() + 4.0, bounds.top() + 12.0),
            vec2(bounds.width() - 8.0, bounds.height() - 20.0),
            robe,
        ));

        // hat brim and crown, the crown leaning the way she faces
        quads.push(Quad::new(
            point2(bounds.left(), bounds.top() + 10.0),
            vec2(bounds.width(), 4.0),
            hat,
        ));
        let lean = self.facing.sign() * 4.0;
        quads.push(Quad::new(
            point2(bounds.left() + 10.0 + lean, bounds.top()),
            vec2(12.0, 10.0),
            hat,
        ));

        // legs follow the run cycle; frame 4 is the standing frame
        let stride = match self.animation.frame() {
            Some(frame) if frame != 4 => (frame % 4) as f32 * 2.0 - 3.0,
            _ => 0.0,
        };
        quads.push(Quad::new(
            point2(bounds.left() + 8.0 + stride, bounds.bottom() - 8.0),
            vec2(5.0, 8.0),
            hat,
        ));
        quads.push(Quad::new(
            point2(bounds.right() - 13.0 - stride, bounds.bottom() - 8.0),
            vec2(5.0, 8.0),
            hat,
        ));
    }
}
