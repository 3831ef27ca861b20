use cgmath::*;
use rand::Rng;

use crate::{
    collision::Body,
    entity::{Entity, IdVendor},
    state::constants::slime,
};

use super::{util::Group, EntityClass};

// ---------------------------------------------------------------------------------------------------------------------

pub struct Slime {
    entity_id: u32,
    body: Body,
}

impl Slime {
    pub fn new(entity_id: u32, center: Point2<f32>, velocity: Vector2<f32>) -> Self {
        let mut body = Body::new(center, vec2(slime::SIZE, slime::SIZE));
        body.bounce = vec2(slime::BOUNCE, slime::BOUNCE);
        body.collide_world_bounds = true;
        body.velocity = velocity;
        Self { entity_id, body }
    }

    pub fn kill(&mut self) {
        self.body.disable();
    }
}

impl Entity for Slime {
    fn entity_id(&self) -> u32 {
        self.entity_id
    }

    fn entity_class(&self) -> EntityClass {
        EntityClass::Slime
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

// ---------------------------------------------------------------------------------------------------------------------

/// Picks a spawn x on the half of the first screen away from the player.
pub fn spawn_x<R: Rng>(player_x: f32, rng: &mut R) -> f32 {
    let x = if player_x < slime::SPAWN_SPLIT_X as f32 {
        rng.gen_range(slime::SPAWN_SPLIT_X..=slime::SPAWN_FAR_X)
    } else {
        rng.gen_range(0..=slime::SPAWN_SPLIT_X)
    };
    x as f32
}

/// The hazards. Slimes are only ever added; a slime hit by a spell is deactivated but
/// remains in the group.
#[derive(Default)]
pub struct SlimeGroup {
    slimes: Group<Slime>,
}

impl SlimeGroup {
    /// Spawns a slime at `x` near the top of the world, with a random horizontal drift.
    /// Returns the new slime's id.
    pub fn spawn<R: Rng>(&mut self, ids: &mut IdVendor, x: f32, rng: &mut R) -> u32 {
        let vel_x = rng.gen_range(-slime::MAX_SPAWN_VEL_X..=slime::MAX_SPAWN_VEL_X) as f32;
        let slime = Slime::new(
            ids.next_id(),
            point2(x, slime::SPAWN_Y),
            vec2(vel_x, slime::SPAWN_VEL_Y),
        );
        log::debug!("Spawned slime {} at x: {} vel_x: {}", slime.entity_id(), x, vel_x);
        self.slimes.push(slime)
    }

    /// Deactivates the slime with `slime_id`. Returns false if no such active slime exists.
    pub fn kill(&mut self, slime_id: u32) -> bool {
        match self.slimes.get_mut(slime_id) {
            Some(slime) if slime.is_active() => {
                slime.kill();
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.slimes.len()
    }

    pub fn count_active(&self) -> usize {
        self.slimes.count_active()
    }

    pub fn slimes(&self) -> &Group<Slime> {
        &self.slimes
    }

    pub fn slimes_mut(&mut self) -> &mut Group<Slime> {
        &mut self.slimes
    }
}
