use cgmath::*;
use rand::Rng;

use crate::{
    collision::Body,
    entity::{Entity, IdVendor},
    state::constants::star,
};

use super::{util::Group, EntityClass};

// ---------------------------------------------------------------------------------------------------------------------

pub struct Star {
    entity_id: u32,
    body: Body,
}

impl Star {
    pub fn new(entity_id: u32, center: Point2<f32>, bounce_y: f32) -> Self {
        let mut body = Body::new(center, vec2(star::WIDTH, star::HEIGHT));
        body.bounce = vec2(0.0, bounce_y);
        Self { entity_id, body }
    }

    pub fn collect(&mut self) {
        self.body.disable();
    }
}

impl Entity for Star {
    fn entity_id(&self) -> u32 {
        self.entity_id
    }

    fn entity_class(&self) -> EntityClass {
        EntityClass::Star
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

// ---------------------------------------------------------------------------------------------------------------------

/// The collectible stars. A row dropped from the top of the world, each with its own
/// springiness; once all are collected they all drop again from where they were.
pub struct StarGroup {
    stars: Group<Star>,
}

impl StarGroup {
    pub fn new<R: Rng>(ids: &mut IdVendor, rng: &mut R) -> Self {
        let mut stars = Group::default();
        for i in 0..star::COUNT {
            let center = point2(star::FIRST_X + star::STEP_X * i as f32, 0.0);
            let bounce_y = rng.gen_range(star::MIN_BOUNCE..=star::MAX_BOUNCE);
            stars.push(Star::new(ids.next_id(), center, bounce_y));
        }
        Self { stars }
    }

    pub fn count_active(&self) -> usize {
        self.stars.count_active()
    }

    /// Disables the star with `star_id`. Returns false if no such active star exists.
    pub fn collect(&mut self, star_id: u32) -> bool {
        match self.stars.get_mut(star_id) {
            Some(star) if star.is_active() => {
                star.collect();
                true
            }
            _ => false,
        }
    }

    /// Re-enables every star at its current x, at the top of the world. Returns how many stars
    /// were reactivated.
    pub fn respawn_all(&mut self) -> usize {
        let mut respawned = 0;
        for star in self.stars.iter_mut() {
            if !star.is_active() {
                respawned += 1;
            }
            let x = star.body().center().x;
            star.body_mut().enable_at(point2(x, 0.0));
        }
        respawned
    }

    pub fn stars(&self) -> &Group<Star> {
        &self.stars
    }

    pub fn stars_mut(&mut self) -> &mut Group<Star> {
        &mut self.stars
    }
}
