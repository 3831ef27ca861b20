use std::{fmt::Debug, time::Duration};

use crate::{collision::Body, entities::EntityClass, rendering::Quad};

// ---------------------------------------------------------------------------------------------------------------------

/// IDVendor vends a new unique id, starting from 1000, for each entity.
pub struct IdVendor {
    current_id: u32,
}

impl Default for IdVendor {
    fn default() -> Self {
        IdVendor {
            current_id: 1000u32,
        }
    }
}

impl IdVendor {
    pub fn next_id(&mut self) -> u32 {
        let r = self.current_id;
        self.current_id += 1;
        r
    }
}

// ---------------------------------------------------------------------------------------------------------------------

pub trait Entity {
    /// The unique id for this Entity
    fn entity_id(&self) -> u32;

    /// The class represented by this Entity
    fn entity_class(&self) -> EntityClass;

    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Inactive entities are neither simulated, hit tested, nor drawn. Pooled and grouped
    /// entities are deactivated rather than destroyed.
    fn is_active(&self) -> bool {
        self.body().enabled
    }

    /// True if this entity's body should be separated from the static platforms
    fn collides_with_platforms(&self) -> bool {
        true
    }

    /// Advance non-physics state, e.g., animation.
    fn update(&mut self, _dt: Duration) {}

    /// Append the quads which draw this entity. Default implementation fills the body's bounds.
    fn draw(&self, quads: &mut Vec<Quad>) {
        if self.is_active() {
            quads.push(Quad::from_bounds(&self.body().bounds(), self.entity_class().color()));
        }
    }
}

impl Debug for dyn Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Entity id: {} class: {:?} center: {:?} active: {}]",
            self.entity_id(),
            self.entity_class(),
            self.body().center(),
            self.is_active()
        )
    }
}
