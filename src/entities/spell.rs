use cgmath::*;

use crate::{
    collision::Body,
    entity::{Entity, IdVendor},
    state::constants::spell,
    util::Bounds,
};

use super::{
    util::{Facing, Group},
    EntityClass,
};

// ---------------------------------------------------------------------------------------------------------------------

pub struct Spell {
    entity_id: u32,
    body: Body,
}

impl Spell {
    /// New spells start out inactive, waiting in the pool.
    pub fn new(entity_id: u32) -> Self {
        let mut body = Body::new(point2(0.0, 0.0), vec2(spell::WIDTH, spell::HEIGHT));
        body.enabled = false;
        Self { entity_id, body }
    }

    /// Activates the spell at `origin`, travelling horizontally the way the caster faces.
    pub fn fire(&mut self, origin: Point2<f32>, facing: Facing) {
        self.body.enable_at(origin);
        self.body.velocity.x = facing.sign() * spell::SPEED;
    }

    pub fn deactivate(&mut self) {
        self.body.disable();
    }
}

impl Entity for Spell {
    fn entity_id(&self) -> u32 {
        self.entity_id
    }

    fn entity_class(&self) -> EntityClass {
        EntityClass::Spell
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn collides_with_platforms(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------------------------------------------------

/// Fixed-capacity pool of spells. Casting reuses the first inactive spell; when every spell
/// is in flight the cast is dropped.
pub struct SpellPool {
    spells: Group<Spell>,
}

impl SpellPool {
    pub fn new(capacity: usize, ids: &mut IdVendor) -> Self {
        let mut spells = Group::default();
        for _ in 0..capacity {
            spells.push(Spell::new(ids.next_id()));
        }
        Self { spells }
    }

    /// Fires the first inactive spell from `origin`. Returns the id of the spell fired, or
    /// None if the pool is exhausted.
    pub fn cast(&mut self, origin: Point2<f32>, facing: Facing) -> Option<u32> {
        let spell = self.spells.first_inactive_mut()?;
        spell.fire(origin, facing);
        Some(spell.entity_id())
    }

    /// Returns spells which have left `world` entirely to the pool.
    pub fn recycle_escaped(&mut self, world: &Bounds) -> usize {
        let mut recycled = 0;
        for spell in self.spells.iter_mut() {
            if spell.is_active() && world.is_disjoint(&spell.body().bounds()) {
                spell.deactivate();
                recycled += 1;
            }
        }
        recycled
    }

    pub fn capacity(&self) -> usize {
        self.spells.len()
    }

    pub fn count_active(&self) -> usize {
        self.spells.count_active()
    }

    pub fn spells(&self) -> &Group<Spell> {
        &self.spells
    }

    pub fn spells_mut(&mut self) -> &mut Group<Spell> {
        &mut self.spells
    }
}
