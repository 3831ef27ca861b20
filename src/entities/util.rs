use crate::{collision::Body, entity::Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// -1 for left, +1 for right
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

// ---------------------------------------------------------------------------------------------------------------------

/// A flat collection of same-typed entities with per-member active state.
/// Members are never removed, only deactivated.
pub struct Group<E> {
    members: Vec<E>,
}

impl<E> Default for Group<E> {
    fn default() -> Self {
        Self { members: vec![] }
    }
}

impl<E: Entity> Group<E> {
    pub fn push(&mut self, member: E) -> u32 {
        let id = member.entity_id();
        self.members.push(member);
        id
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn count_active(&self) -> usize {
        self.members.iter().filter(|m| m.is_active()).count()
    }

    /// The first member, in insertion order, which is inactive
    pub fn first_inactive_mut(&mut self) -> Option<&mut E> {
        self.members.iter_mut().find(|m| !m.is_active())
    }

    pub fn get(&self, entity_id: u32) -> Option<&E> {
        self.members.iter().find(|m| m.entity_id() == entity_id)
    }

    pub fn get_mut(&mut self, entity_id: u32) -> Option<&mut E> {
        self.members.iter_mut().find(|m| m.entity_id() == entity_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut E> {
        self.members.iter_mut()
    }

    pub fn active(&self) -> impl Iterator<Item = &E> {
        self.members.iter().filter(|m| m.is_active())
    }

    /// Bodies of active members, paired with their entity ids
    pub fn active_bodies(&self) -> Vec<(u32, Body)> {
        self.active().map(|m| (m.entity_id(), *m.body())).collect()
    }
}
