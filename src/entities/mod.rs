use crate::state::constants::colors;

pub mod player;
pub mod slime;
pub mod spell;
pub mod star;
pub mod util;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityClass {
    Player,
    Spell,
    Star,
    Slime,
}

impl EntityClass {
    /// Flat color used to draw entities of this class
    pub fn color(&self) -> [f32; 4] {
        match self {
            EntityClass::Player => colors::PLAYER,
            EntityClass::Spell => colors::SPELL,
            EntityClass::Star => colors::STAR,
            EntityClass::Slime => colors::SLIME,
        }
    }
}
