use crate::entities::util::Facing;

/// An Event payload for Message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Sent by the player when she overlaps an active star
    StarTouched { star_id: u32 },

    /// Sent by the player when she collides with an active slime. Ends the game.
    SlimeTouched { slime_id: u32 },

    /// Sent by a spell when it collides with an active slime
    SpellHitSlime { spell_id: u32, slime_id: u32 },

    /// Sent by the scene's input handling to request a spell be cast.
    /// Ammo is spent whether or not the pool had a spell available.
    CastSpell { facing: Facing },
}
