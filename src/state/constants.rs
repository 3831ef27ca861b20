// Units are pixels, seconds, and pixels-per-second unless otherwise specified.
// The world is y-down: gravity is positive, jumping is a negative vertical velocity.

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "Forest Witch";

pub const WORLD_WIDTH: f32 = 800.0 * 2.0;
pub const WORLD_HEIGHT: f32 = 600.0;
pub const GRAVITY: f32 = 300.0;

/// Physics advances in fixed ticks regardless of frame rate
pub const PHYSICS_TIMESTEP: f32 = 1.0 / 60.0;
/// Largest frame delta fed to the simulation; protects against huge steps after a stall
pub const MAX_FRAME_DT_MS: u64 = 32;

pub const CAMERA_LERP: f32 = 0.05;

pub mod player {
    pub const START_X: f32 = 100.0;
    pub const START_Y: f32 = 450.0;
    pub const WIDTH: f32 = 32.0;
    pub const HEIGHT: f32 = 48.0;
    pub const BOUNCE: f32 = 0.2;
    pub const WALK_SPEED: f32 = 160.0;
    pub const JUMP_VEL: f32 = -340.0;
}

pub mod spell {
    pub const POOL_SIZE: usize = 30;
    pub const SPEED: f32 = 900.0;
    pub const WIDTH: f32 = 24.0;
    pub const HEIGHT: f32 = 12.0;
    /// Spells are launched this far above the caster's center
    pub const CAST_OFFSET_Y: f32 = -20.0;
    pub const STARTING_AMMO: i32 = 30;
}

pub mod star {
    pub const COUNT: usize = 10;
    pub const FIRST_X: f32 = 12.0;
    pub const STEP_X: f32 = 150.0;
    pub const WIDTH: f32 = 24.0;
    pub const HEIGHT: f32 = 22.0;
    pub const MIN_BOUNCE: f32 = 0.4;
    pub const MAX_BOUNCE: f32 = 0.8;
}

pub mod slime {
    pub const SPAWN_Y: f32 = 16.0;
    pub const SIZE: f32 = 18.0;
    pub const BOUNCE: f32 = 1.0;
    pub const MAX_SPAWN_VEL_X: i32 = 200;
    pub const SPAWN_VEL_Y: f32 = 20.0;
    /// Slimes spawn on the half of the first screen away from the player
    pub const SPAWN_SPLIT_X: i32 = 400;
    pub const SPAWN_FAR_X: i32 = 800;
}

pub mod platforms {
    /// (center x, center y, scale) for each static platform
    pub const LAYOUT: [(f32, f32, f32); 8] = [
        (400.0, 618.0, 2.0),
        (800.0, 618.0, 2.0),
        (1600.0, 618.0, 2.0),
        (600.0, 425.0, 1.0),
        (50.0, 250.0, 1.0),
        (750.0, 220.0, 1.0),
        (1300.0, 420.0, 1.0),
        (1350.0, 140.0, 1.0),
    ];
    pub const WIDTH: f32 = 400.0;
    pub const HEIGHT: f32 = 32.0;
}

pub mod backdrop {
    pub const PANEL_COUNT: usize = 3;
    pub const PANEL_SPACING: f32 = 400.0;
    pub const PANEL_CENTER_Y: f32 = 250.0;
    pub const PANEL_WIDTH: f32 = 928.0;
    pub const PANEL_HEIGHT: f32 = 793.0;
}

pub mod hud {
    pub const SCORE_ORIGIN: (f32, f32) = (16.0, 16.0);
    pub const SCORE_FONT_PX: f32 = 32.0;
    pub const AMMO_ORIGIN: (f32, f32) = (16.0, 56.0);
    pub const AMMO_FONT_PX: f32 = 28.0;
}

pub mod colors {
    pub const SKY: [f32; 4] = [0.53, 0.75, 0.86, 1.0];
    pub const BACKDROP_NEAR: [f32; 4] = [0.16, 0.34, 0.22, 1.0];
    pub const BACKDROP_FAR: [f32; 4] = [0.22, 0.42, 0.30, 1.0];
    pub const PLATFORM: [f32; 4] = [0.42, 0.30, 0.18, 1.0];
    pub const PLATFORM_TOP: [f32; 4] = [0.30, 0.62, 0.24, 1.0];
    pub const PLAYER: [f32; 4] = [0.20, 0.36, 0.86, 1.0];
    pub const PLAYER_HAT: [f32; 4] = [0.10, 0.12, 0.36, 1.0];
    pub const PLAYER_TINT_DEAD: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const STAR: [f32; 4] = [1.0, 0.86, 0.12, 1.0];
    pub const SLIME: [f32; 4] = [0.38, 0.86, 0.32, 1.0];
    pub const SPELL: [f32; 4] = [0.45, 0.85, 1.0, 1.0];
    pub const SCORE_TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const AMMO_TEXT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const DEBUG_BODY: [f32; 4] = [1.0, 0.0, 1.0, 0.35];
    pub const DEBUG_TOUCHING: [f32; 4] = [0.0, 1.0, 0.0, 0.6];
}
