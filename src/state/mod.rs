pub mod app_state;
pub mod constants;
pub mod debug_overlay;
pub mod events;
pub mod game_state;
pub mod game_ui;
pub mod gpu_state;
