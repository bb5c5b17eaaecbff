//! Brickfall - a brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//!
//! Rendering, raw input handling, and frame scheduling are external
//! collaborators: they call [`sim::advance`] once per display frame and read
//! the resulting state through the snapshot accessors on
//! [`sim::GameState`]. Nothing in this crate draws, blocks, or keeps time.

pub mod sim;

pub use sim::{GameConfig, GamePhase, GameState, TickInput, advance};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 4.0;
    /// Height of the ball spawn point above the bottom edge
    pub const BALL_SPAWN_OFFSET: f32 = 50.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 30.0;

    /// Brick grid defaults - bricks fill the upper half of the arena
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 9;
    pub const BRICK_MARGIN: f32 = 40.0;

    /// Starting lives
    pub const START_LIVES: u32 = 3;
}
