//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical step per `advance` call, no wall-clock time
//! - Collision resolution in a fixed priority order (bricks, paddle, border)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geom;
pub mod state;
pub mod tick;

pub use collision::{
    BorderContact, resolve_border, resolve_bricks, resolve_collisions, resolve_paddle,
};
pub use geom::{Aabb, overlaps};
pub use state::{
    Arena, Ball, Brick, BrickGrid, ConfigError, GameConfig, GamePhase, GameState, Paddle,
};
pub use tick::{TickInput, advance};
