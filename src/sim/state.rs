//! Game state and core simulation types
//!
//! The [`GameState`] aggregate is the single mutable value owned by the
//! simulation loop; every sub-entity is owned by it exclusively. Renderers
//! read it through the snapshot accessors and never mutate it.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Aabb;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ticking suspended by the player; resumes where it left off
    Paused,
    /// A life was just lost; waiting for the continue input
    LifeLost,
    /// Out of lives. Terminal
    GameOver,
    /// Every brick destroyed. Terminal
    Complete,
}

/// The playfield bounds, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn centered horizontally, a fixed offset above the bottom edge,
    /// always launching up and to the right
    pub fn spawn(arena: &Arena, radius: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(arena.width / 2.0, arena.height - BALL_SPAWN_OFFSET),
            vel: Vec2::new(speed, -speed),
            radius,
        }
    }

    /// Circumscribing square used for all collision tests
    pub fn rect(&self) -> Aabb {
        Aabb::from_center_half_extent(self.pos, self.radius)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal distance covered per tick at full input
    pub speed: f32,
}

impl Paddle {
    /// Spawn centered horizontally, flush with the bottom edge
    pub fn spawn(arena: &Arena, width: f32, height: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new((arena.width - width) / 2.0, arena.height - height),
            width,
            height,
            speed,
        }
    }

    /// Move horizontally by `delta`, clamped to the arena. Oversized deltas
    /// clamp silently; per-frame input is always a small increment.
    pub fn move_by(&mut self, delta: f32, arena: &Arena) {
        self.pos.x = (self.pos.x + delta).clamp(0.0, arena.width - self.width);
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(self.width, self.height))
    }
}

/// A single brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// One-way flag: set by the collision resolver, never cleared.
    /// Destroyed bricks stay in the collection and are logically inert
    pub destroyed: bool,
}

impl Brick {
    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(self.width, self.height))
    }
}

/// The brick field, laid out once per session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub bricks: Vec<Brick>,
    pub rows: u32,
    pub cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub margin: f32,
}

/// Brick cell size before ceil rounding. Negative when the margins leave no
/// room for the grid, which validation rejects up front.
fn raw_cell_size(arena: &Arena, rows: u32, cols: u32, margin: f32) -> (f32, f32) {
    (
        (arena.width - (cols + 1) as f32 * margin) / cols as f32,
        (arena.height / 2.0 - (rows + 1) as f32 * margin) / rows as f32,
    )
}

impl BrickGrid {
    /// Deterministic grid placement over the upper half of the arena.
    ///
    /// Insertion order is column-major, but positions depend only on the
    /// indices, so iteration order carries no gameplay meaning.
    pub fn layout(arena: &Arena, rows: u32, cols: u32, margin: f32) -> Self {
        let (cell_w, cell_h) = raw_cell_size(arena, rows, cols, margin);
        let brick_width = cell_w.ceil();
        let brick_height = cell_h.ceil();

        let mut bricks = Vec::with_capacity((rows * cols) as usize);
        for col in 0..cols {
            for row in 0..rows {
                bricks.push(Brick {
                    pos: Vec2::new(
                        col as f32 * brick_width + margin * (col + 1) as f32,
                        row as f32 * brick_height + margin * (row + 1) as f32,
                    ),
                    width: brick_width,
                    height: brick_height,
                    destroyed: false,
                });
            }
        }

        log::debug!("laid out {rows}x{cols} bricks at {brick_width}x{brick_height}");

        Self {
            bricks,
            rows,
            cols,
            brick_width,
            brick_height,
            margin,
        }
    }

    /// Total brick count, destroyed or not
    pub fn total(&self) -> u32 {
        self.rows * self.cols
    }
}

/// Session configuration, validated once at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_margin: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub start_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_margin: BRICK_MARGIN,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            start_lives: START_LIVES,
        }
    }
}

impl GameConfig {
    /// Reject malformed configurations before any state is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(ConfigError::InvalidArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.brick_rows,
                cols: self.brick_cols,
            });
        }
        if self.ball_radius <= 0.0 || self.ball_speed <= 0.0 {
            return Err(ConfigError::InvalidBall {
                radius: self.ball_radius,
                speed: self.ball_speed,
            });
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 || self.paddle_speed <= 0.0 {
            return Err(ConfigError::InvalidPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
                speed: self.paddle_speed,
            });
        }
        if self.brick_margin < 0.0 {
            return Err(ConfigError::NegativeMargin {
                margin: self.brick_margin,
            });
        }
        if self.start_lives == 0 {
            return Err(ConfigError::NoStartingLives);
        }

        let arena = Arena {
            width: self.arena_width,
            height: self.arena_height,
        };
        let (cell_w, cell_h) = raw_cell_size(&arena, self.brick_rows, self.brick_cols, self.brick_margin);
        if cell_w <= 0.0 || cell_h <= 0.0 {
            return Err(ConfigError::GridDoesNotFit {
                brick_width: cell_w,
                brick_height: cell_h,
            });
        }

        Ok(())
    }
}

/// Rejected configuration; the simulation never starts in a malformed state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Arena dimensions must both be positive
    InvalidArena { width: f32, height: f32 },
    /// The grid needs at least one row and one column
    EmptyGrid { rows: u32, cols: u32 },
    /// Ball radius and speed must both be positive
    InvalidBall { radius: f32, speed: f32 },
    /// Paddle dimensions and speed must all be positive
    InvalidPaddle { width: f32, height: f32, speed: f32 },
    /// Brick margin cannot be negative
    NegativeMargin { margin: f32 },
    /// A game with zero lives would be over before the first tick
    NoStartingLives,
    /// The margins leave no positive cell size for the bricks
    GridDoesNotFit { brick_width: f32, brick_height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidArena { width, height } => {
                write!(f, "arena dimensions must be positive, got {width}x{height}")
            }
            ConfigError::EmptyGrid { rows, cols } => {
                write!(f, "brick grid must be non-empty, got {rows}x{cols}")
            }
            ConfigError::InvalidBall { radius, speed } => {
                write!(f, "ball radius and speed must be positive, got radius {radius}, speed {speed}")
            }
            ConfigError::InvalidPaddle { width, height, speed } => {
                write!(
                    f,
                    "paddle dimensions and speed must be positive, got {width}x{height} at speed {speed}"
                )
            }
            ConfigError::NegativeMargin { margin } => {
                write!(f, "brick margin cannot be negative, got {margin}")
            }
            ConfigError::NoStartingLives => write!(f, "starting lives must be at least 1"),
            ConfigError::GridDoesNotFit { brick_width, brick_height } => {
                write!(
                    f,
                    "brick margins leave no room for the grid (cell would be {brick_width}x{brick_height})"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Complete game state, the single mutable aggregate owned by the
/// simulation loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: BrickGrid,
    pub score: u32,
    pub lives: u32,
    /// Count of bricks with `destroyed` set; monotonically non-decreasing
    pub destroyed_count: u32,
    pub phase: GamePhase,
    /// Retained so ball and paddle resets reuse the session's tuning
    config: GameConfig,
}

impl GameState {
    /// Validate the configuration and build the starting state
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let arena = Arena {
            width: config.arena_width,
            height: config.arena_height,
        };

        Ok(Self {
            ball: Ball::spawn(&arena, config.ball_radius, config.ball_speed),
            paddle: Paddle::spawn(
                &arena,
                config.paddle_width,
                config.paddle_height,
                config.paddle_speed,
            ),
            grid: BrickGrid::layout(&arena, config.brick_rows, config.brick_cols, config.brick_margin),
            score: 0,
            lives: config.start_lives,
            destroyed_count: 0,
            phase: GamePhase::Playing,
            arena,
            config,
        })
    }

    /// Put the ball back at its spawn point (after a lost life)
    pub fn reset_ball(&mut self) {
        self.ball = Ball::spawn(&self.arena, self.config.ball_radius, self.config.ball_speed);
    }

    /// Re-center the paddle (after a lost life)
    pub fn reset_paddle(&mut self) {
        self.paddle = Paddle::spawn(
            &self.arena,
            self.config.paddle_width,
            self.config.paddle_height,
            self.config.paddle_speed,
        );
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Ball bounds for the renderer
    pub fn ball_rect(&self) -> Aabb {
        self.ball.rect()
    }

    /// Paddle bounds for the renderer
    pub fn paddle_rect(&self) -> Aabb {
        self.paddle.rect()
    }

    /// Brick bounds and destroyed flags for the renderer
    pub fn brick_rects(&self) -> impl Iterator<Item = (Aabb, bool)> + '_ {
        self.grid.bricks.iter().map(|b| (b.rect(), b.destroyed))
    }
}
