//! Collision detection and response for one simulation tick
//!
//! Resolution runs in a fixed priority order: bricks, then paddle, then the
//! arena border. The order matters because each check can flip a velocity
//! component consumed by later checks, and only one border consequence may
//! fire per tick. The three categories are otherwise independent; each may
//! fire in the same tick as another.

use super::geom::overlaps;
use super::state::{Arena, Ball, BrickGrid, GameState, Paddle};

/// Outcome of the border check for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderContact {
    None,
    /// Left or right border; horizontal velocity was inverted
    Side,
    /// Top border; vertical velocity was inverted
    Top,
    /// Bottom border; no bounce - the state machine turns this into a life loss
    Bottom,
}

/// Run all three collision categories in order, applying score and
/// destroyed-count side effects. Returns the border outcome for the
/// state machine.
pub fn resolve_collisions(state: &mut GameState) -> BorderContact {
    let hits = resolve_bricks(&mut state.ball, &mut state.grid);
    state.score += hits;
    state.destroyed_count += hits;

    resolve_paddle(&mut state.ball, &state.paddle);
    resolve_border(&mut state.ball, &state.arena)
}

/// Destroy every live brick overlapping the ball, inverting the vertical
/// velocity once per hit. Returns the number of bricks destroyed this tick.
///
/// The loop deliberately does not stop at the first hit: when the ball
/// straddles several bricks at once, each one flips the velocity, so an even
/// number of simultaneous hits leaves it pointing the same way.
pub fn resolve_bricks(ball: &mut Ball, grid: &mut BrickGrid) -> u32 {
    let ball_rect = ball.rect();
    let mut destroyed = 0;

    for brick in &mut grid.bricks {
        if !brick.destroyed && overlaps(&ball_rect, &brick.rect()) {
            ball.vel.y = -ball.vel.y;
            brick.destroyed = true;
            destroyed += 1;
        }
    }

    destroyed
}

/// Invert the vertical velocity when the ball's bottom edge has passed the
/// paddle's top edge while horizontally within the paddle. Reflection is
/// purely vertical; the contact point adds no horizontal deflection.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle) {
    let past_top = ball.pos.y + ball.radius > paddle.pos.y;
    let within_left = ball.pos.x + ball.radius > paddle.pos.x;
    let within_right = ball.pos.x - ball.radius < paddle.pos.x + paddle.width;

    if past_top && within_left && within_right {
        ball.vel.y = -ball.vel.y;
    }
}

/// Bounce off the left, right, or top border; report bottom contact without
/// bouncing. At most one border fires per tick.
pub fn resolve_border(ball: &mut Ball, arena: &Arena) -> BorderContact {
    if ball.pos.x - ball.radius < 0.0 {
        ball.vel.x = -ball.vel.x;
        BorderContact::Side
    } else if ball.pos.x + ball.radius > arena.width {
        ball.vel.x = -ball.vel.x;
        BorderContact::Side
    } else if ball.pos.y - ball.radius < 0.0 {
        ball.vel.y = -ball.vel.y;
        BorderContact::Top
    } else if ball.pos.y + ball.radius > arena.height {
        BorderContact::Bottom
    } else {
        BorderContact::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Brick;
    use glam::Vec2;

    fn arena() -> Arena {
        Arena {
            width: 1280.0,
            height: 720.0,
        }
    }

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 10.0,
        }
    }

    fn grid_of(bricks: Vec<Brick>) -> BrickGrid {
        let rows = bricks.len() as u32;
        BrickGrid {
            bricks,
            rows,
            cols: 1,
            brick_width: 98.0,
            brick_height: 24.0,
            margin: 40.0,
        }
    }

    fn brick_at(x: f32, y: f32) -> Brick {
        Brick {
            pos: Vec2::new(x, y),
            width: 98.0,
            height: 24.0,
            destroyed: false,
        }
    }

    #[test]
    fn test_brick_hit_destroys_and_reflects() {
        let mut ball = ball_at(89.0, 70.0, 4.0, -4.0);
        let mut grid = grid_of(vec![brick_at(40.0, 40.0)]);

        let hits = resolve_bricks(&mut ball, &mut grid);
        assert_eq!(hits, 1);
        assert!(grid.bricks[0].destroyed);
        assert_eq!(ball.vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_destroyed_bricks_are_inert() {
        let mut ball = ball_at(89.0, 70.0, 4.0, -4.0);
        let mut grid = grid_of(vec![brick_at(40.0, 40.0)]);
        grid.bricks[0].destroyed = true;

        let hits = resolve_bricks(&mut ball, &mut grid);
        assert_eq!(hits, 0);
        assert_eq!(ball.vel, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn test_simultaneous_hits_each_flip_velocity() {
        // Two bricks stacked so the ball square straddles both: two flips
        // cancel and the ball keeps its vertical direction
        let mut ball = ball_at(89.0, 64.0, 4.0, -4.0);
        let mut grid = grid_of(vec![brick_at(40.0, 40.0), brick_at(40.0, 64.0)]);

        let hits = resolve_bricks(&mut ball, &mut grid);
        assert_eq!(hits, 2);
        assert!(grid.bricks.iter().all(|b| b.destroyed));
        assert_eq!(ball.vel, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn test_paddle_reflects_within_bounds() {
        let paddle = Paddle {
            pos: Vec2::new(580.0, 710.0),
            width: 120.0,
            height: 10.0,
            speed: 30.0,
        };

        let mut ball = ball_at(640.0, 705.0, 4.0, 4.0);
        resolve_paddle(&mut ball, &paddle);
        assert_eq!(ball.vel, Vec2::new(4.0, -4.0));

        // Horizontally clear of the paddle: no reflection
        let mut ball = ball_at(100.0, 705.0, 4.0, 4.0);
        resolve_paddle(&mut ball, &paddle);
        assert_eq!(ball.vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_left_border_inverts_horizontal() {
        let mut ball = ball_at(1.0, 300.0, -4.0, -4.0);
        let contact = resolve_border(&mut ball, &arena());
        assert_eq!(contact, BorderContact::Side);
        assert_eq!(ball.vel, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn test_right_border_inverts_horizontal() {
        let mut ball = ball_at(1275.0, 300.0, 4.0, 4.0);
        let contact = resolve_border(&mut ball, &arena());
        assert_eq!(contact, BorderContact::Side);
        assert_eq!(ball.vel, Vec2::new(-4.0, 4.0));
    }

    #[test]
    fn test_top_border_inverts_vertical() {
        let mut ball = ball_at(300.0, 5.0, 4.0, -4.0);
        let contact = resolve_border(&mut ball, &arena());
        assert_eq!(contact, BorderContact::Top);
        assert_eq!(ball.vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_bottom_border_reports_without_bouncing() {
        let mut ball = ball_at(300.0, 715.0, 4.0, 4.0);
        let contact = resolve_border(&mut ball, &arena());
        assert_eq!(contact, BorderContact::Bottom);
        assert_eq!(ball.vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_border_misses_inside_arena() {
        let mut ball = ball_at(640.0, 360.0, 4.0, 4.0);
        let contact = resolve_border(&mut ball, &arena());
        assert_eq!(contact, BorderContact::None);
        assert_eq!(ball.vel, Vec2::new(4.0, 4.0));
    }
}
