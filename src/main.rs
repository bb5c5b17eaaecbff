//! Brickfall entry point
//!
//! Headless demo driver: stands in for the external frame scheduler by
//! invoking the simulation at a fixed cadence with a scripted paddle policy,
//! logging the values a renderer would draw. All decision logic stays in the
//! `sim` module; this loop only produces intents and reads snapshots.

use std::time::{Duration, Instant};

use brickfall::consts::*;
use brickfall::sim::{GameConfig, GamePhase, GameState, TickInput, advance};

/// Driver state wrapping the simulation with a fixed-timestep accumulator
struct Driver {
    state: GameState,
    input: TickInput,
    accumulator: f32,
    last_time: Instant,
    last_score: u32,
}

impl Driver {
    fn new(state: GameState) -> Self {
        Self {
            state,
            input: TickInput::default(),
            accumulator: 0.0,
            last_time: Instant::now(),
            last_score: 0,
        }
    }

    /// Run pending simulation ticks for the elapsed frame time
    fn update(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_time).as_secs_f32().min(0.1);
        self.last_time = now;
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.input.paddle_delta = self.track_ball();
            advance(&mut self.state, &self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot intents after processing
            self.input.pause = false;
            self.input.resume = false;
        }

        if self.state.score != self.last_score {
            log::debug!(
                "score {}, {} bricks left",
                self.state.score,
                self.state.grid.total() - self.state.destroyed_count
            );
            self.last_score = self.state.score;
        }
    }

    /// Scripted policy: step toward the ball, capped at the paddle speed
    fn track_ball(&self) -> f32 {
        let paddle_center = self.state.paddle.pos.x + self.state.paddle.width / 2.0;
        let diff = self.state.ball.pos.x - paddle_center;
        diff.clamp(-self.state.paddle.speed, self.state.paddle.speed)
    }
}

fn load_config(path: &str) -> GameConfig {
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| serde_json::from_str(&json).map_err(|e| e.to_string()));

    match parsed {
        Ok(config) => config,
        Err(e) => {
            log::warn!("could not load config from {path}: {e}; using defaults");
            GameConfig::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path),
        None => GameConfig::default(),
    };

    let state = match GameState::new(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "starting: {}x{} arena, {} bricks, {} lives",
        state.arena.width,
        state.arena.height,
        state.grid.total(),
        state.lives
    );

    let mut driver = Driver::new(state);
    loop {
        driver.update();

        match driver.state.phase {
            GamePhase::GameOver | GamePhase::Complete => break,
            // The demo always continues after a lost life
            GamePhase::LifeLost => driver.input.resume = true,
            _ => {}
        }

        std::thread::sleep(Duration::from_secs_f32(SIM_DT / 4.0));
    }

    log::info!(
        "finished: {:?} with score {} and {} lives left",
        driver.state.phase,
        driver.state.score,
        driver.state.lives
    );
}
