use tracing::info;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::events::{GameEvent, GameOverReason, SegmentRole};
use crate::food;
use crate::grid::Grid;
use crate::input::{Direction, InputBuffer, InputFrame};
use crate::rng::SeededRandom;
use crate::scheduler::{self, MovementScheduler, StepContext, StepOutcome};
use crate::snake::{Body, Position};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Mutable state of one round, recreated on every start or restart.
#[derive(Debug, Clone)]
pub struct Round {
    pub(crate) body: Body,
    pub(crate) food: Option<Position>,
    pub(crate) direction: Direction,
    pub(crate) input: InputBuffer,
    pub(crate) score: u32,
    pub(crate) move_interval: f32,
    pub(crate) status: GameStatus,
    pub(crate) game_over_reason: Option<GameOverReason>,
}

impl Round {
    pub(crate) fn new(move_interval: f32) -> Self {
        Self {
            body: Body::default(),
            food: None,
            direction: Direction::Right,
            input: InputBuffer::new(),
            score: 0,
            move_interval,
            status: GameStatus::Playing,
            game_over_reason: None,
        }
    }

    /// Human-readable status line for the host's score display.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::Playing => format!("Score: {}", self.score),
            GameStatus::GameOver => {
                format!("Game Over! Score: {}  Press R to Restart", self.score)
            }
        }
    }

    pub(crate) fn place_food(&mut self, position: Position, events: &mut Vec<GameEvent>) {
        if let Some(stale) = self.food.replace(position) {
            events.push(GameEvent::FoodRemoved { position: stale });
        }
        events.push(GameEvent::FoodPlaced { position });
    }

    /// Transitions to `GameOver`. Later calls keep the first reason.
    pub(crate) fn end(&mut self, reason: GameOverReason, events: &mut Vec<GameEvent>) {
        if self.status == GameStatus::GameOver {
            return;
        }

        self.status = GameStatus::GameOver;
        self.game_over_reason = Some(reason);
        info!(score = self.score, ?reason, "round over");

        events.push(GameEvent::RoundEnded { reason });
        events.push(GameEvent::StatusChanged {
            text: self.status_text(),
        });
    }
}

/// One snake game instance: configuration, round state, scheduler and PRNG.
///
/// All state is owned here and only advances inside [`Game::update`] (or the
/// explicit [`Game::step`] / [`Game::restart`] commands).
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    rng: SeededRandom,
    scheduler: MovementScheduler,
    round: Round,
    events: Vec<GameEvent>,
}

impl Game {
    /// Validates `config`, seeds the PRNG once and starts the first round.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;

        let mut game = Self {
            config,
            grid,
            rng: SeededRandom::new(seed),
            scheduler: MovementScheduler::new(),
            round: Round::new(config.base_move_interval),
            events: vec![GameEvent::BorderPlaced {
                width: grid.width(),
                height: grid.height(),
            }],
        };
        game.start();
        Ok(game)
    }

    /// Resets the round: canonical body facing right, zero score, base
    /// interval, empty input queue, fresh food.
    pub fn restart(&mut self) {
        for position in self.round.body.clear() {
            self.events.push(GameEvent::SegmentRemoved { position });
        }
        if let Some(position) = self.round.food.take() {
            self.events.push(GameEvent::FoodRemoved { position });
        }
        self.start();
    }

    fn start(&mut self) {
        self.round = Round::new(self.config.base_move_interval);
        self.round.body = Body::canonical(self.grid.width(), self.grid.height());
        self.scheduler.reset();

        let head = self.round.body.head();
        for position in self.round.body.segments() {
            let role = if Some(*position) == head {
                SegmentRole::Head
            } else {
                SegmentRole::Body
            };
            self.events.push(GameEvent::SegmentSpawned {
                position: *position,
                role,
            });
        }
        self.events.push(GameEvent::StatusChanged {
            text: self.round.status_text(),
        });
        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            "round started"
        );

        match food::spawn(&self.round.body, self.grid, &mut self.rng) {
            Ok(position) => self.round.place_food(position, &mut self.events),
            Err(food::BoardFull) => self.round.end(GameOverReason::BoardFull, &mut self.events),
        }
    }

    /// Advances the simulation by one host frame.
    ///
    /// Input edges are always processed, so a restart is caught while the
    /// round is over. Direction edges are only offered while playing and
    /// are handled before the restart edge.
    pub fn update(&mut self, dt: f32, input: InputFrame) -> u32 {
        if self.round.status == GameStatus::Playing {
            if let Some(direction) = input.pressed_direction() {
                self.round.input.try_enqueue(direction, self.round.direction);
            }
        }

        if input.restart_pressed() {
            self.restart();
        }

        let mut ctx = StepContext {
            grid: self.grid,
            config: &self.config,
            rng: &mut self.rng,
            events: &mut self.events,
        };
        self.scheduler.tick(dt, &mut self.round, &mut ctx)
    }

    /// Performs one movement step immediately, bypassing the time accumulator.
    pub fn step(&mut self) -> StepOutcome {
        let mut ctx = StepContext {
            grid: self.grid,
            config: &self.config,
            rng: &mut self.rng,
            events: &mut self.events,
        };
        scheduler::step(&mut self.round, &mut ctx)
    }

    /// Offers a direction change to the input queue directly.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if self.round.status != GameStatus::Playing {
            return false;
        }
        self.round.input.try_enqueue(direction, self.round.direction)
    }

    /// Replaces the body, heading and food of the current round.
    ///
    /// Used to stage specific board layouts; emits no presentation events.
    pub fn arrange(&mut self, body: Body, direction: Direction, food: Position) {
        self.round.body = body;
        self.round.direction = direction;
        self.round.food = Some(food);
        self.round.input.clear();
    }

    /// Takes every presentation event produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.round.status
    }

    #[must_use]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.round.game_over_reason
    }

    #[must_use]
    pub fn status_text(&self) -> String {
        self.round.status_text()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.round.score
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.round.body
    }

    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.round.food
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.round.direction
    }

    #[must_use]
    pub fn move_interval(&self) -> f32 {
        self.round.move_interval
    }

    #[must_use]
    pub fn time_accumulator(&self) -> f32 {
        self.scheduler.accumulator()
    }

    /// Directions waiting to be applied, oldest first.
    #[must_use]
    pub fn pending_directions(&self) -> Vec<Direction> {
        self.round.input.pending().collect()
    }
}
