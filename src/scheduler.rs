use tracing::{debug, trace};

use crate::collision::{classify, Collision};
use crate::config::GameConfig;
use crate::events::{GameEvent, GameOverReason, SegmentRole};
use crate::food;
use crate::game::{GameStatus, Round};
use crate::grid::Grid;
use crate::rng::SeededRandom;

/// Result of one discrete movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The snake slid forward one cell.
    Moved,
    /// The snake ate food and grew by one segment.
    Ate,
    /// The step ended the round.
    Ended(GameOverReason),
    /// Nothing happened: the round is over or the body is empty.
    Skipped,
}

/// Shared collaborators a step reads or feeds.
pub struct StepContext<'a> {
    pub grid: Grid,
    pub config: &'a GameConfig,
    pub rng: &'a mut SeededRandom,
    pub events: &'a mut Vec<GameEvent>,
}

/// Converts frame time into discrete movement steps.
///
/// Time is accumulated and one step is taken per elapsed move interval. The
/// interval is subtracted rather than the accumulator zeroed, so the
/// remainder carries into the next frame.
#[derive(Debug, Clone, Default)]
pub struct MovementScheduler {
    accumulator: f32,
}

impl MovementScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds accumulated toward the next step.
    #[must_use]
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Adds `dt` and runs every step that is due. Returns the number of steps taken.
    ///
    /// Negative or non-finite `dt` counts as zero. Catch-up stops as soon as
    /// a step ends the round.
    pub fn tick(&mut self, dt: f32, round: &mut Round, ctx: &mut StepContext<'_>) -> u32 {
        if round.status != GameStatus::Playing {
            return 0;
        }

        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.accumulator += dt;

        let mut steps = 0;
        while round.status == GameStatus::Playing && self.accumulator >= round.move_interval {
            self.accumulator -= round.move_interval;
            step(round, ctx);
            steps += 1;
        }

        steps
    }
}

/// Performs exactly one movement step on `round`.
pub fn step(round: &mut Round, ctx: &mut StepContext<'_>) -> StepOutcome {
    if round.status != GameStatus::Playing {
        return StepOutcome::Skipped;
    }
    let Some(head) = round.body.head() else {
        return StepOutcome::Skipped;
    };

    if let Some(direction) = round.input.dequeue() {
        round.direction = direction;
    }

    let new_head = head.step(round.direction);
    trace!(?new_head, direction = ?round.direction, "step");

    match classify(new_head, &round.body, ctx.grid) {
        Collision::Wall => {
            round.end(GameOverReason::Wall, ctx.events);
            return StepOutcome::Ended(GameOverReason::Wall);
        }
        Collision::SelfHit => {
            round.end(GameOverReason::SelfCollision, ctx.events);
            return StepOutcome::Ended(GameOverReason::SelfCollision);
        }
        Collision::Clear => {}
    }

    let ate_food = round.food == Some(new_head);

    ctx.events.push(GameEvent::SegmentRestyled {
        position: head,
        role: SegmentRole::Body,
    });
    round.body.push_head(new_head);
    ctx.events.push(GameEvent::SegmentSpawned {
        position: new_head,
        role: SegmentRole::Head,
    });

    if !ate_food {
        if let Some(tail) = round.body.pop_tail() {
            ctx.events.push(GameEvent::SegmentRemoved { position: tail });
        }
        return StepOutcome::Moved;
    }

    round.score += 1;
    round.move_interval = ctx.config.next_interval(round.move_interval);
    ctx.events.push(GameEvent::FoodRemoved { position: new_head });
    round.food = None;
    debug!(
        score = round.score,
        move_interval = round.move_interval,
        "food eaten"
    );

    match food::spawn(&round.body, ctx.grid, ctx.rng) {
        Ok(position) => {
            round.place_food(position, ctx.events);
            ctx.events.push(GameEvent::StatusChanged {
                text: round.status_text(),
            });
            StepOutcome::Ate
        }
        Err(food::BoardFull) => {
            round.end(GameOverReason::BoardFull, ctx.events);
            StepOutcome::Ended(GameOverReason::BoardFull)
        }
    }
}
