use std::collections::VecDeque;

use serde::Deserialize;
use tracing::debug;

/// Maximum number of pending direction changes.
pub const INPUT_QUEUE_CAPACITY: usize = 2;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed priority used when several direction keys fire in one frame.
    pub const PRIORITY: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit grid delta; `Up` increases y.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Returns whether `next` may follow `reference` (no repeats, no 180° turns).
#[must_use]
pub fn direction_change_is_valid(reference: Direction, next: Direction) -> bool {
    next != reference && next != reference.opposite()
}

/// Per-frame classification of one logical key.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum KeyEdge {
    JustPressed,
    Held,
    JustReleased,
    #[default]
    Idle,
}

impl KeyEdge {
    /// Classifies a key from its held state in the previous and current frame.
    #[must_use]
    pub fn from_levels(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => Self::JustPressed,
            (true, true) => Self::Held,
            (true, false) => Self::JustReleased,
            (false, false) => Self::Idle,
        }
    }

    #[must_use]
    pub fn just_pressed(self) -> bool {
        self == Self::JustPressed
    }
}

/// The five logical inputs the simulation reads.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    #[serde(alias = "up")]
    MoveUp,
    #[serde(alias = "down")]
    MoveDown,
    #[serde(alias = "left")]
    MoveLeft,
    #[serde(alias = "right")]
    MoveRight,
    Restart,
}

/// Raw held state for the five logical inputs in one frame.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub restart: bool,
}

impl HeldKeys {
    /// Builds a held-state snapshot from the actions currently held.
    #[must_use]
    pub fn from_actions(actions: &[InputAction]) -> Self {
        let mut held = Self::default();
        for action in actions {
            match action {
                InputAction::MoveUp => held.up = true,
                InputAction::MoveDown => held.down = true,
                InputAction::MoveLeft => held.left = true,
                InputAction::MoveRight => held.right = true,
                InputAction::Restart => held.restart = true,
            }
        }
        held
    }
}

/// Immutable batch of edge classifications handed to the simulation each frame.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct InputFrame {
    pub up: KeyEdge,
    pub down: KeyEdge,
    pub left: KeyEdge,
    pub right: KeyEdge,
    pub restart: KeyEdge,
}

impl InputFrame {
    /// Returns the edge reported for a direction key.
    #[must_use]
    pub fn direction_edge(&self, direction: Direction) -> KeyEdge {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// First freshly pressed direction in `Up, Down, Left, Right` order.
    ///
    /// Later edges in the same frame are dropped.
    #[must_use]
    pub fn pressed_direction(&self) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|direction| self.direction_edge(*direction).just_pressed())
    }

    #[must_use]
    pub fn restart_pressed(&self) -> bool {
        self.restart.just_pressed()
    }
}

/// Host-side helper that turns held-state snapshots into edge batches.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEdgeTracker {
    previous: HeldKeys,
}

impl KeyEdgeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `current` against the previous frame and records it.
    pub fn observe(&mut self, current: HeldKeys) -> InputFrame {
        let previous = std::mem::replace(&mut self.previous, current);

        InputFrame {
            up: KeyEdge::from_levels(previous.up, current.up),
            down: KeyEdge::from_levels(previous.down, current.down),
            left: KeyEdge::from_levels(previous.left, current.left),
            right: KeyEdge::from_levels(previous.right, current.right),
            restart: KeyEdge::from_levels(previous.restart, current.restart),
        }
    }
}

/// Bounded FIFO of pending direction changes.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    queue: VecDeque<Direction>,
}

impl InputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::with_capacity(INPUT_QUEUE_CAPACITY),
        }
    }

    /// Queues `direction` if it is a legal turn relative to the last pending
    /// direction, or to `current` when nothing is pending.
    ///
    /// Returns true when the direction was queued.
    pub fn try_enqueue(&mut self, direction: Direction, current: Direction) -> bool {
        if self.queue.len() >= INPUT_QUEUE_CAPACITY {
            debug!(?direction, "input queue full, turn dropped");
            return false;
        }

        let reference = self.queue.back().copied().unwrap_or(current);
        if !direction_change_is_valid(reference, direction) {
            debug!(?direction, ?reference, "turn rejected");
            return false;
        }

        self.queue.push_back(direction);
        true
    }

    /// Pops the oldest pending direction.
    pub fn dequeue(&mut self) -> Option<Direction> {
        self.queue.pop_front()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Iterates pending directions, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = Direction> + '_ {
        self.queue.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{
        direction_change_is_valid, Direction, HeldKeys, InputAction, InputBuffer, InputFrame,
        KeyEdge, KeyEdgeTracker, INPUT_QUEUE_CAPACITY,
    };

    fn random_direction(rng: &mut StdRng) -> Direction {
        Direction::PRIORITY[rng.gen_range(0..4)]
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_change_rejects_repeat_and_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Up));
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(
            Direction::Left,
            Direction::Right
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Right));
    }

    #[test]
    fn edge_classification_covers_all_transitions() {
        assert_eq!(KeyEdge::from_levels(false, true), KeyEdge::JustPressed);
        assert_eq!(KeyEdge::from_levels(true, true), KeyEdge::Held);
        assert_eq!(KeyEdge::from_levels(true, false), KeyEdge::JustReleased);
        assert_eq!(KeyEdge::from_levels(false, false), KeyEdge::Idle);
    }

    #[test]
    fn tracker_reports_press_once_while_held() {
        let mut tracker = KeyEdgeTracker::new();
        let held = HeldKeys::from_actions(&[InputAction::Restart]);

        assert!(tracker.observe(held).restart_pressed());
        assert_eq!(tracker.observe(held).restart, KeyEdge::Held);
        assert_eq!(
            tracker.observe(HeldKeys::default()).restart,
            KeyEdge::JustReleased
        );
        assert!(tracker.observe(held).restart_pressed());
    }

    #[test]
    fn pressed_direction_uses_fixed_priority() {
        let frame = InputFrame {
            left: KeyEdge::JustPressed,
            down: KeyEdge::JustPressed,
            right: KeyEdge::JustPressed,
            up: KeyEdge::Held,
            ..InputFrame::default()
        };

        assert_eq!(frame.pressed_direction(), Some(Direction::Down));
        assert_eq!(InputFrame::default().pressed_direction(), None);
    }

    #[test]
    fn enqueue_rejects_repeat_and_reverse_of_current() {
        let mut buffer = InputBuffer::new();

        assert!(!buffer.try_enqueue(Direction::Right, Direction::Right));
        assert!(!buffer.try_enqueue(Direction::Left, Direction::Right));
        assert!(buffer.is_empty());

        assert!(buffer.try_enqueue(Direction::Up, Direction::Right));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn enqueue_compares_against_last_pending() {
        let mut buffer = InputBuffer::new();

        assert!(buffer.try_enqueue(Direction::Up, Direction::Right));
        // Down reverses the pending Up even though it is legal against Right.
        assert!(!buffer.try_enqueue(Direction::Down, Direction::Right));
        assert!(!buffer.try_enqueue(Direction::Up, Direction::Right));
        assert!(buffer.try_enqueue(Direction::Left, Direction::Right));

        let pending: Vec<_> = buffer.pending().collect();
        assert_eq!(pending, vec![Direction::Up, Direction::Left]);
    }

    #[test]
    fn enqueue_rejects_when_full() {
        let mut buffer = InputBuffer::new();

        assert!(buffer.try_enqueue(Direction::Up, Direction::Right));
        assert!(buffer.try_enqueue(Direction::Left, Direction::Right));
        assert!(!buffer.try_enqueue(Direction::Down, Direction::Right));

        assert_eq!(buffer.dequeue(), Some(Direction::Up));
        assert_eq!(buffer.dequeue(), Some(Direction::Left));
        assert_eq!(buffer.dequeue(), None);
    }

    #[test]
    fn random_enqueues_never_exceed_capacity() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut buffer = InputBuffer::new();
        let mut current = Direction::Right;

        for _ in 0..5_000 {
            let direction = random_direction(&mut rng);
            buffer.try_enqueue(direction, current);
            assert!(buffer.len() <= INPUT_QUEUE_CAPACITY);

            if rng.gen_bool(0.3) {
                if let Some(next) = buffer.dequeue() {
                    current = next;
                }
            }
        }
    }

    #[test]
    fn random_enqueues_never_accept_repeat_or_reverse_of_reference() {
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..2_000 {
            let mut buffer = InputBuffer::new();
            let current = random_direction(&mut rng);
            if rng.gen_bool(0.5) {
                buffer.try_enqueue(random_direction(&mut rng), current);
            }

            let reference = buffer.pending().last().unwrap_or(current);
            let before = buffer.len();
            let candidate = random_direction(&mut rng);
            let accepted = buffer.try_enqueue(candidate, current);

            if candidate == reference || candidate == reference.opposite() {
                assert!(!accepted);
                assert_eq!(buffer.len(), before);
            } else {
                assert!(accepted);
            }
        }
    }
}
