use crate::snake::Position;

/// Why a round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    Wall,
    SelfCollision,
    /// Every cell is covered; there is nowhere left to place food.
    BoardFull,
}

/// Visual role of a snake segment.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SegmentRole {
    Head,
    Body,
}

/// Presentation requests emitted by the simulation, keyed by logical grid position.
///
/// The host drains these after each update and maps positions into its own
/// coordinate system.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    BorderPlaced { width: i32, height: i32 },
    SegmentSpawned { position: Position, role: SegmentRole },
    SegmentRestyled { position: Position, role: SegmentRole },
    SegmentRemoved { position: Position },
    FoodPlaced { position: Position },
    FoodRemoved { position: Position },
    RoundEnded { reason: GameOverReason },
    StatusChanged { text: String },
}
