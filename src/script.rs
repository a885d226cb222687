use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::events::GameEvent;
use crate::game::Game;
use crate::input::{HeldKeys, InputAction, KeyEdgeTracker};

/// One scripted host frame: elapsed time plus the keys held during it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptFrame {
    pub dt: f32,
    #[serde(default)]
    pub held: Vec<InputAction>,
}

/// Parses a JSON array of frames.
pub fn parse_script(raw: &str) -> serde_json::Result<Vec<ScriptFrame>> {
    serde_json::from_str(raw)
}

/// Reads and parses a JSON script file.
pub fn load_script(path: &Path) -> io::Result<Vec<ScriptFrame>> {
    let raw = fs::read_to_string(path)?;
    parse_script(&raw).map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
}

/// Totals from replaying frames against a game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    pub frames: usize,
    pub steps: u32,
    pub events: Vec<GameEvent>,
}

/// Feeds `frames` through edge classification and [`Game::update`], collecting events.
pub fn replay<'a, I>(game: &mut Game, frames: I) -> ReplaySummary
where
    I: IntoIterator<Item = &'a ScriptFrame>,
{
    let mut tracker = KeyEdgeTracker::new();
    let mut summary = ReplaySummary::default();

    for frame in frames {
        let input = tracker.observe(HeldKeys::from_actions(&frame.held));
        summary.steps += game.update(frame.dt, input);
        summary.frames += 1;

        for event in game.drain_events() {
            debug!(frame = summary.frames, ?event, "event");
            summary.events.push(event);
        }
    }

    summary
}
