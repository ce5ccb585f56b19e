//! The hand-off to an external step player.
//!
//! A [`Playback`] borrows a finished trace together with the configuration
//! the player needs. The player only iterates the steps; it never mutates or
//! reorders them.

use serde::{Deserialize, Serialize};

use crate::error::TraceError;
use crate::step::StepRecord;

/// How the player should render snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualKind {
    Array,
    Graph,
    Table,
    Number,
}

/// Playback settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Steps per second multiplier; 1.0 is normal speed.
    pub speed: f64,
    pub kind: VisualKind,
}

impl PlaybackConfig {
    /// Creates a config, rejecting non-finite or non-positive speeds.
    pub fn new(speed: f64, kind: VisualKind) -> Result<Self, TraceError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(TraceError::Malformed {
                reason: format!("playback speed must be a positive number, got {speed}"),
            });
        }
        Ok(PlaybackConfig { speed, kind })
    }
}

/// A trace packaged for replay.
#[derive(Debug, Clone, Serialize)]
pub struct Playback<'a> {
    pub config: PlaybackConfig,
    pub steps: &'a [StepRecord],
}
