//! Dock monitor configuration.

use serde::{Deserialize, Serialize};

/// Auto-collapse/expand ("dock") behavior tuning.
///
/// Counters are measured in poll ticks; with the default 50 ms interval,
/// ten polls is half a second. The collapse trigger is a heuristic built
/// on geometry sampling, so all thresholds are configurable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Master toggle for the collapse/expand behavior.
    pub enabled: bool,
    /// Window top-edge Y at or below which collapse can trigger.
    pub top_threshold: i32,
    /// Extra distance past the threshold before a drag-away expands.
    pub release_margin: i32,
    /// Height of the collapsed strip in logical pixels.
    pub collapsed_height: u32,
    /// Polls to suppress collapse after an inferred drag.
    pub drag_settle_polls: u32,
    /// Polls to suppress collapse after an expand.
    pub collapse_cooldown_polls: u32,
    /// Polls to suppress expand after a collapse.
    pub expand_cooldown_polls: u32,
    /// Geometry poll interval in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            top_threshold: 5,
            release_margin: 40,
            collapsed_height: 100,
            drag_settle_polls: 6,
            collapse_cooldown_polls: 10,
            expand_cooldown_polls: 10,
            poll_interval_ms: 50,
        }
    }
}
