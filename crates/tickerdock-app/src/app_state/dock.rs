//! Dock monitor: the collapse/expand state machine.
//!
//! Keeps the window either fully expanded or collapsed to a thin strip,
//! based on its vertical position and cursor proximity. All decisions are
//! made on the poll tick from a geometry sample; the caller applies the
//! returned command to the real window.
//!
//! Dragging is inferred, not observed: a top-edge Y that changed between
//! consecutive polls is treated as an active drag, which suppresses
//! collapse until a settle counter expires. The inference can misfire on
//! fast drags or OS focus stealing; a wrong call self-corrects on the
//! next poll.

use tickerdock_config::schema::DockConfig;

// =============================================================================
// TYPES
// =============================================================================

/// Dock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockState {
    Expanded,
    Collapsed,
}

/// One geometry sample per poll tick.
#[derive(Debug, Clone, Copy)]
pub struct GeometrySample {
    /// Window top-edge Y in logical screen coordinates.
    pub top_y: f64,
    /// Whether the cursor is currently inside the window bounds.
    pub cursor_inside: bool,
}

/// Resize command for the caller to apply to the real window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockCommand {
    Collapse { height: u32 },
    Expand { height: u32 },
}

/// Two-state collapse/expand monitor.
pub struct DockMonitor {
    params: DockConfig,
    state: DockState,
    /// Top-edge Y from the previous poll, for drag inference.
    last_top_y: Option<f64>,
    /// Polls remaining of drag-induced collapse suppression.
    drag_settle: u32,
    /// Polls remaining before a collapse may fire again.
    collapse_cooldown: u32,
    /// Polls remaining before an expand may fire again.
    expand_cooldown: u32,
    /// Last known expanded height in logical pixels.
    expanded_height: u32,
}

// =============================================================================
// STATE MACHINE
// =============================================================================

impl DockMonitor {
    pub fn new(params: DockConfig, expanded_height: u32) -> Self {
        Self {
            params,
            state: DockState::Expanded,
            last_top_y: None,
            drag_settle: 0,
            collapse_cooldown: 0,
            expand_cooldown: 0,
            expanded_height,
        }
    }

    pub fn state(&self) -> DockState {
        self.state
    }

    /// The height an expand restores, in logical pixels.
    pub fn expanded_height(&self) -> u32 {
        self.expanded_height
    }

    /// Remember a new expanded height from a resize event.
    ///
    /// Heights at or below the collapsed strip are ignored, so a resize
    /// caused by the collapse itself never corrupts the restore height.
    pub fn record_expanded_height(&mut self, height: u32) {
        if height > self.params.collapsed_height {
            self.expanded_height = height;
        }
    }

    /// Feed one geometry sample; returns a command when a transition fires.
    pub fn poll(&mut self, sample: GeometrySample) -> Option<DockCommand> {
        self.collapse_cooldown = self.collapse_cooldown.saturating_sub(1);
        self.expand_cooldown = self.expand_cooldown.saturating_sub(1);
        self.drag_settle = self.drag_settle.saturating_sub(1);

        let dragged = match self.last_top_y {
            Some(prev) => (prev - sample.top_y).abs() > f64::EPSILON,
            None => false,
        };
        self.last_top_y = Some(sample.top_y);
        if dragged {
            self.drag_settle = self.params.drag_settle_polls;
        }

        match self.state {
            DockState::Expanded => {
                let parked = sample.top_y <= f64::from(self.params.top_threshold);
                if parked && !dragged && self.drag_settle == 0 && self.collapse_cooldown == 0 {
                    self.state = DockState::Collapsed;
                    self.expand_cooldown = self.params.expand_cooldown_polls;
                    return Some(DockCommand::Collapse {
                        height: self.params.collapsed_height,
                    });
                }
            }
            DockState::Collapsed => {
                let pulled_away = sample.top_y
                    > f64::from(self.params.top_threshold) + f64::from(self.params.release_margin);
                if self.expand_cooldown == 0 && (sample.cursor_inside || pulled_away) {
                    self.state = DockState::Expanded;
                    self.collapse_cooldown = self.params.collapse_cooldown_polls;
                    return Some(DockCommand::Expand {
                        height: self.expanded_height,
                    });
                }
            }
        }

        None
    }
}

// =============================================================================
// TESTS
// =============================================================================
