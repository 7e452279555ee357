//! Selection State Machine
//!
//! ```text
//! Idle
//!   ↓ request_select (unselected segment)
//! Transitioning
//!   ↓ last tween completes / finish
//! Idle
//! ```
//! A request that arrives while Transitioning either restarts the transition
//! toward the new target or is dropped, depending on [`crate::ReentryPolicy`].

use glide_segments::PanelId;
use serde::{Deserialize, Serialize};

/// Slide direction relative to segment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Target is to the right; content slides left
    Forward,
    /// Target is to the left (or equal); content slides right
    Backward,
}

impl Direction {
    pub fn between(from_index: usize, to_index: usize) -> Self {
        if to_index > from_index {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Sign of the outgoing panel's final offset
    pub fn out_factor(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Backward => 1.0,
        }
    }

    /// Sign of the incoming panel's starting offset
    pub fn in_factor(self) -> f64 {
        -self.out_factor()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything computed when a transition starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionState {
    pub from_index: usize,
    pub to_index: usize,
    pub from_panel: PanelId,
    pub to_panel: PanelId,
    pub direction: Direction,
    pub content_out_factor: f64,
    pub content_in_factor: f64,
    /// Slide distance of the outgoing panel
    pub from_panel_width: f64,
    /// Slide distance of the incoming panel
    pub to_panel_width: f64,
    pub indicator_target: f64,
}

impl TransitionState {
    /// `from` and `to` are `(index, panel, panel width)`.
    pub fn new(from: (usize, PanelId, f64), to: (usize, PanelId, f64), segment_width: f64) -> Self {
        let direction = Direction::between(from.0, to.0);
        Self {
            from_index: from.0,
            to_index: to.0,
            from_panel: from.1,
            to_panel: to.1,
            direction,
            content_out_factor: direction.out_factor(),
            content_in_factor: direction.in_factor(),
            from_panel_width: from.2,
            to_panel_width: to.2,
            indicator_target: to.0 as f64 * segment_width,
        }
    }

    /// Where the incoming panel is parked before it slides in
    pub fn incoming_start(&self) -> f64 {
        self.to_panel_width * self.content_in_factor
    }

    /// Where the outgoing panel ends up before it is hidden
    pub fn outgoing_target(&self) -> f64 {
        self.from_panel_width * self.content_out_factor
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EnginePhase {
    #[default]
    Idle,
    Transitioning(TransitionState),
}

impl EnginePhase {
    pub fn is_transitioning(&self) -> bool {
        matches!(self, EnginePhase::Transitioning(_))
    }

    pub fn transition(&self) -> Option<&TransitionState> {
        match self {
            EnginePhase::Transitioning(state) => Some(state),
            EnginePhase::Idle => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnginePhase::Idle => "idle",
            EnginePhase::Transitioning(_) => "transitioning",
        }
    }
}

impl std::fmt::Display for EnginePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
