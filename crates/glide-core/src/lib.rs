//! Glide Core
//!
//! Selection and transition engine for an animated segmented control.
//! The engine owns all selection state; the host scene only draws what it
//! is told and feeds back frame time.

mod config;
mod control;
mod error;
mod scene;
mod shared;
mod transition;

#[cfg(test)]
mod testing;

pub use config::{Config, ReentryPolicy};
pub use control::{SegmentedControl, SelectOutcome};
pub use error::CoreError;
pub use scene::Scene;
pub use shared::SharedControl;
pub use transition::{Direction, EnginePhase, TransitionState};

// Re-export building blocks
pub use glide_anim::{Animator, Easing, Frame, Tween};
pub use glide_segments::{
    Color, FontWeight, LabelStyle, LayoutGeometry, Palette, PanelId, SegmentError, SegmentId,
    SegmentItem, SegmentRegistry, ThemeMode,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
