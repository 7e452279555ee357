//! Glide Animation Driver
//!
//! Time-based interpolation of scalar properties. The host advances the
//! [`Animator`] once per frame; each advance yields the property writes for
//! that frame plus the completion effects of tweens that just finished.
//!
//! Tweens are keyed by the property they write. Starting a tween for a key
//! that is already animating replaces the old tween and drops its effect.

mod animator;
mod easing;
mod tween;

pub use animator::{Animator, Frame};
pub use easing::Easing;
pub use tween::Tween;
