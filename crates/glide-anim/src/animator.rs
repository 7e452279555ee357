//! Keyed animation set
//!
//! Tracks concurrent tweens, one per property key. There is no join between
//! tweens: each one completes on its own frame and reports its own effect.

use std::fmt::Debug;
use std::time::Duration;

use crate::tween::Tween;

struct Entry<K, E> {
    key: K,
    tween: Tween,
    on_complete: Option<E>,
}

/// Property writes and completion effects produced by one advance.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<K, E> {
    /// `(key, value)` for every tween that was active during this frame.
    pub writes: Vec<(K, f64)>,
    /// Effects of tweens that reached their end during this frame, in start order.
    pub completed: Vec<E>,
}

impl<K, E> Frame<K, E> {
    fn empty() -> Self {
        Self {
            writes: Vec::new(),
            completed: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty() && self.completed.is_empty()
    }
}

/// Set of running tweens keyed by the property they drive.
pub struct Animator<K, E> {
    entries: Vec<Entry<K, E>>,
}

impl<K, E> Default for Animator<K, E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq + Clone + Debug, E> Animator<K, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween for `key`.
    ///
    /// An in-flight tween for the same key is cancelled and returned; its
    /// completion effect is dropped and will never be reported.
    pub fn start(&mut self, key: K, tween: Tween, on_complete: Option<E>) -> Option<Tween> {
        let cancelled = self.cancel(&key);
        if cancelled.is_some() {
            tracing::trace!(key = ?key, "Replaced in-flight tween");
        }
        self.entries.push(Entry {
            key,
            tween,
            on_complete,
        });
        cancelled
    }

    /// Drop the tween for `key` without running its effect.
    pub fn cancel(&mut self, key: &K) -> Option<Tween> {
        let index = self.entries.iter().position(|e| &e.key == key)?;
        Some(self.entries.remove(index).tween)
    }

    /// Drop every tween without running effects.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Advance every tween by `dt` and collect this frame's output.
    pub fn advance(&mut self, dt: Duration) -> Frame<K, E> {
        if self.entries.is_empty() {
            return Frame::empty();
        }
        for entry in &mut self.entries {
            entry.tween.advance(dt);
        }
        self.drain_frame()
    }

    /// Jump every tween to its end value, completing all of them.
    pub fn finish_all(&mut self) -> Frame<K, E> {
        for entry in &mut self.entries {
            entry.tween.finish();
        }
        self.drain_frame()
    }

    fn drain_frame(&mut self) -> Frame<K, E> {
        let mut frame = Frame::empty();
        let mut remaining = Vec::with_capacity(self.entries.len());

        for entry in self.entries.drain(..) {
            frame.writes.push((entry.key.clone(), entry.tween.value()));
            if entry.tween.is_done() {
                if let Some(effect) = entry.on_complete {
                    frame.completed.push(effect);
                }
            } else {
                remaining.push(entry);
            }
        }

        self.entries = remaining;
        frame
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.entries.iter().any(|e| &e.key == key)
    }

    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    /// Target value of the in-flight tween for `key`, if any.
    pub fn target_of(&self, key: &K) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| &e.key == key)
            .map(|e| e.tween.to())
    }
}
