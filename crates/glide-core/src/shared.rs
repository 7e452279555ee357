//! Thread-safe control wrapper
//!
//! The engine itself is single-threaded. Hosts that deliver taps, resizes and
//! frame ticks from more than one thread go through this handle, which
//! serializes every call behind one lock.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use crate::control::{SegmentedControl, SelectOutcome};
use crate::scene::Scene;
use crate::Result;

pub struct SharedControl<S: Scene> {
    control: Arc<Mutex<SegmentedControl<S>>>,
}

impl<S: Scene> SharedControl<S> {
    pub fn new(control: SegmentedControl<S>) -> Self {
        Self {
            control: Arc::new(Mutex::new(control)),
        }
    }

    pub fn with_control<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut SegmentedControl<S>) -> T,
    {
        let mut guard = self.control.lock();
        f(&mut guard)
    }

    pub fn request_select(&self, index: usize) -> Result<SelectOutcome> {
        self.with_control(|control| control.request_select(index))
    }

    pub fn on_container_resized(&self, width: f64) {
        self.with_control(|control| control.on_container_resized(width))
    }

    pub fn tick(&self, elapsed: Duration) -> usize {
        self.with_control(|control| control.tick(elapsed))
    }
}

impl<S: Scene> Clone for SharedControl<S> {
    fn clone(&self) -> Self {
        Self {
            control: Arc::clone(&self.control),
        }
    }
}
