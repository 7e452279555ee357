//! Layout Geometry Tracker
//!
//! Splits the control width into equal segments:
//! ```text
//! segment_width = floor(total_width / segment_count) - inset
//! ```
//! The inset covers the fixed margin around the indicator and label row.
//! Every recompute reports whether the host needs to hear about the new
//! width, so repeated resizes to the same width cost nothing.

use serde::{Deserialize, Serialize};

/// Margin subtracted from each segment's share of the width.
pub const DEFAULT_SEGMENT_INSET: f64 = 6.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    total_width: f64,
    segment_count: usize,
    inset: f64,
    segment_width: f64,
    /// Last width pushed to the host, `None` until the first propagation
    propagated: Option<f64>,
}

impl Default for LayoutGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_SEGMENT_INSET)
    }
}

impl LayoutGeometry {
    pub fn new(inset: f64) -> Self {
        Self {
            total_width: 0.0,
            segment_count: 0,
            inset: sanitize(inset),
            segment_width: 0.0,
            propagated: None,
        }
    }

    /// Container width changed. Returns the width to propagate, if any.
    pub fn on_container_resized(&mut self, new_width: f64) -> Option<f64> {
        self.total_width = sanitize(new_width);
        self.recompute()
    }

    /// Segment count changed. Returns the width to propagate, if any.
    pub fn on_segment_count_changed(&mut self, count: usize) -> Option<f64> {
        self.segment_count = count;
        self.recompute()
    }

    /// Forget the last propagated width so the next recompute pushes again.
    pub fn invalidate(&mut self) {
        self.propagated = None;
    }

    fn recompute(&mut self) -> Option<f64> {
        self.segment_width = compute_segment_width(self.total_width, self.segment_count, self.inset);

        if self.segment_count == 0 {
            return None;
        }
        if self.propagated == Some(self.segment_width) {
            return None;
        }

        tracing::debug!(
            total_width = self.total_width,
            segment_count = self.segment_count,
            segment_width = self.segment_width,
            "Segment width changed"
        );

        self.propagated = Some(self.segment_width);
        Some(self.segment_width)
    }

    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn inset(&self) -> f64 {
        self.inset
    }

    pub fn segment_width(&self) -> f64 {
        self.segment_width
    }

    /// Indicator offset that lines up with segment `index`
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.segment_width
    }
}

/// Width of one segment, never negative. Zero segments yields zero.
pub fn compute_segment_width(total_width: f64, segment_count: usize, inset: f64) -> f64 {
    if segment_count == 0 {
        return 0.0;
    }
    let share = (sanitize(total_width) / segment_count as f64).floor();
    (share - sanitize(inset)).max(0.0)
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
