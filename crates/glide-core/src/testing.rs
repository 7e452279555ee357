//! In-memory scene that records what the control told it

use std::collections::HashMap;

use glide_segments::{Color, LabelStyle, PanelId};

use crate::scene::Scene;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLabel {
    pub text: String,
    pub style: LabelStyle,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecordedPanel {
    pub offset: f64,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordingScene {
    pub panel_width: f64,
    pub labels: Vec<RecordedLabel>,
    pub panels: HashMap<PanelId, RecordedPanel>,
    pub indicator_offset: f64,
    pub indicator_width: f64,
    pub indicator_width_writes: usize,
    pub label_width_writes: usize,
    pub track_color: Option<Color>,
    pub indicator_color: Option<Color>,
}

impl RecordingScene {
    pub fn new(panel_width: f64) -> Self {
        Self {
            panel_width,
            labels: Vec::new(),
            panels: HashMap::new(),
            indicator_offset: 0.0,
            indicator_width: 0.0,
            indicator_width_writes: 0,
            label_width_writes: 0,
            track_color: None,
            indicator_color: None,
        }
    }

    pub fn panel(&self, panel: PanelId) -> RecordedPanel {
        match self.panels.get(&panel) {
            Some(recorded) => *recorded,
            None => panic!("{panel} was never attached"),
        }
    }
}

impl Scene for RecordingScene {
    fn attach_segment(&mut self, index: usize, text: &str, panel: PanelId, style: &LabelStyle) {
        assert_eq!(index, self.labels.len(), "labels attach in order");
        self.labels.push(RecordedLabel {
            text: text.to_string(),
            style: *style,
            width: 0.0,
        });
        self.panels.entry(panel).or_default();
    }

    fn clear_segments(&mut self) {
        self.labels.clear();
        self.panels.clear();
    }

    fn panel_width(&self, _panel: PanelId) -> f64 {
        self.panel_width
    }

    fn set_panel_offset(&mut self, panel: PanelId, offset: f64) {
        self.panels.entry(panel).or_default().offset = offset;
    }

    fn set_panel_visible(&mut self, panel: PanelId, visible: bool) {
        self.panels.entry(panel).or_default().visible = visible;
    }

    fn set_indicator_offset(&mut self, offset: f64) {
        self.indicator_offset = offset;
    }

    fn set_indicator_width(&mut self, width: f64) {
        self.indicator_width = width;
        self.indicator_width_writes += 1;
    }

    fn set_label_width(&mut self, index: usize, width: f64) {
        self.labels[index].width = width;
        self.label_width_writes += 1;
    }

    fn set_label_style(&mut self, index: usize, style: &LabelStyle) {
        self.labels[index].style = *style;
    }

    fn set_track_color(&mut self, color: Color) {
        self.track_color = Some(color);
    }

    fn set_indicator_color(&mut self, color: Color) {
        self.indicator_color = Some(color);
    }
}
