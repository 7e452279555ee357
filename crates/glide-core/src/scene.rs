//! Host scene interface
//!
//! The retained layout tree the control draws into. Every method is a plain
//! write except [`Scene::panel_width`]; the engine keeps its own mirror of
//! offsets and visibility and never reads them back from the host.

use glide_segments::{Color, LabelStyle, PanelId};

pub trait Scene {
    /// Create the label for segment `index` and attach its panel to the content area.
    fn attach_segment(&mut self, index: usize, text: &str, panel: PanelId, style: &LabelStyle);

    /// Remove every label and detach every panel.
    fn clear_segments(&mut self);

    /// Current laid-out width of a panel, used as the slide distance.
    fn panel_width(&self, panel: PanelId) -> f64;

    fn set_panel_offset(&mut self, panel: PanelId, offset: f64);

    fn set_panel_visible(&mut self, panel: PanelId, visible: bool);

    fn set_indicator_offset(&mut self, offset: f64);

    /// Fixed width hint for the sliding indicator.
    fn set_indicator_width(&mut self, width: f64);

    /// Fixed width hint for the label at `index`, so its hit target matches the segment.
    fn set_label_width(&mut self, index: usize, width: f64);

    fn set_label_style(&mut self, index: usize, style: &LabelStyle);

    /// Chrome colors. Hosts that theme their own chrome can ignore these.
    fn set_track_color(&mut self, _color: Color) {}

    fn set_indicator_color(&mut self, _color: Color) {}
}
