//! Glide demo
//!
//! Drives a three-segment control through a few taps at 60 fps against a
//! scene that only logs. Pass a JSON config path as the first argument to
//! override the defaults; set `RUST_LOG=debug` to see every frame.

use std::time::Duration;

use anyhow::Context;
use glide_core::{
    Color, Config, LabelStyle, PanelId, Scene, SegmentedControl, SelectOutcome, SharedControl,
};

const FRAME: Duration = Duration::from_millis(16);
const PANEL_WIDTH: f64 = 360.0;

struct LogScene;

impl Scene for LogScene {
    fn attach_segment(&mut self, index: usize, text: &str, panel: PanelId, style: &LabelStyle) {
        tracing::info!(index, text, panel = %panel, color = %style.color, "attach");
    }

    fn clear_segments(&mut self) {
        tracing::info!("clear");
    }

    fn panel_width(&self, _panel: PanelId) -> f64 {
        PANEL_WIDTH
    }

    fn set_panel_offset(&mut self, panel: PanelId, offset: f64) {
        tracing::debug!(panel = %panel, offset, "panel offset");
    }

    fn set_panel_visible(&mut self, panel: PanelId, visible: bool) {
        tracing::info!(panel = %panel, visible, "panel visibility");
    }

    fn set_indicator_offset(&mut self, offset: f64) {
        tracing::debug!(offset, "indicator offset");
    }

    fn set_indicator_width(&mut self, width: f64) {
        tracing::info!(width, "indicator width");
    }

    fn set_label_width(&mut self, index: usize, width: f64) {
        tracing::debug!(index, width, "label width");
    }

    fn set_label_style(&mut self, index: usize, style: &LabelStyle) {
        tracing::debug!(index, weight = ?style.weight, color = %style.color, "label style");
    }

    fn set_track_color(&mut self, color: Color) {
        tracing::info!(color = %color, "track color");
    }
}

fn load_config() -> anyhow::Result<Config> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            Ok(Config::from_json(&json)?)
        }
        None => Ok(Config::default()),
    }
}

fn settle(control: &SharedControl<LogScene>) -> u32 {
    let mut frames = 0;
    while control.tick(FRAME) > 0 {
        frames += 1;
    }
    frames + 1
}

fn main() -> anyhow::Result<()> {
    glide_core::init_logging();

    let config = load_config()?;
    let control = SegmentedControl::with_items(
        LogScene,
        config,
        [
            ("Day", PanelId(1)),
            ("Week", PanelId(2)),
            ("Month", PanelId(3)),
        ],
    )?;
    let control = SharedControl::new(control);
    control.on_container_resized(320.0);

    for index in [2, 2, 0, 1] {
        match control.request_select(index)? {
            SelectOutcome::Started(state) => {
                let frames = settle(&control);
                tracing::info!(
                    from = state.from_index,
                    to = state.to_index,
                    direction = %state.direction,
                    frames,
                    "transition complete"
                );
            }
            outcome => tracing::info!(index, ?outcome, "no transition"),
        }
    }

    control.with_control(|c| -> anyhow::Result<()> {
        let selected = c.selected_item()?;
        tracing::info!(selected = selected.text(), indicator = c.indicator_offset(), "done");
        Ok(())
    })
}
