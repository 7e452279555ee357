//! Segmented control
//!
//! Owns the segment registry, the layout geometry and the running tweens,
//! and pushes every visible change into the host [`Scene`].

use std::time::Duration;

use glide_anim::{Animator, Frame, Tween};
use glide_segments::{
    LayoutGeometry, Palette, PanelId, SegmentId, SegmentItem, SegmentRegistry, ThemeMode,
};

use crate::config::{Config, ReentryPolicy};
use crate::scene::Scene;
use crate::transition::{EnginePhase, TransitionState};
use crate::Result;

/// Property driven by a tween
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Indicator,
    Panel(PanelId),
}

/// Side effect run when a tween reaches its end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    HidePanel(PanelId),
}

/// Result of a selection request that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    /// The segment was already selected; nothing changed
    AlreadySelected,
    /// A transition was running and the reentry policy dropped the request
    Ignored,
    /// A transition toward the segment started
    Started(TransitionState),
}

pub struct SegmentedControl<S: Scene> {
    scene: S,
    config: Config,
    palette: Palette,
    registry: SegmentRegistry,
    geometry: LayoutGeometry,
    animator: Animator<Target, Effect>,
    /// Indicator offset last written to the scene
    indicator_offset: f64,
    phase: EnginePhase,
}

impl<S: Scene> SegmentedControl<S> {
    pub fn new(mut scene: S, config: Config) -> Result<Self> {
        config.validate()?;

        let palette = Palette::for_mode(config.theme);
        scene.set_track_color(palette.track);
        scene.set_indicator_color(palette.indicator);
        scene.set_indicator_offset(0.0);

        Ok(Self {
            scene,
            geometry: LayoutGeometry::new(config.segment_inset),
            config,
            palette,
            registry: SegmentRegistry::new(),
            animator: Animator::new(),
            indicator_offset: 0.0,
            phase: EnginePhase::Idle,
        })
    }

    /// Build a control from a static list of `(text, panel)` definitions
    pub fn with_items<I, T>(scene: S, config: Config, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, PanelId)>,
        T: Into<String>,
    {
        let mut control = Self::new(scene, config)?;
        for (text, panel) in items {
            control.append(text, panel)?;
        }
        Ok(control)
    }

    // === Segment population ===

    /// Append a segment and attach its label and panel to the scene.
    ///
    /// The first segment is selected and its panel shown; later panels start hidden.
    pub fn append(&mut self, text: impl Into<String>, panel: PanelId) -> Result<SegmentId> {
        let item = SegmentItem::new(text, panel);
        let id = item.id().clone();
        let index = self.registry.append(item)?;

        let item = self.registry.get(index)?;
        let selected = item.is_selected();
        let style = self.palette.label_style(selected);
        self.scene.attach_segment(index, item.text(), panel, &style);

        tracing::info!(segment_id = %id, text = %item.text(), index, selected, "Added segment");

        self.write_panel_offset(panel, 0.0);
        self.write_panel_visible(panel, selected);

        let width = self.geometry.on_segment_count_changed(self.registry.len());
        if width.is_some() {
            self.propagate_segment_width(width);
        } else if self.geometry.segment_count() > 0 {
            self.scene.set_label_width(index, self.geometry.segment_width());
        }

        Ok(id)
    }

    /// Drop every segment and load a new list. Running tweens are cancelled.
    pub fn replace_items<I, T>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = (T, PanelId)>,
        T: Into<String>,
    {
        self.animator.cancel_all();
        self.phase = EnginePhase::Idle;
        self.registry.clear();
        self.scene.clear_segments();

        self.indicator_offset = 0.0;
        self.scene.set_indicator_offset(0.0);
        self.geometry.on_segment_count_changed(0);
        self.geometry.invalidate();

        for (text, panel) in items {
            self.append(text, panel)?;
        }

        tracing::info!(count = self.registry.len(), "Replaced segments");
        Ok(())
    }

    // === Geometry ===

    /// Container width changed; push the new segment width if it moved.
    pub fn on_container_resized(&mut self, width: f64) {
        let segment_width = self.geometry.on_container_resized(width);
        self.propagate_segment_width(segment_width);
    }

    fn propagate_segment_width(&mut self, width: Option<f64>) {
        let Some(width) = width else {
            return;
        };

        self.scene.set_indicator_width(width);
        for index in 0..self.registry.len() {
            self.scene.set_label_width(index, width);
        }
        self.realign_indicator();
    }

    /// Keep the indicator on the selected segment after the width changed.
    fn realign_indicator(&mut self) {
        let Ok(selected) = self.registry.selected_index() else {
            return;
        };
        let target = self.geometry.offset_of(selected);

        if self.animator.is_active(&Target::Indicator) {
            let tween = Tween::new(
                self.indicator_offset,
                target,
                self.config.animation_duration(),
                self.config.easing,
            );
            self.animator.start(Target::Indicator, tween, None);
        } else if self.indicator_offset != target {
            self.indicator_offset = target;
            self.scene.set_indicator_offset(target);
        }
    }

    // === Selection ===

    /// Select the segment at `index`, starting the slide transition.
    pub fn request_select(&mut self, index: usize) -> Result<SelectOutcome> {
        let target = match self.registry.get(index) {
            Ok(target) => target,
            Err(err) => {
                tracing::warn!(index, len = self.registry.len(), "Selection out of range");
                return Err(err.into());
            }
        };

        if target.is_selected() {
            tracing::trace!(index, "Segment already selected");
            return Ok(SelectOutcome::AlreadySelected);
        }
        let to_panel = target.content();

        if self.phase.is_transitioning() && self.config.reentry == ReentryPolicy::Ignore {
            tracing::debug!(index, "Ignoring selection during transition");
            return Ok(SelectOutcome::Ignored);
        }

        let from_index = match self.registry.selected_index() {
            Ok(from_index) => from_index,
            Err(err) => {
                tracing::error!(error = %err, "No selected segment to transition from");
                debug_assert!(false, "{err}");
                return Err(err.into());
            }
        };
        let from = self.registry.get(from_index)?;
        let from_panel = from.content();
        let from_offset = from.offset();

        let state = TransitionState::new(
            (from_index, from_panel, self.scene.panel_width(from_panel)),
            (index, to_panel, self.scene.panel_width(to_panel)),
            self.geometry.segment_width(),
        );

        // Park the incoming panel on the side it enters from, then reveal it
        self.write_panel_offset(to_panel, state.incoming_start());
        self.write_panel_visible(to_panel, true);

        self.registry.select(index)?;

        let duration = self.config.animation_duration();
        let easing = self.config.easing;
        self.animator.start(
            Target::Panel(from_panel),
            Tween::new(from_offset, state.outgoing_target(), duration, easing),
            Some(Effect::HidePanel(from_panel)),
        );
        self.animator.start(
            Target::Indicator,
            Tween::new(self.indicator_offset, state.indicator_target, duration, easing),
            None,
        );
        self.animator.start(
            Target::Panel(to_panel),
            Tween::new(state.incoming_start(), 0.0, duration, easing),
            None,
        );

        self.restyle_labels();

        tracing::debug!(
            from = from_index,
            to = index,
            direction = %state.direction,
            indicator_target = state.indicator_target,
            "Segment transition started"
        );

        self.phase = EnginePhase::Transitioning(state.clone());
        Ok(SelectOutcome::Started(state))
    }

    /// Select a segment by id
    pub fn select_segment(&mut self, id: &SegmentId) -> Result<SelectOutcome> {
        let index = self.registry.index_of(id)?;
        self.request_select(index)
    }

    // === Frame driving ===

    /// Advance running tweens by `elapsed`. Returns how many are still running.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        let frame = self.animator.advance(elapsed);
        self.apply_frame(frame);
        self.animator.active_count()
    }

    /// Jump every running tween to its end.
    pub fn finish(&mut self) {
        let frame = self.animator.finish_all();
        self.apply_frame(frame);
    }

    fn apply_frame(&mut self, frame: Frame<Target, Effect>) {
        for (target, value) in frame.writes {
            match target {
                Target::Indicator => {
                    self.indicator_offset = value;
                    self.scene.set_indicator_offset(value);
                }
                Target::Panel(panel) => self.write_panel_offset(panel, value),
            }
        }

        for effect in frame.completed {
            match effect {
                Effect::HidePanel(panel) => {
                    let selected_panel = self.registry.selected_item().map(|i| i.content()).ok();
                    if selected_panel != Some(panel) {
                        self.write_panel_visible(panel, false);
                        tracing::debug!(panel = %panel, "Outgoing panel hidden");
                    }
                }
            }
        }

        if self.animator.is_idle() && self.phase.is_transitioning() {
            tracing::debug!("Segment transition settled");
            self.phase = EnginePhase::Idle;
        }
    }

    // === Styling ===

    /// Switch theme and restyle labels and chrome immediately.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.config.theme = mode;
        self.palette = Palette::for_mode(mode);
        self.scene.set_track_color(self.palette.track);
        self.scene.set_indicator_color(self.palette.indicator);
        self.restyle_labels();
    }

    fn restyle_labels(&mut self) {
        for (index, item) in self.registry.iter().enumerate() {
            let style = self.palette.label_style(item.is_selected());
            self.scene.set_label_style(index, &style);
        }
    }

    fn write_panel_offset(&mut self, panel: PanelId, offset: f64) {
        self.scene.set_panel_offset(panel, offset);
        for item in self.registry.iter_mut().filter(|i| i.content() == panel) {
            item.set_offset(offset);
        }
    }

    fn write_panel_visible(&mut self, panel: PanelId, visible: bool) {
        self.scene.set_panel_visible(panel, visible);
        for item in self.registry.iter_mut().filter(|i| i.content() == panel) {
            item.set_visible(visible);
        }
    }

    // === Accessors ===

    pub fn phase(&self) -> &EnginePhase {
        &self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase.is_transitioning()
    }

    pub fn selected_index(&self) -> Result<usize> {
        Ok(self.registry.selected_index()?)
    }

    pub fn selected_item(&self) -> Result<&SegmentItem> {
        Ok(self.registry.selected_item()?)
    }

    pub fn registry(&self) -> &SegmentRegistry {
        &self.registry
    }

    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn indicator_offset(&self) -> f64 {
        self.indicator_offset
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingScene;
    use crate::transition::Direction;
    use crate::CoreError;
    use glide_segments::{FontWeight, SegmentError};

    const PANEL_WIDTH: f64 = 300.0;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn control_with(labels: &[&str], config: Config) -> SegmentedControl<RecordingScene> {
        let items = labels
            .iter()
            .enumerate()
            .map(|(i, text)| (*text, PanelId(i as u64)));
        let mut control =
            SegmentedControl::with_items(RecordingScene::new(PANEL_WIDTH), config, items).unwrap();
        control.on_container_resized(320.0);
        control
    }

    fn abc() -> SegmentedControl<RecordingScene> {
        control_with(&["A", "B", "C"], Config::default())
    }

    fn selected_count(control: &SegmentedControl<RecordingScene>) -> usize {
        control.registry().iter().filter(|i| i.is_selected()).count()
    }

    #[test]
    fn test_append_selects_first_and_hides_rest() {
        let control = abc();
        let scene = control.scene();

        assert_eq!(control.selected_index().unwrap(), 0);
        assert!(scene.panel(PanelId(0)).visible);
        assert!(!scene.panel(PanelId(1)).visible);
        assert!(!scene.panel(PanelId(2)).visible);

        assert_eq!(scene.labels[0].text, "A");
        assert_eq!(scene.labels[0].style.weight, FontWeight::Bold);
        assert_eq!(scene.labels[1].style.weight, FontWeight::Regular);
        assert_eq!(scene.labels[2].style.weight, FontWeight::Regular);
    }

    #[test]
    fn test_resize_propagates_segment_width() {
        let control = abc();
        let scene = control.scene();

        assert_eq!(control.geometry().segment_width(), 100.0);
        assert_eq!(scene.indicator_width, 100.0);
        assert!(scene.labels.iter().all(|l| l.width == 100.0));
    }

    #[test]
    fn test_resize_twice_is_idempotent() {
        let mut control = abc();
        let indicator_writes = control.scene().indicator_width_writes;
        let label_writes = control.scene().label_width_writes;

        control.on_container_resized(320.0);

        assert_eq!(control.geometry().segment_width(), 100.0);
        assert_eq!(control.scene().indicator_width_writes, indicator_writes);
        assert_eq!(control.scene().label_width_writes, label_writes);
    }

    #[test]
    fn test_forward_transition_end_to_end() {
        let mut control = abc();

        let SelectOutcome::Started(state) = control.request_select(2).unwrap() else {
            panic!("expected a transition");
        };
        assert_eq!(state.direction, Direction::Forward);
        assert_eq!(state.from_index, 0);
        assert_eq!(state.from_panel, PanelId(0));
        assert_eq!(state.content_out_factor, -1.0);
        assert_eq!(state.content_in_factor, 1.0);
        assert_eq!(state.indicator_target, 200.0);

        // Synchronous part: flags, label styles, parked incoming panel
        {
            let scene = control.scene();
            assert_eq!(control.selected_item().unwrap().text(), "C");
            assert_eq!(selected_count(&control), 1);
            assert_eq!(scene.labels[2].style.weight, FontWeight::Bold);
            assert_eq!(scene.labels[0].style.weight, FontWeight::Regular);
            assert_eq!(scene.labels[0].style, control.palette().label_style(false));
            assert!(scene.panel(PanelId(2)).visible);
            assert_eq!(scene.panel(PanelId(2)).offset, PANEL_WIDTH);
            assert!(scene.panel(PanelId(0)).visible);
            assert!(control.is_transitioning());
        }

        // Halfway through the linear 250ms tweens
        assert_eq!(control.tick(ms(125)), 3);
        {
            let scene = control.scene();
            assert!((scene.indicator_offset - 100.0).abs() < 1e-9);
            assert!((scene.panel(PanelId(0)).offset + 150.0).abs() < 1e-9);
            assert!((scene.panel(PanelId(2)).offset - 150.0).abs() < 1e-9);
            assert!(scene.panel(PanelId(0)).visible);
        }

        assert_eq!(control.tick(ms(125)), 0);
        let scene = control.scene();
        assert_eq!(scene.indicator_offset, 200.0);
        assert_eq!(scene.panel(PanelId(0)).offset, -PANEL_WIDTH);
        assert!(!scene.panel(PanelId(0)).visible);
        assert_eq!(scene.panel(PanelId(2)).offset, 0.0);
        assert!(scene.panel(PanelId(2)).visible);
        assert!(!control.is_transitioning());
        assert_eq!(control.indicator_offset(), 200.0);
    }

    #[test]
    fn test_backward_transition_slides_right() {
        let mut control = abc();
        control.request_select(2).unwrap();
        control.finish();

        let SelectOutcome::Started(state) = control.request_select(1).unwrap() else {
            panic!("expected a transition");
        };
        assert_eq!(state.direction, Direction::Backward);
        assert_eq!(state.content_out_factor, 1.0);
        assert_eq!(state.content_in_factor, -1.0);
        assert_eq!(control.scene().panel(PanelId(1)).offset, -PANEL_WIDTH);

        control.finish();
        let scene = control.scene();
        assert_eq!(scene.panel(PanelId(2)).offset, PANEL_WIDTH);
        assert!(!scene.panel(PanelId(2)).visible);
        assert_eq!(scene.indicator_offset, 100.0);
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut control = abc();
        let before = control.scene().clone();

        assert_eq!(
            control.request_select(0).unwrap(),
            SelectOutcome::AlreadySelected
        );
        assert!(!control.is_transitioning());
        assert_eq!(control.tick(ms(16)), 0);
        assert_eq!(control.scene(), &before);
    }

    #[test]
    fn test_out_of_range_mutates_nothing() {
        let mut control = abc();
        let before = control.scene().clone();

        for index in [3, usize::MAX] {
            let err = control.request_select(index).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Segment(SegmentError::IndexOutOfRange { len: 3, .. })
            ));
        }
        assert_eq!(control.selected_index().unwrap(), 0);
        assert!(!control.is_transitioning());
        assert_eq!(control.scene(), &before);
    }

    #[test]
    fn test_select_unknown_segment() {
        let mut control = abc();
        let stranger = SegmentItem::new("Z", PanelId(99));
        assert!(matches!(
            control.select_segment(stranger.id()),
            Err(CoreError::Segment(SegmentError::NotFound(_)))
        ));

        let id = control.registry().get(1).unwrap().id().clone();
        assert!(matches!(
            control.select_segment(&id).unwrap(),
            SelectOutcome::Started(_)
        ));
    }

    #[test]
    fn test_restart_midflight_settles_consistently() {
        let mut control = abc();
        control.request_select(1).unwrap();
        control.tick(ms(100));

        // Back to A while A is still sliding out
        let SelectOutcome::Started(state) = control.request_select(0).unwrap() else {
            panic!("expected a transition");
        };
        assert_eq!(state.from_index, 1);
        assert_eq!(state.direction, Direction::Backward);
        assert_eq!(selected_count(&control), 1);

        control.finish();
        let scene = control.scene();
        assert!(scene.panel(PanelId(0)).visible);
        assert_eq!(scene.panel(PanelId(0)).offset, 0.0);
        assert!(!scene.panel(PanelId(1)).visible);
        assert!(!scene.panel(PanelId(2)).visible);
        assert_eq!(scene.indicator_offset, 0.0);
        assert!(!control.is_transitioning());
    }

    #[test]
    fn test_restart_toward_third_segment() {
        let mut control = abc();
        control.request_select(1).unwrap();
        control.tick(ms(50));
        control.request_select(2).unwrap();

        control.tick(ms(250));
        let scene = control.scene();
        assert_eq!(control.selected_index().unwrap(), 2);
        assert!(!scene.panel(PanelId(0)).visible);
        assert!(!scene.panel(PanelId(1)).visible);
        assert!(scene.panel(PanelId(2)).visible);
        assert_eq!(scene.indicator_offset, 200.0);
    }

    #[test]
    fn test_ignore_policy_drops_requests_midflight() {
        let config = Config {
            reentry: ReentryPolicy::Ignore,
            ..Config::default()
        };
        let mut control = control_with(&["A", "B", "C"], config);
        control.request_select(1).unwrap();

        assert_eq!(control.request_select(2).unwrap(), SelectOutcome::Ignored);
        assert_eq!(control.selected_index().unwrap(), 1);

        control.finish();
        assert!(matches!(
            control.request_select(2).unwrap(),
            SelectOutcome::Started(_)
        ));
    }

    #[test]
    fn test_resize_realigns_indicator() {
        let mut control = abc();
        control.request_select(1).unwrap();
        control.finish();
        assert_eq!(control.indicator_offset(), 100.0);

        control.on_container_resized(400.0);
        assert_eq!(control.geometry().segment_width(), 127.0);
        assert_eq!(control.scene().indicator_offset, 127.0);
    }

    #[test]
    fn test_set_theme_restyles_labels() {
        let mut control = abc();
        control.set_theme(ThemeMode::Dark);

        let scene = control.scene();
        let dark = Palette::for_mode(ThemeMode::Dark);
        assert_eq!(scene.track_color, Some(dark.track));
        assert_eq!(scene.labels[0].style, dark.label_style(true));
        assert_eq!(scene.labels[1].style, dark.label_style(false));
    }

    #[test]
    fn test_replace_items_resets_state() {
        let mut control = abc();
        control.request_select(2).unwrap();
        control.tick(ms(40));

        control
            .replace_items([("X", PanelId(10)), ("Y", PanelId(11))])
            .unwrap();

        assert!(!control.is_transitioning());
        assert_eq!(control.registry().len(), 2);
        assert_eq!(control.selected_item().unwrap().text(), "X");
        let scene = control.scene();
        assert_eq!(scene.labels.len(), 2);
        assert!(scene.panel(PanelId(10)).visible);
        assert!(!scene.panel(PanelId(11)).visible);
        assert_eq!(control.geometry().segment_width(), 154.0);
        assert!(scene.labels.iter().all(|l| l.width == 154.0));
        assert_eq!(scene.indicator_offset, 0.0);
    }

    #[test]
    fn test_empty_control_tolerates_resize() {
        let mut control =
            SegmentedControl::new(RecordingScene::new(PANEL_WIDTH), Config::default()).unwrap();
        control.on_container_resized(320.0);
        assert_eq!(control.geometry().segment_width(), 0.0);
        assert_eq!(control.scene().indicator_width_writes, 0);
        assert!(control.selected_index().is_err());
        assert!(control.request_select(0).is_err());
    }

    #[test]
    fn test_single_selection_holds_across_random_walk() {
        let mut control = control_with(&["A", "B", "C", "D"], Config::default());
        for (step, index) in [3, 1, 1, 0, 2, 3, 0].into_iter().enumerate() {
            control.request_select(index).unwrap();
            assert_eq!(selected_count(&control), 1);
            control.tick(ms(30 * step as u64));
            assert_eq!(selected_count(&control), 1);
        }
        control.finish();

        let visible: Vec<_> = control
            .registry()
            .iter()
            .filter(|i| control.scene().panel(i.content()).visible)
            .map(|i| i.text().to_string())
            .collect();
        assert_eq!(visible, vec!["A"]);
    }
}
