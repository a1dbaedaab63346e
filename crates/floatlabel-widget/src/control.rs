//! The composite float label control.
//!
//! `FloatLabel` wires host events into the two state machines and applies
//! their decisions to the surfaces it owns:
//!
//! ```text
//! text-changed(len) ──► LabelVisibilityController ──► label visibility + slide
//! focus-changed(b)  ──► FocusColorAnimator ──► FrameScheduler
//! frame(gen, t)     ──► FocusColorAnimator ──► label text color
//! ```

use floatlabel_config::FloatLabelConfig;

use crate::animation::{AnimationFrame, FrameOutcome, Visibility};
use crate::focus::{FocusAnimationState, FocusColorAnimator};
use crate::host::{EditableSurface, FrameScheduler, HostContext, LabelSurface};
use crate::visibility::{LabelVisibilityController, VisibilityChange};

struct Parts<E, L, S> {
    editable: E,
    label: L,
    scheduler: S,
    context: HostContext,
    visibility: LabelVisibilityController,
    focus: FocusColorAnimator,
    attached: bool,
}

/// A text field whose hint floats above it once text is entered.
///
/// Built without a [`HostContext`] the control is inert: no setup is
/// performed, every operation is a no-op and [`text`](Self::text) returns an
/// empty string.
pub struct FloatLabel<E, L, S> {
    config: FloatLabelConfig,
    parts: Option<Parts<E, L, S>>,
}

impl<E, L, S> FloatLabel<E, L, S>
where
    E: EditableSurface,
    L: LabelSurface,
    S: FrameScheduler,
{
    pub fn new(
        config: FloatLabelConfig,
        context: Option<HostContext>,
        editable: E,
        label: L,
        scheduler: S,
    ) -> Self {
        let Some(context) = context else {
            log::warn!("float label created without host context; control left empty");
            return Self::empty(config);
        };

        let focus = FocusColorAnimator::new(config.focused_color, config.unfocused_color, config.timing);
        let mut control = Self {
            config,
            parts: Some(Parts {
                editable,
                label,
                scheduler,
                context,
                visibility: LabelVisibilityController::new(),
                focus,
                attached: true,
            }),
        };
        control.setup();
        control
    }

    /// A control with no surfaces.
    pub fn empty(config: FloatLabelConfig) -> Self {
        Self {
            config,
            parts: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_none()
    }

    pub fn config(&self) -> &FloatLabelConfig {
        &self.config
    }

    pub fn editable(&self) -> Option<&E> {
        self.parts.as_ref().map(|p| &p.editable)
    }

    pub fn label(&self) -> Option<&L> {
        self.parts.as_ref().map(|p| &p.label)
    }

    pub fn scheduler_mut(&mut self) -> Option<&mut S> {
        self.parts.as_mut().map(|p| &mut p.scheduler)
    }

    pub fn focus_animator(&self) -> Option<&FocusColorAnimator> {
        self.parts.as_ref().map(|p| &p.focus)
    }

    pub fn visibility(&self) -> Visibility {
        self.parts
            .as_ref()
            .map(|p| p.visibility.state())
            .unwrap_or_default()
    }

    pub fn focus_state(&self) -> FocusAnimationState {
        self.parts
            .as_ref()
            .map(|p| p.focus.state())
            .unwrap_or_default()
    }

    pub fn is_attached(&self) -> bool {
        self.parts.as_ref().is_some_and(|p| p.attached)
    }

    /// Replace the configuration and redo setup. Visibility is re-derived
    /// without animation.
    pub fn apply_configuration(&mut self, config: FloatLabelConfig) {
        self.config = config;
        if let Some(parts) = self.parts.as_mut() {
            parts
                .focus
                .reconfigure(self.config.focused_color, self.config.unfocused_color, self.config.timing);
        }
        self.setup();
    }

    /// Update the hint on both the placeholder and the label.
    ///
    /// The text itself is left alone, so visibility only changes if it was
    /// out of sync with the current length.
    pub fn set_hint(&mut self, hint: impl Into<String>) {
        self.config.hint_text = hint.into();
        let Some(parts) = self.parts.as_mut() else {
            return;
        };
        parts.editable.set_hint(&self.config.hint_text);
        parts.label.set_text(&self.config.hint_text);
        let len = text_len(&parts.editable);
        if let Some(change) = parts.visibility.on_setup(len) {
            apply_visibility(parts, change, self.config.timing.slide_duration_ms);
        }
    }

    /// Current text, never absent: missing text reads as `""`.
    pub fn text(&self) -> String {
        self.parts
            .as_ref()
            .and_then(|p| p.editable.text())
            .unwrap_or_default()
    }

    /// Replace the text. Crossing between empty and non-empty animates the
    /// label exactly like typing does. Visibility follows what the field
    /// holds afterwards, which may differ if the host filters input.
    pub fn set_text(&mut self, text: &str) {
        let Some(parts) = self.parts.as_mut() else {
            return;
        };
        parts.editable.set_text(text);
        let len = text_len(&parts.editable);
        self.on_text_changed(len);
    }

    pub fn set_error(&mut self, message: Option<&str>) {
        if let Some(parts) = self.parts.as_mut() {
            parts.editable.set_error(message);
        }
    }

    /// Host notification: the field's text length changed.
    pub fn on_text_changed(&mut self, new_len: usize) {
        let Some(parts) = self.parts.as_mut() else {
            return;
        };
        if let Some(change) = parts.visibility.on_text_changed(new_len) {
            log::debug!("text length {new_len}: label -> {:?}", change.state);
            apply_visibility(parts, change, self.config.timing.slide_duration_ms);
        }
    }

    /// Host notification: the field gained or lost focus.
    pub fn on_focus_changed(&mut self, has_focus: bool) {
        let Some(parts) = self.parts.as_mut() else {
            return;
        };
        let run = parts.focus.on_focus_changed(has_focus);
        parts.scheduler.request_frames(run);
    }

    /// Host notification: an animation frame for a previously requested run.
    pub fn on_animation_frame(&mut self, frame: AnimationFrame) -> FrameOutcome {
        let Some(parts) = self.parts.as_mut() else {
            return FrameOutcome::Stale;
        };
        if !parts.attached {
            return FrameOutcome::Stale;
        }
        let outcome = parts.focus.on_frame(frame);
        if let Some(color) = outcome.color() {
            log::trace!("frame {:?} @{}ms -> {}", frame.generation, frame.elapsed_ms, color.to_css_hex());
            parts.label.set_text_color(color);
        }
        outcome
    }

    /// Host lifecycle: the control is back in a window.
    pub fn attach(&mut self) {
        if let Some(parts) = self.parts.as_mut() {
            parts.attached = true;
        }
    }

    /// Host lifecycle: the control left its window. In-flight runs are
    /// invalidated and the label jumps to the color they were heading for.
    pub fn detach(&mut self) {
        if let Some(parts) = self.parts.as_mut() {
            parts.attached = false;
            if let Some(color) = parts.focus.cancel() {
                parts.label.set_text_color(color);
            }
        }
    }

    fn setup(&mut self) {
        let config = &self.config;
        let Some(parts) = self.parts.as_mut() else {
            return;
        };

        let editable = &mut parts.editable;
        editable.set_hint(&config.hint_text);
        editable.set_hint_color(config.unfocused_color);
        if let Some(text) = &config.initial_text {
            editable.set_text(text);
        }
        editable.set_text_size(config.text_size_sp);
        let width = parts
            .context
            .metrics
            .screen_width_px
            .and_then(|screen_width| config.fit_width.width_for(screen_width));
        editable.set_width(width);
        editable.set_input_constraints(config.input_constraints);

        let label = &mut parts.label;
        label.set_text(&config.hint_text);
        label.set_text_color(config.unfocused_color);
        label.set_text_size(config.label_text_size_sp());
        label.set_gravity(config.gravity);
        label.set_padding_left(parts.editable.padding_left());
        label.set_visibility(parts.visibility.state());

        let len = text_len(&parts.editable);
        if let Some(change) = parts.visibility.on_setup(len) {
            apply_visibility(parts, change, config.timing.slide_duration_ms);
        }
        log::debug!(
            "float label set up: hint={:?} visibility={:?}",
            config.hint_text,
            parts.visibility.state()
        );
    }
}

fn text_len<E: EditableSurface>(editable: &E) -> usize {
    editable.text().map(|t| t.chars().count()).unwrap_or(0)
}

fn apply_visibility<E, L: LabelSurface, S>(
    parts: &mut Parts<E, L, S>,
    change: VisibilityChange,
    slide_duration_ms: u32,
) {
    parts.label.set_visibility(change.state);
    if let Some(animation) = change.animation {
        parts.label.play_animation(animation, slide_duration_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::SlideAnimation;
    use crate::focus::FocusDirection;
    use crate::recording::{ManualScheduler, RecordingEditable, RecordingLabel};
    use floatlabel_config::{Color, DisplayMetrics, FitWidth, Gravity, InputConstraints};

    type TestLabel = FloatLabel<RecordingEditable, RecordingLabel, ManualScheduler>;

    const FOCUSED: Color = Color::rgb(100, 150, 200);
    const UNFOCUSED: Color = Color::rgb(0, 0, 0);

    fn context() -> Option<HostContext> {
        Some(HostContext::new(DisplayMetrics {
            scaled_density: 2.0,
            screen_width_px: Some(1080.0),
        }))
    }

    fn control(config: FloatLabelConfig) -> TestLabel {
        FloatLabel::new(
            config,
            context(),
            RecordingEditable::with_padding(12.0),
            RecordingLabel::default(),
            ManualScheduler::default(),
        )
    }

    fn default_control() -> TestLabel {
        control(
            FloatLabelConfig::builder()
                .hint("Email")
                .focused_color(FOCUSED)
                .unfocused_color(UNFOCUSED)
                .build(),
        )
    }

    #[test]
    fn test_setup_configures_surfaces() {
        let c = control(
            FloatLabelConfig::builder()
                .hint("Name")
                .unfocused_color(UNFOCUSED)
                .text_size_sp(26.0)
                .gravity(Gravity::End)
                .fit_width(FitWidth::Half)
                .input_constraints(InputConstraints {
                    input_type: Some(1),
                    ime_options: None,
                })
                .build(),
        );
        let editable = c.editable().unwrap();
        assert_eq!(editable.hint, "Name");
        assert_eq!(editable.hint_color, Some(UNFOCUSED));
        assert_eq!(editable.text_size_sp, Some(26.0));
        assert_eq!(editable.width_px, Some(540));
        assert_eq!(editable.constraints.input_type, Some(1));

        let label = c.label().unwrap();
        assert_eq!(label.text, "Name");
        assert_eq!(label.text_color(), Some(UNFOCUSED));
        assert!((label.text_size_sp.unwrap() - 20.0).abs() < 1e-4);
        assert_eq!(label.gravity, Some(Gravity::End));
        assert_eq!(label.padding_left, Some(12.0));
        assert_eq!(label.visibility, Some(Visibility::Hidden));
        assert_eq!(c.visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_no_width_forced_without_fit_mode() {
        let c = default_control();
        assert_eq!(c.editable().unwrap().width_px, None);
    }

    #[test]
    fn test_initial_text_shows_label_without_animation() {
        let c = control(FloatLabelConfig::builder().hint("Email").initial_text("a@b.c").build());
        assert_eq!(c.visibility(), Visibility::Visible);
        let label = c.label().unwrap();
        assert_eq!(label.visibility, Some(Visibility::Visible));
        assert!(label.animations.is_empty());
        assert_eq!(c.text(), "a@b.c");
    }

    #[test]
    fn test_typing_and_clearing_animate() {
        let mut c = default_control();
        c.on_text_changed(1);
        c.on_text_changed(2);
        c.on_text_changed(0);

        let label = c.label().unwrap();
        assert_eq!(
            label.animations,
            vec![
                (SlideAnimation::SlideFromBottom, 300),
                (SlideAnimation::SlideToBottom, 300),
            ]
        );
        assert_eq!(label.visibility, Some(Visibility::Hidden));
    }

    #[test]
    fn test_set_text_drives_visibility() {
        let mut c = default_control();
        c.set_text("hello");
        assert_eq!(c.visibility(), Visibility::Visible);
        assert_eq!(c.text(), "hello");
        c.set_text("");
        assert_eq!(c.visibility(), Visibility::Hidden);
        assert_eq!(c.text(), "");
        assert_eq!(c.label().unwrap().animations.len(), 2);
    }

    /// Field that silently drops everything but digits.
    #[derive(Default)]
    struct DigitsOnly(RecordingEditable);

    impl EditableSurface for DigitsOnly {
        fn set_hint(&mut self, hint: &str) {
            self.0.set_hint(hint);
        }
        fn set_hint_color(&mut self, color: Color) {
            self.0.set_hint_color(color);
        }
        fn set_text(&mut self, text: &str) {
            let digits: String = text.chars().filter(char::is_ascii_digit).collect();
            self.0.set_text(&digits);
        }
        fn text(&self) -> Option<String> {
            self.0.text()
        }
        fn set_error(&mut self, message: Option<&str>) {
            self.0.set_error(message);
        }
        fn set_text_size(&mut self, size_sp: f32) {
            self.0.set_text_size(size_sp);
        }
        fn set_width(&mut self, width_px: Option<u32>) {
            self.0.set_width(width_px);
        }
        fn set_input_constraints(&mut self, constraints: InputConstraints) {
            self.0.set_input_constraints(constraints);
        }
    }

    #[test]
    fn test_set_text_follows_filtered_field_content() {
        let mut c = FloatLabel::new(
            FloatLabelConfig::builder().hint("PIN").build(),
            context(),
            DigitsOnly::default(),
            RecordingLabel::default(),
            ManualScheduler::default(),
        );
        c.set_text("abc");
        assert_eq!(c.text(), "");
        assert_eq!(c.visibility(), Visibility::Hidden);
        assert!(c.label().unwrap().animations.is_empty());

        c.set_text("a1b2");
        assert_eq!(c.text(), "12");
        assert_eq!(c.visibility(), Visibility::Visible);
    }

    #[test]
    fn test_text_is_empty_string_when_unset() {
        let c = default_control();
        assert_eq!(c.editable().unwrap().text, None);
        assert_eq!(c.text(), "");
    }

    #[test]
    fn test_set_hint_keeps_visibility() {
        let mut c = default_control();
        c.set_text("x");
        let animations = c.label().unwrap().animations.len();

        c.set_hint("X");
        assert_eq!(c.editable().unwrap().hint, "X");
        assert_eq!(c.label().unwrap().text, "X");
        assert_eq!(c.config().hint_text, "X");
        assert_eq!(c.visibility(), Visibility::Visible);
        assert_eq!(c.label().unwrap().animations.len(), animations);
    }

    #[test]
    fn test_set_error_passthrough() {
        let mut c = default_control();
        c.set_error(Some("required"));
        assert_eq!(c.editable().unwrap().error.as_deref(), Some("required"));
        c.set_error(None);
        assert_eq!(c.editable().unwrap().error, None);
    }

    #[test]
    fn test_focus_requests_frames_and_applies_colors() {
        let mut c = default_control();
        c.on_focus_changed(true);
        let run = c.scheduler_mut().unwrap().latest().unwrap();
        assert_eq!(run.direction, FocusDirection::ToFocused);
        assert_eq!(run.duration_ms, 700);
        assert_eq!(c.focus_state(), FocusAnimationState::AnimatingToFocused);

        assert!(c.on_animation_frame(run.frame(350.0)).wants_more());
        assert_eq!(c.label().unwrap().text_color(), Some(Color::rgb(50, 75, 100)));
        assert_eq!(c.on_animation_frame(run.frame(700.0)), FrameOutcome::Finished(FOCUSED));
        assert_eq!(c.label().unwrap().text_color(), Some(FOCUSED));
        assert_eq!(c.focus_state(), FocusAnimationState::Idle);
    }

    #[test]
    fn test_stale_frames_do_not_touch_label() {
        let mut c = default_control();
        c.on_focus_changed(true);
        c.on_focus_changed(false);
        let runs = c.scheduler_mut().unwrap().take_runs();
        assert_eq!(runs.len(), 2);

        let colors_before = c.label().unwrap().colors.len();
        assert_eq!(c.on_animation_frame(runs[0].frame(100.0)), FrameOutcome::Stale);
        assert_eq!(c.label().unwrap().colors.len(), colors_before);
    }

    #[test]
    fn test_detach_cancels_in_flight_runs() {
        let mut c = default_control();
        c.on_focus_changed(true);
        let run = c.scheduler_mut().unwrap().latest().unwrap();
        c.detach();
        assert!(!c.is_attached());
        assert_eq!(c.on_animation_frame(run.frame(100.0)), FrameOutcome::Stale);

        c.attach();
        assert_eq!(c.on_animation_frame(run.frame(200.0)), FrameOutcome::Stale);
        c.on_focus_changed(true);
        let fresh = c.scheduler_mut().unwrap().latest().unwrap();
        assert!(c.on_animation_frame(fresh.frame(10.0)).wants_more());
    }

    #[test]
    fn test_detach_settles_label_on_target_color() {
        let mut c = default_control();
        c.on_focus_changed(true);
        let run = c.scheduler_mut().unwrap().latest().unwrap();
        c.on_animation_frame(run.frame(350.0));
        assert_eq!(c.label().unwrap().text_color(), Some(Color::rgb(50, 75, 100)));

        c.detach();
        c.attach();
        assert_eq!(c.label().unwrap().text_color(), Some(FOCUSED));
        assert_eq!(c.focus_state(), FocusAnimationState::Idle);

        let colors = c.label().unwrap().colors.len();
        c.detach();
        assert_eq!(c.label().unwrap().colors.len(), colors);
    }

    #[test]
    fn test_apply_configuration_clears_previous_width_and_constraints() {
        let mut c = control(
            FloatLabelConfig::builder()
                .fit_width(FitWidth::Full)
                .input_constraints(InputConstraints {
                    input_type: Some(2),
                    ime_options: Some(6),
                })
                .build(),
        );
        assert_eq!(c.editable().unwrap().width_px, Some(1080));
        assert_eq!(c.editable().unwrap().constraints.input_type, Some(2));

        c.apply_configuration(FloatLabelConfig::default());
        assert_eq!(c.editable().unwrap().width_px, None);
        assert_eq!(c.editable().unwrap().constraints, InputConstraints::default());
    }

    #[test]
    fn test_apply_configuration_rederives_without_animation() {
        let mut c = default_control();
        c.on_focus_changed(true);
        let old_run = c.scheduler_mut().unwrap().latest().unwrap();

        let new_config = FloatLabelConfig::builder()
            .hint("Phone")
            .initial_text("555")
            .focused_color(Color::rgb(255, 0, 0))
            .build();
        c.apply_configuration(new_config);

        assert_eq!(c.visibility(), Visibility::Visible);
        assert!(c.label().unwrap().animations.is_empty());
        assert_eq!(c.editable().unwrap().hint, "Phone");
        assert_eq!(c.on_animation_frame(old_run.frame(100.0)), FrameOutcome::Stale);

        c.on_focus_changed(true);
        let animator = c
            .focus_animator()
            .unwrap()
            .animator(FocusDirection::ToFocused)
            .unwrap();
        assert_eq!(animator.to_color(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_empty_control_is_inert() {
        let mut c: TestLabel = FloatLabel::new(
            FloatLabelConfig::default(),
            None,
            RecordingEditable::default(),
            RecordingLabel::default(),
            ManualScheduler::default(),
        );
        assert!(c.is_empty());
        c.set_text("ignored");
        c.set_hint("ignored");
        c.on_text_changed(4);
        c.on_focus_changed(true);
        c.set_error(Some("x"));
        assert_eq!(c.text(), "");
        assert_eq!(c.visibility(), Visibility::Hidden);
        assert!(c.label().is_none());
        assert!(c.scheduler_mut().is_none());
    }
}
