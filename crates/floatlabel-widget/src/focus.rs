//! Focus-driven color animation for the floating label.
//!
//! Gaining focus animates the label from the unfocused to the focused color;
//! losing focus plays the reverse. One animator per direction is built
//! lazily on first use and reused afterwards, so repeated toggles replay the
//! identical curve without reallocating.

use floatlabel_config::{AnimationTiming, Color, Easing};
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationFrame, AnimationRun, ColorAnimator, FrameOutcome, Generation};

/// Direction of a focus color animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusDirection {
    /// Unfocused color → focused color.
    ToFocused,
    /// Focused color → unfocused color.
    ToUnfocused,
}

impl FocusDirection {
    pub fn for_focus(has_focus: bool) -> Self {
        if has_focus { Self::ToFocused } else { Self::ToUnfocused }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusAnimationState {
    #[default]
    Idle,
    AnimatingToFocused,
    AnimatingToUnfocused,
}

impl From<FocusDirection> for FocusAnimationState {
    fn from(direction: FocusDirection) -> Self {
        match direction {
            FocusDirection::ToFocused => Self::AnimatingToFocused,
            FocusDirection::ToUnfocused => Self::AnimatingToUnfocused,
        }
    }
}

#[derive(Debug)]
pub struct FocusColorAnimator {
    focused: Color,
    unfocused: Color,
    duration_ms: u32,
    easing: Easing,
    to_focused: Option<ColorAnimator>,
    to_unfocused: Option<ColorAnimator>,
    state: FocusAnimationState,
    generation: Generation,
}

impl FocusColorAnimator {
    pub fn new(focused: Color, unfocused: Color, timing: AnimationTiming) -> Self {
        Self {
            focused,
            unfocused,
            duration_ms: timing.focus_duration_ms,
            easing: timing.focus_easing,
            to_focused: None,
            to_unfocused: None,
            state: FocusAnimationState::Idle,
            generation: Generation::default(),
        }
    }

    pub fn state(&self) -> FocusAnimationState {
        self.state
    }

    /// Generation of the newest run; only its frames are applied.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The animator for `direction`, if it has been built.
    pub fn animator(&self, direction: FocusDirection) -> Option<&ColorAnimator> {
        match direction {
            FocusDirection::ToFocused => self.to_focused.as_ref(),
            FocusDirection::ToUnfocused => self.to_unfocused.as_ref(),
        }
    }

    /// The animator for `direction`, built on first request.
    pub fn get_or_create(&mut self, direction: FocusDirection) -> &mut ColorAnimator {
        let (from, to) = match direction {
            FocusDirection::ToFocused => (self.unfocused, self.focused),
            FocusDirection::ToUnfocused => (self.focused, self.unfocused),
        };
        let (duration_ms, easing) = (self.duration_ms, self.easing);
        let slot = match direction {
            FocusDirection::ToFocused => &mut self.to_focused,
            FocusDirection::ToUnfocused => &mut self.to_unfocused,
        };
        slot.get_or_insert_with(|| {
            log::debug!("building {direction:?} color animator");
            ColorAnimator::new(from, to, duration_ms, easing)
        })
    }

    /// Start the animation for a focus change. Any in-flight run in either
    /// direction is superseded.
    pub fn on_focus_changed(&mut self, has_focus: bool) -> AnimationRun {
        let direction = FocusDirection::for_focus(has_focus);
        self.supersede_all();
        self.generation = self.generation.next();
        let generation = self.generation;

        let animator = self.get_or_create(direction);
        animator.start(generation);
        let run = AnimationRun {
            generation,
            animator: animator.id(),
            direction,
            duration_ms: animator.duration_ms(),
        };
        self.state = direction.into();
        log::debug!("focus {has_focus}: starting {direction:?} run {generation:?}");
        run
    }

    /// Deliver a frame. Frames from any generation but the newest are stale.
    pub fn on_frame(&mut self, frame: AnimationFrame) -> FrameOutcome {
        let direction = match self.state {
            FocusAnimationState::AnimatingToFocused => FocusDirection::ToFocused,
            FocusAnimationState::AnimatingToUnfocused => FocusDirection::ToUnfocused,
            FocusAnimationState::Idle => return FrameOutcome::Stale,
        };
        if frame.generation != self.generation {
            log::trace!(
                "dropping stale frame {:?} (current {:?})",
                frame.generation,
                self.generation
            );
            return FrameOutcome::Stale;
        }
        let outcome = self.get_or_create(direction).frame(frame.generation, frame.elapsed_ms);
        if let FrameOutcome::Finished(_) = outcome {
            self.state = FocusAnimationState::Idle;
        }
        outcome
    }

    /// Invalidate every in-flight run without starting a new one.
    ///
    /// Returns the end color of the run that was cut short, if any.
    pub fn cancel(&mut self) -> Option<Color> {
        let settled = match self.state {
            FocusAnimationState::AnimatingToFocused => Some(self.focused),
            FocusAnimationState::AnimatingToUnfocused => Some(self.unfocused),
            FocusAnimationState::Idle => None,
        };
        self.supersede_all();
        self.generation = self.generation.next();
        self.state = FocusAnimationState::Idle;
        settled
    }

    /// Replace endpoints and timing. Memoized animators are dropped because
    /// their curves no longer match; the generation keeps increasing.
    pub fn reconfigure(&mut self, focused: Color, unfocused: Color, timing: AnimationTiming) {
        let unchanged = self.focused == focused
            && self.unfocused == unfocused
            && self.duration_ms == timing.focus_duration_ms
            && self.easing == timing.focus_easing;
        if unchanged {
            return;
        }
        self.cancel();
        self.focused = focused;
        self.unfocused = unfocused;
        self.duration_ms = timing.focus_duration_ms;
        self.easing = timing.focus_easing;
        self.to_focused = None;
        self.to_unfocused = None;
    }

    fn supersede_all(&mut self) {
        for animator in [self.to_focused.as_mut(), self.to_unfocused.as_mut()]
            .into_iter()
            .flatten()
        {
            animator.supersede();
        }
    }
}

static_assertions::assert_impl_all!(FocusColorAnimator: Send);
