//! A restartable color animation between two fixed endpoints.
//!
//! The endpoints and curve are fixed when the animator is built, so every run
//! replays the identical interpolation. Starting again discards any progress
//! of the previous run and tags the new run with a fresh generation.

use floatlabel_config::{Color, Easing};

use super::interpolate::Interpolate;
use super::types::{AnimationId, AnimationState, FrameOutcome, Generation};

#[derive(Debug, Clone)]
pub struct ColorAnimator {
    id: AnimationId,
    from: Color,
    to: Color,
    duration_ms: u32,
    easing: Easing,
    state: AnimationState,
    generation: Generation,
    start_count: u32,
}

impl ColorAnimator {
    pub fn new(from: Color, to: Color, duration_ms: u32, easing: Easing) -> Self {
        Self {
            id: AnimationId::new(),
            from,
            to,
            duration_ms,
            easing,
            state: AnimationState::Idle,
            generation: Generation::default(),
            start_count: 0,
        }
    }

    pub fn id(&self) -> AnimationId {
        self.id
    }

    pub fn from_color(&self) -> Color {
        self.from
    }

    pub fn to_color(&self) -> Color {
        self.to
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Generation of the most recent run.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of times this animator has been started.
    pub fn start_count(&self) -> u32 {
        self.start_count
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    /// (Re)start from the `from` endpoint under `generation`.
    pub fn start(&mut self, generation: Generation) {
        self.generation = generation;
        self.state = AnimationState::Running;
        self.start_count += 1;
    }

    /// Mark the current run as superseded; its frames become stale.
    pub fn supersede(&mut self) {
        if self.state == AnimationState::Running {
            self.state = AnimationState::Idle;
        }
    }

    /// Linear progress at `elapsed_ms`, clamped to `[0, 1]`.
    pub fn progress(&self, elapsed_ms: f32) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms.max(0.0) / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Interpolated color at `elapsed_ms`, independent of run state.
    pub fn value_at(&self, elapsed_ms: f32) -> Color {
        let eased = self.easing.evaluate(self.progress(elapsed_ms));
        self.from.interpolate(&self.to, eased)
    }

    /// Advance the run tagged `generation` to `elapsed_ms`.
    ///
    /// Frames for any other generation, or arriving after the run finished,
    /// are reported as [`FrameOutcome::Stale`].
    pub fn frame(&mut self, generation: Generation, elapsed_ms: f32) -> FrameOutcome {
        if self.state != AnimationState::Running || generation != self.generation {
            return FrameOutcome::Stale;
        }
        if self.progress(elapsed_ms) >= 1.0 {
            self.state = AnimationState::Finished;
            FrameOutcome::Finished(self.to)
        } else {
            FrameOutcome::Tick(self.value_at(elapsed_ms))
        }
    }
}
