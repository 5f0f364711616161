//! Step slide-in animation state

use std::time::{Duration, Instant};

/// Side the incoming step slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideFrom {
    Right,
    Left,
}

impl SlideFrom {
    /// Forward (and zero) deltas enter from the right
    pub fn for_delta(delta: i32) -> Self {
        if delta >= 0 {
            SlideFrom::Right
        } else {
            SlideFrom::Left
        }
    }
}

/// Animation phase of a step transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Body sliding towards its resting position
    Sliding,
    /// Animation finished
    Complete,
}

/// Slide-in animation for the step body
#[derive(Debug)]
pub struct StepTransition {
    /// When the transition started
    pub start_time: Instant,
    pub duration: Duration,
    pub from: SlideFrom,
    pub phase: TransitionPhase,
    /// Horizontal offset as a fraction of the body width, signed by direction
    pub offset: f32,
    /// Linear progress (0.0 to 1.0)
    pub progress: f32,
}

impl StepTransition {
    /// Starting offset: half the body width
    const START_OFFSET: f32 = 0.5;

    pub fn new(delta: i32, duration: Duration) -> Self {
        let from = SlideFrom::for_delta(delta);
        let mut transition = Self {
            start_time: Instant::now(),
            duration,
            from,
            phase: TransitionPhase::Sliding,
            offset: 0.0,
            progress: 0.0,
        };
        transition.update_with_elapsed(Duration::ZERO);
        transition
    }

    /// Update animation state based on wall-clock time
    pub fn update(&mut self) {
        self.update_with_elapsed(self.start_time.elapsed());
    }

    /// Update animation state for a given elapsed time
    pub fn update_with_elapsed(&mut self, elapsed: Duration) {
        if self.duration.is_zero() || elapsed >= self.duration {
            self.phase = TransitionPhase::Complete;
            self.progress = 1.0;
            self.offset = 0.0;
            return;
        }

        self.phase = TransitionPhase::Sliding;
        self.progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = simple_easing::cubic_in_out(self.progress);
        let remaining = Self::START_OFFSET * (1.0 - eased);
        self.offset = match self.from {
            SlideFrom::Right => remaining,
            SlideFrom::Left => -remaining,
        };
    }

    /// Offset in columns for a body of `width` columns
    pub fn offset_columns(&self, width: u16) -> i32 {
        (self.offset * width as f32).round() as i32
    }

    /// Stand-in for the opacity fade: dimmed during the first half
    pub fn is_dimmed(&self) -> bool {
        self.phase == TransitionPhase::Sliding && self.progress < 0.5
    }

    pub fn is_complete(&self) -> bool {
        self.phase == TransitionPhase::Complete
    }
}
