//! Reveal phases for the X and Y axes.
//!
//! A phase of 1.0 means fully revealed. `tick` advances running reveals by
//! the elapsed frame time; a zero duration completes immediately.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Reveal {
    elapsed: Duration,
    duration: Duration,
}

impl Reveal {
    fn start(duration: Duration) -> Option<Self> {
        (!duration.is_zero()).then_some(Self {
            elapsed: Duration::ZERO,
            duration,
        })
    }

    fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartAnimator {
    phase_x: f32,
    phase_y: f32,
    reveal_x: Option<Reveal>,
    reveal_y: Option<Reveal>,
}

impl Default for ChartAnimator {
    fn default() -> Self {
        Self {
            phase_x: 1.0,
            phase_y: 1.0,
            reveal_x: None,
            reveal_y: None,
        }
    }
}

impl ChartAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase_x(&self) -> f32 {
        self.phase_x
    }

    pub fn phase_y(&self) -> f32 {
        self.phase_y
    }

    pub fn set_phase_x(&mut self, phase: f32) {
        self.reveal_x = None;
        self.phase_x = phase;
    }

    pub fn set_phase_y(&mut self, phase: f32) {
        self.reveal_y = None;
        self.phase_y = phase;
    }

    pub fn animate_x(&mut self, duration_ms: u64) {
        self.reveal_x = Reveal::start(Duration::from_millis(duration_ms));
        self.phase_x = if self.reveal_x.is_some() { 0.0 } else { 1.0 };
    }

    pub fn animate_y(&mut self, duration_ms: u64) {
        self.reveal_y = Reveal::start(Duration::from_millis(duration_ms));
        self.phase_y = if self.reveal_y.is_some() { 0.0 } else { 1.0 };
    }

    pub fn animate_xy(&mut self, duration_x_ms: u64, duration_y_ms: u64) {
        self.animate_x(duration_x_ms);
        self.animate_y(duration_y_ms);
    }

    pub fn is_animating(&self) -> bool {
        self.reveal_x.is_some() || self.reveal_y.is_some()
    }

    /// Advances running reveals. Returns true while a redraw is still needed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        fn advance(reveal: &mut Option<Reveal>, phase: &mut f32, elapsed: Duration) {
            if let Some(r) = reveal {
                r.elapsed += elapsed;
                *phase = r.progress();
                if r.elapsed >= r.duration {
                    *reveal = None;
                }
            }
        }

        advance(&mut self.reveal_x, &mut self.phase_x, elapsed);
        advance(&mut self.reveal_y, &mut self.phase_y, elapsed);
        self.is_animating()
    }
}
