//! Core domain: fixed-step countdown timer shared by the character state machines.

use std::time::Duration;

use bevy::prelude::*;

/// Countdown over a fixed duration, advanced once per simulation step.
///
/// Wraps Bevy's [`Timer`] but lets every tick choose whether the timer
/// repeats. A non-repeating tick clamps elapsed time at the duration, so
/// `is_done` stays true until the next `reset`.
#[derive(Debug, Clone)]
pub struct StepTimer {
    timer: Timer,
}

impl StepTimer {
    /// A fresh timer with zero elapsed time.
    pub fn from_seconds(duration: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration.max(0.0), TimerMode::Once),
        }
    }

    /// A timer that starts out done, for cooldowns that must not block the
    /// first use.
    pub fn finished(duration: f32) -> Self {
        let mut timer = Self::from_seconds(duration);
        timer.finish();
        timer
    }

    pub fn reset(&mut self) {
        self.timer.reset();
    }

    pub fn tick(&mut self, delta_seconds: f32, repeating: bool) {
        let mode = if repeating {
            TimerMode::Repeating
        } else {
            TimerMode::Once
        };
        if self.timer.mode() != mode {
            self.timer.set_mode(mode);
        }
        self.timer
            .tick(Duration::from_secs_f32(delta_seconds.max(0.0)));
    }

    /// Jump straight to the end of the countdown.
    pub fn finish(&mut self) {
        let duration = self.timer.duration();
        self.timer.set_elapsed(duration);
    }

    pub fn is_done(&self) -> bool {
        self.timer.elapsed() >= self.timer.duration()
    }

    pub fn duration_secs(&self) -> f32 {
        self.timer.duration().as_secs_f32()
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.timer.elapsed_secs()
    }

    pub fn remaining_secs(&self) -> f32 {
        (self.duration_secs() - self.elapsed_secs()).max(0.0)
    }
}
