//! Launch sequencing: countdown, powered ascent, orbit insertion.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ASCENT_MAX, ASCENT_STEP, ASCENT_TICK_MS, COUNTDOWN_START, COUNTDOWN_TICK_MS,
};
use crate::timer::Ticker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStep {
    #[default]
    Ready,
    Countdown,
    Launching,
    Orbit,
}

impl LaunchStep {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Countdown => "countdown",
            Self::Launching => "launching",
            Self::Orbit => "orbit",
        }
    }
}

/// Local state of the rocket-launch macro phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchState {
    pub step: LaunchStep,
    /// Seconds remaining until ignition while in `Countdown`.
    pub countdown: u32,
    /// Ascent position in 0..=100; orbit at 100.
    pub position: u32,
    countdown_tick: Ticker,
    ascent_tick: Ticker,
}

impl Default for LaunchState {
    fn default() -> Self {
        Self {
            step: LaunchStep::Ready,
            countdown: COUNTDOWN_START,
            position: 0,
            countdown_tick: Ticker::new(COUNTDOWN_TICK_MS),
            ascent_tick: Ticker::new(ASCENT_TICK_MS),
        }
    }
}

impl LaunchState {
    /// Arm the launch sequence. Only valid on the pad.
    pub fn start_countdown(&mut self) {
        if self.step == LaunchStep::Ready {
            self.step = LaunchStep::Countdown;
            self.countdown = COUNTDOWN_START;
            self.countdown_tick.rewind();
        }
    }

    pub(crate) fn tick(&mut self, elapsed_ms: u32) {
        match self.step {
            LaunchStep::Countdown => {
                let fires = self.countdown_tick.advance(elapsed_ms);
                for _ in 0..fires {
                    if self.countdown == 0 {
                        break;
                    }
                    self.countdown -= 1;
                    if self.countdown == 0 {
                        // Liftoff is synchronous with the final countdown
                        // tick; the ascent clock starts fresh.
                        self.step = LaunchStep::Launching;
                        self.ascent_tick.rewind();
                        break;
                    }
                }
            }
            LaunchStep::Launching => {
                let fires = self.ascent_tick.advance(elapsed_ms);
                for _ in 0..fires {
                    self.position = (self.position + ASCENT_STEP).min(ASCENT_MAX);
                    if self.position >= ASCENT_MAX {
                        self.step = LaunchStep::Orbit;
                        break;
                    }
                }
            }
            LaunchStep::Ready | LaunchStep::Orbit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_reaches_liftoff_synchronously() {
        let mut launch = LaunchState::default();
        launch.start_countdown();
        assert_eq!(launch.step, LaunchStep::Countdown);
        launch.tick(9_000);
        assert_eq!(launch.countdown, 1);
        assert_eq!(launch.step, LaunchStep::Countdown);
        launch.tick(1_000);
        assert_eq!(launch.countdown, 0);
        assert_eq!(launch.step, LaunchStep::Launching);
    }

    #[test]
    fn ascent_takes_five_seconds_to_orbit() {
        let mut launch = LaunchState::default();
        launch.start_countdown();
        launch.tick(10_000);
        assert_eq!(launch.step, LaunchStep::Launching);
        launch.tick(4_900);
        assert_eq!(launch.position, 98);
        assert_eq!(launch.step, LaunchStep::Launching);
        launch.tick(100);
        assert_eq!(launch.position, 100);
        assert_eq!(launch.step, LaunchStep::Orbit);
        // Further ticks are inert.
        launch.tick(60_000);
        assert_eq!(launch.position, 100);
    }

    #[test]
    fn start_countdown_is_ignored_after_ignition() {
        let mut launch = LaunchState::default();
        launch.start_countdown();
        launch.tick(3_000);
        launch.start_countdown();
        assert_eq!(launch.countdown, 7);
    }
}
