//! Station approach and docking alignment.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ALIGNMENT_DOCK_MIN, ALIGNMENT_MAX, ALIGNMENT_MIN, APPROACH_HOLD_M, APPROACH_START_M,
    APPROACH_STEP_M, APPROACH_TICK_MS, DOCK_SETTLE_MS,
};
use crate::timer::{Delay, Ticker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DockingStep {
    #[default]
    Approaching,
    Aligning,
    Docked,
}

impl DockingStep {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approaching => "approaching",
            Self::Aligning => "aligning",
            Self::Docked => "docked",
        }
    }
}

/// A discrete RCS thruster pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockingImpulse {
    Up,
    Down,
    Left,
    Right,
}

impl DockingImpulse {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Alignment change applied by this pulse.
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Up => 10,
            Self::Down => -10,
            Self::Left => -5,
            Self::Right => 5,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Whether an alignment value is within the capture band.
#[must_use]
pub const fn is_capture_alignment(alignment: i32) -> bool {
    alignment >= ALIGNMENT_DOCK_MIN && alignment <= ALIGNMENT_MAX
}

/// Local state of the ISS-arrival macro phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockingState {
    pub step: DockingStep,
    /// Range to the docking port in meters.
    pub distance_m: u32,
    /// Port alignment percentage, clamped to [0, 100].
    pub alignment: i32,
    approach_tick: Ticker,
    settle: Option<Delay>,
}

impl Default for DockingState {
    fn default() -> Self {
        Self {
            step: DockingStep::Approaching,
            distance_m: APPROACH_START_M,
            alignment: 0,
            approach_tick: Ticker::new(APPROACH_TICK_MS),
            settle: None,
        }
    }
}

impl DockingState {
    /// Apply one RCS pulse during alignment. Entering the capture band arms
    /// the settle delay; drifting back out disarms it.
    pub fn apply_impulse(&mut self, impulse: DockingImpulse) {
        if self.step != DockingStep::Aligning {
            return;
        }
        self.alignment = (self.alignment + impulse.delta()).clamp(ALIGNMENT_MIN, ALIGNMENT_MAX);
        if is_capture_alignment(self.alignment) {
            if self.settle.is_none() {
                self.settle = Some(Delay::new(DOCK_SETTLE_MS));
            }
        } else {
            self.settle = None;
        }
    }

    pub(crate) fn tick(&mut self, elapsed_ms: u32) {
        match self.step {
            DockingStep::Approaching => {
                let fires = self.approach_tick.advance(elapsed_ms);
                for _ in 0..fires {
                    let next = self.distance_m.saturating_sub(APPROACH_STEP_M);
                    if next <= APPROACH_HOLD_M {
                        self.distance_m = APPROACH_HOLD_M;
                        self.step = DockingStep::Aligning;
                        break;
                    }
                    self.distance_m = next;
                }
            }
            DockingStep::Aligning => {
                if let Some(settle) = self.settle.as_mut()
                    && settle.advance(elapsed_ms)
                {
                    self.settle = None;
                    self.step = DockingStep::Docked;
                }
            }
            DockingStep::Docked => {}
        }
    }
}
