//! Neutral-buoyancy pool training: suit assembly, pre-breathe protocol,
//! buoyancy classification, and the weight-balancing challenge.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    ACCURACY_FLOOR_PCT, BUOYANCY_EXIT_BAND, BUOYANCY_EXTREME_BAND, BUOYANCY_LEVEL_MAX,
    BUOYANCY_LEVEL_MIN, BUOYANCY_PERFECT_BAND, CHALLENGE_SETTLE_MS, MISSION_TICK_MS,
    NITROGEN_START_PCT, PREBREATHE_GRACE_MS, PREBREATHE_SECONDS, QUADRANT_WEIGHT_MAX_KG,
    QUADRANT_WEIGHT_MIN_KG, QUADRANT_WEIGHT_START_KG, SUIT_WEIGHT_TARGET_KG,
    SUIT_WEIGHT_TOLERANCE_KG,
};
use crate::timer::{Delay, Ticker};

/// Discrete buoyancy classification shared by the suit-weight challenge and
/// the pool-sim slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuoyancyStatus {
    Heavy,
    Light,
    Perfect,
    #[default]
    Neutral,
}

impl BuoyancyStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heavy => "heavy",
            Self::Light => "light",
            Self::Perfect => "perfect",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for BuoyancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a total suit weight against the neutral-buoyancy target.
///
/// The tolerance band is inclusive on both ends: 190..=210 kg is perfect.
#[must_use]
pub const fn classify_suit_weight(total_kg: u32) -> BuoyancyStatus {
    if total_kg < SUIT_WEIGHT_TARGET_KG - SUIT_WEIGHT_TOLERANCE_KG {
        BuoyancyStatus::Light
    } else if total_kg > SUIT_WEIGHT_TARGET_KG + SUIT_WEIGHT_TOLERANCE_KG {
        BuoyancyStatus::Heavy
    } else {
        BuoyancyStatus::Perfect
    }
}

/// Classify the pool-sim buoyancy slider.
///
/// Extremes win first, then the |level| < 10 perfect band; the dead zones
/// (-20, -10] and [10, 20) deliberately map to `Neutral`, not to
/// `Heavy`/`Light`.
#[must_use]
pub const fn classify_buoyancy_level(level: i32) -> BuoyancyStatus {
    if level < -BUOYANCY_EXTREME_BAND {
        BuoyancyStatus::Heavy
    } else if level > BUOYANCY_EXTREME_BAND {
        BuoyancyStatus::Light
    } else if level.abs() < BUOYANCY_PERFECT_BAND {
        BuoyancyStatus::Perfect
    } else {
        BuoyancyStatus::Neutral
    }
}

/// Accuracy component of the mission score, floored at 80.
#[must_use]
pub const fn accuracy_for_elapsed(elapsed_seconds: u32) -> u32 {
    let penalty = elapsed_seconds / 10;
    if penalty >= 100 - ACCURACY_FLOOR_PCT {
        ACCURACY_FLOOR_PCT
    } else {
        100 - penalty
    }
}

/// One of the four lead-weight pockets on the training suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightQuadrant {
    Left,
    Right,
    Chest,
    Back,
}

impl WeightQuadrant {
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Chest, Self::Back];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Chest => "chest",
            Self::Back => "back",
        }
    }
}

/// Per-quadrant suit weights in kilograms, each clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitWeights {
    pub left: u32,
    pub right: u32,
    pub chest: u32,
    pub back: u32,
}

impl Default for SuitWeights {
    fn default() -> Self {
        Self {
            left: QUADRANT_WEIGHT_START_KG,
            right: QUADRANT_WEIGHT_START_KG,
            chest: QUADRANT_WEIGHT_START_KG,
            back: QUADRANT_WEIGHT_START_KG,
        }
    }
}

impl SuitWeights {
    #[must_use]
    pub const fn get(&self, quadrant: WeightQuadrant) -> u32 {
        match quadrant {
            WeightQuadrant::Left => self.left,
            WeightQuadrant::Right => self.right,
            WeightQuadrant::Chest => self.chest,
            WeightQuadrant::Back => self.back,
        }
    }

    pub fn adjust(&mut self, quadrant: WeightQuadrant, delta_kg: i32) {
        let slot = match quadrant {
            WeightQuadrant::Left => &mut self.left,
            WeightQuadrant::Right => &mut self.right,
            WeightQuadrant::Chest => &mut self.chest,
            WeightQuadrant::Back => &mut self.back,
        };
        let next = i64::from(*slot) + i64::from(delta_kg);
        *slot = next.clamp(
            i64::from(QUADRANT_WEIGHT_MIN_KG),
            i64::from(QUADRANT_WEIGHT_MAX_KG),
        ) as u32;
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.left + self.right + self.chest + self.back
    }
}

/// A piece of the training suit secured during suit prep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitPart {
    Helmet,
    Torso,
    Gloves,
    Boots,
}

impl SuitPart {
    pub const ALL: [Self; 4] = [Self::Helmet, Self::Torso, Self::Gloves, Self::Boots];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Helmet => "helmet",
            Self::Torso => "torso",
            Self::Gloves => "gloves",
            Self::Boots => "boots",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SuitAssembly {
    pub helmet: bool,
    pub torso: bool,
    pub gloves: bool,
    pub boots: bool,
}

impl SuitAssembly {
    pub fn toggle(&mut self, part: SuitPart) {
        let slot = match part {
            SuitPart::Helmet => &mut self.helmet,
            SuitPart::Torso => &mut self.torso,
            SuitPart::Gloves => &mut self.gloves,
            SuitPart::Boots => &mut self.boots,
        };
        *slot = !*slot;
    }

    #[must_use]
    pub const fn secured(&self, part: SuitPart) -> bool {
        match part {
            SuitPart::Helmet => self.helmet,
            SuitPart::Torso => self.torso,
            SuitPart::Gloves => self.gloves,
            SuitPart::Boots => self.boots,
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.helmet && self.torso && self.gloves && self.boots
    }
}

/// Score frozen when the weight challenge completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionScore {
    pub time_seconds: u32,
    pub accuracy_pct: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NblStep {
    #[default]
    Intro,
    SuitPrep,
    Prebreathe,
    PoolSim,
    WeightChallenge,
    Complete,
}

impl NblStep {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::SuitPrep => "suit_prep",
            Self::Prebreathe => "prebreathe",
            Self::PoolSim => "pool_sim",
            Self::WeightChallenge => "weight_challenge",
            Self::Complete => "complete",
        }
    }
}

/// Local state of the NBL macro phase. Rebuilt from `Default` when the phase
/// is entered and dropped when it is left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NblState {
    pub step: NblStep,
    pub suit: SuitAssembly,
    pub prebreathe_seconds: u32,
    pub nitrogen_pct: u32,
    pub buoyancy_level: i32,
    pub weights: SuitWeights,
    pub attempts: u32,
    pub status: BuoyancyStatus,
    pub task_completed: bool,
    pub elapsed_seconds: u32,
    pub score: Option<MissionScore>,
    prebreathe_tick: Ticker,
    prebreathe_grace: Option<Delay>,
    mission_tick: Ticker,
    settle: Option<Delay>,
}

impl Default for NblState {
    fn default() -> Self {
        Self {
            step: NblStep::Intro,
            suit: SuitAssembly::default(),
            prebreathe_seconds: PREBREATHE_SECONDS,
            nitrogen_pct: NITROGEN_START_PCT,
            buoyancy_level: 0,
            weights: SuitWeights::default(),
            attempts: 0,
            status: BuoyancyStatus::Neutral,
            task_completed: false,
            elapsed_seconds: 0,
            score: None,
            prebreathe_tick: Ticker::new(MISSION_TICK_MS),
            prebreathe_grace: None,
            mission_tick: Ticker::new(MISSION_TICK_MS),
            settle: None,
        }
    }
}

impl NblState {
    /// Intro -> suit prep.
    pub fn begin_training(&mut self) {
        if self.step == NblStep::Intro {
            self.step = NblStep::SuitPrep;
        }
    }

    /// Shortcut from the intro straight to the weight challenge.
    pub fn skip_to_challenge(&mut self) {
        if matches!(self.step, NblStep::Intro | NblStep::PoolSim) {
            self.step = NblStep::WeightChallenge;
        }
    }

    /// Toggle one suit part during prep; securing the last part starts the
    /// pre-breathe protocol.
    pub fn toggle_suit_part(&mut self, part: SuitPart) {
        if self.step != NblStep::SuitPrep {
            return;
        }
        self.suit.toggle(part);
        if self.suit.is_complete() {
            self.step = NblStep::Prebreathe;
            self.prebreathe_tick.rewind();
        }
    }

    /// Move the pool-sim buoyancy slider; clamped to [-100, 100].
    pub fn set_buoyancy_level(&mut self, level: i32) {
        if self.step != NblStep::PoolSim {
            return;
        }
        self.buoyancy_level = level.clamp(BUOYANCY_LEVEL_MIN, BUOYANCY_LEVEL_MAX);
        self.status = classify_buoyancy_level(self.buoyancy_level);
    }

    /// Whether the pool-sim continue control is unlocked.
    #[must_use]
    pub const fn sim_control_ok(&self) -> bool {
        self.buoyancy_level.abs() <= BUOYANCY_EXIT_BAND
    }

    /// Pool sim -> weight challenge, gated on adequate buoyancy control.
    pub fn continue_to_challenge(&mut self) {
        if self.step == NblStep::PoolSim && self.sim_control_ok() {
            self.step = NblStep::WeightChallenge;
            self.status = classify_suit_weight(self.weights.total());
        }
    }

    /// Nudge one quadrant weight and reclassify. Reaching the perfect band
    /// arms a settle delay; drifting back out disarms it.
    pub fn adjust_weight(&mut self, quadrant: WeightQuadrant, delta_kg: i32) {
        if self.step != NblStep::WeightChallenge || self.task_completed {
            return;
        }
        self.weights.adjust(quadrant, delta_kg);
        self.attempts += 1;
        self.status = classify_suit_weight(self.weights.total());
        if self.status == BuoyancyStatus::Perfect {
            if self.settle.is_none() {
                self.settle = Some(Delay::new(CHALLENGE_SETTLE_MS));
            }
        } else {
            self.settle = None;
        }
    }

    pub(crate) fn tick(&mut self, elapsed_ms: u32) {
        match self.step {
            NblStep::Prebreathe => self.tick_prebreathe(elapsed_ms),
            NblStep::PoolSim | NblStep::WeightChallenge => {
                if !self.task_completed {
                    self.elapsed_seconds += self.mission_tick.advance(elapsed_ms);
                }
                if let Some(settle) = self.settle.as_mut()
                    && settle.advance(elapsed_ms)
                {
                    self.settle = None;
                    self.task_completed = true;
                    self.score = Some(MissionScore {
                        time_seconds: self.elapsed_seconds,
                        accuracy_pct: accuracy_for_elapsed(self.elapsed_seconds),
                    });
                    self.step = NblStep::Complete;
                }
            }
            NblStep::Intro | NblStep::SuitPrep | NblStep::Complete => {}
        }
    }

    fn tick_prebreathe(&mut self, elapsed_ms: u32) {
        if let Some(grace) = self.prebreathe_grace.as_mut() {
            if grace.advance(elapsed_ms) {
                self.prebreathe_grace = None;
                self.step = NblStep::PoolSim;
            }
            return;
        }
        let fires = self.prebreathe_tick.advance(elapsed_ms);
        for _ in 0..fires {
            if self.prebreathe_seconds == 0 {
                break;
            }
            self.prebreathe_seconds -= 1;
            // Nitrogen mirrors the countdown: 100 at 120 s, 0 at expiry.
            self.nitrogen_pct = (self.prebreathe_seconds * NITROGEN_START_PCT
                + PREBREATHE_SECONDS / 2)
                / PREBREATHE_SECONDS;
            if self.prebreathe_seconds == 0 {
                self.prebreathe_grace = Some(Delay::new(PREBREATHE_GRACE_MS));
                break;
            }
        }
    }
}
