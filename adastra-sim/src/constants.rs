//! Fixed tuning values for the training experience.
//!
//! Everything here is design-fixed: there is no runtime configuration layer,
//! so the constants double as the authoritative record of the experience's
//! numbers.

/// Target total suit weight for neutral buoyancy, in kilograms.
pub const SUIT_WEIGHT_TARGET_KG: u32 = 200;
/// Tolerance band around the target weight, in kilograms (inclusive).
pub const SUIT_WEIGHT_TOLERANCE_KG: u32 = 10;
/// Per-quadrant weight range, in kilograms.
pub const QUADRANT_WEIGHT_MIN_KG: u32 = 0;
pub const QUADRANT_WEIGHT_MAX_KG: u32 = 100;
/// Starting weight for every suit quadrant.
pub const QUADRANT_WEIGHT_START_KG: u32 = 50;
/// Weight nudge applied by the +/- controls, in kilograms.
pub const WEIGHT_STEP_KG: i32 = 5;

/// Buoyancy-level slider range.
pub const BUOYANCY_LEVEL_MIN: i32 = -100;
pub const BUOYANCY_LEVEL_MAX: i32 = 100;
/// |level| strictly below this is perfect neutral buoyancy.
pub const BUOYANCY_PERFECT_BAND: i32 = 10;
/// Level below -20 sinks, above +20 floats.
pub const BUOYANCY_EXTREME_BAND: i32 = 20;
/// |level| at or below this unlocks the continue control in the pool sim.
pub const BUOYANCY_EXIT_BAND: i32 = 15;

/// Pre-breathe protocol length, in seconds.
pub const PREBREATHE_SECONDS: u32 = 120;
/// Nitrogen saturation at the start of the pre-breathe protocol.
pub const NITROGEN_START_PCT: u32 = 100;
/// Grace delay after the pre-breathe countdown expires.
pub const PREBREATHE_GRACE_MS: u32 = 2_000;
/// Settle delay between achieving perfect buoyancy and completing the
/// weight challenge.
pub const CHALLENGE_SETTLE_MS: u32 = 2_000;
/// Mission clock granularity.
pub const MISSION_TICK_MS: u32 = 1_000;
/// Lowest accuracy the mission score can report.
pub const ACCURACY_FLOOR_PCT: u32 = 80;

/// Launch countdown start value, in seconds.
pub const COUNTDOWN_START: u32 = 10;
pub const COUNTDOWN_TICK_MS: u32 = 1_000;
/// Ascent animation: position units per tick.
pub const ASCENT_STEP: u32 = 2;
pub const ASCENT_TICK_MS: u32 = 100;
/// Ascent position at which orbit is reached.
pub const ASCENT_MAX: u32 = 100;
/// Kilometers of altitude represented by one ascent position unit.
pub const ASCENT_KM_PER_UNIT: u32 = 4;

/// Approach starting distance to the station, in meters.
pub const APPROACH_START_M: u32 = 1_000;
/// Distance shed per approach tick, in meters.
pub const APPROACH_STEP_M: u32 = 10;
pub const APPROACH_TICK_MS: u32 = 200;
/// Station-keeping distance where the approach hands over to alignment.
pub const APPROACH_HOLD_M: u32 = 50;

/// Docking alignment range.
pub const ALIGNMENT_MIN: i32 = 0;
pub const ALIGNMENT_MAX: i32 = 100;
/// Alignment at or above this (up to the max) is a capture-ready contact.
pub const ALIGNMENT_DOCK_MIN: i32 = 85;
/// Settle delay between reaching capture alignment and hard dock.
pub const DOCK_SETTLE_MS: u32 = 1_000;

/// Airlock hold before the interior task board unlocks.
pub const ENTRY_HOLD_MS: u32 = 4_000;

/// Orbital track rotation cadence in the cupola.
pub const ORBIT_TRACK_TICK_MS: u32 = 8_000;

/// Mission progress percentage per macro phase.
pub const PROGRESS_LANDING: u8 = 0;
pub const PROGRESS_NBL: u8 = 20;
pub const PROGRESS_LAUNCH: u8 = 40;
pub const PROGRESS_ARRIVAL: u8 = 70;
pub const PROGRESS_INTERIOR: u8 = 80;
pub const PROGRESS_CUPOLA: u8 = 100;
