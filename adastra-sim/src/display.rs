//! Derived display values: computed from state on demand, never stored.

use crate::constants::{
    APPROACH_HOLD_M, APPROACH_START_M, ASCENT_KM_PER_UNIT, ASCENT_MAX,
};
use crate::nbl::BuoyancyStatus;

/// Severity bucket a status message renders with. The presentation layer maps
/// tones to its own color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Warning,
    Danger,
}

/// Message key for a suit-weight classification.
#[must_use]
pub const fn weight_status_key(status: BuoyancyStatus) -> &'static str {
    match status {
        BuoyancyStatus::Heavy => "nbl.weight.heavy",
        BuoyancyStatus::Light => "nbl.weight.light",
        BuoyancyStatus::Perfect => "nbl.weight.perfect",
        BuoyancyStatus::Neutral => "nbl.weight.adjust",
    }
}

/// Message key for a buoyancy-slider classification.
#[must_use]
pub const fn buoyancy_status_key(status: BuoyancyStatus) -> &'static str {
    match status {
        BuoyancyStatus::Heavy => "nbl.sim.sinking",
        BuoyancyStatus::Light => "nbl.sim.rising",
        BuoyancyStatus::Perfect => "nbl.sim.perfect",
        BuoyancyStatus::Neutral => "nbl.sim.adjusting",
    }
}

#[must_use]
pub const fn status_tone(status: BuoyancyStatus) -> StatusTone {
    match status {
        BuoyancyStatus::Heavy => StatusTone::Danger,
        BuoyancyStatus::Light => StatusTone::Warning,
        BuoyancyStatus::Perfect => StatusTone::Success,
        BuoyancyStatus::Neutral => StatusTone::Info,
    }
}

/// `mm:ss` rendering of a second count.
#[must_use]
pub fn format_mm_ss(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Percentage of the approach covered, for the range bar.
#[must_use]
pub const fn approach_progress_pct(distance_m: u32) -> u32 {
    let span = APPROACH_START_M - APPROACH_HOLD_M;
    let covered = APPROACH_START_M - clamp_distance(distance_m);
    covered * 100 / span
}

const fn clamp_distance(distance_m: u32) -> u32 {
    if distance_m > APPROACH_START_M {
        APPROACH_START_M
    } else if distance_m < APPROACH_HOLD_M {
        APPROACH_HOLD_M
    } else {
        distance_m
    }
}

/// Displayed altitude for an ascent position.
#[must_use]
pub const fn ascent_altitude_km(position: u32) -> u32 {
    let capped = if position > ASCENT_MAX {
        ASCENT_MAX
    } else {
        position
    };
    capped * ASCENT_KM_PER_UNIT
}

/// Checklist completion percentage.
#[must_use]
pub const fn checklist_progress_pct(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    (completed * 100 / total) as u32
}
