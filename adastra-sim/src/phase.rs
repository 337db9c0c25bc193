//! Macro phases of the training pipeline and the per-run completion record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    PROGRESS_ARRIVAL, PROGRESS_CUPOLA, PROGRESS_INTERIOR, PROGRESS_LANDING, PROGRESS_LAUNCH,
    PROGRESS_NBL,
};

/// Top-level experience stage. Transitions only move forward along the
/// pipeline, plus a full reset back to [`MacroPhase::Landing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MacroPhase {
    #[default]
    Landing,
    NblTraining,
    RocketLaunch,
    IssArrival,
    IssInterior,
    CupolaExperience,
}

impl MacroPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::NblTraining => "nbl_training",
            Self::RocketLaunch => "rocket_launch",
            Self::IssArrival => "iss_arrival",
            Self::IssInterior => "iss_interior",
            Self::CupolaExperience => "cupola_experience",
        }
    }

    /// Mission progress mirrored to this phase.
    #[must_use]
    pub const fn progress(self) -> u8 {
        match self {
            Self::Landing => PROGRESS_LANDING,
            Self::NblTraining => PROGRESS_NBL,
            Self::RocketLaunch => PROGRESS_LAUNCH,
            Self::IssArrival => PROGRESS_ARRIVAL,
            Self::IssInterior => PROGRESS_INTERIOR,
            Self::CupolaExperience => PROGRESS_CUPOLA,
        }
    }

    /// Position along the astronaut pipeline, used to assert forward motion.
    #[must_use]
    pub const fn pipeline_index(self) -> u8 {
        match self {
            Self::Landing => 0,
            Self::NblTraining => 1,
            Self::RocketLaunch => 2,
            Self::IssArrival => 3,
            Self::IssInterior => 4,
            Self::CupolaExperience => 5,
        }
    }
}

impl fmt::Display for MacroPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MacroPhase {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landing" => Ok(Self::Landing),
            "nbl_training" => Ok(Self::NblTraining),
            "rocket_launch" => Ok(Self::RocketLaunch),
            "iss_arrival" => Ok(Self::IssArrival),
            "iss_interior" => Ok(Self::IssInterior),
            "cupola_experience" => Ok(Self::CupolaExperience),
            _ => Err(()),
        }
    }
}

/// The branch picked on the landing page. `Astronaut` runs the full training
/// pipeline; `Observer` jumps straight to the cupola.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserChoice {
    Astronaut,
    Observer,
}

impl UserChoice {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Astronaut => "astronaut",
            Self::Observer => "observer",
        }
    }
}

impl fmt::Display for UserChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-way booleans recording which training objectives were achieved in the
/// current run. Informational only; transitions are driven by the sub-phase
/// completion signals, not by these flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompletionFlags {
    pub nbl: bool,
    pub launch: bool,
    pub docking: bool,
    pub interior: bool,
}

impl CompletionFlags {
    #[must_use]
    pub const fn any(self) -> bool {
        self.nbl || self.launch || self.docking || self.interior
    }
}
