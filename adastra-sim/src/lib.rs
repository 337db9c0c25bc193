//! Ad Astra Mission Core
//!
//! Platform-agnostic state machine for the Ad Astra astronaut-training
//! experience. This crate provides the phase pipeline, the threshold
//! mini-simulations that drive it, and the derived display values, without
//! any UI or platform-specific dependencies. Time is injected: the embedding
//! layer owns one real interval and feeds elapsed milliseconds into
//! [`MissionState::advance`].

pub mod constants;
pub mod cupola;
pub mod display;
pub mod docking;
pub mod interior;
pub mod launch;
pub mod nbl;
pub mod phase;
pub mod state;
pub mod timer;

// Re-export commonly used types
pub use cupola::{CupolaState, ORBITAL_TRACK, OrbitalStop, ViewMode};
pub use display::{
    StatusTone, approach_progress_pct, ascent_altitude_km, buoyancy_status_key,
    checklist_progress_pct, format_mm_ss, status_tone, weight_status_key,
};
pub use docking::{DockingImpulse, DockingState, DockingStep, is_capture_alignment};
pub use interior::{InteriorState, InteriorStep, InteriorTasks, TaskId};
pub use launch::{LaunchState, LaunchStep};
pub use nbl::{
    BuoyancyStatus, MissionScore, NblState, NblStep, SuitAssembly, SuitPart, SuitWeights,
    WeightQuadrant, accuracy_for_elapsed, classify_buoyancy_level, classify_suit_weight,
};
pub use phase::{CompletionFlags, MacroPhase, UserChoice};
pub use state::{MissionState, TransitionError};
pub use timer::{Delay, Ticker};
