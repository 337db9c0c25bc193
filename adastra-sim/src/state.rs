//! The mission state container: the single source of truth the presentation
//! layer reads, mutated only through the named operations below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cupola::{CupolaState, ViewMode};
use crate::docking::{DockingImpulse, DockingState};
use crate::interior::{InteriorState, TaskId};
use crate::launch::LaunchState;
use crate::nbl::{NblState, SuitPart, WeightQuadrant};
use crate::phase::{CompletionFlags, MacroPhase, UserChoice};

const LOG_RESET: &str = "log.reset";
const LOG_CHOICE_PREFIX: &str = "log.choice.";
const LOG_PHASE_PREFIX: &str = "log.phase.";
const LOG_NBL_STEP_PREFIX: &str = "log.nbl.step.";
const LOG_LAUNCH_STEP_PREFIX: &str = "log.launch.step.";
const LOG_DOCKING_STEP_PREFIX: &str = "log.docking.step.";
const LOG_INTERIOR_STEP_PREFIX: &str = "log.interior.step.";

/// A transition was invoked from a phase it does not belong to. The state is
/// left untouched; callers decide whether to surface or drop the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("transition requires phase `{expected}`, mission is in `{actual}`")]
    WrongPhase {
        expected: MacroPhase,
        actual: MacroPhase,
    },
}

/// Authoritative mission state. One macro phase is active at a time; each
/// phase owns a sub-state that is rebuilt on entry and never read after the
/// phase is left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionState {
    pub phase: MacroPhase,
    /// Display progress percentage mirroring the phase.
    pub progress: u8,
    pub choice: Option<UserChoice>,
    pub completed: CompletionFlags,
    pub nbl: NblState,
    pub launch: LaunchState,
    pub docking: DockingState,
    pub interior: InteriorState,
    pub cupola: CupolaState,
    /// Append-only journal of event keys, newest last.
    pub logs: Vec<String>,
}

impl Default for MissionState {
    fn default() -> Self {
        Self {
            phase: MacroPhase::Landing,
            progress: MacroPhase::Landing.progress(),
            choice: None,
            completed: CompletionFlags::default(),
            nbl: NblState::default(),
            launch: LaunchState::default(),
            docking: DockingState::default(),
            interior: InteriorState::default(),
            cupola: CupolaState::default(),
            logs: vec![String::from("log.booting")],
        }
    }
}

impl MissionState {
    fn require(&self, expected: MacroPhase) -> Result<(), TransitionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(TransitionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Enter `phase` with a fresh sub-state. Dropping the previous sub-state
    /// tears down every timer the old phase owned.
    fn enter(&mut self, phase: MacroPhase) {
        match phase {
            MacroPhase::Landing => {}
            MacroPhase::NblTraining => self.nbl = NblState::default(),
            MacroPhase::RocketLaunch => self.launch = LaunchState::default(),
            MacroPhase::IssArrival => self.docking = DockingState::default(),
            MacroPhase::IssInterior => self.interior = InteriorState::default(),
            MacroPhase::CupolaExperience => self.cupola = CupolaState::default(),
        }
        self.phase = phase;
        self.progress = phase.progress();
        self.logs
            .push(format!("{}{}", LOG_PHASE_PREFIX, phase.as_str()));
    }

    /// Landing -> NBL training.
    pub fn choose_astronaut(&mut self) -> Result<(), TransitionError> {
        self.require(MacroPhase::Landing)?;
        self.choice = Some(UserChoice::Astronaut);
        self.logs.push(format!(
            "{}{}",
            LOG_CHOICE_PREFIX,
            UserChoice::Astronaut.as_str()
        ));
        self.enter(MacroPhase::NblTraining);
        Ok(())
    }

    /// Landing -> cupola, skipping the training pipeline.
    pub fn choose_observer(&mut self) -> Result<(), TransitionError> {
        self.require(MacroPhase::Landing)?;
        self.choice = Some(UserChoice::Observer);
        self.logs.push(format!(
            "{}{}",
            LOG_CHOICE_PREFIX,
            UserChoice::Observer.as_str()
        ));
        self.enter(MacroPhase::CupolaExperience);
        Ok(())
    }

    /// NBL training -> rocket launch.
    pub fn complete_nbl(&mut self) -> Result<(), TransitionError> {
        self.require(MacroPhase::NblTraining)?;
        self.completed.nbl = true;
        self.enter(MacroPhase::RocketLaunch);
        Ok(())
    }

    /// Rocket launch -> ISS arrival.
    pub fn complete_launch(&mut self) -> Result<(), TransitionError> {
        self.require(MacroPhase::RocketLaunch)?;
        self.completed.launch = true;
        self.enter(MacroPhase::IssArrival);
        Ok(())
    }

    /// ISS arrival -> station interior.
    pub fn complete_docking(&mut self) -> Result<(), TransitionError> {
        self.require(MacroPhase::IssArrival)?;
        self.completed.docking = true;
        self.enter(MacroPhase::IssInterior);
        Ok(())
    }

    /// Station interior -> cupola.
    pub fn complete_interior(&mut self) -> Result<(), TransitionError> {
        self.require(MacroPhase::IssInterior)?;
        self.completed.interior = true;
        self.enter(MacroPhase::CupolaExperience);
        Ok(())
    }

    /// Full reset from any state back to the landing page. Clears the choice,
    /// the completion flags, and every live timer.
    pub fn reset(&mut self) {
        *self = Self::default();
        self.logs.push(String::from(LOG_RESET));
    }

    /// Feed elapsed wall-clock time into the active phase's timers. The one
    /// real-time interval the presentation layer owns calls this; tests call
    /// it directly to advance a simulated clock.
    pub fn advance(&mut self, elapsed_ms: u32) {
        match self.phase {
            MacroPhase::Landing => {}
            MacroPhase::NblTraining => {
                let before = self.nbl.step;
                self.nbl.tick(elapsed_ms);
                if self.nbl.step != before {
                    self.logs.push(format!(
                        "{}{}",
                        LOG_NBL_STEP_PREFIX,
                        self.nbl.step.as_str()
                    ));
                }
            }
            MacroPhase::RocketLaunch => {
                let before = self.launch.step;
                self.launch.tick(elapsed_ms);
                if self.launch.step != before {
                    self.logs.push(format!(
                        "{}{}",
                        LOG_LAUNCH_STEP_PREFIX,
                        self.launch.step.as_str()
                    ));
                }
            }
            MacroPhase::IssArrival => {
                let before = self.docking.step;
                self.docking.tick(elapsed_ms);
                if self.docking.step != before {
                    self.logs.push(format!(
                        "{}{}",
                        LOG_DOCKING_STEP_PREFIX,
                        self.docking.step.as_str()
                    ));
                }
            }
            MacroPhase::IssInterior => {
                let before = self.interior.step;
                self.interior.tick(elapsed_ms);
                if self.interior.step != before {
                    self.logs.push(format!(
                        "{}{}",
                        LOG_INTERIOR_STEP_PREFIX,
                        self.interior.step.as_str()
                    ));
                }
            }
            MacroPhase::CupolaExperience => self.cupola.tick(elapsed_ms),
        }
    }

    // Sub-phase operations. Each applies only while its owning phase is
    // active, mirroring the UI affordances; outside it they are no-ops.

    pub fn begin_training(&mut self) {
        if self.phase == MacroPhase::NblTraining {
            self.nbl.begin_training();
        }
    }

    pub fn skip_to_challenge(&mut self) {
        if self.phase == MacroPhase::NblTraining {
            self.nbl.skip_to_challenge();
        }
    }

    pub fn toggle_suit_part(&mut self, part: SuitPart) {
        if self.phase == MacroPhase::NblTraining {
            self.nbl.toggle_suit_part(part);
        }
    }

    pub fn set_buoyancy_level(&mut self, level: i32) {
        if self.phase == MacroPhase::NblTraining {
            self.nbl.set_buoyancy_level(level);
        }
    }

    pub fn continue_to_challenge(&mut self) {
        if self.phase == MacroPhase::NblTraining {
            self.nbl.continue_to_challenge();
        }
    }

    pub fn adjust_weight(&mut self, quadrant: WeightQuadrant, delta_kg: i32) {
        if self.phase == MacroPhase::NblTraining {
            self.nbl.adjust_weight(quadrant, delta_kg);
        }
    }

    pub fn start_countdown(&mut self) {
        if self.phase == MacroPhase::RocketLaunch {
            self.launch.start_countdown();
        }
    }

    pub fn send_docking_impulse(&mut self, impulse: DockingImpulse) {
        if self.phase == MacroPhase::IssArrival {
            self.docking.apply_impulse(impulse);
        }
    }

    pub fn select_task(&mut self, task: TaskId) {
        if self.phase == MacroPhase::IssInterior {
            self.interior.select_task(task);
        }
    }

    pub fn clear_task_selection(&mut self) {
        if self.phase == MacroPhase::IssInterior {
            self.interior.clear_selection();
        }
    }

    pub fn complete_selected_task(&mut self) {
        if self.phase == MacroPhase::IssInterior {
            self.interior.complete_selected();
        }
    }

    pub fn set_view_mode(&mut self, view: ViewMode) {
        if self.phase == MacroPhase::CupolaExperience {
            self.cupola.set_view(view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::LaunchStep;

    #[test]
    fn wrong_phase_transition_is_rejected_untouched() {
        let mut mission = MissionState::default();
        let before = mission.clone();
        let err = mission.complete_docking().unwrap_err();
        assert_eq!(
            err,
            TransitionError::WrongPhase {
                expected: MacroPhase::IssArrival,
                actual: MacroPhase::Landing,
            }
        );
        assert_eq!(mission, before);
    }

    #[test]
    fn completion_flags_record_the_run() {
        let mut mission = MissionState::default();
        mission.choose_astronaut().unwrap();
        mission.complete_nbl().unwrap();
        assert!(mission.completed.nbl);
        assert!(!mission.completed.launch);
        mission.complete_launch().unwrap();
        mission.complete_docking().unwrap();
        mission.complete_interior().unwrap();
        assert!(mission.completed.launch);
        assert!(mission.completed.docking);
        assert!(mission.completed.interior);
    }

    #[test]
    fn entering_a_phase_rebuilds_its_sub_state() {
        let mut mission = MissionState::default();
        mission.choose_astronaut().unwrap();
        mission.skip_to_challenge();
        mission.adjust_weight(WeightQuadrant::Chest, 25);
        assert_eq!(mission.nbl.attempts, 1);
        mission.complete_nbl().unwrap();
        mission.start_countdown();
        assert_eq!(mission.launch.step, LaunchStep::Countdown);
        // Abandon the run; a new one starts with pristine sub-states.
        mission.reset();
        mission.choose_astronaut().unwrap();
        assert_eq!(mission.nbl.attempts, 0);
        assert_eq!(mission.launch.step, LaunchStep::Ready);
    }

    #[test]
    fn sub_operations_outside_owning_phase_are_inert() {
        let mut mission = MissionState::default();
        mission.adjust_weight(WeightQuadrant::Left, 50);
        mission.send_docking_impulse(DockingImpulse::Up);
        mission.select_task(TaskId::Repair);
        mission.start_countdown();
        assert_eq!(mission.nbl.weights.left, 50);
        assert_eq!(mission.docking.alignment, 0);
        assert_eq!(mission.interior.selected, None);
        assert_eq!(mission.launch.step, LaunchStep::Ready);
    }

    #[test]
    fn journal_records_phase_entries() {
        let mut mission = MissionState::default();
        mission.choose_astronaut().unwrap();
        assert!(mission.logs.iter().any(|entry| entry == "log.choice.astronaut"));
        assert!(
            mission
                .logs
                .iter()
                .any(|entry| entry == "log.phase.nbl_training")
        );
    }

    #[test]
    fn snapshot_round_trips_through_serde() {
        let mut mission = MissionState::default();
        mission.choose_astronaut().unwrap();
        mission.skip_to_challenge();
        mission.adjust_weight(WeightQuadrant::Back, -5);
        let json = serde_json::to_string(&mission).unwrap();
        let restored: MissionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, mission);
    }
}
