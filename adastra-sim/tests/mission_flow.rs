//! End-to-end drives of the mission pipeline against a simulated clock.

use adastra_sim::{
    DockingImpulse, DockingStep, InteriorStep, LaunchStep, MacroPhase, MissionState, NblStep,
    SuitPart, TaskId, TransitionError, UserChoice, WeightQuadrant,
};

/// Drive the NBL activity from the intro to its completion screen the way a
/// user would: suit prep, pre-breathe, pool sim, weight challenge.
fn finish_nbl(mission: &mut MissionState) {
    mission.begin_training();
    for part in SuitPart::ALL {
        mission.toggle_suit_part(part);
    }
    assert_eq!(mission.nbl.step, NblStep::Prebreathe);
    // 120 s protocol plus the 2 s grace hold.
    mission.advance(120_000);
    mission.advance(2_000);
    assert_eq!(mission.nbl.step, NblStep::PoolSim);
    mission.set_buoyancy_level(40);
    mission.set_buoyancy_level(5);
    mission.continue_to_challenge();
    assert_eq!(mission.nbl.step, NblStep::WeightChallenge);
    mission.adjust_weight(WeightQuadrant::Chest, 5);
    mission.adjust_weight(WeightQuadrant::Chest, -5);
    mission.advance(2_000);
    assert_eq!(mission.nbl.step, NblStep::Complete);
    assert!(mission.nbl.task_completed);
}

fn finish_launch(mission: &mut MissionState) {
    mission.start_countdown();
    mission.advance(10_000);
    assert_eq!(mission.launch.step, LaunchStep::Launching);
    for _ in 0..50 {
        mission.advance(100);
    }
    assert_eq!(mission.launch.step, LaunchStep::Orbit);
}

fn finish_docking(mission: &mut MissionState) {
    // 95 approach ticks at 200 ms reach the 50 m hold point.
    for _ in 0..95 {
        mission.advance(200);
    }
    assert_eq!(mission.docking.step, DockingStep::Aligning);
    for _ in 0..9 {
        mission.send_docking_impulse(DockingImpulse::Up);
    }
    assert_eq!(mission.docking.alignment, 90);
    mission.advance(1_000);
    assert_eq!(mission.docking.step, DockingStep::Docked);
}

fn finish_interior(mission: &mut MissionState) {
    mission.advance(4_000);
    assert_eq!(mission.interior.step, InteriorStep::Tasks);
    for task in TaskId::ALL {
        mission.select_task(task);
        mission.complete_selected_task();
    }
    assert_eq!(mission.interior.step, InteriorStep::Complete);
}

#[test]
fn astronaut_pipeline_is_a_total_order() {
    let mut mission = MissionState::default();
    assert_eq!(mission.phase, MacroPhase::Landing);
    assert_eq!(mission.progress, 0);

    mission.choose_astronaut().unwrap();
    assert_eq!(mission.phase, MacroPhase::NblTraining);
    assert_eq!(mission.progress, 20);

    finish_nbl(&mut mission);
    mission.complete_nbl().unwrap();
    assert_eq!(mission.phase, MacroPhase::RocketLaunch);
    assert_eq!(mission.progress, 40);

    finish_launch(&mut mission);
    mission.complete_launch().unwrap();
    assert_eq!(mission.phase, MacroPhase::IssArrival);
    assert_eq!(mission.progress, 70);

    finish_docking(&mut mission);
    mission.complete_docking().unwrap();
    assert_eq!(mission.phase, MacroPhase::IssInterior);
    assert_eq!(mission.progress, 80);

    finish_interior(&mut mission);
    mission.complete_interior().unwrap();
    assert_eq!(mission.phase, MacroPhase::CupolaExperience);
    assert_eq!(mission.progress, 100);

    assert_eq!(mission.choice, Some(UserChoice::Astronaut));
    assert!(mission.completed.nbl);
    assert!(mission.completed.launch);
    assert!(mission.completed.docking);
    assert!(mission.completed.interior);
}

#[test]
fn observer_shortcut_skips_training() {
    let mut mission = MissionState::default();
    mission.choose_observer().unwrap();
    assert_eq!(mission.phase, MacroPhase::CupolaExperience);
    assert_eq!(mission.progress, 100);
    assert_eq!(mission.choice, Some(UserChoice::Observer));
    assert!(!mission.completed.any());
}

#[test]
fn reset_is_idempotent_from_any_state() {
    let mut mission = MissionState::default();
    mission.choose_astronaut().unwrap();
    finish_nbl(&mut mission);
    mission.complete_nbl().unwrap();
    mission.start_countdown();
    mission.advance(3_000);

    mission.reset();
    let first = mission.clone();
    assert_eq!(mission.phase, MacroPhase::Landing);
    assert_eq!(mission.progress, 0);
    assert_eq!(mission.choice, None);
    assert!(!mission.completed.any());

    mission.reset();
    assert_eq!(mission.phase, first.phase);
    assert_eq!(mission.progress, first.progress);
    assert_eq!(mission.choice, first.choice);
    assert_eq!(mission.completed, first.completed);
}

#[test]
fn reset_cancels_live_timers() {
    let mut mission = MissionState::default();
    mission.choose_astronaut().unwrap();
    mission.begin_training();
    for part in SuitPart::ALL {
        mission.toggle_suit_part(part);
    }
    assert_eq!(mission.nbl.step, NblStep::Prebreathe);
    mission.advance(30_000);
    assert_eq!(mission.nbl.prebreathe_seconds, 90);

    mission.reset();
    // Advance the clock well past the original countdown duration; nothing
    // left over may fire.
    mission.advance(300_000);
    assert_eq!(mission.phase, MacroPhase::Landing);
    assert_eq!(mission.progress, 0);
}

#[test]
fn forward_transition_abandons_source_phase_timers() {
    let mut mission = MissionState::default();
    mission.choose_astronaut().unwrap();
    // Leave NBL early via the skip shortcut while no sub-step timer has been
    // armed, then make sure launch-phase time never leaks back into NBL.
    mission.complete_nbl().unwrap();
    let nbl_snapshot = mission.nbl.clone();
    mission.start_countdown();
    mission.advance(60_000);
    assert_eq!(mission.nbl, nbl_snapshot);
}

#[test]
fn out_of_phase_completions_fail_loudly() {
    let mut mission = MissionState::default();
    assert!(matches!(
        mission.complete_nbl(),
        Err(TransitionError::WrongPhase { .. })
    ));
    mission.choose_observer().unwrap();
    assert!(matches!(
        mission.choose_astronaut(),
        Err(TransitionError::WrongPhase { .. })
    ));
    assert!(matches!(
        mission.complete_interior(),
        Err(TransitionError::WrongPhase { .. })
    ));
    assert_eq!(mission.phase, MacroPhase::CupolaExperience);
}

#[test]
fn docking_alignment_never_escapes_bounds() {
    let mut mission = MissionState::default();
    mission.choose_astronaut().unwrap();
    finish_nbl(&mut mission);
    mission.complete_nbl().unwrap();
    finish_launch(&mut mission);
    mission.complete_launch().unwrap();
    for _ in 0..95 {
        mission.advance(200);
    }
    for _ in 0..1_000 {
        mission.send_docking_impulse(DockingImpulse::Up);
        assert!((0..=100).contains(&mission.docking.alignment));
    }
    for _ in 0..1_000 {
        mission.send_docking_impulse(DockingImpulse::Left);
        assert!((0..=100).contains(&mission.docking.alignment));
    }
}

#[test]
fn checklist_emits_completion_exactly_once() {
    let mut mission = MissionState::default();
    mission.choose_astronaut().unwrap();
    finish_nbl(&mut mission);
    mission.complete_nbl().unwrap();
    finish_launch(&mut mission);
    mission.complete_launch().unwrap();
    finish_docking(&mut mission);
    mission.complete_docking().unwrap();

    mission.advance(4_000);
    mission.select_task(TaskId::Repair);
    mission.complete_selected_task();
    mission.select_task(TaskId::Plant);
    mission.complete_selected_task();
    assert_eq!(mission.interior.step, InteriorStep::Tasks);

    mission.select_task(TaskId::Comms);
    mission.complete_selected_task();
    assert_eq!(mission.interior.step, InteriorStep::Complete);

    // Re-driving a completed task changes nothing.
    mission.select_task(TaskId::Comms);
    mission.complete_selected_task();
    assert_eq!(mission.interior.step, InteriorStep::Complete);
    assert_eq!(mission.interior.tasks.completed_count(), 3);
}

#[test]
fn cupola_keeps_rotating_while_terminal() {
    let mut mission = MissionState::default();
    mission.choose_observer().unwrap();
    let start = mission.cupola.current_stop().region;
    mission.advance(8_000);
    assert_ne!(mission.cupola.current_stop().region, start);
    // The terminal phase has no forward transition; only reset leaves it.
    mission.advance(8_000 * 24);
    assert_eq!(mission.phase, MacroPhase::CupolaExperience);
}
