//! Application shell: the mission store, the real-time clock, and the
//! phase-to-page dispatch.

use std::rc::Rc;

use adastra_sim::{
    DockingImpulse, MacroPhase, MissionState, SuitPart, TaskId, ViewMode, WeightQuadrant,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::components::hud::Hud;
use crate::pages::{
    cupola::CupolaPage, docking::DockingPage, interior::InteriorPage, landing::LandingPage,
    launch::LaunchPage, nbl::NblPage,
};

/// Cadence of the single real interval driving the core clock. Every core
/// timer period is a multiple of this.
pub const TICK_MS: u32 = 100;

/// Inbound events from the presentation layer, one variant per mission
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionAction {
    ChooseAstronaut,
    ChooseObserver,
    BeginTraining,
    SkipToChallenge,
    ToggleSuitPart(SuitPart),
    SetBuoyancyLevel(i32),
    ContinueToChallenge,
    AdjustWeight(WeightQuadrant, i32),
    CompleteNbl,
    StartCountdown,
    CompleteLaunch,
    SendDockingImpulse(DockingImpulse),
    CompleteDocking,
    SelectTask(TaskId),
    ClearTaskSelection,
    CompleteSelectedTask,
    CompleteInterior,
    SetViewMode(ViewMode),
    Advance(u32),
    Reset,
}

/// Reducer wrapper around the core state container. Timer callbacks dispatch
/// through this, so they always fold over the current state rather than a
/// snapshot captured when the interval was registered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MissionStore {
    pub mission: MissionState,
}

impl Reducible for MissionStore {
    type Action = MissionAction;

    fn reduce(self: Rc<Self>, action: MissionAction) -> Rc<Self> {
        let mut next = (*self).clone();
        let outcome = match action {
            MissionAction::ChooseAstronaut => next.mission.choose_astronaut(),
            MissionAction::ChooseObserver => next.mission.choose_observer(),
            MissionAction::CompleteNbl => next.mission.complete_nbl(),
            MissionAction::CompleteLaunch => next.mission.complete_launch(),
            MissionAction::CompleteDocking => next.mission.complete_docking(),
            MissionAction::CompleteInterior => next.mission.complete_interior(),
            MissionAction::BeginTraining => {
                next.mission.begin_training();
                Ok(())
            }
            MissionAction::SkipToChallenge => {
                next.mission.skip_to_challenge();
                Ok(())
            }
            MissionAction::ToggleSuitPart(part) => {
                next.mission.toggle_suit_part(part);
                Ok(())
            }
            MissionAction::SetBuoyancyLevel(level) => {
                next.mission.set_buoyancy_level(level);
                Ok(())
            }
            MissionAction::ContinueToChallenge => {
                next.mission.continue_to_challenge();
                Ok(())
            }
            MissionAction::AdjustWeight(quadrant, delta) => {
                next.mission.adjust_weight(quadrant, delta);
                Ok(())
            }
            MissionAction::StartCountdown => {
                next.mission.start_countdown();
                Ok(())
            }
            MissionAction::SendDockingImpulse(impulse) => {
                next.mission.send_docking_impulse(impulse);
                Ok(())
            }
            MissionAction::SelectTask(task) => {
                next.mission.select_task(task);
                Ok(())
            }
            MissionAction::ClearTaskSelection => {
                next.mission.clear_task_selection();
                Ok(())
            }
            MissionAction::CompleteSelectedTask => {
                next.mission.complete_selected_task();
                Ok(())
            }
            MissionAction::SetViewMode(view) => {
                next.mission.set_view_mode(view);
                Ok(())
            }
            MissionAction::Advance(ms) => {
                next.mission.advance(ms);
                Ok(())
            }
            MissionAction::Reset => {
                next.mission.reset();
                Ok(())
            }
        };
        match outcome {
            // Idle ticks change nothing; keep the old store so the view does
            // not re-render every clock period.
            Ok(()) if next == *self => self,
            Ok(()) => Rc::new(next),
            Err(err) => {
                log::warn!("dropped {action:?}: {err}");
                self
            }
        }
    }
}

/// Register the one real interval that feeds the core clock. The handle is
/// cleared when the app unmounts; everything else is simulated time inside
/// the core.
#[hook]
fn use_mission_clock(store: &UseReducerHandle<MissionStore>) {
    let dispatcher = store.dispatcher();
    use_effect_with((), move |_| {
        let mut interval_id: Option<i32> = None;
        let mut stored_closure: Option<Closure<dyn FnMut()>> = None;
        if let Some(window) = web_sys::window()
            && let Ok(period) = i32::try_from(TICK_MS)
        {
            let closure = Closure::wrap(Box::new(move || {
                dispatcher.dispatch(MissionAction::Advance(TICK_MS));
            }) as Box<dyn FnMut()>);
            if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period,
            ) {
                interval_id = Some(id);
                stored_closure = Some(closure);
            }
        }
        move || {
            if let Some(id) = interval_id
                && let Some(win) = web_sys::window()
            {
                win.clear_interval_with_handle(id);
            }
            drop(stored_closure);
        }
    });
}

fn emit(store: &UseReducerHandle<MissionStore>, action: MissionAction) -> Callback<()> {
    let dispatcher = store.dispatcher();
    Callback::from(move |()| dispatcher.dispatch(action))
}

fn emit_with<T, F>(store: &UseReducerHandle<MissionStore>, to_action: F) -> Callback<T>
where
    T: 'static,
    F: Fn(T) -> MissionAction + 'static,
{
    let dispatcher = store.dispatcher();
    Callback::from(move |value: T| dispatcher.dispatch(to_action(value)))
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(MissionStore::default);
    use_mission_clock(&store);

    let mission = &store.mission;
    html! {
        <div class="min-h-screen bg-slate-950 text-slate-100">
            <Hud
                phase={mission.phase}
                progress={mission.progress}
                on_reset={emit(&store, MissionAction::Reset)}
            />
            { render_phase(&store) }
        </div>
    }
}

fn render_phase(store: &UseReducerHandle<MissionStore>) -> Html {
    let mission = &store.mission;
    match mission.phase {
        MacroPhase::Landing => html! {
            <LandingPage
                on_choose={emit_with(store, |choice| match choice {
                    adastra_sim::UserChoice::Astronaut => MissionAction::ChooseAstronaut,
                    adastra_sim::UserChoice::Observer => MissionAction::ChooseObserver,
                })}
            />
        },
        MacroPhase::NblTraining => html! {
            <NblPage
                nbl={mission.nbl.clone()}
                on_begin={emit(store, MissionAction::BeginTraining)}
                on_skip={emit(store, MissionAction::SkipToChallenge)}
                on_toggle_part={emit_with(store, MissionAction::ToggleSuitPart)}
                on_set_level={emit_with(store, MissionAction::SetBuoyancyLevel)}
                on_continue={emit(store, MissionAction::ContinueToChallenge)}
                on_adjust={emit_with(store, |(quadrant, delta)| {
                    MissionAction::AdjustWeight(quadrant, delta)
                })}
                on_complete={emit(store, MissionAction::CompleteNbl)}
            />
        },
        MacroPhase::RocketLaunch => html! {
            <LaunchPage
                launch={mission.launch}
                on_start={emit(store, MissionAction::StartCountdown)}
                on_complete={emit(store, MissionAction::CompleteLaunch)}
            />
        },
        MacroPhase::IssArrival => html! {
            <DockingPage
                docking={mission.docking}
                on_impulse={emit_with(store, MissionAction::SendDockingImpulse)}
                on_complete={emit(store, MissionAction::CompleteDocking)}
            />
        },
        MacroPhase::IssInterior => html! {
            <InteriorPage
                interior={mission.interior}
                on_select={emit_with(store, MissionAction::SelectTask)}
                on_cancel={emit(store, MissionAction::ClearTaskSelection)}
                on_complete_task={emit(store, MissionAction::CompleteSelectedTask)}
                on_continue={emit(store, MissionAction::CompleteInterior)}
            />
        },
        MacroPhase::CupolaExperience => html! {
            <CupolaPage
                cupola={mission.cupola}
                choice={mission.choice}
                on_set_view={emit_with(store, MissionAction::SetViewMode)}
                on_reset={emit(store, MissionAction::Reset)}
            />
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(store: Rc<MissionStore>, action: MissionAction) -> Rc<MissionStore> {
        Reducible::reduce(store, action)
    }

    #[test]
    fn reducer_applies_transitions() {
        let store = Rc::new(MissionStore::default());
        let store = reduce(store, MissionAction::ChooseAstronaut);
        assert_eq!(store.mission.phase, MacroPhase::NblTraining);
        let store = reduce(store, MissionAction::SkipToChallenge);
        let store = reduce(store, MissionAction::AdjustWeight(WeightQuadrant::Chest, 5));
        assert_eq!(store.mission.nbl.attempts, 1);
        let store = reduce(store, MissionAction::Advance(2_000));
        assert!(store.mission.nbl.task_completed);
    }

    #[test]
    fn reducer_drops_out_of_phase_transitions() {
        let store = Rc::new(MissionStore::default());
        let before = store.clone();
        let after = reduce(store, MissionAction::CompleteDocking);
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn reset_action_returns_to_landing() {
        let store = Rc::new(MissionStore::default());
        let store = reduce(store, MissionAction::ChooseObserver);
        assert_eq!(store.mission.phase, MacroPhase::CupolaExperience);
        let store = reduce(store, MissionAction::Reset);
        assert_eq!(store.mission.phase, MacroPhase::Landing);
        assert_eq!(store.mission.progress, 0);
    }
}
