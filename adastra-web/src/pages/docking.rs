//! ISS arrival: automated approach, manual alignment, hard dock.

use adastra_sim::{DockingImpulse, DockingState, DockingStep, approach_progress_pct};
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct DockingPageProps {
    pub docking: DockingState,
    pub on_impulse: Callback<DockingImpulse>,
    pub on_complete: Callback<()>,
}

#[function_component(DockingPage)]
pub fn docking_page(props: &DockingPageProps) -> Html {
    match props.docking.step {
        DockingStep::Approaching => render_approach(props),
        DockingStep::Aligning => render_alignment(props),
        DockingStep::Docked => render_docked(props),
    }
}

fn render_approach(props: &DockingPageProps) -> Html {
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 text-center">
            <div class="card bg-slate-900/80 border border-blue-500 max-w-2xl p-8 space-y-4 w-full">
                <h2 class="text-4xl font-bold text-blue-400">{ t("docking.approach.title") }</h2>
                <p class="text-2xl text-green-400" data-testid="distance">
                    { format!("{}: {} m", t("docking.distance"), props.docking.distance_m) }
                </p>
                <div class="w-full bg-slate-700 rounded-full h-4">
                    <div
                        class="bg-blue-400 h-4 rounded-full"
                        style={format!("width: {}%", approach_progress_pct(props.docking.distance_m))}
                    />
                </div>
            </div>
        </main>
    }
}

fn impulse_button(props: &DockingPageProps, impulse: DockingImpulse, label: &str) -> Html {
    let on_impulse = {
        let on_impulse = props.on_impulse.clone();
        Callback::from(move |_| on_impulse.emit(impulse))
    };
    html! {
        <button
            class="btn btn-neutral"
            data-testid={format!("rcs-{}", impulse.as_str())}
            onclick={on_impulse}
        >
            { label.to_string() }
        </button>
    }
}

fn render_alignment(props: &DockingPageProps) -> Html {
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 space-y-4">
            <div class="card bg-slate-900/80 border border-yellow-500 max-w-2xl p-6 space-y-4 w-full text-center">
                <h2 class="text-3xl font-bold text-yellow-400">{ t("docking.align.title") }</h2>
                <p class="text-xl text-green-400" data-testid="alignment">
                    { format!("{}: {}%", t("docking.alignment"), props.docking.alignment) }
                </p>
                <div class="w-full bg-slate-700 rounded-full h-4">
                    <div
                        class="bg-yellow-400 h-4 rounded-full"
                        style={format!("width: {}%", props.docking.alignment)}
                    />
                </div>
            </div>
            <div class="card bg-slate-900/80 border border-slate-500 p-6">
                <div class="grid grid-cols-3 gap-2 items-center">
                    <div></div>
                    { impulse_button(props, DockingImpulse::Up, "↑") }
                    <div></div>
                    { impulse_button(props, DockingImpulse::Left, "←") }
                    <div class="text-center text-sm font-mono bg-slate-800 rounded p-2">{ "RCS" }</div>
                    { impulse_button(props, DockingImpulse::Right, "→") }
                    <div></div>
                    { impulse_button(props, DockingImpulse::Down, "↓") }
                    <div></div>
                </div>
                <p class="text-xs text-slate-400 text-center mt-2">{ t("docking.rcs") }</p>
            </div>
        </main>
    }
}

fn render_docked(props: &DockingPageProps) -> Html {
    let complete = {
        let on_complete = props.on_complete.clone();
        Callback::from(move |_| on_complete.emit(()))
    };
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 text-center">
            <div class="card bg-slate-900/80 border border-green-500 max-w-2xl p-8 space-y-6">
                <h2 class="text-4xl font-bold text-green-400">{ t("docking.docked.title") }</h2>
                <p class="text-lg text-slate-300">{ t("docking.docked.blurb") }</p>
                <button class="btn btn-success btn-lg" data-testid="docking-complete" onclick={complete}>
                    { t("docking.docked.cta") }
                </button>
            </div>
        </main>
    }
}
