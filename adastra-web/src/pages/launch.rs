//! Launch sequence: pad, countdown, ascent, orbit.

use adastra_sim::{LaunchState, LaunchStep, ascent_altitude_km};
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct LaunchPageProps {
    pub launch: LaunchState,
    pub on_start: Callback<()>,
    pub on_complete: Callback<()>,
}

#[function_component(LaunchPage)]
pub fn launch_page(props: &LaunchPageProps) -> Html {
    match props.launch.step {
        LaunchStep::Ready => render_ready(props),
        LaunchStep::Countdown => render_countdown(props),
        LaunchStep::Launching => render_ascent(props),
        LaunchStep::Orbit => render_orbit(props),
    }
}

fn render_ready(props: &LaunchPageProps) -> Html {
    let start = {
        let on_start = props.on_start.clone();
        Callback::from(move |_| on_start.emit(()))
    };
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 text-center">
            <div class="card bg-slate-900/80 border border-orange-500 max-w-2xl p-8 space-y-6">
                <h2 class="text-4xl font-bold text-orange-400">{ t("launch.ready.title") }</h2>
                <p class="text-lg text-slate-300">{ t("launch.ready.blurb") }</p>
                <button class="btn btn-warning btn-lg" data-testid="launch-start" onclick={start}>
                    { t("launch.ready.cta") }
                </button>
            </div>
        </main>
    }
}

fn render_countdown(props: &LaunchPageProps) -> Html {
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 text-center">
            <div class="card bg-slate-900/90 border border-red-500 max-w-xl p-8 space-y-4">
                <div class="text-8xl font-mono text-red-400" data-testid="countdown-value">
                    { props.launch.countdown }
                </div>
                <p class="text-2xl">
                    { if props.launch.countdown > 0 { t("launch.countdown.label") } else { t("launch.liftoff") } }
                </p>
            </div>
        </main>
    }
}

fn render_ascent(props: &LaunchPageProps) -> Html {
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 text-center">
            <div class="card bg-slate-900/80 border border-yellow-500 max-w-2xl p-8 space-y-4 w-full">
                <h2 class="text-3xl font-bold text-yellow-400">{ t("launch.ascent.title") }</h2>
                <div class="w-full bg-slate-700 rounded-full h-4">
                    <div
                        class="bg-yellow-400 h-4 rounded-full"
                        style={format!("width: {}%", props.launch.position)}
                    />
                </div>
                <p class="text-lg" data-testid="altitude">
                    { format!("{}: {} km", t("launch.altitude"), ascent_altitude_km(props.launch.position)) }
                </p>
            </div>
        </main>
    }
}

fn render_orbit(props: &LaunchPageProps) -> Html {
    let complete = {
        let on_complete = props.on_complete.clone();
        Callback::from(move |_| on_complete.emit(()))
    };
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 text-center">
            <div class="card bg-slate-900/80 border border-green-500 max-w-2xl p-8 space-y-6">
                <h2 class="text-4xl font-bold text-green-400">{ t("launch.orbit.title") }</h2>
                <p class="text-lg text-slate-300">{ t("launch.orbit.blurb") }</p>
                <button class="btn btn-success btn-lg" data-testid="launch-complete" onclick={complete}>
                    { t("launch.orbit.cta") }
                </button>
            </div>
        </main>
    }
}
