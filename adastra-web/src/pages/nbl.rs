//! Neutral Buoyancy Lab: suit prep, pre-breathe, pool sim, weight challenge.

use adastra_sim::{
    NblState, NblStep, StatusTone, SuitPart, WeightQuadrant, buoyancy_status_key,
    constants::WEIGHT_STEP_KG, format_mm_ss, status_tone, weight_status_key,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct NblPageProps {
    pub nbl: NblState,
    pub on_begin: Callback<()>,
    pub on_skip: Callback<()>,
    pub on_toggle_part: Callback<SuitPart>,
    pub on_set_level: Callback<i32>,
    pub on_continue: Callback<()>,
    pub on_adjust: Callback<(WeightQuadrant, i32)>,
    pub on_complete: Callback<()>,
}

fn tone_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Info => "text-blue-400",
        StatusTone::Success => "text-green-400",
        StatusTone::Warning => "text-yellow-400",
        StatusTone::Danger => "text-red-400",
    }
}

#[function_component(NblPage)]
pub fn nbl_page(props: &NblPageProps) -> Html {
    match props.nbl.step {
        NblStep::Intro => render_intro(props),
        NblStep::SuitPrep => render_suit_prep(props),
        NblStep::Prebreathe => render_prebreathe(props),
        NblStep::PoolSim => render_pool_sim(props),
        NblStep::WeightChallenge => render_challenge(props),
        NblStep::Complete => render_complete(props),
    }
}

fn render_intro(props: &NblPageProps) -> Html {
    let begin = {
        let on_begin = props.on_begin.clone();
        Callback::from(move |_| on_begin.emit(()))
    };
    let skip = {
        let on_skip = props.on_skip.clone();
        Callback::from(move |_| on_skip.emit(()))
    };
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 text-center">
            <div class="card bg-slate-900/80 border border-blue-500 max-w-3xl p-8 space-y-6">
                <h2 class="text-4xl font-bold">{ t("nbl.intro.title") }</h2>
                <p class="text-lg text-slate-300">{ t("nbl.intro.blurb") }</p>
                <div class="flex gap-4 justify-center">
                    <button class="btn btn-primary" data-testid="nbl-begin" onclick={begin}>
                        { t("nbl.intro.begin") }
                    </button>
                    <button class="btn btn-outline" data-testid="nbl-skip" onclick={skip}>
                        { t("nbl.intro.skip") }
                    </button>
                </div>
            </div>
        </main>
    }
}

fn render_suit_prep(props: &NblPageProps) -> Html {
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4">
            <div class="card bg-slate-900/80 border border-blue-500 max-w-xl p-8 space-y-4 w-full">
                <h2 class="text-3xl font-bold text-center">{ t("nbl.suit.title") }</h2>
                <p class="text-slate-300 text-center">{ t("nbl.suit.blurb") }</p>
                <div class="grid grid-cols-2 gap-3">
                    { for SuitPart::ALL.iter().map(|part| {
                        let part = *part;
                        let secured = props.nbl.suit.secured(part);
                        let toggle = {
                            let on_toggle = props.on_toggle_part.clone();
                            Callback::from(move |_| on_toggle.emit(part))
                        };
                        let class = if secured {
                            "btn btn-success justify-between"
                        } else {
                            "btn btn-outline justify-between"
                        };
                        html! {
                            <button {class} data-testid={format!("suit-{}", part.as_str())} onclick={toggle}>
                                { t(&format!("nbl.suit.{}", part.as_str())) }
                                { if secured { " ✓" } else { "" } }
                            </button>
                        }
                    }) }
                </div>
            </div>
        </main>
    }
}

fn render_prebreathe(props: &NblPageProps) -> Html {
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 text-center">
            <div class="card bg-slate-900/80 border border-blue-500 max-w-xl p-8 space-y-4 w-full">
                <h2 class="text-3xl font-bold">{ t("nbl.prebreathe.title") }</h2>
                <p class="text-slate-300">{ t("nbl.prebreathe.blurb") }</p>
                <div class="text-6xl font-mono" data-testid="prebreathe-clock">
                    { format_mm_ss(props.nbl.prebreathe_seconds) }
                </div>
                <div class="space-y-1">
                    <p class="text-sm text-slate-400">
                        { format!("{}: {}%", t("nbl.prebreathe.nitrogen"), props.nbl.nitrogen_pct) }
                    </p>
                    <div class="w-full bg-slate-700 rounded-full h-3">
                        <div
                            class="bg-cyan-400 h-3 rounded-full"
                            style={format!("width: {}%", props.nbl.nitrogen_pct)}
                        />
                    </div>
                </div>
            </div>
        </main>
    }
}

fn render_pool_sim(props: &NblPageProps) -> Html {
    let status = props.nbl.status;
    let set_level = {
        let on_set_level = props.on_set_level.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>()
                && let Ok(level) = input.value().parse::<i32>()
            {
                on_set_level.emit(level);
            }
        })
    };
    let continue_ok = props.nbl.sim_control_ok();
    let on_continue = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_| on_continue.emit(()))
    };
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4">
            <div class="card bg-slate-900/80 border border-blue-500 max-w-xl p-8 space-y-4 w-full">
                <h2 class="text-3xl font-bold text-center">{ t("nbl.sim.title") }</h2>
                <p
                    class={classes!("text-center", "text-lg", "font-bold", tone_class(status_tone(status)))}
                    data-testid="sim-status"
                >
                    { t(buoyancy_status_key(status)) }
                </p>
                <label class="block space-y-2">
                    <span class="text-sm">
                        { format!("{}: {}", t("nbl.sim.level"), props.nbl.buoyancy_level) }
                    </span>
                    <input
                        type="range"
                        min="-100"
                        max="100"
                        step="5"
                        class="range w-full"
                        data-testid="buoyancy-slider"
                        value={props.nbl.buoyancy_level.to_string()}
                        oninput={set_level}
                    />
                </label>
                <div class="text-center space-y-2">
                    <button
                        class="btn btn-primary"
                        data-testid="sim-continue"
                        disabled={!continue_ok}
                        onclick={on_continue}
                    >
                        { t("nbl.sim.continue") }
                    </button>
                    if !continue_ok {
                        <p class="text-xs text-yellow-300">{ t("nbl.sim.hint") }</p>
                    }
                </div>
            </div>
        </main>
    }
}

fn render_challenge(props: &NblPageProps) -> Html {
    let message_key = weight_status_key(props.nbl.status);
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4">
            <div class="card bg-slate-900/80 border border-blue-500 max-w-xl p-8 space-y-4 w-full">
                <h2 class="text-3xl font-bold text-center">{ t("nbl.challenge.title") }</h2>
                <p
                    class={classes!("text-center", "text-lg", "font-bold", tone_class(status_tone(props.nbl.status)))}
                    data-testid="weight-status"
                >
                    { t(message_key) }
                </p>
                { for WeightQuadrant::ALL.iter().map(|quadrant| {
                    let quadrant = *quadrant;
                    let weight = props.nbl.weights.get(quadrant);
                    let lighter = {
                        let on_adjust = props.on_adjust.clone();
                        Callback::from(move |_| on_adjust.emit((quadrant, -WEIGHT_STEP_KG)))
                    };
                    let heavier = {
                        let on_adjust = props.on_adjust.clone();
                        Callback::from(move |_| on_adjust.emit((quadrant, WEIGHT_STEP_KG)))
                    };
                    html! {
                        <div class="space-y-1">
                            <span class="text-sm font-medium">
                                { format!("{}: {} kg", t(&format!("nbl.quadrant.{}", quadrant.as_str())), weight) }
                            </span>
                            <div class="flex items-center gap-2">
                                <button
                                    class="btn btn-xs btn-outline"
                                    data-testid={format!("weight-minus-{}", quadrant.as_str())}
                                    onclick={lighter}
                                >
                                    { format!("-{WEIGHT_STEP_KG} kg") }
                                </button>
                                <div class="flex-1 bg-slate-700 rounded-full h-2">
                                    <div
                                        class="bg-blue-400 h-2 rounded-full"
                                        style={format!("width: {weight}%")}
                                    />
                                </div>
                                <button
                                    class="btn btn-xs btn-outline"
                                    data-testid={format!("weight-plus-{}", quadrant.as_str())}
                                    onclick={heavier}
                                >
                                    { format!("+{WEIGHT_STEP_KG} kg") }
                                </button>
                            </div>
                        </div>
                    }
                }) }
                <div class="text-center text-sm text-slate-300">
                    <p>{ format!("{}: {} kg", t("nbl.total"), props.nbl.weights.total()) }</p>
                    <p class="text-xs text-slate-400">{ t("nbl.target") }</p>
                </div>
            </div>
        </main>
    }
}

fn render_complete(props: &NblPageProps) -> Html {
    let complete = {
        let on_complete = props.on_complete.clone();
        Callback::from(move |_| on_complete.emit(()))
    };
    let score = props.nbl.score;
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 text-center">
            <div class="card bg-slate-900/80 border border-green-500 max-w-xl p-8 space-y-4">
                <h2 class="text-4xl font-bold text-green-400">{ t("nbl.complete.title") }</h2>
                <p class="text-lg text-slate-300">{ t("nbl.complete.blurb") }</p>
                <p class="text-slate-300" data-testid="nbl-score">
                    { format!("{}: {}", t("nbl.complete.attempts"), props.nbl.attempts) }
                    { score.map_or_else(String::new, |s| format!(
                        " | {}: {} | {}: {}%",
                        t("nbl.complete.time"),
                        format_mm_ss(s.time_seconds),
                        t("nbl.complete.accuracy"),
                        s.accuracy_pct,
                    )) }
                </p>
                <button class="btn btn-success btn-lg" data-testid="nbl-complete" onclick={complete}>
                    { t("nbl.complete.cta") }
                </button>
            </div>
        </main>
    }
}
