//! Persistent header: phase label, mission progress bar, reset control.

use adastra_sim::MacroPhase;
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct HudProps {
    pub phase: MacroPhase,
    pub progress: u8,
    pub on_reset: Callback<()>,
}

#[function_component(Hud)]
pub fn hud(props: &HudProps) -> Html {
    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_| on_reset.emit(()))
    };
    let phase_key = format!("phase.{}", props.phase.as_str());
    html! {
        <header class="flex items-center gap-4 px-6 py-3 bg-slate-900/80 border-b border-slate-700">
            <span class="font-bold tracking-wide" data-testid="phase-label">
                { t(&phase_key) }
            </span>
            <div class="flex-1">
                <progress
                    class="progress progress-info w-full h-3"
                    value={props.progress.to_string()}
                    max="100"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow={props.progress.to_string()}
                    aria-label={t("hud.progress")}
                />
            </div>
            <span class="font-mono text-sm" data-testid="progress-value">
                { format!("{}%", props.progress) }
            </span>
            <button class="btn btn-xs btn-outline" onclick={on_reset}>
                { t("hud.reset") }
            </button>
        </header>
    }
}
