//! Cupola observatory: view modes, orbital position, end-of-mission panel.

use adastra_sim::{CupolaState, UserChoice, ViewMode};
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct CupolaPageProps {
    pub cupola: CupolaState,
    pub choice: Option<UserChoice>,
    pub on_set_view: Callback<ViewMode>,
    pub on_reset: Callback<()>,
}

fn view_button(props: &CupolaPageProps, view: ViewMode) -> Html {
    let active = props.cupola.view == view;
    let set_view = {
        let on_set_view = props.on_set_view.clone();
        Callback::from(move |_| on_set_view.emit(view))
    };
    let class = if active {
        "btn btn-primary w-full"
    } else {
        "btn btn-outline w-full"
    };
    html! {
        <button {class} data-testid={format!("view-{}", view.as_str())} onclick={set_view}>
            { t(&format!("cupola.view.{}", view.as_str())) }
        </button>
    }
}

#[function_component(CupolaPage)]
pub fn cupola_page(props: &CupolaPageProps) -> Html {
    let stop = props.cupola.current_stop();
    let reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_| on_reset.emit(()))
    };
    html! {
        <main class="flex flex-col lg:flex-row items-center justify-center gap-6 min-h-[80vh] px-4">
            <div class="card bg-slate-900/80 border border-slate-500 p-6 space-y-2 w-64">
                <h3 class="text-lg font-bold">{ t("cupola.title") }</h3>
                { for ViewMode::ALL.iter().map(|view| view_button(props, *view)) }
            </div>
            <div class="card bg-slate-900/90 border border-blue-500 p-6 space-y-4 max-w-sm w-full">
                <div class="p-3 bg-blue-900/30 rounded border border-blue-500 space-y-1">
                    <p class="text-blue-300 font-semibold">
                        { format!("{}: {}", t("cupola.position"), stop.region) }
                    </p>
                    <p class="text-sm" data-testid="cupola-country">
                        { format!("{}: {}", t("cupola.country"), stop.country) }
                    </p>
                    <p class="text-xs text-slate-400" data-testid="cupola-next">
                        { format!("{}: {}", t("cupola.next"), stop.next_region) }
                    </p>
                </div>
                if props.choice == Some(UserChoice::Astronaut) {
                    <div class="p-3 bg-green-900/30 rounded border border-green-500">
                        <p class="text-green-400 font-bold" data-testid="congrats">
                            { t("cupola.congrats") }
                        </p>
                    </div>
                }
                <button class="btn btn-outline w-full" data-testid="cupola-reset" onclick={reset}>
                    { t("cupola.reset") }
                </button>
            </div>
        </main>
    }
}
