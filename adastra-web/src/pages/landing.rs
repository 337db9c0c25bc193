//! Mission start: pick the astronaut pipeline or the observer shortcut.

use adastra_sim::UserChoice;
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct LandingPageProps {
    pub on_choose: Callback<UserChoice>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let choose_astronaut = {
        let on_choose = props.on_choose.clone();
        Callback::from(move |_| on_choose.emit(UserChoice::Astronaut))
    };
    let choose_observer = {
        let on_choose = props.on_choose.clone();
        Callback::from(move |_| on_choose.emit(UserChoice::Observer))
    };
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 text-center">
            <div class="card bg-slate-900/80 border border-blue-500 max-w-2xl p-8 space-y-6">
                <h1 class="text-5xl font-bold tracking-wide">{ t("landing.title") }</h1>
                <p class="text-xl text-blue-300">{ t("landing.subtitle") }</p>
                <p class="text-slate-300">{ t("landing.blurb") }</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        class="btn btn-primary btn-lg"
                        data-testid="choose-astronaut"
                        onclick={choose_astronaut}
                    >
                        { t("landing.cta_astronaut") }
                    </button>
                    <button
                        class="btn btn-outline btn-lg"
                        data-testid="choose-observer"
                        onclick={choose_observer}
                    >
                        { t("landing.cta_observer") }
                    </button>
                </div>
            </div>
        </main>
    }
}
