//! Station interior: airlock entry, onboarding checklist, completion.

use adastra_sim::{InteriorState, InteriorStep, TaskId, checklist_progress_pct};
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct InteriorPageProps {
    pub interior: InteriorState,
    pub on_select: Callback<TaskId>,
    pub on_cancel: Callback<()>,
    pub on_complete_task: Callback<()>,
    pub on_continue: Callback<()>,
}

#[function_component(InteriorPage)]
pub fn interior_page(props: &InteriorPageProps) -> Html {
    match props.interior.step {
        InteriorStep::Entry => render_entry(),
        InteriorStep::Tasks => render_tasks(props),
        InteriorStep::Complete => render_complete(props),
    }
}

fn render_entry() -> Html {
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 text-center">
            <div class="card bg-slate-900/80 border border-blue-500 max-w-xl p-8 space-y-4">
                <h2 class="text-4xl font-bold text-blue-400">{ t("interior.entry.title") }</h2>
                <p class="text-lg text-slate-300">{ t("interior.entry.blurb") }</p>
                <div class="w-full bg-slate-700 rounded-full h-2">
                    <div class="bg-blue-500 h-2 rounded-full animate-pulse w-full" />
                </div>
            </div>
        </main>
    }
}

fn task_card(props: &InteriorPageProps, task: TaskId) -> Html {
    let done = props.interior.tasks.is_complete(task);
    let select = {
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(task))
    };
    let class = if done {
        "card p-4 border border-green-500 bg-green-900/30"
    } else {
        "card p-4 border border-slate-600 bg-slate-800 cursor-pointer hover:border-blue-400"
    };
    html! {
        <div {class} data-testid={format!("task-{task}")} onclick={select}>
            <div class="flex items-center justify-between">
                <div>
                    <h4 class="font-medium">{ t(&format!("interior.task.{task}")) }</h4>
                    <p class="text-sm text-slate-400">{ t(&format!("interior.task.{task}.desc")) }</p>
                </div>
                if done {
                    <span class="text-green-400 text-xl">{ "✓" }</span>
                }
            </div>
        </div>
    }
}

fn task_detail(props: &InteriorPageProps, task: TaskId) -> Html {
    let complete = {
        let on_complete_task = props.on_complete_task.clone();
        Callback::from(move |_| on_complete_task.emit(()))
    };
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };
    html! {
        <div class="card bg-slate-900 border border-yellow-500 p-6 space-y-4 max-w-md w-full">
            <h3 class="text-xl text-yellow-400">{ t(&format!("interior.task.{task}")) }</h3>
            <p class="text-slate-300">{ t(&format!("interior.task.{task}.desc")) }</p>
            <div class="flex gap-2 justify-center">
                <button class="btn btn-primary" data-testid="task-complete" onclick={complete}>
                    { t("interior.task.cta") }
                </button>
                <button class="btn btn-outline" data-testid="task-cancel" onclick={cancel}>
                    { t("interior.task.cancel") }
                </button>
            </div>
        </div>
    }
}

fn render_tasks(props: &InteriorPageProps) -> Html {
    let completed = props.interior.tasks.completed_count();
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 space-y-4">
            <div class="card bg-slate-900/80 border border-blue-500 max-w-xl p-6 space-y-4 w-full">
                <h2 class="text-3xl font-bold text-center">{ t("interior.tasks.title") }</h2>
                <div class="w-full bg-slate-700 rounded-full h-3">
                    <div
                        class="bg-blue-400 h-3 rounded-full"
                        style={format!("width: {}%", checklist_progress_pct(completed, TaskId::ALL.len()))}
                    />
                </div>
                <p class="text-center text-sm text-slate-300" data-testid="task-progress">
                    { format!("{completed}/{}", TaskId::ALL.len()) }
                </p>
                <div class="space-y-3">
                    { for TaskId::ALL.iter().map(|task| task_card(props, *task)) }
                </div>
            </div>
            if let Some(task) = props.interior.selected {
                { task_detail(props, task) }
            }
        </main>
    }
}

fn render_complete(props: &InteriorPageProps) -> Html {
    let cont = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_| on_continue.emit(()))
    };
    html! {
        <main class="flex flex-col items-center justify-center min-h-[80vh] px-4 text-center">
            <div class="card bg-slate-900/80 border border-green-500 max-w-xl p-8 space-y-6">
                <h2 class="text-4xl font-bold text-green-400">{ t("interior.complete.title") }</h2>
                <p class="text-lg text-slate-300">{ t("interior.complete.blurb") }</p>
                <button class="btn btn-primary btn-lg" data-testid="interior-complete" onclick={cont}>
                    { t("interior.complete.cta") }
                </button>
            </div>
        </main>
    }
}
