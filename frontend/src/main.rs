use std::rc::Rc;

use shared::{AppView, GenerationConfig};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{ChatView, ExamView, Navigation, OnboardingWizard, PlannerView, ProgressView, SettingsView};
use hooks::use_study_shell::UseStudyShellResult;
use hooks::use_study_shell;
use services::config::load_config;
use services::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<GenerationConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let UseStudyShellResult { state, actions } = use_study_shell(props.config.clone());

    let Some(profile) = state.profile().cloned() else {
        return html! { <OnboardingWizard on_complete={actions.complete_onboarding.clone()} /> };
    };

    let view = state.active_view();
    let back_to_planner = actions.navigate.reform(|_: ()| AppView::Planner);

    let content = match view {
        AppView::Onboarding => html! {
            <OnboardingWizard on_complete={actions.complete_onboarding.clone()} />
        },
        AppView::Planner => html! {
            <PlannerView
                tasks={state.tasks().to_vec()}
                display={state.planner_display()}
                is_generating={state.is_generating()}
                can_regenerate={state.can_regenerate()}
                on_toggle={actions.toggle_task.clone()}
                on_regenerate={actions.regenerate.clone()}
                on_start_exam={actions.navigate.reform(|_: ()| AppView::Exam)}
            />
        },
        AppView::Exam => html! {
            <ExamView
                config={props.config.clone()}
                subjects={profile.subjects().to_vec()}
                grade={profile.grade().to_string()}
                on_close={back_to_planner}
            />
        },
        AppView::Chat => html! { <ChatView config={props.config.clone()} /> },
        AppView::Progress => html! { <ProgressView tasks={state.tasks().to_vec()} /> },
        AppView::Settings => html! {
            <SettingsView profile={profile.clone()} on_reset={actions.reset.clone()} />
        },
    };

    html! {
        <div class="app">
            <main class={classes!("app-content", view.shows_navigation().then_some("with-nav"))}>
                {content}
            </main>
            if view.shows_navigation() {
                <Navigation current={view} on_navigate={actions.navigate.clone()} />
            }
        </div>
    }
}

fn main() {
    if let Err(e) = Logger::install() {
        gloo::console::error!(format!("Logging unavailable: {}", e));
    }
    let config = Rc::new(load_config());
    Logger::set_debug(config.enable_debug_logging);
    if config.api_key().is_none() {
        log::warn!("No API key configured; plan, exam and tutor requests will fail");
    }
    log::info!("Starting study planner with model {}", config.model);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
