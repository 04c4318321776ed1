use std::rc::Rc;

use backend::{plan_outcome, AppAction, AppState, RequestSlot, StudyShell, PLAN_FAILURE_MESSAGE};
use shared::{AppView, GenerationConfig, Profile};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{study_client, BrowserStore};

const RESET_CONFIRMATION: &str = "Are you sure you want to reset your profile?";

/// Reducer wrapper so the shell can live in yew state
#[derive(Clone)]
pub struct ShellHandle(StudyShell<BrowserStore>);

impl Reducible for ShellHandle {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        next.0.dispatch(action);
        Rc::new(next)
    }
}

pub struct UseStudyShellResult {
    pub state: AppState,
    pub actions: UseStudyShellActions,
}

#[derive(Clone, PartialEq)]
pub struct UseStudyShellActions {
    pub complete_onboarding: Callback<Profile>,
    pub toggle_task: Callback<String>,
    pub navigate: Callback<AppView>,
    pub regenerate: Callback<()>,
    pub reset: Callback<()>,
}

/// Hook owning the application state, its persistence and the plan request
#[hook]
pub fn use_study_shell(config: Rc<GenerationConfig>) -> UseStudyShellResult {
    let shell = use_reducer(|| ShellHandle(StudyShell::bootstrap(BrowserStore::open())));
    let client = use_memo(config, |config| study_client(config.clone()));
    let plan_slot = use_mut_ref(|| RequestSlot::new("plan"));

    // Request a new plan, superseding any request still in flight
    let start_plan = {
        let shell = shell.clone();
        let client = client.clone();
        let plan_slot = plan_slot.clone();

        Callback::from(move |profile: Profile| {
            shell.dispatch(AppAction::SetGenerating(true));

            let client = client.clone();
            let request = plan_slot
                .borrow_mut()
                .begin(async move { client.generate_plan(&profile).await });

            let shell = shell.clone();
            spawn_local(async move {
                match request.await {
                    Ok(result) => {
                        let failed = result.is_err();
                        shell.dispatch(plan_outcome(result));
                        if failed {
                            gloo::dialogs::alert(PLAN_FAILURE_MESSAGE);
                        }
                    }
                    Err(_) => log::info!("Plan request cancelled"),
                }
            });
        })
    };

    let complete_onboarding = {
        let shell = shell.clone();
        let start_plan = start_plan.clone();

        Callback::from(move |profile: Profile| {
            shell.dispatch(AppAction::CompleteOnboarding(profile.clone()));
            start_plan.emit(profile);
        })
    };

    let regenerate = {
        let shell = shell.clone();
        let start_plan = start_plan.clone();

        Callback::from(move |_: ()| {
            let state = shell.0.state();
            if !state.can_regenerate() {
                return;
            }
            if let Some(profile) = state.profile() {
                start_plan.emit(profile.clone());
            }
        })
    };

    let toggle_task = {
        let shell = shell.clone();
        Callback::from(move |id: String| shell.dispatch(AppAction::ToggleTask(id)))
    };

    let navigate = {
        let shell = shell.clone();
        Callback::from(move |view: AppView| shell.dispatch(AppAction::SetView(view)))
    };

    let reset = {
        let shell = shell.clone();
        let plan_slot = plan_slot.clone();

        Callback::from(move |_: ()| {
            if !gloo::dialogs::confirm(RESET_CONFIRMATION) {
                return;
            }
            plan_slot.borrow_mut().cancel();

            let mut cleared = shell.0.clone();
            if let Err(e) = cleared.reset() {
                log::error!("Failed to clear saved data: {}", e);
            }
            reload_page();
        })
    };

    UseStudyShellResult {
        state: shell.0.state().clone(),
        actions: UseStudyShellActions {
            complete_onboarding,
            toggle_task,
            navigate,
            regenerate,
            reset,
        },
    }
}

fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        log::error!("Failed to reload page: {:?}", e);
    }
}
