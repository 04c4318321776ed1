//! # Application State
//!
//! The single source of truth for the profile, today's task list, the active
//! view and the plan "busy" flag. All mutation goes through [`AppState::apply`]
//! with an [`AppAction`]; the returned [`StateChange`] tells the owner which
//! persisted records need writing.

use log::{debug, info};
use shared::{AppView, Profile, StudyTask};

use crate::storage::Snapshot;

/// Mutation entry points for [`AppState`]
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SetProfile(Profile),
    /// Replace the whole task list
    SetTasks(Vec<StudyTask>),
    /// Flip completion of the task with this ID; unknown IDs are ignored
    ToggleTask(String),
    SetView(AppView),
    SetGenerating(bool),
    /// Store the new profile and switch to the planner
    CompleteOnboarding(Profile),
    /// A plan request finished successfully
    PlanReady(Vec<StudyTask>),
    /// A plan request failed; the current tasks are kept
    PlanFailed,
}

/// Which persisted records an action touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateChange {
    pub profile: bool,
    pub tasks: bool,
}

impl StateChange {
    const NONE: StateChange = StateChange {
        profile: false,
        tasks: false,
    };
    const TASKS: StateChange = StateChange {
        profile: false,
        tasks: true,
    };

    pub fn is_empty(&self) -> bool {
        !self.profile && !self.tasks
    }
}

/// What the planner body should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerDisplay {
    /// No tasks and nothing in flight: call to action
    Empty,
    /// No tasks yet, a plan request is outstanding
    Generating,
    Tasks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    profile: Option<Profile>,
    tasks: Vec<StudyTask>,
    current_view: AppView,
    is_generating: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            profile: None,
            tasks: Vec::new(),
            current_view: AppView::Onboarding,
            is_generating: false,
        }
    }
}

impl AppState {
    /// Initial state from whatever was restored at start-up
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let current_view = if snapshot.profile.is_some() {
            AppView::Planner
        } else {
            AppView::Onboarding
        };

        Self {
            profile: snapshot.profile,
            tasks: snapshot.tasks,
            current_view,
            is_generating: false,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn tasks(&self) -> &[StudyTask] {
        &self.tasks
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// The view to render. Onboarding is forced while there is no profile.
    pub fn active_view(&self) -> AppView {
        match (&self.profile, self.current_view) {
            (None, _) => AppView::Onboarding,
            (Some(_), AppView::Onboarding) => AppView::Planner,
            (Some(_), view) => view,
        }
    }

    pub fn shows_navigation(&self) -> bool {
        self.active_view().shows_navigation()
    }

    /// Whether the regenerate control is enabled
    pub fn can_regenerate(&self) -> bool {
        self.profile.is_some() && !self.is_generating
    }

    pub fn planner_display(&self) -> PlannerDisplay {
        match (self.tasks.is_empty(), self.is_generating) {
            (false, _) => PlannerDisplay::Tasks,
            (true, true) => PlannerDisplay::Generating,
            (true, false) => PlannerDisplay::Empty,
        }
    }

    pub fn apply(&mut self, action: AppAction) -> StateChange {
        match action {
            AppAction::SetProfile(profile) => {
                self.profile = Some(profile);
                StateChange {
                    profile: true,
                    tasks: false,
                }
            }
            AppAction::SetTasks(tasks) => {
                self.tasks = tasks;
                StateChange::TASKS
            }
            AppAction::ToggleTask(id) => self.toggle_task(&id),
            AppAction::SetView(view) => {
                debug!("Switching view to {:?}", view);
                self.current_view = view;
                StateChange::NONE
            }
            AppAction::SetGenerating(generating) => {
                self.is_generating = generating;
                StateChange::NONE
            }
            AppAction::CompleteOnboarding(profile) => {
                info!("Profile created for '{}'", profile.name());
                self.current_view = AppView::Planner;
                self.apply(AppAction::SetProfile(profile))
            }
            AppAction::PlanReady(tasks) => {
                info!("Replacing plan with {} tasks", tasks.len());
                self.is_generating = false;
                self.apply(AppAction::SetTasks(tasks))
            }
            AppAction::PlanFailed => {
                self.is_generating = false;
                StateChange::NONE
            }
        }
    }

    fn toggle_task(&mut self, id: &str) -> StateChange {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!("Task {} completed: {}", id, task.completed);
                StateChange::TASKS
            }
            None => {
                debug!("Ignoring toggle for unknown task {}", id);
                StateChange::NONE
            }
        }
    }
}
