//! # Study Shell
//!
//! Owns the [`AppState`] together with the [`Persistence`] adapter. Every
//! dispatched action is applied to the state first and then mirrored into
//! storage for the records it touched. Storage failures are logged and do not
//! roll back the in-memory state.

use log::{error, info, warn};
use shared::StudyTask;

use super::app_state::{AppAction, AppState, StateChange};
use crate::io::GenerationError;
use crate::storage::{KeyValueStore, Persistence, StorageError};

/// Alert shown when a plan request fails
pub const PLAN_FAILURE_MESSAGE: &str =
    "Failed to generate plan. Please check your API Key and try again.";

/// Map the result of a plan request onto the action that settles it
pub fn plan_outcome(result: Result<Vec<StudyTask>, GenerationError>) -> AppAction {
    match result {
        Ok(tasks) => AppAction::PlanReady(tasks),
        Err(e) => {
            error!("Plan generation failed: {}", e);
            AppAction::PlanFailed
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudyShell<S> {
    state: AppState,
    persistence: Persistence<S>,
}

impl<S: KeyValueStore> StudyShell<S> {
    /// Restore saved state from `store`, falling back to a fresh start for
    /// anything missing or unreadable
    pub fn bootstrap(store: S) -> Self {
        let persistence = Persistence::new(store);
        let state = AppState::from_snapshot(persistence.load_snapshot());
        info!("Bootstrapped into {:?}", state.active_view());
        Self { state, persistence }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn dispatch(&mut self, action: AppAction) -> StateChange {
        let change = self.state.apply(action);
        self.persist(change);
        change
    }

    /// Remove every persisted record and return to onboarding. The caller
    /// restarts the application afterwards.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.persistence.clear()?;
        self.state = AppState::default();
        info!("Profile and data reset");
        Ok(())
    }

    fn persist(&self, change: StateChange) {
        if change.profile {
            if let Some(profile) = self.state.profile() {
                if let Err(e) = self.persistence.save_profile(profile) {
                    warn!("Failed to save profile: {}", e);
                }
            }
        }

        // An empty list is only written once a profile exists, so a fresh
        // install keeps no tasks record.
        if change.tasks && (self.state.profile().is_some() || !self.state.tasks().is_empty()) {
            if let Err(e) = self.persistence.save_tasks(self.state.tasks()) {
                warn!("Failed to save tasks: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::app_state::PlannerDisplay;
    use crate::io::generation_client::test_support::ScriptedTransport;
    use crate::io::GenerationClient;
    use crate::storage::{MemoryStore, PROFILE_KEY, TASKS_KEY};
    use shared::{AppView, GenerationConfig, Profile, TaskKind};

    fn profile() -> Profile {
        Profile::new(
            "Alex",
            "10th Grade",
            vec!["Math".to_string(), "History".to_string()],
            vec!["Math".to_string()],
            2.0,
        )
        .unwrap()
    }

    fn task(id: &str) -> StudyTask {
        StudyTask {
            id: id.to_string(),
            subject: "History".to_string(),
            topic: "The Renaissance".to_string(),
            kind: TaskKind::Study,
            duration_minutes: 40,
            completed: false,
            notes: None,
        }
    }

    fn onboarded_shell(store: MemoryStore) -> StudyShell<MemoryStore> {
        let mut shell = StudyShell::bootstrap(store);
        shell.dispatch(AppAction::CompleteOnboarding(profile()));
        shell
    }

    #[test]
    fn test_fresh_store_starts_at_onboarding() {
        let shell = StudyShell::bootstrap(MemoryStore::new());
        assert_eq!(shell.state().active_view(), AppView::Onboarding);
        assert!(shell.persistence().store().is_empty());
    }

    #[test]
    fn test_changes_survive_restart() {
        let store = MemoryStore::new();
        let mut shell = onboarded_shell(store.clone());
        shell.dispatch(AppAction::PlanReady(vec![task("a"), task("b")]));
        shell.dispatch(AppAction::ToggleTask("b".to_string()));

        let restored = StudyShell::bootstrap(store);
        assert_eq!(restored.state().active_view(), AppView::Planner);
        assert_eq!(restored.state().profile(), Some(&profile()));
        assert!(!restored.state().tasks()[0].completed);
        assert!(restored.state().tasks()[1].completed);
    }

    #[test]
    fn test_view_changes_are_not_persisted() {
        let store = MemoryStore::new();
        let mut shell = onboarded_shell(store.clone());
        shell.dispatch(AppAction::SetView(AppView::Progress));

        assert_eq!(StudyShell::bootstrap(store).state().active_view(), AppView::Planner);
    }

    #[test]
    fn test_empty_plan_overwrites_stale_tasks() {
        let store = MemoryStore::new();
        let mut shell = onboarded_shell(store.clone());
        shell.dispatch(AppAction::PlanReady(vec![task("a")]));
        shell.dispatch(AppAction::PlanReady(vec![]));

        let restored = StudyShell::bootstrap(store);
        assert!(restored.state().tasks().is_empty());
        assert_eq!(restored.state().planner_display(), PlannerDisplay::Empty);
    }

    #[test]
    fn test_empty_tasks_not_written_without_profile() {
        let store = MemoryStore::new();
        let mut shell = StudyShell::bootstrap(store.clone());
        shell.dispatch(AppAction::SetTasks(vec![]));
        assert!(!store.contains_key(TASKS_KEY));
    }

    #[test]
    fn test_reset_clears_records_and_returns_to_onboarding() {
        let store = MemoryStore::new();
        let mut shell = onboarded_shell(store.clone());
        shell.dispatch(AppAction::PlanReady(vec![task("a")]));
        assert!(store.contains_key(PROFILE_KEY));
        assert!(store.contains_key(TASKS_KEY));

        shell.reset().unwrap();
        assert!(!store.contains_key(PROFILE_KEY));
        assert!(!store.contains_key(TASKS_KEY));
        assert_eq!(shell.state().active_view(), AppView::Onboarding);

        let restarted = StudyShell::bootstrap(store);
        assert_eq!(restarted.state().active_view(), AppView::Onboarding);
        assert!(restarted.state().tasks().is_empty());
    }

    #[test]
    fn test_malformed_profile_boots_to_onboarding() {
        let store = MemoryStore::new();
        store.set(PROFILE_KEY, "not json").unwrap();
        let shell = StudyShell::bootstrap(store);
        assert_eq!(shell.state().active_view(), AppView::Onboarding);
    }

    #[test]
    fn test_plan_outcome_maps_errors_to_failure() {
        assert_eq!(
            plan_outcome(Err(GenerationError::MissingApiKey)),
            AppAction::PlanFailed
        );
        assert_eq!(plan_outcome(Ok(vec![])), AppAction::PlanReady(vec![]));
    }

    #[tokio::test]
    async fn test_onboarding_then_generated_plan() {
        let plan = r#"[
            {"subject":"Math","topic":"Linear equations","type":"study","durationMinutes":50},
            {"subject":"Break","topic":"Stretch","type":"break","durationMinutes":10},
            {"subject":"Revision","topic":"Review notes","type":"revision","durationMinutes":20}
        ]"#;
        let client = GenerationClient::new(
            ScriptedTransport::replying(plan),
            &GenerationConfig::default(),
        );
        let store = MemoryStore::new();
        let mut shell = onboarded_shell(store.clone());

        shell.dispatch(AppAction::SetGenerating(true));
        assert_eq!(shell.state().planner_display(), PlannerDisplay::Generating);

        let profile = shell.state().profile().cloned().unwrap();
        let action = plan_outcome(client.generate_plan(&profile).await);
        shell.dispatch(action);

        assert_eq!(shell.state().planner_display(), PlannerDisplay::Tasks);
        assert_eq!(shell.state().tasks().len(), 3);
        assert_eq!(StudyShell::bootstrap(store).state().tasks().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_generated_plan_reaches_empty_state() {
        let client = GenerationClient::new(
            ScriptedTransport::replying("[]"),
            &GenerationConfig::default(),
        );
        let mut shell = onboarded_shell(MemoryStore::new());
        shell.dispatch(AppAction::SetGenerating(true));

        let action = plan_outcome(client.generate_plan(&profile()).await);
        assert_eq!(action, AppAction::PlanReady(vec![]));
        shell.dispatch(action);

        assert_eq!(shell.state().planner_display(), PlannerDisplay::Empty);
        assert!(shell.state().can_regenerate());
    }
}
