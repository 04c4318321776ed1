//! Domain layer for the study planner.
//!
//! Each submodule is a small state machine that the UI drives through method
//! calls. None of them touch the browser; the only side effect in this layer
//! is [`StudyShell`] writing through the storage boundary.
//!
//! ## Modules
//!
//! - **onboarding**: the three-step profile wizard
//! - **app_state**: the top-level application state and its mutation entry points
//! - **shell**: state owner that mirrors changes into persistence
//! - **exam_session**: one quiz attempt, from loading to summary
//! - **progress**: read-only aggregates for the progress screen
//! - **chat_session**: the tutor conversation log
//! - **requests**: cancellable handles for in-flight generation calls

pub mod app_state;
pub mod chat_session;
pub mod exam_session;
pub mod onboarding;
pub mod progress;
pub mod requests;
pub mod shell;

pub use app_state::{AppAction, AppState, PlannerDisplay, StateChange};
pub use chat_session::{ChatSession, ChatTurn};
pub use exam_session::{
    ExamPhase, ExamSession, ExamSummary, OptionState, ScoreBand, EXAM_FAILURE_MESSAGE,
};
pub use onboarding::{OnboardingAdvance, OnboardingForm, OnboardingStep};
pub use progress::{
    ProgressSummary, WeekdayMinutes, ACHIEVEMENT_DETAIL, ACHIEVEMENT_TITLE, PLACEHOLDER_WEEK,
    STREAK_DAYS,
};
pub use requests::RequestSlot;
pub use shell::{plan_outcome, StudyShell, PLAN_FAILURE_MESSAGE};
