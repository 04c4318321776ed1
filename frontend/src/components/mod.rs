pub mod chat_view;
pub mod exam_view;
pub mod navigation;
pub mod onboarding_wizard;
pub mod planner_view;
pub mod progress_view;
pub mod settings_view;
pub mod study_card;
pub mod weekly_chart;

pub use chat_view::ChatView;
pub use exam_view::ExamView;
pub use navigation::Navigation;
pub use onboarding_wizard::OnboardingWizard;
pub use planner_view::PlannerView;
pub use progress_view::ProgressView;
pub use settings_view::SettingsView;
pub use study_card::StudyCard;
pub use weekly_chart::WeeklyChart;
