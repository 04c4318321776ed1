use backend::{ProgressSummary, ACHIEVEMENT_DETAIL, ACHIEVEMENT_TITLE};
use shared::StudyTask;
use yew::prelude::*;

use crate::components::WeeklyChart;
use crate::services::date_utils::{format_minutes, today_weekday};

#[derive(Properties, PartialEq)]
pub struct ProgressViewProps {
    pub tasks: Vec<StudyTask>,
}

#[function_component(ProgressView)]
pub fn progress_view(props: &ProgressViewProps) -> Html {
    let summary = use_memo(props.tasks.clone(), |tasks| {
        ProgressSummary::from_tasks(tasks, today_weekday())
    });

    html! {
        <div class="progress">
            <h1>{"Your Progress"}</h1>

            <div class="stat-grid">
                <div class="stat-card stat-goal">
                    <span class="stat-title"><i class="fas fa-bullseye"></i>{"Daily Goal"}</span>
                    <div class="stat-value">{format!("{}%", summary.completion_percentage())}</div>
                    <div class="stat-detail">
                        {format!("{}/{} tasks done", summary.completed_tasks, summary.total_tasks)}
                    </div>
                </div>

                <div class="stat-card">
                    <span class="stat-title"><i class="fas fa-fire"></i>{"Streak"}</span>
                    <div class="stat-value">
                        {summary.streak_days()}
                        <span class="stat-unit">{" days"}</span>
                    </div>
                    <div class="stat-detail">{"Keep it up!"}</div>
                </div>
            </div>

            <div class="chart-card">
                <h3>{"Weekly Study Time"}</h3>
                <p class="chart-subtitle">
                    {format!("Today: {}", format_minutes(summary.minutes_today))}
                </p>
                <WeeklyChart week={summary.week.clone()} />
            </div>

            <div class="achievements">
                <h3>{"Achievements"}</h3>
                <div class="achievement">
                    <i class="fas fa-trophy"></i>
                    <div>
                        <div class="achievement-title">{ACHIEVEMENT_TITLE}</div>
                        <div class="achievement-detail">{ACHIEVEMENT_DETAIL}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
