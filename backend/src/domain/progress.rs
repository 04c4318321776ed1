//! Aggregates for the progress screen.
//!
//! Everything here is a pure function of the current task list and today's
//! weekday. There is no study history, so the other six days of the weekly
//! chart are fixed illustrative values.

use chrono::Weekday;
use shared::StudyTask;

/// Illustrative minutes per weekday, Monday first
pub const PLACEHOLDER_WEEK: [(Weekday, u32); 7] = [
    (Weekday::Mon, 120),
    (Weekday::Tue, 90),
    (Weekday::Wed, 150),
    (Weekday::Thu, 45),
    (Weekday::Fri, 0),
    (Weekday::Sat, 0),
    (Weekday::Sun, 0),
];

pub const STREAK_DAYS: u32 = 4;
pub const ACHIEVEMENT_TITLE: &str = "Early Bird";
pub const ACHIEVEMENT_DETAIL: &str = "Completed 3 tasks before 10 AM";

/// One bar of the weekly chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayMinutes {
    pub day: Weekday,
    pub minutes: u32,
    pub is_today: bool,
}

impl WeekdayMinutes {
    /// Three-letter label ("Mon")
    pub fn label(&self) -> String {
        self.day.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed_tasks: usize,
    pub total_tasks: usize,
    /// Minutes of completed tasks
    pub minutes_today: u32,
    pub week: Vec<WeekdayMinutes>,
}

impl ProgressSummary {
    pub fn from_tasks(tasks: &[StudyTask], today: Weekday) -> Self {
        let completed: Vec<&StudyTask> = tasks.iter().filter(|t| t.completed).collect();
        let minutes_today = completed.iter().map(|t| t.duration_minutes).sum();

        let week = PLACEHOLDER_WEEK
            .iter()
            .map(|&(day, placeholder)| {
                let is_today = day == today;
                WeekdayMinutes {
                    day,
                    minutes: if is_today { minutes_today } else { placeholder },
                    is_today,
                }
            })
            .collect();

        Self {
            completed_tasks: completed.len(),
            total_tasks: tasks.len(),
            minutes_today,
            week,
        }
    }

    /// Percentage of today's tasks completed. Zero when there are no tasks.
    pub fn completion_percentage(&self) -> u32 {
        let total = self.total_tasks.max(1) as f64;
        (self.completed_tasks as f64 / total * 100.0).round() as u32
    }

    pub fn streak_days(&self) -> u32 {
        STREAK_DAYS
    }

    /// Tallest bar, for chart scaling
    pub fn max_minutes(&self) -> u32 {
        self.week.iter().map(|d| d.minutes).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TaskKind;

    fn task(minutes: u32, completed: bool) -> StudyTask {
        StudyTask {
            id: StudyTask::generate_id(),
            subject: "Math".to_string(),
            topic: "Geometry".to_string(),
            kind: TaskKind::Study,
            duration_minutes: minutes,
            completed,
            notes: None,
        }
    }

    #[test]
    fn test_empty_task_list() {
        let summary = ProgressSummary::from_tasks(&[], Weekday::Wed);
        assert_eq!(summary.completion_percentage(), 0);
        assert_eq!(summary.minutes_today, 0);
        assert_eq!(summary.total_tasks, 0);
    }

    #[test]
    fn test_completion_ratio_and_minutes() {
        let tasks = vec![task(50, true), task(10, true), task(30, false)];
        let summary = ProgressSummary::from_tasks(&tasks, Weekday::Mon);

        assert_eq!(summary.completed_tasks, 2);
        assert_eq!(summary.total_tasks, 3);
        assert_eq!(summary.completion_percentage(), 67);
        assert_eq!(summary.minutes_today, 60);
    }

    #[test]
    fn test_today_replaces_placeholder() {
        let tasks = vec![task(25, true)];
        let summary = ProgressSummary::from_tasks(&tasks, Weekday::Wed);

        let minutes: Vec<u32> = summary.week.iter().map(|d| d.minutes).collect();
        assert_eq!(minutes, vec![120, 90, 25, 45, 0, 0, 0]);
        let today: Vec<Weekday> = summary
            .week
            .iter()
            .filter(|d| d.is_today)
            .map(|d| d.day)
            .collect();
        assert_eq!(today, vec![Weekday::Wed]);
        assert_eq!(summary.week[0].label(), "Mon");
    }

    #[test]
    fn test_summary_depends_only_on_inputs() {
        let tasks = vec![task(40, true), task(20, false)];
        assert_eq!(
            ProgressSummary::from_tasks(&tasks, Weekday::Fri),
            ProgressSummary::from_tasks(&tasks, Weekday::Fri)
        );
        assert_eq!(ProgressSummary::from_tasks(&tasks, Weekday::Fri).max_minutes(), 150);
    }
}
