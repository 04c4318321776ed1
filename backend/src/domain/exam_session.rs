//! # Exam Session
//!
//! State machine for one quiz attempt:
//!
//! ```text
//! Loading ──► Error (terminal)
//!    │
//!    ▼
//!  Ready ──select──► Answered ──next──► Ready (following question)
//!                        │
//!                        └──next on last──► Completed
//! ```
//!
//! Only the first selection on a question counts. The summary is computed once
//! when the session completes and is stored, not re-derived.

use log::{info, warn};
use shared::{ExamQuestion, OPTIONS_PER_QUESTION};

use crate::io::GenerationError;

/// Shown on the full-screen error state
pub const EXAM_FAILURE_MESSAGE: &str = "Could not generate exam. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum ExamPhase {
    Loading,
    Error { message: String },
    Ready,
    Answered,
    Completed,
}

/// Rendering state of one answer option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Selectable
    Open,
    /// The correct option, revealed after answering
    Correct,
    /// The user's wrong choice
    Incorrect,
    /// Any other option after answering
    Dimmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            70.. => ScoreBand::Strong,
            40.. => ScoreBand::Fair,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "band-strong",
            ScoreBand::Fair => "band-fair",
            ScoreBand::NeedsWork => "band-needs-work",
        }
    }
}

/// Final result of a completed session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub band: ScoreBand,
}

impl ExamSummary {
    fn compute(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            (score as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            score,
            total,
            percentage,
            band: ScoreBand::from_percentage(percentage),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExamSession {
    phase: ExamPhase,
    questions: Vec<ExamQuestion>,
    current: usize,
    selected: Option<usize>,
    score: usize,
    summary: Option<ExamSummary>,
}

impl Default for ExamSession {
    fn default() -> Self {
        Self {
            phase: ExamPhase::Loading,
            questions: Vec::new(),
            current: 0,
            selected: None,
            score: 0,
            summary: None,
        }
    }
}

impl ExamSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ExamPhase {
        &self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn summary(&self) -> Option<&ExamSummary> {
        self.summary.as_ref()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&ExamQuestion> {
        match self.phase {
            ExamPhase::Ready | ExamPhase::Answered => self.questions.get(self.current),
            _ => None,
        }
    }

    /// One-based position of the current question
    pub fn position(&self) -> usize {
        self.current + 1
    }

    /// Fraction of the exam reached, for the progress bar
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.position() as f64 / self.questions.len() as f64
    }

    pub fn is_last_question(&self) -> bool {
        self.position() >= self.questions.len()
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last_question() {
            "Finish Exam"
        } else {
            "Next Question"
        }
    }

    /// Settle the loading phase with the generation result. An empty set is
    /// treated as a failure. Ignored outside `Loading`.
    pub fn load(&mut self, result: Result<Vec<ExamQuestion>, GenerationError>) {
        if self.phase != ExamPhase::Loading {
            warn!("Ignoring exam questions delivered in {:?}", self.phase);
            return;
        }

        match result {
            Ok(questions) if !questions.is_empty() => {
                info!("Exam ready with {} questions", questions.len());
                self.questions = questions;
                self.phase = ExamPhase::Ready;
            }
            Ok(_) => self.fail("no questions were returned".to_string()),
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Answer the current question. Returns whether the selection was taken.
    pub fn select(&mut self, option: usize) -> bool {
        if self.phase != ExamPhase::Ready || option >= OPTIONS_PER_QUESTION {
            return false;
        }
        let Some(question) = self.questions.get(self.current) else {
            return false;
        };

        if question.is_correct(option) {
            self.score += 1;
        }
        self.selected = Some(option);
        self.phase = ExamPhase::Answered;
        true
    }

    /// Move past an answered question, completing the session after the last one
    pub fn next(&mut self) {
        if self.phase != ExamPhase::Answered {
            return;
        }

        if self.is_last_question() {
            let summary = ExamSummary::compute(self.score, self.questions.len());
            info!(
                "Exam completed: {}/{} ({}%)",
                summary.score, summary.total, summary.percentage
            );
            self.summary = Some(summary);
            self.phase = ExamPhase::Completed;
        } else {
            self.current += 1;
            self.selected = None;
            self.phase = ExamPhase::Ready;
        }
    }

    pub fn option_state(&self, option: usize) -> OptionState {
        let Some(question) = self.current_question() else {
            return OptionState::Open;
        };
        if self.phase != ExamPhase::Answered {
            return OptionState::Open;
        }

        if question.is_correct(option) {
            OptionState::Correct
        } else if self.selected == Some(option) {
            OptionState::Incorrect
        } else {
            OptionState::Dimmed
        }
    }

    fn fail(&mut self, reason: String) {
        warn!("Exam could not start: {}", reason);
        self.phase = ExamPhase::Error {
            message: EXAM_FAILURE_MESSAGE.to_string(),
        };
    }
}
