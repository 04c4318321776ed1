use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Smallest daily study budget the onboarding stepper allows, in hours
pub const MIN_DAILY_HOURS: f64 = 0.5;
/// Increment used by the daily hours stepper
pub const DAILY_HOURS_STEP: f64 = 0.5;
/// Daily hours used when the user never touched the stepper
pub const DEFAULT_DAILY_HOURS: f64 = 2.0;
/// Name used when onboarding finishes without one
pub const DEFAULT_NAME: &str = "Student";
/// Grade label used when onboarding finishes without one
pub const DEFAULT_GRADE: &str = "General";
/// Every exam question carries exactly this many options
pub const OPTIONS_PER_QUESTION: usize = 4;

/// The user's onboarding-collected attributes.
///
/// Fields are private so that a `Profile` can only be obtained through
/// [`Profile::new`] (or deserialization, which goes through the same checks):
/// subjects are unique and weak subjects are always a subset of subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProfileRecord")]
pub struct Profile {
    name: String,
    grade: String,
    subjects: Vec<String>,
    weak_subjects: Vec<String>,
    daily_hours: f64,
    is_setup: bool,
}

/// Unvalidated profile shape as it appears in storage
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub name: String,
    pub grade: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub weak_subjects: Vec<String>,
    pub daily_hours: f64,
    #[serde(default = "default_is_setup")]
    pub is_setup: bool,
}

fn default_is_setup() -> bool {
    true
}

/// Reasons a profile can be rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("subject names cannot be empty")]
    EmptySubject,
    #[error("subject '{0}' is listed more than once")]
    DuplicateSubject(String),
    #[error("weak subject '{0}' is not one of the profile's subjects")]
    UnknownWeakSubject(String),
    #[error("daily hours must be at least 0.5, got {0}")]
    InvalidDailyHours(f64),
}

impl Profile {
    /// Validated constructor. Subject names are trimmed before checking.
    pub fn new(
        name: impl Into<String>,
        grade: impl Into<String>,
        subjects: Vec<String>,
        weak_subjects: Vec<String>,
        daily_hours: f64,
    ) -> Result<Self, ProfileError> {
        let mut clean_subjects: Vec<String> = Vec::with_capacity(subjects.len());
        for subject in subjects {
            let subject = subject.trim().to_string();
            if subject.is_empty() {
                return Err(ProfileError::EmptySubject);
            }
            if clean_subjects.contains(&subject) {
                return Err(ProfileError::DuplicateSubject(subject));
            }
            clean_subjects.push(subject);
        }

        let mut clean_weak: Vec<String> = Vec::with_capacity(weak_subjects.len());
        for subject in weak_subjects {
            let subject = subject.trim().to_string();
            if !clean_subjects.contains(&subject) {
                return Err(ProfileError::UnknownWeakSubject(subject));
            }
            if clean_weak.contains(&subject) {
                return Err(ProfileError::DuplicateSubject(subject));
            }
            clean_weak.push(subject);
        }

        if !daily_hours.is_finite() || daily_hours < MIN_DAILY_HOURS {
            return Err(ProfileError::InvalidDailyHours(daily_hours));
        }

        Ok(Self {
            name: name.into(),
            grade: grade.into(),
            subjects: clean_subjects,
            weak_subjects: clean_weak,
            daily_hours,
            is_setup: true,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn weak_subjects(&self) -> &[String] {
        &self.weak_subjects
    }

    pub fn daily_hours(&self) -> f64 {
        self.daily_hours
    }

    pub fn is_setup(&self) -> bool {
        self.is_setup
    }

    /// Whether the user flagged this subject as difficult
    pub fn is_weak(&self, subject: &str) -> bool {
        self.weak_subjects.iter().any(|s| s == subject)
    }

    /// Target total plan length in minutes
    pub fn daily_minutes(&self) -> u32 {
        (self.daily_hours * 60.0).round() as u32
    }
}

impl TryFrom<ProfileRecord> for Profile {
    type Error = ProfileError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        let mut profile = Profile::new(
            record.name,
            record.grade,
            record.subjects,
            record.weak_subjects,
            record.daily_hours,
        )?;
        profile.is_setup = record.is_setup;
        Ok(profile)
    }
}

/// Kind of a scheduled block in the daily plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    #[default]
    Study,
    Break,
    Revision,
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Study => "Study",
            TaskKind::Break => "Break",
            TaskKind::Revision => "Revision",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scheduled unit of a daily study plan.
///
/// Only `completed` changes after creation; the whole list is replaced when a
/// new plan is generated. Deserialization rejects a zero duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StudyTaskRecord")]
pub struct StudyTask {
    /// Task ID in format: "task::<uuid>"
    pub id: String,
    pub subject: String,
    pub topic: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    /// Always positive
    pub duration_minutes: u32,
    pub completed: bool,
    /// Short tip or focus area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Unvalidated task shape as it appears in storage
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyTaskRecord {
    pub id: String,
    pub subject: String,
    pub topic: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub duration_minutes: u32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Reasons a stored task is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    #[error("task '{0}' has a zero duration")]
    ZeroDuration(String),
}

impl TryFrom<StudyTaskRecord> for StudyTask {
    type Error = TaskError;

    fn try_from(record: StudyTaskRecord) -> Result<Self, Self::Error> {
        if record.duration_minutes == 0 {
            return Err(TaskError::ZeroDuration(record.id));
        }
        Ok(Self {
            id: record.id,
            subject: record.subject,
            topic: record.topic,
            kind: record.kind,
            duration_minutes: record.duration_minutes,
            completed: record.completed,
            notes: record.notes,
        })
    }
}

impl StudyTask {
    /// Generate a fresh, batch-unique task ID
    pub fn generate_id() -> String {
        format!("task::{}", Uuid::new_v4().simple())
    }
}

/// Reasons a generated question cannot be used
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuestionError {
    #[error("expected 4 options, got {0}")]
    WrongOptionCount(usize),
    #[error("correct option index {0} is out of range")]
    CorrectIndexOutOfRange(i64),
}

/// A four-option multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestion {
    id: String,
    question: String,
    options: [String; OPTIONS_PER_QUESTION],
    correct_answer_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

impl ExamQuestion {
    /// Build a question with a freshly generated ID
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer_index: i64,
        explanation: Option<String>,
    ) -> Result<Self, QuestionError> {
        let option_count = options.len();
        let options: [String; OPTIONS_PER_QUESTION] = options
            .try_into()
            .map_err(|_| QuestionError::WrongOptionCount(option_count))?;

        if correct_answer_index < 0 || correct_answer_index as usize >= OPTIONS_PER_QUESTION {
            return Err(QuestionError::CorrectIndexOutOfRange(correct_answer_index));
        }

        Ok(Self {
            id: Self::generate_id(),
            question: question.into(),
            options,
            correct_answer_index: correct_answer_index as usize,
            explanation,
        })
    }

    /// Generate a fresh question ID in format: "question::<uuid>"
    pub fn generate_id() -> String {
        format!("question::{}", Uuid::new_v4().simple())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String; OPTIONS_PER_QUESTION] {
        &self.options
    }

    pub fn correct_answer_index(&self) -> usize {
        self.correct_answer_index
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_answer_index
    }
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    /// Role name on the generation service wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// A single entry of the tutor conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Self::generate_id(),
            role,
            text: text.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text)
    }

    /// Generate a message ID in format: "message::<uuid>"
    pub fn generate_id() -> String {
        format!("message::{}", Uuid::new_v4().simple())
    }
}

/// Views the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppView {
    Onboarding,
    Planner,
    Chat,
    Progress,
    Settings,
    Exam,
}

impl AppView {
    /// Views reachable from the bottom navigation bar, in display order
    pub const NAVIGATION: [AppView; 4] = [
        AppView::Planner,
        AppView::Chat,
        AppView::Progress,
        AppView::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppView::Onboarding => "Welcome",
            AppView::Planner => "Planner",
            AppView::Chat => "Tutor",
            AppView::Progress => "Progress",
            AppView::Settings => "Settings",
            AppView::Exam => "Exam",
        }
    }

    /// Exam mode and onboarding take over the whole screen
    pub fn shows_navigation(&self) -> bool {
        !matches!(self, AppView::Exam | AppView::Onboarding)
    }
}

/// Settings for talking to the text generation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the service, without a trailing slash
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Number of questions requested per exam
    pub exam_question_count: usize,
    pub enable_debug_logging: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            api_key: None,
            exam_question_count: 10,
            enable_debug_logging: false,
        }
    }
}

impl GenerationConfig {
    /// Full URL of the content generation method for the configured model
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// The API key, if one is set and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

/// A text fragment of a content block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// A role-tagged sequence of parts, used both for prompts and replies
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn with_role(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.as_str().to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role(ChatRole::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::with_role(ChatRole::Model, text)
    }

    /// Untagged content, used for system instructions
    pub fn instruction(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Concatenated text of all parts
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

impl From<&ChatMessage> for Content {
    fn from(message: &ChatMessage) -> Self {
        Content::with_role(message.role, message.text.clone())
    }
}

/// Output shaping options for a generation request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

/// Request body for a single content generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationSettings>,
}

/// One generated alternative
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Response body of a content generation call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, or None when the service produced nothing
    pub fn text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(Content::text)
            .filter(|text| !text.trim().is_empty())
    }
}
