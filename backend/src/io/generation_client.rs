//! # Generation Client
//!
//! Issues the three kinds of requests the application makes to the text
//! generation service: a study plan, an exam, and a tutor chat reply. Each call
//! is a single request/response cycle with no retry; the client owns no state
//! beyond its transport.

use log::{debug, error, info, warn};
use serde::Deserialize;
use shared::{
    Content, ExamQuestion, GenerateContentRequest, GenerationConfig, Profile, StudyTask, TaskKind,
};

use super::error::GenerationError;
use super::prompts;
use super::transport::GenerationTransport;

/// Reply used when the tutor answers with no text
pub const CHAT_EMPTY_REPLY: &str = "I'm having trouble thinking right now. Can you ask again?";

/// Reply used when the tutor request fails
pub const CHAT_FAILURE_REPLY: &str =
    "Sorry, I lost connection to the library! Please check your internet and try again.";

/// Task shape produced by the service, before IDs and completion are added
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedTask {
    subject: String,
    topic: String,
    #[serde(rename = "type")]
    kind: TaskKind,
    duration_minutes: i64,
    #[serde(default)]
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedQuestion {
    question: String,
    options: Vec<String>,
    correct_answer_index: i64,
    #[serde(default)]
    explanation: Option<String>,
}

/// Client for the generation service
#[derive(Debug, Clone)]
pub struct GenerationClient<T> {
    transport: T,
    exam_question_count: usize,
}

impl<T: GenerationTransport> GenerationClient<T> {
    pub fn new(transport: T, config: &GenerationConfig) -> Self {
        Self {
            transport,
            exam_question_count: config.exam_question_count,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Produce today's plan for `profile`.
    ///
    /// An empty list is a successful result ("nothing planned"), not an error.
    /// Items with a non-positive duration are dropped.
    pub async fn generate_plan(&self, profile: &Profile) -> Result<Vec<StudyTask>, GenerationError> {
        info!(
            "Requesting study plan ({} subjects, {} hours)",
            profile.subjects().len(),
            profile.daily_hours()
        );

        let request = GenerateContentRequest {
            contents: vec![Content::user(prompts::plan_prompt(profile))],
            system_instruction: Some(Content::instruction(prompts::PLANNER_INSTRUCTION)),
            generation_config: Some(prompts::json_output(prompts::plan_schema())),
        };

        let text = self
            .transport
            .generate_content(request)
            .await
            .inspect_err(|e| error!("Error generating plan: {}", e))?
            .text()
            .unwrap_or_else(|| "[]".to_string());

        let generated: Vec<GeneratedTask> = serde_json::from_str(&text)
            .inspect_err(|e| error!("Generated plan did not parse: {}", e))?;

        let tasks: Vec<StudyTask> = generated
            .into_iter()
            .filter_map(|task| {
                let Ok(duration_minutes) = u32::try_from(task.duration_minutes) else {
                    warn!("Dropping task '{}' with duration {}", task.topic, task.duration_minutes);
                    return None;
                };
                if duration_minutes == 0 {
                    warn!("Dropping task '{}' with zero duration", task.topic);
                    return None;
                }

                Some(StudyTask {
                    id: StudyTask::generate_id(),
                    subject: task.subject,
                    topic: task.topic,
                    kind: task.kind,
                    duration_minutes,
                    completed: false,
                    notes: task.notes.filter(|n| !n.trim().is_empty()),
                })
            })
            .collect();

        info!("Generated plan with {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Produce a multiple-choice exam over `subjects`.
    ///
    /// Questions without exactly four options or with an out-of-range answer
    /// index are dropped; if nothing usable remains the call fails with
    /// [`GenerationError::NoQuestions`].
    pub async fn generate_exam(
        &self,
        subjects: &[String],
        grade: &str,
    ) -> Result<Vec<ExamQuestion>, GenerationError> {
        info!(
            "Requesting {} exam questions over {} subjects",
            self.exam_question_count,
            subjects.len()
        );

        let request = GenerateContentRequest {
            contents: vec![Content::user(prompts::exam_prompt(
                subjects,
                grade,
                self.exam_question_count,
            ))],
            system_instruction: Some(Content::instruction(prompts::EXAMINER_INSTRUCTION)),
            generation_config: Some(prompts::json_output(prompts::exam_schema())),
        };

        let text = self
            .transport
            .generate_content(request)
            .await
            .inspect_err(|e| error!("Error generating exam: {}", e))?
            .text()
            .unwrap_or_else(|| "[]".to_string());

        let generated: Vec<GeneratedQuestion> = serde_json::from_str(&text)
            .inspect_err(|e| error!("Generated exam did not parse: {}", e))?;

        let questions: Vec<ExamQuestion> = generated
            .into_iter()
            .filter_map(|q| {
                ExamQuestion::new(q.question, q.options, q.correct_answer_index, q.explanation)
                    .inspect_err(|e| warn!("Dropping generated question: {}", e))
                    .ok()
            })
            .collect();

        if questions.is_empty() {
            error!("Exam generation produced no usable questions");
            return Err(GenerationError::NoQuestions);
        }

        info!("Generated exam with {} questions", questions.len());
        Ok(questions)
    }

    /// Ask the tutor for a reply to `message`, given the conversation so far.
    ///
    /// Never fails: errors are logged and replaced by displayable fallback text.
    pub async fn chat(&self, history: Vec<Content>, message: &str) -> String {
        debug!("Sending chat message with {} history entries", history.len());

        let mut contents = history;
        contents.push(Content::user(message));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::instruction(prompts::TUTOR_INSTRUCTION)),
            generation_config: None,
        };

        match self.transport.generate_content(request).await {
            Ok(response) => response.text().unwrap_or_else(|| {
                warn!("Tutor returned an empty reply");
                CHAT_EMPTY_REPLY.to_string()
            }),
            Err(e) => {
                error!("Chat error: {}", e);
                CHAT_FAILURE_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use async_trait::async_trait;
    use shared::{Candidate, GenerateContentResponse};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Transport that replays scripted outcomes and records every request
    #[derive(Clone, Default)]
    pub struct ScriptedTransport {
        replies: Rc<RefCell<VecDeque<Result<Option<String>, GenerationError>>>>,
        pub requests: Rc<RefCell<Vec<GenerateContentRequest>>>,
    }

    impl ScriptedTransport {
        pub fn replying(text: &str) -> Self {
            let transport = Self::default();
            transport.push_text(text);
            transport
        }

        pub fn failing(error: GenerationError) -> Self {
            let transport = Self::default();
            transport.replies.borrow_mut().push_back(Err(error));
            transport
        }

        pub fn silent() -> Self {
            let transport = Self::default();
            transport.replies.borrow_mut().push_back(Ok(None));
            transport
        }

        pub fn push_text(&self, text: &str) {
            self.replies.borrow_mut().push_back(Ok(Some(text.to_string())));
        }

        pub fn last_request(&self) -> GenerateContentRequest {
            self.requests.borrow().last().cloned().expect("no request was sent")
        }
    }

    #[async_trait(?Send)]
    impl GenerationTransport for ScriptedTransport {
        async fn generate_content(
            &self,
            request: GenerateContentRequest,
        ) -> Result<GenerateContentResponse, GenerationError> {
            self.requests.borrow_mut().push(request);
            let reply = self
                .replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(GenerationError::EmptyResponse))?;

            Ok(GenerateContentResponse {
                candidates: reply
                    .map(|text| Candidate {
                        content: Some(Content::model(text)),
                        finish_reason: Some("STOP".to_string()),
                    })
                    .into_iter()
                    .collect(),
            })
        }
    }
}
