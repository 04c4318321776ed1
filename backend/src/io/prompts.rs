//! Instruction text and response schemas for the three generation calls.

use serde_json::{json, Value};
use shared::{GenerationSettings, Profile};

pub const PLANNER_INSTRUCTION: &str =
    "You are an expert academic planner. You create balanced, realistic study schedules for students.";

pub const EXAMINER_INSTRUCTION: &str =
    "You are a strict examiner. Generate high-quality academic questions.";

pub const TUTOR_INSTRUCTION: &str = "You are a friendly, encouraging, and knowledgeable student tutor.
- Explain concepts simply and clearly.
- Give practical examples.
- Keep answers concise but helpful.
- If the student seems stressed, offer motivation.";

/// Prompt asking for a one-day schedule sized to the profile's hour budget
pub fn plan_prompt(profile: &Profile) -> String {
    format!(
        "Student Info:
Grade: {grade}
Subjects: {subjects}
Weak Subjects: {weak}
Daily Study Time Available: {hours} hours

Generate a daily study schedule.
Rules:
- Balance workload based on subjects.
- Add short breaks (5-10 mins) every 50 minutes of study.
- Include at least one revision slot.
- Prioritize weak subjects with slightly more time or earlier slots.
- Total duration of tasks (study + breaks) should roughly equal {minutes} minutes.

Return a list of tasks.",
        grade = profile.grade(),
        subjects = profile.subjects().join(", "),
        weak = profile.weak_subjects().join(", "),
        hours = profile.daily_hours(),
        minutes = profile.daily_minutes(),
    )
}

/// Prompt asking for `count` four-option questions
pub fn exam_prompt(subjects: &[String], grade: &str, count: usize) -> String {
    format!(
        "Generate {count} multiple-choice questions (MCQs) for a {grade} student covering the following subjects: {subjects}.

Requirements:
- 4 options per question.
- One correct answer.
- Mixed difficulty levels (Easy, Medium, Hard).
- Provide a short explanation for the correct answer.",
        subjects = subjects.join(", "),
    )
}

pub fn plan_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "subject": { "type": "STRING", "description": "The subject name or 'Break' or 'Revision'" },
                "topic": { "type": "STRING", "description": "Specific topic to cover" },
                "type": { "type": "STRING", "enum": ["study", "break", "revision"] },
                "durationMinutes": { "type": "INTEGER", "description": "Duration in minutes" },
                "notes": { "type": "STRING", "description": "Short tip or focus area" }
            },
            "required": ["subject", "topic", "type", "durationMinutes"]
        }
    })
}

pub fn exam_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "question": { "type": "STRING" },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Exactly 4 options"
                },
                "correctAnswerIndex": {
                    "type": "INTEGER",
                    "description": "Index of the correct option (0-3)"
                },
                "explanation": { "type": "STRING" }
            },
            "required": ["question", "options", "correctAnswerIndex"]
        }
    })
}

/// Ask for a JSON body matching `schema`
pub fn json_output(schema: Value) -> GenerationSettings {
    GenerationSettings {
        response_mime_type: Some("application/json".to_string()),
        response_schema: Some(schema),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_prompt_embeds_profile() {
        let profile = Profile::new(
            "Alex",
            "10th Grade",
            vec!["Math".to_string(), "Physics".to_string()],
            vec!["Physics".to_string()],
            2.5,
        )
        .unwrap();

        let prompt = plan_prompt(&profile);
        assert!(prompt.contains("Grade: 10th Grade"));
        assert!(prompt.contains("Subjects: Math, Physics"));
        assert!(prompt.contains("Weak Subjects: Physics"));
        assert!(prompt.contains("2.5 hours"));
        assert!(prompt.contains("roughly equal 150 minutes"));
        assert!(prompt.contains("at least one revision slot"));
    }

    #[test]
    fn test_exam_prompt_requests_count() {
        let prompt = exam_prompt(&["Chemistry".to_string()], "Year 9", 10);
        assert!(prompt.starts_with("Generate 10 multiple-choice questions"));
        assert!(prompt.contains("for a Year 9 student"));
        assert!(prompt.contains("subjects: Chemistry."));
    }

    #[test]
    fn test_schemas_mark_required_fields() {
        assert_eq!(
            plan_schema()["items"]["required"],
            json!(["subject", "topic", "type", "durationMinutes"])
        );
        assert_eq!(
            exam_schema()["items"]["required"],
            json!(["question", "options", "correctAnswerIndex"])
        );
        assert_eq!(
            plan_schema()["items"]["properties"]["type"]["enum"],
            json!(["study", "break", "revision"])
        );
    }
}
