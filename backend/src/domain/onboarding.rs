//! # Onboarding Wizard
//!
//! Holds the form state of the three-step profile wizard:
//!
//! 1. **Identity**: name and grade (free text)
//! 2. **Subjects**: subject list plus the weak-subject selection
//! 3. **Schedule**: daily study hours
//!
//! There is no back navigation. Subject edits keep the weak-subject selection
//! a subset of the subject list, so finalizing never produces an invalid
//! [`Profile`].

use log::{debug, info};
use shared::{
    Profile, ProfileError, DAILY_HOURS_STEP, DEFAULT_DAILY_HOURS, DEFAULT_GRADE, DEFAULT_NAME,
    MIN_DAILY_HOURS,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnboardingStep {
    #[default]
    Identity,
    Subjects,
    Schedule,
}

impl OnboardingStep {
    pub const COUNT: usize = 3;

    /// Zero-based position, used for the progress dots
    pub fn index(&self) -> usize {
        match self {
            OnboardingStep::Identity => 0,
            OnboardingStep::Subjects => 1,
            OnboardingStep::Schedule => 2,
        }
    }

    pub fn next(&self) -> Option<OnboardingStep> {
        match self {
            OnboardingStep::Identity => Some(OnboardingStep::Subjects),
            OnboardingStep::Subjects => Some(OnboardingStep::Schedule),
            OnboardingStep::Schedule => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Identity => "Let's get to know you",
            OnboardingStep::Subjects => "What are you studying?",
            OnboardingStep::Schedule => "How much time do you have?",
        }
    }

    /// Label of the primary button
    pub fn primary_label(&self) -> &'static str {
        match self {
            OnboardingStep::Schedule => "Create My Plan",
            _ => "Next",
        }
    }
}

/// Result of pressing the primary button
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingAdvance {
    /// The current step is incomplete; nothing changed
    Blocked,
    Next(OnboardingStep),
    Complete(Profile),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingForm {
    step: OnboardingStep,
    name: String,
    grade: String,
    subjects: Vec<String>,
    weak_subjects: Vec<String>,
    daily_hours: f64,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            step: OnboardingStep::Identity,
            name: String::new(),
            grade: String::new(),
            subjects: Vec::new(),
            weak_subjects: Vec::new(),
            daily_hours: DEFAULT_DAILY_HOURS,
        }
    }
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
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

    pub fn is_weak(&self, subject: &str) -> bool {
        self.weak_subjects.iter().any(|s| s == subject)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_grade(&mut self, grade: impl Into<String>) {
        self.grade = grade.into();
    }

    /// Add a subject from raw input. Blank input and duplicates are ignored.
    ///
    /// Returns whether the list changed.
    pub fn add_subject(&mut self, raw: &str) -> bool {
        let subject = raw.trim();
        if subject.is_empty() || self.subjects.iter().any(|s| s == subject) {
            return false;
        }
        debug!("Adding subject '{}'", subject);
        self.subjects.push(subject.to_string());
        true
    }

    /// Remove a subject, dropping it from the weak selection as well
    pub fn remove_subject(&mut self, subject: &str) {
        self.subjects.retain(|s| s != subject);
        self.weak_subjects.retain(|s| s != subject);
    }

    /// Flip the weak flag of an entered subject. Unknown subjects are ignored.
    pub fn toggle_weak(&mut self, subject: &str) {
        if !self.subjects.iter().any(|s| s == subject) {
            return;
        }
        if self.is_weak(subject) {
            self.weak_subjects.retain(|s| s != subject);
        } else {
            self.weak_subjects.push(subject.to_string());
        }
    }

    pub fn increment_hours(&mut self) {
        self.daily_hours += DAILY_HOURS_STEP;
    }

    /// Step the hours down, never below the floor
    pub fn decrement_hours(&mut self) {
        self.daily_hours = (self.daily_hours - DAILY_HOURS_STEP).max(MIN_DAILY_HOURS);
    }

    /// Whether the primary button is enabled on the current step
    pub fn can_advance(&self) -> bool {
        match self.step {
            OnboardingStep::Identity => !self.name.trim().is_empty(),
            OnboardingStep::Subjects | OnboardingStep::Schedule => true,
        }
    }

    /// Move to the next step, or build the profile on the last one
    pub fn advance(&mut self) -> Result<OnboardingAdvance, ProfileError> {
        if !self.can_advance() {
            return Ok(OnboardingAdvance::Blocked);
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(OnboardingAdvance::Next(next))
            }
            None => self.finalize().map(OnboardingAdvance::Complete),
        }
    }

    /// Build the profile, filling in defaults for anything left blank
    pub fn finalize(&self) -> Result<Profile, ProfileError> {
        let name = non_blank_or(&self.name, DEFAULT_NAME);
        let grade = non_blank_or(&self.grade, DEFAULT_GRADE);
        let daily_hours = if self.daily_hours.is_finite() && self.daily_hours > 0.0 {
            self.daily_hours
        } else {
            DEFAULT_DAILY_HOURS
        };

        let profile = Profile::new(
            name,
            grade,
            self.subjects.clone(),
            self.weak_subjects.clone(),
            daily_hours,
        )?;
        info!(
            "Onboarding complete ({} subjects, {} weak, {} hours)",
            profile.subjects().len(),
            profile.weak_subjects().len(),
            profile.daily_hours()
        );
        Ok(profile)
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_at_schedule() -> OnboardingForm {
        let mut form = OnboardingForm::new();
        form.set_name("Alex");
        form.advance().unwrap();
        form.advance().unwrap();
        assert_eq!(form.step(), OnboardingStep::Schedule);
        form
    }

    #[test]
    fn test_identity_step_requires_name() {
        let mut form = OnboardingForm::new();
        assert!(!form.can_advance());
        assert_eq!(form.advance().unwrap(), OnboardingAdvance::Blocked);
        assert_eq!(form.step(), OnboardingStep::Identity);

        form.set_name("   ");
        assert!(!form.can_advance());

        form.set_name("Alex");
        assert_eq!(
            form.advance().unwrap(),
            OnboardingAdvance::Next(OnboardingStep::Subjects)
        );
    }

    #[test]
    fn test_add_subject_trims_and_ignores_blank_and_duplicates() {
        let mut form = OnboardingForm::new();
        assert!(form.add_subject("  Math "));
        assert!(!form.add_subject("Math"));
        assert!(!form.add_subject("   "));
        assert!(form.add_subject("History"));

        assert_eq!(form.subjects(), &["Math".to_string(), "History".to_string()]);
    }

    #[test]
    fn test_weak_selection_restricted_to_subjects() {
        let mut form = OnboardingForm::new();
        form.add_subject("Math");
        form.toggle_weak("Art");
        assert!(form.weak_subjects().is_empty());

        form.toggle_weak("Math");
        assert!(form.is_weak("Math"));
        form.toggle_weak("Math");
        assert!(!form.is_weak("Math"));
    }

    #[test]
    fn test_removing_subject_removes_weak_flag() {
        let mut form = OnboardingForm::new();
        form.add_subject("Math");
        form.add_subject("Physics");
        form.toggle_weak("Physics");

        form.remove_subject("Physics");
        assert_eq!(form.subjects(), &["Math".to_string()]);
        assert!(form.weak_subjects().is_empty());
    }

    #[test]
    fn test_hours_stepper_has_floor() {
        let mut form = OnboardingForm::new();
        assert_eq!(form.daily_hours(), 2.0);

        form.increment_hours();
        assert_eq!(form.daily_hours(), 2.5);

        for _ in 0..10 {
            form.decrement_hours();
        }
        assert_eq!(form.daily_hours(), MIN_DAILY_HOURS);
    }

    #[test]
    fn test_finalize_builds_valid_profile() {
        let mut form = form_at_schedule();
        form.set_grade("10th Grade");
        form.add_subject("Math");
        form.add_subject("History");
        form.toggle_weak("History");
        form.decrement_hours();

        let OnboardingAdvance::Complete(profile) = form.advance().unwrap() else {
            panic!("expected a finished profile");
        };
        assert_eq!(profile.name(), "Alex");
        assert_eq!(profile.grade(), "10th Grade");
        assert_eq!(profile.weak_subjects(), &["History".to_string()]);
        assert!(profile
            .weak_subjects()
            .iter()
            .all(|w| profile.subjects().contains(w)));
        assert!(profile.daily_hours() >= MIN_DAILY_HOURS);
        assert_eq!(profile.daily_hours(), 1.5);
        assert!(profile.is_setup());
    }

    #[test]
    fn test_finalize_applies_defaults() {
        let form = OnboardingForm::new();
        let profile = form.finalize().unwrap();

        assert_eq!(profile.name(), DEFAULT_NAME);
        assert_eq!(profile.grade(), DEFAULT_GRADE);
        assert_eq!(profile.daily_hours(), DEFAULT_DAILY_HOURS);
        assert!(profile.subjects().is_empty());
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(OnboardingStep::Identity.primary_label(), "Next");
        assert_eq!(OnboardingStep::Subjects.primary_label(), "Next");
        assert_eq!(OnboardingStep::Schedule.primary_label(), "Create My Plan");
        assert_eq!(OnboardingStep::Schedule.index(), OnboardingStep::COUNT - 1);
    }
}
