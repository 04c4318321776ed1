use std::rc::Rc;

use backend::{ExamSession, GenerationError, RequestSlot};
use shared::{ExamQuestion, GenerationConfig};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::study_client;

pub enum ExamAction {
    Loaded(Result<Vec<ExamQuestion>, GenerationError>),
    Select(usize),
    Next,
}

#[derive(Clone, Default, PartialEq)]
pub struct ExamState(pub ExamSession);

impl Reducible for ExamState {
    type Action = ExamAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        match action {
            ExamAction::Loaded(result) => next.0.load(result),
            ExamAction::Select(option) => {
                next.0.select(option);
            }
            ExamAction::Next => next.0.next(),
        }
        Rc::new(next)
    }
}

pub struct UseExamSessionResult {
    pub session: ExamSession,
    pub select: Callback<usize>,
    pub next: Callback<()>,
}

/// Hook running one exam attempt. The question request is cancelled if the
/// view unmounts first.
#[hook]
pub fn use_exam_session(
    config: Rc<GenerationConfig>,
    subjects: Vec<String>,
    grade: String,
) -> UseExamSessionResult {
    let exam = use_reducer(ExamState::default);

    use_effect_with((config, subjects, grade), {
        let exam = exam.clone();

        move |(config, subjects, grade): &(Rc<GenerationConfig>, Vec<String>, String)| {
            let client = study_client(config.clone());
            let subjects = subjects.clone();
            let grade = grade.clone();

            let mut slot = RequestSlot::new("exam");
            let request = slot.begin(async move { client.generate_exam(&subjects, &grade).await });

            spawn_local(async move {
                if let Ok(result) = request.await {
                    exam.dispatch(ExamAction::Loaded(result));
                }
            });

            move || drop(slot)
        }
    });

    let select = {
        let exam = exam.clone();
        Callback::from(move |option: usize| exam.dispatch(ExamAction::Select(option)))
    };

    let next = {
        let exam = exam.clone();
        Callback::from(move |_: ()| exam.dispatch(ExamAction::Next))
    };

    UseExamSessionResult {
        session: exam.0.clone(),
        select,
        next,
    }
}
