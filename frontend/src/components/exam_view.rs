use std::rc::Rc;

use backend::{ExamPhase, OptionState};
use shared::GenerationConfig;
use yew::prelude::*;

use crate::hooks::use_exam_session;

#[derive(Properties, PartialEq)]
pub struct ExamViewProps {
    pub config: Rc<GenerationConfig>,
    pub subjects: Vec<String>,
    pub grade: String,
    pub on_close: Callback<()>,
}

fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Open => "option-open",
        OptionState::Correct => "option-correct",
        OptionState::Incorrect => "option-incorrect",
        OptionState::Dimmed => "option-dimmed",
    }
}

/// Full-screen exam mode
#[function_component(ExamView)]
pub fn exam_view(props: &ExamViewProps) -> Html {
    let exam = use_exam_session(props.config.clone(), props.subjects.clone(), props.grade.clone());
    let session = &exam.session;
    let close = props.on_close.reform(|_: MouseEvent| ());

    match session.phase() {
        ExamPhase::Loading => html! {
            <div class="exam-status">
                <div class="spinner large"></div>
                <h2>{"Generating Your Exam..."}</h2>
                <p>{format!("Crafting questions based on {}", props.subjects.join(", "))}</p>
            </div>
        },
        ExamPhase::Error { message } => html! {
            <div class="exam-status">
                <i class="fas fa-exclamation-circle exam-error-icon"></i>
                <p class="exam-error">{message.clone()}</p>
                <button class="link-button" onclick={close}>{"Return to Planner"}</button>
            </div>
        },
        ExamPhase::Completed => {
            let Some(summary) = session.summary() else {
                return html! {};
            };
            html! {
                <div class="exam-status">
                    <i class="fas fa-trophy exam-trophy"></i>
                    <h2>{"Exam Complete!"}</h2>
                    <p>{"You scored"}</p>
                    <div class="exam-percentage">{format!("{}%", summary.percentage)}</div>
                    <p class="exam-score">{format!("{} out of {} correct", summary.score, summary.total)}</p>
                    <div class="score-bar">
                        <div
                            class={classes!("score-bar-fill", summary.band.css_class())}
                            style={format!("width: {}%", summary.percentage)}
                        ></div>
                    </div>
                    <button class="primary-button" onclick={close}>{"Back to Planner"}</button>
                </div>
            }
        }
        ExamPhase::Ready | ExamPhase::Answered => {
            let Some(question) = session.current_question() else {
                return html! {};
            };
            let answered = *session.phase() == ExamPhase::Answered;

            html! {
                <div class="exam">
                    <div class="exam-header">
                        <span class="exam-position">
                            <i class="fas fa-book-open"></i>
                            {format!("Question {}/{}", session.position(), session.question_count())}
                        </span>
                        <button class="link-button" onclick={close}>{"Quit"}</button>
                    </div>
                    <div class="exam-progress">
                        <div class="exam-progress-fill" style={format!("width: {}%", session.progress() * 100.0)}></div>
                    </div>

                    <div class="exam-body">
                        <div class="question-card">
                            <h2>{question.question().to_string()}</h2>
                        </div>

                        <div class="option-list">
                            {for question.options().iter().enumerate().map(|(index, option)| {
                                let state = session.option_state(index);
                                let onclick = exam.select.reform(move |_: MouseEvent| index);
                                html! {
                                    <button
                                        class={classes!("option", option_class(state))}
                                        disabled={answered}
                                        {onclick}
                                    >
                                        <span>{option.clone()}</span>
                                        if state == OptionState::Correct {
                                            <i class="fas fa-check-circle"></i>
                                        }
                                        if state == OptionState::Incorrect {
                                            <i class="fas fa-times-circle"></i>
                                        }
                                    </button>
                                }
                            })}
                        </div>

                        if answered {
                            if let Some(explanation) = question.explanation() {
                                <div class="explanation">
                                    <span class="explanation-title">{"Explanation:"}</span>
                                    {explanation.to_string()}
                                </div>
                            }
                        }
                    </div>

                    if answered {
                        <div class="exam-footer">
                            <button class="primary-button" onclick={exam.next.reform(|_: MouseEvent| ())}>
                                {session.next_label()}
                                <i class="fas fa-arrow-right"></i>
                            </button>
                        </div>
                    }
                </div>
            }
        }
    }
}
