use backend::PlannerDisplay;
use shared::StudyTask;
use yew::prelude::*;

use crate::components::StudyCard;
use crate::services::date_utils::{format_plan_date, today};

#[derive(Properties, PartialEq)]
pub struct PlannerViewProps {
    pub tasks: Vec<StudyTask>,
    pub display: PlannerDisplay,
    pub is_generating: bool,
    pub can_regenerate: bool,
    pub on_toggle: Callback<String>,
    pub on_regenerate: Callback<()>,
    pub on_start_exam: Callback<()>,
}

/// Today's task list
#[function_component(PlannerView)]
pub fn planner_view(props: &PlannerViewProps) -> Html {
    let date_label = use_memo((), |_| format_plan_date(today()));

    let body = match props.display {
        PlannerDisplay::Generating => html! {
            <div class="planner-empty">
                <div class="spinner"></div>
                <p>{"Generating your perfect schedule..."}</p>
            </div>
        },
        PlannerDisplay::Empty => html! {
            <div class="planner-empty">
                <i class="fas fa-magic planner-empty-icon"></i>
                <p>{"No plan yet. Tap the sparkle button!"}</p>
            </div>
        },
        PlannerDisplay::Tasks => html! {
            <>
                <div class="task-list">
                    {for props.tasks.iter().map(|task| html! {
                        <StudyCard key={task.id.clone()} task={task.clone()} on_toggle={props.on_toggle.clone()} />
                    })}
                </div>

                <div class="exam-cta">
                    <h3>{"Ready to test yourself?"}</h3>
                    <p>{"Take a quick 10-question quiz based on your study plan."}</p>
                    <button
                        class="secondary-button"
                        onclick={props.on_start_exam.reform(|_: MouseEvent| ())}
                    >
                        {"Start Daily Exam"}
                    </button>
                </div>
            </>
        },
    };

    html! {
        <div class="planner">
            <div class="planner-header">
                <div>
                    <h1>{"Today's Plan"}</h1>
                    <p class="planner-date">{(*date_label).clone()}</p>
                </div>
                <button
                    class={classes!("regenerate-button", props.is_generating.then_some("busy"))}
                    disabled={!props.can_regenerate}
                    onclick={props.on_regenerate.reform(|_: MouseEvent| ())}
                    title="Regenerate plan"
                >
                    if props.is_generating {
                        <span class="spinner small"></span>
                    } else {
                        <i class="fas fa-magic"></i>
                    }
                </button>
            </div>

            {body}
        </div>
    }
}
