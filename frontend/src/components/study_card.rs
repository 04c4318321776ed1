use shared::{StudyTask, TaskKind};
use yew::prelude::*;

use crate::services::date_utils::format_minutes;

#[derive(Properties, PartialEq)]
pub struct StudyCardProps {
    pub task: StudyTask,
    pub on_toggle: Callback<String>,
}

fn kind_icon(kind: TaskKind) -> &'static str {
    match kind {
        TaskKind::Study => "fas fa-book-open",
        TaskKind::Break => "fas fa-coffee",
        TaskKind::Revision => "fas fa-redo",
    }
}

fn kind_class(kind: TaskKind) -> &'static str {
    match kind {
        TaskKind::Study => "kind-study",
        TaskKind::Break => "kind-break",
        TaskKind::Revision => "kind-revision",
    }
}

#[function_component(StudyCard)]
pub fn study_card(props: &StudyCardProps) -> Html {
    let task = &props.task;
    let onclick = {
        let id = task.id.clone();
        props.on_toggle.reform(move |_: MouseEvent| id.clone())
    };

    html! {
        <div class={classes!("study-card", kind_class(task.kind), task.completed.then_some("completed"))}>
            <button class="study-card-check" {onclick}>
                if task.completed {
                    <i class="fas fa-check-circle"></i>
                } else {
                    <i class="far fa-circle"></i>
                }
            </button>

            <div class="study-card-body">
                <div class="study-card-header">
                    <h3 class="study-card-subject">{task.subject.clone()}</h3>
                    <span class="study-card-duration">
                        <i class="far fa-clock"></i>
                        {format_minutes(task.duration_minutes)}
                    </span>
                </div>
                <p class="study-card-topic">{task.topic.clone()}</p>

                <div class="study-card-footer">
                    <span class="study-card-kind">
                        <i class={kind_icon(task.kind)}></i>
                        {task.kind.label()}
                    </span>
                    if !task.completed {
                        if let Some(notes) = &task.notes {
                            <p class="study-card-notes">{notes.clone()}</p>
                        }
                    }
                </div>
            </div>
        </div>
    }
}
