use backend::{OnboardingAdvance, OnboardingForm, OnboardingStep};
use shared::Profile;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::date_utils::format_hours;
use crate::services::Logger;

#[derive(Properties, PartialEq)]
pub struct OnboardingWizardProps {
    pub on_complete: Callback<Profile>,
}

fn edit_form(form: &UseStateHandle<OnboardingForm>, apply: impl FnOnce(&mut OnboardingForm)) {
    let mut next = (**form).clone();
    apply(&mut next);
    form.set(next);
}

/// Three-step profile wizard shown until a profile exists
#[function_component(OnboardingWizard)]
pub fn onboarding_wizard(props: &OnboardingWizardProps) -> Html {
    let form = use_state(OnboardingForm::new);
    let subject_input = use_state(String::new);

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit_form(&form, |f| f.set_name(input.value()));
        })
    };

    let on_grade_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit_form(&form, |f| f.set_grade(input.value()));
        })
    };

    let on_subject_input = {
        let subject_input = subject_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            subject_input.set(input.value());
        })
    };

    let add_subject = {
        let form = form.clone();
        let subject_input = subject_input.clone();
        Callback::from(move |_: ()| {
            edit_form(&form, |f| {
                f.add_subject(&subject_input);
            });
            subject_input.set(String::new());
        })
    };

    let on_subject_keydown = {
        let add_subject = add_subject.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                add_subject.emit(());
            }
        })
    };

    let remove_subject = {
        let form = form.clone();
        Callback::from(move |subject: String| edit_form(&form, |f| f.remove_subject(&subject)))
    };

    let toggle_weak = {
        let form = form.clone();
        Callback::from(move |subject: String| edit_form(&form, |f| f.toggle_weak(&subject)))
    };

    let decrement_hours = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| edit_form(&form, OnboardingForm::decrement_hours))
    };

    let increment_hours = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| edit_form(&form, OnboardingForm::increment_hours))
    };

    let on_primary = {
        let form = form.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            match next.advance() {
                Ok(OnboardingAdvance::Next(_)) => form.set(next),
                Ok(OnboardingAdvance::Complete(profile)) => on_complete.emit(profile),
                Ok(OnboardingAdvance::Blocked) => {}
                Err(e) => Logger::error_with_component("onboarding", &format!("Invalid profile: {}", e)),
            }
        })
    };

    let step = form.step();

    let body = match step {
        OnboardingStep::Identity => html! {
            <div class="onboarding-fields">
                <label class="field-label">{"Your Name"}</label>
                <input
                    class="text-input"
                    type="text"
                    placeholder="Alex"
                    value={form.name().to_string()}
                    oninput={on_name_input}
                />
                <label class="field-label">{"Grade / Class"}</label>
                <input
                    class="text-input"
                    type="text"
                    placeholder="10th Grade"
                    value={form.grade().to_string()}
                    oninput={on_grade_input}
                />
            </div>
        },
        OnboardingStep::Subjects => html! {
            <div class="onboarding-fields">
                <label class="field-label">{"Subjects"}</label>
                <div class="subject-entry">
                    <input
                        class="text-input"
                        type="text"
                        placeholder="Math, History..."
                        value={(*subject_input).clone()}
                        oninput={on_subject_input}
                        onkeydown={on_subject_keydown}
                    />
                    <button class="icon-button" onclick={add_subject.reform(|_: MouseEvent| ())}>
                        <i class="fas fa-plus"></i>
                    </button>
                </div>
                <div class="chip-row">
                    {for form.subjects().iter().map(|subject| {
                        let subject = subject.clone();
                        let onclick = remove_subject.reform({
                            let subject = subject.clone();
                            move |_: MouseEvent| subject.clone()
                        });
                        html! {
                            <span class="chip">
                                {subject}
                                <button class="chip-remove" {onclick}>{"×"}</button>
                            </span>
                        }
                    })}
                </div>

                if !form.subjects().is_empty() {
                    <label class="field-label">{"Which subjects do you find difficult?"}</label>
                    <p class="field-hint">{"We'll allocate more time to these."}</p>
                    <div class="chip-row">
                        {for form.subjects().iter().map(|subject| {
                            let selected = form.is_weak(subject);
                            let onclick = toggle_weak.reform({
                                let subject = subject.clone();
                                move |_: MouseEvent| subject.clone()
                            });
                            html! {
                                <button class={classes!("chip", "chip-toggle", selected.then_some("selected"))} {onclick}>
                                    {subject.clone()}
                                </button>
                            }
                        })}
                    </div>
                }
            </div>
        },
        OnboardingStep::Schedule => html! {
            <div class="onboarding-fields">
                <label class="field-label">{"Daily study time"}</label>
                <div class="hours-stepper">
                    <button class="icon-button" onclick={decrement_hours}>{"−"}</button>
                    <span class="hours-value">{format_hours(form.daily_hours())}</span>
                    <button class="icon-button" onclick={increment_hours}>{"+"}</button>
                </div>
                <p class="field-hint">{"We'll create a balanced schedule with breaks included automatically!"}</p>
            </div>
        },
    };

    html! {
        <div class="onboarding">
            <div class="onboarding-header">
                <h1>{"Welcome! 👋"}</h1>
                <p>{"Let's set up your personal AI study assistant."}</p>
            </div>

            <div class="progress-dots">
                {for (0..OnboardingStep::COUNT).map(|i| html! {
                    <span class={classes!("dot", (i <= step.index()).then_some("active"))}></span>
                })}
            </div>

            <h2 class="onboarding-title">{step.title()}</h2>
            {body}

            <button
                class="primary-button"
                disabled={!form.can_advance()}
                onclick={on_primary}
            >
                {step.primary_label()}
            </button>
        </div>
    }
}
