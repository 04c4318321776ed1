use shared::Profile;
use yew::prelude::*;

use crate::services::date_utils::format_hours;

#[derive(Properties, PartialEq)]
pub struct SettingsViewProps {
    pub profile: Profile,
    pub on_reset: Callback<()>,
}

#[function_component(SettingsView)]
pub fn settings_view(props: &SettingsViewProps) -> Html {
    let profile = &props.profile;
    let chips = |subjects: &[String]| -> Html {
        subjects
            .iter()
            .map(|s| html! { <span key={s.clone()} class="chip">{s.clone()}</span> })
            .collect()
    };

    html! {
        <div class="settings">
            <h1>{"Settings"}</h1>
            <div class="settings-card">
                <div class="settings-row">
                    <label>{"Name"}</label>
                    <div class="settings-value large">{profile.name().to_string()}</div>
                </div>
                <div class="settings-row">
                    <label>{"Grade"}</label>
                    <div class="settings-value">{profile.grade().to_string()}</div>
                </div>
                <div class="settings-row">
                    <label>{"Target Subjects"}</label>
                    <div class="chip-row">{chips(profile.subjects())}</div>
                </div>
                if !profile.weak_subjects().is_empty() {
                    <div class="settings-row">
                        <label>{"Needs Extra Time"}</label>
                        <div class="chip-row">{chips(profile.weak_subjects())}</div>
                    </div>
                }
                <div class="settings-row">
                    <label>{"Daily Study Time"}</label>
                    <div class="settings-value">{format_hours(profile.daily_hours())}</div>
                </div>

                <hr />

                <button class="danger-button" onclick={props.on_reset.reform(|_: MouseEvent| ())}>
                    <i class="fas fa-sign-out-alt"></i>
                    {"Reset Profile & Data"}
                </button>
            </div>
        </div>
    }
}
