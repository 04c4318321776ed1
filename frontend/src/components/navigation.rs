use shared::AppView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub current: AppView,
    pub on_navigate: Callback<AppView>,
}

fn icon(view: AppView) -> &'static str {
    match view {
        AppView::Planner => "fas fa-calendar-day",
        AppView::Chat => "fas fa-comment-dots",
        AppView::Progress => "fas fa-chart-pie",
        AppView::Settings => "fas fa-cog",
        AppView::Exam | AppView::Onboarding => "fas fa-circle",
    }
}

/// Bottom navigation bar
#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    html! {
        <nav class="bottom-nav">
            {for AppView::NAVIGATION.iter().map(|&view| {
                let is_active = view == props.current;
                let onclick = props.on_navigate.reform(move |_: MouseEvent| view);

                html! {
                    <button
                        class={classes!("nav-item", is_active.then_some("active"))}
                        {onclick}
                    >
                        <i class={icon(view)}></i>
                        <span class="nav-label">{view.label()}</span>
                    </button>
                }
            })}
        </nav>
    }
}
