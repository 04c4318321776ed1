use std::rc::Rc;

use shared::GenerationConfig;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_chat;

const GREETING: &str = "Hi! I'm your study tutor. Ask me anything about your subjects.";

#[derive(Properties, PartialEq)]
pub struct ChatViewProps {
    pub config: Rc<GenerationConfig>,
}

/// Tutor conversation. The log lives only as long as this view is mounted.
#[function_component(ChatView)]
pub fn chat_view(props: &ChatViewProps) -> Html {
    let chat = use_chat(props.config.clone());
    let input = use_state(String::new);
    let pending = chat.session.is_pending();

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            input.set(element.value());
        })
    };

    let send = {
        let input = input.clone();
        let send = chat.send.clone();
        Callback::from(move |_: ()| {
            if input.trim().is_empty() || pending {
                return;
            }
            send.emit((*input).clone());
            input.set(String::new());
        })
    };

    let on_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                send.emit(());
            }
        })
    };

    html! {
        <div class="chat">
            <div class="chat-header">
                <h1>{"AI Tutor"}</h1>
            </div>

            <div class="chat-log">
                <div class="chat-bubble model">{GREETING}</div>
                {for chat.session.messages().iter().map(|message| html! {
                    <div key={message.id.clone()} class={classes!("chat-bubble", message.role.as_str())}>
                        {message.text.clone()}
                    </div>
                })}
                if pending {
                    <div class="chat-bubble model pending">
                        <span class="typing-dot"></span>
                        <span class="typing-dot"></span>
                        <span class="typing-dot"></span>
                    </div>
                }
            </div>

            <div class="chat-input">
                <input
                    class="text-input"
                    type="text"
                    placeholder="Ask a question..."
                    value={(*input).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <button
                    class="icon-button"
                    disabled={pending || input.trim().is_empty()}
                    onclick={send.reform(|_: MouseEvent| ())}
                >
                    <i class="fas fa-paper-plane"></i>
                </button>
            </div>
        </div>
    }
}
