use std::rc::Rc;

use backend::{ChatSession, RequestSlot};
use shared::GenerationConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::study_client;

pub enum ChatAction {
    Submit(String),
    Reply(String),
}

#[derive(Clone, Default, PartialEq)]
pub struct ChatState(pub ChatSession);

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        match action {
            ChatAction::Submit(text) => {
                next.0.submit(&text);
            }
            ChatAction::Reply(text) => next.0.receive_reply(text),
        }
        Rc::new(next)
    }
}

pub struct UseChatResult {
    pub session: ChatSession,
    pub send: Callback<String>,
}

/// Hook holding the tutor conversation for as long as the view is mounted
#[hook]
pub fn use_chat(config: Rc<GenerationConfig>) -> UseChatResult {
    let chat = use_reducer(ChatState::default);
    let client = use_memo(config, |config| study_client(config.clone()));
    let slot = use_mut_ref(|| RequestSlot::new("chat"));

    let send = {
        let chat = chat.clone();

        Callback::from(move |input: String| {
            // Work out the turn against the current log; the reducer records
            // the same submission
            let mut preview = chat.0.clone();
            let Some(turn) = preview.submit(&input) else {
                return;
            };
            chat.dispatch(ChatAction::Submit(input));

            let client = client.clone();
            let request = slot
                .borrow_mut()
                .begin(async move { client.chat(turn.history, &turn.message).await });

            let chat = chat.clone();
            spawn_local(async move {
                if let Ok(reply) = request.await {
                    chat.dispatch(ChatAction::Reply(reply));
                }
            });
        })
    };

    UseChatResult {
        session: chat.0.clone(),
        send,
    }
}
