//! Chat panel for asking the plant-care assistant about a detection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the full send cycle: optimistic user echo, one request carrying the
//! message plus session token plus disease context, then either the bot reply
//! or an error-substitute entry. Bot content is rendered through the markup
//! pipeline; user content is inserted as literal text and never interpreted
//! as markup.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Sender, trimmed_message};
use crate::state::session::SessionContext;
use crate::util::markdown::render_markup;

/// Transcript plus input row; owns scroll position of the transcript.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = StoredValue::new(expect_context::<SessionContext>());

    let input = RwSignal::new(String::new());
    let transcript_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view whenever the transcript grows or the
    // pending-reply indicator toggles.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.sending;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = transcript_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        if chat.get().sending {
            return;
        }
        let raw = input.get();
        let Some(text) = trimmed_message(&raw) else {
            return;
        };
        let text = text.to_owned();

        chat.update(|c| c.begin_send(&text));
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_value().token();
            let disease = chat.get_untracked().disease_context.clone().unwrap_or_default();

            match crate::net::api::send_chat_message(&text, token.as_deref(), &disease).await {
                Ok(reply) => {
                    session.get_value().adopt(reply.session_id.as_deref());
                    chat.update(|c| c.settle_reply(reply.response));
                }
                Err(e) => {
                    log::warn!("chat request failed: {e}");
                    chat.update(|c| c.settle_error(&e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().sending;

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=transcript_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"Ask anything about plant diseases"</div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let content = msg.content.clone();
                            let is_bot = msg.sender == Sender::Bot;

                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--bot=is_bot
                                    class:chat-panel__message--user=!is_bot
                                >
                                    {if is_bot {
                                        let rendered = render_markup(&content);
                                        view! {
                                            <div class="chat-panel__markup" inner_html=rendered></div>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span class="chat-panel__text">{content}</span> }.into_any()
                                    }}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                {move || {
                    chat.get()
                        .sending
                        .then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about symptoms, treatment, prevention..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
