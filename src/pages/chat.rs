//! Chat page — assistant conversation about a detected disease.
//!
//! DESIGN
//! ======
//! The disease context comes from the in-memory detection result when the
//! user arrived by client-side navigation, and is otherwise restored through
//! the result endpoint using the `disease_id` query parameter, so a deep
//! link opened in a fresh tab still gets a contextual conversation. With
//! neither source the chat simply runs without a disease context.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::chat_panel::ChatPanel;
use crate::state::chat::ChatState;
use crate::state::upload::UploadState;
use crate::util::format::disease_display_name;

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let upload = expect_context::<RwSignal<UploadState>>();
    let query = use_query_map();

    // Seed the disease context once per visit.
    let restore_attempted = RwSignal::new(false);
    Effect::new(move || {
        if restore_attempted.get() {
            return;
        }
        restore_attempted.set(true);

        if let Some(result) = upload.get().result {
            chat.update(|c| c.disease_context = Some(disease_display_name(&result.prediction)));
            return;
        }

        let Some(result_id) = query.read().get("disease_id") else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(result) = crate::net::api::fetch_result(&result_id).await {
                chat.update(|c| c.disease_context = Some(disease_display_name(&result.prediction)));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = result_id;
        }
    });

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"Plant Care Assistant"</h1>
                {move || {
                    chat.get().disease_context.map(|disease| {
                        view! { <p class="chat-page__context">"Discussing: "{disease}</p> }
                    })
                }}
                <a class="chat-page__back" href="/">
                    "Back to detection"
                </a>
            </header>
            <ChatPanel/>
        </div>
    }
}
