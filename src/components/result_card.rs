//! Detection result card: disease name, confidence badge, and chat link.
//!
//! DESIGN
//! ======
//! Renders nothing until an upload has succeeded; a new upload clears the
//! result and hides the card again. The confidence badge variant comes from
//! the shared tier thresholds so the card and any future summaries agree.

use leptos::prelude::*;

use crate::state::upload::UploadState;
use crate::util::format::{ConfidenceTier, chat_deep_link, confidence_percent, disease_display_name};

/// The latest detection result with a deep link into the chat view.
#[component]
pub fn ResultCard() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();

    move || {
        upload.get().result.map(|result| {
            let tier = ConfidenceTier::from_score(result.confidence);
            view! {
                <div class="result-card">
                    <h2 class="result-card__title">"Detection Result"</h2>
                    <p class="result-card__disease">{disease_display_name(&result.prediction)}</p>
                    <span class=format!("result-card__badge {}", tier.badge_class())>
                        {confidence_percent(result.confidence)}
                    </span>
                    <a class="btn btn--primary result-card__chat-link" href=chat_deep_link(&result.id)>
                        "Ask about this disease"
                    </a>
                </div>
            }
        })
    }
}
