//! Home page — the detection flow: upload a photo, review the result.

use leptos::prelude::*;

use crate::components::result_card::ResultCard;
use crate::components::upload_panel::UploadPanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"PlantCheck"</h1>
                <p class="home-page__tagline">"Upload a leaf photo to detect plant diseases"</p>
            </header>
            <UploadPanel/>
            <ResultCard/>
        </div>
    }
}
