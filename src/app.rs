//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{chat::ChatPage, home::HomePage};
use crate::state::{chat::ChatState, session::SessionContext, upload::UploadState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing. Upload
/// and chat state live here rather than in the pages so a detection result
/// and a running conversation both survive in-app navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let upload = RwSignal::new(UploadState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(upload);
    provide_context(chat);
    provide_context(SessionContext::browser());

    view! {
        <Stylesheet id="leptos" href="/pkg/plantcheck.css"/>
        <Title text="PlantCheck"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
    }
}
