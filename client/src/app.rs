//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{ContentRepository, catalog};
use crate::pages::portfolio::PortfolioPage;
use crate::state::{ui::UiState, view::ViewState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="preconnect" href="https://fonts.googleapis.com"/>
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=JetBrains+Mono&family=Poppins:wght@300;400;500;600;700;800;900&display=swap"
                />
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

/// Load the embedded content, falling back to an empty repository so a
/// malformed document degrades the page instead of aborting hydration.
fn load_content() -> ContentRepository {
    ContentRepository::embedded().unwrap_or_else(|e| {
        log::error!("portfolio content failed to load: {e}");
        ContentRepository::default()
    })
}

/// Root application component.
///
/// Provides the content repository, the view state and the UI chrome state
/// to all child components.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Arc::new(load_content()));
    provide_context(RwSignal::new(ViewState::default()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/codiac-portfolio.css"/>
        <Title text=catalog::PAGE_TITLE/>
        <Meta name="description" content=catalog::PAGE_DESCRIPTION/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}
