//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::socket::Socket;
use crate::pages::gallery::GalleryPage;
use crate::state::cards::CardsState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared state contexts and the websocket handle, and sets up
/// client-side routing with the gallery as the only screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cards = RwSignal::new(CardsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(cards);
    provide_context(ui);
    provide_context(Socket::new());

    view! {
        <Stylesheet id="leptos" href="/static/css/style.css"/>
        <Title text="Character Card Extractor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GalleryPage/>
            </Routes>
        </Router>
    }
}
