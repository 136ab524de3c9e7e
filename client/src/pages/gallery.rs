//! Gallery page: initial fetch, websocket wiring, and the grouped grid.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::prelude::*;

use crate::components::sort_bar::SortBar;
use crate::components::source_section::SourceSection;
use crate::components::status_bar::StatusBar;
use crate::components::url_form::UrlForm;
use crate::net::socket::Socket;
use crate::state::cards::{self, Card, CardsState};
use crate::state::ui::{ConnectionStatus, Notice, NoticeKind, UiState};

/// Gallery page — the whole client in one screen: loads the card list,
/// connects the socket, and renders the grouped, sorted grid.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let cards = expect_context::<RwSignal<CardsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "csr")]
    {
        let socket = expect_context::<Socket>();
        leptos::task::spawn_local(async move {
            initialize(cards, ui, socket).await;
        });
    }

    let groups = move || {
        let state = cards.get();
        cards::grouped(&state.cards, state.sort)
    };

    let notice_class = move || match ui.get().notice {
        Some(ref notice) if notice.kind == NoticeKind::Error => "notice notice--error",
        Some(_) => "notice notice--info",
        None => "notice",
    };
    let notice_text = move || ui.get().notice.map(|notice| notice.text).unwrap_or_default();

    view! {
        <div class="gallery-page">
            <header class="gallery-page__header">
                <h1>"Character Cards"</h1>
                <UrlForm/>
                <p id="error-message" class=notice_class>{notice_text}</p>
                <SortBar/>
            </header>

            <div id="card-container" class="gallery-page__sources">
                {move || {
                    groups()
                        .into_iter()
                        .map(|group| view! { <SourceSection group=group/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <StatusBar/>
        </div>
    }
}

/// Startup sequence: fetch the card list, wire socket handlers, connect.
///
/// The socket is connected whether or not the fetch succeeded; live
/// updates still apply over an empty list.
#[cfg(feature = "csr")]
async fn initialize(cards: RwSignal<CardsState>, ui: RwSignal<UiState>, socket: Socket) {
    match crate::net::api::fetch_cards().await {
        Some(response) => {
            let list = cards::flatten_response(response);
            cards.update(|state| state.load(list));
        }
        None => {
            leptos::logging::warn!("failed to load initial card data");
            ui.update(|state| {
                state.notice = Some(Notice::error(
                    "Could not load character cards. Is the server running?",
                ));
            });
        }
    }

    register_handlers(&socket, cards, ui);
    socket.connect();
}

/// Wire the server's message types (and the socket's synthetic events) to
/// state mutations.
fn register_handlers(socket: &Socket, cards: RwSignal<CardsState>, ui: RwSignal<UiState>) {
    socket.subscribe("open", move |_| {
        ui.update(|state| state.connection = ConnectionStatus::Connected);
    });

    socket.subscribe("close", move |_| {
        ui.update(|state| state.connection = ConnectionStatus::Disconnected);
    });

    socket.subscribe("status", move |payload| {
        if let Ok(status) = serde_json::from_value::<messages::StatusPayload>(payload.clone()) {
            let notice = if status.status == "error" {
                Notice::error(status.message)
            } else {
                Notice::info(status.message)
            };
            ui.update(|state| state.notice = Some(notice));
        }
    });

    socket.subscribe("new_card", move |payload| {
        if let Ok(new_card) = serde_json::from_value::<messages::NewCardPayload>(payload.clone()) {
            ui.update(|state| state.notice = None);
            cards.update(|state| {
                state.add_card(Card::from_wire(new_card.card, &new_card.source));
            });
        }
    });

    socket.subscribe("error", move |payload| {
        if let Ok(error) = serde_json::from_value::<messages::ErrorPayload>(payload.clone()) {
            ui.update(|state| state.notice = Some(Notice::error(error.message)));
        }
    });
}
