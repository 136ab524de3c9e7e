//! Connection indicator and card count for the gallery footer.

use leptos::prelude::*;

use crate::state::cards::CardsState;
use crate::state::ui::{ConnectionStatus, UiState};

/// Status bar showing live-connection state and how many cards are loaded.
#[component]
pub fn StatusBar() -> impl IntoView {
    let cards = expect_context::<RwSignal<CardsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let status_class = move || match ui.get().connection {
        ConnectionStatus::Connected => "status-bar__dot status-bar__dot--connected",
        ConnectionStatus::Connecting => "status-bar__dot status-bar__dot--connecting",
        ConnectionStatus::Disconnected => "status-bar__dot status-bar__dot--disconnected",
    };

    let status_label = move || match ui.get().connection {
        ConnectionStatus::Connected => "Connected",
        ConnectionStatus::Connecting => "Connecting...",
        ConnectionStatus::Disconnected => "Disconnected",
    };

    let card_count = move || cards.get().cards.len();

    view! {
        <div class="status-bar">
            <span class="status-bar__connection">
                <span class=status_class></span>
                {status_label}
            </span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__cards">{move || format!("{} cards", card_count())}</span>
        </div>
    }
}
