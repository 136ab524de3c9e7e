//! Fixed sort controls for the gallery grid.

use leptos::prelude::*;

use crate::state::cards::{CardsState, SortDirection, SortKey};

/// The four fixed sort buttons (name/date, ascending/descending).
#[component]
pub fn SortBar() -> impl IntoView {
    let cards = expect_context::<RwSignal<CardsState>>();

    let set_sort = move |key: SortKey, direction: SortDirection| {
        cards.update(|state| state.set_sort(key, direction));
    };

    view! {
        <div class="sort-bar">
            <button
                id="sort-name-asc"
                class="sort-bar__button"
                on:click=move |_| set_sort(SortKey::Name, SortDirection::Asc)
            >
                "Name A-Z"
            </button>
            <button
                id="sort-name-desc"
                class="sort-bar__button"
                on:click=move |_| set_sort(SortKey::Name, SortDirection::Desc)
            >
                "Name Z-A"
            </button>
            <button
                id="sort-date-asc"
                class="sort-bar__button"
                on:click=move |_| set_sort(SortKey::CreateDate, SortDirection::Asc)
            >
                "Oldest first"
            </button>
            <button
                id="sort-date-desc"
                class="sort-bar__button"
                on:click=move |_| set_sort(SortKey::CreateDate, SortDirection::Desc)
            >
                "Newest first"
            </button>
        </div>
    }
}
