//! Single character card in the gallery grid.

use leptos::prelude::*;

use crate::state::cards::Card;

/// One character card: name, optional author line, description.
///
/// A card with no creator gets no "By:" line; empty name or description
/// render as empty text.
#[component]
pub fn CharacterCard(card: Card) -> impl IntoView {
    let by_line = card
        .creator
        .map(|creator| view! { <p class="card__creator">{format!("By: {creator}")}</p> });

    view! {
        <div class="card">
            <h3 class="card__name">{card.name}</h3>
            {by_line}
            <p class="card__description">{card.description}</p>
        </div>
    }
}
