//! One source bucket: heading plus its card grid.

use leptos::prelude::*;

use crate::components::card::CharacterCard;
use crate::state::cards::SourceGroup;

/// A titled section holding every card from one source.
#[component]
pub fn SourceSection(group: SourceGroup) -> impl IntoView {
    view! {
        <div class="source-section">
            <h2 class="source-section__title">{group.name}</h2>
            <div class="card-grid">
                {group
                    .cards
                    .into_iter()
                    .map(|card| view! { <CharacterCard card=card/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
