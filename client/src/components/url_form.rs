//! URL submission form for server-side card extraction.

use leptos::prelude::*;

use crate::net::socket::Socket;

/// Extraction sources the server accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtractionSource {
    #[default]
    SakuraFm,
    JanitorAi,
}

impl ExtractionSource {
    /// Wire message type requesting extraction from this source.
    #[must_use]
    pub fn message_kind(self) -> &'static str {
        match self {
            Self::SakuraFm => "extract_sakura",
            Self::JanitorAi => "extract_janitor",
        }
    }
}

/// URL input plus source selector; submits an extraction request over the
/// socket and clears the field. Empty input is silently ignored.
#[component]
pub fn UrlForm() -> impl IntoView {
    let socket = expect_context::<Socket>();
    let url = RwSignal::new(String::new());
    let source = RwSignal::new(ExtractionSource::SakuraFm);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let trimmed = url.get().trim().to_owned();
        if trimmed.is_empty() {
            return;
        }
        socket.send(
            source.get().message_kind(),
            serde_json::json!({ "url": trimmed }),
        );
        url.set(String::new());
    };

    view! {
        <form id="url-form" class="url-form" on:submit=submit>
            <input
                id="url-input"
                class="url-form__input"
                type="text"
                placeholder="Character page URL"
                prop:value=move || url.get()
                on:input=move |ev| url.set(event_target_value(&ev))
            />
            <select
                class="url-form__source"
                on:change=move |ev| {
                    source.set(match event_target_value(&ev).as_str() {
                        "JanitorAI" => ExtractionSource::JanitorAi,
                        _ => ExtractionSource::SakuraFm,
                    });
                }
            >
                <option value="SakuraFM">"SakuraFM"</option>
                <option value="JanitorAI">"JanitorAI"</option>
            </select>
            <button class="url-form__submit" type="submit">
                "Extract"
            </button>
        </form>
    }
}
