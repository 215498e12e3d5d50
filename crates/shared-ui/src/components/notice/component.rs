use dioxus::prelude::*;

use crate::components::button::Button;

/// Text shown while a view's data has not arrived yet.
pub const LOADING_TEXT: &str = "Loading...";

/// Placeholder rendered while a fetch is in flight.
#[component]
pub fn LoadingNotice() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        p { class: "loading-notice", "{LOADING_TEXT}" }
    }
}

/// Explicit failure state for a view, with an optional retry action.
#[component]
pub fn ErrorNotice(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "error-notice", role: "alert",
            p { class: "error-notice-text", "{message}" }
            if let Some(handler) = on_retry {
                Button {
                    onclick: move |evt| handler.call(evt),
                    "Retry"
                }
            }
        }
    }
}
