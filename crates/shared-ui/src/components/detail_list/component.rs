use dioxus::prelude::*;

/// A container for label/value pairs.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-list", {children} }
    }
}

/// A single label/value row inside a `DetailList`.
///
/// Renders as `label: value` text so the row reads the same without CSS.
#[component]
pub fn DetailItem(label: String, value: String) -> Element {
    rsx! {
        p { class: "detail-item", "{label}: {value}" }
    }
}
