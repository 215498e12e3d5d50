use dioxus::prelude::*;

/// Page header container wrapping a title and optional subtitle.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            {children}
        }
    }
}

/// Page title element rendered as an h2.
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "page-title", {children} }
    }
}

#[component]
pub fn PageSubtitle(children: Element) -> Element {
    rsx! {
        p { class: "page-subtitle", {children} }
    }
}
