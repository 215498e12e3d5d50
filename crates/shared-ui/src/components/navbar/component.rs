use dioxus::prelude::*;

/// Top navigation bar rendered on every page.
///
/// Takes router `Link`s as children so this crate stays independent of the
/// application's route enum.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "dashboard-navbar", {children} }
    }
}
