use dioxus::prelude::*;
use shared_ui::{PageHeader, PageTitle};

/// `/`: the shell with no dashboard selected.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Hospital Dashboards" }
            }
            p { "Pick a dashboard from the navigation bar." }
        }
    }
}
