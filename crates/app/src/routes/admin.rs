use dioxus::prelude::*;
use shared_types::HospitalSummary;
use shared_ui::{ErrorNotice, PageHeader, PageTitle};

use crate::api::use_api;
use crate::format_helpers::hospital_line;
use crate::remote::{use_remote, Loadable};
use crate::routes::Route;

/// `/admin`: every registered hospital, in server order.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Admin Dashboard" }
            }
            HospitalDirectory { linked: true }
        }
    }
}

/// Owns the `GET /hospitals` read for the admin view.
#[component]
fn HospitalDirectory(linked: bool) -> Element {
    let api = use_api();
    let hospitals = use_remote((), move |()| {
        let api = api.clone();
        async move { api.hospitals().await }
    });

    let state = hospitals.state();

    rsx! {
        AdminPanel {
            state,
            linked,
            on_retry: move |_| hospitals.retry(),
        }
    }
}

/// Body of the admin view for a given fetch state.
///
/// While loading this is an empty list rather than a loading message.
#[component]
pub fn AdminPanel(
    state: Loadable<Vec<HospitalSummary>>,
    #[props(default)] linked: bool,
    #[props(default)] on_retry: Option<EventHandler<MouseEvent>>,
) -> Element {
    match state {
        Loadable::Loading => rsx! {
            HospitalList { hospitals: Vec::new(), linked }
        },
        Loadable::Failed(err) => rsx! {
            ErrorNotice { message: err.friendly_message(), on_retry }
        },
        Loadable::Loaded(hospitals) => rsx! {
            HospitalList { hospitals, linked }
        },
    }
}

/// One list item per hospital: "Name (Location)".
///
/// With `linked` set, each item links to that hospital's detail dashboard;
/// the item text is the same either way.
#[component]
fn HospitalList(hospitals: Vec<HospitalSummary>, linked: bool) -> Element {
    rsx! {
        ul { class: "dashboard-list",
            for hospital in hospitals {
                li { key: "{hospital.id}",
                    if linked {
                        Link { to: Route::HospitalDetail { hospital_id: hospital.id },
                            {hospital_line(&hospital)}
                        }
                    } else {
                        {hospital_line(&hospital)}
                    }
                }
            }
        }
    }
}
