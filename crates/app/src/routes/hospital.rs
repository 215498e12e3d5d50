use dioxus::prelude::*;
use shared_types::HospitalDashboard;
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DetailItem, DetailList, ErrorNotice, LoadingNotice,
    PageHeader, PageSubtitle, PageTitle,
};

use crate::api::use_api;
use crate::format_helpers::{amount_line, doctor_line, format_rupees};
use crate::remote::{use_remote, Loadable};
use crate::routes::Route;

/// `/admin/:hospital_id`: consultations, revenue and staff for one hospital.
#[component]
pub fn HospitalDetail(hospital_id: u64) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Hospital Dashboard" }
                PageSubtitle {
                    Link { to: Route::AdminDashboard {}, "All hospitals" }
                }
            }
            HospitalDashboardBody { hospital_id }
        }
    }
}

#[component]
fn HospitalDashboardBody(hospital_id: u64) -> Element {
    let api = use_api();
    let dashboard = use_remote(hospital_id, move |id| {
        let api = api.clone();
        async move { api.hospital_dashboard(id).await }
    });

    let state = dashboard.state();

    rsx! {
        HospitalPanel {
            state,
            on_retry: move |_| dashboard.retry(),
        }
    }
}

#[component]
pub fn HospitalPanel(
    state: Loadable<HospitalDashboard>,
    #[props(default)] on_retry: Option<EventHandler<MouseEvent>>,
) -> Element {
    match state {
        Loadable::Loading => rsx! { LoadingNotice {} },
        Loadable::Failed(err) => rsx! {
            ErrorNotice { message: err.friendly_message(), on_retry }
        },
        Loadable::Loaded(dashboard) => rsx! { HospitalSummaryView { dashboard } },
    }
}

#[component]
fn HospitalSummaryView(dashboard: HospitalDashboard) -> Element {
    let revenue = format_rupees(dashboard.total_revenue);
    let doctors: Vec<(u64, String)> = dashboard
        .doctors
        .iter()
        .map(|d| (d.doctor_id, doctor_line(d)))
        .collect();
    let per_doctor: Vec<String> = dashboard
        .revenue_per_doctor
        .iter()
        .map(|(name, amount)| amount_line(name, *amount))
        .collect();
    let per_department: Vec<String> = dashboard
        .revenue_per_department
        .iter()
        .map(|(name, amount)| amount_line(name, *amount))
        .collect();

    rsx! {
        h3 { "{dashboard.hospital}" }
        DetailList {
            DetailItem { label: "Location", value: dashboard.location.clone() }
            DetailItem { label: "Total Consultations", value: dashboard.total_consultations.to_string() }
            DetailItem { label: "Total Revenue", value: revenue }
        }

        Card {
            CardHeader { CardTitle { "Doctors" } }
            CardContent {
                if doctors.is_empty() {
                    p { "No doctors associated with this hospital." }
                } else {
                    ul { class: "dashboard-list",
                        for (id, line) in doctors {
                            li { key: "{id}", "{line}" }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Revenue per Doctor" } }
            CardContent {
                ul { class: "dashboard-list",
                    for line in per_doctor {
                        li { key: "{line}", "{line}" }
                    }
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Revenue per Department" } }
            CardContent {
                ul { class: "dashboard-list",
                    for line in per_department {
                        li { key: "{line}", "{line}" }
                    }
                }
            }
        }
    }
}
