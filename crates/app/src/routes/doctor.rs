use dioxus::prelude::*;
use shared_types::{DoctorEarningsSummary, IdentitySettings};
use shared_ui::{ErrorNotice, LoadingNotice, PageHeader, PageTitle};

use crate::api::use_api;
use crate::format_helpers::{amount_line, format_rupees};
use crate::remote::{use_remote, Loadable};

/// `/doctor`: the doctor selected in `config.toml`.
#[component]
pub fn DoctorDashboard() -> Element {
    let identity = use_context::<IdentitySettings>();
    rsx! {
        DoctorDashboardPage { doctor_id: identity.doctor_id }
    }
}

/// `/doctor/:doctor_id`
#[component]
pub fn DoctorById(doctor_id: u64) -> Element {
    rsx! {
        DoctorDashboardPage { doctor_id }
    }
}

#[component]
fn DoctorDashboardPage(doctor_id: u64) -> Element {
    let api = use_api();
    let summary = use_remote(doctor_id, move |id| {
        let api = api.clone();
        async move { api.doctor_dashboard(id).await }
    });

    let state = summary.state();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Doctor Dashboard" }
            }
            DoctorPanel {
                state,
                on_retry: move |_| summary.retry(),
            }
        }
    }
}

/// Body of the doctor view for a given fetch state.
#[component]
pub fn DoctorPanel(
    state: Loadable<DoctorEarningsSummary>,
    #[props(default)] on_retry: Option<EventHandler<MouseEvent>>,
) -> Element {
    match state {
        Loadable::Loading => rsx! { LoadingNotice {} },
        Loadable::Failed(err) => rsx! {
            ErrorNotice { message: err.friendly_message(), on_retry }
        },
        Loadable::Loaded(summary) => rsx! { EarningsSummary { summary } },
    }
}

#[component]
fn EarningsSummary(summary: DoctorEarningsSummary) -> Element {
    let earnings = format_rupees(summary.total_earnings);
    let by_hospital: Vec<(String, String)> = summary
        .earnings_by_hospital
        .iter()
        .map(|(hospital, amount)| (hospital.clone(), amount_line(hospital, *amount)))
        .collect();

    rsx! {
        div { class: "doctor-summary",
            if let Some(name) = &summary.doctor_name {
                h3 { "{name}" }
            }
            p { class: "dashboard-stat", "Total Consultations: {summary.total_consultations}" }
            p { class: "dashboard-stat", "Total Earnings: {earnings}" }
            if let Some(unique) = summary.total_unique_patients {
                p { class: "dashboard-stat", "Unique Patients: {unique}" }
            }

            h4 { "Earnings by Hospital:" }
            ul { class: "dashboard-list",
                for (hospital, line) in by_hospital {
                    li { key: "{hospital}", "{line}" }
                }
            }

            if !summary.patients.is_empty() {
                h4 { "Patients:" }
                ul { class: "dashboard-list",
                    for patient in summary.patients.iter() {
                        li { key: "{patient.patient_id}", "{patient.name}" }
                    }
                }
            }
        }
    }
}
