use dioxus::prelude::*;
use shared_types::{IdentitySettings, PatientVisitHistory};
use shared_ui::{ErrorNotice, LoadingNotice, PageHeader, PageTitle};

use crate::api::use_api;
use crate::format_helpers::visit_line;
use crate::remote::{use_remote, Loadable};

/// `/patient`: the patient selected in `config.toml`.
#[component]
pub fn PatientDashboard() -> Element {
    let identity = use_context::<IdentitySettings>();
    rsx! {
        PatientDashboardPage { patient_id: identity.patient_id }
    }
}

/// `/patient/:patient_id`
#[component]
pub fn PatientById(patient_id: u64) -> Element {
    rsx! {
        PatientDashboardPage { patient_id }
    }
}

#[component]
fn PatientDashboardPage(patient_id: u64) -> Element {
    let api = use_api();
    let history = use_remote(patient_id, move |id| {
        let api = api.clone();
        async move { api.patient_history(id).await }
    });

    let state = history.state();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Patient Dashboard" }
            }
            PatientPanel {
                state,
                on_retry: move |_| history.retry(),
            }
        }
    }
}

/// Body of the patient view for a given fetch state.
#[component]
pub fn PatientPanel(
    state: Loadable<PatientVisitHistory>,
    #[props(default)] on_retry: Option<EventHandler<MouseEvent>>,
) -> Element {
    match state {
        Loadable::Loading => rsx! { LoadingNotice {} },
        Loadable::Failed(err) => rsx! {
            ErrorNotice { message: err.friendly_message(), on_retry }
        },
        Loadable::Loaded(history) => rsx! { VisitHistory { history } },
    }
}

#[component]
fn VisitHistory(history: PatientVisitHistory) -> Element {
    let visits: Vec<String> = history.history.iter().map(visit_line).collect();

    rsx! {
        if let Some(name) = &history.patient_name {
            h3 { "{name}" }
        }
        if let Some(total) = history.total_consultations {
            p { class: "dashboard-stat", "Total Consultations: {total}" }
        }
        ul { class: "dashboard-list",
            for (i, line) in visits.into_iter().enumerate() {
                li { key: "{i}", "{line}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{html, mount, run_for};
    use httpmock::prelude::*;
    use serde_json::json;
    use shared_types::{FetchError, Visit};
    use std::time::Duration;

    fn visit(doctor: &str, date: &str, fee: f64) -> Visit {
        Visit {
            doctor: doctor.into(),
            hospital: "H1".into(),
            date: date.into(),
            fee,
        }
    }

    fn render(state: Loadable<PatientVisitHistory>) -> String {
        dioxus_ssr::render_element(rsx! { PatientPanel { state } })
    }

    #[test]
    fn loading_renders_loading_text() {
        let html = render(Loadable::Loading);
        assert!(html.contains("Loading..."), "got: {html}");
        assert!(!html.contains("<li"));
    }

    #[test]
    fn loaded_renders_one_item_per_visit() {
        let html = render(Loadable::Loaded(PatientVisitHistory {
            patient_name: None,
            total_consultations: None,
            history: vec![visit("Dr.X", "2024-01-01", 500.0)],
        }));
        assert_eq!(html.matches("<li").count(), 1, "got: {html}");
        assert!(html.contains("Dr.X at H1 on 2024-01-01 – ₹500"));
    }

    #[test]
    fn visits_keep_server_order() {
        let html = render(Loadable::Loaded(PatientVisitHistory {
            patient_name: Some("Asha".into()),
            total_consultations: Some(2),
            history: vec![
                visit("Dr.Late", "2024-05-01", 300.0),
                visit("Dr.Early", "2024-01-01", 200.0),
            ],
        }));
        assert!(html.contains("Asha"));
        assert!(html.contains("Total Consultations: 2"));
        let late = html.find("Dr.Late").unwrap();
        let early = html.find("Dr.Early").unwrap();
        assert!(late < early);
    }

    #[test]
    fn failed_renders_error_notice() {
        let err = FetchError::decode(
            "http://127.0.0.1:5000/patient_history/1",
            "missing field `history`",
        );
        let html = render(Loadable::Failed(err));
        assert!(html.contains("unexpected format"), "got: {html}");
        assert!(!html.contains("Loading..."));
    }

    fn patient_seven(_: ()) -> Element {
        rsx! { PatientById { patient_id: 7 } }
    }

    #[tokio::test]
    async fn each_mount_fetches_once_and_renders_history() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/patient_history/7");
                then.status(200).json_body(json!({
                    "patient_name": "Asha",
                    "total_consultations": 1,
                    "consultation_history": [{
                        "doctor_name": "Dr.X",
                        "hospital_name": "H1",
                        "consultation_fee": 500,
                        "start_time": "2024-01-01"
                    }]
                }));
            })
            .await;

        let mut dom = mount(patient_seven, (), &server.base_url());
        assert!(html(&dom).contains("Loading..."));

        run_for(&mut dom, Duration::from_millis(400)).await;
        let page = html(&dom);
        assert!(page.contains("Dr.X at H1 on 2024-01-01 – ₹500"), "got: {page}");
        assert!(!page.contains("Loading..."));
        mock.assert_hits_async(1).await;

        // Navigating away and back mounts a fresh view with its own fetch.
        drop(dom);
        let mut dom = mount(patient_seven, (), &server.base_url());
        run_for(&mut dom, Duration::from_millis(400)).await;
        assert!(html(&dom).contains("Asha"));
        mock.assert_hits_async(2).await;
    }
}
