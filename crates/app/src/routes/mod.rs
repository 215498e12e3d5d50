pub mod admin;
pub mod doctor;
pub mod home;
pub mod hospital;
pub mod not_found;
pub mod patient;

use dioxus::prelude::*;
use shared_ui::Navbar;

use admin::AdminDashboard;
use doctor::{DoctorById, DoctorDashboard};
use home::Home;
use hospital::HospitalDetail;
use not_found::NotFound;
use patient::{PatientById, PatientDashboard};

/// Application routes.
///
/// Each dashboard route mounts its own view, which owns exactly one fetch.
/// The id-carrying variants let a doctor or patient other than the
/// configured one be shown without a rebuild.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/:hospital_id")]
    HospitalDetail { hospital_id: u64 },
    #[route("/doctor")]
    DoctorDashboard {},
    #[route("/doctor/:doctor_id")]
    DoctorById { doctor_id: u64 },
    #[route("/patient")]
    PatientDashboard {},
    #[route("/patient/:patient_id")]
    PatientById { patient_id: u64 },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Top-level section a route belongs to, used for the active nav link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Admin,
    Doctor,
    Patient,
    Other,
}

impl Route {
    pub fn section(&self) -> Section {
        match self {
            Route::Home {} => Section::Home,
            Route::AdminDashboard {} | Route::HospitalDetail { .. } => Section::Admin,
            Route::DoctorDashboard {} | Route::DoctorById { .. } => Section::Doctor,
            Route::PatientDashboard {} | Route::PatientById { .. } => Section::Patient,
            Route::NotFound { .. } => Section::Other,
        }
    }

    pub fn page_title(&self) -> &'static str {
        match self.section() {
            Section::Home => "Hospital Dashboards",
            Section::Admin => "Admin Dashboard",
            Section::Doctor => "Doctor Dashboard",
            Section::Patient => "Patient Dashboard",
            Section::Other => "Page Not Found",
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        ""
    }
}

/// Static shell wrapping every routed page: the nav bar and the outlet.
#[component]
fn Shell() -> Element {
    let route: Route = use_route();
    let section = route.section();
    let title = route.page_title();

    rsx! {
        document::Title { "{title}" }
        Navbar {
            Link { to: Route::AdminDashboard {}, class: nav_class(section == Section::Admin), "Admin" }
            Link { to: Route::DoctorDashboard {}, class: nav_class(section == Section::Doctor), "Doctor" }
            Link { to: Route::PatientDashboard {}, class: nav_class(section == Section::Patient), "Patient" }
        }
        main { class: "dashboard-main",
            Outlet::<Route> {}
        }
    }
}
