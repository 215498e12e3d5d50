use dioxus::prelude::use_context;
use serde::de::DeserializeOwned;
use shared_types::{
    DoctorEarningsSummary, FetchError, HospitalDashboard, HospitalSummary, PatientVisitHistory,
};

/// Read-only client for the hospital API.
///
/// Cheap to clone: the inner `reqwest::Client` shares its connection pool.
/// Provided once as context by `App` and picked up by views via [`use_api`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// `GET /hospitals`
    pub async fn hospitals(&self) -> Result<Vec<HospitalSummary>, FetchError> {
        self.get_json("/hospitals").await
    }

    /// `GET /admin_dashboard/<hospital_id>`
    pub async fn hospital_dashboard(&self, hospital_id: u64) -> Result<HospitalDashboard, FetchError> {
        self.get_json(&format!("/admin_dashboard/{hospital_id}")).await
    }

    /// `GET /doctor_dashboard/<doctor_id>`
    pub async fn doctor_dashboard(&self, doctor_id: u64) -> Result<DoctorEarningsSummary, FetchError> {
        self.get_json(&format!("/doctor_dashboard/{doctor_id}")).await
    }

    /// `GET /patient_history/<patient_id>`
    pub async fn patient_history(&self, patient_id: u64) -> Result<PatientVisitHistory, FetchError> {
        self.get_json(&format!("/patient_history/{patient_id}")).await
    }

    /// Issue one GET and decode the body. Failures are logged here, once,
    /// and returned to the view as its failed state.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        let result = self.fetch(&url).await;
        match &result {
            Ok(_) => tracing::debug!(%url, "dashboard fetch succeeded"),
            Err(err) => tracing::error!(%url, kind = %err.kind, error = %err, "dashboard fetch failed"),
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(url, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::network(url, e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::status(url, status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| FetchError::decode(url, e.to_string()))
    }
}

/// The `ApiClient` provided by `App`.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
