use serde::{Deserialize, Serialize};

/// Base URL of the local hospital API.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Identifier used by the doctor and patient dashboards when the route
/// does not carry one.
pub const DEFAULT_IDENTITY_ID: u64 = 1;

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_identity_id() -> u64 {
    DEFAULT_IDENTITY_ID
}

/// Where the dashboards fetch from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Which doctor and patient the unparameterized `/doctor` and `/patient`
/// routes show. There is no login session, so this is the only source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentitySettings {
    #[serde(default = "default_identity_id")]
    pub doctor_id: u64,
    #[serde(default = "default_identity_id")]
    pub patient_id: u64,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            doctor_id: DEFAULT_IDENTITY_ID,
            patient_id: DEFAULT_IDENTITY_ID,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section and field has a default so that a missing or partial file
/// still produces a config pointing at the local API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub identity: IdentitySettings,
}

impl DashboardConfig {
    /// Replace the API base URL, ignoring blank overrides.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// Base URL without a trailing slash, ready for `format!("{base}/path")`.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_points_at_local_api() {
        let config = DashboardConfig::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.identity.doctor_id, 1);
        assert_eq!(config.identity.patient_id, 1);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: DashboardConfig = toml::from_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [identity]
            patient_id = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.identity.patient_id, 7);
        assert_eq!(config.identity.doctor_id, 1);
        assert_eq!(config.api, ApiSettings::default());
    }

    #[test]
    fn deserialize_full_toml() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://hospital.example.org/api/"

            [identity]
            doctor_id = 3
            patient_id = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://hospital.example.org/api");
        assert_eq!(config.identity.doctor_id, 3);
        assert_eq!(config.identity.patient_id, 9);
    }

    #[test]
    fn base_url_override_ignores_blank() {
        let config = DashboardConfig::default().with_base_url_override(Some("   "));
        assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);

        let config = DashboardConfig::default().with_base_url_override(None);
        assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);

        let config =
            DashboardConfig::default().with_base_url_override(Some("http://10.0.0.5:8080/"));
        assert_eq!(config.base_url(), "http://10.0.0.5:8080");
    }
}
