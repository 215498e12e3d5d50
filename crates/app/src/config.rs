use shared_types::DashboardConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

/// `config.toml` at the workspace root, embedded so the browser build needs
/// no filesystem access.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Build-time override for the API base URL.
const BASE_URL_OVERRIDE: Option<&str> = option_env!("DASHBOARD_API_URL");

/// Parse config contents, falling back to defaults if they are unparseable.
pub fn parse_config(contents: &str) -> DashboardConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config.toml could not be parsed, using defaults");
        DashboardConfig::default()
    })
}

/// Parse the embedded config once and return it. Later calls reuse the
/// first result.
pub fn load_config() -> &'static DashboardConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(CONFIG_TOML).with_base_url_override(BASE_URL_OVERRIDE);
        tracing::info!(
            api = config.base_url(),
            doctor_id = config.identity.doctor_id,
            patient_id = config.identity.patient_id,
            "dashboard config loaded"
        );
        config
    })
}
