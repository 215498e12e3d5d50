use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A patient seen by a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRef {
    pub patient_id: u64,
    pub name: String,
}

/// Response of `GET /doctor_dashboard/<doctor_id>`.
///
/// The API has shipped the per-hospital map as both `earnings_by_hospital`
/// and `earnings_per_hospital`; either decodes here. Order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorEarningsSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    pub total_consultations: u64,
    pub total_earnings: f64,
    #[serde(alias = "earnings_per_hospital")]
    pub earnings_by_hospital: IndexMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_unique_patients: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patients: Vec<PatientRef>,
}
