use serde::{Deserialize, Serialize};

/// One consultation in a patient's history.
///
/// Field aliases accept the API's `doctor_name`/`hospital_name`/`start_time`/
/// `consultation_fee` spelling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    #[serde(alias = "doctor_name")]
    pub doctor: String,
    #[serde(alias = "hospital_name")]
    pub hospital: String,
    #[serde(alias = "start_time")]
    pub date: String,
    #[serde(alias = "consultation_fee")]
    pub fee: f64,
}

/// Response of `GET /patient_history/<patient_id>`. Visits stay in server order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientVisitHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_consultations: Option<u64>,
    #[serde(alias = "consultation_history")]
    pub history: Vec<Visit>,
}
