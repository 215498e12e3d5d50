use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of `GET /hospitals`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HospitalSummary {
    pub id: u64,
    pub name: String,
    pub location: String,
}

/// A doctor associated with a hospital, with the fee charged there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HospitalDoctor {
    pub doctor_id: u64,
    pub name: String,
    /// Comma-separated list as stored by the API.
    #[serde(default)]
    pub specializations: String,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub consultation_fee: f64,
}

impl HospitalDoctor {
    /// Split the comma-separated specializations, dropping empty entries.
    pub fn specialization_list(&self) -> Vec<&str> {
        self.specializations
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Response of `GET /admin_dashboard/<hospital_id>`.
///
/// Revenue maps keep the order the server sent them in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HospitalDashboard {
    pub hospital: String,
    pub location: String,
    pub total_consultations: u64,
    pub total_revenue: f64,
    #[serde(default)]
    pub doctors: Vec<HospitalDoctor>,
    #[serde(default)]
    pub revenue_per_doctor: IndexMap<String, f64>,
    #[serde(default)]
    pub revenue_per_department: IndexMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hospital_list_decodes_in_server_order() {
        let hospitals: Vec<HospitalSummary> = serde_json::from_str(
            r#"[{"id":2,"name":"B","location":"Y"},{"id":1,"name":"A","location":"X"}]"#,
        )
        .unwrap();
        assert_eq!(hospitals.len(), 2);
        assert_eq!(hospitals[0].name, "B");
        assert_eq!(hospitals[1].id, 1);
    }

    #[test]
    fn hospital_missing_location_is_rejected() {
        let result = serde_json::from_str::<Vec<HospitalSummary>>(r#"[{"id":1,"name":"A"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn dashboard_preserves_revenue_order() {
        let dashboard: HospitalDashboard = serde_json::from_str(
            r#"{
                "hospital": "City General",
                "location": "Pune",
                "total_consultations": 3,
                "total_revenue": 1500,
                "doctors": [{
                    "doctor_id": 4,
                    "name": "Dr. Rao",
                    "specializations": "Cardiology, Surgery",
                    "experience": 12,
                    "consultation_fee": 500
                }],
                "revenue_per_doctor": {"Dr. Rao": 1500},
                "revenue_per_department": {"Surgery": 900, "Cardiology": 600}
            }"#,
        )
        .unwrap();
        let departments: Vec<&str> = dashboard
            .revenue_per_department
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(departments, vec!["Surgery", "Cardiology"]);
        assert_eq!(dashboard.doctors[0].specialization_list(), vec!["Cardiology", "Surgery"]);
        assert_eq!(dashboard.total_revenue, 1500.0);
    }

    #[test]
    fn dashboard_without_doctors_defaults_empty() {
        let dashboard: HospitalDashboard = serde_json::from_str(
            r#"{"hospital":"H","location":"L","total_consultations":0,"total_revenue":0}"#,
        )
        .unwrap();
        assert!(dashboard.doctors.is_empty());
        assert!(dashboard.revenue_per_doctor.is_empty());
    }
}
