//! Shared text formatting for the dashboard views.
//!
//! Amounts come off the wire as `f64`; `Display` prints whole numbers
//! without a fractional part ("600", not "600.0"), matching what the API
//! sends for integer fees.

use shared_types::{HospitalDoctor, HospitalSummary, Visit};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount as rupees, e.g. `1000.0` → "₹1000", `360.5` → "₹360.5".
pub fn format_rupees(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount}")
}

/// "A (X)": hospital name followed by its location.
pub fn hospital_line(hospital: &HospitalSummary) -> String {
    format!("{} ({})", hospital.name, hospital.location)
}

/// "H1: ₹600": a labelled amount from an earnings or revenue map.
pub fn amount_line(label: &str, amount: f64) -> String {
    format!("{label}: {}", format_rupees(amount))
}

/// "Dr.X at H1 on 2024-01-01 – ₹500"
pub fn visit_line(visit: &Visit) -> String {
    format!(
        "{} at {} on {} – {}",
        visit.doctor,
        visit.hospital,
        visit.date,
        format_rupees(visit.fee)
    )
}

/// "Dr. Rao (Cardiology, Surgery) · 12 yrs · fee ₹500"
pub fn doctor_line(doctor: &HospitalDoctor) -> String {
    let specializations = doctor.specialization_list().join(", ");
    let mut line = doctor.name.clone();
    if !specializations.is_empty() {
        line.push_str(&format!(" ({specializations})"));
    }
    line.push_str(&format!(
        " · {} yrs · fee {}",
        doctor.experience,
        format_rupees(doctor.consultation_fee)
    ));
    line
}
