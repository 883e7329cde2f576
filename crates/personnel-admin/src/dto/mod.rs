//! Flat, serialization-ready projections for transport. Dates render as ISO
//! `YYYY-MM-DD`, timestamps as RFC 3339, and absent optional fields as `null`.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

pub mod employee;
pub mod employer;

pub use employee::{DetailedEmployeeResponseDto, EmployeeListResponseDto, EmployeeResponseDto};
pub use employer::{DetailedEmployerResponseDto, EmployerListResponseDto, EmployerResponseDto};

fn iso_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|date| date.format("%Y-%m-%d").to_string())
}

fn iso_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_as_iso_strings() {
        assert_eq!(
            iso_date(NaiveDate::from_ymd_opt(2024, 2, 9)),
            Some("2024-02-09".to_string())
        );
        assert_eq!(iso_date(None), None);

        let timestamp = DateTime::parse_from_rfc3339("2024-02-09T08:30:00Z")
            .expect("timestamp")
            .with_timezone(&Utc);
        assert_eq!(iso_timestamp(timestamp), "2024-02-09T08:30:00.000Z");
    }
}
