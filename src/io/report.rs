use std::io::Write;
use std::time::Duration;

use serde::Serialize;

use super::error::IoError;
use crate::comparison::{ComparisonReport, Representation};
use crate::domain::{BloodGroup, Summary};

/// One CSV line of the comparison report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub representation: Representation,
    pub elapsed_seconds: String,
    pub largest_blood_type: BloodGroup,
    pub largest_blood_type_count: usize,
    pub mean_latitude: f64,
    pub mean_longitude: f64,
    pub oldest_age_years: Option<i64>,
    pub oldest_name: Option<String>,
    pub average_age: i64,
}

impl ReportRow {
    pub fn new<P>(
        representation: Representation,
        elapsed: Duration,
        summary: &Summary<P>,
        oldest_name: Option<String>,
    ) -> Self {
        Self {
            representation,
            elapsed_seconds: format!("{:.6}", elapsed.as_secs_f64()),
            largest_blood_type: summary.largest_blood_type.blood_group,
            largest_blood_type_count: summary.largest_blood_type.count,
            mean_latitude: summary.mean_current_location.latitude,
            mean_longitude: summary.mean_current_location.longitude,
            oldest_age_years: summary.oldest_age_years(),
            oldest_name,
            average_age: summary.average_age,
        }
    }

    /// Rows for both runs, named-field first
    pub fn from_report(report: &ComparisonReport) -> [Self; 2] {
        [
            Self::new(
                Representation::NamedField,
                report.named.elapsed,
                &report.named.value,
                report.oldest_name(Representation::NamedField),
            ),
            Self::new(
                Representation::KeyedMapping,
                report.keyed.elapsed,
                &report.keyed.value,
                report.oldest_name(Representation::KeyedMapping),
            ),
        ]
    }
}

/// Write report rows as CSV with a header line
pub fn write_report<W: Write>(rows: &[ReportRow], writer: W) -> Result<(), IoError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
