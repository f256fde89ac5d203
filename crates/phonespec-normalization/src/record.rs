//! Record construction from positional source fields.

use phonespec_model::{FIELD_COUNT, PhoneRecord};
use tracing::trace;

use crate::fields::{
    clean_sensor, clean_sim, clean_text, extract_platform_name, extract_release_year,
    extract_size_inches, extract_weight_grams, extract_year,
};

/// Builds a record from one row of raw fields.
///
/// Missing trailing fields are treated as absent and fields past the
/// twelfth are ignored, so this never fails.
///
/// # Examples
///
/// ```
/// use phonespec_normalization::normalize_row;
///
/// let record = normalize_row(&["Nokia", "3310", "Announced 2000"]);
/// assert_eq!(record.oem.as_deref(), Some("Nokia"));
/// assert_eq!(record.launch_announced, Some(2000));
/// assert_eq!(record.platform_os, None);
/// ```
pub fn normalize_row<S: AsRef<str>>(fields: &[S]) -> PhoneRecord {
    if fields.len() > FIELD_COUNT {
        trace!(
            field_count = fields.len(),
            expected = FIELD_COUNT,
            "ignoring trailing fields"
        );
    }
    let field = |idx: usize| -> Option<&str> { fields.get(idx).map(AsRef::as_ref) };
    PhoneRecord {
        oem: clean_text(field(0)),
        model: clean_text(field(1)),
        launch_announced: extract_year(field(2)),
        launch_status: clean_text(field(3)),
        body_dimensions: clean_text(field(4)),
        body_weight: extract_weight_grams(field(5)),
        body_sim: clean_sim(field(6)),
        display_type: clean_text(field(7)),
        display_size: extract_size_inches(field(8)),
        display_resolution: clean_text(field(9)),
        feat_sensors: clean_sensor(field(10)),
        platform_os: extract_platform_name(field(11)),
    }
}

/// Release year embedded in the record's launch status, if any.
pub fn release_year(record: &PhoneRecord) -> Option<i32> {
    extract_release_year(record.launch_status.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_year_reads_launch_status() {
        let record = normalize_row(&[
            "OEM",
            "Model",
            "2021",
            "Available. Released 2021",
            "-",
            "150 g",
        ]);
        assert_eq!(release_year(&record), Some(2021));
        assert_eq!(release_year(&PhoneRecord::default()), None);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let mut row = vec!["-"; FIELD_COUNT];
        row[11] = "Android 12";
        row.push("trailing");
        row.push("more");
        let record = normalize_row(&row);
        assert_eq!(record.platform_os.as_deref(), Some("Android 12"));
    }
}
