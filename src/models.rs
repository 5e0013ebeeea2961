use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Sentinel for text fields whose marker is missing from the page.
pub const NOT_AVAILABLE: &str = "N/A";

/// Canonical, template-independent record for one job posting.
///
/// Every field is always present: text fields fall back to `"N/A"`, numeric
/// and date fields to `None`. Consumers never need to check for a missing
/// column, only for the sentinel values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRecord {
    pub job_id: Option<i64>,
    pub job_title: String,
    pub company: String,
    /// Lower salary bound in million VND.
    pub salary_min: Option<i64>,
    /// Upper salary bound in million VND.
    pub salary_max: Option<i64>,
    /// `Some(0)` for both bounds means "no experience required", which is
    /// distinct from unspecified (`None`).
    pub yrs_of_exp_min: Option<u32>,
    pub yrs_of_exp_max: Option<u32>,
    pub job_city: String,
    #[serde(serialize_with = "serialize_due_date")]
    pub due_date: Option<NaiveDate>,
    pub jd: String,
}

fn serialize_due_date<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_record() -> JobRecord {
        JobRecord {
            job_id: None,
            job_title: NOT_AVAILABLE.to_string(),
            company: NOT_AVAILABLE.to_string(),
            salary_min: None,
            salary_max: None,
            yrs_of_exp_min: None,
            yrs_of_exp_max: None,
            job_city: NOT_AVAILABLE.to_string(),
            due_date: None,
            jd: NOT_AVAILABLE.to_string(),
        }
    }

    #[test]
    fn due_date_renders_as_iso_in_json() {
        let mut record = empty_record();
        record.due_date = NaiveDate::from_ymd_opt(2025, 12, 31);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["due_date"], "2025-12-31");
        assert_eq!(json["job_id"], serde_json::Value::Null);
    }

    #[test]
    fn every_field_is_a_key_even_when_unspecified() {
        let json = serde_json::to_value(empty_record()).unwrap();
        let object = json.as_object().unwrap();

        for key in [
            "job_id",
            "job_title",
            "company",
            "salary_min",
            "salary_max",
            "yrs_of_exp_min",
            "yrs_of_exp_max",
            "job_city",
            "due_date",
            "jd",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(object.len(), 10);
        assert_eq!(object["job_title"], "N/A");
    }
}
