use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A subject offered in a registration period. Only the subject code is read by
/// this system; every other upstream field rides along untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "maHocPhan")]
    pub ma_hoc_phan: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A class section (lop hoc phan) open for registration within a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSection {
    pub id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One `{subject, class, schedules}` triple as returned by /api/all_data. Lives
/// only for the response that carries it.
#[derive(Debug, Serialize, Deserialize)]
pub struct CourseRecord {
    pub subject: Subject,
    pub class: ClassSection,
    pub schedules: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subject_keeps_unknown_upstream_fields() {
        let raw = json!({ "maHocPhan": "MATH101", "tenHocPhan": "Calculus", "soTinChi": 3 });
        let subject: Subject = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(subject.ma_hoc_phan, "MATH101");
        assert_eq!(serde_json::to_value(&subject).unwrap(), raw);
    }

    #[test]
    fn class_section_requires_an_id() {
        let missing = json!({ "tenLop": "010100510101" });
        assert!(serde_json::from_value::<ClassSection>(missing).is_err());

        let section: ClassSection =
            serde_json::from_value(json!({ "id": 42, "tenLop": "010100510101" })).unwrap();
        assert_eq!(section.id, 42);
        assert_eq!(section.extra["tenLop"], "010100510101");
    }
}
