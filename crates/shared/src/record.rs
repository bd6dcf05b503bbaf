use std::{borrow::Cow, collections::BTreeMap, fmt};

use serde::Serialize;

use crate::{error::FormError, schema};

/// A stored field value.
///
/// Defaults of numeric fields are integers. Anything that came from an input
/// control is kept as the raw text it arrived as, so an edited numeric field
/// serializes as a JSON string until something coerces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Int(n) => Cow::Owned(n.to_string()),
            FieldValue::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Integer view of the value; text is parsed after trimming.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// The in-memory form: exactly one value per registered field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormRecord {
    values: BTreeMap<String, FieldValue>,
}

impl Default for FormRecord {
    fn default() -> Self {
        let values = schema::all_fields()
            .iter()
            .map(|spec| (spec.name.to_string(), spec.default_value()))
            .collect();
        Self { values }
    }
}

impl FormRecord {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Stores `raw` verbatim under `name`. No coercion, clamping or option
    /// check happens here. Returns `false` and leaves the record untouched
    /// when `name` is not a registered field.
    pub fn update_field(&mut self, name: &str, raw: impl Into<String>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = FieldValue::Text(raw.into());
                true
            }
            None => false,
        }
    }

    /// Applies a `Field=Value` assignment as typed on a command line.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), FormError> {
        let (name, raw) = assignment
            .split_once('=')
            .ok_or_else(|| FormError::MalformedAssignment(assignment.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::MalformedAssignment(assignment.to_string()));
        }
        if !self.update_field(name, raw) {
            return Err(FormError::UnknownField(name.to_string()));
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Names of fields whose current value falls outside the declared domain.
    pub fn out_of_domain(&self) -> Vec<&str> {
        self.iter()
            .filter(|(name, value)| schema::field(name).is_some_and(|spec| !spec.admits(value)))
            .map(|(name, _)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_record_matches_snapshot() {
        let record = FormRecord::default();
        assert_eq!(record.len(), 21);
        assert_eq!(
            serde_json::to_value(&record).expect("serialize"),
            json!({
                "Age": 35,
                "DailyRate": 1100,
                "DistanceFromHome": 10,
                "Education": 3,
                "EnvironmentSatisfaction": 4,
                "Gender": "Male",
                "JobLevel": 2,
                "JobRole": "Research Scientist",
                "MaritalStatus": "Single",
                "MonthlyIncome": 4000,
                "NumCompaniesWorked": 2,
                "OverTime": "Yes",
                "PercentSalaryHike": 12,
                "TotalWorkingYears": 10,
                "YearsAtCompany": 5,
                "YearsInCurrentRole": 3,
                "YearsSinceLastPromotion": 1,
                "YearsWithCurrManager": 2,
                "BusinessTravel": "Travel_Rarely",
                "Department": "Research & Development",
                "EducationField": "Life Sciences"
            })
        );
    }

    #[test]
    fn categorical_update_stores_value_verbatim() {
        let mut record = FormRecord::default();
        for raw in ["Female", "Robot", "", "  spaced  "] {
            assert!(record.update_field("Gender", raw));
            assert_eq!(record.get("Gender"), Some(&FieldValue::Text(raw.to_string())));
        }
    }

    #[test]
    fn update_leaves_other_fields_untouched() {
        let mut record = FormRecord::default();
        let before = record.clone();
        record.update_field("JobRole", "Manager");
        for (name, value) in record.iter() {
            if name != "JobRole" {
                assert_eq!(before.get(name), Some(value));
            }
        }
    }

    #[test]
    fn edited_numeric_field_serializes_as_string() {
        let mut record = FormRecord::default();
        record.update_field("Age", "42");
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["Age"], json!("42"));
        assert_eq!(json["DailyRate"], json!(1100));
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut record = FormRecord::default();
        assert!(!record.update_field("Salary", "1"));
        assert_eq!(record, FormRecord::default());
    }

    #[test]
    fn assignments_parse_and_reject() {
        let mut record = FormRecord::default();
        record.apply_assignment("Department=Sales").expect("assign");
        assert_eq!(record.get("Department"), Some(&FieldValue::Text("Sales".into())));

        record
            .apply_assignment("Department=Research & Development")
            .expect("value with spaces");

        assert_eq!(
            record.apply_assignment("Nope=1"),
            Err(FormError::UnknownField("Nope".into()))
        );
        assert_eq!(
            record.apply_assignment("Age"),
            Err(FormError::MalformedAssignment("Age".into()))
        );
    }

    #[test]
    fn out_of_domain_reports_edited_fields() {
        let mut record = FormRecord::default();
        assert!(record.out_of_domain().is_empty());
        record.update_field("Age", "90");
        record.update_field("OverTime", "Sometimes");
        assert_eq!(record.out_of_domain(), vec!["Age", "OverTime"]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut record = FormRecord::default();
        record.update_field("Age", "50");
        record.reset();
        assert_eq!(record, FormRecord::default());
    }
}
