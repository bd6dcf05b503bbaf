//! Static field registry for the attrition form.
//!
//! Every field the backend expects is declared once here with its label,
//! display section, kind and default. Sections only drive layout; they have
//! no effect on the record or the request payload.

use crate::record::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    PersonalInfo,
    JobInfo,
    IncomePerformance,
    ExperienceHistory,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::PersonalInfo,
        Section::JobInfo,
        Section::IncomePerformance,
        Section::ExperienceHistory,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::PersonalInfo => "Personal Info",
            Section::JobInfo => "Job Info",
            Section::IncomePerformance => "Income & Performance",
            Section::ExperienceHistory => "Experience & History",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::PersonalInfo => "🧍",
            Section::JobInfo => "💼",
            Section::IncomePerformance => "💰",
            Section::ExperienceHistory => "📈",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Categorical {
        options: &'static [&'static str],
        default: &'static str,
    },
    Numeric {
        min: i64,
        max: i64,
        default: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn numeric(
        name: &'static str,
        label: &'static str,
        section: Section,
        min: i64,
        max: i64,
        default: i64,
    ) -> Self {
        Self {
            name,
            label,
            section,
            kind: FieldKind::Numeric { min, max, default },
        }
    }

    const fn categorical(
        name: &'static str,
        label: &'static str,
        section: Section,
        options: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            section,
            kind: FieldKind::Categorical { options, default },
        }
    }

    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Categorical { default, .. } => FieldValue::Text(default.to_string()),
            FieldKind::Numeric { default, .. } => FieldValue::Int(default),
        }
    }

    /// Whether `value` lies in the declared domain: option membership for
    /// categorical fields, an in-range integer for numeric ones.
    pub fn admits(&self, value: &FieldValue) -> bool {
        match self.kind {
            FieldKind::Categorical { options, .. } => options.contains(&value.as_text().as_ref()),
            FieldKind::Numeric { min, max, .. } => value
                .as_int()
                .is_some_and(|n| (min..=max).contains(&n)),
        }
    }
}

const GENDER: &[&str] = &["Male", "Female"];
const MARITAL_STATUS: &[&str] = &["Single", "Married", "Divorced"];
const EDUCATION_FIELD: &[&str] = &[
    "Life Sciences",
    "Medical",
    "Marketing",
    "Technical Degree",
    "Other",
    "Human Resources",
];
const JOB_ROLE: &[&str] = &[
    "Sales Executive",
    "Research Scientist",
    "Laboratory Technician",
    "Manufacturing Director",
    "Healthcare Representative",
    "Manager",
    "Sales Representative",
    "Research Director",
    "Human Resources",
];
const DEPARTMENT: &[&str] = &["Research & Development", "Sales", "Human Resources"];
const BUSINESS_TRAVEL: &[&str] = &["Travel_Rarely", "Travel_Frequently", "Non-Travel"];
const OVER_TIME: &[&str] = &["Yes", "No"];

use Section::{ExperienceHistory, IncomePerformance, JobInfo, PersonalInfo};

/// All fields in display order: section by section, in on-screen order.
pub static FIELDS: [FieldSpec; 21] = [
    FieldSpec::numeric("Age", "Age (in years)", PersonalInfo, 18, 65, 35),
    FieldSpec::categorical("Gender", "Gender", PersonalInfo, GENDER, "Male"),
    FieldSpec::categorical(
        "MaritalStatus",
        "Marital Status",
        PersonalInfo,
        MARITAL_STATUS,
        "Single",
    ),
    FieldSpec::numeric(
        "Education",
        "Education (1 = Below College to 5 = Doctor)",
        PersonalInfo,
        1,
        5,
        3,
    ),
    FieldSpec::categorical(
        "EducationField",
        "Education Field",
        PersonalInfo,
        EDUCATION_FIELD,
        "Life Sciences",
    ),
    FieldSpec::numeric(
        "JobLevel",
        "Job Level (1 = Entry, 5 = Executive)",
        JobInfo,
        1,
        5,
        2,
    ),
    FieldSpec::categorical("JobRole", "Job Role", JobInfo, JOB_ROLE, "Research Scientist"),
    FieldSpec::categorical(
        "Department",
        "Department",
        JobInfo,
        DEPARTMENT,
        "Research & Development",
    ),
    FieldSpec::categorical(
        "BusinessTravel",
        "Business Travel Frequency",
        JobInfo,
        BUSINESS_TRAVEL,
        "Travel_Rarely",
    ),
    FieldSpec::categorical("OverTime", "Works Overtime?", JobInfo, OVER_TIME, "Yes"),
    FieldSpec::numeric(
        "MonthlyIncome",
        "Monthly Income (USD)",
        IncomePerformance,
        0,
        20000,
        4000,
    ),
    FieldSpec::numeric("DailyRate", "Daily Rate ($)", IncomePerformance, 0, 1500, 1100),
    FieldSpec::numeric(
        "PercentSalaryHike",
        "Salary Hike (%)",
        IncomePerformance,
        0,
        100,
        12,
    ),
    FieldSpec::numeric(
        "EnvironmentSatisfaction",
        "Environment Satisfaction (1-4)",
        IncomePerformance,
        1,
        4,
        4,
    ),
    FieldSpec::numeric(
        "TotalWorkingYears",
        "Total Working Years",
        ExperienceHistory,
        0,
        40,
        10,
    ),
    FieldSpec::numeric(
        "NumCompaniesWorked",
        "Number of Companies Worked For",
        ExperienceHistory,
        0,
        15,
        2,
    ),
    FieldSpec::numeric(
        "DistanceFromHome",
        "Distance From Home (km)",
        ExperienceHistory,
        0,
        100,
        10,
    ),
    FieldSpec::numeric("YearsAtCompany", "Years at Company", ExperienceHistory, 0, 40, 5),
    FieldSpec::numeric(
        "YearsInCurrentRole",
        "Years in Current Role",
        ExperienceHistory,
        0,
        30,
        3,
    ),
    FieldSpec::numeric(
        "YearsSinceLastPromotion",
        "Years Since Last Promotion",
        ExperienceHistory,
        0,
        15,
        1,
    ),
    FieldSpec::numeric(
        "YearsWithCurrManager",
        "Years With Current Manager",
        ExperienceHistory,
        0,
        30,
        2,
    ),
];

pub fn all_fields() -> &'static [FieldSpec] {
    &FIELDS
}

pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

pub fn fields_in(section: Section) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(move |spec| spec.section == section)
}
