use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

use crate::constants::{DEFAULT_EC_HOURS, MAX_EC_HOURS, MAX_UNIVERSITIES, SAT_MAX, SAT_MIN};
use crate::options::{
    ActivityDuration, ActivityRole, ActivityType, GpaScale, GradeLevel, HoursBand, Major,
    university_name,
};

// ASCII digits only.
static WHOLE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("whole-number pattern compiles"));
static DECIMAL_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+(\.[0-9]*)?|\.[0-9]+)$").expect("decimal pattern compiles")
});

fn fits(pattern: &Lazy<Regex>, text: &str) -> bool {
    pattern.is_match(text)
}

/// Identifies one writable field of [`FormData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Major,
    Universities,
    SatScore,
    GpaScale,
    GpaScore,
    GradeLevel,
    ExtracurricularHours,
    ExtracurricularTypes,
    ActivityTitle,
    ActivityRole,
    ActivityDuration,
    ActivityHoursPerWeek,
}

impl Field {
    pub const ALL: [Self; 12] = [
        Self::Major,
        Self::Universities,
        Self::SatScore,
        Self::GpaScale,
        Self::GpaScore,
        Self::GradeLevel,
        Self::ExtracurricularHours,
        Self::ExtracurricularTypes,
        Self::ActivityTitle,
        Self::ActivityRole,
        Self::ActivityDuration,
        Self::ActivityHoursPerWeek,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Universities => "universities",
            Self::SatScore => "satScore",
            Self::GpaScale => "gpaScale",
            Self::GpaScore => "gpaScore",
            Self::GradeLevel => "gradeLevel",
            Self::ExtracurricularHours => "extracurricularHours",
            Self::ExtracurricularTypes => "extracurricularTypes",
            Self::ActivityTitle => "activityTitle",
            Self::ActivityRole => "activityRole",
            Self::ActivityDuration => "activityDuration",
            Self::ActivityHoursPerWeek => "activityHoursPerWeek",
        }
    }

    /// Shape of value the field accepts.
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::Universities | Self::ExtracurricularTypes => ValueKind::List,
            Self::ExtracurricularHours => ValueKind::Hours,
            _ => ValueKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    List,
    Hours,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::List => "list",
            Self::Hours => "hours",
        })
    }
}

/// New value for a field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Hours(i64),
}

impl FieldValue {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List,
            Self::Hours(_) => ValueKind::Hours,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} expects a {expected} value, got {found}")]
    ValueShape {
        field: Field,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("'{value}' is not a valid option for {field}")]
    UnknownOption { field: Field, value: String },
    #[error("at most {MAX_UNIVERSITIES} universities can be selected")]
    UniversityLimit,
    #[error("{0} is already selected")]
    DuplicateUniversity(String),
    #[error("university name cannot be blank")]
    BlankUniversity,
}

/// Outcome of checking a numeric text field against its advisory range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericCheck {
    Empty,
    InRange,
    OutOfRange,
    Invalid,
}

impl NumericCheck {
    /// Empty or in range.
    #[must_use]
    pub const fn is_acceptable(self) -> bool {
        matches!(self, Self::Empty | Self::InRange)
    }
}

/// Answers accumulated over one questionnaire session.
///
/// Fields are private; every write goes through [`FormData::update`] or one of the
/// list helpers so the university cap and the hours clamp always hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    major: Option<Major>,
    universities: SmallVec<[String; MAX_UNIVERSITIES]>,
    sat_score: String,
    gpa_scale: Option<GpaScale>,
    gpa_score: String,
    grade_level: Option<GradeLevel>,
    extracurricular_hours: u8,
    extracurricular_types: Vec<ActivityType>,
    activity_title: String,
    activity_role: Option<ActivityRole>,
    activity_duration: Option<ActivityDuration>,
    activity_hours_per_week: Option<HoursBand>,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            major: None,
            universities: SmallVec::new(),
            sat_score: String::new(),
            gpa_scale: None,
            gpa_score: String::new(),
            grade_level: None,
            extracurricular_hours: DEFAULT_EC_HOURS,
            extracurricular_types: Vec::new(),
            activity_title: String::new(),
            activity_role: None,
            activity_duration: None,
            activity_hours_per_week: None,
        }
    }
}

fn parse_choice<T: std::str::FromStr>(field: Field, raw: &str) -> Result<Option<T>, FormError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| FormError::UnknownOption {
            field,
            value: raw.to_string(),
        })
}

const fn clamp_hours(raw: i64) -> u8 {
    if raw <= 0 {
        0
    } else if raw >= MAX_EC_HOURS as i64 {
        MAX_EC_HOURS
    } else {
        raw as u8
    }
}

impl FormData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn major(&self) -> Option<Major> {
        self.major
    }

    #[must_use]
    pub fn universities(&self) -> &[String] {
        &self.universities
    }

    #[must_use]
    pub fn sat_score(&self) -> &str {
        &self.sat_score
    }

    #[must_use]
    pub const fn gpa_scale(&self) -> Option<GpaScale> {
        self.gpa_scale
    }

    #[must_use]
    pub fn gpa_score(&self) -> &str {
        &self.gpa_score
    }

    #[must_use]
    pub const fn grade_level(&self) -> Option<GradeLevel> {
        self.grade_level
    }

    #[must_use]
    pub const fn extracurricular_hours(&self) -> u8 {
        self.extracurricular_hours
    }

    #[must_use]
    pub fn extracurricular_types(&self) -> &[ActivityType] {
        &self.extracurricular_types
    }

    #[must_use]
    pub fn activity_title(&self) -> &str {
        &self.activity_title
    }

    #[must_use]
    pub const fn activity_role(&self) -> Option<ActivityRole> {
        self.activity_role
    }

    #[must_use]
    pub const fn activity_duration(&self) -> Option<ActivityDuration> {
        self.activity_duration
    }

    #[must_use]
    pub const fn activity_hours_per_week(&self) -> Option<HoursBand> {
        self.activity_hours_per_week
    }

    /// Current text of a text-shaped field; `None` for list and hours fields.
    #[must_use]
    pub fn text(&self, field: Field) -> Option<String> {
        match field {
            Field::Major => Some(self.major.map(String::from).unwrap_or_default()),
            Field::SatScore => Some(self.sat_score.clone()),
            Field::GpaScale => Some(self.gpa_scale.map(String::from).unwrap_or_default()),
            Field::GpaScore => Some(self.gpa_score.clone()),
            Field::GradeLevel => Some(self.grade_level.map(String::from).unwrap_or_default()),
            Field::ActivityTitle => Some(self.activity_title.clone()),
            Field::ActivityRole => Some(self.activity_role.map(String::from).unwrap_or_default()),
            Field::ActivityDuration => {
                Some(self.activity_duration.map(String::from).unwrap_or_default())
            }
            Field::ActivityHoursPerWeek => Some(
                self.activity_hours_per_week
                    .map(String::from)
                    .unwrap_or_default(),
            ),
            Field::Universities | Field::ExtracurricularHours | Field::ExtracurricularTypes => {
                None
            }
        }
    }

    /// Overwrite one field.
    ///
    /// Enumerated fields accept an option identifier or `""` to clear. The write is
    /// all-or-nothing: on error the record is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ValueShape`] when `value` has the wrong shape for `field`,
    /// [`FormError::UnknownOption`] for identifiers outside the option set, and the
    /// university errors when a list would break the cap or uniqueness.
    pub fn update(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        let found = value.kind();
        match (field, value) {
            (Field::Major, FieldValue::Text(raw)) => self.major = parse_choice(field, &raw)?,
            (Field::GpaScale, FieldValue::Text(raw)) => {
                self.gpa_scale = parse_choice(field, &raw)?;
            }
            (Field::GradeLevel, FieldValue::Text(raw)) => {
                self.grade_level = parse_choice(field, &raw)?;
            }
            (Field::ActivityRole, FieldValue::Text(raw)) => {
                self.activity_role = parse_choice(field, &raw)?;
            }
            (Field::ActivityDuration, FieldValue::Text(raw)) => {
                self.activity_duration = parse_choice(field, &raw)?;
            }
            (Field::ActivityHoursPerWeek, FieldValue::Text(raw)) => {
                self.activity_hours_per_week = parse_choice(field, &raw)?;
            }
            (Field::SatScore, FieldValue::Text(raw)) => self.sat_score = raw,
            (Field::GpaScore, FieldValue::Text(raw)) => self.gpa_score = raw,
            (Field::ActivityTitle, FieldValue::Text(raw)) => self.activity_title = raw,
            (Field::ExtracurricularHours, FieldValue::Hours(raw)) => {
                self.set_extracurricular_hours(raw);
            }
            (Field::Universities, FieldValue::List(values)) => {
                let mut next: SmallVec<[String; MAX_UNIVERSITIES]> = SmallVec::new();
                for raw in values {
                    let name = university_name(&raw).ok_or(FormError::BlankUniversity)?;
                    if next.contains(&name) {
                        return Err(FormError::DuplicateUniversity(name));
                    }
                    if next.len() >= MAX_UNIVERSITIES {
                        return Err(FormError::UniversityLimit);
                    }
                    next.push(name);
                }
                self.universities = next;
            }
            (Field::ExtracurricularTypes, FieldValue::List(values)) => {
                let mut next = Vec::with_capacity(values.len());
                for raw in values {
                    let kind = raw
                        .parse::<ActivityType>()
                        .map_err(|()| FormError::UnknownOption {
                            field,
                            value: raw.clone(),
                        })?;
                    if !next.contains(&kind) {
                        next.push(kind);
                    }
                }
                self.extracurricular_types = next;
            }
            (field, _) => {
                return Err(FormError::ValueShape {
                    field,
                    expected: field.kind(),
                    found,
                });
            }
        }
        Ok(())
    }

    /// Append a university by catalog slug or typed name, returning the stored name.
    ///
    /// # Errors
    ///
    /// Rejects blank input, a name already in the list, and a sixth entry.
    pub fn add_university(&mut self, value: &str) -> Result<String, FormError> {
        let name = university_name(value).ok_or(FormError::BlankUniversity)?;
        if self.universities.contains(&name) {
            return Err(FormError::DuplicateUniversity(name));
        }
        if self.universities.len() >= MAX_UNIVERSITIES {
            return Err(FormError::UniversityLimit);
        }
        self.universities.push(name.clone());
        Ok(name)
    }

    /// Remove the university at `index`, keeping the order of the rest.
    pub fn remove_university(&mut self, index: usize) -> Option<String> {
        (index < self.universities.len()).then(|| self.universities.remove(index))
    }

    #[must_use]
    pub fn university_limit_reached(&self) -> bool {
        self.universities.len() >= MAX_UNIVERSITIES
    }

    /// Append an activity type; returns `false` when it was already selected.
    pub fn add_activity_type(&mut self, kind: ActivityType) -> bool {
        if self.extracurricular_types.contains(&kind) {
            return false;
        }
        self.extracurricular_types.push(kind);
        true
    }

    pub fn remove_activity_type(&mut self, index: usize) -> Option<ActivityType> {
        (index < self.extracurricular_types.len())
            .then(|| self.extracurricular_types.remove(index))
    }

    /// Store a slider reading clamped into `0..=40`.
    pub fn set_extracurricular_hours(&mut self, raw: i64) -> u8 {
        self.extracurricular_hours = clamp_hours(raw);
        self.extracurricular_hours
    }

    /// Parsed SAT total, when the text is a whole number.
    #[must_use]
    pub fn sat_value(&self) -> Option<u16> {
        let text = self.sat_score.trim();
        if fits(&WHOLE_NUMBER, text) {
            text.parse().ok()
        } else {
            None
        }
    }

    /// Parsed GPA, when the text is a non-negative decimal.
    #[must_use]
    pub fn gpa_value(&self) -> Option<f32> {
        let text = self.gpa_score.trim();
        if fits(&DECIMAL_NUMBER, text) {
            text.parse().ok()
        } else {
            None
        }
    }

    #[must_use]
    pub fn sat_check(&self) -> NumericCheck {
        if self.sat_score.trim().is_empty() {
            return NumericCheck::Empty;
        }
        match self.sat_value() {
            Some(score) if (SAT_MIN..=SAT_MAX).contains(&score) => NumericCheck::InRange,
            Some(_) => NumericCheck::OutOfRange,
            None if fits(&WHOLE_NUMBER, self.sat_score.trim()) => NumericCheck::OutOfRange,
            None => NumericCheck::Invalid,
        }
    }

    /// Check the GPA against the selected scale; without a bounded scale any
    /// non-negative number is in range.
    #[must_use]
    pub fn gpa_check(&self) -> NumericCheck {
        if self.gpa_score.trim().is_empty() {
            return NumericCheck::Empty;
        }
        let Some(gpa) = self.gpa_value() else {
            return NumericCheck::Invalid;
        };
        match self.gpa_scale.and_then(GpaScale::range) {
            Some(range) if gpa < range.min || gpa > range.max => NumericCheck::OutOfRange,
            _ => NumericCheck::InRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fresh_session() {
        let form = FormData::new();
        assert!(form.major().is_none());
        assert!(form.universities().is_empty());
        assert_eq!(form.extracurricular_hours(), DEFAULT_EC_HOURS);
        assert!(form.extracurricular_types().is_empty());
        assert_eq!(form.sat_check(), NumericCheck::Empty);
    }

    #[test]
    fn update_parses_and_clears_enumerated_fields() {
        let mut form = FormData::new();
        form.update(Field::Major, "economics".into()).unwrap();
        assert_eq!(form.major(), Some(Major::Economics));
        form.update(Field::Major, "".into()).unwrap();
        assert!(form.major().is_none());

        let err = form.update(Field::GradeLevel, "kindergarten".into());
        assert_eq!(
            err,
            Err(FormError::UnknownOption {
                field: Field::GradeLevel,
                value: "kindergarten".to_string()
            })
        );
        assert!(form.grade_level().is_none());
    }

    #[test]
    fn update_rejects_mismatched_shapes() {
        let mut form = FormData::new();
        let err = form
            .update(Field::ExtracurricularHours, "12".into())
            .unwrap_err();
        assert_eq!(
            err,
            FormError::ValueShape {
                field: Field::ExtracurricularHours,
                expected: ValueKind::Hours,
                found: ValueKind::Text,
            }
        );
        assert!(form.update(Field::Major, FieldValue::List(vec![])).is_err());
        assert!(err.to_string().contains("extracurricularHours"));
    }

    #[test]
    fn universities_list_update_is_atomic() {
        let mut form = FormData::new();
        form.add_university("harvard").unwrap();
        let six = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            form.update(Field::Universities, FieldValue::List(six)),
            Err(FormError::UniversityLimit)
        );
        assert_eq!(form.universities(), ["Harvard University"]);

        let dupes = vec!["yale".to_string(), "Yale University".to_string()];
        assert!(matches!(
            form.update(Field::Universities, FieldValue::List(dupes)),
            Err(FormError::DuplicateUniversity(_))
        ));
    }

    #[test]
    fn activity_type_list_drops_duplicates() {
        let mut form = FormData::new();
        let kinds = vec![
            "music".to_string(),
            "sports".to_string(),
            "music".to_string(),
        ];
        form.update(Field::ExtracurricularTypes, FieldValue::List(kinds))
            .unwrap();
        assert_eq!(
            form.extracurricular_types(),
            [ActivityType::Music, ActivityType::Sports]
        );
        assert!(!form.add_activity_type(ActivityType::Music));
        assert_eq!(form.remove_activity_type(0), Some(ActivityType::Music));
        assert_eq!(form.remove_activity_type(5), None);
    }

    #[test]
    fn sat_checks_cover_bounds_and_garbage() {
        let mut form = FormData::new();
        for (text, expected) in [
            ("1450", NumericCheck::InRange),
            ("400", NumericCheck::InRange),
            ("1600", NumericCheck::InRange),
            ("399", NumericCheck::OutOfRange),
            ("1601", NumericCheck::OutOfRange),
            ("99999999", NumericCheck::OutOfRange),
            ("14x0", NumericCheck::Invalid),
            ("-5", NumericCheck::Invalid),
            ("١٤٥٠", NumericCheck::Invalid),
            ("１４５０", NumericCheck::Invalid),
        ] {
            form.update(Field::SatScore, text.into()).unwrap();
            assert_eq!(form.sat_check(), expected, "sat text {text}");
        }
    }

    #[test]
    fn gpa_check_follows_selected_scale() {
        let mut form = FormData::new();
        form.update(Field::GpaScore, "4.3".into()).unwrap();
        assert_eq!(form.gpa_check(), NumericCheck::InRange);
        form.update(Field::GpaScale, "4.0".into()).unwrap();
        assert_eq!(form.gpa_check(), NumericCheck::OutOfRange);
        form.update(Field::GpaScale, "5.0".into()).unwrap();
        assert_eq!(form.gpa_check(), NumericCheck::InRange);
        form.update(Field::GpaScale, "other".into()).unwrap();
        form.update(Field::GpaScore, "812".into()).unwrap();
        assert_eq!(form.gpa_check(), NumericCheck::InRange);
        form.update(Field::GpaScore, "abc".into()).unwrap();
        assert_eq!(form.gpa_check(), NumericCheck::Invalid);
        form.update(Field::GpaScore, "٣.٨".into()).unwrap();
        assert_eq!(form.gpa_check(), NumericCheck::Invalid);
        form.update(Field::GpaScore, ".5".into()).unwrap();
        assert_eq!(form.gpa_value(), Some(0.5));
    }

    #[test]
    fn text_view_reports_identifiers() {
        let mut form = FormData::new();
        form.update(Field::GpaScale, "100".into()).unwrap();
        assert_eq!(form.text(Field::GpaScale).as_deref(), Some("100"));
        assert_eq!(form.text(Field::Major).as_deref(), Some(""));
        assert!(form.text(Field::Universities).is_none());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut form = FormData::new();
        form.update(Field::Major, "physics".into()).unwrap();
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["major"], "physics");
        assert_eq!(value["extracurricularHours"], 10);
        assert!(value["universities"].as_array().unwrap().is_empty());
    }
}
