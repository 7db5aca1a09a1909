//! Text rendering shared by all reports: dates, names, and answers.

use chrono::{Datelike, Timelike};

use crate::model::{parse_timestamp, AnswerOption, AnswerValue};
use crate::traits::ReferenceDataView;

/// Name used when a student id is missing from the reference data.
pub const UNKNOWN_STUDENT: &str = "Student";

/// Assessment name used when the assessment cannot be resolved.
pub const UNKNOWN_ASSESSMENT: &str = "Assessment";

/// Placeholder for an empty answer.
pub const NO_ANSWER: &str = "(No answer provided)";

/// Render a timestamp as e.g. `16th December 2021 10:46 AM`.
///
/// Text that does not follow the timestamp format is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let Some(at) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let day = at.day();
    let (is_pm, hour) = at.hour12();
    format!(
        "{day}{} {} {hour}:{:02} {}",
        ordinal_suffix(day),
        at.format("%B %Y"),
        at.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Render an answer value for display.
pub fn format_answer(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Null => NO_ANSWER.to_string(),
        AnswerValue::String(s) if s.is_empty() => NO_ANSWER.to_string(),
        AnswerValue::Array(items) if items.is_empty() => NO_ANSWER.to_string(),
        AnswerValue::Bool(true) => "True".to_string(),
        AnswerValue::Bool(false) => "False".to_string(),
        AnswerValue::Array(items) => items.iter().map(format_answer).collect::<Vec<_>>().join(", "),
        AnswerValue::String(s) => s.clone(),
        AnswerValue::Number(n) => format_number(n),
        AnswerValue::Object(_) => value.to_string(),
    }
}

/// Integral floats print without a fractional part, so `1.0` renders as `1`.
fn format_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.is_finite() && f.fract() == 0.0 => {
            format!("{f:.0}")
        }
        _ => n.to_string(),
    }
}

/// Render a choice as `<label> with value <value>`.
pub fn format_option(option: &AnswerOption) -> String {
    format!("{} with value {}", option.label, format_answer(&option.value))
}

/// `"<first> <last>"` for a known student, [`UNKNOWN_STUDENT`] otherwise.
pub fn student_full_name(reference: &ReferenceDataView, student_id: &str) -> String {
    reference
        .student(student_id)
        .map(|student| student.full_name())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_STUDENT.to_string())
}

/// The assessment's name, [`UNKNOWN_ASSESSMENT`] when it cannot be resolved.
pub fn assessment_name(reference: &ReferenceDataView, assessment_id: &str) -> String {
    reference
        .assessment(assessment_id)
        .map(|assessment| assessment.name.clone())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ASSESSMENT.to_string())
}
