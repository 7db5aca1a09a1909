//! Core data model types for reportgen.
//!
//! These mirror the records supplied by the data source: students, assessments,
//! questions, and the responses a student recorded against an assessment.
//! Every field the source may omit is optional or defaulted, so a sparse record
//! decodes cleanly instead of failing at lookup time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An untyped answer value: a submitted response, an answer key, or an option
/// value. May be text, a number, a boolean, a list, or null.
pub type AnswerValue = serde_json::Value;

/// Textual format of every timestamp in the response history.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Parse a `day/month/year hour:minute:second` timestamp.
///
/// Returns `None` for text that does not follow the format.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
}

/// A student enrolled in assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub year_level: Option<u32>,
}

impl Student {
    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A named assessment made up of questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub questions: Vec<AssessmentQuestion>,
}

impl Assessment {
    /// Position this assessment gives a question, if it lists one.
    pub fn position_of(&self, question_id: &str) -> Option<i64> {
        self.questions
            .iter()
            .find(|listed| listed.question_id() == question_id)
            .and_then(AssessmentQuestion::position)
    }
}

/// A question listed by an assessment: either a bare id or an id with its
/// position in the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssessmentQuestion {
    Id(String),
    Placed {
        #[serde(default, rename = "questionId")]
        question_id: String,
        #[serde(default)]
        position: Option<i64>,
    },
}

impl AssessmentQuestion {
    pub fn question_id(&self) -> &str {
        match self {
            AssessmentQuestion::Id(id) => id,
            AssessmentQuestion::Placed { question_id, .. } => question_id,
        }
    }

    pub fn position(&self) -> Option<i64> {
        match self {
            AssessmentQuestion::Id(_) => None,
            AssessmentQuestion::Placed { position, .. } => *position,
        }
    }
}

/// A question in the question bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: String,
    /// Curriculum category used for diagnostic aggregation.
    #[serde(default)]
    pub strand: String,
    /// The prompt text shown to the student.
    #[serde(default)]
    pub stem: String,
    /// Question format, e.g. "multiple-choice".
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Ordering hint used when listing feedback.
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub config: QuestionConfig,
}

impl Question {
    /// The answer key, `Null` when the question has none.
    pub fn key(&self) -> &AnswerValue {
        &self.config.key
    }

    /// Ordering position: the question's own, else the one the assessment
    /// lists it at, else 0.
    pub fn position_in(&self, assessment: Option<&Assessment>) -> i64 {
        self.position
            .or_else(|| assessment.and_then(|a| a.position_of(&self.id)))
            .unwrap_or(0)
    }

    /// Hint text, if the question carries a non-blank one.
    pub fn hint(&self) -> Option<&str> {
        self.config
            .hint
            .as_deref()
            .filter(|hint| !hint.trim().is_empty())
    }

    /// The option whose id equals `value` exactly.
    pub fn option_for(&self, value: &AnswerValue) -> Option<&AnswerOption> {
        let AnswerValue::String(id) = value else {
            return None;
        };
        if id.is_empty() {
            return None;
        }
        self.config.options.iter().find(|option| &option.id == id)
    }
}

/// Answer key, choices, and hint of a question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionConfig {
    #[serde(default)]
    pub key: AnswerValue,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    #[serde(default)]
    pub hint: Option<String>,
}

/// One selectable choice of a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: AnswerValue,
}

/// One completed or in-progress submission of an assessment by a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub assessment_id: String,
    #[serde(default)]
    pub assigned: Option<String>,
    #[serde(default)]
    pub started: String,
    /// Completion timestamp; absent while the attempt is in progress.
    #[serde(default)]
    pub completed: Option<String>,
    #[serde(default)]
    pub attempt_id: Option<String>,
    #[serde(default)]
    pub student: StudentRef,
    #[serde(default)]
    pub responses: Vec<QuestionResponse>,
    #[serde(default)]
    pub results: Option<ResultsSummary>,
}

impl AttemptResponse {
    /// Whether the record carries a completion timestamp.
    pub fn is_completed(&self) -> bool {
        self.completed.is_some()
    }

    /// The parsed completion time, if present and well formed.
    pub fn completed_at(&self) -> Option<NaiveDateTime> {
        self.completed.as_deref().and_then(parse_timestamp)
    }

    /// Whether this record belongs to the given student.
    pub fn is_for_student(&self, student_id: &str) -> bool {
        !self.student.id.is_empty() && self.student.id == student_id
    }
}

/// Reference from a response record to the responding student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub year_level: Option<u32>,
}

/// A single answer given to a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    #[serde(default)]
    pub question_id: String,
    #[serde(default)]
    pub response: AnswerValue,
}

/// Results precomputed by the assessment platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    #[serde(default)]
    pub raw_score: Option<u32>,
}
