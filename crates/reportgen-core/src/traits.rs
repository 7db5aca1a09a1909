//! Core trait definitions for data sources and report generators.
//!
//! `DataSource` is implemented by `reportgen-data` (JSON files) and by
//! [`crate::memory::InMemorySource`]. The three report kinds implement
//! `ReportGenerator`.

use std::collections::HashMap;

use crate::error::DataError;
use crate::model::{Assessment, AttemptResponse, Question, Student};

// ---------------------------------------------------------------------------
// Data source trait
// ---------------------------------------------------------------------------

/// Read access to reference data and response history.
///
/// Every call loads fresh data; implementations must not hand out state that
/// changes during a report request.
pub trait DataSource: Send + Sync {
    /// All students keyed by id.
    fn load_students(&self) -> Result<HashMap<String, Student>, DataError>;

    /// All assessments keyed by id.
    fn load_assessments(&self) -> Result<HashMap<String, Assessment>, DataError>;

    /// The question bank keyed by id.
    fn load_questions(&self) -> Result<HashMap<String, Question>, DataError>;

    /// Every response record of a student, completed or not, in source order.
    fn responses_for_student(&self, student_id: &str) -> Result<Vec<AttemptResponse>, DataError>;

    /// The student's response with the latest parseable completion time.
    ///
    /// Records without a completion timestamp, or with one that does not
    /// parse, never qualify. On a tie the earlier record wins.
    fn most_recent_completed_for_student(
        &self,
        student_id: &str,
    ) -> Result<Option<AttemptResponse>, DataError> {
        let mut most_recent: Option<(chrono::NaiveDateTime, AttemptResponse)> = None;

        for response in self.responses_for_student(student_id)? {
            let Some(completed_at) = response.completed_at() else {
                continue;
            };
            let newer = most_recent
                .as_ref()
                .map_or(true, |(latest, _)| completed_at > *latest);
            if newer {
                most_recent = Some((completed_at, response));
            }
        }

        Ok(most_recent.map(|(_, response)| response))
    }

    /// Every response record of a student for one assessment.
    fn responses_for_student_and_assessment(
        &self,
        student_id: &str,
        assessment_id: &str,
    ) -> Result<Vec<AttemptResponse>, DataError> {
        Ok(self
            .responses_for_student(student_id)?
            .into_iter()
            .filter(|response| response.assessment_id == assessment_id)
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Reference data snapshot
// ---------------------------------------------------------------------------

/// Read-only snapshot of students, assessments, and questions for one request.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataView {
    pub students: HashMap<String, Student>,
    pub assessments: HashMap<String, Assessment>,
    pub questions: HashMap<String, Question>,
}

impl ReferenceDataView {
    /// Load a fresh snapshot from the source.
    ///
    /// Records without an id cannot be referenced and are left out.
    pub fn load(source: &dyn DataSource) -> Result<Self, DataError> {
        let mut students = source.load_students()?;
        let mut assessments = source.load_assessments()?;
        let mut questions = source.load_questions()?;
        students.remove("");
        assessments.remove("");
        questions.remove("");
        Ok(Self {
            students,
            assessments,
            questions,
        })
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn assessment(&self, id: &str) -> Option<&Assessment> {
        self.assessments.get(id)
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.get(id)
    }
}

// ---------------------------------------------------------------------------
// Report generator trait
// ---------------------------------------------------------------------------

/// Everything a report needs for one request.
pub struct ReportContext<'a> {
    /// Reference data loaded for this request.
    pub reference: &'a ReferenceDataView,
    /// Response history of all students.
    pub history: &'a dyn DataSource,
}

/// A report algorithm producing plain text for one student.
pub trait ReportGenerator: Send + Sync {
    /// Human-readable report name (e.g. "diagnostic").
    fn name(&self) -> &str;

    /// Render the report for `student_id`.
    ///
    /// A student without usable responses yields the no-data text, not an
    /// error. Errors are reserved for a data source that cannot produce data.
    fn generate(&self, student_id: &str, ctx: &ReportContext<'_>) -> Result<String, DataError>;
}
