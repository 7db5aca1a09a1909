//! In-memory data source.
//!
//! Holds records in vectors and answers every query from them, for tests and
//! for hosts that already have the records decoded.

use std::collections::HashMap;

use crate::error::DataError;
use crate::model::{Assessment, AttemptResponse, Question, Student};
use crate::traits::DataSource;

/// A `DataSource` backed by in-memory records.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    students: Vec<Student>,
    assessments: Vec<Assessment>,
    questions: Vec<Question>,
    responses: Vec<AttemptResponse>,
    /// When set, every call fails with `DataError::Unavailable`.
    unavailable: Option<String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every call fails, for exercising error propagation.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            unavailable: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn with_student(mut self, student: Student) -> Self {
        self.students.push(student);
        self
    }

    pub fn with_assessment(mut self, assessment: Assessment) -> Self {
        self.assessments.push(assessment);
        self
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn with_response(mut self, response: AttemptResponse) -> Self {
        self.responses.push(response);
        self
    }

    fn check(&self) -> Result<(), DataError> {
        match &self.unavailable {
            Some(reason) => Err(DataError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

fn keyed<T: Clone>(records: &[T], id: impl Fn(&T) -> &str) -> HashMap<String, T> {
    records
        .iter()
        .map(|record| (id(record).to_string(), record.clone()))
        .collect()
}

impl DataSource for InMemorySource {
    fn load_students(&self) -> Result<HashMap<String, Student>, DataError> {
        self.check()?;
        Ok(keyed(&self.students, |s| s.id.as_str()))
    }

    fn load_assessments(&self) -> Result<HashMap<String, Assessment>, DataError> {
        self.check()?;
        Ok(keyed(&self.assessments, |a| a.id.as_str()))
    }

    fn load_questions(&self) -> Result<HashMap<String, Question>, DataError> {
        self.check()?;
        Ok(keyed(&self.questions, |q| q.id.as_str()))
    }

    fn responses_for_student(&self, student_id: &str) -> Result<Vec<AttemptResponse>, DataError> {
        self.check()?;
        Ok(self
            .responses
            .iter()
            .filter(|response| response.is_for_student(student_id))
            .cloned()
            .collect())
    }
}
