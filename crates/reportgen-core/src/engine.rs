//! Report engine: maps report kinds to generators and runs one request.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::reports::{DiagnosticReport, FeedbackReport, ProgressReport};
use crate::traits::{DataSource, ReferenceDataView, ReportContext, ReportGenerator};

/// The kinds of report the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Diagnostic,
    Progress,
    Feedback,
}

impl ReportKind {
    /// Every kind, in menu order.
    pub const ALL: [ReportKind; 3] = [
        ReportKind::Diagnostic,
        ReportKind::Progress,
        ReportKind::Feedback,
    ];

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::Diagnostic => "Diagnostic Report - Performance by strand",
            ReportKind::Progress => "Progress Report - Raw score of every attempt",
            ReportKind::Feedback => "Feedback Report - Hints for incorrect answers",
        }
    }

    /// Capitalized name shown in menus.
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Diagnostic => "Diagnostic",
            ReportKind::Progress => "Progress",
            ReportKind::Feedback => "Feedback",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Diagnostic => write!(f, "diagnostic"),
            ReportKind::Progress => write!(f, "progress"),
            ReportKind::Feedback => write!(f, "feedback"),
        }
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diagnostic" | "1" => Ok(ReportKind::Diagnostic),
            "progress" | "2" => Ok(ReportKind::Progress),
            "feedback" | "3" => Ok(ReportKind::Feedback),
            other => Err(format!("unknown report type: {other}")),
        }
    }
}

/// The generator implementing a report kind.
pub fn generator_for(kind: ReportKind) -> Box<dyn ReportGenerator> {
    match kind {
        ReportKind::Diagnostic => Box::new(DiagnosticReport),
        ReportKind::Progress => Box::new(ProgressReport),
        ReportKind::Feedback => Box::new(FeedbackReport),
    }
}

/// Runs report requests against a data source.
///
/// Each request loads its own reference data snapshot; nothing is cached
/// between requests.
pub struct ReportEngine<'a> {
    source: &'a dyn DataSource,
}

impl<'a> ReportEngine<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    /// Generate one report for one student.
    pub fn generate(&self, kind: ReportKind, student_id: &str) -> Result<String, DataError> {
        let start = Instant::now();
        let reference = ReferenceDataView::load(self.source)?;
        tracing::debug!(
            students = reference.students.len(),
            assessments = reference.assessments.len(),
            questions = reference.questions.len(),
            "loaded reference data"
        );

        let ctx = ReportContext {
            reference: &reference,
            history: self.source,
        };
        let generator = generator_for(kind);
        let report = generator.generate(student_id, &ctx)?;

        tracing::info!(
            report = generator.name(),
            student_id,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "report generated"
        );
        Ok(report)
    }
}
