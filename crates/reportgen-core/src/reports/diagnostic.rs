//! Diagnostic report: performance by strand across every completed attempt.

use crate::error::DataError;
use crate::format::student_full_name;
use crate::model::AttemptResponse;
use crate::statistics::{aggregate_by_strand, overall};
use crate::traits::{ReportContext, ReportGenerator};

use super::{no_data_message, recent_assessment_header};

/// Aggregates all of a student's completed responses by strand.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticReport;

impl ReportGenerator for DiagnosticReport {
    fn name(&self) -> &str {
        "diagnostic"
    }

    fn generate(&self, student_id: &str, ctx: &ReportContext<'_>) -> Result<String, DataError> {
        let completed: Vec<AttemptResponse> = ctx
            .history
            .responses_for_student(student_id)?
            .into_iter()
            .filter(AttemptResponse::is_completed)
            .collect();

        if completed.is_empty() {
            tracing::info!(student_id, "no completed responses for diagnostic report");
            return Ok(no_data_message(student_id));
        }

        let strands = aggregate_by_strand(&completed, &ctx.reference.questions);
        let totals = overall(&strands);
        let most_recent = ctx.history.most_recent_completed_for_student(student_id)?;

        let mut report = recent_assessment_header(ctx.reference, most_recent.as_ref());
        report.push_str(&format!(
            "{} got {} out of {} correct. Details by strand given below:\n\n",
            student_full_name(ctx.reference, student_id),
            totals.correct,
            totals.total
        ));

        for (strand, result) in &strands {
            report.push_str(&format!(
                "{strand}: {} out of {} correct\n",
                result.correct, result.total
            ));
        }

        Ok(report)
    }
}
