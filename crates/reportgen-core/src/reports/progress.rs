//! Progress report: raw score of every attempt at the latest assessment.

use crate::attempts::group_attempts;
use crate::error::DataError;
use crate::format::{assessment_name, format_date, student_full_name};
use crate::statistics::raw_score;
use crate::traits::{ReportContext, ReportGenerator};

use super::no_data_message;

/// Compares a student's attempts at their most recently completed assessment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressReport;

/// Raw score of one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AttemptScore {
    timestamp: String,
    correct: u32,
    total: u32,
}

impl ReportGenerator for ProgressReport {
    fn name(&self) -> &str {
        "progress"
    }

    fn generate(&self, student_id: &str, ctx: &ReportContext<'_>) -> Result<String, DataError> {
        let Some(most_recent) = ctx.history.most_recent_completed_for_student(student_id)? else {
            tracing::info!(student_id, "no completed responses for progress report");
            return Ok(no_data_message(student_id));
        };

        let responses = ctx
            .history
            .responses_for_student_and_assessment(student_id, &most_recent.assessment_id)?;
        if responses.is_empty() {
            return Ok(no_data_message(student_id));
        }

        let scores: Vec<AttemptScore> = group_attempts(&responses)
            .into_iter()
            .map(|attempt| AttemptScore {
                correct: raw_score(&attempt.responses, &ctx.reference.questions),
                total: attempt.responses.len() as u32,
                timestamp: attempt.timestamp,
            })
            .collect();

        let name = student_full_name(ctx.reference, student_id);
        let mut report = format!(
            "{name} has completed {} assessment {} times in total. Date and raw score given below:\n\n",
            assessment_name(ctx.reference, &most_recent.assessment_id),
            scores.len()
        );

        for score in &scores {
            report.push_str(&format!(
                "Date: {}, Raw Score: {} out of {}\n",
                format_date(&score.timestamp),
                score.correct,
                score.total
            ));
        }

        let improvement = match (scores.first(), scores.last()) {
            (Some(oldest), Some(newest)) => i64::from(newest.correct) - i64::from(oldest.correct),
            _ => 0,
        };
        report.push_str(&format!(
            "\n{name} got {improvement} more correct in the recent completed assessment than the oldest\n"
        ));

        Ok(report)
    }
}
