//! Feedback report: the questions a student got wrong in their latest attempt.

use crate::error::DataError;
use crate::format::{assessment_name, format_answer, format_date, format_option, student_full_name};
use crate::matcher::matches;
use crate::model::{AnswerValue, Question};
use crate::traits::{ReportContext, ReportGenerator};

use super::no_data_message;

/// Lists incorrect answers of the most recent completed attempt with the
/// correct answer and any hint.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackReport;

/// An incorrectly answered question, ready for display.
struct Mistake<'a> {
    question: &'a Question,
    submitted: String,
    correct: String,
}

/// Display form of an answer: the matching option as `<label> with value
/// <value>` when there is one, the raw value otherwise.
fn display_answer(question: &Question, value: &AnswerValue) -> String {
    match question.option_for(value) {
        Some(option) => format_option(option),
        None => format_answer(value),
    }
}

impl ReportGenerator for FeedbackReport {
    fn name(&self) -> &str {
        "feedback"
    }

    fn generate(&self, student_id: &str, ctx: &ReportContext<'_>) -> Result<String, DataError> {
        let Some(attempt) = ctx.history.most_recent_completed_for_student(student_id)? else {
            tracing::info!(student_id, "no completed responses for feedback report");
            return Ok(no_data_message(student_id));
        };

        let mut correct = 0u32;
        let mut mistakes: Vec<Mistake<'_>> = Vec::new();

        for answer in &attempt.responses {
            let Some(question) = ctx.reference.question(&answer.question_id) else {
                tracing::debug!(question_id = %answer.question_id, "skipping unknown question");
                continue;
            };

            if matches(&answer.response, question.key()) {
                correct += 1;
            } else {
                mistakes.push(Mistake {
                    question,
                    submitted: display_answer(question, &answer.response),
                    correct: display_answer(question, question.key()),
                });
            }
        }

        let name = student_full_name(ctx.reference, student_id);
        let total = correct + mistakes.len() as u32;
        let completed = attempt.completed.as_deref().unwrap_or_default();

        let mut report = format!(
            "{name} recently completed {} assessment on {}\n",
            assessment_name(ctx.reference, &attempt.assessment_id),
            format_date(completed)
        );
        report.push_str(&format!(
            "{name} got {correct} out of {total} correct. Feedback for wrong answers given below\n"
        ));

        if mistakes.is_empty() {
            report.push_str("\nExcellent work! All questions were answered correctly.\n");
            report.push_str("Keep up the great work!\n");
            return Ok(report);
        }

        let assessment = ctx.reference.assessment(&attempt.assessment_id);
        mistakes.sort_by_key(|mistake| mistake.question.position_in(assessment));

        for (index, mistake) in mistakes.iter().enumerate() {
            report.push_str(&format!("\nQuestion {}: {}\n", index + 1, mistake.question.stem));
            report.push_str(&format!("Your answer: {}\n", mistake.submitted));
            report.push_str(&format!("Correct answer: {}\n", mistake.correct));
            if let Some(hint) = mistake.question.hint() {
                report.push_str(&format!("Hint: {hint}\n"));
            }
        }

        Ok(report)
    }
}
