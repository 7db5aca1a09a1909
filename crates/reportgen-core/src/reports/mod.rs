//! The three report algorithms and the text they share.

mod diagnostic;
mod feedback;
mod progress;

pub use diagnostic::DiagnosticReport;
pub use feedback::FeedbackReport;
pub use progress::ProgressReport;

use crate::format::{assessment_name, format_date, student_full_name};
use crate::model::AttemptResponse;
use crate::traits::ReferenceDataView;

/// Header used when a student has never completed an assessment.
pub const NO_COMPLETED_HEADER: &str = "No completed assessments found for this student.\n";

/// Report text for a student without usable responses.
pub fn no_data_message(student_id: &str) -> String {
    format!("Error: No completed assessments found for student ID: {student_id}\n")
}

/// `"<name> recently completed <assessment> assessment on <date>\n"` for the
/// most recently completed response.
pub(crate) fn recent_assessment_header(
    reference: &ReferenceDataView,
    most_recent: Option<&AttemptResponse>,
) -> String {
    let Some(response) = most_recent else {
        return NO_COMPLETED_HEADER.to_string();
    };

    format!(
        "{} recently completed {} assessment on {}\n",
        student_full_name(reference, &response.student.id),
        assessment_name(reference, &response.assessment_id),
        format_date(response.completed.as_deref().unwrap_or(&response.started)),
    )
}
