//! Grouping of response records into chronological attempts.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::{parse_timestamp, AttemptResponse, QuestionResponse, ResultsSummary, StudentRef};

/// One attempt of an assessment, built from one or more response records.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    /// Attempt id of the first record seen, falling back to its record id.
    pub attempt_id: Option<String>,
    /// Completion timestamp, or start timestamp for an unfinished attempt.
    pub timestamp: String,
    pub student: StudentRef,
    pub responses: Vec<QuestionResponse>,
    pub results: Option<ResultsSummary>,
}

/// Partition response records into attempts ordered oldest first.
///
/// Records are keyed by the raw text of their completed timestamp, or started
/// timestamp when not completed. Records sharing a key collapse into one
/// attempt: the first fixes its id and student, the last supplies responses
/// and results. Keys that do not parse sort after all parsed ones, by raw text.
pub fn group_attempts(responses: &[AttemptResponse]) -> Vec<Attempt> {
    let mut attempts: Vec<Attempt> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for record in responses {
        let key = record.completed.as_deref().unwrap_or(&record.started);

        match slots.get(key) {
            Some(&slot) => {
                tracing::debug!(timestamp = key, "coalescing response records with same timestamp");
                let attempt = &mut attempts[slot];
                attempt.responses = record.responses.clone();
                attempt.results = record.results.clone();
            }
            None => {
                slots.insert(key, attempts.len());
                attempts.push(Attempt {
                    attempt_id: record.attempt_id.clone().or_else(|| record.id.clone()),
                    timestamp: key.to_string(),
                    student: record.student.clone(),
                    responses: record.responses.clone(),
                    results: record.results.clone(),
                });
            }
        }
    }

    attempts.sort_by(|a, b| chronological(&a.timestamp, &b.timestamp));
    attempts
}

fn chronological(a: &str, b: &str) -> Ordering {
    match (parse_timestamp(a), parse_timestamp(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
