//! Strand aggregation and raw scoring.
//!
//! Both compare answers with exact equality; only the feedback report uses the
//! tolerant matcher.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::model::{AttemptResponse, Question, QuestionResponse};

/// Correct and total answer counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrandResult {
    pub correct: u32,
    pub total: u32,
}

impl StrandResult {
    fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }
}

/// Fold response records into per-strand counts, keyed by strand label in
/// ascending order.
///
/// Answers to questions missing from the bank are skipped and count toward
/// neither `correct` nor `total`.
pub fn aggregate_by_strand<'a, I>(
    response_sets: I,
    questions: &HashMap<String, Question>,
) -> BTreeMap<String, StrandResult>
where
    I: IntoIterator<Item = &'a AttemptResponse>,
{
    let mut results: BTreeMap<String, StrandResult> = BTreeMap::new();

    for record in response_sets {
        for answer in &record.responses {
            let Some(question) = questions.get(&answer.question_id) else {
                continue;
            };
            results
                .entry(question.strand.clone())
                .or_default()
                .record(&answer.response == question.key());
        }
    }

    results
}

/// Sum strand counts into one overall result.
pub fn overall(strands: &BTreeMap<String, StrandResult>) -> StrandResult {
    strands.values().fold(StrandResult::default(), |acc, r| StrandResult {
        correct: acc.correct + r.correct,
        total: acc.total + r.total,
    })
}

/// Number of answers exactly equal to their question's key.
///
/// Answers to unknown questions are never correct.
pub fn raw_score(answers: &[QuestionResponse], questions: &HashMap<String, Question>) -> u32 {
    answers
        .iter()
        .filter(|answer| {
            questions
                .get(&answer.question_id)
                .is_some_and(|question| &answer.response == question.key())
        })
        .count() as u32
}
