//! Tolerant answer matching for feedback reports.
//!
//! Diagnostic and progress scoring compare answers with exact equality. The
//! feedback report forgives differences in type, case, surrounding whitespace,
//! and element order through [`matches`].

use std::cmp::Ordering;

use crate::model::AnswerValue;

/// Decide whether a submitted answer equals the correct answer key.
///
/// Rules, first applicable wins:
/// 1. identical values (including type) match;
/// 2. two texts match when equal after trimming, ignoring case;
/// 3. two numerics (numbers or numeric text) match when equal as `f64`;
/// 4. two lists match when equal element-wise after sorting each;
/// 5. anything else does not match.
pub fn matches(submitted: &AnswerValue, correct: &AnswerValue) -> bool {
    if submitted == correct {
        return true;
    }

    if let (AnswerValue::String(a), AnswerValue::String(b)) = (submitted, correct) {
        return a.trim().to_lowercase() == b.trim().to_lowercase();
    }

    if let (Some(a), Some(b)) = (as_number(submitted), as_number(correct)) {
        return a == b;
    }

    if let (AnswerValue::Array(a), AnswerValue::Array(b)) = (submitted, correct) {
        if a.len() != b.len() {
            return false;
        }
        let mut a: Vec<&AnswerValue> = a.iter().collect();
        let mut b: Vec<&AnswerValue> = b.iter().collect();
        a.sort_by(|x, y| compare_values(x, y));
        b.sort_by(|x, y| compare_values(x, y));
        return a.iter().zip(&b).all(|(x, y)| x == y);
    }

    false
}

/// Numeric reading of a value: a JSON number, or text holding a decimal number.
fn as_number(value: &AnswerValue) -> Option<f64> {
    match value {
        AnswerValue::Number(n) => n.as_f64(),
        AnswerValue::String(s) => parse_numeric_text(s),
        _ => None,
    }
}

/// Parse text such as `"7"`, `" -3.5 "`, or `"1e3"`.
///
/// Words that `f64::from_str` would accept, such as `"inf"` or `"NaN"`, are
/// not numeric answers.
fn parse_numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let numeric_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if trimmed.is_empty() || !numeric_chars || !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Total order over answer values, used to sort list answers.
///
/// Values of different kinds order null < bool < number < text < list < object.
fn compare_values(a: &AnswerValue, b: &AnswerValue) -> Ordering {
    fn rank(value: &AnswerValue) -> u8 {
        match value {
            AnswerValue::Null => 0,
            AnswerValue::Bool(_) => 1,
            AnswerValue::Number(_) => 2,
            AnswerValue::String(_) => 3,
            AnswerValue::Array(_) => 4,
            AnswerValue::Object(_) => 5,
        }
    }

    match (a, b) {
        (AnswerValue::Bool(x), AnswerValue::Bool(y)) => x.cmp(y),
        (AnswerValue::Number(x), AnswerValue::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (AnswerValue::String(x), AnswerValue::String(y)) => x.cmp(y),
        (AnswerValue::Array(x), AnswerValue::Array(y)) => {
            for (xa, ya) in x.iter().zip(y) {
                let ord = compare_values(xa, ya);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        (AnswerValue::Object(_), AnswerValue::Object(_)) => a.to_string().cmp(&b.to_string()),
        _ => rank(a).cmp(&rank(b)),
    }
}
