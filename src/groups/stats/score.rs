use super::super::domain::{Lunch, Score};

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 10.0;
pub const SCORE_STEP: f64 = 0.25;

/// Numeric stand-in for "no scores yet" where a reduction needs a number
/// instead of an `Option`. Any real score is strictly greater, so absence
/// loses every comparison.
pub const ABSENT_SCORE: f64 = -1.0;

/// Arithmetic mean of the values, `None` for empty input. Zero is a valid
/// score, so an empty collection must never average to zero.
pub fn average<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Mean as [`average`], with [`ABSENT_SCORE`] for empty input.
pub fn average_or_absent<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    average(values).unwrap_or(ABSENT_SCORE)
}

/// Mean over a slice of score records.
pub fn score_average(scores: &[Score]) -> Option<f64> {
    average(scores.iter().map(|score| score.value))
}

/// Mean of one lunch's own scores.
pub fn lunch_average(lunch: &Lunch) -> Option<f64> {
    score_average(&lunch.scores)
}
