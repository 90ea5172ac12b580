use chrono::NaiveDate;
use serde::Serialize;

/// One member's ranking entry. Only members with at least one score in the
/// group are ranked at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberAverage {
    pub user_id: u64,
    pub name: String,
    pub average: f64,
}

/// One location's ranking entry: the mean of its per-lunch means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationAverage {
    pub location_id: u64,
    pub name: String,
    pub average: f64,
}

/// A lunch the user picked, with the rating it attracted. `average` is
/// `None` when nobody scored the lunch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChosenLunch {
    pub lunch_id: u64,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}

/// Group-level aggregates. Every field is `None` while the group has no
/// matching data; the presentation layer renders absence as "-".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_location: Option<LocationAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_location: Option<LocationAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_positive_member: Option<MemberAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_negative_member: Option<MemberAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_average_member: Option<MemberAverage>,
}

/// Per-user aggregates over the user's whole rating history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub lunch_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_score_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_score_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_chosen_lunch: Option<ChosenLunch>,
}

/// Render an average the way the UI shows it: one decimal place, "-" when
/// there is no data.
pub fn format_score(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{value:.1}"),
        None => "-".to_string(),
    }
}
