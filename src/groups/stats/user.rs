use super::super::domain::{LocatedScore, Lunch, UserSnapshot};
use super::score::{average, average_or_absent, lunch_average};
use super::views::{ChosenLunch, UserStats};
use tracing::debug;

/// Compute one user's personal aggregates.
///
/// A user with a single score resolves lowest and highest location to that
/// same entry; a user with none gets `None` for both.
pub fn user_stats(snapshot: &UserSnapshot) -> UserStats {
    let lunch_count = snapshot.scores.len();
    let average_score = average(snapshot.scores.iter().map(|entry| entry.score.value));

    let mut ordered: Vec<&LocatedScore> = snapshot.scores.iter().collect();
    ordered.sort_by(|a, b| a.score.value.total_cmp(&b.score.value));
    let lowest_score_location = ordered.first().map(|entry| entry.location_name.clone());
    let highest_score_location = ordered.last().map(|entry| entry.location_name.clone());

    // Left-to-right reduction from nothing: the first lunch seeds the
    // incumbent even when nobody scored it, and only a strictly greater
    // average replaces it afterwards.
    let mut best: Option<(&Lunch, f64)> = None;
    for lunch in &snapshot.chosen_lunches {
        let avg = average_or_absent(lunch.scores.iter().map(|score| score.value));
        match best {
            Some((_, incumbent)) if avg <= incumbent => {}
            _ => best = Some((lunch, avg)),
        }
    }
    let best_chosen_lunch = best.map(|(lunch, _)| ChosenLunch {
        lunch_id: lunch.id,
        date: lunch.date,
        average: lunch_average(lunch),
    });

    debug!(
        user_id = snapshot.user.id,
        lunch_count, "computed user statistics"
    );

    UserStats {
        lunch_count,
        average_score,
        lowest_score_location,
        highest_score_location,
        best_chosen_lunch,
    }
}
