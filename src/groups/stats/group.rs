use super::super::domain::GroupSnapshot;
use super::score::{average, lunch_average, score_average};
use super::views::{GroupStats, LocationAverage, MemberAverage};
use tracing::debug;

/// Compute the group-level aggregates from a fully joined snapshot.
///
/// Pure and infallible: an empty or score-less group yields `None` fields,
/// never an error. Every tie is broken first-wins, matching the strict
/// comparisons the rest of the application was built against.
pub fn group_stats(group: &GroupSnapshot) -> GroupStats {
    let average_score = average(
        group
            .locations
            .iter()
            .flat_map(|location| location.lunches.iter())
            .flat_map(|lunch| lunch.scores.iter())
            .map(|score| score.value),
    );

    // Member input order matters below: ties fall to the earlier entry.
    let member_averages: Vec<MemberAverage> = group
        .members
        .iter()
        .filter_map(|member| {
            score_average(&member.scores).map(|avg| MemberAverage {
                user_id: member.user.id,
                name: member.user.name.clone(),
                average: avg,
            })
        })
        .collect();

    let mut ranked = member_averages.clone();
    ranked.sort_by(|a, b| b.average.total_cmp(&a.average));
    let most_positive_member = ranked.first().cloned();
    let most_negative_member = ranked.last().cloned();

    let most_average_member = average_score.and_then(|group_avg| {
        let mut closest: Option<&MemberAverage> = None;
        let mut closest_distance = f64::INFINITY;
        for entry in &member_averages {
            let distance = (entry.average - group_avg).abs();
            if distance < closest_distance {
                closest = Some(entry);
                closest_distance = distance;
            }
        }
        closest.cloned()
    });

    let mut best_location: Option<LocationAverage> = None;
    let mut worst_location: Option<LocationAverage> = None;
    for location in &group.locations {
        // Mean of per-lunch means, not a flat mean of the location's scores.
        // Lunches nobody scored contribute nothing.
        let location_avg = average(
            location
                .lunches
                .iter()
                .filter_map(|lunch| lunch_average(lunch)),
        );
        let Some(avg) = location_avg else {
            continue;
        };

        if best_location
            .as_ref()
            .map_or(true, |best| avg > best.average)
        {
            best_location = Some(LocationAverage {
                location_id: location.location_id,
                name: location.name.clone(),
                average: avg,
            });
        }
        if worst_location
            .as_ref()
            .map_or(true, |worst| avg < worst.average)
        {
            worst_location = Some(LocationAverage {
                location_id: location.location_id,
                name: location.name.clone(),
                average: avg,
            });
        }
    }

    debug!(
        group_id = group.id,
        ranked_members = ranked.len(),
        "computed group statistics"
    );

    GroupStats {
        average_score,
        best_location,
        worst_location,
        most_positive_member,
        most_negative_member,
        most_average_member,
    }
}
