use super::common::*;
use crate::groups::stats::user_stats;

#[test]
fn single_score_resolves_both_location_ends_without_panicking() {
    let snapshot = user_snapshot(vec![located(6.5, "Canteen")], vec![]);

    let stats = user_stats(&snapshot);

    assert_eq!(stats.lunch_count, 1);
    assert_close(stats.average_score.expect("one score"), 6.5);
    assert_eq!(stats.lowest_score_location.as_deref(), Some("Canteen"));
    assert_eq!(stats.highest_score_location.as_deref(), Some("Canteen"));
}

#[test]
fn locations_rank_by_score_value_not_input_order() {
    let snapshot = user_snapshot(
        vec![
            located(7.0, "Bistro"),
            located(2.5, "Kiosk"),
            located(9.25, "Trattoria"),
        ],
        vec![],
    );

    let stats = user_stats(&snapshot);

    assert_eq!(stats.lunch_count, 3);
    assert_eq!(stats.lowest_score_location.as_deref(), Some("Kiosk"));
    assert_eq!(stats.highest_score_location.as_deref(), Some("Trattoria"));
}

#[test]
fn no_scores_means_no_locations_and_no_average() {
    let stats = user_stats(&user_snapshot(vec![], vec![]));

    assert_eq!(stats.lunch_count, 0);
    assert_eq!(stats.average_score, None);
    assert_eq!(stats.lowest_score_location, None);
    assert_eq!(stats.highest_score_location, None);
    assert_eq!(stats.best_chosen_lunch, None);
}

#[test]
fn best_chosen_lunch_takes_the_strictly_greatest_average() {
    let snapshot = user_snapshot(
        vec![],
        vec![
            lunch(1, 1, &[5.0]),
            lunch(2, 1, &[8.0, 9.0]),
            lunch(3, 1, &[7.0]),
        ],
    );

    let best = user_stats(&snapshot).best_chosen_lunch.expect("chosen");

    assert_eq!(best.lunch_id, 2);
    assert_close(best.average.expect("scored"), 8.5);
}

#[test]
fn tied_chosen_lunches_keep_the_first_entry() {
    let snapshot = user_snapshot(vec![], vec![lunch(1, 1, &[7.0]), lunch(2, 1, &[7.0])]);

    let best = user_stats(&snapshot).best_chosen_lunch.expect("chosen");

    assert_eq!(best.lunch_id, 1);
}

#[test]
fn unscored_chosen_lunch_seeds_the_reduction_but_loses_to_any_rating() {
    let snapshot = user_snapshot(vec![], vec![lunch(1, 1, &[]), lunch(2, 1, &[0.25])]);

    let best = user_stats(&snapshot).best_chosen_lunch.expect("chosen");

    assert_eq!(best.lunch_id, 2);
}

#[test]
fn all_unscored_chosen_lunches_fall_back_to_the_first() {
    let snapshot = user_snapshot(vec![], vec![lunch(1, 1, &[]), lunch(2, 1, &[])]);

    let best = user_stats(&snapshot).best_chosen_lunch.expect("chosen");

    assert_eq!(best.lunch_id, 1);
    assert_eq!(best.average, None);
}
