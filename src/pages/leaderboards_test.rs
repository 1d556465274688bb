use super::*;

#[test]
fn apply_filter_sets_sort_and_resets_page() {
    let q = LeaderboardQuery::default().with_page(3);
    let next = apply_filter(&q, "sort", "daily_average").unwrap();
    assert_eq!(next.sort, LeaderboardSort::DailyAverage);
    assert_eq!(next.page, 1);
}

#[test]
fn apply_filter_sets_timeframe() {
    let next = apply_filter(&LeaderboardQuery::default(), "timeframe", "all_time").unwrap();
    assert_eq!(next.timeframe, Timeframe::AllTime);
}

#[test]
fn apply_filter_rejects_unknown_values_and_fields() {
    let q = LeaderboardQuery::default();
    assert!(apply_filter(&q, "sort", "newest").is_none());
    assert!(apply_filter(&q, "region", "eu").is_none());
}
