use super::*;
use crate::net::types::{LeaderboardSort, Timeframe};

// =============================================================
// mock_leaderboard
// =============================================================

#[test]
fn first_page_of_ten_has_five_pages() {
    let page = mock_leaderboard(&LeaderboardQuery { page: 1, per_page: 10, ..LeaderboardQuery::default() }).unwrap();
    assert_eq!(page.data.len(), 10);
    assert_eq!(page.meta, LeaderboardMeta { total: 42, page: 1, per_page: 10, last_page: 5 });
}

#[test]
fn last_page_rounds_up() {
    let query = |per_page| LeaderboardQuery { per_page, ..LeaderboardQuery::default() };
    assert_eq!(mock_leaderboard(&query(42)).unwrap().meta.last_page, 1);
    assert_eq!(mock_leaderboard(&query(41)).unwrap().meta.last_page, 2);
    assert_eq!(mock_leaderboard(&query(1)).unwrap().meta.last_page, 42);
    assert_eq!(mock_leaderboard(&query(100)).unwrap().meta.last_page, 1);
}

#[test]
fn rows_are_numbered_from_one() {
    let page = mock_leaderboard(&LeaderboardQuery { per_page: 3, ..LeaderboardQuery::default() }).unwrap();
    let ids: Vec<u32> = page.data.iter().map(|r| r.id).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(page.data[0].pairs_visited.len(), 8);
}

#[test]
fn filters_do_not_change_rows() {
    let plain = mock_leaderboard(&LeaderboardQuery::default()).unwrap();
    let filtered = mock_leaderboard(&LeaderboardQuery {
        sort: LeaderboardSort::DailyAverage,
        timeframe: Timeframe::AllTime,
        search: "daniel".to_owned(),
        page: 3,
        per_page: 10,
    })
    .unwrap();
    assert_eq!(plain.data, filtered.data);
    assert_eq!(filtered.meta.page, 3);
}

#[test]
fn zero_page_size_is_rejected() {
    let err = mock_leaderboard(&LeaderboardQuery { per_page: 0, ..LeaderboardQuery::default() }).unwrap_err();
    assert!(matches!(err, ApiError::InvalidQuery(_)));
}

// =============================================================
// share_payload
// =============================================================

#[test]
fn share_payload_encodes_default_filters() {
    let payload = share_payload("https://journal.test", &LeaderboardQuery::default());
    assert_eq!(
        payload.url,
        "https://journal.test/leaderboards?sort=most_active&timeframe=weekly&page=1&perPage=10"
    );
}

#[test]
fn share_payload_escapes_search() {
    let query = LeaderboardQuery { search: "dan & co".to_owned(), ..LeaderboardQuery::default() };
    let payload = share_payload("https://journal.test/", &query);
    assert!(payload.url.starts_with("https://journal.test/leaderboards?"));
    assert!(payload.url.ends_with("&search=dan%20%26%20co"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn current_origin_is_empty_off_browser() {
    assert!(current_origin().is_empty());
}
