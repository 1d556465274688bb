use super::*;

#[test]
fn profile_keeps_unknown_fields() {
    let profile: Profile = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "name": "Daniel Peters",
        "country": "DE"
    }))
    .unwrap();
    assert_eq!(profile.id, "p-1");
    assert_eq!(profile.name.as_deref(), Some("Daniel Peters"));
    assert!(profile.avatar.is_none());
    assert_eq!(profile.extra.get("country"), Some(&serde_json::json!("DE")));
}

#[test]
fn leaderboard_row_serializes_camel_case() {
    let row = LeaderboardRow {
        id: 1,
        rank: 17,
        name: "Daniel Peters".to_owned(),
        avatar: None,
        hours_on_chart: "44hrs 17mins".to_owned(),
        daily_average: "4hrs 17mins".to_owned(),
        pairs_visited: vec!["USD/JPY".to_owned()],
        country_flag: "🇩🇪".to_owned(),
    };
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["hoursOnChart"], "44hrs 17mins");
    assert_eq!(json["pairsVisited"][0], "USD/JPY");
    assert_eq!(json["countryFlag"], "🇩🇪");
}

#[test]
fn leaderboard_query_defaults() {
    let q = LeaderboardQuery::default();
    assert_eq!(q.sort, LeaderboardSort::MostActive);
    assert_eq!(q.timeframe, Timeframe::Weekly);
    assert!(q.search.is_empty());
    assert_eq!((q.page, q.per_page), (1, 10));
}

#[test]
fn sort_and_timeframe_strings_match_serde() {
    for sort in LeaderboardSort::ALL {
        assert_eq!(serde_json::to_value(sort).unwrap(), sort.as_str());
        assert_eq!(LeaderboardSort::parse(sort.as_str()), Some(sort));
    }
    for tf in Timeframe::ALL {
        assert_eq!(serde_json::to_value(tf).unwrap(), tf.as_str());
        assert_eq!(Timeframe::parse(tf.as_str()), Some(tf));
    }
    assert_eq!(LeaderboardSort::parse("newest"), None);
    assert_eq!(Timeframe::parse("daily"), None);
}

#[test]
fn with_page_keeps_filters_and_clamps() {
    let q = LeaderboardQuery { search: "dan".to_owned(), ..LeaderboardQuery::default() };
    let next = q.with_page(3);
    assert_eq!(next.page, 3);
    assert_eq!(next.search, "dan");
    assert_eq!(q.with_page(0).page, 1);
}

#[test]
fn with_search_trims_and_resets_page() {
    let q = LeaderboardQuery::default().with_page(4).with_search("  peters ");
    assert_eq!(q.search, "peters");
    assert_eq!(q.page, 1);
}
