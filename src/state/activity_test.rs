use super::*;

// =============================================================
// ActivityRange
// =============================================================

#[test]
fn range_parse_accepts_wire_values() {
    assert_eq!(ActivityRange::parse("weekly"), Some(ActivityRange::Weekly));
    assert_eq!(ActivityRange::parse("monthly"), Some(ActivityRange::Monthly));
}

#[test]
fn range_parse_is_case_sensitive() {
    assert_eq!(ActivityRange::parse("Weekly"), None);
    assert_eq!(ActivityRange::parse(" monthly"), None);
}

#[test]
fn range_as_str_matches_parse() {
    for tab in RANGE_TABS {
        assert_eq!(ActivityRange::parse(tab.value.as_str()), Some(tab.value));
    }
}

// =============================================================
// ActivityState defaults
// =============================================================

#[test]
fn activity_state_defaults() {
    let state = ActivityState::default();
    assert_eq!(state.selected_range, ActivityRange::Weekly);
    assert_eq!(state.active_day_key, "THUR");
    assert_eq!(state.tabs.len(), 2);
    assert_eq!(state.top_metrics.len(), 4);
    assert_eq!(state.secondary_metrics.len(), 4);
    assert!(state.callout.starts_with("Alex"));
}

#[test]
fn daily_activity_keys_are_unique() {
    let state = ActivityState::default();
    let keys: Vec<&str> = state.daily_activity.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, ["MON", "TUE", "WED", "THUR"]);
}

#[test]
fn summary_metrics_all_carry_notes() {
    let state = ActivityState::default();
    assert!(state.top_metrics.iter().chain(&state.secondary_metrics).all(|m| m.note.is_some()));
}

// =============================================================
// set_range
// =============================================================

#[test]
fn set_range_switches_between_valid_values() {
    let mut state = ActivityState::default();
    state.set_range("monthly");
    assert_eq!(state.selected_range, ActivityRange::Monthly);
    state.set_range("weekly");
    assert_eq!(state.selected_range, ActivityRange::Weekly);
}

#[test]
fn set_range_ignores_invalid_values() {
    let mut state = ActivityState::default();
    state.set_range("monthly");
    for bad in ["", "daily", "MONTHLY", "weekly ", "yearly"] {
        state.set_range(bad);
        assert_eq!(state.selected_range, ActivityRange::Monthly, "input {bad:?}");
    }
}

// =============================================================
// set_active_day
// =============================================================

#[test]
fn set_active_day_selects_known_day() {
    let mut state = ActivityState::default();
    state.set_active_day("TUE");
    assert_eq!(state.active_day_key, "TUE");
    assert_eq!(state.active_day().map(|d| d.key.as_str()), Some("TUE"));
}

#[test]
fn set_active_day_accepts_unknown_key() {
    let mut state = ActivityState::default();
    state.set_active_day("SUN");
    assert_eq!(state.active_day_key, "SUN");
    assert!(state.active_day().is_none());
}
