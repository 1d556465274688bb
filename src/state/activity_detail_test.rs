use super::*;
use crate::util::object_url::{MemoryFile, MemoryObjectUrls};

fn files(names: &[&str]) -> Vec<MemoryFile> {
    names.iter().map(|n| MemoryFile::new(n, n.as_bytes().to_vec())).collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_defaults_day_key_when_absent_or_empty() {
    assert_eq!(ActivityDetailState::new(None).day_key, "THUR");
    assert_eq!(ActivityDetailState::new(Some("")).day_key, "THUR");
    assert_eq!(ActivityDetailState::new(Some("TUE")).day_key, "TUE");
}

#[test]
fn new_seeds_three_trades_with_no_uploads() {
    let state = ActivityDetailState::default();
    let ids: Vec<&str> = state.trades.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t1", "t2", "t3"]);
    assert!(state.trades.iter().all(|t| t.gallery_uploads.is_empty()));
    assert!(state.trades.iter().all(|t| t.placeholder_images.len() == 2));
    assert!(state.open_trade_id.is_none());
}

#[test]
fn detail_metrics_have_no_notes() {
    let state = ActivityDetailState::default();
    assert_eq!(state.top_metrics.len(), 3);
    assert!(state.top_metrics.iter().all(|m| m.note.is_none()));
}

// =============================================================
// toggle_trade
// =============================================================

#[test]
fn toggle_trade_twice_closes() {
    let mut state = ActivityDetailState::default();
    state.toggle_trade("t1");
    assert!(state.is_open("t1"));
    state.toggle_trade("t1");
    assert!(state.open_trade_id.is_none());
}

#[test]
fn toggle_trade_switches_open_trade() {
    let mut state = ActivityDetailState::default();
    state.toggle_trade("t1");
    state.toggle_trade("t2");
    assert_eq!(state.open_trade_id.as_deref(), Some("t2"));
    assert!(!state.is_open("t1"));
}

// =============================================================
// add_images
// =============================================================

#[test]
fn add_images_appends_in_input_order() {
    let mut state = ActivityDetailState::default();
    let mut store = MemoryObjectUrls::new();
    let urls = state.add_images(&mut store, "t2", &files(&["a.png", "b.png"]));

    assert_eq!(urls.len(), 2);
    let trade = state.trade("t2").unwrap();
    let names: Vec<&str> = trade.gallery_uploads.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["a.png", "b.png"]);
    let stored: Vec<&String> = trade.gallery_uploads.iter().map(|u| &u.url).collect();
    assert_eq!(stored, urls.iter().collect::<Vec<_>>());
    assert!(urls.iter().all(|u| store.is_live(u)));
}

#[test]
fn add_images_with_no_files_is_noop() {
    let mut state = ActivityDetailState::default();
    let mut store = MemoryObjectUrls::new();
    let before = state.gallery_images("t1");
    assert!(state.add_images(&mut store, "t1", &[]).is_empty());
    assert_eq!(state.gallery_images("t1"), before);
    assert_eq!(store.live_count(), 0);
}

#[test]
fn add_images_unknown_trade_creates_nothing() {
    let mut state = ActivityDetailState::default();
    let mut store = MemoryObjectUrls::new();
    assert!(state.add_images(&mut store, "missing", &files(&["a.png"])).is_empty());
    assert_eq!(store.live_count(), 0);
}

#[test]
fn add_images_failure_rolls_back_and_returns_empty() {
    let mut state = ActivityDetailState::default();
    let mut store = MemoryObjectUrls::with_limit(1);
    let urls = state.add_images(&mut store, "t1", &files(&["a.png", "b.png"]));

    assert!(urls.is_empty());
    assert!(state.trade("t1").unwrap().gallery_uploads.is_empty());
    assert_eq!(store.live_count(), 0);
    assert_eq!(store.revoked().len(), 1);
}

// =============================================================
// remove_images
// =============================================================

#[test]
fn remove_images_revokes_matches_and_keeps_order() {
    let mut state = ActivityDetailState::default();
    let mut store = MemoryObjectUrls::new();
    let urls = state.add_images(&mut store, "t1", &files(&["a.png", "b.png", "c.png"]));

    let removed = state.remove_images(&mut store, "t1", &[urls[1].clone()]);
    assert_eq!(removed, 1);
    assert_eq!(store.revoked(), [urls[1].clone()]);

    let gallery = state.gallery_images("t1");
    assert!(!gallery.contains(&urls[1]));
    assert_eq!(gallery[..2], [urls[0].clone(), urls[2].clone()]);
}

#[test]
fn remove_images_ignores_placeholders_and_unknown_urls() {
    let mut state = ActivityDetailState::default();
    let mut store = MemoryObjectUrls::new();
    state.add_images(&mut store, "t3", &files(&["a.png"]));

    let targets = vec![PLACEHOLDER_IMAGES[2].to_owned(), "blob:memory/unknown".to_owned()];
    assert_eq!(state.remove_images(&mut store, "t3", &targets), 0);
    assert_eq!(state.gallery_images("t3").len(), 3);
    assert!(store.revoked().is_empty());
}

#[test]
fn remove_images_unknown_trade_is_noop() {
    let mut state = ActivityDetailState::default();
    let mut store = MemoryObjectUrls::new();
    let urls = state.add_images(&mut store, "t1", &files(&["a.png"]));
    assert_eq!(state.remove_images(&mut store, "nope", &urls), 0);
    assert!(store.is_live(&urls[0]));
}

// =============================================================
// gallery_images
// =============================================================

#[test]
fn gallery_lists_uploads_before_placeholders() {
    let mut state = ActivityDetailState::default();
    let mut store = MemoryObjectUrls::new();
    let urls = state.add_images(&mut store, "t1", &files(&["a.png", "b.png"]));

    let mut expected = urls.clone();
    expected.push(PLACEHOLDER_IMAGES[0].to_owned());
    expected.push(PLACEHOLDER_IMAGES[1].to_owned());
    assert_eq!(state.gallery_images("t1"), expected);
}

#[test]
fn gallery_unknown_trade_is_empty() {
    assert!(ActivityDetailState::default().gallery_images("t9").is_empty());
}

// =============================================================
// release_all
// =============================================================

#[test]
fn release_all_revokes_every_upload() {
    let mut state = ActivityDetailState::default();
    let mut store = MemoryObjectUrls::new();
    state.add_images(&mut store, "t1", &files(&["a.png"]));
    state.add_images(&mut store, "t2", &files(&["b.png", "c.png"]));

    state.release_all(&mut store);
    assert_eq!(store.live_count(), 0);
    assert_eq!(store.revoked().len(), 3);
    assert!(state.trades.iter().all(|t| t.gallery_uploads.is_empty()));
}
