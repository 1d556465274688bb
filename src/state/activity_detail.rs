//! Per-day trade detail state with user image galleries.
//!
//! DESIGN
//! ======
//! Uploaded gallery images are referenced by object URLs minted through an
//! `ObjectUrlStore`. The state owns the list of live URLs; the store owns the
//! underlying content. Every URL appended by `add_images` leaves the state
//! only through `remove_images` or `release_all`, both of which revoke it.
//!
//! ERROR HANDLING
//! ==============
//! Unknown trade ids are no-ops with empty results. URL creation failures are
//! logged and collapse to an empty result with no partial mutation.

#[cfg(test)]
#[path = "activity_detail_test.rs"]
mod activity_detail_test;

use super::activity::DEFAULT_DAY_KEY;
use super::metric::MetricCard;
use crate::util::object_url::ObjectUrlStore;

pub const PLACEHOLDER_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1640340434855-6084b1f4901c?auto=format&fit=crop&w=1200&q=60",
    "https://images.unsplash.com/photo-1559526324-593bc073d938?auto=format&fit=crop&w=1200&q=60",
    "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?auto=format&fit=crop&w=1200&q=60",
];

/// A user-added gallery image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryUpload {
    pub url: String,
    pub name: String,
}

/// A journaled trade with narrative notes and screenshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trade {
    pub id: String,
    pub symbol: String,
    pub time_label: String,
    pub tags: Vec<String>,
    pub narrative_bullets: Vec<String>,
    pub gallery_uploads: Vec<GalleryUpload>,
    pub placeholder_images: Vec<String>,
}

impl Trade {
    fn mock(id: &str, symbol: &str, time_label: &str, tags: &[&str], bullets: &[&str], placeholders: [usize; 2]) -> Self {
        Self {
            id: id.to_owned(),
            symbol: symbol.to_owned(),
            time_label: time_label.to_owned(),
            tags: tags.iter().map(|&t| t.to_owned()).collect(),
            narrative_bullets: bullets.iter().map(|&b| b.to_owned()).collect(),
            gallery_uploads: Vec::new(),
            placeholder_images: placeholders.iter().map(|&i| PLACEHOLDER_IMAGES[i].to_owned()).collect(),
        }
    }

    /// Uploaded URLs followed by placeholder URLs.
    pub fn gallery_images(&self) -> Vec<String> {
        self.gallery_uploads
            .iter()
            .map(|u| u.url.clone())
            .chain(self.placeholder_images.iter().cloned())
            .collect()
    }
}

/// Activity detail provider for one day.
#[derive(Clone, Debug)]
pub struct ActivityDetailState {
    pub day_key: String,
    pub top_metrics: Vec<MetricCard>,
    pub trades: Vec<Trade>,
    pub open_trade_id: Option<String>,
}

impl Default for ActivityDetailState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ActivityDetailState {
    /// Seed mock trades for `day_key`, falling back to the default day.
    pub fn new(day_key: Option<&str>) -> Self {
        let day_key = day_key.filter(|k| !k.is_empty()).unwrap_or(DEFAULT_DAY_KEY);
        Self {
            day_key: day_key.to_owned(),
            top_metrics: vec![
                MetricCard::new("Total Time Spent", "4h 25m", "+10%"),
                MetricCard::new("Active days", "4 / 5", "+10%"),
                MetricCard::new("Consistency Score", "4 / 5", "+10%"),
            ],
            trades: vec![
                Trade::mock(
                    "t1",
                    "EURUSD",
                    "40:05 - Ongoing",
                    &["Fair Value Gaps", "Mitigation Blocks"],
                    &["FVG hit 50% fib level, and then went straight to Tp", "Mitigation Block was just around the corner"],
                    [0, 1],
                ),
                Trade::mock(
                    "t2",
                    "GBPUSD",
                    "12:20 - Closed",
                    &["Mitigation Blocks"],
                    &["Tight stop was respected", "Good risk management"],
                    [1, 2],
                ),
                Trade::mock(
                    "t3",
                    "USDJPY",
                    "02:10 - Ongoing",
                    &["Fair Value Gaps"],
                    &["Re-entry after pullback", "Trailing stop used"],
                    [2, 0],
                ),
            ],
            open_trade_id: None,
        }
    }

    pub fn trade(&self, trade_id: &str) -> Option<&Trade> {
        self.trades.iter().find(|t| t.id == trade_id)
    }

    pub fn is_open(&self, trade_id: &str) -> bool {
        self.open_trade_id.as_deref() == Some(trade_id)
    }

    /// Open `trade_id`, or close it if it is already the open trade.
    pub fn toggle_trade(&mut self, trade_id: &str) {
        if self.is_open(trade_id) {
            self.open_trade_id = None;
        } else {
            self.open_trade_id = Some(trade_id.to_owned());
        }
    }

    /// Append one upload per file to the trade's gallery and return the new URLs.
    ///
    /// Returns an empty list without mutating anything when `files` is empty,
    /// the trade is unknown, or any URL cannot be created. URLs minted before
    /// a failure are revoked.
    pub fn add_images<S: ObjectUrlStore>(&mut self, store: &mut S, trade_id: &str, files: &[S::File]) -> Vec<String> {
        if files.is_empty() {
            return Vec::new();
        }
        let Some(trade) = self.trades.iter_mut().find(|t| t.id == trade_id) else {
            return Vec::new();
        };

        let mut created = Vec::with_capacity(files.len());
        for file in files {
            match store.create(file) {
                Ok(url) => created.push(GalleryUpload { url, name: S::file_name(file) }),
                Err(e) => {
                    leptos::logging::error!("add_images failed for trade {trade_id}: {e}");
                    for upload in &created {
                        store.revoke(&upload.url);
                    }
                    return Vec::new();
                }
            }
        }

        let urls = created.iter().map(|u| u.url.clone()).collect();
        trade.gallery_uploads.extend(created);
        urls
    }

    /// Remove and revoke every upload whose URL is in `urls`.
    ///
    /// Returns the number of uploads removed; unknown trades remove nothing.
    pub fn remove_images<S: ObjectUrlStore>(&mut self, store: &mut S, trade_id: &str, urls: &[String]) -> usize {
        let Some(trade) = self.trades.iter_mut().find(|t| t.id == trade_id) else {
            return 0;
        };
        let before = trade.gallery_uploads.len();
        trade.gallery_uploads.retain(|upload| {
            if urls.contains(&upload.url) {
                store.revoke(&upload.url);
                false
            } else {
                true
            }
        });
        before - trade.gallery_uploads.len()
    }

    /// Uploads then placeholders for `trade_id`; empty for an unknown trade.
    pub fn gallery_images(&self, trade_id: &str) -> Vec<String> {
        self.trade(trade_id).map(Trade::gallery_images).unwrap_or_default()
    }

    /// Revoke every remaining upload. Called when the owning view is torn down.
    pub fn release_all<S: ObjectUrlStore>(&mut self, store: &mut S) {
        for trade in &mut self.trades {
            for upload in trade.gallery_uploads.drain(..) {
                store.revoke(&upload.url);
            }
        }
    }
}
