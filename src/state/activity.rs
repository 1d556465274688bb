//! Activity summary state: range toggle, aggregate metrics, per-day breakdown.
//!
//! DESIGN
//! ======
//! Mutators are direct assignments. Invalid range input is dropped silently
//! and the active day key is never validated against the day list, so views
//! must tolerate a key with no matching `DayActivity`.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use super::metric::MetricCard;

/// Day selected when nothing else has been chosen.
pub const DEFAULT_DAY_KEY: &str = "THUR";

const AVG_NOTE: &str = "Avg 40 mins / day";

/// Aggregation window for the activity summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivityRange {
    #[default]
    Weekly,
    Monthly,
}

impl ActivityRange {
    /// Parse the wire form (`"weekly"` / `"monthly"`). Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// A selectable range tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeTab {
    pub label: &'static str,
    pub value: ActivityRange,
}

pub const RANGE_TABS: [RangeTab; 2] = [
    RangeTab { label: "Weekly", value: ActivityRange::Weekly },
    RangeTab { label: "Monthly", value: ActivityRange::Monthly },
];

/// One traded symbol line inside a day card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolTime {
    pub symbol: String,
    pub time: String,
}

/// Activity for a single calendar day. `key` is unique within the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayActivity {
    pub key: String,
    pub day_label: String,
    pub day_number: u32,
    pub badge: String,
    pub rows: Vec<SymbolTime>,
    pub more_text: String,
}

/// Activity summary provider.
///
/// `ActivityPage` owns one instance per mount, wrapped in a single
/// `RwSignal` and handed to the day cards through context.
#[derive(Clone, Debug)]
pub struct ActivityState {
    pub selected_range: ActivityRange,
    pub tabs: Vec<RangeTab>,
    pub top_metrics: Vec<MetricCard>,
    pub secondary_metrics: Vec<MetricCard>,
    pub daily_activity: Vec<DayActivity>,
    pub callout: String,
    pub active_day_key: String,
}

impl Default for ActivityState {
    fn default() -> Self {
        Self {
            selected_range: ActivityRange::Weekly,
            tabs: RANGE_TABS.to_vec(),
            top_metrics: vec![
                MetricCard::new("Total Time Spent", "4h 25m", "+10%").with_note(AVG_NOTE),
                MetricCard::new("Active days", "4 / 5", "+10%").with_note(AVG_NOTE),
                MetricCard::new("Active days", "4 / 5", "+10%").with_note(AVG_NOTE),
                MetricCard::new("Consistency Score", "4 / 5", "+10%").with_note(AVG_NOTE),
            ],
            secondary_metrics: vec![
                MetricCard::new("Most Traded Pair", "EUR/NZD", "+10%").with_note(AVG_NOTE),
                MetricCard::new("Pairs Traded", "9", "+10%").with_note(AVG_NOTE),
                MetricCard::new("Most Active Day", "Tuesday", "+10%").with_note(AVG_NOTE),
                MetricCard::new("Most Used Bias", "Mitigation Blocks", "+10%").with_note(AVG_NOTE),
            ],
            daily_activity: ["MON", "TUE", "WED", "THUR"].into_iter().map(mock_day).collect(),
            callout: "Alex, this is where your attention went this week".to_owned(),
            active_day_key: DEFAULT_DAY_KEY.to_owned(),
        }
    }
}

impl ActivityState {
    /// Switch the aggregation window. Unrecognized values are ignored.
    pub fn set_range(&mut self, value: &str) {
        if let Some(range) = ActivityRange::parse(value) {
            self.selected_range = range;
        }
    }

    /// Set the active day key. The key is not checked against `daily_activity`.
    pub fn set_active_day(&mut self, day_key: &str) {
        day_key.clone_into(&mut self.active_day_key);
    }

    /// The day entry matching the active key, if there is one.
    pub fn active_day(&self) -> Option<&DayActivity> {
        self.daily_activity.iter().find(|d| d.key == self.active_day_key)
    }
}

fn mock_day(key: &str) -> DayActivity {
    let row = |symbol: &str| SymbolTime { symbol: symbol.to_owned(), time: "40m".to_owned() };
    DayActivity {
        key: key.to_owned(),
        day_label: key.to_owned(),
        day_number: 5,
        badge: "55m".to_owned(),
        rows: vec![row("EURNZD"), row("XAUUSD"), row("EURNZD")],
        more_text: "+5 more →".to_owned(),
    }
}
