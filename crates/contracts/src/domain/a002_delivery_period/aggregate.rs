use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Usage above which a period is shown as nearly full
pub const LIMITED_THRESHOLD_PERCENT: u8 = 80;

/// Delivery window on a given day.
///
/// `capacity_used_percent` is computed by the server from booked orders; the
/// front-end only uses it for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPeriod {
    pub id: String,
    pub day: NaiveDate,
    #[serde(rename = "startsAt")]
    pub starts_at: NaiveTime,
    #[serde(rename = "endsAt")]
    pub ends_at: NaiveTime,
    #[serde(rename = "capacityUsedPercent", default)]
    pub capacity_used_percent: u8,
    #[serde(rename = "isOpen", default = "default_open")]
    pub is_open: bool,
}

fn default_open() -> bool {
    true
}

/// Display bucket for a period's remaining capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Limited,
    Full,
}

impl Availability {
    pub fn display_name(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Limited => "Limited",
            Availability::Full => "Full",
        }
    }
}

impl DeliveryPeriod {
    /// Server percentage clamped to 0..=100
    pub fn used_percent(&self) -> u8 {
        self.capacity_used_percent.min(100)
    }

    pub fn availability(&self) -> Availability {
        let used = self.used_percent();
        if !self.is_open || used >= 100 {
            Availability::Full
        } else if used >= LIMITED_THRESHOLD_PERCENT {
            Availability::Limited
        } else {
            Availability::Available
        }
    }

    /// "Thu 12 Jun · 10:00–14:00"
    pub fn label(&self) -> String {
        format!(
            "{} · {}–{}",
            self.day.format("%a %d %b"),
            self.starts_at.format("%H:%M"),
            self.ends_at.format("%H:%M")
        )
    }
}
