//! Care schedule projections.
//!
//! Everything here is a pure function of a [`Plant`] and a reference "now".
//! The next watering and feeding dates and the urgency flag are never stored;
//! callers recompute them whenever they need them so they cannot drift from
//! the plant's last-care timestamps and intervals.
//!
//! Watering alone decides urgency. A plant that is overdue for fertilizer but
//! not thirsty is reported as such in [`CareStatus::fertilize_due`], yet it
//! does not raise [`CareStatus::urgent`].

use std::fmt;

use jiff::{civil::Date, Timestamp, ToSpan, Zoned};
use serde::Serialize;

use crate::{
    error::{GardenError, Result},
    models::Plant,
};

/// Where a care deadline falls relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Due {
    /// The deadline passed this many days ago (at least one)
    Overdue { days: u32 },
    /// The deadline is today
    Today,
    /// The deadline is this many days ahead (at least one)
    InDays(u32),
}

impl Due {
    /// Classifies a deadline against today's date.
    pub fn between(today: Date, deadline: Date) -> Self {
        let delta = days_until(today, deadline);
        match delta {
            0 => Due::Today,
            d if d < 0 => Due::Overdue {
                days: u32::try_from(-d).unwrap_or(u32::MAX),
            },
            d => Due::InDays(u32::try_from(d).unwrap_or(u32::MAX)),
        }
    }

    /// Returns true when the deadline is today or already behind us.
    pub fn has_arrived(&self) -> bool {
        matches!(self, Due::Today | Due::Overdue { .. })
    }

    /// Days past the deadline, zero if it has not passed.
    pub fn days_overdue(&self) -> u32 {
        match self {
            Due::Overdue { days } => *days,
            _ => 0,
        }
    }
}

impl fmt::Display for Due {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Due::Overdue { .. } => write!(f, "Overdue"),
            Due::Today => write!(f, "Today"),
            Due::InDays(1) => write!(f, "In 1 day"),
            Due::InDays(n) => write!(f, "In {n} days"),
        }
    }
}

/// Derived care state of a plant at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareStatus {
    /// Calendar date the plant needs water next
    pub next_water: Date,
    /// Calendar date the plant needs fertilizer next
    pub next_fertilize: Date,
    /// Watering deadline relative to today
    pub water_due: Due,
    /// Feeding deadline relative to today
    pub fertilize_due: Due,
    /// Watering is due today or earlier, or the user flagged the plant
    pub urgent: bool,
}

/// Computes the care status of `plant` as seen from `now`.
///
/// Last-care timestamps are converted to calendar dates in `now`'s time zone,
/// so "due today" follows the user's local day boundary.
pub fn care_status(plant: &Plant, now: &Zoned) -> CareStatus {
    let tz = now.time_zone().clone();
    let today = now.date();

    let next_water = add_days(
        plant.last_watered.to_zoned(tz.clone()).date(),
        plant.watering_interval_days,
    );
    let next_fertilize = add_days(
        plant.last_fertilized.to_zoned(tz).date(),
        plant.fertilize_interval_days,
    );

    let water_due = Due::between(today, next_water);
    let fertilize_due = Due::between(today, next_fertilize);

    CareStatus {
        next_water,
        next_fertilize,
        water_due,
        fertilize_due,
        urgent: water_due.has_arrived() || plant.urgent_override,
    }
}

/// Resolves a last-care marker into an instant.
///
/// Accepts `today`, `yesterday`, `N days ago` (or `N day ago`), a civil date
/// such as `2024-05-01` (midnight in `now`'s time zone) or an RFC 3339
/// timestamp.
pub fn parse_care_marker(text: &str, now: &Zoned) -> Result<Timestamp> {
    let marker = text.trim().to_lowercase();
    let invalid = |reason: String| GardenError::invalid_input("last care").with_reason(reason);

    let days_ago = match marker.as_str() {
        "today" | "now" => Some(0),
        "yesterday" => Some(1),
        _ => marker
            .strip_suffix(" days ago")
            .or_else(|| marker.strip_suffix(" day ago"))
            .map(|count| {
                count
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| invalid(format!("Invalid day count in '{text}'")))
            })
            .transpose()?,
    };

    if let Some(days) = days_ago {
        return now
            .checked_sub(i64::from(days).days())
            .map(|zoned| zoned.timestamp())
            .map_err(|e| invalid(e.to_string()));
    }

    if let Ok(timestamp) = text.trim().parse::<Timestamp>() {
        return Ok(timestamp);
    }

    text.trim()
        .parse::<Date>()
        .and_then(|date| date.to_zoned(now.time_zone().clone()))
        .map(|zoned| zoned.timestamp())
        .map_err(|_| invalid(format!("Unrecognized date '{text}'")))
}

fn add_days(date: Date, days: u32) -> Date {
    date.checked_add(i64::from(days).days())
        .unwrap_or(Date::MAX)
}

fn days_until(from: Date, to: Date) -> i64 {
    from.until(to)
        .map(|span| i64::from(span.get_days()))
        .unwrap_or(0)
}
