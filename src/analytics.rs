//! Analytics aggregations for the admin dashboard.
//!
//! Pure grouping functions over already-fetched order and session rows; the
//! dashboard charts consume the results directly. No persistence or I/O of
//! its own.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Deserialize;

use crate::core::models::OrderItem;

const CANCELLED: &str = "cancelled";
const TOP_ITEM_NAME_MAX: usize = 18;

/// An order row as fetched for analytics.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    pub status: String,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// A page-session row from the session tracker.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRecord {
    pub duration_seconds: i64,
    #[serde(default)]
    pub placed_order: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    pub total_revenue: f64,
    pub completed_orders: usize,
    pub average_order: f64,
}

/// One day of the orders-over-time chart, keyed `dd.MM`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub day: String,
    pub orders: u32,
    pub revenue: f64,
}

/// Revenue across non-cancelled orders.
#[must_use]
pub fn revenue_summary(orders: &[OrderRecord]) -> RevenueSummary {
    let completed: Vec<&OrderRecord> =
        orders.iter().filter(|o| o.status != CANCELLED).collect();
    let total_revenue: f64 = completed.iter().map(|o| o.total).sum();
    let average_order = if completed.is_empty() {
        0.0
    } else {
        total_revenue / completed.len() as f64
    };

    RevenueSummary {
        total_revenue,
        completed_orders: completed.len(),
        average_order,
    }
}

/// Bucket orders into the trailing `range_days` window ending at `today`.
///
/// Every day in the window appears, pre-seeded with zeroes, oldest first.
/// Order counts include every order; revenue excludes cancelled ones.
/// Orders outside the window are ignored.
#[must_use]
pub fn orders_by_day(orders: &[OrderRecord], range_days: u32, today: NaiveDate) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = (0..range_days)
        .rev()
        .map(|i| DayBucket {
            day: day_key(today - Duration::days(i64::from(i))),
            orders: 0,
            revenue: 0.0,
        })
        .collect();

    for order in orders {
        let key = day_key(order.created_at.date_naive());
        if let Some(bucket) = buckets.iter_mut().find(|b| b.day == key) {
            bucket.orders += 1;
            if order.status != CANCELLED {
                bucket.revenue += order.total;
            }
        }
    }

    buckets
}

fn day_key(date: NaiveDate) -> String {
    date.format("%d.%m").to_string()
}

/// Count of orders per status, sorted by count descending then name for a
/// deterministic chart order.
#[must_use]
pub fn status_distribution(orders: &[OrderRecord]) -> Vec<(String, u32)> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for order in orders {
        *counts.entry(order.status.as_str()).or_default() += 1;
    }

    let mut result: Vec<(String, u32)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    result.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    result
}

/// Best-selling items by summed quantity, at most `limit` entries. Names
/// longer than 18 characters are truncated with an ellipsis for the chart
/// axis.
#[must_use]
pub fn top_items(orders: &[OrderRecord], limit: usize) -> Vec<(String, u32)> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for order in orders {
        for item in &order.items {
            *counts.entry(item.name.as_str()).or_default() += item.qty;
        }
    }

    let mut ranked: Vec<(&str, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(name, qty)| (truncate_name(name), qty))
        .collect()
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > TOP_ITEM_NAME_MAX {
        let mut shortened: String = name.chars().take(TOP_ITEM_NAME_MAX).collect();
        shortened.push('…');
        shortened
    } else {
        name.to_string()
    }
}

/// Labels of the session-duration histogram, shortest first.
pub const DURATION_BUCKET_LABELS: [&str; 5] =
    ["0-1 dk", "1-3 dk", "3-5 dk", "5-10 dk", "10+ dk"];

/// Histogram of session durations over sessions that lasted at all
/// (zero-duration rows are tracker noise and are skipped).
#[must_use]
pub fn session_duration_buckets(sessions: &[SessionRecord]) -> [(&'static str, u32); 5] {
    let mut buckets = DURATION_BUCKET_LABELS.map(|label| (label, 0u32));

    for session in sessions.iter().filter(|s| s.duration_seconds > 0) {
        let minutes = session.duration_seconds as f64 / 60.0;
        let index = if minutes < 1.0 {
            0
        } else if minutes < 3.0 {
            1
        } else if minutes < 5.0 {
            2
        } else if minutes < 10.0 {
            3
        } else {
            4
        };
        buckets[index].1 += 1;
    }

    buckets
}

/// Mean duration in seconds across sessions with positive duration, rounded
/// to the nearest second.
#[must_use]
pub fn average_duration_seconds(sessions: &[SessionRecord]) -> i64 {
    let valid: Vec<i64> = sessions
        .iter()
        .map(|s| s.duration_seconds)
        .filter(|&d| d > 0)
        .collect();
    if valid.is_empty() {
        return 0;
    }
    let sum: i64 = valid.iter().sum();
    (sum as f64 / valid.len() as f64).round() as i64
}

/// Share of sessions that placed an order, as a rounded percentage.
#[must_use]
pub fn conversion_rate_percent(sessions: &[SessionRecord]) -> u32 {
    if sessions.is_empty() {
        return 0;
    }
    let converted = sessions.iter().filter(|s| s.placed_order).count();
    ((converted as f64 / sessions.len() as f64) * 100.0).round() as u32
}
