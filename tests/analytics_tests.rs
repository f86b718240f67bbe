use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;

use menumind::analytics::{
    OrderRecord, SessionRecord, average_duration_seconds, conversion_rate_percent,
    orders_by_day, revenue_summary, session_duration_buckets, status_distribution, top_items,
};

/// Tests for the dashboard aggregations. All functions are pure grouping
/// over fetched rows, so fixtures pin the dates explicitly.

fn order(status: &str, total: f64, day: u32) -> OrderRecord {
    serde_json::from_value(json!({
        "status": status,
        "total": total,
        "created_at": Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap().to_rfc3339(),
        "items": [],
    }))
    .unwrap()
}

fn session(duration_seconds: i64, placed_order: bool) -> SessionRecord {
    SessionRecord {
        duration_seconds,
        placed_order,
    }
}

#[test]
fn test_revenue_excludes_cancelled_orders() {
    let orders = vec![
        order("delivered", 100.0, 20),
        order("new", 50.0, 21),
        order("cancelled", 999.0, 21),
    ];

    let summary = revenue_summary(&orders);

    assert_eq!(summary.total_revenue, 150.0);
    assert_eq!(summary.completed_orders, 2);
    assert_eq!(summary.average_order, 75.0);
}

#[test]
fn test_revenue_summary_of_empty_slice_is_zero() {
    let summary = revenue_summary(&[]);

    assert_eq!(summary.total_revenue, 0.0);
    assert_eq!(summary.completed_orders, 0);
    assert_eq!(summary.average_order, 0.0);
}

#[test]
fn test_orders_by_day_preseeds_window_and_buckets_orders() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();
    let orders = vec![
        order("delivered", 100.0, 20),
        order("new", 40.0, 20),
        order("cancelled", 70.0, 22),
        order("delivered", 10.0, 1), // outside the window, ignored
    ];

    let buckets = orders_by_day(&orders, 7, today);

    assert_eq!(buckets.len(), 7, "One bucket per day, empty days included");
    assert_eq!(buckets[0].day, "16.08");
    assert_eq!(buckets[6].day, "22.08");

    let day20 = buckets.iter().find(|b| b.day == "20.08").unwrap();
    assert_eq!(day20.orders, 2);
    assert_eq!(day20.revenue, 140.0);

    // Cancelled orders count toward volume but not revenue.
    let day22 = buckets.iter().find(|b| b.day == "22.08").unwrap();
    assert_eq!(day22.orders, 1);
    assert_eq!(day22.revenue, 0.0);

    let day17 = buckets.iter().find(|b| b.day == "17.08").unwrap();
    assert_eq!(day17.orders, 0);
}

#[test]
fn test_status_distribution_counts_deterministically() {
    let orders = vec![
        order("new", 1.0, 20),
        order("delivered", 1.0, 20),
        order("delivered", 1.0, 21),
        order("preparing", 1.0, 21),
        order("delivered", 1.0, 22),
    ];

    let distribution = status_distribution(&orders);

    assert_eq!(
        distribution,
        vec![
            ("delivered".to_string(), 3),
            ("new".to_string(), 1),
            ("preparing".to_string(), 1),
        ]
    );
}

#[test]
fn test_top_items_ranks_by_quantity_and_truncates_names() {
    let orders: Vec<OrderRecord> = vec![
        serde_json::from_value(json!({
            "status": "delivered",
            "total": 0.0,
            "created_at": "2026-08-20T12:00:00Z",
            "items": [
                {"name": "Ayran", "qty": 5, "price": 25.0},
                {"name": "Kuzu Şiş Izgara Tabağı XL", "qty": 7, "price": 300.0},
            ],
        }))
        .unwrap(),
        serde_json::from_value(json!({
            "status": "new",
            "total": 0.0,
            "created_at": "2026-08-21T12:00:00Z",
            "items": [{"name": "Ayran", "qty": 4, "price": 25.0}],
        }))
        .unwrap(),
    ];

    let top = top_items(&orders, 7);

    assert_eq!(top[0].1, 9);
    assert_eq!(top[0].0, "Ayran");
    assert_eq!(top[1].1, 7);
    assert_eq!(
        top[1].0, "Kuzu Şiş Izgara Ta…",
        "Names longer than 18 chars are truncated for the chart axis"
    );

    let top_one = top_items(&orders, 1);
    assert_eq!(top_one.len(), 1);
}

#[test]
fn test_session_duration_buckets_cover_all_ranges() {
    let sessions = vec![
        session(0, false),   // tracker noise, skipped
        session(30, false),  // 0-1 dk
        session(90, false),  // 1-3 dk
        session(200, true),  // 3-5 dk
        session(400, true),  // 5-10 dk
        session(601, true),  // 10+ dk
        session(50, false),  // 0-1 dk
    ];

    let buckets = session_duration_buckets(&sessions);

    assert_eq!(buckets[0], ("0-1 dk", 2));
    assert_eq!(buckets[1], ("1-3 dk", 1));
    assert_eq!(buckets[2], ("3-5 dk", 1));
    assert_eq!(buckets[3], ("5-10 dk", 1));
    assert_eq!(buckets[4], ("10+ dk", 1));
}

#[test]
fn test_average_duration_ignores_zero_sessions() {
    let sessions = vec![session(0, false), session(60, false), session(120, true)];

    assert_eq!(average_duration_seconds(&sessions), 90);
    assert_eq!(average_duration_seconds(&[]), 0);
}

#[test]
fn test_conversion_rate_is_rounded_percent() {
    let sessions = vec![
        session(10, true),
        session(10, false),
        session(10, false),
    ];

    assert_eq!(conversion_rate_percent(&sessions), 33);
    assert_eq!(conversion_rate_percent(&[]), 0);

    let two_thirds = vec![session(10, true), session(10, true), session(10, false)];
    assert_eq!(conversion_rate_percent(&two_thirds), 67);
}
