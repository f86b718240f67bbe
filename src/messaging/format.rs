//! Order notification formatting.
//!
//! The rendered text is an external contract: the restaurant staff reads
//! these messages on Telegram, so line order and wording must stay stable.

use chrono::Utc;
use chrono_tz::Europe::Istanbul;

use crate::core::models::Order;

/// Current wall-clock time at the restaurant, `HH:MM:SS`.
#[must_use]
pub fn order_timestamp() -> String {
    Utc::now().with_timezone(&Istanbul).format("%H:%M:%S").to_string()
}

/// Render an order as the Markdown message delivered to Telegram.
///
/// Lines are assembled in a fixed order; optional lines (table, customer,
/// note) are dropped when their field is absent or empty, never rendered
/// blank. `timestamp` is injected so tests can pin it.
#[must_use]
pub fn format_order_message(order: &Order, timestamp: &str) -> String {
    let items_list = order
        .items
        .iter()
        .map(|i| {
            format!(
                "  • {} x{} — {:.2} ₺",
                i.name,
                i.qty,
                i.price * f64::from(i.qty)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let short_id: String = order
        .id
        .as_deref()
        .unwrap_or("")
        .chars()
        .take(8)
        .collect();

    let lines = [
        "🔔 *Yeni Sipariş Geldi!*".to_string(),
        format!("🕐 {timestamp}"),
        non_empty(order.table_no.as_deref())
            .map(|t| format!("🪑 Masa: *{t}*"))
            .unwrap_or_default(),
        non_empty(order.customer_name.as_deref())
            .map(|c| format!("👤 Müşteri: *{c}*"))
            .unwrap_or_default(),
        "*Sipariş Detayı:*".to_string(),
        items_list,
        format!("💰 *Toplam: {:.2} ₺*", order.total),
        non_empty(order.customer_note.as_deref())
            .map(|n| format!("📝 Not: _{n}_"))
            .unwrap_or_default(),
        format!("🆔 Sipariş ID: `{short_id}`"),
    ];

    lines
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
