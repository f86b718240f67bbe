use serde::{Deserialize, Serialize};

/// One turn of the customer conversation, forwarded verbatim to the
/// completion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// An order as placed from the chat UI. Stored rows carry more columns;
/// only the fields the notification message renders are deserialized here.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total: f64,
    #[serde(default)]
    pub table_no: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_note: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub qty: u32,
    pub price: f64,
}
