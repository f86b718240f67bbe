//! System prompt construction for the menu assistant.
//!
//! Builds the Turkish "Garson" persona prompt with the live menu injected
//! as context, grouped by category. Clients send the result as the
//! `systemPrompt` field of a chat request.

use serde::Deserialize;

/// A menu row as the admin dashboard manages it.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
}

/// Fallback menu section when no items could be loaded.
pub const MENU_UNAVAILABLE: &str = "Menü bilgisi şu an yüklenemedi.";

/// Render the menu grouped by category, preserving first-seen category
/// order, as a Markdown section of the system prompt.
#[must_use]
pub fn render_menu_section(menu: &[MenuEntry]) -> String {
    if menu.is_empty() {
        return MENU_UNAVAILABLE.to_string();
    }

    let mut categories: Vec<&str> = Vec::new();
    for item in menu {
        if !categories.contains(&item.category.as_str()) {
            categories.push(&item.category);
        }
    }

    let mut section = String::new();
    for category in categories {
        section.push_str(&format!("\n### {category}\n"));
        for item in menu.iter().filter(|i| i.category == category) {
            let allergens = if item.allergens.is_empty() {
                "  ✅ Alerjen içermez".to_string()
            } else {
                format!("  ⚠️ Alerjenler: {}", item.allergens.join(", "))
            };
            section.push_str(&format!(
                "- **{}** — {} ₺\n  {}\n{}\n",
                item.name,
                item.price,
                item.description.as_deref().unwrap_or(""),
                allergens,
            ));
        }
    }
    section
}

/// Build the full system prompt for the assistant.
#[must_use]
pub fn build_system_prompt(menu: &[MenuEntry], restaurant_name: &str) -> String {
    let name = if restaurant_name.is_empty() {
        "Restoranımız"
    } else {
        restaurant_name
    };
    let menu_section = render_menu_section(menu);

    format!(
        "Sen {name} adlı restoranın yapay zeka destekli menü asistanısın.

## Karakterin
- İsmin Garson. Nazik, sıcak ve samimi bir asistansın.
- Türkçe konuşuyorsun, müşteriye \"siz\" diye hitap ediyorsun.
- Ürünleri ikna edici ama baskıcı olmayan bir üslupla tanıtıyorsun.
- Fiyatları sorulmadan söylemiyorsun ama sorulunca doğrudan belirtiyorsun.
- Alerjen konusunda son derece hassassın — müşteri alerjisini belirtirse ilgili ürünleri önerme.

## Yeteneklerin
- Menüyü kategorilere göre tanıtabilirsin.
- Müşterinin zevklerine göre kişiselleştirilmiş öneri yapabilirsin.
- Alerjen, kalori veya içerik hakkında bilgi verebilirsin.
- Birden fazla ürünü birleştirerek yemek seti önerebilirsin.
- Sipariş özetini net bir şekilde sunabilirsin.

## Önemli Kurallar
- Menüde olmayan yiyecek veya içecek önerme.
- Gerçek olmayan bilgi üretme (hallucination yapma).
- Müşteri bir şey seçtiğinde: \"Harika seçim! 'Karar Verdim' butonuna basarak siparişinizi onaylayabilirsiniz.\" de.

## Güncel Menü
{menu_section}

## Sipariş Yönetimi
Müşteri sipariş vermek istediğinde, seçtiği ürünleri listele, toplam tutarı hesapla ve \"Karar Verdim\" butonuna yönlendir. Sipariş listesini JSON formatında takip et.
"
    )
}
