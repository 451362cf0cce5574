use serde::{Deserialize, Serialize};

/// A product as the card grid shows it, normalized from the listing API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDisplayRecord {
    pub product_id: i64,
    /// Upper-cased product name, e.g. `"ASUS ROG STRIX G16"`.
    pub product_name: String,
    /// Absolute image URL, or the placeholder path. Never empty.
    pub img_source: String,
    pub in_stock: bool,
    /// Average review score, if any reviews exist.
    pub rate: Option<f64>,
    /// Number of reviews behind `rate`.
    pub num_rate: Option<i64>,
    /// List price in VND.
    pub original_price: Option<i64>,
    /// Current price in VND.
    pub sale_price: Option<i64>,
}

impl ProductDisplayRecord {
    /// `true` when the sale price is strictly below the list price.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        matches!((self.sale_price, self.original_price), (Some(s), Some(o)) if s < o)
    }
}

/// Formats a VND amount with `.` thousands separators: `12990000` → `"12.990.000"`.
#[must_use]
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if price < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sale: Option<i64>, original: Option<i64>) -> ProductDisplayRecord {
        ProductDisplayRecord {
            product_id: 7,
            product_name: "ACER NITRO V".to_string(),
            img_source: "/placeholder.png".to_string(),
            in_stock: true,
            rate: None,
            num_rate: None,
            original_price: original,
            sale_price: sale,
        }
    }

    #[test]
    fn format_price_groups_thousands() {
        assert_eq!(format_price(12_990_000), "12.990.000");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1_000), "1.000");
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(-25_000), "-25.000");
    }

    #[test]
    fn discount_requires_both_prices() {
        assert!(record(Some(10), Some(12)).is_discounted());
        assert!(!record(Some(12), Some(12)).is_discounted());
        assert!(!record(None, Some(12)).is_discounted());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(record(Some(1), Some(2))).unwrap();
        assert_eq!(json["productName"], "ACER NITRO V");
        assert_eq!(json["imgSource"], "/placeholder.png");
        assert_eq!(json["inStock"], true);
    }
}
