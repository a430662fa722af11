//! Line item extraction for invoices and receipts.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::LINE_ITEM;
use crate::models::document::LineItem;

/// Extract one item per line shaped like `<qty> <description> <price>`.
///
/// Lines that do not match, or whose numbers do not parse, are skipped.
pub fn extract_line_items(text: &str) -> Vec<LineItem> {
    text.split('\n').filter_map(parse_line_item).collect()
}

fn parse_line_item(line: &str) -> Option<LineItem> {
    let caps = LINE_ITEM.captures(line)?;
    let quantity: u64 = caps[1].parse().ok()?;
    let price = Decimal::from_str(&caps[3]).ok()?;

    Some(LineItem {
        quantity,
        description: caps[2].trim().to_string(),
        price,
    })
}
