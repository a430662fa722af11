//! Vendor and product name heuristics.

use super::patterns::PRODUCT_NAME_SKIP_WORDS;

/// Vendor names are looked for in the header block only.
const VENDOR_HEADER_LINES: usize = 5;

/// Lines this short or shorter are noise (page numbers, stray glyphs).
const MIN_NAME_CHARS: usize = 3;

fn is_meaningful(line: &str) -> bool {
    line.chars().count() > MIN_NAME_CHARS
}

/// Extract a vendor name: the first meaningful line of the header block.
pub fn extract_vendor(text: &str) -> Option<String> {
    text.split('\n')
        .take(VENDOR_HEADER_LINES)
        .map(str::trim)
        .find(|line| is_meaningful(line))
        .map(str::to_string)
}

/// Extract a product name: the first meaningful line that is not a price,
/// quantity or total label.
pub fn extract_product_name(text: &str) -> Option<String> {
    text.split('\n')
        .map(str::trim)
        .find(|line| {
            let lower = line.to_lowercase();
            is_meaningful(line) && !PRODUCT_NAME_SKIP_WORDS.iter().any(|w| lower.contains(w))
        })
        .map(str::to_string)
}
