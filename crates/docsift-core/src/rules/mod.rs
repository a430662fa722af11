//! Rule-based field extractors.
//!
//! Every extractor is a pure function of the text: the first match in
//! priority order wins and no match yields `None`.

pub mod amounts;
pub mod dates;
pub mod identifiers;
pub mod items;
pub mod names;
pub mod patterns;
pub mod payment;

pub use amounts::{extract_amount, parse_amount, AmountExtractor};
pub use dates::{extract_date, DateExtractor};
pub use identifiers::{extract_invoice_number, extract_receipt_number, extract_sku, PatternList};
pub use items::extract_line_items;
pub use names::{extract_product_name, extract_vendor};
pub use payment::extract_payment_method;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
