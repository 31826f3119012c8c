//! Currency display.
//!
//! Amounts are kept as `Decimal` and only turned into text at the edge. The
//! currency is an ISO 4217 code from [`CalculatorConfig`], resolved through
//! `rusty_money`, which supplies the symbol, the digit and decimal
//! separators and the number of minor units for that currency.

use crate::pricing::round2;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

/// Formats `amount` in `currency`, e.g. `₱1,234.50` or `€1.234,50`.
///
/// # Arguments
///
/// * `amount` - Amount in major units
/// * `currency` - Resolved ISO currency, see
///   [`CalculatorConfig::iso_currency`](crate::schema::CalculatorConfig::iso_currency)
///
/// # Returns
///
/// The amount rounded to two decimals, then rendered with the currency's
/// own symbol placement, grouping and minor-unit precision.
pub fn format_amount(amount: Decimal, currency: &Currency) -> String {
    Money::from_decimal(round2(amount), currency).to_string()
}
