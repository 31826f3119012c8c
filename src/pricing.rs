//! # Pricing
//!
//! Derives a total from the current options and the number of selected files.
//!
//! ```text
//! unit  = PriceTable[size, paper, color|bw]
//! total = round2(unit * files * copies * (duplex ? 0.85 : 1))
//! ```
//!
//! Every file is billed as one page regardless of its type or size.

use crate::console_log;
use crate::currency::format_amount;
use crate::price_table::{PriceKey, PriceTable};
use crate::schema::{CalculatorConfig, CalculatorError, PriceQuote, PricingOptions};
use rust_decimal::{Decimal, RoundingStrategy};

/// Flat discount multiplier for double-sided printing (15% off).
pub const DUPLEX_MULTIPLIER: Decimal = Decimal::from_parts(85, 0, 0, false, 2);

/// Normalizes the raw text of the copies field to a positive count.
///
/// Follows browser `parseInt` semantics for the leading integer: whitespace is
/// skipped, an optional sign is read, then digits up to the first non-digit.
/// Anything that does not yield a positive number becomes 1.
///
/// ```ignore
/// assert_eq!(normalize_copies("3"), 3);
/// assert_eq!(normalize_copies("2.7"), 2);
/// assert_eq!(normalize_copies("-5"), 1);
/// assert_eq!(normalize_copies("abc"), 1);
/// ```
pub fn normalize_copies(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    let copies = if digits.is_empty() || negative {
        1
    } else {
        // only digits remain, so the sole failure mode is overflow
        digits.parse::<u32>().unwrap_or(u32::MAX).max(1)
    };

    if copies.to_string() != raw.trim() {
        console_log!("copies input {:?} normalized to {}", raw, copies);
    }
    copies
}

/// Rounds to currency minor units; the result always carries two decimals.
pub fn round2(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

fn unrounded_total(
    options: &PricingOptions,
    file_count: usize,
) -> Result<Decimal, CalculatorError> {
    let unit = PriceTable::unit_price(price_key(options));
    let multiplier = if options.duplex {
        DUPLEX_MULTIPLIER
    } else {
        Decimal::ONE
    };
    let overflow = || CalculatorError::Overflow {
        operation: "total price",
    };
    unit
        .checked_mul(Decimal::from(file_count as u64))
        .and_then(|v| v.checked_mul(Decimal::from(options.copies.max(1))))
        .and_then(|v| v.checked_mul(multiplier))
        .ok_or_else(overflow)
}

fn price_key(options: &PricingOptions) -> PriceKey {
    PriceKey::new(options.page_size, options.paper_type, options.color_mode())
}

/// Total price for `file_count` files under `options`.
///
/// `copies` below 1 is treated as 1. Fails with
/// [`CalculatorError::Overflow`] when the job exceeds the range of `Decimal`.
pub fn total_price(
    options: &PricingOptions,
    file_count: usize,
) -> Result<Decimal, CalculatorError> {
    unrounded_total(options, file_count).map(round2)
}

/// Computes the total along with everything the results panel shows.
///
/// # Arguments
///
/// * `options` - Current pricing options; `copies` is normalized first
/// * `file_count` - Number of selected files, each billed as one page
/// * `config` - Supplies the ISO currency used for `formatted_total`
///
/// # Returns
///
/// The quote, or an error when the configured currency is unknown or the
/// total overflows.
pub fn quote(
    options: &PricingOptions,
    file_count: usize,
    config: &CalculatorConfig,
) -> Result<PriceQuote, CalculatorError> {
    let currency = config.iso_currency()?;
    let options = options.clone().normalized();
    let total = total_price(&options, file_count)?;

    let mut notes = Vec::new();
    if options.duplex {
        notes.push("15% discount applied for double-sided printing".to_string());
    }
    if file_count == 0 {
        notes.push("No files selected".to_string());
    }

    Ok(PriceQuote {
        page_size: options.page_size,
        paper_type: options.paper_type,
        color_mode: options.color_mode(),
        unit_price: PriceTable::unit_price(price_key(&options)),
        file_count,
        copies: options.copies,
        billed_pages: (file_count as u64).saturating_mul(u64::from(options.copies)),
        duplex_discount_applied: options.duplex,
        total,
        currency: currency.iso_alpha_code.to_string(),
        formatted_total: format_amount(total, currency),
        notes,
    })
}
