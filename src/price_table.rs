//! # Price Table
//!
//! The fixed per-page prices for every combination of page size, paper type
//! and color mode. Prices are in whole currency units with two decimals.
//!
//! | size  | paper    | color | bw    |
//! |-------|----------|-------|-------|
//! | A4    | standard | 15.00 | 3.00  |
//! | A4    | glossy   | 25.00 | 8.00  |
//! | A3    | standard | 30.00 | 6.00  |
//! | A3    | glossy   | 45.00 | 15.00 |
//! | Legal | standard | 20.00 | 4.00  |
//! | Legal | glossy   | 30.00 | 10.00 |

use crate::schema::{ColorMode, PageSize, PaperType};
use rust_decimal::Decimal;
use serde::Serialize;

/// Composite key into the price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PriceKey {
    pub page_size: PageSize,
    pub paper_type: PaperType,
    pub color_mode: ColorMode,
}

impl PriceKey {
    pub fn new(page_size: PageSize, paper_type: PaperType, color_mode: ColorMode) -> Self {
        Self {
            page_size,
            paper_type,
            color_mode,
        }
    }
}

/// One row of the price list handed to the host page.
#[derive(Debug, Clone, Serialize)]
pub struct PriceEntry {
    #[serde(flatten)]
    pub key: PriceKey,
    pub unit_price: Decimal,
}

pub struct PriceTable;

impl PriceTable {
    /// Returns the per-page price for `key`.
    pub fn unit_price(key: PriceKey) -> Decimal {
        use ColorMode::*;
        use PageSize::*;
        use PaperType::*;

        let cents: i64 = match (key.page_size, key.paper_type, key.color_mode) {
            (A4, Standard, Color) => 1500,
            (A4, Standard, Bw) => 300,
            (A4, Glossy, Color) => 2500,
            (A4, Glossy, Bw) => 800,
            (A3, Standard, Color) => 3000,
            (A3, Standard, Bw) => 600,
            (A3, Glossy, Color) => 4500,
            (A3, Glossy, Bw) => 1500,
            (Legal, Standard, Color) => 2000,
            (Legal, Standard, Bw) => 400,
            (Legal, Glossy, Color) => 3000,
            (Legal, Glossy, Bw) => 1000,
        };
        Decimal::new(cents, 2)
    }

    /// All twelve entries, ordered by size, then paper, then color mode.
    pub fn entries() -> Vec<PriceEntry> {
        let mut entries = Vec::with_capacity(12);
        for page_size in PageSize::ALL {
            for paper_type in PaperType::ALL {
                for color_mode in ColorMode::ALL {
                    let key = PriceKey::new(page_size, paper_type, color_mode);
                    entries.push(PriceEntry {
                        key,
                        unit_price: Self::unit_price(key),
                    });
                }
            }
        }
        entries
    }
}
