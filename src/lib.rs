//! Print cost calculator compiled to WebAssembly.
//!
//! The host page collects files and renders the form. This crate keeps the
//! session state (selected files, pricing options) and prices the job from a
//! fixed unit price table.

pub mod logging;

pub mod assembly;
pub mod currency;
pub mod file_utils;
pub mod price_table;
pub mod pricing;
pub mod schema;
pub mod session;

pub use assembly::{PrintCostCalculator, price_list_json, quote_price, quote_price_json};
pub use file_utils::{FileDescriptor, FileKind};
pub use price_table::{PriceKey, PriceTable};
pub use pricing::{DUPLEX_MULTIPLIER, normalize_copies, quote, total_price};
pub use schema::{
    CalculatorConfig, CalculatorError, ColorMode, PageSize, PaperType, PriceQuote, PricingOptions,
};
pub use session::PrintSession;
