//! Data structures and types for print cost calculation.
//!
//! This module defines the core types used throughout the calculator,
//! including the error type, the pricing options a user can pick, the
//! calculator configuration and the quote returned to callers.

use rust_decimal::Decimal;
use rusty_money::iso::{self, Currency};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while driving the calculator from the host page.
///
/// The UI constrains every input, so these only surface when the page passes
/// something its own controls could not have produced.
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// An option value outside its enumerated set.
    #[error("Invalid value '{value}' for option '{field}'")]
    InvalidOption { field: &'static str, value: String },
    /// The calculator configuration was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// JSON coming from or going to the host page could not be handled.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The job is too large to price.
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}

/// Physical page size of the printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    A3,
    Legal,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::A4, PageSize::A3, PageSize::Legal];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::A3 => "A3",
            PageSize::Legal => "Legal",
        }
    }
}

impl FromStr for PageSize {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A4" => Ok(PageSize::A4),
            "A3" => Ok(PageSize::A3),
            "Legal" => Ok(PageSize::Legal),
            other => Err(CalculatorError::InvalidOption {
                field: "page_size",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paper stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperType {
    #[default]
    Standard,
    /// Photo paper.
    Glossy,
}

impl PaperType {
    pub const ALL: [PaperType; 2] = [PaperType::Standard, PaperType::Glossy];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaperType::Standard => "standard",
            PaperType::Glossy => "glossy",
        }
    }
}

impl FromStr for PaperType {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(PaperType::Standard),
            "glossy" => Ok(PaperType::Glossy),
            other => Err(CalculatorError::InvalidOption {
                field: "paper_type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color or black-and-white printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Color,
    Bw,
}

impl ColorMode {
    pub const ALL: [ColorMode; 2] = [ColorMode::Color, ColorMode::Bw];

    pub fn from_is_color(is_color: bool) -> Self {
        if is_color { ColorMode::Color } else { ColorMode::Bw }
    }
}

/// The options a user picks in the settings panel.
///
/// Every field has a default, so a partial JSON object such as
/// `{ "duplex": true }` deserializes to the default options with duplex on.
///
/// # Examples
///
/// ```json
/// { "page_size": "A3", "paper_type": "glossy", "is_color": false, "copies": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingOptions {
    pub page_size: PageSize,
    pub paper_type: PaperType,
    pub is_color: bool,
    /// Double-sided printing, billed at a flat discount.
    pub duplex: bool,
    /// Always at least 1 once normalized.
    pub copies: u32,
}

impl Default for PricingOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            paper_type: PaperType::Standard,
            is_color: true,
            duplex: false,
            copies: 1,
        }
    }
}

impl PricingOptions {
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_is_color(self.is_color)
    }

    /// Returns the options with `copies` forced to at least 1.
    pub fn normalized(mut self) -> Self {
        self.copies = self.copies.max(1);
        self
    }
}

/// Calculator configuration supplied by the host page.
///
/// Unknown or missing fields fall back to the defaults (Philippine Peso).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// ISO 4217 currency code prices are expressed in. Symbol placement,
    /// separators and minor units follow the currency's own locale.
    pub currency: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            currency: "PHP".into(),
        }
    }
}

impl CalculatorConfig {
    /// Parses a config from optional JSON.
    ///
    /// Malformed JSON yields the default config. A currency code that is not
    /// in the ISO 4217 table is an error.
    pub fn from_json(config_json: Option<&str>) -> Result<Self, CalculatorError> {
        let config: CalculatorConfig = match config_json {
            Some(s) => serde_json::from_str(s).unwrap_or_default(),
            None => CalculatorConfig::default(),
        };
        config.iso_currency()?;
        Ok(config)
    }

    /// Resolves the configured code against the ISO 4217 table.
    pub fn iso_currency(&self) -> Result<&'static Currency, CalculatorError> {
        iso::find(&self.currency).ok_or_else(|| {
            CalculatorError::InvalidConfig(format!(
                "currency must be an ISO 4217 code, got '{}'",
                self.currency
            ))
        })
    }
}

/// The outcome of a price computation, serialized back to the host page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub page_size: PageSize,
    pub paper_type: PaperType,
    pub color_mode: ColorMode,
    /// Price of a single page for the chosen combination.
    pub unit_price: Decimal,
    pub file_count: usize,
    pub copies: u32,
    /// Files times copies; every file counts as one page.
    pub billed_pages: u64,
    pub duplex_discount_applied: bool,
    /// Rounded to two decimals.
    pub total: Decimal,
    pub currency: String,
    pub formatted_total: String,
    pub notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = PricingOptions::default();
        assert_eq!(opts.page_size, PageSize::A4);
        assert_eq!(opts.paper_type, PaperType::Standard);
        assert!(opts.is_color);
        assert!(!opts.duplex);
        assert_eq!(opts.copies, 1);
    }

    #[test]
    fn test_partial_options_json() {
        let opts: PricingOptions =
            serde_json::from_str(r#"{"page_size":"Legal","paper_type":"glossy","duplex":true}"#)
                .unwrap();
        assert_eq!(opts.page_size, PageSize::Legal);
        assert_eq!(opts.paper_type, PaperType::Glossy);
        assert!(opts.is_color);
        assert!(opts.duplex);
        assert_eq!(opts.copies, 1);
    }

    #[test]
    fn test_normalized_forces_one_copy() {
        let opts = PricingOptions {
            copies: 0,
            ..Default::default()
        };
        assert_eq!(opts.normalized().copies, 1);
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("A3".parse::<PageSize>().unwrap(), PageSize::A3);
        assert_eq!("glossy".parse::<PaperType>().unwrap(), PaperType::Glossy);
        let err = "Letter".parse::<PageSize>().unwrap_err();
        assert!(matches!(
            err,
            CalculatorError::InvalidOption { field: "page_size", .. }
        ));
        assert!("Glossy".parse::<PaperType>().is_err());
    }

    #[test]
    fn test_config_defaults_and_validation() {
        let config = CalculatorConfig::from_json(None).unwrap();
        assert_eq!(config.currency, "PHP");

        let fallback = CalculatorConfig::from_json(Some("not json")).unwrap();
        assert_eq!(fallback, CalculatorConfig::default());

        let usd = CalculatorConfig::from_json(Some(r#"{"currency":"USD"}"#)).unwrap();
        assert_eq!(usd.currency, "USD");
        assert_eq!(usd.iso_currency().unwrap().iso_alpha_code, "USD");

        let bad = CalculatorConfig::from_json(Some(r#"{"currency":"peso"}"#));
        assert!(matches!(bad, Err(CalculatorError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_rejects_unknown_iso_code() {
        // well-formed but not an assigned ISO 4217 code
        let bad = CalculatorConfig::from_json(Some(r#"{"currency":"XYZ"}"#));
        assert!(matches!(bad, Err(CalculatorError::InvalidConfig(_))));
    }
}
