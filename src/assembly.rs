//! # Assembly Module
//!
//! The WASM-exported surface the host page talks to. It bridges the page's
//! upload control and settings form to the Rust session and pricing logic.
//!
//! ## Overview
//!
//! - `PrintCostCalculator`: a stateful session object. The page creates one,
//!   feeds it file batches and option changes, and reads the total back after
//!   every change.
//! - `quote_price`: a stateless one-shot quote from options JSON and a file
//!   count.
//! - `price_list_json`: the full unit price table.
//!
//! Results cross the boundary as JSON strings. Failures are reported as
//! `{"error": "..."}` objects instead of exceptions, except in the
//! constructor, where a bad configuration throws.

use crate::console_log;
use crate::file_utils::{FileDescriptor, FileListEntry, descriptors_from_file_list};
use crate::price_table::PriceTable;
use crate::pricing::quote;
use crate::schema::{CalculatorConfig, CalculatorError, PricingOptions};
use crate::session::PrintSession;
use serde_json::json;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

/// Stateful calculator bound to one page view.
///
/// # Example
///
/// ```javascript
/// const calc = new PrintCostCalculator(JSON.stringify({ currency: "PHP" }));
/// input.addEventListener("change", (e) => {
///     calc.add_file_list(e.target.files);
///     render(JSON.parse(calc.quote_json()));
/// });
/// duplexToggle.addEventListener("change", (e) => {
///     calc.set_duplex(e.target.checked);
///     totalEl.textContent = calc.formatted_total();
/// });
/// ```
#[wasm_bindgen]
pub struct PrintCostCalculator {
    session: PrintSession,
}

#[wasm_bindgen]
impl PrintCostCalculator {
    /// Creates a calculator for one page view.
    ///
    /// # Parameters
    ///
    /// * `config_json` - Optional JSON matching `CalculatorConfig`, e.g.
    ///                   `{"currency": "PHP"}`. If `None` or malformed, the
    ///                   defaults are used.
    ///
    /// # Errors
    ///
    /// Throws when the currency is not an ISO 4217 code.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PrintCostCalculator, JsValue> {
        let config = CalculatorConfig::from_json(config_json.as_deref())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        console_log!("calculator ready ({})", config.currency);
        Ok(Self {
            session: PrintSession::new(config),
        })
    }

    /// Adds every file of a browser `FileList` to the selection.
    ///
    /// # Parameters
    ///
    /// * `files` - The `files` of an `<input type="file">` change event or of
    ///             `DataTransfer` on drop. Only name, size and MIME type are
    ///             read, never the contents.
    ///
    /// # Returns
    ///
    /// A JSON array with just the newly added files, each carrying `name`,
    /// `size_bytes`, `mime_type`, `kind` and `size_display`.
    pub fn add_file_list(&mut self, files: &web_sys::FileList) -> String {
        let batch = descriptors_from_file_list(files);
        batch_json(self.session.add_files(batch))
    }

    /// Adds a batch given as a JSON array of `{name, size_bytes, mime_type}`.
    ///
    /// # Returns
    ///
    /// The newly added files in the same shape as `add_file_list`, or an
    /// `{"error": ...}` object when the JSON cannot be parsed. On error the
    /// selection is unchanged.
    pub fn add_files_json(&mut self, files_json: &str) -> String {
        add_files_from_json(&mut self.session, files_json)
    }

    pub fn file_count(&self) -> usize {
        self.session.file_count()
    }

    /// The accumulated file list, with display size and kind.
    pub fn files_json(&self) -> String {
        batch_json(self.session.files())
    }

    pub fn clear_files(&mut self) {
        self.session.clear_files();
    }

    /// Sets the page size from the size select.
    ///
    /// # Parameters
    ///
    /// * `value` - One of `"A4"`, `"A3"`, `"Legal"` (case-sensitive).
    ///
    /// # Returns
    ///
    /// `false` if the value is not a known size; the current size is kept.
    pub fn set_page_size(&mut self, value: &str) -> bool {
        self.session.set_page_size_str(value).is_ok()
    }

    /// Sets the paper type from the paper select.
    ///
    /// # Parameters
    ///
    /// * `value` - `"standard"` or `"glossy"`.
    ///
    /// # Returns
    ///
    /// `false` if the value is not a known paper type; the current one is kept.
    pub fn set_paper_type(&mut self, value: &str) -> bool {
        self.session.set_paper_type_str(value).is_ok()
    }

    pub fn set_color(&mut self, is_color: bool) {
        self.session.set_color(is_color);
    }

    /// Toggles double-sided printing, billed at 85% of the single-sided total.
    pub fn set_duplex(&mut self, duplex: bool) {
        self.session.set_duplex(duplex);
    }

    /// Sets the number of copies from the raw text of the copies field.
    ///
    /// # Parameters
    ///
    /// * `raw` - Field text as typed. The leading integer is used, as
    ///           `parseInt` would read it.
    ///
    /// # Returns
    ///
    /// The count actually stored. Empty, non-numeric, zero or negative input
    /// yields 1.
    ///
    /// # Example
    ///
    /// ```javascript
    /// copiesInput.addEventListener("input", (e) => {
    ///     e.target.value = calc.set_copies(e.target.value);
    /// });
    /// ```
    pub fn set_copies(&mut self, raw: &str) -> u32 {
        self.session.set_copies_input(raw)
    }

    /// Total as a plain decimal string, e.g. `"38.25"`, or an
    /// `{"error": ...}` object if the job is too large to price.
    pub fn total_price(&self) -> String {
        match self.session.total_price() {
            Ok(total) => total.to_string(),
            Err(e) => error_json(&e),
        }
    }

    /// Total in the configured currency, e.g. `"₱1,234.50"`, or an
    /// `{"error": ...}` object.
    pub fn formatted_total(&self) -> String {
        match self.session.quote() {
            Ok(quote) => quote.formatted_total,
            Err(e) => error_json(&e),
        }
    }

    /// The full quote as JSON.
    ///
    /// # Returns
    ///
    /// An object with `unit_price`, `file_count`, `copies`, `billed_pages`,
    /// `duplex_discount_applied`, `total`, `currency`, `formatted_total` and
    /// `notes`. Amounts are decimal strings. On failure, an
    /// `{"error": ...}` object.
    pub fn quote_json(&self) -> String {
        match self.session.quote() {
            Ok(quote) => to_json_or_error(&quote),
            Err(e) => error_json(&e),
        }
    }
}

fn batch_json(files: &[FileDescriptor]) -> String {
    let entries: Vec<FileListEntry<'_>> = files.iter().map(FileListEntry::from).collect();
    to_json_or_error(&entries)
}

fn add_files_from_json(session: &mut PrintSession, files_json: &str) -> String {
    match serde_json::from_str::<Vec<FileDescriptor>>(files_json) {
        Ok(batch) => batch_json(session.add_files(batch)),
        Err(e) => error_json(&CalculatorError::from(e)),
    }
}

fn to_json_or_error<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(s) => s,
        Err(_) => json!({"error": "serialization failed"}).to_string(),
    }
}

fn error_json(err: &CalculatorError) -> String {
    json!({"error": err.to_string()}).to_string()
}

/// Stateless quote for `file_count` files under the given options.
///
/// # Parameters
///
/// * `options_json` - Optional JSON matching `PricingOptions`. Missing fields
///                    take their defaults and `None` means all defaults.
/// * `config_json` - Optional JSON matching `CalculatorConfig`.
/// * `file_count` - Number of selected files.
///
/// # Returns
///
/// The quote as JSON, or an `{"error": ...}` object when the options cannot
/// be parsed, the currency is unknown, or the total overflows.
pub fn quote_price_json(
    options_json: Option<&str>,
    config_json: Option<&str>,
    file_count: usize,
) -> String {
    let options: PricingOptions = match options_json {
        Some(s) => match serde_json::from_str(s) {
            Ok(o) => o,
            Err(e) => return error_json(&CalculatorError::from(e)),
        },
        None => PricingOptions::default(),
    };
    let result = CalculatorConfig::from_json(config_json)
        .and_then(|config| quote(&options, file_count, &config));
    match result {
        Ok(q) => to_json_or_error(&q),
        Err(e) => error_json(&e),
    }
}

/// WASM wrapper around [`quote_price_json`].
///
/// # Example
///
/// ```javascript
/// const quote = JSON.parse(quote_price(JSON.stringify({ duplex: true }), null, 3));
/// if (quote.error) {
///     console.error(quote.error);
/// } else {
///     console.log(quote.formatted_total); // "₱38.25"
/// }
/// ```
#[wasm_bindgen]
pub fn quote_price(
    options_json: Option<String>,
    config_json: Option<String>,
    file_count: usize,
) -> JsValue {
    JsValue::from_str(&quote_price_json(
        options_json.as_deref(),
        config_json.as_deref(),
        file_count,
    ))
}

/// The full unit price table as a JSON array of
/// `{page_size, paper_type, color_mode, unit_price}`.
#[wasm_bindgen]
pub fn price_list_json() -> String {
    to_json_or_error(&PriceTable::entries())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(s: &str) -> Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn test_calculator_flow() {
        let mut calc = PrintCostCalculator {
            session: PrintSession::default(),
        };
        let batch = parse(&calc.add_files_json(
            r#"[{"name":"a.pdf","size_bytes":10,"mime_type":"application/pdf"},
                {"name":"b.png","size_bytes":20,"mime_type":"image/png"}]"#,
        ));
        assert_eq!(batch.as_array().unwrap().len(), 2);

        let batch = parse(&calc.add_files_json(r#"[{"name":"c.txt","size_bytes":30}]"#));
        assert_eq!(batch.as_array().unwrap().len(), 1);
        assert_eq!(batch[0]["kind"], "text");

        assert_eq!(calc.file_count(), 3);
        assert_eq!(parse(&calc.files_json()).as_array().unwrap().len(), 3);
        assert_eq!(calc.total_price(), "45.00");

        calc.set_duplex(true);
        assert_eq!(calc.total_price(), "38.25");
        assert_eq!(calc.formatted_total(), "₱38.25");

        assert!(!calc.set_page_size("Tabloid"));
        assert!(calc.set_page_size("A3"));
        assert_eq!(calc.set_copies("abc"), 1);

        let q = parse(&calc.quote_json());
        assert_eq!(q["page_size"], "A3");
        assert_eq!(q["total"], "76.50");

        calc.clear_files();
        assert_eq!(calc.total_price(), "0.00");
    }

    #[test]
    fn test_add_files_bad_json() {
        let mut session = PrintSession::default();
        let out = parse(&add_files_from_json(&mut session, "{not json"));
        assert!(out["error"].as_str().unwrap().starts_with("JSON error"));
        assert_eq!(session.file_count(), 0);
    }

    #[test]
    fn test_quote_price_json() {
        let out = parse(&quote_price_json(
            Some(r#"{"page_size":"A3","paper_type":"glossy","is_color":false,"copies":2}"#),
            None,
            1,
        ));
        assert_eq!(out["total"], "30.00");
        assert_eq!(out["formatted_total"], "₱30.00");

        let defaults = parse(&quote_price_json(None, Some(r#"{"currency":"USD"}"#), 3));
        assert_eq!(defaults["total"], "45.00");
        assert_eq!(defaults["currency"], "USD");
    }

    #[test]
    fn test_quote_price_json_errors() {
        let bad_size = parse(&quote_price_json(Some(r#"{"page_size":"B5"}"#), None, 1));
        assert!(bad_size["error"].is_string());

        let bad_currency = parse(&quote_price_json(None, Some(r#"{"currency":"pesos"}"#), 1));
        assert!(bad_currency["error"].as_str().unwrap().contains("ISO 4217"));
    }

    #[test]
    fn test_price_list_json() {
        let list = parse(&price_list_json());
        assert_eq!(list.as_array().unwrap().len(), 12);
        assert_eq!(list[11]["page_size"], "Legal");
        assert_eq!(list[11]["unit_price"], "10.00");
    }

    #[test]
    fn test_quote_price_json_huge_job() {
        let out = parse(&quote_price_json(
            Some(r#"{"page_size":"A3","paper_type":"glossy","copies":4294967295}"#),
            None,
            usize::MAX,
        ));
        assert!(out["error"].as_str().unwrap().contains("overflow"));
    }

    #[test]
    fn test_quote_price_json_other_currency() {
        let out = parse(&quote_price_json(None, Some(r#"{"currency":"EUR"}"#), 100));
        assert_eq!(out["currency"], "EUR");
        assert_eq!(out["formatted_total"], "€1.500,00");

        let unknown = parse(&quote_price_json(None, Some(r#"{"currency":"XYZ"}"#), 1));
        assert!(unknown["error"].as_str().unwrap().contains("ISO 4217"));
    }
}
