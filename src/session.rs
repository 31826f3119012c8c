//! View model for one calculator session.
//!
//! Owns the accumulated file list and the current pricing options. The total
//! is derived on every read and never cached, so it always reflects the
//! latest state.

use crate::file_utils::FileDescriptor;
use crate::pricing::{normalize_copies, quote, total_price};
use crate::schema::{
    CalculatorConfig, CalculatorError, PageSize, PaperType, PriceQuote, PricingOptions,
};
use crate::{console_log, console_warn};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default)]
pub struct PrintSession {
    config: CalculatorConfig,
    files: Vec<FileDescriptor>,
    options: PricingOptions,
}

impl PrintSession {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Appends a batch of newly selected files and returns just that batch.
    pub fn add_files(&mut self, batch: Vec<FileDescriptor>) -> &[FileDescriptor] {
        let start = self.files.len();
        self.files.extend(batch);
        console_log!(
            "added {} file(s), {} selected",
            self.files.len() - start,
            self.files.len()
        );
        &self.files[start..]
    }

    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn clear_files(&mut self) {
        self.files.clear();
    }

    pub fn options(&self) -> &PricingOptions {
        &self.options
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.options.page_size = page_size;
    }

    pub fn set_paper_type(&mut self, paper_type: PaperType) {
        self.options.paper_type = paper_type;
    }

    /// Sets the page size from its UI value (`"A4"`, `"A3"`, `"Legal"`).
    /// Unknown values leave the current option untouched.
    pub fn set_page_size_str(&mut self, value: &str) -> Result<(), CalculatorError> {
        let page_size = value.parse::<PageSize>().inspect_err(|e| console_warn!("{e}"))?;
        self.set_page_size(page_size);
        Ok(())
    }

    /// Sets the paper type from its UI value (`"standard"`, `"glossy"`).
    pub fn set_paper_type_str(&mut self, value: &str) -> Result<(), CalculatorError> {
        let paper_type = value.parse::<PaperType>().inspect_err(|e| console_warn!("{e}"))?;
        self.set_paper_type(paper_type);
        Ok(())
    }

    pub fn set_color(&mut self, is_color: bool) {
        self.options.is_color = is_color;
    }

    pub fn set_duplex(&mut self, duplex: bool) {
        self.options.duplex = duplex;
    }

    /// Zero is stored as 1.
    pub fn set_copies(&mut self, copies: u32) {
        self.options.copies = copies.max(1);
    }

    /// Sets copies from the raw text of the copies field.
    pub fn set_copies_input(&mut self, raw: &str) -> u32 {
        let copies = normalize_copies(raw);
        self.options.copies = copies;
        copies
    }

    /// Replaces all options at once, normalizing copies.
    pub fn set_options(&mut self, options: PricingOptions) {
        self.options = options.normalized();
    }

    pub fn total_price(&self) -> Result<Decimal, CalculatorError> {
        total_price(&self.options, self.file_count())
    }

    pub fn quote(&self) -> Result<PriceQuote, CalculatorError> {
        quote(&self.options, self.file_count(), &self.config)
    }
}
