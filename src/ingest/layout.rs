use serde::{Deserialize, Serialize};

/// Header names and delimiter of a document file.
///
/// Columns are matched by exact, case-sensitive header name; their order in
/// the file does not matter. The default layout is the standard one:
///
/// `Customer,Vat number,Document number,Type,Parent document,Currency,Total`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvLayout {
    pub customer: String,
    pub vat_number: String,
    pub document_number: String,
    pub document_type: String,
    pub parent_document: String,
    pub currency: String,
    pub total: String,
    /// Field delimiter, `b','` by default.
    pub delimiter: u8,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            customer: "Customer".into(),
            vat_number: "Vat number".into(),
            document_number: "Document number".into(),
            document_type: "Type".into(),
            parent_document: "Parent document".into(),
            currency: "Currency".into(),
            total: "Total".into(),
            delimiter: b',',
        }
    }
}

impl CsvLayout {
    /// Header names in canonical order.
    pub fn headers(&self) -> [&str; 7] {
        [
            &self.customer,
            &self.vat_number,
            &self.document_number,
            &self.document_type,
            &self.parent_document,
            &self.currency,
            &self.total,
        ]
    }
}

/// Builder for [`CsvLayout`].
///
/// # Example
///
/// ```
/// use saldo::ingest::CsvLayoutBuilder;
///
/// let layout = CsvLayoutBuilder::new()
///     .delimiter(b';')
///     .total("Amount")
///     .build();
/// assert_eq!(layout.total, "Amount");
/// ```
#[derive(Debug, Default)]
pub struct CsvLayoutBuilder {
    layout: CsvLayout,
}

impl CsvLayoutBuilder {
    /// Start from the standard layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(mut self, name: impl Into<String>) -> Self {
        self.layout.customer = name.into();
        self
    }

    pub fn vat_number(mut self, name: impl Into<String>) -> Self {
        self.layout.vat_number = name.into();
        self
    }

    pub fn document_number(mut self, name: impl Into<String>) -> Self {
        self.layout.document_number = name.into();
        self
    }

    pub fn document_type(mut self, name: impl Into<String>) -> Self {
        self.layout.document_type = name.into();
        self
    }

    pub fn parent_document(mut self, name: impl Into<String>) -> Self {
        self.layout.parent_document = name.into();
        self
    }

    pub fn currency(mut self, name: impl Into<String>) -> Self {
        self.layout.currency = name.into();
        self
    }

    pub fn total(mut self, name: impl Into<String>) -> Self {
        self.layout.total = name.into();
        self
    }

    /// Set the field delimiter (e.g. `b';'` for European spreadsheet exports).
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.layout.delimiter = delimiter;
        self
    }

    pub fn build(self) -> CsvLayout {
        self.layout
    }
}
