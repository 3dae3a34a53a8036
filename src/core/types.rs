use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currencies::Currency;

/// Documents of one customer, keyed by document number.
pub type DocumentSet = BTreeMap<String, Document>;

/// Kind of commercial document and its effect on the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// `1`: invoice, adds to the balance.
    Invoice,
    /// `2`: credit note, subtracts from the balance; needs a parent document.
    CreditNote,
    /// `3`: debit note, adds to the balance; needs a parent document.
    DebitNote,
}

impl DocumentType {
    /// Numeric type code used in document files.
    pub fn code(&self) -> u8 {
        match self {
            Self::Invoice => 1,
            Self::CreditNote => 2,
            Self::DebitNote => 3,
        }
    }

    /// Parse from the numeric type code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Invoice),
            2 => Some(Self::CreditNote),
            3 => Some(Self::DebitNote),
            _ => None,
        }
    }

    /// Whether a document of this type must reference a parent document.
    pub fn requires_parent(&self) -> bool {
        !matches!(self, Self::Invoice)
    }
}

/// A single invoice, credit note or debit note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document number, unique within a customer's documents.
    pub number: String,
    /// Invoice, credit note or debit note.
    pub document_type: DocumentType,
    /// Number of the document this one corrects, if any.
    pub parent: Option<String>,
    /// Document total in its own currency.
    pub total: Decimal,
    /// Currency of `total`.
    pub currency: Currency,
}

impl Document {
    /// Create a document without a parent reference.
    pub fn new(
        number: impl Into<String>,
        document_type: DocumentType,
        total: Decimal,
        currency: Currency,
    ) -> Self {
        Self {
            number: number.into(),
            document_type,
            parent: None,
            total,
            currency,
        }
    }

    /// Set the parent document number. A blank number clears the reference.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        let parent = parent.into();
        self.parent = if parent.trim().is_empty() {
            None
        } else {
            Some(parent)
        };
        self
    }
}

/// A customer and the documents issued to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Display name (first name seen for the VAT number).
    pub name: String,
    /// VAT number, the customer's identity.
    pub vat_number: String,
    /// Documents keyed by document number.
    pub documents: DocumentSet,
}

impl Customer {
    pub fn new(name: impl Into<String>, vat_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vat_number: vat_number.into(),
            documents: DocumentSet::new(),
        }
    }

    /// Add a document, returning the one it replaced if the number was
    /// already present.
    pub fn add_document(&mut self, document: Document) -> Option<Document> {
        self.documents.insert(document.number.clone(), document)
    }
}
