//! CSV document ingestion.
//!
//! Reads a document file (one row per invoice, credit note or debit note) into
//! customers keyed by VAT number, validating every field on the way.
//!
//! # Example
//!
//! ```
//! use saldo::ingest::*;
//!
//! let csv = "\
//! Kunde;USt-IdNr;Belegnummer;Typ;Bezug;Waehrung;Betrag
//! ACME GmbH;DE123456789;RE-1;1;;EUR;119.00
//! ";
//! let layout = CsvLayoutBuilder::new()
//!     .delimiter(b';')
//!     .customer("Kunde")
//!     .vat_number("USt-IdNr")
//!     .document_number("Belegnummer")
//!     .document_type("Typ")
//!     .parent_document("Bezug")
//!     .currency("Waehrung")
//!     .total("Betrag")
//!     .build();
//!
//! let customers = ingest_documents_with(csv.as_bytes(), None, &layout).unwrap();
//! assert_eq!(customers["DE123456789"].name, "ACME GmbH");
//! ```

mod documents;
mod layout;

pub use documents::{ingest_documents, ingest_documents_with};
pub use layout::{CsvLayout, CsvLayoutBuilder};
