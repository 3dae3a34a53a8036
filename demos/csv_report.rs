use saldo::core::Rounding;
use saldo::ingest::CsvLayoutBuilder;
use saldo::report::{sum_invoices, sum_invoices_with};

const DOCUMENTS: &str = "\
Customer,Vat number,Document number,Type,Parent document,Currency,Total
Vendor 1,123456789,1000000257,1,,USD,400
Vendor 2,987654321,1000000258,1,,EUR,900
Vendor 3,123465123,1000000259,1,,GBP,1300
Vendor 1,123456789,1000000260,2,1000000257,EUR,100
Vendor 1,123456789,1000000261,3,1000000257,GBP,50
Vendor 2,987654321,1000000262,2,1000000258,USD,200
Vendor 3,123465123,1000000263,3,1000000259,EUR,100
Vendor 1,123456789,1000000264,1,,EUR,1600
";

fn main() {
    let rates = ["EUR:1", "USD:0.987", "GBP:0.878"];

    // ── 1. All customers, per output currency ─────────────────────────
    for currency in ["EUR", "USD", "GBP"] {
        let report =
            sum_invoices(DOCUMENTS.as_bytes(), &rates, currency, None, Rounding::HalfUp).unwrap();
        println!("=== Balances in {} ===", report.currency);
        for c in &report.customers {
            println!("  {:<10} {:>10}  {}", c.name, c.balance, c.vat_number);
        }
        println!();
    }

    // ── 2. One customer only ──────────────────────────────────────────
    let report = sum_invoices(
        DOCUMENTS.as_bytes(),
        &rates,
        "EUR",
        Some("987654321"),
        Rounding::HalfUp,
    )
    .unwrap();
    println!("=== Filtered ===");
    println!("{}", serde_json::to_string_pretty(&report).unwrap());

    // ── 3. Semicolon-separated export with German headers ─────────────
    let layout = CsvLayoutBuilder::new()
        .customer("Kunde")
        .vat_number("USt-IdNr")
        .document_number("Belegnummer")
        .document_type("Art")
        .parent_document("Bezugsbeleg")
        .currency("Waehrung")
        .total("Betrag")
        .delimiter(b';')
        .build();
    let german = "\
Kunde;USt-IdNr;Belegnummer;Art;Bezugsbeleg;Waehrung;Betrag
ACME GmbH;DE123456789;RE-1;1;;EUR;1190.00
ACME GmbH;DE123456789;GS-1;2;RE-1;EUR;119.00
";
    let report =
        sum_invoices_with(german.as_bytes(), &rates, "EUR", None, Rounding::HalfUp, &layout).unwrap();
    println!("\n=== Custom layout ===");
    for c in &report.customers {
        println!("  {:<10} {:>10}  {}", c.name, c.balance, c.vat_number);
    }
}
