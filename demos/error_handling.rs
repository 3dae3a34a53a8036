use saldo::core::*;
use saldo::report::sum_invoices;

const HEADER: &str = "Customer,Vat number,Document number,Type,Parent document,Currency,Total\n";

fn run(title: &str, rates: &[&str], currency: &str, rows: &str) {
    println!("=== {title} ===");
    let csv = format!("{HEADER}{rows}");
    match sum_invoices(csv.as_bytes(), rates, currency, None, Rounding::HalfUp) {
        Ok(report) => {
            for c in &report.customers {
                println!("  {} {} {}", c.name, c.balance, report.currency);
            }
        }
        Err(e) => {
            println!("  Error: {e}");
            if let Some(doc) = e.document_number() {
                println!("  Offending document: {doc}");
            }
            if let Some((from, to)) = e.currency_pair() {
                println!("  Failed conversion: {from} -> {to}");
            }
        }
    }
    println!();
}

fn main() {
    let rates = ["EUR:1", "USD:0.987", "GBP:0.878"];
    let ok_row = "Vendor 1,123456789,1,1,,EUR,100\n";

    // ── Rate table problems ───────────────────────────────────────────
    run("Malformed rate", &["EUR:1", "USD"], "EUR", ok_row);
    run("No default rate", &["USD:0.987"], "EUR", ok_row);
    run("Two default rates", &["EUR:1", "USD:1"], "EUR", ok_row);
    run("Conflicting rates", &["EUR:1", "USD:0.9", "USD:0.987"], "EUR", ok_row);
    run("Unknown rate currency", &["EUR:1", "XYZ:2"], "EUR", ok_row);

    // ── Output currency ───────────────────────────────────────────────
    run("Unknown output currency", &rates, "EURO", ok_row);

    // ── Document problems ─────────────────────────────────────────────
    run("Bad document type", &rates, "EUR", "Vendor 1,123456789,1,7,,EUR,100\n");
    run("Bad total", &rates, "EUR", "Vendor 1,123456789,1,1,,EUR,ten\n");
    run("Bad currency", &rates, "EUR", "Vendor 1,123456789,1,1,,ABC,100\n");
    run(
        "Credit note without parent",
        &rates,
        "EUR",
        "Vendor 1,123456789,1,2,,EUR,100\n",
    );
    run(
        "Credit note with unknown parent",
        &rates,
        "EUR",
        "Vendor 1,123456789,1,2,99,EUR,100\n",
    );
    run("Missing rate", &rates, "EUR", "Vendor 1,123456789,1,1,,CHF,100\n");

    // ── Structural problems ───────────────────────────────────────────
    println!("=== Missing column ===");
    let bad = "Customer,Total\nVendor 1,100\n";
    match sum_invoices(bad.as_bytes(), &rates, "EUR", None, Rounding::HalfUp) {
        Ok(_) => println!("  Parsed successfully (unexpected)"),
        Err(e) => println!("  Error: {e}"),
    }
}
