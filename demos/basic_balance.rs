use rust_decimal_macros::dec;
use saldo::core::*;

fn main() {
    // Rates are relative to EUR, the currency with rate 1
    let table = ExchangeRateTable::parse(&["EUR:1", "USD:0.987", "GBP:0.878"]).unwrap();
    let eur = Currency::from_code("EUR").unwrap();
    let usd = Currency::from_code("USD").unwrap();
    let gbp = Currency::from_code("GBP").unwrap();

    let mut customer = Customer::new("Vendor 1", "123456789");
    customer.add_document(Document::new("1000000257", DocumentType::Invoice, dec!(400), usd));
    customer.add_document(
        Document::new("1000000260", DocumentType::CreditNote, dec!(100), eur)
            .with_parent("1000000257"),
    );
    customer.add_document(
        Document::new("1000000261", DocumentType::DebitNote, dec!(50), gbp)
            .with_parent("1000000257"),
    );
    customer.add_document(Document::new("1000000264", DocumentType::Invoice, dec!(1600), eur));

    println!("Customer: {} ({})", customer.name, customer.vat_number);
    for doc in customer.documents.values() {
        println!(
            "  {:<12} {:?} {:>10} {}",
            doc.number, doc.document_type, doc.total, doc.currency
        );
    }

    println!();
    for target in [eur, usd, gbp] {
        let balance = compute_balance(&customer.documents, target, &table, Rounding::HalfUp).unwrap();
        println!("  Balance in {target}: {balance}");
    }

    // Same documents, banker's rounding
    let balance = compute_balance(&customer.documents, usd, &table, Rounding::HalfEven).unwrap();
    println!("  Balance in {usd} (half-even): {balance}");
}
