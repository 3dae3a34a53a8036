#![no_main]

use libfuzzer_sys::fuzz_target;
use saldo::core::{Currency, ExchangeRateTable, Rounding, convert};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(table) = s.parse::<ExchangeRateTable>() {
            let rates: Vec<_> = table.iter().collect();
            for from in &rates {
                for to in &rates {
                    let _ = convert(&table, from.currency, to.currency, from.rate, Rounding::HalfUp);
                }
            }
            if let Ok(eur) = Currency::from_code("EUR") {
                let _ = convert(&table, eur, table.default_currency(), rates.len().into(), Rounding::Up);
            }
        }
    }
});
