#![no_main]

use libfuzzer_sys::fuzz_target;
use saldo::core::Rounding;
use saldo::report::sum_invoices;

fuzz_target!(|data: &[u8]| {
    // Errors are fine, panics are bugs.
    let _ = sum_invoices(data, &["EUR:1", "USD:0.987", "GBP:0.878"], "EUR", None, Rounding::HalfUp);
});
