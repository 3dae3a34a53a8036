use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use saldo::core::Rounding;
use saldo::ingest::CsvLayoutBuilder;
use saldo::report::{BalanceReport, sum_invoices_with};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Sum invoices, credit notes and debit notes per customer in one currency.
#[derive(Debug, Parser)]
#[command(name = "saldo", version, about)]
struct Cli {
    /// CSV file with the documents.
    file: PathBuf,

    /// Exchange rates, e.g. EUR:1,USD:0.987,GBP:0.878 (exactly one rate must be 1).
    #[arg(short, long, env = "SALDO_RATES", value_delimiter = ',', required = true)]
    rates: Vec<String>,

    /// ISO 4217 output currency.
    #[arg(short, long, env = "SALDO_CURRENCY")]
    currency: String,

    /// Only report the customer with this VAT number.
    #[arg(long, env = "SALDO_VAT")]
    vat: Option<String>,

    /// Rounding mode: half-up, half-down, half-even, up, down.
    #[arg(long, env = "SALDO_ROUNDING", default_value_t = Rounding::HalfUp)]
    rounding: Rounding,

    /// Field delimiter of the CSV file.
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "saldo=debug" } else { "saldo=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn render_text(report: &BalanceReport) -> String {
    let width = report
        .customers
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Customer".len());

    let mut out = format!("{:<width$}  {:>15}  Vat number\n", "Customer", report.currency);
    for c in &report.customers {
        out.push_str(&format!(
            "{:<width$}  {:>15}  {}\n",
            c.name, c.balance, c.vat_number
        ));
    }
    out
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    tracing::debug!(file = %cli.file.display(), rates = ?cli.rates, "starting");

    let Ok(delimiter) = u8::try_from(cli.delimiter) else {
        eprintln!("error: delimiter must be a single-byte character");
        return ExitCode::from(2);
    };
    let layout = CsvLayoutBuilder::new().delimiter(delimiter).build();

    let file = match File::open(&cli.file) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!(file = %cli.file.display(), error = %e, "unable to open document file");
            eprintln!("error: unable to open {}: {e}", cli.file.display());
            return ExitCode::from(1);
        }
    };

    let report = match sum_invoices_with(
        BufReader::new(file),
        &cli.rates,
        &cli.currency,
        cli.vat.as_deref(),
        cli.rounding,
        &layout,
    ) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    match cli.format {
        Format::Text => print!("{}", render_text(&report)),
        Format::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::from(1);
            }
        },
    }

    ExitCode::SUCCESS
}
