use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::core::validator::FilterParams;

/// Analyze pipe-delimited sales transactions and generate a report
#[derive(Parser, Debug)]
#[command(name = "sales-analytics-engine")]
#[command(about = "Batch sales analytics: validate, aggregate, enrich, report", long_about = None)]
pub struct CliArgs {
    /// Input file with pipe-delimited transaction records
    #[arg(value_name = "INPUT", help = "Path to the sales data file")]
    pub input_file: PathBuf,

    /// Product catalog JSON document used for enrichment
    #[arg(
        long = "catalog",
        value_name = "FILE",
        help = "Path to the product catalog JSON; omit to skip enrichment matching"
    )]
    pub catalog_file: Option<PathBuf>,

    /// Where to write the enriched pipe-delimited output
    #[arg(
        long = "enriched-out",
        value_name = "FILE",
        default_value = "data/enriched_sales_data.txt"
    )]
    pub enriched_out: PathBuf,

    /// Where to write the text report
    #[arg(
        long = "report-out",
        value_name = "FILE",
        default_value = "output/sales_report.txt"
    )]
    pub report_out: PathBuf,

    /// Keep only transactions from this region (exact match)
    #[arg(long = "region", value_name = "REGION")]
    pub region: Option<String>,

    /// Keep only transactions with amount >= this value
    #[arg(long = "min-amount", value_name = "AMOUNT")]
    pub min_amount: Option<Decimal>,

    /// Keep only transactions with amount <= this value
    #[arg(long = "max-amount", value_name = "AMOUNT")]
    pub max_amount: Option<Decimal>,

    /// Prompt for filter parameters instead of taking them from flags
    #[arg(long = "interactive")]
    pub interactive: bool,

    /// How many products/customers the top rankings include
    #[arg(long = "top-n", value_name = "N", default_value_t = 5)]
    pub top_n: usize,

    /// Quantity below which a product counts as low performing
    #[arg(long = "low-threshold", value_name = "QTY", default_value_t = 10)]
    pub low_threshold: i64,
}

impl CliArgs {
    /// Build filter parameters from the flag values
    ///
    /// Ignored when `--interactive` is set; the prompt collects the
    /// parameters instead.
    pub fn filter_params(&self) -> FilterParams {
        FilterParams {
            region: self.region.clone(),
            min_amount: self.min_amount,
            max_amount: self.max_amount,
        }
    }
}
