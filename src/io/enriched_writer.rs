//! Enriched output writer
//!
//! Serializes enriched transactions to pipe-delimited text: a fixed
//! twelve-column header, one row per record, empty strings for null
//! enrichment fields, and `true`/`false` for the match flag. Quoting is
//! disabled so the output is a plain pipe join (product names have
//! commas stripped at parse time, and no field can contain a pipe).

use crate::types::{AnalyticsError, EnrichedTransaction};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Column order of the enriched output format
const HEADER: [&str; 12] = [
    "TransactionID",
    "Date",
    "ProductID",
    "ProductName",
    "Quantity",
    "UnitPrice",
    "CustomerID",
    "Region",
    "API_Category",
    "API_Brand",
    "API_Rating",
    "API_Match",
];

/// Write enriched transactions as pipe-delimited text
pub fn write_enriched(
    records: &[EnrichedTransaction],
    output: &mut dyn Write,
) -> Result<(), AnalyticsError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'|')
        .quote_style(QuoteStyle::Never)
        .from_writer(output);

    writer.write_record(HEADER)?;

    for record in records {
        let tx = &record.transaction;
        writer.write_record(&[
            tx.transaction_id.clone(),
            tx.date.clone(),
            tx.product_id.clone(),
            tx.product_name.clone(),
            tx.quantity.to_string(),
            tx.unit_price.to_string(),
            tx.customer_id.clone(),
            tx.region.clone(),
            record.api_category.clone().unwrap_or_default(),
            record.api_brand.clone().unwrap_or_default(),
            record
                .api_rating
                .map(|r| r.to_string())
                .unwrap_or_default(),
            record.api_match.to_string(),
        ])?;
    }

    writer.flush().map_err(AnalyticsError::from)?;
    Ok(())
}

/// Write enriched transactions to a file, creating parent directories
pub fn write_enriched_file(
    path: &Path,
    records: &[EnrichedTransaction],
) -> Result<(), AnalyticsError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    write_enriched(records, &mut file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidatedTransaction;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn tx() -> ValidatedTransaction {
        ValidatedTransaction {
            transaction_id: "T1".to_string(),
            date: "2024-01-01".to_string(),
            product_id: "P101".to_string(),
            product_name: "Widget".to_string(),
            quantity: 3,
            unit_price: Decimal::from_str("10.00").unwrap(),
            customer_id: "C1".to_string(),
            region: "North".to_string(),
            amount: Decimal::from_str("30.00").unwrap(),
        }
    }

    #[test]
    fn test_writes_header_for_empty_input() {
        let mut output = Vec::new();
        write_enriched(&[], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region|API_Category|API_Brand|API_Rating|API_Match\n"
        );
    }

    #[test]
    fn test_matched_record_row() {
        let record = EnrichedTransaction {
            transaction: tx(),
            api_category: Some("tools".to_string()),
            api_brand: Some("Acme".to_string()),
            api_rating: Some(4.7),
            api_match: true,
        };

        let mut output = Vec::new();
        write_enriched(&[record], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert_eq!(row, "T1|2024-01-01|P101|Widget|3|10.00|C1|North|tools|Acme|4.7|true");
    }

    #[test]
    fn test_unmatched_record_renders_empty_fields() {
        let record = EnrichedTransaction::unmatched(tx());

        let mut output = Vec::new();
        write_enriched(&[record], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert_eq!(row, "T1|2024-01-01|P101|Widget|3|10.00|C1|North||||false");
    }

    #[test]
    fn test_write_enriched_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/enriched.txt");

        write_enriched_file(&path, &[EnrichedTransaction::unmatched(tx())]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
