//! Raw line parsing
//!
//! Turns raw pipe-delimited data lines into [`TransactionRecord`]s. The
//! loader has already stripped the header line, so every input line is a
//! candidate data row.
//!
//! # Error Handling
//!
//! This stage never fails. A line that does not split into exactly eight
//! fields, or whose quantity/price tokens do not parse, is silently
//! dropped - it never reaches validation and is not counted anywhere.
//! Input order is preserved for the lines that survive.

use crate::types::TransactionRecord;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Number of pipe-delimited fields in a well-formed data row
const FIELD_COUNT: usize = 8;

/// Parse raw data lines into transaction records
///
/// For each line: split on `|`, require exactly eight fields, trim all
/// fields, strip literal commas from the product name and from the
/// quantity/price tokens (thousands separators), then parse quantity as
/// an integer and unit price as a decimal. Any structural failure drops
/// the line.
pub fn parse_transactions(raw_lines: &[String]) -> Vec<TransactionRecord> {
    raw_lines.iter().filter_map(|line| parse_line(line)).collect()
}

/// Parse a single data line, returning None on any structural failure
fn parse_line(line: &str) -> Option<TransactionRecord> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() != FIELD_COUNT {
        return None;
    }

    let transaction_id = parts[0].trim().to_string();
    let date = parts[1].trim().to_string();
    let product_id = parts[2].trim().to_string();
    let product_name = parts[3].replace(',', "").trim().to_string();

    // Commas in numeric fields are thousands separators
    let quantity_token = parts[4].replace(',', "");
    let unit_price_token = parts[5].replace(',', "");

    let quantity = i64::from_str(quantity_token.trim()).ok()?;
    let unit_price = Decimal::from_str(unit_price_token.trim()).ok()?;

    let customer_id = parts[6].trim().to_string();
    let region = parts[7].trim().to_string();

    Some(TransactionRecord {
        transaction_id,
        date,
        product_id,
        product_name,
        quantity,
        unit_price,
        customer_id,
        region,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parses_well_formed_line() {
        let records = parse_transactions(&lines(&[
            "T1001|2024-01-15|P101|Wireless Mouse|3|25.50|C501|North",
        ]));

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.transaction_id, "T1001");
        assert_eq!(record.date, "2024-01-15");
        assert_eq!(record.product_id, "P101");
        assert_eq!(record.product_name, "Wireless Mouse");
        assert_eq!(record.quantity, 3);
        assert_eq!(record.unit_price, Decimal::from_str("25.50").unwrap());
        assert_eq!(record.customer_id, "C501");
        assert_eq!(record.region, "North");
    }

    #[test]
    fn test_trims_whitespace_on_all_fields() {
        let records = parse_transactions(&lines(&[
            " T1 | 2024-01-01 | P101 | Widget | 3 | 10.00 | C1 | North ",
        ]));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].transaction_id, "T1");
        assert_eq!(records[0].region, "North");
    }

    #[test]
    fn test_strips_commas_from_product_name_and_numeric_fields() {
        let records = parse_transactions(&lines(&[
            "T1|2024-01-01|P101|Desk, Oak|1,200|1,050.75|C1|North",
        ]));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product_name, "Desk Oak");
        assert_eq!(records[0].quantity, 1200);
        assert_eq!(
            records[0].unit_price,
            Decimal::from_str("1050.75").unwrap()
        );
    }

    #[rstest]
    #[case::too_few_fields("T1|2024-01-01|P101|Widget|3|10.00|C1")]
    #[case::too_many_fields("T1|2024-01-01|P101|Widget|3|10.00|C1|North|extra")]
    #[case::non_numeric_quantity("T1|2024-01-01|P101|Widget|three|10.00|C1|North")]
    #[case::non_numeric_price("T1|2024-01-01|P101|Widget|3|cheap|C1|North")]
    #[case::empty_line("")]
    fn test_malformed_lines_are_silently_dropped(#[case] line: &str) {
        let records = parse_transactions(&lines(&[line]));
        assert!(records.is_empty());
    }

    #[test]
    fn test_order_preserved_and_bad_lines_skipped() {
        let records = parse_transactions(&lines(&[
            "T1|2024-01-01|P101|Widget|3|10.00|C1|North",
            "garbage line",
            "T2|2024-01-02|P102|Gadget|1|50.00|C2|South",
        ]));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].transaction_id, "T1");
        assert_eq!(records[1].transaction_id, "T2");
    }

    #[test]
    fn test_negative_quantity_still_parses() {
        // Negative values are structurally valid; rejecting them is the
        // validator's job, not the parser's.
        let records = parse_transactions(&lines(&[
            "T1|2024-01-01|P101|Widget|-3|10.00|C1|North",
        ]));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quantity, -3);
    }
}
