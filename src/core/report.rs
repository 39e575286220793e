//! Report synthesis
//!
//! Renders the structured text report from the validated and enriched
//! transaction sets. All figures come from the shared aggregation layer
//! in [`crate::core::aggregate`], so the report can never disagree with
//! the interactive analysis output.
//!
//! Currency values render with thousands separators and exactly two
//! decimal places; percentages render with exactly two decimal places.

use crate::core::aggregate::{
    self, customer_analysis, daily_sales_trend, find_peak_sales_day, low_performing_products,
    region_wise_sales, top_selling_products,
};
use crate::types::{EnrichedTransaction, ValidatedTransaction};
use chrono::Local;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::fmt::Write;

const RULE: &str =
    "======================================================================";

/// Format a currency value: thousands separators, exactly two decimals
///
/// Values in this pipeline are never negative, but a sign is handled
/// anyway so the helper stays total.
pub fn money(value: Decimal) -> String {
    let rendered = format!("{:.2}", value.round_dp(2));
    let (sign, rest) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = rest.split_once('.').unwrap_or((rest, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}

/// Render the full sales analytics report
///
/// Section order is fixed: header, overall summary, region performance,
/// top products, top customers, daily trend, product performance
/// analysis (peak day + low performers), enrichment summary.
pub fn generate_report(
    transactions: &[ValidatedTransaction],
    enriched: &[EnrichedTransaction],
    top_n: usize,
    low_threshold: i64,
) -> String {
    let mut out = String::new();

    let total_revenue = aggregate::total_revenue(transactions);
    let total_transactions = transactions.len();
    let avg_order_value = if total_transactions == 0 {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(total_transactions as u64)
    };

    let date_min = transactions.iter().map(|tx| tx.date.as_str()).min();
    let date_max = transactions.iter().map(|tx| tx.date.as_str()).max();

    // Header
    writeln!(out, "{RULE}").unwrap();
    writeln!(out, "SALES ANALYTICS REPORT").unwrap();
    writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S")).unwrap();
    writeln!(out, "Records Processed: {total_transactions}").unwrap();
    writeln!(out, "{RULE}").unwrap();
    writeln!(out).unwrap();

    // Overall summary
    writeln!(out, "OVERALL SUMMARY").unwrap();
    writeln!(out, "Total Revenue: {}", money(total_revenue)).unwrap();
    writeln!(out, "Total Transactions: {total_transactions}").unwrap();
    writeln!(out, "Average Order Value: {}", money(avg_order_value)).unwrap();
    writeln!(
        out,
        "Date Range: {} to {}",
        date_min.unwrap_or("N/A"),
        date_max.unwrap_or("N/A")
    )
    .unwrap();
    writeln!(out).unwrap();

    // Region performance
    writeln!(out, "REGION-WISE PERFORMANCE").unwrap();
    for region in region_wise_sales(transactions) {
        writeln!(
            out,
            "{}: Sales={}, Transactions={}, Percentage={:.2}%",
            region.region,
            money(region.total_sales),
            region.transaction_count,
            region.percentage
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    // Top products
    writeln!(out, "TOP {top_n} PRODUCTS").unwrap();
    for (i, product) in top_selling_products(transactions, top_n).iter().enumerate() {
        writeln!(
            out,
            "{}. {} | Quantity={} | Revenue={}",
            i + 1,
            product.product_name,
            product.total_quantity,
            money(product.total_revenue)
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    // Top customers
    writeln!(out, "TOP {top_n} CUSTOMERS").unwrap();
    for (i, customer) in customer_analysis(transactions)
        .iter()
        .take(top_n)
        .enumerate()
    {
        writeln!(
            out,
            "{}. {} | Spent={} | Orders={}",
            i + 1,
            customer.customer_id,
            money(customer.total_spent),
            customer.purchase_count
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    // Daily trend
    writeln!(out, "DAILY SALES TREND").unwrap();
    for day in daily_sales_trend(transactions) {
        writeln!(
            out,
            "{} | Revenue={} | Transactions={} | Unique Customers={}",
            day.date,
            money(day.revenue),
            day.transaction_count,
            day.unique_customers
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    // Peak day and low performers
    writeln!(out, "PRODUCT PERFORMANCE ANALYSIS").unwrap();
    match find_peak_sales_day(transactions) {
        Some(peak) => {
            writeln!(out, "Best Selling Day: {} ({})", peak.date, money(peak.revenue)).unwrap()
        }
        None => writeln!(out, "Best Selling Day: N/A ({})", money(Decimal::ZERO)).unwrap(),
    }
    writeln!(out, "Low Performing Products:").unwrap();
    for product in low_performing_products(transactions, low_threshold) {
        writeln!(
            out,
            "- {} | Qty={} | Revenue={}",
            product.product_name,
            product.total_quantity,
            money(product.total_revenue)
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    // Enrichment summary
    let matched = enriched.iter().filter(|e| e.api_match).count();
    let rate = if enriched.is_empty() {
        0.0
    } else {
        matched as f64 / enriched.len() as f64 * 100.0
    };
    // Distinct failed product names, emitted in sorted order for
    // deterministic output
    let failed: BTreeSet<&str> = enriched
        .iter()
        .filter(|e| !e.api_match)
        .map(|e| e.transaction.product_name.as_str())
        .collect();

    writeln!(out, "API ENRICHMENT SUMMARY").unwrap();
    writeln!(out, "Total Enriched Successfully: {matched}").unwrap();
    writeln!(out, "Success Rate: {rate:.2}%").unwrap();
    writeln!(out, "Products Not Enriched:").unwrap();
    for name in failed {
        writeln!(out, "- {name}").unwrap();
    }

    out
}
