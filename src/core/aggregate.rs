//! Sales aggregation operations
//!
//! The seven read-only aggregations over the validated transaction set:
//! total revenue, region-wise sales, top selling products, customer
//! analysis, daily sales trend, peak sales day, and low performing
//! products. This is the single aggregation layer in the crate - both
//! the interactive analysis step and the report generator call it, so
//! displayed and reported figures can never drift apart.
//!
//! # Ordering
//!
//! Operations that sort by a metric use a stable sort over first-seen
//! grouping order (see [`crate::core::grouping`]), making "first
//! encountered wins the tie" an explicit rule. The daily trend sorts
//! ascending by the date string, lexicographically - dates are tokens
//! here, not calendar values.

use crate::core::grouping::OrderedGroups;
use crate::types::ValidatedTransaction;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

/// Per-region sales rollup
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSummary {
    pub region: String,
    pub total_sales: Decimal,
    pub transaction_count: usize,
    /// Share of the grand total, rounded to 2 decimal places
    pub percentage: Decimal,
}

/// Per-product sales rollup
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub product_name: String,
    pub total_quantity: i64,
    pub total_revenue: Decimal,
}

/// Per-customer purchasing rollup
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub customer_id: String,
    pub total_spent: Decimal,
    pub purchase_count: usize,
    /// Distinct product names bought; no guaranteed enumeration order
    pub products_bought: HashSet<String>,
    /// `total_spent / purchase_count`, rounded to 2 decimal places
    pub avg_order_value: Decimal,
}

/// Per-day sales rollup
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: String,
    pub revenue: Decimal,
    pub transaction_count: usize,
    pub unique_customers: usize,
}

/// The day with the strictly highest revenue
#[derive(Debug, Clone, PartialEq)]
pub struct PeakSalesDay {
    pub date: String,
    pub revenue: Decimal,
    pub transaction_count: usize,
}

/// Sum of transaction amounts over the set
pub fn total_revenue(transactions: &[ValidatedTransaction]) -> Decimal {
    transactions.iter().map(|tx| tx.amount).sum()
}

/// Group sales by region, with each region's share of the grand total
///
/// Ordered descending by total sales; equal totals keep first-seen
/// grouping order.
pub fn region_wise_sales(transactions: &[ValidatedTransaction]) -> Vec<RegionSummary> {
    let grand_total = total_revenue(transactions);

    let mut groups: OrderedGroups<(Decimal, usize)> = OrderedGroups::new();
    for tx in transactions {
        let entry = groups.entry_or_insert_with(&tx.region, || (Decimal::ZERO, 0));
        entry.0 += tx.amount;
        entry.1 += 1;
    }

    let mut summaries: Vec<RegionSummary> = groups
        .into_entries()
        .into_iter()
        .map(|(region, (total_sales, transaction_count))| {
            let percentage = if grand_total.is_zero() {
                Decimal::ZERO
            } else {
                (total_sales / grand_total * Decimal::from(100)).round_dp(2)
            };
            RegionSummary {
                region,
                total_sales,
                transaction_count,
                percentage,
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.total_sales.cmp(&a.total_sales));
    summaries
}

/// Group per product name, keeping quantity and revenue totals
fn product_rollup(transactions: &[ValidatedTransaction]) -> Vec<ProductSummary> {
    let mut groups: OrderedGroups<(i64, Decimal)> = OrderedGroups::new();
    for tx in transactions {
        let entry = groups.entry_or_insert_with(&tx.product_name, || (0, Decimal::ZERO));
        entry.0 += tx.quantity;
        entry.1 += tx.amount;
    }

    groups
        .into_entries()
        .into_iter()
        .map(|(product_name, (total_quantity, total_revenue))| ProductSummary {
            product_name,
            total_quantity,
            total_revenue,
        })
        .collect()
}

/// The `n` products with the highest total quantity sold
///
/// Descending by quantity; ties broken by first-seen grouping order
/// (stable sort over first-encounter iteration order).
pub fn top_selling_products(transactions: &[ValidatedTransaction], n: usize) -> Vec<ProductSummary> {
    let mut products = product_rollup(transactions);
    products.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
    products.truncate(n);
    products
}

/// Products whose total quantity sold is strictly below `threshold`
///
/// Ascending by quantity; ties keep first-seen grouping order.
pub fn low_performing_products(
    transactions: &[ValidatedTransaction],
    threshold: i64,
) -> Vec<ProductSummary> {
    let mut products = product_rollup(transactions);
    products.retain(|p| p.total_quantity < threshold);
    products.sort_by(|a, b| a.total_quantity.cmp(&b.total_quantity));
    products
}

/// Per-customer spending analysis, descending by total spent
pub fn customer_analysis(transactions: &[ValidatedTransaction]) -> Vec<CustomerSummary> {
    struct CustomerAccum {
        total_spent: Decimal,
        purchase_count: usize,
        products_bought: HashSet<String>,
    }

    let mut groups: OrderedGroups<CustomerAccum> = OrderedGroups::new();
    for tx in transactions {
        let entry = groups.entry_or_insert_with(&tx.customer_id, || CustomerAccum {
            total_spent: Decimal::ZERO,
            purchase_count: 0,
            products_bought: HashSet::new(),
        });
        entry.total_spent += tx.amount;
        entry.purchase_count += 1;
        entry.products_bought.insert(tx.product_name.clone());
    }

    let mut summaries: Vec<CustomerSummary> = groups
        .into_entries()
        .into_iter()
        .map(|(customer_id, accum)| {
            let avg_order_value =
                (accum.total_spent / Decimal::from(accum.purchase_count as u64)).round_dp(2);
            CustomerSummary {
                customer_id,
                total_spent: accum.total_spent,
                purchase_count: accum.purchase_count,
                products_bought: accum.products_bought,
                avg_order_value,
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
    summaries
}

/// Per-day revenue, transaction count, and unique customer count
///
/// Ordered ascending by the date string (lexicographic).
pub fn daily_sales_trend(transactions: &[ValidatedTransaction]) -> Vec<DailySummary> {
    struct DayAccum {
        revenue: Decimal,
        transaction_count: usize,
        customers: HashSet<String>,
    }

    let mut days: BTreeMap<String, DayAccum> = BTreeMap::new();
    for tx in transactions {
        let entry = days.entry(tx.date.clone()).or_insert_with(|| DayAccum {
            revenue: Decimal::ZERO,
            transaction_count: 0,
            customers: HashSet::new(),
        });
        entry.revenue += tx.amount;
        entry.transaction_count += 1;
        entry.customers.insert(tx.customer_id.clone());
    }

    days.into_iter()
        .map(|(date, accum)| DailySummary {
            date,
            revenue: accum.revenue,
            transaction_count: accum.transaction_count,
            unique_customers: accum.customers.len(),
        })
        .collect()
}

/// The date with the strictly greatest revenue
///
/// Scans the daily trend in ascending date order using `>` (not `>=`),
/// so on a revenue tie the first date encountered wins. Returns `None`
/// when the input is empty.
pub fn find_peak_sales_day(transactions: &[ValidatedTransaction]) -> Option<PeakSalesDay> {
    let mut peak: Option<PeakSalesDay> = None;
    for day in daily_sales_trend(transactions) {
        let current_peak = peak.as_ref().map(|p| p.revenue).unwrap_or(Decimal::ZERO);
        if day.revenue > current_peak {
            peak = Some(PeakSalesDay {
                date: day.date,
                revenue: day.revenue,
                transaction_count: day.transaction_count,
            });
        }
    }
    peak
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn tx(
        date: &str,
        product: &str,
        customer: &str,
        region: &str,
        quantity: i64,
        unit_price: &str,
    ) -> ValidatedTransaction {
        let unit_price = Decimal::from_str(unit_price).unwrap();
        ValidatedTransaction {
            transaction_id: "T1".to_string(),
            date: date.to_string(),
            product_id: "P1".to_string(),
            product_name: product.to_string(),
            quantity,
            unit_price,
            customer_id: customer.to_string(),
            region: region.to_string(),
            amount: Decimal::from(quantity) * unit_price,
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_total_revenue() {
        let txs = vec![
            tx("2024-01-01", "Widget", "C1", "North", 3, "10.00"),
            tx("2024-01-01", "Gadget", "C2", "South", 1, "50.00"),
        ];
        assert_eq!(total_revenue(&txs), dec("80.00"));
    }

    #[test]
    fn test_total_revenue_empty() {
        assert_eq!(total_revenue(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_region_wise_sales_percentages_and_order() {
        let txs = vec![
            tx("2024-01-01", "Widget", "C1", "North", 3, "10.00"), // 30.00
            tx("2024-01-01", "Gadget", "C2", "South", 1, "50.00"), // 50.00
        ];
        let regions = region_wise_sales(&txs);

        assert_eq!(regions.len(), 2);
        // Descending by sales: South first
        assert_eq!(regions[0].region, "South");
        assert_eq!(regions[0].total_sales, dec("50.00"));
        assert_eq!(regions[0].percentage, dec("62.50"));
        assert_eq!(regions[1].region, "North");
        assert_eq!(regions[1].total_sales, dec("30.00"));
        assert_eq!(regions[1].percentage, dec("37.50"));
    }

    #[test]
    fn test_region_percentages_sum_to_100_within_tolerance() {
        let txs = vec![
            tx("2024-01-01", "A", "C1", "North", 1, "33.33"),
            tx("2024-01-01", "B", "C2", "South", 1, "33.33"),
            tx("2024-01-01", "C", "C3", "East", 1, "33.34"),
        ];
        let regions = region_wise_sales(&txs);
        let sum: Decimal = regions.iter().map(|r| r.percentage).sum();
        let tolerance = dec("0.01") * Decimal::from(regions.len() as u64);
        assert!((sum - Decimal::from(100)).abs() <= tolerance, "sum was {sum}");
    }

    #[test]
    fn test_region_tie_keeps_first_seen_order() {
        let txs = vec![
            tx("2024-01-01", "A", "C1", "West", 1, "10.00"),
            tx("2024-01-01", "B", "C2", "East", 1, "10.00"),
        ];
        let regions = region_wise_sales(&txs);
        assert_eq!(regions[0].region, "West");
        assert_eq!(regions[1].region, "East");
    }

    #[test]
    fn test_top_selling_products_orders_by_quantity() {
        let txs = vec![
            tx("2024-01-01", "Widget", "C1", "North", 2, "10.00"),
            tx("2024-01-01", "Gadget", "C1", "North", 5, "1.00"),
            tx("2024-01-02", "Widget", "C2", "North", 4, "10.00"),
        ];
        let top = top_selling_products(&txs, 5);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_name, "Widget");
        assert_eq!(top[0].total_quantity, 6);
        assert_eq!(top[0].total_revenue, dec("60.00"));
        assert_eq!(top[1].product_name, "Gadget");
    }

    #[test]
    fn test_top_selling_products_truncates_to_n() {
        let txs = vec![
            tx("2024-01-01", "A", "C1", "North", 3, "1.00"),
            tx("2024-01-01", "B", "C1", "North", 2, "1.00"),
            tx("2024-01-01", "C", "C1", "North", 1, "1.00"),
        ];
        let top = top_selling_products(&txs, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_name, "A");
        assert_eq!(top[1].product_name, "B");
    }

    #[test]
    fn test_top_selling_tie_broken_by_first_seen() {
        let txs = vec![
            tx("2024-01-01", "Second", "C1", "North", 5, "1.00"),
            tx("2024-01-01", "First", "C1", "North", 5, "1.00"),
            tx("2024-01-01", "Heavy", "C1", "North", 9, "1.00"),
        ];
        let top = top_selling_products(&txs, 3);
        assert_eq!(top[0].product_name, "Heavy");
        // Equal quantities: encounter order decides
        assert_eq!(top[1].product_name, "Second");
        assert_eq!(top[2].product_name, "First");
    }

    #[test]
    fn test_customer_analysis() {
        let txs = vec![
            tx("2024-01-01", "Widget", "C1", "North", 3, "10.00"), // 30.00
            tx("2024-01-02", "Gadget", "C1", "North", 1, "15.00"), // 15.00
            tx("2024-01-01", "Widget", "C2", "South", 10, "10.00"), // 100.00
        ];
        let customers = customer_analysis(&txs);

        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].customer_id, "C2");
        assert_eq!(customers[0].total_spent, dec("100.00"));
        assert_eq!(customers[0].purchase_count, 1);

        assert_eq!(customers[1].customer_id, "C1");
        assert_eq!(customers[1].total_spent, dec("45.00"));
        assert_eq!(customers[1].purchase_count, 2);
        assert_eq!(customers[1].avg_order_value, dec("22.50"));
        assert_eq!(customers[1].products_bought.len(), 2);
        assert!(customers[1].products_bought.contains("Widget"));
        assert!(customers[1].products_bought.contains("Gadget"));
    }

    #[test]
    fn test_avg_order_value_is_rounded_to_two_places() {
        let txs = vec![
            tx("2024-01-01", "A", "C1", "North", 1, "10.00"),
            tx("2024-01-02", "B", "C1", "North", 1, "10.00"),
            tx("2024-01-03", "C", "C1", "North", 1, "10.01"),
        ];
        let customers = customer_analysis(&txs);
        // 30.01 / 3 = 10.003333... -> 10.00
        assert_eq!(customers[0].avg_order_value, dec("10.00"));
    }

    #[test]
    fn test_daily_sales_trend_is_chronological() {
        let txs = vec![
            tx("2024-01-03", "A", "C1", "North", 1, "10.00"),
            tx("2024-01-01", "B", "C2", "North", 1, "20.00"),
            tx("2024-01-01", "C", "C2", "North", 1, "5.00"),
            tx("2024-01-02", "D", "C3", "North", 1, "7.00"),
        ];
        let trend = daily_sales_trend(&txs);

        let dates: Vec<&str> = trend.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);

        assert_eq!(trend[0].revenue, dec("25.00"));
        assert_eq!(trend[0].transaction_count, 2);
        assert_eq!(trend[0].unique_customers, 1);
    }

    #[test]
    fn test_peak_sales_day_selects_highest_revenue() {
        let txs = vec![
            tx("2024-01-01", "A", "C1", "North", 3, "10.00"), // 30.00
            tx("2024-01-02", "B", "C2", "North", 1, "50.00"), // 50.00
        ];
        let peak = find_peak_sales_day(&txs).unwrap();
        assert_eq!(peak.date, "2024-01-02");
        assert_eq!(peak.revenue, dec("50.00"));
        assert_eq!(peak.transaction_count, 1);
    }

    #[test]
    fn test_peak_sales_day_tie_goes_to_first_ascending_date() {
        let txs = vec![
            tx("2024-01-05", "A", "C1", "North", 1, "40.00"),
            tx("2024-01-02", "B", "C2", "North", 1, "40.00"),
        ];
        let peak = find_peak_sales_day(&txs).unwrap();
        assert_eq!(peak.date, "2024-01-02");
    }

    #[test]
    fn test_peak_sales_day_empty_input() {
        assert_eq!(find_peak_sales_day(&[]), None);
    }

    #[test]
    fn test_low_performing_products_ascending_below_threshold() {
        let txs = vec![
            tx("2024-01-01", "Slow", "C1", "North", 3, "10.00"),
            tx("2024-01-01", "Slower", "C1", "North", 1, "10.00"),
            tx("2024-01-01", "Popular", "C1", "North", 25, "10.00"),
        ];
        let low = low_performing_products(&txs, 10);

        assert_eq!(low.len(), 2);
        assert_eq!(low[0].product_name, "Slower");
        assert_eq!(low[1].product_name, "Slow");
    }

    #[test]
    fn test_low_threshold_is_strict() {
        let txs = vec![tx("2024-01-01", "Edge", "C1", "North", 10, "1.00")];
        assert!(low_performing_products(&txs, 10).is_empty());
        assert_eq!(low_performing_products(&txs, 11).len(), 1);
    }

    #[test]
    fn test_top_and_low_lists_are_disjoint_when_threshold_below_cutoff() {
        let txs = vec![
            tx("2024-01-01", "A", "C1", "North", 30, "1.00"),
            tx("2024-01-01", "B", "C1", "North", 20, "1.00"),
            tx("2024-01-01", "C", "C1", "North", 5, "1.00"),
        ];
        let top = top_selling_products(&txs, 2);
        let low = low_performing_products(&txs, 10);

        let min_top_quantity = top.iter().map(|p| p.total_quantity).min().unwrap();
        assert!(10 <= min_top_quantity);
        for product in &low {
            assert!(!top.iter().any(|p| p.product_name == product.product_name));
        }
    }

    #[test]
    fn test_aggregations_are_idempotent() {
        let txs = vec![
            tx("2024-01-01", "Widget", "C1", "North", 3, "10.00"),
            tx("2024-01-02", "Gadget", "C2", "South", 1, "50.00"),
        ];

        assert_eq!(region_wise_sales(&txs), region_wise_sales(&txs));
        assert_eq!(top_selling_products(&txs, 5), top_selling_products(&txs, 5));
        assert_eq!(customer_analysis(&txs), customer_analysis(&txs));
        assert_eq!(daily_sales_trend(&txs), daily_sales_trend(&txs));
        assert_eq!(find_peak_sales_day(&txs), find_peak_sales_day(&txs));
        assert_eq!(
            low_performing_products(&txs, 10),
            low_performing_products(&txs, 10)
        );
    }
}
