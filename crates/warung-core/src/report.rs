//! # Reporting Engine
//!
//! Pure, side-effect-free aggregation over an immutable (sales, products)
//! snapshot plus a time-window selector.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Report Aggregation                                 │
//! │                                                                         │
//! │  (sales, products, range, now)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter sales by window ──► totals (revenue, profit, count)             │
//! │       │                                                                 │
//! │       ├──► day buckets (calendar date, sparse, ascending)               │
//! │       │                                                                 │
//! │       └──► top products (by quantity, dangling refs excluded)           │
//! │                                                                         │
//! │  products (UNFILTERED) ──► total_products                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Window Semantics
//! `Today` means calendar-day equality in the observer's timezone, while
//! `Last7Days`/`Last30Days` are rolling windows measured from the instant
//! `now` with an inclusive lower bound. The asymmetry is deliberate: it is
//! the behavior the dashboard has always shipped, and reported totals near
//! day boundaries depend on it.
//!
//! `now` is an explicit parameter so the computation stays a pure function
//! of its inputs. Callers pass `Local::now()` for the live dashboard and a
//! fixed instant in tests.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ProcessedSale, Product};
use crate::TOP_PRODUCTS_LIMIT;

// =============================================================================
// Report Range
// =============================================================================

/// The aggregation window selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportRange {
    /// Calendar-day equality with `now` (observer-local, not rolling 24h).
    Today,
    /// Rolling window: `created_at >= now - 7 days` (inclusive).
    Last7Days,
    /// Rolling window: `created_at >= now - 30 days` (inclusive).
    Last30Days,
    /// No filter.
    AllTime,
}

impl Default for ReportRange {
    fn default() -> Self {
        ReportRange::AllTime
    }
}

impl ReportRange {
    /// Parses the dashboard's range keys (`today`, `7days`, `30days`, `all`).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "today" => Some(ReportRange::Today),
            "7days" => Some(ReportRange::Last7Days),
            "30days" => Some(ReportRange::Last30Days),
            "all" => Some(ReportRange::AllTime),
            _ => None,
        }
    }

    /// Whether a sale timestamp falls inside this window, observed at `now`.
    fn contains<Tz: TimeZone>(&self, at: DateTime<Utc>, now: &DateTime<Tz>) -> bool {
        match self {
            ReportRange::AllTime => true,
            ReportRange::Today => {
                at.with_timezone(&now.timezone()).date_naive() == now.date_naive()
            }
            ReportRange::Last7Days => at >= rolling_cutoff(now, 7),
            ReportRange::Last30Days => at >= rolling_cutoff(now, 30),
        }
    }
}

/// Inclusive lower bound of a rolling `days`-day window anchored at `now`.
fn rolling_cutoff<Tz: TimeZone>(now: &DateTime<Tz>, days: i64) -> DateTime<Utc> {
    (now.clone() - Duration::days(days)).with_timezone(&Utc)
}

// =============================================================================
// Summary Outputs
// =============================================================================

/// Revenue and profit accumulated for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    /// Calendar date in the observer's timezone (time-of-day discarded).
    pub date: NaiveDate,
    pub revenue: f64,
    pub profit: f64,
}

/// One entry in the top-products ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    /// Total units sold within the window.
    pub quantity: i64,
}

/// Aggregated dashboard metrics for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of `total_price` over the filtered sales.
    pub total_revenue: f64,
    /// Sum of `profit` over the filtered sales.
    pub total_profit: f64,
    /// Count of ALL products. An inventory fact, unaffected by the window.
    pub total_products: usize,
    /// Count of the filtered sales.
    pub total_sales: usize,
    /// Sparse per-day series, ascending by date. Days with no sales
    /// produce no bucket.
    pub sales_by_day: Vec<DayBucket>,
    /// Top 5 products by units sold within the window, descending.
    /// Sales referencing a deleted product are excluded; ties keep
    /// first-encountered order.
    pub top_products: Vec<TopProduct>,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Computes the dashboard summary for one window.
///
/// Pure function: identical inputs always yield identical output, no hidden
/// state, no mutation of the snapshot. Cannot fail: the snapshot is
/// already-validated in-memory data.
pub fn summarize<Tz: TimeZone>(
    sales: &[ProcessedSale],
    products: &[Product],
    range: ReportRange,
    now: DateTime<Tz>,
) -> Summary {
    let filtered: Vec<&ProcessedSale> = sales
        .iter()
        .filter(|s| range.contains(s.sale.created_at, &now))
        .collect();

    let total_revenue = filtered.iter().map(|s| s.sale.total_price).sum();
    let total_profit = filtered.iter().map(|s| s.sale.profit).sum();

    // BTreeMap keeps the buckets sorted ascending by calendar date.
    let tz = now.timezone();
    let mut by_day: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for sale in &filtered {
        let day = sale.sale.created_at.with_timezone(&tz).date_naive();
        let bucket = by_day.entry(day).or_insert((0.0, 0.0));
        bucket.0 += sale.sale.total_price;
        bucket.1 += sale.sale.profit;
    }
    let sales_by_day = by_day
        .into_iter()
        .map(|(date, (revenue, profit))| DayBucket {
            date,
            revenue,
            profit,
        })
        .collect();

    // Accumulate in first-encounter order so the stable sort below keeps
    // that order as the tie-break. Dangling references have no stable name
    // to group by and are skipped.
    let mut ranking: Vec<TopProduct> = Vec::new();
    for sale in &filtered {
        let Some(name) = sale.product_name.as_deref() else {
            continue;
        };
        match ranking.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.quantity += sale.sale.quantity,
            None => ranking.push(TopProduct {
                name: name.to_string(),
                quantity: sale.sale.quantity,
            }),
        }
    }
    ranking.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranking.truncate(TOP_PRODUCTS_LIMIT);

    Summary {
        total_revenue,
        total_profit,
        total_products: products.len(),
        total_sales: filtered.len(),
        sales_by_day,
        top_products: ranking,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sale;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            purchase_price: 5000.0,
            selling_price: 8000.0,
            stock: 20,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn sale_at(id: &str, name: Option<&str>, qty: i64, at: DateTime<Utc>) -> ProcessedSale {
        ProcessedSale {
            sale: Sale {
                id: id.to_string(),
                product_id: format!("p-{id}"),
                quantity: qty,
                total_price: 8000.0 * qty as f64,
                profit: 3000.0 * qty as f64,
                created_at: at,
            },
            product_name: name.map(String::from),
        }
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_totals_match_filtered_sales() {
        let now = noon(2026, 8, 27);
        let sales = vec![
            sale_at("1", Some("Kopi"), 2, noon(2026, 8, 27)),
            sale_at("2", Some("Teh"), 1, noon(2026, 8, 25)),
            sale_at("3", Some("Kopi"), 3, noon(2026, 6, 1)),
        ];
        let products = vec![product("a", "Kopi"), product("b", "Teh")];

        for range in [
            ReportRange::Today,
            ReportRange::Last7Days,
            ReportRange::Last30Days,
            ReportRange::AllTime,
        ] {
            let summary = summarize(&sales, &products, range, now);
            let expected: Vec<&ProcessedSale> = sales
                .iter()
                .filter(|s| range.contains(s.sale.created_at, &now))
                .collect();
            assert_eq!(summary.total_sales, expected.len());
            let revenue: f64 = expected.iter().map(|s| s.sale.total_price).sum();
            assert_eq!(summary.total_revenue, revenue);
            let profit: f64 = expected.iter().map(|s| s.sale.profit).sum();
            assert_eq!(summary.total_profit, profit);
        }
    }

    #[test]
    fn test_today_is_calendar_day_not_rolling_24h() {
        // 01:00 on the 27th; a sale at 23:00 the previous evening is only
        // two hours old but belongs to yesterday's calendar day.
        let now = Utc.with_ymd_and_hms(2026, 8, 27, 1, 0, 0).unwrap();
        let late_yesterday = Utc.with_ymd_and_hms(2026, 8, 26, 23, 0, 0).unwrap();
        let sales = vec![sale_at("1", Some("Kopi"), 1, late_yesterday)];

        let today = summarize(&sales, &[], ReportRange::Today, now);
        assert_eq!(today.total_sales, 0);

        let week = summarize(&sales, &[], ReportRange::Last7Days, now);
        assert_eq!(week.total_sales, 1);
    }

    #[test]
    fn test_rolling_window_lower_bound_is_inclusive() {
        let now = noon(2026, 8, 27);
        let exactly_seven_days = now - Duration::days(7);
        let just_before = exactly_seven_days - Duration::seconds(1);
        let sales = vec![
            sale_at("1", Some("Kopi"), 1, exactly_seven_days),
            sale_at("2", Some("Kopi"), 1, just_before),
        ];

        let summary = summarize(&sales, &[], ReportRange::Last7Days, now);
        assert_eq!(summary.total_sales, 1);
    }

    #[test]
    fn test_window_anchored_before_sale_excludes_it() {
        let sale_time = noon(2026, 8, 27);
        let day_before = noon(2026, 8, 26);
        let sales = vec![sale_at("1", Some("Kopi"), 1, sale_time)];

        let summary = summarize(&sales, &[], ReportRange::Today, day_before);
        assert_eq!(summary.total_sales, 0);

        let summary = summarize(&sales, &[], ReportRange::Today, sale_time);
        assert_eq!(summary.total_sales, 1);
    }

    #[test]
    fn test_total_products_ignores_window() {
        let now = noon(2026, 8, 27);
        let products = vec![product("a", "Kopi"), product("b", "Teh")];
        let summary = summarize(&[], &products, ReportRange::Today, now);

        assert_eq!(summary.total_products, 2);
        assert_eq!(summary.total_sales, 0);
    }

    #[test]
    fn test_sales_by_day_sorted_ascending_and_sparse() {
        let now = noon(2026, 8, 27);
        let sales = vec![
            sale_at("1", Some("Kopi"), 1, noon(2026, 8, 27)),
            sale_at("2", Some("Kopi"), 1, noon(2026, 8, 24)),
            sale_at("3", Some("Kopi"), 2, noon(2026, 8, 24)),
        ];

        let summary = summarize(&sales, &[], ReportRange::Last7Days, now);

        // Two buckets only (no zero-filled days in between), ascending.
        assert_eq!(summary.sales_by_day.len(), 2);
        assert_eq!(
            summary.sales_by_day[0].date,
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
        );
        assert_eq!(
            summary.sales_by_day[1].date,
            NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
        );
        assert_eq!(summary.sales_by_day[0].revenue, 24000.0);
        assert_eq!(summary.sales_by_day[0].profit, 9000.0);
    }

    #[test]
    fn test_day_buckets_use_observer_timezone() {
        // 23:30 UTC on the 26th is already the 27th at UTC+7 (Jakarta).
        let jakarta = chrono::FixedOffset::east_opt(7 * 3600).unwrap();
        let now = jakarta.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap();
        let sales = vec![sale_at(
            "1",
            Some("Kopi"),
            1,
            Utc.with_ymd_and_hms(2026, 8, 26, 23, 30, 0).unwrap(),
        )];

        let summary = summarize(&sales, &[], ReportRange::Today, now);
        assert_eq!(summary.total_sales, 1);
        assert_eq!(
            summary.sales_by_day[0].date,
            NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
        );
    }

    #[test]
    fn test_top_products_capped_sorted_and_excludes_deleted() {
        let now = noon(2026, 8, 27);
        let mut sales = vec![sale_at("x", None, 50, now)]; // dangling, must not rank
        for (i, (name, qty)) in [("A", 3), ("B", 9), ("C", 1), ("D", 7), ("E", 5), ("F", 2)]
            .into_iter()
            .enumerate()
        {
            sales.push(sale_at(&format!("s{i}"), Some(name), qty, now));
        }

        let summary = summarize(&sales, &[], ReportRange::AllTime, now);

        assert_eq!(summary.top_products.len(), TOP_PRODUCTS_LIMIT);
        let names: Vec<&str> = summary
            .top_products
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "D", "E", "A", "F"]);
        assert!(summary
            .top_products
            .windows(2)
            .all(|w| w[0].quantity >= w[1].quantity));
    }

    #[test]
    fn test_top_products_tie_break_is_first_encountered() {
        let now = noon(2026, 8, 27);
        let sales = vec![
            sale_at("1", Some("Teh"), 4, now),
            sale_at("2", Some("Kopi"), 4, now),
        ];

        let summary = summarize(&sales, &[], ReportRange::AllTime, now);
        assert_eq!(summary.top_products[0].name, "Teh");
        assert_eq!(summary.top_products[1].name, "Kopi");
    }

    #[test]
    fn test_range_keys_round_trip() {
        assert_eq!(ReportRange::from_key("today"), Some(ReportRange::Today));
        assert_eq!(ReportRange::from_key("7days"), Some(ReportRange::Last7Days));
        assert_eq!(
            ReportRange::from_key("30days"),
            Some(ReportRange::Last30Days)
        );
        assert_eq!(ReportRange::from_key("all"), Some(ReportRange::AllTime));
        assert_eq!(ReportRange::from_key("fortnight"), None);
    }
}
