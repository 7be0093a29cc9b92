//! Trend analyzer - Classifies a product's sales momentum.
//!
//! Two fixed seven-day windows are compared: the current window (age of at most 7 days)
//! against the baseline window (older than 7 and at most 14 days). Both averages divide
//! by the window length, so days without sales count as zero. The reference instant is
//! always passed in; nothing here reads the clock.

use crate::{
    core::{catalog::Catalog, ledger::Ledger},
    entities::{Product, SaleEvent},
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of each comparison window, in days.
pub const WINDOW_DAYS: f64 = 7.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Momentum classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendStatus {
    /// Growth above the hot threshold
    Hot,
    /// Growth above the rising threshold
    Rising,
    /// Growth below the declining threshold
    Declining,
    /// Anything else
    Stable,
}

impl TrendStatus {
    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Rising => "Rising",
            Self::Declining => "Declining",
            Self::Stable => "Stable",
        }
    }
}

impl std::fmt::Display for TrendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Growth percentages that separate the statuses. Comparisons are strict.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendThresholds {
    /// Growth strictly above this is `Hot`
    pub hot: f64,
    /// Growth strictly above this is `Rising`
    pub rising: f64,
    /// Growth strictly below this is `Declining`
    pub declining: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            hot: 50.0,
            rising: 15.0,
            declining: -15.0,
        }
    }
}

impl TrendThresholds {
    /// First match wins: hot, rising, declining, otherwise stable.
    #[must_use]
    pub fn status_for(&self, growth: f64) -> TrendStatus {
        if growth > self.hot {
            TrendStatus::Hot
        } else if growth > self.rising {
            TrendStatus::Rising
        } else if growth < self.declining {
            TrendStatus::Declining
        } else {
            TrendStatus::Stable
        }
    }
}

/// Result of classifying one product.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Growth of the current average over the baseline average, in whole percent
    pub growth: i64,
    /// Momentum classification
    pub status: TrendStatus,
    /// Current window daily average, rounded to one decimal
    pub current_avg: f64,
}

/// A product paired with its trend, as shown in the trend views.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductTrend {
    /// The classified product
    pub product: Product,
    /// Its trend at the reference instant
    pub trend: Trend,
}

/// Fractional days between the event day's midnight (UTC) and `now`.
/// Negative for days after `now`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn age_in_days(date: NaiveDate, now: DateTime<Utc>) -> f64 {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    (now - midnight).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Classifies `product_id` with the default thresholds.
#[must_use]
pub fn classify(ledger: &Ledger, product_id: i64, now: DateTime<Utc>) -> Trend {
    classify_with(ledger, product_id, now, &TrendThresholds::default())
}

/// Classifies `product_id` against the given thresholds.
///
/// Status is decided on the unrounded growth; the reported growth is rounded to the
/// nearest whole percent with halves going up.
#[must_use]
pub fn classify_with(
    ledger: &Ledger,
    product_id: i64,
    now: DateTime<Utc>,
    thresholds: &TrendThresholds,
) -> Trend {
    let (baseline_sum, current_sum) = window_sums(ledger.history(product_id), now);
    let baseline_avg = baseline_sum / WINDOW_DAYS;
    let current_avg = current_sum / WINDOW_DAYS;

    let growth = growth_percent(baseline_avg, current_avg);

    Trend {
        growth: round_half_up(growth),
        status: thresholds.status_for(growth),
        current_avg: (current_avg * 10.0).round() / 10.0,
    }
}

/// Every catalog product with its trend, highest growth first.
/// Products with equal growth keep catalog order.
#[must_use]
pub fn rank_trends(
    catalog: &Catalog,
    ledger: &Ledger,
    now: DateTime<Utc>,
    thresholds: &TrendThresholds,
) -> Vec<ProductTrend> {
    let mut ranked: Vec<ProductTrend> = catalog
        .list_products()
        .iter()
        .map(|product| ProductTrend {
            trend: classify_with(ledger, product.id, now, thresholds),
            product: product.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| b.trend.growth.cmp(&a.trend.growth));
    ranked
}

/// Sums quantities into (baseline, current) windows.
#[allow(clippy::cast_precision_loss)]
fn window_sums<'a>(events: impl Iterator<Item = &'a SaleEvent>, now: DateTime<Utc>) -> (f64, f64) {
    events.fold((0.0, 0.0), |(baseline, current), event| {
        let age = age_in_days(event.date, now);
        let qty = event.qty as f64;
        if age <= WINDOW_DAYS {
            (baseline, current + qty)
        } else if age <= 2.0 * WINDOW_DAYS {
            (baseline + qty, current)
        } else {
            (baseline, current)
        }
    })
}

fn growth_percent(baseline_avg: f64, current_avg: f64) -> f64 {
    if baseline_avg == 0.0 {
        if current_avg > 0.0 { 100.0 } else { 0.0 }
    } else {
        ((current_avg - baseline_avg) / baseline_avg) * 100.0
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
