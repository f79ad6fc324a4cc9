use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TxKind};

/// One bar of the portfolio chart: running totals after the transaction at
/// `index` in chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub index: usize,
    pub balance: Decimal,
    pub value: Decimal,
    pub timestamp: DateTime<Utc>,
    pub kind: TxKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// First-to-last movement of a chart series, for the chart header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSummary {
    pub change: Decimal,
    pub change_percent: Decimal,
    pub trend: Trend,
}

/// Build the ascending running-balance series the chart renders.
///
/// Buys add to the running token balance and ETH value, sells subtract,
/// transfers emit a point without moving either total. The sort is stable,
/// so same-timestamp transactions keep the normalizer's relative order.
pub fn build_chart_series(transactions: &[Transaction]) -> Vec<ChartDataPoint> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|tx| tx.timestamp);

    let mut balance = Decimal::ZERO;
    let mut value = Decimal::ZERO;

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, tx)| {
            match tx.kind {
                TxKind::Buy => {
                    balance += tx.token_amount;
                    value += tx.eth_or_zero();
                }
                TxKind::Sell => {
                    balance -= tx.token_amount;
                    value -= tx.eth_or_zero();
                }
                TxKind::Transfer => {}
            }
            ChartDataPoint {
                index,
                balance,
                value,
                timestamp: tx.timestamp,
                kind: tx.kind,
            }
        })
        .collect()
}

/// Trailing window of the series, sized by `DashboardConfig::chart_window`.
pub fn recent_window(series: &[ChartDataPoint], window: usize) -> &[ChartDataPoint] {
    &series[series.len().saturating_sub(window)..]
}

/// Summarize a (possibly windowed) series for the chart header.
pub fn summarize_series(series: &[ChartDataPoint]) -> ChartSummary {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return ChartSummary {
            change: Decimal::ZERO,
            change_percent: Decimal::ZERO,
            trend: Trend::Neutral,
        };
    };

    let change = last.balance - first.balance;
    let change_percent = if first.balance > Decimal::ZERO {
        change / first.balance * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let trend = if change > Decimal::ZERO {
        Trend::Up
    } else if change < Decimal::ZERO {
        Trend::Down
    } else {
        Trend::Neutral
    };

    ChartSummary {
        change,
        change_percent,
        trend,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
