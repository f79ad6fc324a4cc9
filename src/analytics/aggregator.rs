use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TxKind};

const SECS_PER_WEEK: i64 = 7 * 24 * 60 * 60;

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Transaction counts over the trailing display windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeframeCounts {
    pub last_24h: usize,
    pub last_7d: usize,
    pub last_30d: usize,
}

/// Token-unit volume per transaction kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeBreakdown {
    pub total_buy: Decimal,
    pub total_sell: Decimal,
    pub total_transfer: Decimal,
    /// Buy volume minus sell volume.
    pub net: Decimal,
}

/// ETH flow in and out of the vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueFlow {
    pub total_buy_value: Decimal,
    pub total_sell_value: Decimal,
    /// Sell value minus buy value: positive means net ETH came back.
    pub net_value: Decimal,
}

/// Average trade sizes and pacing. `time_between_txs` is in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Averages {
    pub buy_size: Decimal,
    pub sell_size: Decimal,
    pub time_between_txs: Decimal,
}

/// Headline trading-pattern metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityMetrics {
    /// Transactions per week since the first transaction.
    pub activity_score: Decimal,
    /// Historical sell volume as a fraction of the current balance.
    pub turnover_ratio: Decimal,
    pub total_transactions: usize,
    /// Percentage of transactions that are buys.
    pub buy_ratio: Decimal,
    /// Percentage of transactions that are sells.
    pub sell_ratio: Decimal,
}

/// Full trading-pattern snapshot for the analytics panel. Recomputed
/// wholesale from the transaction list on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub timeframes: TimeframeCounts,
    pub volumes: VolumeBreakdown,
    pub values: ValueFlow,
    pub averages: Averages,
    pub metrics: ActivityMetrics,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Aggregate trading-pattern statistics from the transaction history.
///
/// `now` is caller-supplied so the snapshot is a pure function of its
/// arguments; production callers pass `Utc::now()`. Every ratio and average
/// resolves to exactly zero when its denominator is zero.
pub fn aggregate_analytics(
    transactions: &[Transaction],
    current_balance: Decimal,
    now: DateTime<Utc>,
) -> AnalyticsSnapshot {
    let total = transactions.len();

    let mut buy_count = 0usize;
    let mut sell_count = 0usize;
    let mut buy_volume = Decimal::ZERO;
    let mut sell_volume = Decimal::ZERO;
    let mut transfer_volume = Decimal::ZERO;
    let mut buy_value = Decimal::ZERO;
    let mut sell_value = Decimal::ZERO;

    for tx in transactions {
        match tx.kind {
            TxKind::Buy => {
                buy_count += 1;
                buy_volume += tx.token_amount;
                buy_value += tx.eth_or_zero();
            }
            TxKind::Sell => {
                sell_count += 1;
                sell_volume += tx.token_amount;
                sell_value += tx.eth_or_zero();
            }
            TxKind::Transfer => {
                transfer_volume += tx.token_amount;
            }
        }
    }

    AnalyticsSnapshot {
        timeframes: TimeframeCounts {
            last_24h: count_within(transactions, now, Duration::hours(24)),
            last_7d: count_within(transactions, now, Duration::days(7)),
            last_30d: count_within(transactions, now, Duration::days(30)),
        },
        volumes: VolumeBreakdown {
            total_buy: buy_volume,
            total_sell: sell_volume,
            total_transfer: transfer_volume,
            net: buy_volume - sell_volume,
        },
        values: ValueFlow {
            total_buy_value: buy_value,
            total_sell_value: sell_value,
            net_value: sell_value - buy_value,
        },
        averages: Averages {
            buy_size: average(buy_volume, buy_count),
            sell_size: average(sell_volume, sell_count),
            time_between_txs: avg_interval_secs(transactions),
        },
        metrics: ActivityMetrics {
            activity_score: activity_score(transactions, now),
            turnover_ratio: if current_balance > Decimal::ZERO {
                sell_volume / current_balance
            } else {
                Decimal::ZERO
            },
            total_transactions: total,
            buy_ratio: kind_ratio(buy_count, total),
            sell_ratio: kind_ratio(sell_count, total),
        },
    }
}

fn count_within(transactions: &[Transaction], now: DateTime<Utc>, window: Duration) -> usize {
    transactions
        .iter()
        .filter(|tx| now - tx.timestamp <= window)
        .count()
}

fn average(volume: Decimal, count: usize) -> Decimal {
    if count > 0 {
        volume / Decimal::from(count as u64)
    } else {
        Decimal::ZERO
    }
}

/// Mean seconds between consecutive transactions: total span over gap count.
fn avg_interval_secs(transactions: &[Transaction]) -> Decimal {
    if transactions.len() < 2 {
        return Decimal::ZERO;
    }

    let oldest = transactions.iter().map(|tx| tx.timestamp).min();
    let newest = transactions.iter().map(|tx| tx.timestamp).max();

    match (oldest, newest) {
        (Some(oldest), Some(newest)) => {
            let span = Decimal::from((newest - oldest).num_seconds());
            span / Decimal::from(transactions.len() as u64 - 1)
        }
        _ => Decimal::ZERO,
    }
}

/// Transactions per week, with the elapsed-weeks denominator floored at one
/// so a short or single-transaction history cannot collapse it.
fn activity_score(transactions: &[Transaction], now: DateTime<Utc>) -> Decimal {
    let Some(oldest) = transactions.iter().map(|tx| tx.timestamp).min() else {
        return Decimal::ZERO;
    };

    let elapsed_weeks =
        Decimal::from((now - oldest).num_seconds().max(0)) / Decimal::from(SECS_PER_WEEK);
    let weeks = elapsed_weeks.max(Decimal::ONE);

    Decimal::from(transactions.len() as u64) / weeks
}

fn kind_ratio(count: usize, total: usize) -> Decimal {
    if total > 0 {
        Decimal::from(count as u64) / Decimal::from(total as u64) * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn buy_at(hours_ago: i64, tokens: i64, eth_milli: i64) -> Transaction {
        Transaction::buy(
            Decimal::from(tokens),
            Decimal::new(eth_milli, 3),
            now() - Duration::hours(hours_ago),
            format!("0xbuy{hours_ago}"),
        )
    }

    fn sell_at(hours_ago: i64, tokens: i64, eth_milli: i64) -> Transaction {
        Transaction::sell(
            Decimal::from(tokens),
            Decimal::new(eth_milli, 3),
            now() - Duration::hours(hours_ago),
            format!("0xsell{hours_ago}"),
        )
    }

    #[test]
    fn test_window_counts() {
        let txs = vec![
            buy_at(1, 10, 100),        // inside 24h
            buy_at(48, 10, 100),       // inside 7d
            sell_at(24 * 10, 5, 40),   // inside 30d
            sell_at(24 * 100, 5, 40),  // older than all windows
        ];

        let snapshot = aggregate_analytics(&txs, Decimal::from(10), now());
        assert_eq!(snapshot.timeframes.last_24h, 1);
        assert_eq!(snapshot.timeframes.last_7d, 2);
        assert_eq!(snapshot.timeframes.last_30d, 3);
    }

    #[test]
    fn test_volumes_and_values() {
        let txs = vec![
            buy_at(1, 100, 1_000),
            buy_at(2, 50, 500),
            sell_at(3, 40, 320),
            Transaction::transfer(Decimal::from(25), "0xother", now(), "0xt"),
        ];

        let snapshot = aggregate_analytics(&txs, Decimal::from(110), now());
        assert_eq!(snapshot.volumes.total_buy, Decimal::from(150));
        assert_eq!(snapshot.volumes.total_sell, Decimal::from(40));
        assert_eq!(snapshot.volumes.total_transfer, Decimal::from(25));
        assert_eq!(snapshot.volumes.net, Decimal::from(110));
        assert_eq!(snapshot.values.total_buy_value, Decimal::new(15, 1));
        assert_eq!(snapshot.values.total_sell_value, Decimal::new(32, 2));
        // 0.32 - 1.5
        assert_eq!(snapshot.values.net_value, Decimal::new(-118, 2));
    }

    #[test]
    fn test_average_sizes() {
        let txs = vec![buy_at(1, 100, 1_000), buy_at(2, 50, 500), sell_at(3, 40, 320)];

        let snapshot = aggregate_analytics(&txs, Decimal::from(110), now());
        assert_eq!(snapshot.averages.buy_size, Decimal::from(75));
        assert_eq!(snapshot.averages.sell_size, Decimal::from(40));
    }

    #[test]
    fn test_buy_sell_ratios() {
        // 3 buys, 1 sell
        let txs = vec![
            buy_at(1, 10, 100),
            buy_at(2, 10, 100),
            buy_at(3, 10, 100),
            sell_at(4, 5, 40),
        ];

        let snapshot = aggregate_analytics(&txs, Decimal::from(25), now());
        assert_eq!(snapshot.metrics.buy_ratio, Decimal::from(75));
        assert_eq!(snapshot.metrics.sell_ratio, Decimal::from(25));
    }

    #[test]
    fn test_avg_interval() {
        // Three transactions, 2h apart: span 4h over 2 gaps
        let txs = vec![buy_at(0, 1, 10), buy_at(2, 1, 10), buy_at(4, 1, 10)];

        let snapshot = aggregate_analytics(&txs, Decimal::ONE, now());
        assert_eq!(snapshot.averages.time_between_txs, Decimal::from(7_200));
    }

    #[test]
    fn test_single_transaction_degenerate_cases() {
        let txs = vec![buy_at(1, 10, 100)];

        let snapshot = aggregate_analytics(&txs, Decimal::from(10), now());
        assert_eq!(snapshot.averages.time_between_txs, Decimal::ZERO);
        // One transaction, history shorter than a week: floor denominator at 1
        assert_eq!(snapshot.metrics.activity_score, Decimal::ONE);
    }

    #[test]
    fn test_activity_score_over_weeks() {
        // 4 transactions spread over exactly 2 weeks
        let txs = vec![
            buy_at(0, 1, 10),
            buy_at(24 * 5, 1, 10),
            buy_at(24 * 9, 1, 10),
            buy_at(24 * 14, 1, 10),
        ];

        let snapshot = aggregate_analytics(&txs, Decimal::ONE, now());
        assert_eq!(snapshot.metrics.activity_score, Decimal::from(2));
    }

    #[test]
    fn test_turnover_ratio() {
        let txs = vec![sell_at(1, 40, 320)];

        let snapshot = aggregate_analytics(&txs, Decimal::from(80), now());
        assert_eq!(snapshot.metrics.turnover_ratio, Decimal::new(5, 1));
    }

    #[test]
    fn test_empty_history_all_zero() {
        let snapshot = aggregate_analytics(&[], Decimal::ZERO, now());

        assert_eq!(snapshot.timeframes.last_24h, 0);
        assert_eq!(snapshot.timeframes.last_7d, 0);
        assert_eq!(snapshot.timeframes.last_30d, 0);
        assert_eq!(snapshot.volumes.net, Decimal::ZERO);
        assert_eq!(snapshot.averages.buy_size, Decimal::ZERO);
        assert_eq!(snapshot.averages.time_between_txs, Decimal::ZERO);
        assert_eq!(snapshot.metrics.activity_score, Decimal::ZERO);
        assert_eq!(snapshot.metrics.turnover_ratio, Decimal::ZERO);
        assert_eq!(snapshot.metrics.buy_ratio, Decimal::ZERO);
        assert_eq!(snapshot.metrics.sell_ratio, Decimal::ZERO);
    }

    #[test]
    fn test_zero_balance_turnover_is_zero() {
        let txs = vec![sell_at(1, 40, 320)];
        let snapshot = aggregate_analytics(&txs, Decimal::ZERO, now());
        assert_eq!(snapshot.metrics.turnover_ratio, Decimal::ZERO);
    }

    #[test]
    fn test_idempotent() {
        let txs = vec![buy_at(1, 10, 100), sell_at(2, 5, 40)];
        let a = aggregate_analytics(&txs, Decimal::from(5), now());
        let b = aggregate_analytics(&txs, Decimal::from(5), now());
        assert_eq!(a.volumes.net, b.volumes.net);
        assert_eq!(a.metrics.activity_score, b.metrics.activity_score);
        assert_eq!(a.averages.time_between_txs, b.averages.time_between_txs);
    }
}
