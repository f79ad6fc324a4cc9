use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TxKind;

/// One normalized economic event for the tracked account.
///
/// Constructed once by the normalizer and never mutated; `eth_amount` is
/// `Some` exactly when `kind` is Buy or Sell, `counterparty` is `Some`
/// exactly when `kind` is Transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TxKind,
    pub token_amount: Decimal,
    pub eth_amount: Option<Decimal>,
    pub timestamp: DateTime<Utc>,
    pub tx_hash: String,
    pub counterparty: Option<String>,
}

impl Transaction {
    pub fn buy(
        token_amount: Decimal,
        eth_amount: Decimal,
        timestamp: DateTime<Utc>,
        tx_hash: impl Into<String>,
    ) -> Self {
        Self {
            kind: TxKind::Buy,
            token_amount,
            eth_amount: Some(eth_amount),
            timestamp,
            tx_hash: tx_hash.into(),
            counterparty: None,
        }
    }

    pub fn sell(
        token_amount: Decimal,
        eth_amount: Decimal,
        timestamp: DateTime<Utc>,
        tx_hash: impl Into<String>,
    ) -> Self {
        Self {
            kind: TxKind::Sell,
            token_amount,
            eth_amount: Some(eth_amount),
            timestamp,
            tx_hash: tx_hash.into(),
            counterparty: None,
        }
    }

    pub fn transfer(
        token_amount: Decimal,
        counterparty: impl Into<String>,
        timestamp: DateTime<Utc>,
        tx_hash: impl Into<String>,
    ) -> Self {
        Self {
            kind: TxKind::Transfer,
            token_amount,
            eth_amount: None,
            timestamp,
            tx_hash: tx_hash.into(),
            counterparty: Some(counterparty.into()),
        }
    }

    /// ETH leg of the transaction, 0 when there is none.
    pub fn eth_or_zero(&self) -> Decimal {
        self.eth_amount.unwrap_or(Decimal::ZERO)
    }
}
