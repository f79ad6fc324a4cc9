use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::AnalyticsError;
use crate::units;

/// Raw `TokensPurchased` log record as delivered by the event watcher.
///
/// Amount fields are optional because a decoded log can legitimately arrive
/// with missing args; the normalizer decides what to do with those.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyEvent {
    pub buyer: String,
    pub amount_of_tokens: Option<Decimal>,
    pub amount_of_eth: Option<Decimal>,
    pub transaction_hash: String,
    pub block_timestamp: Option<DateTime<Utc>>,
}

impl BuyEvent {
    /// Build from integer-scaled fixed-point(18) amounts, the unit on the wire.
    pub fn from_raw(
        buyer: impl Into<String>,
        raw_tokens: u128,
        raw_eth: u128,
        transaction_hash: impl Into<String>,
        block_timestamp: DateTime<Utc>,
    ) -> Result<Self, AnalyticsError> {
        Ok(Self {
            buyer: buyer.into(),
            amount_of_tokens: Some(units::try_from_wei(raw_tokens)?),
            amount_of_eth: Some(units::try_from_wei(raw_eth)?),
            transaction_hash: transaction_hash.into(),
            block_timestamp: Some(block_timestamp),
        })
    }
}

/// Raw `TokensSold` log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellEvent {
    pub seller: String,
    pub amount_of_tokens: Option<Decimal>,
    pub amount_of_eth: Option<Decimal>,
    pub transaction_hash: String,
    pub block_timestamp: Option<DateTime<Utc>>,
}

impl SellEvent {
    pub fn from_raw(
        seller: impl Into<String>,
        raw_tokens: u128,
        raw_eth: u128,
        transaction_hash: impl Into<String>,
        block_timestamp: DateTime<Utc>,
    ) -> Result<Self, AnalyticsError> {
        Ok(Self {
            seller: seller.into(),
            amount_of_tokens: Some(units::try_from_wei(raw_tokens)?),
            amount_of_eth: Some(units::try_from_wei(raw_eth)?),
            transaction_hash: transaction_hash.into(),
            block_timestamp: Some(block_timestamp),
        })
    }
}

/// Raw ERC-20 `Transfer` log record. No ETH leg — transfers move tokens only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferEvent {
    pub from: String,
    pub to: String,
    pub amount_of_tokens: Option<Decimal>,
    pub transaction_hash: String,
    pub block_timestamp: Option<DateTime<Utc>>,
}

impl TransferEvent {
    pub fn from_raw(
        from: impl Into<String>,
        to: impl Into<String>,
        raw_tokens: u128,
        transaction_hash: impl Into<String>,
        block_timestamp: DateTime<Utc>,
    ) -> Result<Self, AnalyticsError> {
        Ok(Self {
            from: from.into(),
            to: to.into(),
            amount_of_tokens: Some(units::try_from_wei(raw_tokens)?),
            transaction_hash: transaction_hash.into(),
            block_timestamp: Some(block_timestamp),
        })
    }
}
