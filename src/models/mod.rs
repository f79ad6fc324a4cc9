pub mod event;
pub mod transaction;

pub use event::{BuyEvent, SellEvent, TransferEvent};
pub use transaction::Transaction;

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TxKind
// ---------------------------------------------------------------------------

/// Economic direction of a normalized transaction. Serialized lowercase to
/// match the tags the dashboard renders ("buy" / "sell" / "transfer").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Buy,
    Sell,
    Transfer,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Buy => "buy",
            TxKind::Sell => "sell",
            TxKind::Transfer => "transfer",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
