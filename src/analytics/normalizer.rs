use crate::models::{BuyEvent, SellEvent, Transaction, TransferEvent};

/// Merge raw buy/sell/transfer logs into the account's transaction history.
///
/// Keeps buys where the account is the buyer, sells where it is the seller,
/// and transfers where it is either side. Events missing a token amount or a
/// block timestamp are dropped with a warning — a fabricated amount or time
/// would corrupt every downstream metric. A missing ETH leg on a kept
/// buy/sell resolves to zero.
///
/// Output is sorted most-recent-first for display; ties keep append order
/// (buys, then sells, then transfers).
pub fn normalize_transactions(
    account: &str,
    buys: &[BuyEvent],
    sells: &[SellEvent],
    transfers: &[TransferEvent],
) -> Vec<Transaction> {
    let mut transactions = Vec::with_capacity(buys.len() + sells.len() + transfers.len());

    for event in buys.iter().filter(|e| same_address(&e.buyer, account)) {
        let (Some(tokens), Some(timestamp)) = (event.amount_of_tokens, event.block_timestamp)
        else {
            skip(&event.transaction_hash, "buy");
            continue;
        };
        let eth = event.amount_of_eth.unwrap_or_default();
        if tokens.is_sign_negative() || eth.is_sign_negative() {
            skip(&event.transaction_hash, "buy");
            continue;
        }
        transactions.push(Transaction::buy(tokens, eth, timestamp, &event.transaction_hash));
    }

    for event in sells.iter().filter(|e| same_address(&e.seller, account)) {
        let (Some(tokens), Some(timestamp)) = (event.amount_of_tokens, event.block_timestamp)
        else {
            skip(&event.transaction_hash, "sell");
            continue;
        };
        let eth = event.amount_of_eth.unwrap_or_default();
        if tokens.is_sign_negative() || eth.is_sign_negative() {
            skip(&event.transaction_hash, "sell");
            continue;
        }
        transactions.push(Transaction::sell(tokens, eth, timestamp, &event.transaction_hash));
    }

    for event in transfers
        .iter()
        .filter(|e| same_address(&e.from, account) || same_address(&e.to, account))
    {
        let (Some(tokens), Some(timestamp)) = (event.amount_of_tokens, event.block_timestamp)
        else {
            skip(&event.transaction_hash, "transfer");
            continue;
        };
        if tokens.is_sign_negative() {
            skip(&event.transaction_hash, "transfer");
            continue;
        }
        let counterparty = if same_address(&event.from, account) {
            &event.to
        } else {
            &event.from
        };
        transactions.push(Transaction::transfer(
            tokens,
            counterparty,
            timestamp,
            &event.transaction_hash,
        ));
    }

    // Stable sort: equal timestamps keep buy-before-sell append order
    transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    tracing::debug!(
        account,
        count = transactions.len(),
        "normalized transaction history"
    );

    transactions
}

/// Truncated most-recent slice for the activity panel. Assumes the
/// normalizer's descending order.
pub fn recent(transactions: &[Transaction], limit: usize) -> &[Transaction] {
    &transactions[..transactions.len().min(limit)]
}

/// Hex addresses compare case-insensitively (checksummed vs. lowercased).
fn same_address(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

fn skip(tx_hash: &str, kind: &str) {
    tracing::warn!(tx_hash, kind, "skipping malformed event");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
