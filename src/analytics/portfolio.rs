use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::AnalyticsError;
use crate::models::{Transaction, TxKind};

/// Valuation snapshot for the connected account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub total_tokens: Decimal,
    pub total_invested: Decimal,
    pub total_value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percentage: Decimal,
    pub avg_buy_price: Decimal,
    pub avg_sell_price: Decimal,
}

/// Compute portfolio valuation and P&L from the transaction history.
///
/// `total_value` counts the current holding at the vendor's sell price plus
/// all ETH already received from sales; `profit_loss` is that value against
/// everything invested. Percentages and averages fall back to zero instead
/// of dividing by zero.
///
/// The one rejected input is a negative market price — feeding it through
/// would produce a plausible-looking but meaningless valuation.
pub fn compute_portfolio_metrics(
    transactions: &[Transaction],
    current_balance: Decimal,
    market_sell_price: Decimal,
) -> Result<PortfolioMetrics, AnalyticsError> {
    if market_sell_price.is_sign_negative() {
        return Err(AnalyticsError::NegativePrice(market_sell_price));
    }

    let mut total_bought = Decimal::ZERO;
    let mut total_sold = Decimal::ZERO;
    let mut total_invested = Decimal::ZERO;
    let mut total_received = Decimal::ZERO;

    for tx in transactions {
        match tx.kind {
            TxKind::Buy => {
                total_bought += tx.token_amount;
                total_invested += tx.eth_or_zero();
            }
            TxKind::Sell => {
                total_sold += tx.token_amount;
                total_received += tx.eth_or_zero();
            }
            TxKind::Transfer => {}
        }
    }

    let current_token_value = current_balance * market_sell_price;
    let total_value = current_token_value + total_received;
    let profit_loss = total_value - total_invested;

    Ok(PortfolioMetrics {
        total_tokens: current_balance,
        total_invested,
        total_value,
        profit_loss,
        profit_loss_percentage: guarded_pct(profit_loss, total_invested),
        avg_buy_price: guarded_div(total_invested, total_bought),
        avg_sell_price: guarded_div(total_received, total_sold),
    })
}

fn guarded_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator / denominator
    } else {
        Decimal::ZERO
    }
}

fn guarded_pct(numerator: Decimal, denominator: Decimal) -> Decimal {
    guarded_div(numerator, denominator) * Decimal::ONE_HUNDRED
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
