use rust_decimal::Decimal;
use std::env;

/// Tunables for the analytics pipeline.
///
/// Defaults mirror the vendor contract's fixed pricing (0.01 ETH to buy a
/// token, 0.008 ETH back on a sale) and the dashboard's display windows.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub market_buy_price: Decimal,
    pub market_sell_price: Decimal,
    /// How many trailing points the portfolio chart shows.
    pub chart_window: usize,
    /// How many transactions the recent-activity panel shows.
    pub recent_tx_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            market_buy_price: Decimal::new(1, 2),
            market_sell_price: Decimal::new(8, 3),
            chart_window: 20,
            recent_tx_limit: 10,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            market_buy_price: env::var("VENDOR_MARKET_BUY_PRICE")
                .unwrap_or_else(|_| "0.01".into())
                .parse()
                .unwrap_or(defaults.market_buy_price),
            market_sell_price: env::var("VENDOR_MARKET_SELL_PRICE")
                .unwrap_or_else(|_| "0.008".into())
                .parse()
                .unwrap_or(defaults.market_sell_price),
            chart_window: env::var("VENDOR_CHART_WINDOW")
                .unwrap_or_else(|_| "20".into())
                .parse()?,
            recent_tx_limit: env::var("VENDOR_RECENT_TX_LIMIT")
                .unwrap_or_else(|_| "10".into())
                .parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prices_match_vendor_contract() {
        let config = DashboardConfig::default();
        assert_eq!(config.market_buy_price, Decimal::new(1, 2));
        assert_eq!(config.market_sell_price, Decimal::new(8, 3));
        assert_eq!(config.chart_window, 20);
    }
}
