pub mod analytics;
pub mod config;
pub mod errors;
pub mod models;
pub mod units;

pub use analytics::{
    aggregate_analytics, build_chart_series, compute_portfolio_metrics, normalize_transactions,
    AnalyticsSnapshot, ChartDataPoint, PortfolioMetrics,
};
pub use config::DashboardConfig;
pub use errors::AnalyticsError;
pub use models::{BuyEvent, SellEvent, Transaction, TransferEvent, TxKind};
