pub mod aggregator;
pub mod chart;
pub mod normalizer;
pub mod portfolio;

pub use aggregator::{aggregate_analytics, AnalyticsSnapshot};
pub use chart::{build_chart_series, recent_window, summarize_series, ChartDataPoint, ChartSummary, Trend};
pub use normalizer::{normalize_transactions, recent};
pub use portfolio::{compute_portfolio_metrics, PortfolioMetrics};
