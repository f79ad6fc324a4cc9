use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("market price cannot be negative: {0}")]
    NegativePrice(Decimal),

    #[error("raw amount does not fit 18-decimal fixed point: {0}")]
    AmountOutOfRange(u128),
}
