use rust_decimal::Decimal;

use crate::errors::AnalyticsError;

/// Fractional digits of the standard token/ETH fixed-point representation.
pub const TOKEN_DECIMALS: u32 = 18;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * 60;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Convert a raw integer-scaled fixed-point(18) amount into a `Decimal`.
///
/// Rejects values that overflow `Decimal`'s 96-bit mantissa instead of
/// rounding them; nothing downstream is allowed to see a drifted amount.
pub fn try_from_wei(raw: u128) -> Result<Decimal, AnalyticsError> {
    let signed = i128::try_from(raw).map_err(|_| AnalyticsError::AmountOutOfRange(raw))?;
    Decimal::try_from_i128_with_scale(signed, TOKEN_DECIMALS)
        .map_err(|_| AnalyticsError::AmountOutOfRange(raw))
}

/// Human-readable duration for dashboard display: "3d 7h", "5h", "12m".
pub fn format_duration(seconds: i64) -> String {
    let days = seconds / SECS_PER_DAY;
    let hours = (seconds % SECS_PER_DAY) / SECS_PER_HOUR;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h")
    } else {
        format!("{}m", seconds / SECS_PER_MINUTE)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
