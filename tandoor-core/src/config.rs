//! Analytics configuration

use chrono_tz::Tz;
use rust_decimal::Decimal;

/// Tunables for the analytics engine.
///
/// The cost ratio is an assumed figure for dashboard estimates, not a
/// measured cost; it is configurable rather than baked in.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Assumed cost as a fraction of revenue (0.70 = 70%)
    pub cost_ratio: Decimal,
    /// Business timezone used to decide which orders count as "today"
    pub timezone: Tz,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            cost_ratio: Decimal::new(70, 2),
            timezone: Tz::UTC,
        }
    }
}
