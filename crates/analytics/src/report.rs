use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The standardized record of derived sales metrics.
///
/// This struct is the sole output of the `MetricsEngine` and serves as the
/// data transfer object for results throughout the entire system. It is
/// always populated as a whole; there are no partial reports. All values are
/// locale-free numerics: formatting (currency symbols, rounding, grouping)
/// belongs to the presentation and export collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    /// Share of closed deals that were won, in percent (0 to 100).
    pub win_rate_pct: Decimal,
    /// Passthrough of the input revenue figure.
    pub total_revenue: Decimal,
    /// Mean revenue per *won* deal. Defined as zero when no deals were won.
    pub avg_deal_value: Decimal,
    /// Mean revenue per *closed* deal, won and lost combined.
    pub avg_deal_size: Decimal,
    /// Estimated revenue foregone from lost deals, priced at the average
    /// value of a won deal.
    pub lost_opportunities_value: Decimal,
}

impl SalesReport {
    /// Creates a new, zeroed-out SalesReport.
    /// This is useful as a default or starting point before calculations.
    pub fn new() -> Self {
        Self {
            win_rate_pct: Decimal::ZERO,
            total_revenue: Decimal::ZERO,
            avg_deal_value: Decimal::ZERO,
            avg_deal_size: Decimal::ZERO,
            lost_opportunities_value: Decimal::ZERO,
        }
    }
}

impl Default for SalesReport {
    fn default() -> Self {
        Self::new()
    }
}
