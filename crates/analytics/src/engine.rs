use crate::report::SalesReport;
use core_types::DealInputs;
use rust_decimal::Decimal;

/// A stateless calculator for deriving sales performance metrics from a
/// validated set of deal inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating the derived metrics.
    ///
    /// The function is referentially transparent: identical inputs always
    /// yield an identical `SalesReport`, with no hidden state, randomness or
    /// time dependency. It is total on its input because `DealInputs` is
    /// only constructible through validation, which guarantees
    /// `total_deals > 0` and `deals_won <= total_deals`; the single remaining
    /// division hazard (`deals_won == 0`) is defined away as zero.
    pub fn calculate(&self, inputs: &DealInputs) -> SalesReport {
        let mut report = SalesReport::new();

        let deals_won = Decimal::from(inputs.deals_won());
        let total_deals = Decimal::from(inputs.total_deals());

        // The validator guarantees total_deals > 0.
        report.win_rate_pct = (deals_won / total_deals) * Decimal::from(100);
        report.total_revenue = inputs.total_revenue();

        report.avg_deal_value = if inputs.deals_won() > 0 {
            inputs.total_revenue() / deals_won
        } else {
            Decimal::ZERO
        };

        report.avg_deal_size = inputs.total_revenue() / total_deals;

        let deals_lost = Decimal::from(inputs.deals_lost());
        report.lost_opportunities_value = deals_lost * report.avg_deal_value;

        tracing::debug!(
            win_rate_pct = %report.win_rate_pct,
            avg_deal_value = %report.avg_deal_value,
            lost_opportunities_value = %report.lost_opportunities_value,
            "Derived sales metrics."
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::DealInputsDraft;
    use rust_decimal_macros::dec;

    fn inputs(won: u64, total: u64, revenue: Decimal) -> DealInputs {
        DealInputsDraft {
            deals_won: Some(won),
            total_deals: Some(total),
            total_revenue: Some(revenue),
            avg_sales_cycle_days: None,
        }
        .validate()
        .expect("test inputs must be valid")
    }

    #[test]
    fn derives_the_full_record_for_a_typical_period() {
        let report = MetricsEngine::new().calculate(&inputs(20, 50, dec!(1_000_000)));

        assert_eq!(report.win_rate_pct, dec!(40));
        assert_eq!(report.total_revenue, dec!(1_000_000));
        assert_eq!(report.avg_deal_value, dec!(50_000));
        assert_eq!(report.avg_deal_size, dec!(20_000));
        assert_eq!(report.lost_opportunities_value, dec!(1_500_000));
    }

    #[test]
    fn zero_deals_won_zeroes_the_per_win_metrics() {
        let report = MetricsEngine::new().calculate(&inputs(0, 10, dec!(0)));

        assert_eq!(report.win_rate_pct, Decimal::ZERO);
        assert_eq!(report.avg_deal_value, Decimal::ZERO);
        assert_eq!(report.avg_deal_size, Decimal::ZERO);
        assert_eq!(report.lost_opportunities_value, Decimal::ZERO);
    }

    #[test]
    fn winning_every_deal_leaves_no_lost_opportunity_value() {
        let report = MetricsEngine::new().calculate(&inputs(8, 8, dec!(400_000)));

        assert_eq!(report.win_rate_pct, dec!(100));
        assert_eq!(report.avg_deal_value, dec!(50_000));
        assert_eq!(report.lost_opportunities_value, Decimal::ZERO);
    }

    #[test]
    fn win_rate_stays_within_the_percent_range() {
        let engine = MetricsEngine::new();
        for (won, total) in [(0, 7), (1, 7), (3, 7), (7, 7), (1, 1_000_000)] {
            let report = engine.calculate(&inputs(won, total, dec!(123_456)));
            assert!(report.win_rate_pct >= Decimal::ZERO);
            assert!(report.win_rate_pct <= Decimal::from(100));
        }
    }

    #[test]
    fn calculation_is_idempotent() {
        let engine = MetricsEngine::new();
        let input = inputs(13, 37, dec!(987_654.32));
        assert_eq!(engine.calculate(&input), engine.calculate(&input));
    }
}
