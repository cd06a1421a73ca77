use crate::report::SalesReport;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Qualitative banding of the win rate, with fixed thresholds at 20, 40 and
/// 60 percent. Each band is inclusive on its lower edge: a win rate of
/// exactly 20.0 is `ApproachingAverage`, not `BelowStandards`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinRateTier {
    BelowStandards,
    ApproachingAverage,
    Solid,
    Excellent,
}

impl WinRateTier {
    /// Classifies a win-rate percentage into its tier.
    pub fn from_win_rate(win_rate_pct: Decimal) -> Self {
        if win_rate_pct < Decimal::from(20) {
            WinRateTier::BelowStandards
        } else if win_rate_pct < Decimal::from(40) {
            WinRateTier::ApproachingAverage
        } else if win_rate_pct < Decimal::from(60) {
            WinRateTier::Solid
        } else {
            WinRateTier::Excellent
        }
    }

    /// The fixed advisory message for this tier, shared verbatim by the
    /// on-screen summary and the exported report document.
    pub fn message(&self) -> &'static str {
        match self {
            WinRateTier::BelowStandards => {
                "Your win rate is below industry standards. Focus on improving lead \
                 qualification and sales process efficiency."
            }
            WinRateTier::ApproachingAverage => {
                "Your win rate is approaching industry averages. Consider sales training \
                 and refining your value proposition."
            }
            WinRateTier::Solid => {
                "Your win rate is solid. To improve further, analyze your most successful \
                 deals and replicate those strategies."
            }
            WinRateTier::Excellent => {
                "Your win rate is excellent! Maintain your high performance by continuously \
                 refining your sales approach and team skills."
            }
        }
    }
}

/// Flag relating the lost-opportunity value to realized revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpportunityRisk {
    /// Lost value strictly exceeds the revenue actually generated.
    LostExceedsRevenue,
    /// Lost value is at or below revenue.
    ContinueFocus,
}

impl OpportunityRisk {
    pub fn from_report(report: &SalesReport) -> Self {
        if report.lost_opportunities_value > report.total_revenue {
            OpportunityRisk::LostExceedsRevenue
        } else {
            OpportunityRisk::ContinueFocus
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            OpportunityRisk::LostExceedsRevenue => {
                "The value of lost opportunities exceeds your current revenue. Improving \
                 your win rate would significantly impact your bottom line."
            }
            OpportunityRisk::ContinueFocus => {
                "Continue to focus on increasing deal size and qualification to maximize \
                 revenue growth."
            }
        }
    }
}

/// The combined advisory for one report: a win-rate tier and an
/// opportunity-risk flag, each carrying its fixed message. Pure lookup over
/// the two computed values; holds no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub win_rate_tier: WinRateTier,
    pub opportunity_risk: OpportunityRisk,
}

impl Advisory {
    pub fn for_report(report: &SalesReport) -> Self {
        Self {
            win_rate_tier: WinRateTier::from_win_rate(report.win_rate_pct),
            opportunity_risk: OpportunityRisk::from_report(report),
        }
    }

    pub fn win_rate_message(&self) -> &'static str {
        self.win_rate_tier.message()
    }

    pub fn opportunity_message(&self) -> &'static str {
        self.opportunity_risk.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn tier_bands_are_inclusive_on_their_lower_edge() {
        let cases = [
            (dec!(0), WinRateTier::BelowStandards),
            (dec!(19.999), WinRateTier::BelowStandards),
            (dec!(20.000), WinRateTier::ApproachingAverage),
            (dec!(39.999), WinRateTier::ApproachingAverage),
            (dec!(40.000), WinRateTier::Solid),
            (dec!(59.999), WinRateTier::Solid),
            (dec!(60.000), WinRateTier::Excellent),
            (dec!(100), WinRateTier::Excellent),
        ];
        for (rate, expected) in cases {
            assert_eq!(WinRateTier::from_win_rate(rate), expected, "rate {rate}");
        }
    }

    #[test]
    fn risk_flag_requires_strictly_greater_lost_value() {
        let mut report = SalesReport::new();
        report.total_revenue = dec!(1_000);
        report.lost_opportunities_value = dec!(1_000);
        assert_eq!(
            OpportunityRisk::from_report(&report),
            OpportunityRisk::ContinueFocus
        );

        report.lost_opportunities_value = dec!(1_000.01);
        assert_eq!(
            OpportunityRisk::from_report(&report),
            OpportunityRisk::LostExceedsRevenue
        );
    }

    #[test]
    fn all_zero_report_gets_the_calm_advisory() {
        // 0 > 0 is false, so the risk flag stays on ContinueFocus.
        let advisory = Advisory::for_report(&SalesReport::new());
        assert_eq!(advisory.win_rate_tier, WinRateTier::BelowStandards);
        assert_eq!(advisory.opportunity_risk, OpportunityRisk::ContinueFocus);
    }

    #[test]
    fn every_tier_has_a_distinct_message() {
        let tiers = [
            WinRateTier::BelowStandards,
            WinRateTier::ApproachingAverage,
            WinRateTier::Solid,
            WinRateTier::Excellent,
        ];
        for (i, a) in tiers.iter().enumerate() {
            for b in &tiers[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }
}
