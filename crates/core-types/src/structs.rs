use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The raw, possibly incomplete input set as the user has entered it so far.
///
/// Every field is optional because "not yet entered" is a distinct state from
/// zero. The draft is cheap to re-validate after every edit, which is how the
/// presentation layer decides whether the calculate action is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DealInputsDraft {
    /// Number of deals won in the period.
    pub deals_won: Option<u64>,
    /// Total deals closed in the period (won and lost combined).
    pub total_deals: Option<u64>,
    /// Total revenue generated by the won deals, in the reporting currency.
    pub total_revenue: Option<Decimal>,
    /// Average days from first contact to close. Display-only, never used in
    /// any derived metric.
    pub avg_sales_cycle_days: Option<Decimal>,
}

impl DealInputsDraft {
    /// Checks the draft against the full input contract and, on success,
    /// freezes it into a validated `DealInputs`.
    ///
    /// The contract: `deals_won` present; `total_deals` present and > 0;
    /// `total_revenue` present and >= 0; the optional sales cycle, when
    /// present, >= 0; and `deals_won <= total_deals`. This is a pure
    /// function with no side effects.
    pub fn validate(&self) -> Result<DealInputs, ValidationError> {
        let deals_won = self
            .deals_won
            .ok_or(ValidationError::MissingField("deals_won"))?;
        let total_deals = self
            .total_deals
            .ok_or(ValidationError::MissingField("total_deals"))?;
        let total_revenue = self
            .total_revenue
            .ok_or(ValidationError::MissingField("total_revenue"))?;

        if total_deals == 0 {
            return Err(ValidationError::ZeroTotalDeals);
        }
        if total_revenue.is_sign_negative() {
            return Err(ValidationError::NegativeValue("total_revenue"));
        }
        if let Some(cycle) = self.avg_sales_cycle_days {
            if cycle.is_sign_negative() {
                return Err(ValidationError::NegativeValue("avg_sales_cycle_days"));
            }
        }
        if deals_won > total_deals {
            return Err(ValidationError::WonExceedsTotal {
                deals_won,
                total_deals,
            });
        }

        Ok(DealInputs {
            deals_won,
            total_deals,
            total_revenue,
            avg_sales_cycle_days: self.avg_sales_cycle_days,
        })
    }

    /// The single-boolean form of the validity contract, re-evaluated on
    /// every field edit by the presentation layer.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// A fully validated input set, the only form the metrics engine accepts.
///
/// Fields are private so that the only way to obtain one is through
/// `DealInputsDraft::validate`; an invalid combination (e.g. more deals won
/// than closed) is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DealInputs {
    deals_won: u64,
    total_deals: u64,
    total_revenue: Decimal,
    avg_sales_cycle_days: Option<Decimal>,
}

impl DealInputs {
    pub fn deals_won(&self) -> u64 {
        self.deals_won
    }

    pub fn total_deals(&self) -> u64 {
        self.total_deals
    }

    /// Deals closed but not won. Never underflows: the validator guarantees
    /// `deals_won <= total_deals`.
    pub fn deals_lost(&self) -> u64 {
        self.total_deals - self.deals_won
    }

    pub fn total_revenue(&self) -> Decimal {
        self.total_revenue
    }

    pub fn avg_sales_cycle_days(&self) -> Option<Decimal> {
        self.avg_sales_cycle_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft(won: u64, total: u64, revenue: Decimal) -> DealInputsDraft {
        DealInputsDraft {
            deals_won: Some(won),
            total_deals: Some(total),
            total_revenue: Some(revenue),
            avg_sales_cycle_days: None,
        }
    }

    #[test]
    fn accepts_a_complete_well_ordered_draft() {
        let inputs = draft(20, 50, dec!(1_000_000)).validate().unwrap();
        assert_eq!(inputs.deals_won(), 20);
        assert_eq!(inputs.total_deals(), 50);
        assert_eq!(inputs.deals_lost(), 30);
        assert_eq!(inputs.total_revenue(), dec!(1_000_000));
    }

    #[test]
    fn accepts_the_boundary_where_every_deal_was_won() {
        assert!(draft(10, 10, dec!(500)).is_valid());
    }

    #[test]
    fn accepts_zero_deals_won_and_zero_revenue() {
        assert!(draft(0, 10, dec!(0)).is_valid());
    }

    #[test]
    fn rejects_zero_total_deals() {
        assert_eq!(
            draft(0, 0, dec!(100)).validate(),
            Err(ValidationError::ZeroTotalDeals)
        );
    }

    #[test]
    fn rejects_more_deals_won_than_closed() {
        assert_eq!(
            draft(5, 3, dec!(100)).validate(),
            Err(ValidationError::WonExceedsTotal {
                deals_won: 5,
                total_deals: 3
            })
        );
    }

    #[test]
    fn rejects_negative_revenue() {
        assert_eq!(
            draft(1, 2, dec!(-1)).validate(),
            Err(ValidationError::NegativeValue("total_revenue"))
        );
    }

    #[test]
    fn rejects_negative_sales_cycle_when_present() {
        let mut d = draft(1, 2, dec!(100));
        d.avg_sales_cycle_days = Some(dec!(-30));
        assert_eq!(
            d.validate(),
            Err(ValidationError::NegativeValue("avg_sales_cycle_days"))
        );
    }

    #[test]
    fn absent_required_fields_invalidate_the_draft() {
        let empty = DealInputsDraft::default();
        assert!(!empty.is_valid());
        assert_eq!(
            empty.validate(),
            Err(ValidationError::MissingField("deals_won"))
        );

        let mut partial = draft(1, 2, dec!(100));
        partial.total_revenue = None;
        assert_eq!(
            partial.validate(),
            Err(ValidationError::MissingField("total_revenue"))
        );
    }

    #[test]
    fn absent_optional_sales_cycle_is_still_valid() {
        assert!(draft(1, 2, dec!(100)).is_valid());
    }
}
