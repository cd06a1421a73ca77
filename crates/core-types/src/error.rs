use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field '{0}' has not been entered")]
    MissingField(&'static str),

    #[error("Field '{0}' must not be negative")]
    NegativeValue(&'static str),

    #[error("Total deals closed must be greater than zero")]
    ZeroTotalDeals,

    #[error("Deals won ({deals_won}) cannot exceed total deals closed ({total_deals})")]
    WonExceedsTotal { deals_won: u64, total_deals: u64 },
}
