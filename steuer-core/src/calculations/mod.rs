//! Tax calculation modules for the holding and managing-director tools.
//!
//! Both calculators are total functions over their input records; they
//! never fail and never round. Rounding is left to [`crate::format`].

pub mod common;
pub mod holding;
pub mod managing_director;

pub use holding::{HoldingInput, HoldingResult, TAXABLE_SHARE, calculate_holding};
pub use managing_director::{
    Advantage, Comparison, DistributionMode, DistributionResult, DistributionTax,
    ManagingDirectorInput, ManagingDirectorResult, SOLIDARITY_SURCHARGE_RATE, SalaryResult,
    compare, distribution_net, salary_net,
};
