pub mod entity;
pub mod individual;
pub mod inputs;
pub mod rates;
pub mod structures;

use rust_decimal::{Decimal, RoundingStrategy};

// Flat public surface for domain types and functions.
#[allow(unused_imports)]
pub use self::{
    entity::{allowable_remuneration, corporate_tax, llp_tax},
    individual::{individual_tax, individual_tax_breakdown, IndividualTaxBreakdown},
    inputs::{amount_arg, parse_amount, FieldError, InputField, Inputs},
    rates::FinancialYear,
    structures::{compare, Comparison, ComparisonError, EntityLeg, Structure, TaxResult},
};

/// Round a tax amount to the nearest whole rupee (half away from zero)
pub fn round_rupee(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
