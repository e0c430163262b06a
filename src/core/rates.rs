use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Indian financial year (runs 1 April to 31 March)
/// The year value represents the end year (e.g., 2026 = FY 2025-26)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FinancialYear(pub i32);

impl FinancialYear {
    /// The only year whose rates are encoded below.
    pub const SUPPORTED: FinancialYear = FinancialYear(2026);

    /// Start date of the financial year (1 April of previous year)
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0 - 1, 4, 1).expect("1 April is a valid date")
    }

    /// End date of the financial year (31 March)
    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0, 3, 31).expect("31 March is a valid date")
    }

    /// Display as "2025-26" format
    pub fn display(&self) -> String {
        format!("{}-{:02}", self.0 - 1, self.0 % 100)
    }
}

impl std::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FY {}", self.display())
    }
}

/// One band of the individual (New Regime) slab schedule.
///
/// Tax on income inside the band is `base_tax + (income - floor) * rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slab {
    pub floor: Decimal,
    pub ceiling: Option<Decimal>,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

impl Slab {
    pub fn contains(&self, income: Decimal) -> bool {
        income > self.floor && self.ceiling.map_or(true, |c| income <= c)
    }
}

/// New Regime slabs for FY 2025-26, ordered by floor.
pub const INDIVIDUAL_SLABS: [Slab; 6] = [
    Slab {
        floor: dec!(0),
        ceiling: Some(dec!(300000)),
        base_tax: dec!(0),
        rate: dec!(0),
    },
    Slab {
        floor: dec!(300000),
        ceiling: Some(dec!(700000)),
        base_tax: dec!(0),
        rate: dec!(0.05),
    },
    Slab {
        floor: dec!(700000),
        ceiling: Some(dec!(1000000)),
        base_tax: dec!(20000),
        rate: dec!(0.10),
    },
    Slab {
        floor: dec!(1000000),
        ceiling: Some(dec!(1200000)),
        base_tax: dec!(50000),
        rate: dec!(0.15),
    },
    Slab {
        floor: dec!(1200000),
        ceiling: Some(dec!(1500000)),
        base_tax: dec!(80000),
        rate: dec!(0.20),
    },
    Slab {
        floor: dec!(1500000),
        ceiling: None,
        base_tax: dec!(140000),
        rate: dec!(0.30),
    },
];

/// Flat standard deduction on salary income
pub const STANDARD_DEDUCTION: Decimal = dec!(75000);
/// Individual surcharge applies above ₹50 lakh taxable income
pub const INDIVIDUAL_SURCHARGE_THRESHOLD: Decimal = dec!(5000000);
pub const INDIVIDUAL_SURCHARGE_RATE: Decimal = dec!(0.10);

/// Health and education cess, charged on tax plus surcharge
pub const CESS_RATE: Decimal = dec!(0.04);

/// Section 115BAA concessional company rate
pub const CORPORATE_RATE: Decimal = dec!(0.22);
/// Charged on every company regardless of income
pub const CORPORATE_SURCHARGE_RATE: Decimal = dec!(0.10);

pub const LLP_RATE: Decimal = dec!(0.30);
/// LLP surcharge applies above ₹1 crore
pub const LLP_SURCHARGE_THRESHOLD: Decimal = dec!(10000000);
pub const LLP_SURCHARGE_RATE: Decimal = dec!(0.12);

/// Partner remuneration limit: 90% of the first ₹3 lakh of book profit...
pub const REMUNERATION_FIRST_TIER: Decimal = dec!(300000);
pub const REMUNERATION_FIRST_TIER_RATE: Decimal = dec!(0.9);
/// ...and 60% of the balance
pub const REMUNERATION_BALANCE_RATE: Decimal = dec!(0.6);
