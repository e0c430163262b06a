//! Individual income tax on salary and partner remuneration (New Regime).

use super::rates::{
    CESS_RATE, INDIVIDUAL_SLABS, INDIVIDUAL_SURCHARGE_RATE, INDIVIDUAL_SURCHARGE_THRESHOLD,
    STANDARD_DEDUCTION,
};
use super::round_rupee;
use rust_decimal::Decimal;
use serde::Serialize;

/// Step-by-step individual tax on a salary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualTaxBreakdown {
    pub salary: Decimal,
    /// Salary less the standard deduction, never negative
    pub taxable_income: Decimal,
    pub slab_tax: Decimal,
    pub surcharge: Decimal,
    pub cess: Decimal,
    /// Rounded to the nearest rupee
    pub total: Decimal,
}

/// Tax payable by an individual on `salary`
pub fn individual_tax(salary: Decimal) -> Decimal {
    individual_tax_breakdown(salary).total
}

pub fn individual_tax_breakdown(salary: Decimal) -> IndividualTaxBreakdown {
    let taxable_income = (salary - STANDARD_DEDUCTION).max(Decimal::ZERO);
    let slab_tax = slab_tax(taxable_income);

    let surcharge = if taxable_income > INDIVIDUAL_SURCHARGE_THRESHOLD {
        slab_tax * INDIVIDUAL_SURCHARGE_RATE
    } else {
        Decimal::ZERO
    };
    let cess = (slab_tax + surcharge) * CESS_RATE;
    let total = round_rupee(slab_tax + surcharge + cess);

    log::debug!(
        "Individual tax: salary={}, taxable={}, slab={}, surcharge={}, cess={}, total={}",
        salary,
        taxable_income,
        slab_tax,
        surcharge,
        cess,
        total
    );

    IndividualTaxBreakdown {
        salary,
        taxable_income,
        slab_tax,
        surcharge,
        cess,
        total,
    }
}

fn slab_tax(taxable_income: Decimal) -> Decimal {
    INDIVIDUAL_SLABS
        .iter()
        .find(|slab| slab.contains(taxable_income))
        .map_or(Decimal::ZERO, |slab| {
            slab.base_tax + (taxable_income - slab.floor) * slab.rate
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_salary_pays_no_tax() {
        assert_eq!(individual_tax(dec!(0)), dec!(0));
    }

    #[test]
    fn salary_at_standard_deduction_pays_no_tax() {
        assert_eq!(individual_tax(dec!(75000)), dec!(0));
    }

    #[test]
    fn salary_within_nil_slab_pays_no_tax() {
        // taxable income exactly 3 lakh
        assert_eq!(individual_tax(dec!(375000)), dec!(0));
    }

    #[test]
    fn ten_percent_slab_with_cess() {
        // taxable 8,00,000: 20,000 + 10,000 = 30,000, plus 4% cess
        let breakdown = individual_tax_breakdown(dec!(875000));
        assert_eq!(breakdown.taxable_income, dec!(800000));
        assert_eq!(breakdown.slab_tax, dec!(30000));
        assert_eq!(breakdown.surcharge, dec!(0));
        assert_eq!(breakdown.total, dec!(31200));
    }

    #[test]
    fn slab_boundaries_reproduce_fixed_amounts() {
        let cases = [
            (dec!(775000), dec!(20000)),
            (dec!(1075000), dec!(50000)),
            (dec!(1275000), dec!(80000)),
            (dec!(1575000), dec!(140000)),
        ];
        for (salary, slab) in cases {
            let breakdown = individual_tax_breakdown(salary);
            assert_eq!(breakdown.slab_tax, slab, "salary {salary}");
            assert_eq!(breakdown.total, round_rupee(slab * dec!(1.04)));
        }
    }

    #[test]
    fn fifteen_percent_slab() {
        // taxable 11,25,000: 50,000 + 18,750 = 68,750
        assert_eq!(individual_tax(dec!(1200000)), dec!(71500));
    }

    #[test]
    fn no_surcharge_at_exactly_fifty_lakh_taxable() {
        // taxable 50,00,000: 1,40,000 + 10,50,000 = 11,90,000
        let breakdown = individual_tax_breakdown(dec!(5075000));
        assert_eq!(breakdown.surcharge, dec!(0));
        assert_eq!(breakdown.total, dec!(1237600));
    }

    #[test]
    fn surcharge_above_fifty_lakh_taxable() {
        // taxable 60,00,000: 1,40,000 + 13,50,000 = 14,90,000, +10%, +4%
        let breakdown = individual_tax_breakdown(dec!(6075000));
        assert_eq!(breakdown.slab_tax, dec!(1490000));
        assert_eq!(breakdown.surcharge, dec!(149000));
        assert_eq!(breakdown.cess, dec!(65560));
        assert_eq!(breakdown.total, dec!(1704560));
    }

    #[test]
    fn rounds_to_nearest_rupee() {
        // taxable 3,00,010: 0.50 slab tax, 0.52 with cess
        assert_eq!(individual_tax(dec!(375010)), dec!(1));
        // taxable 3,00,001: 0.052 with cess
        assert_eq!(individual_tax(dec!(375001)), dec!(0));
    }

    #[test]
    fn non_negative_and_monotonic() {
        let mut previous = Decimal::ZERO;
        let mut salary = Decimal::ZERO;
        while salary <= dec!(12000000) {
            let tax = individual_tax(salary);
            assert!(tax >= Decimal::ZERO, "negative tax for {salary}");
            assert!(tax >= previous, "tax decreased at {salary}");
            previous = tax;
            salary += dec!(12500);
        }
    }
}
