//! Entity-level taxes: private limited companies and LLPs.

use super::rates::{
    CESS_RATE, CORPORATE_RATE, CORPORATE_SURCHARGE_RATE, LLP_RATE, LLP_SURCHARGE_RATE,
    LLP_SURCHARGE_THRESHOLD, REMUNERATION_BALANCE_RATE, REMUNERATION_FIRST_TIER,
    REMUNERATION_FIRST_TIER_RATE,
};
use super::round_rupee;
use rust_decimal::Decimal;

/// Company tax on profit after salary and expenses.
///
/// The 10% surcharge is charged unconditionally, unlike the individual
/// surcharge which only starts above ₹50 lakh.
pub fn corporate_tax(income: Decimal) -> Decimal {
    let base = income * CORPORATE_RATE;
    let with_surcharge = base * (Decimal::ONE + CORPORATE_SURCHARGE_RATE);
    let tax = round_rupee(with_surcharge * (Decimal::ONE + CESS_RATE));
    log::debug!("Corporate tax: income={}, base={}, total={}", income, base, tax);
    tax
}

/// LLP tax on profit after partner remuneration
pub fn llp_tax(income: Decimal) -> Decimal {
    let mut tax = income * LLP_RATE;
    if income > LLP_SURCHARGE_THRESHOLD {
        tax += tax * LLP_SURCHARGE_RATE;
    }
    tax += tax * CESS_RATE;
    let tax = round_rupee(tax);
    log::debug!("LLP tax: income={}, total={}", income, tax);
    tax
}

/// Maximum deductible partner remuneration for a given book profit.
///
/// Advisory only: the comparison never caps the partner salary with it.
pub fn allowable_remuneration(book_profit: Decimal) -> Decimal {
    let allowable = if book_profit <= REMUNERATION_FIRST_TIER {
        book_profit * REMUNERATION_FIRST_TIER_RATE
    } else {
        REMUNERATION_FIRST_TIER * REMUNERATION_FIRST_TIER_RATE
            + (book_profit - REMUNERATION_FIRST_TIER) * REMUNERATION_BALANCE_RATE
    };
    allowable.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn corporate_tax_on_nothing() {
        assert_eq!(corporate_tax(dec!(0)), dec!(0));
    }

    #[test]
    fn corporate_tax_always_includes_surcharge() {
        assert_eq!(corporate_tax(dec!(1000000)), dec!(251680));
        // 100 * 0.22 * 1.10 * 1.04 = 25.168
        assert_eq!(corporate_tax(dec!(100)), dec!(25));
    }

    #[test]
    fn llp_tax_below_one_crore() {
        assert_eq!(llp_tax(dec!(1000000)), dec!(312000));
    }

    #[test]
    fn llp_tax_at_exactly_one_crore_has_no_surcharge() {
        assert_eq!(llp_tax(dec!(10000000)), dec!(3120000));
    }

    #[test]
    fn llp_tax_above_one_crore_has_surcharge() {
        assert_eq!(llp_tax(dec!(20000000)), dec!(6988800));
    }

    #[test]
    fn allowable_remuneration_first_tier() {
        assert_eq!(allowable_remuneration(dec!(0)), dec!(0));
        assert_eq!(allowable_remuneration(dec!(100000)), dec!(90000));
        assert_eq!(allowable_remuneration(dec!(300000)), dec!(270000));
    }

    #[test]
    fn allowable_remuneration_balance_tier() {
        assert_eq!(allowable_remuneration(dec!(1000000)), dec!(690000));
    }

    #[test]
    fn allowable_remuneration_never_negative() {
        assert_eq!(allowable_remuneration(dec!(-500000)), dec!(0));
    }
}
