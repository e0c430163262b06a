use super::round_rupee;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use structax_derive::InputSchema;

/// Largest amount accepted for any input (10^15 rupees).
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Description of one input field, generated by `#[derive(InputSchema)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputField {
    pub name: &'static str,
    pub flag: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// The five amounts a comparison is computed from, in whole rupees
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, InputSchema,
)]
pub struct Inputs {
    /// Total business income before any salary or remuneration
    #[serde(default, deserialize_with = "deserialize_amount")]
    #[schemars(with = "f64")]
    pub income_before_salary: Decimal,
    /// Salary paid by the private limited company to its director
    #[serde(default, deserialize_with = "deserialize_amount")]
    #[schemars(with = "f64")]
    pub salary_to_director_plc: Decimal,
    /// Remuneration paid by the LLP to a partner
    #[serde(default, deserialize_with = "deserialize_amount")]
    #[schemars(with = "f64")]
    pub salary_to_partner_llp: Decimal,
    /// Operating expenses of the second private limited company (chained structure)
    #[serde(default, deserialize_with = "deserialize_amount")]
    #[schemars(with = "f64")]
    pub expenses_in_second_plc: Decimal,
    /// Final salary paid by the second private limited company to the director
    #[serde(default, deserialize_with = "deserialize_amount")]
    #[schemars(with = "f64")]
    pub salary_to_director_second_plc: Decimal,
}

/// A rejected input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Inputs {
    /// Field names paired with their values, in declaration order
    pub fn amounts(&self) -> [(&'static str, Decimal); 5] {
        [
            ("income_before_salary", self.income_before_salary),
            ("salary_to_director_plc", self.salary_to_director_plc),
            ("salary_to_partner_llp", self.salary_to_partner_llp),
            ("expenses_in_second_plc", self.expenses_in_second_plc),
            ("salary_to_director_second_plc", self.salary_to_director_second_plc),
        ]
    }

    /// Fields that fail validation, in declaration order
    pub fn validate(&self) -> Vec<FieldError> {
        self.amounts()
            .into_iter()
            .filter_map(|(field, value)| {
                if value < Decimal::ZERO {
                    Some(FieldError {
                        field,
                        message: "Value cannot be negative",
                    })
                } else if value > MAX_AMOUNT {
                    Some(FieldError {
                        field,
                        message: "Value exceeds the supported maximum",
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Parse a user-entered rupee amount.
///
/// Grouping separators (`,` `_` and spaces) and a `₹` after any sign are
/// ignored, fractions are rounded to whole rupees, and anything that still
/// isn't a number counts as zero. Negative and out-of-range values are kept
/// (saturated to the `Decimal` bounds) so validation can reject them per field.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let cleaned: String = unsigned
        .trim_start()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();

    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    match Decimal::from_str(&cleaned) {
        Ok(amount) if negative => round_rupee(-amount),
        Ok(amount) => round_rupee(amount),
        Err(_) if is_plain_number(&cleaned) => {
            log::warn!("Amount '{}' is out of range", raw);
            if negative {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        }
        Err(_) => {
            log::warn!("Treating non-numeric amount '{}' as zero", raw);
            Decimal::ZERO
        }
    }
}

/// Digits with at most one decimal point
fn is_plain_number(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_digit() || c == '.')
        && s.matches('.').count() <= 1
}

/// clap value parser wrapper around [`parse_amount`]
pub fn amount_arg(raw: &str) -> Result<Decimal, String> {
    Ok(parse_amount(raw))
}

/// Accepts numbers or strings (including null and empty cells) for an amount
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    struct AmountVisitor;

    impl de::Visitor<'_> for AmountVisitor {
        type Value = Decimal;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a rupee amount")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
            if !v.is_finite() {
                log::warn!("Treating non-numeric amount '{}' as zero", v);
                return Ok(Decimal::ZERO);
            }
            match Decimal::try_from(v) {
                Ok(amount) => Ok(round_rupee(amount)),
                Err(_) => {
                    log::warn!("Amount '{}' is out of range", v);
                    Ok(if v < 0.0 { Decimal::MIN } else { Decimal::MAX })
                }
            }
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Decimal, E> {
            log::warn!("Treating non-numeric amount '{}' as zero", v);
            Ok(Decimal::ZERO)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
            Ok(parse_amount(v))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Decimal, E> {
            Ok(Decimal::ZERO)
        }

        fn visit_none<E: de::Error>(self) -> Result<Decimal, E> {
            Ok(Decimal::ZERO)
        }
    }

    deserializer.deserialize_any(AmountVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_and_grouped_amounts() {
        assert_eq!(parse_amount("1200000"), dec!(1200000));
        assert_eq!(parse_amount("12,00,000"), dec!(1200000));
        assert_eq!(parse_amount("₹ 12,00,000"), dec!(1200000));
        assert_eq!(parse_amount("1_200_000"), dec!(1200000));
    }

    #[test]
    fn parse_non_numeric_as_zero() {
        assert_eq!(parse_amount("abc"), dec!(0));
        assert_eq!(parse_amount(""), dec!(0));
        assert_eq!(parse_amount("   "), dec!(0));
    }

    #[test]
    fn parse_rounds_paise_to_whole_rupees() {
        assert_eq!(parse_amount("100.49"), dec!(100));
        assert_eq!(parse_amount("100.5"), dec!(101));
    }

    #[test]
    fn parse_keeps_negative_for_validation() {
        assert_eq!(parse_amount("-5000"), dec!(-5000));
        assert_eq!(parse_amount("-₹500"), dec!(-500));
        assert_eq!(parse_amount("- ₹ 1,500"), dec!(-1500));
        assert_eq!(parse_amount("₹-500"), dec!(-500));
        assert_eq!(parse_amount("+₹500"), dec!(500));
    }

    #[test]
    fn parse_saturates_out_of_range_amounts() {
        let huge = parse_amount("99999999999999999999999999999999");
        assert_eq!(huge, Decimal::MAX);
        assert_eq!(parse_amount("-99999999999999999999999999999999"), Decimal::MIN);

        let inputs = Inputs {
            income_before_salary: huge,
            salary_to_partner_llp: parse_amount("-₹99999999999999999999999999999999"),
            ..Inputs::default()
        };
        let messages: Vec<_> = inputs.validate().iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            vec!["Value exceeds the supported maximum", "Value cannot be negative"]
        );
    }

    #[test]
    fn json_out_of_range_number_fails_validation() {
        let json = r#"{ "income_before_salary": 1e40, "salary_to_director_plc": -1e40 }"#;
        let inputs: Inputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.income_before_salary, Decimal::MAX);
        assert_eq!(inputs.salary_to_director_plc, Decimal::MIN);
        assert_eq!(inputs.validate().len(), 2);
    }

    #[test]
    fn validate_reports_each_negative_field() {
        let inputs = Inputs {
            income_before_salary: dec!(-1),
            salary_to_partner_llp: dec!(-2),
            ..Inputs::default()
        };
        let errors = inputs.validate();
        assert_eq!(
            errors,
            vec![
                FieldError {
                    field: "income_before_salary",
                    message: "Value cannot be negative"
                },
                FieldError {
                    field: "salary_to_partner_llp",
                    message: "Value cannot be negative"
                },
            ]
        );
    }

    #[test]
    fn validate_rejects_amounts_above_maximum() {
        let inputs = Inputs {
            expenses_in_second_plc: MAX_AMOUNT + Decimal::ONE,
            ..Inputs::default()
        };
        let errors = inputs.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "expenses_in_second_plc");
    }

    #[test]
    fn validate_accepts_zero_and_positive() {
        let inputs = Inputs {
            income_before_salary: dec!(2000000),
            ..Inputs::default()
        };
        assert!(inputs.validate().is_empty());
    }

    #[test]
    fn json_accepts_numbers_strings_and_missing_fields() {
        let json = r#"{
            "income_before_salary": 2000000,
            "salary_to_director_plc": "12,00,000",
            "salary_to_partner_llp": "lots",
            "expenses_in_second_plc": 1000.4
        }"#;
        let inputs: Inputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.income_before_salary, dec!(2000000));
        assert_eq!(inputs.salary_to_director_plc, dec!(1200000));
        assert_eq!(inputs.salary_to_partner_llp, dec!(0));
        assert_eq!(inputs.expenses_in_second_plc, dec!(1000));
        assert_eq!(inputs.salary_to_director_second_plc, dec!(0));
    }

    #[test]
    fn input_fields_describe_every_amount() {
        let fields = Inputs::input_fields();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0].name, "income_before_salary");
        assert_eq!(fields[0].flag, "--income-before-salary");
        assert!(!fields[0].required);
        assert!(fields[3].description.contains("second private limited company"));
    }
}
