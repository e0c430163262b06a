use super::entity::{allowable_remuneration, corporate_tax, llp_tax};
use super::individual::individual_tax;
use super::inputs::{FieldError, Inputs};
use super::rates::FinancialYear;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("invalid input: {}", join_field_errors(.0))]
    InvalidInput(Vec<FieldError>),
    #[error("calculation failed: {0}")]
    CalculationFailure(String),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Business structures compared, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    PrivateLimitedCompany,
    Llp,
    ChainedStructure,
}

impl Structure {
    pub const ALL: [Structure; 3] = [
        Structure::PrivateLimitedCompany,
        Structure::Llp,
        Structure::ChainedStructure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Structure::PrivateLimitedCompany => "Private Limited Company",
            Structure::Llp => "Limited Liability Partnership",
            Structure::ChainedStructure => "Chained Structure (Pvt Ltd → Director → Pvt Ltd)",
        }
    }
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A taxed entity within a structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityLeg {
    pub entity: &'static str,
    pub taxable_income: Decimal,
    pub tax: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxResult {
    pub structure: Structure,
    /// Salary or remuneration received by the individual
    pub gross_pay: Decimal,
    pub entity_legs: Vec<EntityLeg>,
    pub entity_tax: Decimal,
    pub individual_tax: Decimal,
    pub total_tax: Decimal,
    /// Cash in hand after individual tax
    pub net_cash: Decimal,
}

impl TaxResult {
    fn new(
        structure: Structure,
        gross_pay: Decimal,
        entity_legs: Vec<EntityLeg>,
    ) -> Result<Self, ComparisonError> {
        let entity_tax = entity_legs
            .iter()
            .try_fold(Decimal::ZERO, |sum, leg| sum.checked_add(leg.tax))
            .ok_or_else(|| overflow(structure, "entity tax"))?;
        let individual_tax = individual_tax(gross_pay);
        let total_tax = entity_tax
            .checked_add(individual_tax)
            .ok_or_else(|| overflow(structure, "total tax"))?;
        let net_cash = gross_pay
            .checked_sub(individual_tax)
            .ok_or_else(|| overflow(structure, "net cash"))?;

        Ok(TaxResult {
            structure,
            gross_pay,
            entity_legs,
            entity_tax,
            individual_tax,
            total_tax,
            net_cash,
        })
    }
}

fn overflow(structure: Structure, what: &str) -> ComparisonError {
    ComparisonError::CalculationFailure(format!("{what} overflowed for {structure}"))
}

/// Results for all three structures from one set of inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub financial_year: FinancialYear,
    pub inputs: Inputs,
    /// Statutory cap on LLP partner remuneration; informational only
    pub allowable_remuneration: Decimal,
    pub results: [TaxResult; 3],
    pub most_efficient: Structure,
}

impl Comparison {
    pub fn result(&self, structure: Structure) -> &TaxResult {
        // results are built in Structure::ALL order
        let index = Structure::ALL
            .iter()
            .position(|s| *s == structure)
            .unwrap_or_default();
        &self.results[index]
    }

    pub fn is_most_efficient(&self, structure: Structure) -> bool {
        self.most_efficient == structure
    }

    /// True when the LLP partner is paid more than the statutory cap
    pub fn partner_salary_exceeds_allowable(&self) -> bool {
        self.inputs.salary_to_partner_llp > self.allowable_remuneration
    }
}

/// Compare the three structures for one set of inputs.
///
/// Fails without partial results: either every input is valid and all three
/// results are returned, or nothing is.
pub fn compare(inputs: &Inputs) -> Result<Comparison, ComparisonError> {
    let errors = inputs.validate();
    if !errors.is_empty() {
        return Err(ComparisonError::InvalidInput(errors));
    }

    let results = [
        private_limited_company(inputs)?,
        llp(inputs)?,
        chained_structure(inputs)?,
    ];
    let most_efficient = lowest_total_tax(&results);
    let allowable_remuneration = allowable_remuneration(inputs.income_before_salary);

    log::info!(
        "Compared {} structures, lowest total tax: {}",
        results.len(),
        most_efficient
    );

    Ok(Comparison {
        financial_year: FinancialYear::SUPPORTED,
        inputs: *inputs,
        allowable_remuneration,
        results,
        most_efficient,
    })
}

fn private_limited_company(inputs: &Inputs) -> Result<TaxResult, ComparisonError> {
    let salary = inputs.salary_to_director_plc;
    let taxable_income = (inputs.income_before_salary - salary).max(Decimal::ZERO);
    let leg = EntityLeg {
        entity: "Private Limited Company",
        taxable_income,
        tax: corporate_tax(taxable_income),
    };
    TaxResult::new(Structure::PrivateLimitedCompany, salary, vec![leg])
}

/// The partner's residual profit share is exempt in their hands, so only the
/// remuneration is taxed individually.
fn llp(inputs: &Inputs) -> Result<TaxResult, ComparisonError> {
    let remuneration = inputs.salary_to_partner_llp;
    let taxable_income = (inputs.income_before_salary - remuneration).max(Decimal::ZERO);
    let leg = EntityLeg {
        entity: "LLP",
        taxable_income,
        tax: llp_tax(taxable_income),
    };
    TaxResult::new(Structure::Llp, remuneration, vec![leg])
}

fn chained_structure(inputs: &Inputs) -> Result<TaxResult, ComparisonError> {
    let first_taxable = (inputs.income_before_salary - inputs.salary_to_director_plc)
        .max(Decimal::ZERO);
    let second_taxable = (inputs.salary_to_director_plc
        - inputs.expenses_in_second_plc
        - inputs.salary_to_director_second_plc)
        .max(Decimal::ZERO);

    let legs = vec![
        EntityLeg {
            entity: "First Private Limited Company",
            taxable_income: first_taxable,
            tax: corporate_tax(first_taxable),
        },
        EntityLeg {
            entity: "Second Private Limited Company",
            taxable_income: second_taxable,
            tax: corporate_tax(second_taxable),
        },
    ];
    TaxResult::new(
        Structure::ChainedStructure,
        inputs.salary_to_director_second_plc,
        legs,
    )
}

/// Ties go to the structure listed first
fn lowest_total_tax(results: &[TaxResult; 3]) -> Structure {
    let mut best = &results[0];
    for result in &results[1..] {
        if result.total_tax < best.total_tax {
            best = result;
        }
    }
    best.structure
}
