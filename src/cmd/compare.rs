//! Compare command - tax outflow and net cash for each business structure

use crate::cmd::read_inputs;
use crate::core::rates::{
    CESS_RATE, CORPORATE_RATE, CORPORATE_SURCHARGE_RATE, INDIVIDUAL_SURCHARGE_RATE,
    INDIVIDUAL_SURCHARGE_THRESHOLD, LLP_RATE, LLP_SURCHARGE_RATE, LLP_SURCHARGE_THRESHOLD,
    REMUNERATION_FIRST_TIER, STANDARD_DEDUCTION,
};
use crate::core::{
    amount_arg, compare, individual_tax_breakdown, Comparison, ComparisonError, FieldError,
    Inputs, Structure, TaxResult,
};
use crate::format::{format_inr, format_rate};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CompareCommand {
    /// JSON file with the inputs ("-" for stdin); flags override its values
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Total business income before any salary or remuneration
    #[arg(long, value_parser = amount_arg, allow_negative_numbers = true)]
    income_before_salary: Option<Decimal>,

    /// Salary paid by the private limited company to its director
    #[arg(long, value_parser = amount_arg, allow_negative_numbers = true)]
    salary_to_director_plc: Option<Decimal>,

    /// Remuneration paid by the LLP to a partner
    #[arg(long, value_parser = amount_arg, allow_negative_numbers = true)]
    salary_to_partner_llp: Option<Decimal>,

    /// Operating expenses of the second private limited company
    #[arg(long, value_parser = amount_arg, allow_negative_numbers = true)]
    expenses_in_second_plc: Option<Decimal>,

    /// Final salary paid by the second private limited company
    #[arg(long, value_parser = amount_arg, allow_negative_numbers = true)]
    salary_to_director_second_plc: Option<Decimal>,

    /// Show each taxed entity and the individual slab breakdown
    #[arg(short, long)]
    detailed: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Row for the comparison table output
#[derive(Debug, Clone, Tabled)]
struct StructureRow {
    #[tabled(rename = "Structure")]
    structure: String,

    #[tabled(rename = "Entity Tax")]
    entity_tax: String,

    #[tabled(rename = "Individual Tax")]
    individual_tax: String,

    #[tabled(rename = "Total Tax Outflow")]
    total_tax: String,

    #[tabled(rename = "Net Post-Tax Cash")]
    net_cash: String,
}

#[derive(Debug, Clone, Tabled)]
struct LegRow {
    #[tabled(rename = "Entity")]
    entity: String,

    #[tabled(rename = "Taxable Income")]
    taxable_income: String,

    #[tabled(rename = "Tax")]
    tax: String,
}

impl CompareCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let inputs = self.inputs()?;
        log::debug!("Comparing structures for {:?}", inputs);

        let comparison = match compare(&inputs) {
            Ok(comparison) => comparison,
            Err(ComparisonError::InvalidInput(errors)) => {
                report_field_errors(&errors);
                anyhow::bail!("{} invalid input field(s)", errors.len());
            }
            Err(err) => return Err(err.into()),
        };

        if comparison.partner_salary_exceeds_allowable() {
            log::warn!(
                "Partner remuneration {} exceeds the allowable {}",
                comparison.inputs.salary_to_partner_llp,
                comparison.allowable_remuneration
            );
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        } else {
            self.print_comparison(&comparison);
        }
        Ok(())
    }

    fn inputs(&self) -> anyhow::Result<Inputs> {
        let mut inputs = match &self.file {
            Some(path) => read_inputs(path)?,
            None => Inputs::default(),
        };

        let overrides = [
            (&mut inputs.income_before_salary, self.income_before_salary),
            (&mut inputs.salary_to_director_plc, self.salary_to_director_plc),
            (&mut inputs.salary_to_partner_llp, self.salary_to_partner_llp),
            (&mut inputs.expenses_in_second_plc, self.expenses_in_second_plc),
            (
                &mut inputs.salary_to_director_second_plc,
                self.salary_to_director_second_plc,
            ),
        ];
        for (field, flag) in overrides {
            if let Some(value) = flag {
                *field = value;
            }
        }
        Ok(inputs)
    }

    fn print_comparison(&self, comparison: &Comparison) {
        println!();
        let fy = comparison.financial_year;
        println!(
            "TAX STRUCTURE COMPARISON ({}, {} to {})",
            fy,
            fy.start_date().format("%d %b %Y"),
            fy.end_date().format("%d %b %Y")
        );
        println!();

        let rows: Vec<StructureRow> = comparison
            .results
            .iter()
            .map(|r| structure_row(r, comparison.is_most_efficient(r.structure)))
            .collect();
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!();

        println!(
            "Allowable Remuneration (LLP): {} (90% of book profit up to {}, 60% of the balance)",
            format_inr(comparison.allowable_remuneration),
            format_inr(REMUNERATION_FIRST_TIER)
        );
        if comparison.partner_salary_exceeds_allowable() {
            println!(
                "  Note: partner remuneration of {} is above this limit; it is still deducted in full above",
                format_inr(comparison.result(Structure::Llp).gross_pay)
            );
        }
        println!();

        if self.detailed {
            for result in &comparison.results {
                print_detail(result);
            }
        }

        print_assumptions();
    }
}

fn structure_row(result: &TaxResult, most_efficient: bool) -> StructureRow {
    let structure = if most_efficient {
        format!("{}\n✓ Most Tax Efficient", result.structure)
    } else {
        result.structure.to_string()
    };
    StructureRow {
        structure,
        entity_tax: format_inr(result.entity_tax),
        individual_tax: format_inr(result.individual_tax),
        total_tax: format_inr(result.total_tax),
        net_cash: format_inr(result.net_cash),
    }
}

fn print_detail(result: &TaxResult) {
    println!("{}", result.structure.name().to_uppercase());

    let legs: Vec<LegRow> = result
        .entity_legs
        .iter()
        .map(|leg| LegRow {
            entity: leg.entity.to_string(),
            taxable_income: format_inr(leg.taxable_income),
            tax: format_inr(leg.tax),
        })
        .collect();
    let table = Table::new(legs)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);

    let individual = individual_tax_breakdown(result.gross_pay);
    println!(
        "  Pay: {} | Taxable after deduction: {}",
        format_inr(individual.salary),
        format_inr(individual.taxable_income)
    );
    println!(
        "  Slab tax: {} | Surcharge: {} | Cess: {} | Individual tax: {}",
        format_inr(individual.slab_tax),
        format_inr(individual.surcharge),
        format_inr(individual.cess),
        format_inr(individual.total)
    );
    println!();
}

fn print_assumptions() {
    println!("TAX ASSUMPTIONS");
    println!(
        "  Corporate Tax: {} + {} surcharge + {} cess",
        format_rate(CORPORATE_RATE),
        format_rate(CORPORATE_SURCHARGE_RATE),
        format_rate(CESS_RATE)
    );
    println!(
        "  LLP Tax: {} + {} surcharge (if income > {}) + {} cess",
        format_rate(LLP_RATE),
        format_rate(LLP_SURCHARGE_RATE),
        format_inr(LLP_SURCHARGE_THRESHOLD),
        format_rate(CESS_RATE)
    );
    println!(
        "  Individual Tax: New Regime with {} standard deduction, {} surcharge above {}",
        format_inr(STANDARD_DEDUCTION),
        format_rate(INDIVIDUAL_SURCHARGE_RATE),
        format_inr(INDIVIDUAL_SURCHARGE_THRESHOLD)
    );
    println!("  LLP partner's profit share is exempt from individual taxation");
    println!();
}

fn report_field_errors(errors: &[FieldError]) {
    let fields = Inputs::input_fields();
    for error in errors {
        let flag = fields
            .iter()
            .find(|f| f.name == error.field)
            .map_or(error.field, |f| f.flag);
        eprintln!("  {}: {}", flag, error.message);
    }
}
