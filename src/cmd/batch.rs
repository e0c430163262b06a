//! Batch command - compare many scenarios from a CSV file

use crate::core::{compare, Comparison, Inputs, Structure};
use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Optional column naming each scenario
pub const SCENARIO_COLUMN: &str = "scenario";

#[derive(Args, Debug)]
pub struct BatchCommand {
    /// CSV file with one scenario per row ("-" for stdin)
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Only output the most tax efficient structure for each scenario
    #[arg(long)]
    best_only: bool,
}

/// One output row per scenario and structure
#[derive(Debug, Clone, Serialize)]
struct BatchRow {
    scenario: String,
    structure: Structure,
    gross_pay: Decimal,
    entity_tax: Decimal,
    individual_tax: Decimal,
    total_tax: Decimal,
    net_cash: Decimal,
    most_efficient: bool,
}

impl BatchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let scenarios = if self.file.as_os_str() == "-" {
            read_scenarios(io::stdin().lock())?
        } else {
            let file = File::open(&self.file)
                .with_context(|| format!("opening {}", self.file.display()))?;
            read_scenarios(file)?
        };
        log::info!("Read {} scenarios", scenarios.len());

        let mut comparisons = Vec::with_capacity(scenarios.len());
        for (row_num, (label, inputs)) in scenarios.into_iter().enumerate() {
            let comparison =
                compare(&inputs).with_context(|| format!("row {} ({})", row_num + 1, label))?;
            comparisons.push((label, comparison));
        }

        write_rows(&comparisons, self.best_only, io::stdout())
    }
}

/// Read labelled inputs; rows without a scenario name are labelled by position
pub fn read_scenarios<R: Read>(reader: R) -> anyhow::Result<Vec<(String, Inputs)>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let label_index = headers.iter().position(|h| h == SCENARIO_COLUMN);

    let mut scenarios = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("reading row {}", i + 1))?;
        let inputs: Inputs = record
            .deserialize(Some(&headers))
            .with_context(|| format!("parsing row {}", i + 1))?;
        let label = label_index
            .and_then(|idx| record.get(idx))
            .filter(|s| !s.is_empty())
            .map_or_else(|| format!("row {}", i + 1), str::to_string);
        scenarios.push((label, inputs));
    }
    Ok(scenarios)
}

fn write_rows<W: Write>(
    comparisons: &[(String, Comparison)],
    best_only: bool,
    writer: W,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (label, comparison) in comparisons {
        for result in &comparison.results {
            let most_efficient = comparison.is_most_efficient(result.structure);
            if best_only && !most_efficient {
                continue;
            }
            wtr.serialize(BatchRow {
                scenario: label.clone(),
                structure: result.structure,
                gross_pay: result.gross_pay,
                entity_tax: result.entity_tax,
                individual_tax: result.individual_tax,
                total_tax: result.total_tax,
                net_cash: result.net_cash,
                most_efficient,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}
