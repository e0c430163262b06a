//! Schema command - print expected input formats

use crate::cmd::batch::SCENARIO_COLUMN;
use crate::core::Inputs;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the `compare --file` document
    JsonSchema,
    /// CSV header row for the `batch` command
    CsvHeader,
    /// Input field descriptions
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => self.print_csv_header(),
            SchemaFormat::Fields => self.print_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(Inputs);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_header(&self) -> anyhow::Result<()> {
        let columns: Vec<&str> = std::iter::once(SCENARIO_COLUMN)
            .chain(Inputs::input_fields().iter().map(|f| f.name))
            .collect();
        println!("{}", columns.join(","));
        Ok(())
    }

    fn print_fields(&self) -> anyhow::Result<()> {
        println!("Input Fields (whole rupees, missing values count as zero)");
        println!("========================================================");
        println!();
        for field in Inputs::input_fields() {
            let req = if field.required { "required" } else { "optional" };
            println!("{:32} {:34} ({:8})  {}", field.name, field.flag, req, field.description);
        }
        println!();
        println!(
            "Batch CSV files may add a '{}' column to name each row.",
            SCENARIO_COLUMN
        );
        Ok(())
    }
}
