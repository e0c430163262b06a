use clap::{Parser, Subcommand};

mod cmd;
mod core;
mod format;

/// Compare tax outflow across Indian business structures (FY 2025-26)
#[derive(Parser, Debug)]
#[command(name = "structax", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare Private Limited Company, LLP and chained company structures
    Compare(cmd::compare::CompareCommand),
    /// Compare many scenarios from a CSV file
    Batch(cmd::batch::BatchCommand),
    /// Allowable LLP partner remuneration for a book profit
    Remuneration(cmd::remuneration::RemunerationCommand),
    /// Print the expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compare(compare) => compare.exec(),
        Command::Batch(batch) => batch.exec(),
        Command::Remuneration(remuneration) => remuneration.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
